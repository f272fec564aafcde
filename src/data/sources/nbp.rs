//! NBP (Narodowy Bank Polski) exchange-rate source
//!
//! Fetches table A daily mid-rates quoted against PLN, one request per
//! currency of the form `GET <base>/<currency>/<start>/<end>`.

use super::RateSource;
use crate::currency::Currency;
use crate::data::{CurrencySeries, RateObservation};
use crate::error::{KantorError, Result};
use chrono::NaiveDate;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const NBP_BASE_URL: &str = "https://api.nbp.pl/api/exchangerates/rates/a";

/// NBP web API rate source (no API key required)
pub struct NbpRateSource {
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct NbpResponse {
    rates: Vec<RateObservation>,
}

impl NbpRateSource {
    /// Create a source pointing at the public NBP endpoint
    pub fn new() -> Result<Self> {
        Self::with_base_url(NBP_BASE_URL)
    }

    /// Create a source with a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| KantorError::Fetch(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Fetch every given currency sequentially, in order, failing fast on
    /// the first error: column alignment needs all of them, so a partial
    /// result is unusable.
    pub async fn fetch_window(
        &self,
        currencies: &[Currency],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CurrencySeries>> {
        let mut all = Vec::with_capacity(currencies.len());

        for &currency in currencies {
            log::debug!("fetching {} mid-rates for {}..{}", currency, start, end);
            all.push(self.fetch(currency, start, end).await?);
        }

        Ok(all)
    }

    fn parse_response(&self, currency: Currency, body: &str) -> Result<CurrencySeries> {
        let response: NbpResponse = serde_json::from_str(body)
            .map_err(|e| KantorError::Fetch(format!("JSON parse error: {}", e)))?;

        // Entries arrive already ordered by effective date; not re-sorted here.
        Ok(CurrencySeries::new(currency, response.rates))
    }
}

impl RateSource for NbpRateSource {
    async fn fetch(
        &self,
        currency: Currency,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<CurrencySeries> {
        let url = format!("{}/{}/{}/{}", self.base_url, currency.code(), start, end);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| KantorError::Fetch(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(KantorError::Fetch(format!(
                "NBP returned error status: {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| KantorError::Fetch(format!("Failed to read response: {}", e)))?;

        let series = self.parse_response(currency, &body)?;
        log::debug!("{}: {} observations", currency, series.len());
        Ok(series)
    }

    fn name(&self) -> &str {
        "nbp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "table": "A",
        "currency": "euro",
        "code": "EUR",
        "rates": [
            {"no": "001/A/NBP/2024", "effectiveDate": "2024-01-02", "mid": 4.3434},
            {"no": "002/A/NBP/2024", "effectiveDate": "2024-01-03", "mid": 4.3525}
        ]
    }"#;

    #[test]
    fn test_source_creation() {
        let source = NbpRateSource::new();
        assert!(source.is_ok());
    }

    #[test]
    fn test_parse_response() {
        let source = NbpRateSource::new().unwrap();
        let series = source.parse_response(Currency::Eur, FIXTURE).unwrap();

        assert_eq!(series.currency, Currency::Eur);
        assert_eq!(series.len(), 2);
        assert_eq!(series.observations[0].mid, 4.3434);
        assert_eq!(
            series.observations[1].date,
            "2024-01-03".parse::<NaiveDate>().unwrap()
        );
    }

    #[test]
    fn test_parse_empty_window() {
        let source = NbpRateSource::new().unwrap();
        let series = source
            .parse_response(Currency::Usd, r#"{"rates": []}"#)
            .unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_parse_malformed_body() {
        let source = NbpRateSource::new().unwrap();
        let result = source.parse_response(Currency::Eur, "<html>not json</html>");
        assert!(matches!(result, Err(KantorError::Fetch(_))));
    }

    #[test]
    fn test_parse_missing_mid_field() {
        let source = NbpRateSource::new().unwrap();
        let body = r#"{"rates": [{"effectiveDate": "2024-01-02"}]}"#;
        let result = source.parse_response(Currency::Eur, body);
        assert!(matches!(result, Err(KantorError::Fetch(_))));
    }
}
