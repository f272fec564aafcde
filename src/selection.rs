//! User column selection carried through an interactive session

/// Insertion-ordered set of selected column names.
///
/// Passed explicitly between the menu actions instead of living in global
/// state. Holds column names only; the table itself stays untouched.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    names: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column name. Returns `false` without growing the set when the
    /// name is already selected.
    pub fn add(&mut self, name: &str) -> bool {
        if self.names.iter().any(|n| n == name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Members in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Comma-joined form for menu headers
    pub fn display(&self) -> String {
        self.names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_order() {
        let mut selection = SelectionSet::new();
        assert!(selection.add("usd/pln"));
        assert!(selection.add("eur/usd"));

        let names: Vec<&str> = selection.names().collect();
        assert_eq!(names, vec!["usd/pln", "eur/usd"]);
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let mut selection = SelectionSet::new();
        assert!(selection.add("usd/pln"));
        assert!(!selection.add("usd/pln"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut selection = SelectionSet::new();
        selection.add("usd/pln");
        selection.add("chf/usd");
        selection.clear();
        assert!(selection.is_empty());

        // clearing an already-empty set stays empty
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_display() {
        let mut selection = SelectionSet::new();
        selection.add("eur/pln");
        selection.add("chf/usd");
        assert_eq!(selection.display(), "eur/pln, chf/usd");
    }
}
