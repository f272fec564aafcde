//! Interactive menu over a built rate table
//!
//! The loop only ever runs after the fetch-and-build phase has succeeded.
//! Everything a user can get wrong here (picking an already-selected pair,
//! saving with nothing selected, an out-of-range submenu number) is a normal
//! branch with a printed notice, never an abort; only a non-integer at an
//! integer prompt triggers an in-place re-prompt.

use crate::analysis::SummaryStats;
use crate::data::table::RateTable;
use crate::error::Result;
use crate::export;
use crate::selection::SelectionSet;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Run the main menu loop until the user quits (or stdin closes).
pub fn run(table: &RateTable, selected_path: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_with_input(table, selected_path, &mut input)
}

fn run_with_input<R: BufRead>(
    table: &RateTable,
    selected_path: &Path,
    input: &mut R,
) -> Result<()> {
    let mut selection = SelectionSet::new();

    loop {
        print_main_menu(&selection);

        let Some(choice) = read_choice(input)? else {
            break;
        };

        match choice.as_str() {
            "1" => select_rates(table, &mut selection, input)?,
            "2" => save_selected(table, &mut selection, selected_path)?,
            "3" => analyze_selected(table, &selection),
            "4" => break,
            _ => clear_screen(),
        }
    }

    Ok(())
}

fn print_main_menu(selection: &SelectionSet) {
    println!("{}", "Menu:".bold());
    println!("1. Select rates");
    println!(
        "2. Save selected rates (currently selected: {})",
        selection.display()
    );
    println!("3. Analyze selected currency pair");
    println!("4. Quit");
}

fn select_rates<R: BufRead>(
    table: &RateTable,
    selection: &mut SelectionSet,
    input: &mut R,
) -> Result<()> {
    clear_screen();
    println!("{}\n", "Available options:".bold());

    let names = table.column_names();
    for (i, name) in names.iter().enumerate() {
        println!("{}. {}", i + 1, name);
    }
    println!("{}. Clear all", names.len() + 1);
    println!("[any other number]. Back");

    let Some(choice) = prompt_integer(input)? else {
        return Ok(());
    };

    clear_screen();
    if choice >= 1 && (choice as usize) <= names.len() {
        let name = names[choice as usize - 1];
        if !selection.add(name) {
            println!("{}", "Already selected!".yellow());
        }
    } else if choice == (names.len() + 1) as i64 {
        selection.clear();
    }
    // any other number just falls back to the main menu

    Ok(())
}

fn save_selected(table: &RateTable, selection: &mut SelectionSet, path: &Path) -> Result<()> {
    clear_screen();

    if export::export_selected(table, selection, path)? {
        println!("Data for {} has been saved!\n", selection.display());
        // one-shot: a successful save consumes the selection
        selection.clear();
    } else {
        println!("No currency pair was selected.");
    }

    Ok(())
}

fn analyze_selected(table: &RateTable, selection: &SelectionSet) {
    clear_screen();

    for pair in selection.names() {
        match SummaryStats::for_column(table, pair) {
            Ok(stats) => {
                println!("\nStatistical metrics for {} for last 30 days are:", pair);
                println!("{}", stats);
            }
            Err(e) => println!("{}", e.to_string().yellow()),
        }
    }
    println!();
}

/// Read one trimmed line; `None` means stdin is closed.
fn read_choice<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    print!("\nChoose an option: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt until the user enters an integer; `None` means stdin is closed.
fn prompt_integer<R: BufRead>(input: &mut R) -> Result<Option<i64>> {
    loop {
        let Some(line) = read_choice(input)? else {
            return Ok(None);
        };
        match line.parse::<i64>() {
            Ok(n) => return Ok(Some(n)),
            Err(_) => println!("Please enter an integer."),
        }
    }
}

fn clear_screen() {
    // Best effort; harmless where ANSI escapes are not understood.
    print!("\x1B[2J\x1B[1;1H");
}
