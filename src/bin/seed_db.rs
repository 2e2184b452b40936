use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;

use expense_tracker::{
    AmountField, ExpenseForm, ExpenseStore, SQLiteExpenseStore, initialize_db,
};

/// A utility for creating a database of sample expenses for expense_tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const SAMPLE_EXPENSES: [(f64, &str, &str, &str); 8] = [
    (12.50, "Lunch", "food", "2024-01-15"),
    (3.20, "Bus fare", "transport", "2024-01-15"),
    (84.99, "Power bill", "utilities", "2024-01-18"),
    (18.00, "Movie tickets", "entertainment", "2024-01-20"),
    (56.35, "Groceries", "food", "2024-01-21"),
    (45.00, "Petrol", "transport", "2024-01-24"),
    (9.99, "Music subscription", "entertainment", "2024-02-01"),
    (25.00, "Birthday card and gift wrap", "other", "2024-02-03"),
];

/// Create a database filled with sample expenses for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        Some(extension) if !extension.is_empty() => {}
        _ => {
            eprintln!("Output path must include a file extension (e.g., 'expenses.db').");
            exit(1);
        }
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    let store = SQLiteExpenseStore::new(Arc::new(Mutex::new(conn)));

    println!("Adding {} sample expenses...", SAMPLE_EXPENSES.len());

    for (amount, description, category, date) in SAMPLE_EXPENSES {
        let expense = ExpenseForm {
            amount: Some(AmountField::Number(amount)),
            description: Some(description.to_owned()),
            category: Some(category.to_owned()),
            date: Some(date.to_owned()),
        }
        .validate()?;

        store.create(&expense)?;
    }

    println!("Success!");

    Ok(())
}
