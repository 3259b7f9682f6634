//! # Example 01: Session Walkthrough
//!
//! A full login session against the seeded demo bank:
//! 1. Log in
//! 2. Print the statement (latest-first)
//! 3. Transfer to another account
//! 4. Toggle sorting and print again
//!
//! Run with: `cargo run -p minibank-demos --example 01_session_walkthrough`

use minibank_business as business;
use minibank_directory::AccountDirectory;
use minibank_reports::{SortOrder, Statement};
use rust_decimal_macros::dec;

fn main() {
    println!("=== Example 01: Session Walkthrough ===\n");

    let mut directory = AccountDirectory::seeded();

    // Log in as the first demo user
    let mut session = business::login(&directory, "js", 1111).expect("seeded credentials");
    let account = directory.find(&session.username).unwrap();
    println!("Hello {}\n", account.first_name());

    // Initial statement
    println!("{}\n", Statement::build(account, SortOrder::LatestFirst));

    // Transfer 500 EUR to Jessica
    business::transfer(&mut directory, &session, "jd", dec!(500)).expect("valid transfer");
    println!("Transferred 500 EUR to jd\n");

    // Refreshed statement, as the UI would redraw it
    let account = directory.find(&session.username).unwrap();
    println!("{}\n", Statement::build(account, SortOrder::LatestFirst));

    // Toggle sorting: rows ascending by amount, log untouched
    session.toggle_sort();
    let account = directory.find(&session.username).unwrap();
    println!(
        "{}\n",
        Statement::build(account, SortOrder::from_toggle(session.sorted))
    );

    println!("Session walkthrough completed");
}
