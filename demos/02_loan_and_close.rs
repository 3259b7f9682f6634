//! # Example 02: Loan and Closure
//!
//! Demonstrates the loan rule (a historical movement of at least a tenth
//! of the request) and account closure with credential confirmation.
//!
//! Run with: `cargo run -p minibank-demos --example 02_loan_and_close`

use minibank_business as business;
use minibank_directory::AccountDirectory;
use minibank_reports::{SortOrder, Statement};
use rust_decimal_macros::dec;

fn main() {
    println!("=== Example 02: Loan and Closure ===\n");

    let mut directory = AccountDirectory::seeded();
    let session = business::login(&directory, "ss", 4444).expect("seeded credentials");

    // Sarah's largest deposit is 1000, so 10000 is the most she can borrow
    match business::request_loan(&mut directory, &session, dec!(20000)) {
        Ok(()) => println!("Loan granted"),
        Err(err) => println!("Declined: {err}"),
    }

    business::request_loan(&mut directory, &session, dec!(8000)).expect("within loan limit");
    println!("Loan granted: 8000 EUR\n");

    let account = directory.find(&session.username).unwrap();
    println!("{}\n", Statement::build(account, SortOrder::LatestFirst));

    // Close the account; confirmation must repeat the credentials
    let removed = business::close_account(&mut directory, session, "ss", 4444)
        .expect("matching confirmation");
    println!("Account {} closed. Goodbye {}!", removed.username, removed.first_name());
    println!("Remaining accounts: {}", directory.len());
}
