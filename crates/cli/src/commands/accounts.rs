//! Account listing

use minibank_directory::AccountDirectory;

/// Print the seeded accounts. PINs are intentionally not shown, even
/// though this is a demo with guessable credentials.
pub fn list(directory: &AccountDirectory) {
    println!("Accounts ({}):", directory.len());
    for account in directory.iter() {
        println!(
            "   {:<4} {:<24} movements: {:<2} rate: {}%",
            account.username,
            account.owner,
            account.movements.len(),
            account.interest_rate
        );
    }
}
