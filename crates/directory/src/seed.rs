//! Fixed demo data.
//!
//! Four accounts with hard-coded movement histories, interest rates and
//! PINs, created at process start. There is no persistence: this data is
//! rebuilt on every run and lost on exit.

use crate::directory::AccountDirectory;
use minibank_core::{Account, Movement};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn movements(amounts: &[Decimal]) -> Vec<Movement> {
    amounts.iter().map(|a| Movement::new(*a)).collect()
}

/// Build the demo directory.
pub fn seed() -> AccountDirectory {
    let mut directory = AccountDirectory::new();

    let seeds = [
        (
            "Jonas Schmedtmann",
            movements(&[
                dec!(200),
                dec!(450),
                dec!(-400),
                dec!(3000),
                dec!(-650),
                dec!(-130),
                dec!(70),
                dec!(1300),
            ]),
            dec!(1.2),
            1111,
        ),
        (
            "Jessica Davis",
            movements(&[
                dec!(5000),
                dec!(3400),
                dec!(-150),
                dec!(-790),
                dec!(-3210),
                dec!(-1000),
                dec!(8500),
                dec!(-30),
            ]),
            dec!(1.5),
            2222,
        ),
        (
            "Steven Thomas Williams",
            movements(&[
                dec!(200),
                dec!(-200),
                dec!(340),
                dec!(-300),
                dec!(-20),
                dec!(50),
                dec!(400),
                dec!(-460),
            ]),
            dec!(0.7),
            3333,
        ),
        (
            "Sarah Smith",
            movements(&[dec!(430), dec!(1000), dec!(700), dec!(50), dec!(90)]),
            dec!(1),
            4444,
        ),
    ];

    for (owner, movements, rate, pin) in seeds {
        let account = Account::with_movements(owner, movements, rate, pin)
            .expect("seed owner names are valid");
        directory
            .insert(account)
            .expect("seed usernames are unique");
    }

    directory
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_four_accounts() {
        let directory = seed();
        assert_eq!(directory.len(), 4);
        for username in ["js", "jd", "stw", "ss"] {
            assert!(directory.contains(username), "missing {username}");
        }
    }

    #[test]
    fn test_seed_balances() {
        let directory = seed();
        assert_eq!(directory.find("js").unwrap().balance(), dec!(3840));
        assert_eq!(directory.find("jd").unwrap().balance(), dec!(11720));
        assert_eq!(directory.find("stw").unwrap().balance(), dec!(10));
        assert_eq!(directory.find("ss").unwrap().balance(), dec!(2270));
    }

    #[test]
    fn test_seed_rates_and_pins() {
        let directory = seed();
        let js = directory.find("js").unwrap();
        assert_eq!(js.interest_rate, dec!(1.2));
        assert!(js.credentials_match("js", 1111));

        let stw = directory.find("stw").unwrap();
        assert_eq!(stw.interest_rate, dec!(0.7));
        assert_eq!(stw.movements.len(), 8);
    }
}
