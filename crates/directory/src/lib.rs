//! # Minibank Directory
//!
//! The account directory - an explicitly owned, in-memory store of
//! accounts keyed by username. All data is transient: the directory is
//! seeded at process start and lost on process end.
//!
//! ## Usage
//!
//! ```
//! use minibank_directory::AccountDirectory;
//! use rust_decimal_macros::dec;
//!
//! let mut directory = AccountDirectory::seeded();
//! directory.append_movement("js", dec!(500)).unwrap();
//! let account = directory.find("js").unwrap();
//! assert_eq!(account.movements.last().unwrap().amount, dec!(500));
//! ```

pub mod directory;
pub mod error;
pub mod seed;

pub use directory::AccountDirectory;
pub use error::{DirectoryError, DirectoryResult};
