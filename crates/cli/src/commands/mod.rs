//! CLI command implementations

pub mod accounts;
pub mod operations;
pub mod statement;
