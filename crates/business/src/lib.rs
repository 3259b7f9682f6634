//! # Minibank Business
//!
//! Command handlers for the demo bank: login, transfer, loan request,
//! account closure, statement sort toggle. Every handler takes the
//! account directory by reference and an explicit [`Session`] - there is
//! no ambient "current account" state.
//!
//! Invalid actions return typed errors rather than being silently
//! ignored: a CLI has a natural error channel, so every declined action
//! says why it was declined.

pub mod error;
pub mod operations;
pub mod session;

pub use error::{BusinessError, BusinessResult};
pub use operations::{close_account, login, request_loan, transfer};
pub use session::Session;
