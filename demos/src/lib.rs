//! Example scenarios for Minibank. See the `[[example]]` entries in
//! Cargo.toml; each is a standalone walkthrough over the seeded demo
//! directory.
