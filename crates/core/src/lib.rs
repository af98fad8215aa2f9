//! Domain types shared by the database and API crates.
//!
//! Nothing in this crate performs I/O: it holds the error taxonomy, the
//! per-operation DTOs and the pure helpers that shape repository queries.

pub mod community;
pub mod error;
pub mod types;
