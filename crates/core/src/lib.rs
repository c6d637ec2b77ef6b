//! Domain types and pure logic for the Billed expense-report service.
//!
//! Nothing in this crate performs I/O: storage lives in `billed-db` and the
//! HTTP surface in `billed-api`.

pub mod attachment;
pub mod bill;
pub mod error;
pub mod format;
pub mod routes;
pub mod types;
pub mod user;
