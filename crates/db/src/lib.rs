//! Storage layer for Billed.
//!
//! [`Store`] is the seam handlers talk to; [`MemoryStore`] is the in-process
//! implementation and [`SessionStore`] holds the connected user.

pub mod error;
pub mod fixtures;
pub mod memory;
pub mod session;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use session::SessionStore;
pub use store::{BillsResource, FileUpload, Store, StoredFile, UploadedFile};
