//! Store traits.

use std::sync::Arc;

use async_trait::async_trait;
use billed_core::bill::{Bill, CreateBill};
use serde::Serialize;

use crate::error::StoreError;

/// A receipt file sent with a new bill.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// Where an uploaded receipt can be fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub file_url: String,
    pub key: String,
}

/// A receipt held by the store, as uploaded.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// The `bills` collection.
#[async_trait]
pub trait BillsResource: Send + Sync {
    /// All bills currently in the collection.
    async fn list(&self) -> Result<Vec<Bill>, StoreError>;

    /// Append a bill and return it with its assigned id.
    async fn create(&self, input: CreateBill) -> Result<Bill, StoreError>;

    /// Store a receipt file.
    async fn upload(&self, file: FileUpload) -> Result<UploadedFile, StoreError>;

    /// The receipt uploaded under `key`, if any.
    async fn file(&self, key: &str) -> Result<Option<StoredFile>, StoreError>;

    /// Drop the receipt uploaded under `key`. Unknown keys are ignored.
    async fn remove_file(&self, key: &str) -> Result<(), StoreError>;
}

/// Entry point to the stored collections.
pub trait Store: Send + Sync {
    fn bills(&self) -> Arc<dyn BillsResource>;
}
