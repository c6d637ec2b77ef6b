//! In-memory store.
//!
//! Bills are kept in insertion order. Uploaded receipts are kept by key until
//! removed; nothing is written to disk.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use billed_core::attachment::sanitize_file_name;
use billed_core::bill::{Bill, CreateBill};
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::fixtures;
use crate::store::{BillsResource, FileUpload, Store, StoredFile, UploadedFile};

/// In-memory [`Store`].
///
/// Cheap to clone; clones share the same collections.
#[derive(Clone)]
pub struct MemoryStore {
    bills: Arc<MemoryBills>,
}

impl MemoryStore {
    /// An empty store whose upload URLs start with `public_base_url`.
    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            bills: Arc::new(MemoryBills::new(public_base_url.into(), Vec::new())),
        }
    }

    /// A store pre-loaded with the four fixture bills.
    pub fn seeded(public_base_url: impl Into<String>) -> Result<Self, StoreError> {
        let bills = fixtures::bills()?;
        tracing::debug!(count = bills.len(), "Seeded in-memory bill store");
        Ok(Self {
            bills: Arc::new(MemoryBills::new(public_base_url.into(), bills)),
        })
    }
}

impl Store for MemoryStore {
    fn bills(&self) -> Arc<dyn BillsResource> {
        self.bills.clone()
    }
}

/// The in-memory `bills` collection.
pub struct MemoryBills {
    public_base_url: String,
    bills: RwLock<Vec<Bill>>,
    files: RwLock<HashMap<String, StoredFile>>,
}

impl MemoryBills {
    fn new(public_base_url: String, bills: Vec<Bill>) -> Self {
        Self {
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            bills: RwLock::new(bills),
            files: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl BillsResource for MemoryBills {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        Ok(self.bills.read().await.clone())
    }

    async fn create(&self, input: CreateBill) -> Result<Bill, StoreError> {
        let bill = input.into_bill(uuid::Uuid::new_v4().simple().to_string());
        self.bills.write().await.push(bill.clone());
        tracing::info!(bill_id = %bill.id, email = %bill.email, "Bill created");
        Ok(bill)
    }

    async fn upload(&self, file: FileUpload) -> Result<UploadedFile, StoreError> {
        let key = uuid::Uuid::new_v4().simple().to_string();
        let file_name = sanitize_file_name(&file.file_name).to_string();
        let file_url = format!("{}/images/{key}-{file_name}", self.public_base_url);

        tracing::debug!(%key, %file_name, size = file.data.len(), "Receipt uploaded");
        self.files.write().await.insert(
            key.clone(),
            StoredFile {
                file_name,
                content_type: file.content_type,
                data: file.data,
            },
        );

        Ok(UploadedFile { file_url, key })
    }

    async fn file(&self, key: &str) -> Result<Option<StoredFile>, StoreError> {
        Ok(self.files.read().await.get(key).cloned())
    }

    async fn remove_file(&self, key: &str) -> Result<(), StoreError> {
        if self.files.write().await.remove(key).is_some() {
            tracing::debug!(%key, "Receipt removed");
        }
        Ok(())
    }
}
