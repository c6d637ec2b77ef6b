#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use billed_core::bill::{Bill, CreateBill};
use billed_core::user::CurrentUser;
use billed_db::{
    BillsResource, FileUpload, MemoryStore, SessionStore, Store, StoreError, StoredFile,
    UploadedFile,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use billed_api::config::ServerConfig;
use billed_api::routes;
use billed_api::state::AppState;

pub const BOUNDARY: &str = "billed-test-boundary";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        max_upload_bytes: 1024 * 1024,
        public_base_url: "https://localhost:3456".to_string(),
        seed_fixtures: true,
        employee_email: "employee@tld.com".to_string(),
        employee_password: "employee".to_string(),
    }
}

/// A store pre-loaded with the four fixture bills.
pub fn seeded_store() -> Arc<dyn Store> {
    Arc::new(MemoryStore::seeded("https://localhost:3456").unwrap())
}

/// Build the full application around `store`, with the employee connected.
pub async fn build_test_app(store: Arc<dyn Store>) -> Router {
    let session = Arc::new(SessionStore::new());
    session
        .set_current_user(&CurrentUser::employee("employee@tld.com", "employee"))
        .await
        .unwrap();
    build_test_app_with_session(store, session)
}

/// Build the full application around `store` and `session`.
pub fn build_test_app_with_session(store: Arc<dyn Store>, session: Arc<SessionStore>) -> Router {
    build_test_app_with_config(store, session, test_config())
}

/// Build the full application with an explicit `config`.
pub fn build_test_app_with_config(
    store: Arc<dyn Store>,
    session: Arc<SessionStore>,
    config: ServerConfig,
) -> Router {
    let state = AppState {
        store,
        session,
        config: Arc::new(config),
    };
    routes::build_app(state)
}

// ---------------------------------------------------------------------------
// Store doubles
// ---------------------------------------------------------------------------

/// A `bills` resource that rejects with one HTTP status.
///
/// `create` always fails; `list` fails only when `fail_list` is set.
pub struct FailingBills {
    pub status: u16,
    pub fail_list: bool,
}

#[async_trait]
impl BillsResource for FailingBills {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        if self.fail_list {
            Err(StoreError::http(self.status))
        } else {
            Ok(Vec::new())
        }
    }

    async fn create(&self, _input: CreateBill) -> Result<Bill, StoreError> {
        Err(StoreError::http(self.status))
    }

    async fn upload(&self, file: FileUpload) -> Result<UploadedFile, StoreError> {
        Ok(UploadedFile {
            file_url: format!("https://localhost:3456/images/{}", file.file_name),
            key: "1234".to_string(),
        })
    }

    async fn file(&self, _key: &str) -> Result<Option<StoredFile>, StoreError> {
        Ok(None)
    }

    async fn remove_file(&self, _key: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

pub struct FailingStore {
    pub status: u16,
    pub fail_list: bool,
}

impl Store for FailingStore {
    fn bills(&self) -> Arc<dyn BillsResource> {
        Arc::new(FailingBills {
            status: self.status,
            fail_list: self.fail_list,
        })
    }
}

/// A `bills` resource backed by a real store whose `create` always fails.
///
/// Records the keys of the receipts it uploaded.
pub struct RejectingCreateBills {
    pub inner: Arc<dyn BillsResource>,
    pub status: u16,
    pub uploaded: Mutex<Vec<String>>,
}

#[async_trait]
impl BillsResource for RejectingCreateBills {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        self.inner.list().await
    }

    async fn create(&self, _input: CreateBill) -> Result<Bill, StoreError> {
        Err(StoreError::http(self.status))
    }

    async fn upload(&self, file: FileUpload) -> Result<UploadedFile, StoreError> {
        let uploaded = self.inner.upload(file).await?;
        self.uploaded.lock().unwrap().push(uploaded.key.clone());
        Ok(uploaded)
    }

    async fn file(&self, key: &str) -> Result<Option<StoredFile>, StoreError> {
        self.inner.file(key).await
    }

    async fn remove_file(&self, key: &str) -> Result<(), StoreError> {
        self.inner.remove_file(key).await
    }
}

pub struct RejectingCreateStore(pub Arc<RejectingCreateBills>);

impl RejectingCreateStore {
    pub fn new(status: u16) -> Self {
        Self(Arc::new(RejectingCreateBills {
            inner: MemoryStore::new("https://localhost:3456").bills(),
            status,
            uploaded: Mutex::new(Vec::new()),
        }))
    }
}

impl Store for RejectingCreateStore {
    fn bills(&self) -> Arc<dyn BillsResource> {
        self.0.clone()
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// One part of a `multipart/form-data` body.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        data: &'a [u8],
    },
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                file_name,
                content_type,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_multipart(app: Router, uri: &str, parts: &[Part<'_>]) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The opening tag of the element carrying `data-testid="{test_id}"`.
pub fn element_tag<'a>(html: &'a str, test_id: &str) -> Option<&'a str> {
    let needle = format!("data-testid=\"{test_id}\"");
    let at = html.find(&needle)?;
    let start = html[..at].rfind('<')?;
    let end = at + html[at..].find('>')?;
    Some(&html[start..=end])
}

/// Text between the opening tag of `test_id` and the next `<`.
pub fn element_text<'a>(html: &'a str, test_id: &str) -> Option<&'a str> {
    let tag = element_tag(html, test_id)?;
    let start = html.find(tag)? + tag.len();
    let end = start + html[start..].find('<')?;
    Some(&html[start..end])
}
