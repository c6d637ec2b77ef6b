/// Errors returned by store implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing API answered with an HTTP error status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// A stored value could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// An HTTP failure with the standard `Erreur {status}` message.
    pub fn http(status: u16) -> Self {
        StoreError::Http {
            status,
            message: format!("Erreur {status}"),
        }
    }
}
