use async_trait::async_trait;

use crate::domain::entities::employee::Employee;

/// Anything that went wrong while retrieving the employee list.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// One-shot provider of the complete employee collection.
#[async_trait]
pub trait EmployeeSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Employee>, FetchError>;
}
