use async_trait::async_trait;
use reqwest::Client;

use crate::domain::entities::employee::Employee;
use crate::infra::http::payload::decode_users;
use crate::usecase::ports::source::{EmployeeSource, FetchError};

pub struct HttpEmployeeSource {
    client: Client,
    endpoint: String,
}

impl HttpEmployeeSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl EmployeeSource for HttpEmployeeSource {
    async fn fetch_all(&self) -> Result<Vec<Employee>, FetchError> {
        log::debug!("GET {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        decode_users(&body)
    }
}
