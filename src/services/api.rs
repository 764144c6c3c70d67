use crate::models::{Customer, Transaction};
use async_trait::async_trait;
use log::info;
use std::error::Error;

pub type ApiError = Box<dyn Error + Send + Sync>;

/// Read access to the two record collections exposed by the REST API.
#[async_trait]
pub trait RecordsApi {
    async fn fetch_customers(&self) -> Result<Vec<Customer>, ApiError>;
    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, ApiError>;
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_collection<T>(&self, path: &str) -> Result<Vec<T>, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        info!("Fetching {}", url);
        let response = self.client.get(&url).send().await?;
        let records: Vec<T> = response.error_for_status()?.json().await?;
        info!("Fetched {} records from /{}", records.len(), path);
        Ok(records)
    }
}

#[async_trait]
impl RecordsApi for ApiClient {
    async fn fetch_customers(&self) -> Result<Vec<Customer>, ApiError> {
        self.get_collection("customers").await
    }

    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_collection("transactions").await
    }
}
