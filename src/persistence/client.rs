//! HTTP client for appending calculations to the hosted backend table.
//!
//! The backend exposes tables over a PostgREST-style REST API:
//! `POST {base}/rest/v1/{table}` with the row as a JSON body.

use super::store::CalculationStore;
use super::types::CalculationRecord;
use crate::utils::config::{BackendConfig, DEFAULT_TABLE};
use crate::utils::error::PersistenceError;
use log::{debug, info};
use reqwest::blocking::Client;
use std::time::Duration;

/// Store that inserts rows into a remote table
pub struct RestStore {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl RestStore {
    /// Create a store for `table` under `base_url`
    pub fn new(
        base_url: &str,
        table: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, PersistenceError> {
        validate_base_url(base_url)?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(PersistenceError::RequestFailed)?;

        Ok(Self {
            client,
            endpoint: table_endpoint(base_url, table),
            api_key,
        })
    }

    /// Create a store from config; `None` when no backend URL is set
    pub fn from_config(config: &BackendConfig) -> Result<Option<Self>, PersistenceError> {
        match config.url.as_deref() {
            Some(url) => Self::new(url, &config.table, config.api_key.clone(), config.timeout())
                .map(Some),
            None => Ok(None),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CalculationStore for RestStore {
    fn store(&self, record: &CalculationRecord) -> Result<(), PersistenceError> {
        info!("Saving calculation to: {}", self.endpoint);
        debug!("Record: {:?}", record);

        let mut request = self
            .client
            .post(&self.endpoint)
            .header("Prefer", "return=minimal")
            .json(record);

        if let Some(key) = &self.api_key {
            request = request
                .header("apikey", key)
                .bearer_auth(key);
        }

        let response = request.send().map_err(PersistenceError::RequestFailed)?;

        // Check HTTP status
        let status = response.status();
        if !status.is_success() {
            return Err(PersistenceError::Rejected {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        debug!("Backend accepted insert (HTTP {})", status);
        Ok(())
    }
}

/// Build the insert URL for a table
fn table_endpoint(base_url: &str, table: &str) -> String {
    let table = if table.is_empty() { DEFAULT_TABLE } else { table };
    format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table)
}

fn validate_base_url(base_url: &str) -> Result<(), PersistenceError> {
    if base_url.is_empty() {
        return Err(PersistenceError::InvalidUrl("URL is empty".to_string()));
    }

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(PersistenceError::InvalidUrl(format!(
            "{} (must start with http:// or https://)",
            base_url
        )));
    }

    Ok(())
}
