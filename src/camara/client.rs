use crate::camara::models::{Deputado, DeputadosResponse, FilterCriteria};
use reqwest::{Client, Error as ReqwestError, StatusCode};
use thiserror::Error;
use tracing::{debug, error, info};

/// Production endpoint of the Câmara dos Deputados open-data API.
pub const DEFAULT_BASE_URL: &str = "https://dadosabertos.camara.leg.br/api/v2";

#[derive(Error, Debug)]
pub enum CamaraError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("API returned status {0}")]
    Status(StatusCode),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct CamaraClient {
    client: Client,
    base_url: String,
}

impl CamaraClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against a non-production base URL (dev override, stub servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch one page of deputies matching the given filters, in the
    /// fixed ascending order.
    pub async fn search_deputados(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<Deputado>, CamaraError> {
        let url = format!("{}/deputados", self.base_url);
        let params = criteria.query_params();

        debug!("GET {} with params {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(&params)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CamaraError::Status(status));
        }

        // Decode from the raw text so a malformed body can be logged
        let body = response.text().await?;
        let parsed: DeputadosResponse = serde_json::from_str(&body).map_err(|e| {
            error!("invalid deputados response: {}", e);
            error!("raw response: {}", body);
            e
        })?;

        info!("deputados search returned {} record(s)", parsed.dados.len());
        Ok(parsed.dados)
    }
}

impl Default for CamaraClient {
    fn default() -> Self {
        Self::new()
    }
}
