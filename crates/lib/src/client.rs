use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::{
    candidate::RemoveCandidate,
    constant::{REMOVE_CANDIDATES_PATH, REMOVE_USER_PATH},
    error::PrunerError,
};

/// Where removal candidates come from and where confirmed removals go.
///
/// The review UI only ever talks to this seam, so tests can swap the real
/// backend out for a canned source.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// One GET for the full candidate list. Callers issue this once per
    /// session (plus explicit user-requested refreshes); there is no
    /// automatic revalidation.
    async fn fetch_candidates(&self) -> Result<Vec<RemoveCandidate>, PrunerError>;

    /// Confirm the removal of a single candidate. The acknowledgement body
    /// is backend-defined and carried opaquely.
    async fn confirm_removal(&self, user_id: u64) -> Result<Value, PrunerError>;
}

pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, PrunerError> {
        if base_url.trim().is_empty() {
            return Err(PrunerError::ValidationError(
                "Backend URL must not be empty".to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| PrunerError::InternalError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl CandidateSource for BackendClient {
    async fn fetch_candidates(&self) -> Result<Vec<RemoveCandidate>, PrunerError> {
        let url = self.endpoint(REMOVE_CANDIDATES_PATH);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| PrunerError::BackendError(format!("Candidate fetch failed: {e}")))?;

        if !response.status().is_success() {
            return Err(PrunerError::BackendError(format!(
                "Candidate fetch returned {}",
                response.status()
            )));
        }

        response.json::<Vec<RemoveCandidate>>().await.map_err(|e| {
            PrunerError::SerializationError(format!("Failed to parse candidate list: {e}"))
        })
    }

    async fn confirm_removal(&self, user_id: u64) -> Result<Value, PrunerError> {
        let url = self.endpoint(REMOVE_USER_PATH);
        log::info!("Confirming removal of user {user_id}");

        let response = self
            .http
            .post(&url)
            .json(&json!({ "user_id": user_id }))
            .send()
            .await
            .map_err(|e| PrunerError::BackendError(format!("Removal confirmation failed: {e}")))?;

        if !response.status().is_success() {
            return Err(PrunerError::BackendError(format!(
                "Removal confirmation returned {}",
                response.status()
            )));
        }

        response.json::<Value>().await.map_err(|e| {
            PrunerError::SerializationError(format!(
                "Failed to parse removal acknowledgement: {e}"
            ))
        })
    }
}
