//! Question fetching and load sequencing.
//!
//! `QuestionSource` is the seam between the UI and the network: the binary
//! uses `HttpSource`, tests plug in canned payloads. `load_questions` turns
//! whatever the source produced into a terminal `LoadState`.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::TriviaError;
use crate::models::{LoadState, Snapshot};

/// Default Open Trivia DB endpoint
pub const DEFAULT_ENDPOINT: &str = "https://opentdb.com/api.php";

/// Default (and maximum) number of questions per request
pub const DEFAULT_AMOUNT: u32 = 50;

/// Something that can produce the raw JSON payload for one batch.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch(&self) -> Result<Value, TriviaError>;

    /// Human-readable description for logs and the header
    fn describe(&self) -> String;
}

/// Fetches questions over HTTP.
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
    endpoint: String,
    amount: u32,
}

impl HttpSource {
    pub fn new(endpoint: impl Into<String>, amount: u32) -> Self {
        Self::with_client(Client::new(), endpoint, amount)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>, amount: u32) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            amount,
        }
    }
}

#[async_trait]
impl QuestionSource for HttpSource {
    async fn fetch(&self) -> Result<Value, TriviaError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("amount", self.amount)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TriviaError::HttpStatus(response.status()));
        }

        Ok(response.json().await?)
    }

    fn describe(&self) -> String {
        format!("{}?amount={}", self.endpoint, self.amount)
    }
}

/// Run the session's single fetch and classify the outcome.
///
/// Transport failures and malformed payloads both map to the same error
/// message; only the log records which one happened.
pub async fn load_questions(source: &dyn QuestionSource) -> LoadState {
    let source_name = source.describe();
    info!(source = %source_name, "fetching questions");

    let snapshot = match source.fetch().await {
        Ok(payload) => Snapshot::from_payload(&payload),
        Err(e) => Err(e),
    };

    match snapshot {
        Ok(snapshot) if snapshot.is_empty() => {
            info!(source = %source_name, "no questions returned");
            LoadState::Empty
        }
        Ok(snapshot) => {
            info!(source = %source_name, count = snapshot.len(), "questions loaded");
            LoadState::Ready(snapshot)
        }
        Err(e) => {
            warn!(source = %source_name, error = %e, "failed to load questions");
            LoadState::failed()
        }
    }
}
