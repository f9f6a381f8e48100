//! Result reporting: the sink contract, the HTTP implementation, and an
//! in-memory double for tests.

use std::env;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::SinkError;

/// Summary metrics submitted once for a finished session.
///
/// Field names match the backend's wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResultRecord {
    pub child_id: u64,
    pub game_type: String,
    pub level: u32,
    pub score: u32,
    pub max_score: u32,
    pub duration_seconds: i64,
    pub wrong_count: u32,
    pub success_rate: u32,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Backend endpoint accepting a finished session's summary metrics.
///
/// One best-effort request per session: no timeout, no retry, no backoff.
#[async_trait]
pub trait ResultSink: Send + Sync {
    /// Submit a finished session's result record.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` on transport failure or a non-success status.
    async fn send_game_result(&self, record: &GameResultRecord) -> Result<(), SinkError>;
}

//
// ─── HTTP SINK ─────────────────────────────────────────────────────────────────
//

/// POSTs result records as JSON to `<base_url>/game-results`.
#[derive(Clone)]
pub struct HttpResultSink {
    client: Client,
    base_url: String,
}

impl HttpResultSink {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Build a sink from `KIDPLAY_RESULTS_URL`, or `None` when unset.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("KIDPLAY_RESULTS_URL").ok()?;
        if base_url.trim().is_empty() {
            return None;
        }
        Some(Self::new(base_url))
    }
}

#[async_trait]
impl ResultSink for HttpResultSink {
    async fn send_game_result(&self, record: &GameResultRecord) -> Result<(), SinkError> {
        let url = format!("{}/game-results", self.base_url.trim_end_matches('/'));

        let response = self.client.post(url).json(record).send().await?;

        if !response.status().is_success() {
            return Err(SinkError::HttpStatus(response.status()));
        }
        Ok(())
    }
}

//
// ─── IN-MEMORY SINK ────────────────────────────────────────────────────────────
//

/// Test double capturing every submitted record, optionally failing.
#[derive(Clone, Default)]
pub struct InMemoryResultSink {
    records: Arc<Mutex<Vec<GameResultRecord>>>,
    fail: bool,
}

impl InMemoryResultSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose submissions always fail, for error-path tests.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    /// Snapshot of everything submitted so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn records(&self) -> Vec<GameResultRecord> {
        self.records.lock().expect("sink lock poisoned").clone()
    }
}

#[async_trait]
impl ResultSink for InMemoryResultSink {
    async fn send_game_result(&self, record: &GameResultRecord) -> Result<(), SinkError> {
        if self.fail {
            return Err(SinkError::HttpStatus(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }
        self.records
            .lock()
            .expect("sink lock poisoned")
            .push(record.clone());
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
