//! Opaque tokens handed to clients.
//!
//! A task token ties a worker's completion, failure or heartbeat back to the
//! task it was given. A history continuation token carries everything needed
//! to resume a paginated history read, so the frontend keeps no cursor state.
//! Both are JSON documents; clients must treat them as opaque bytes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("failed to encode token: {0}")]
    Encode(String),
    #[error("failed to decode token: {0}")]
    Decode(String),
}

/// Correlation handle for a dispatched activity or decision task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskToken {
    domain_id: String,
    workflow_id: String,
    run_id: String,
    schedule_id: i64,
}

impl TaskToken {
    pub fn new(
        domain_id: impl Into<String>,
        workflow_id: impl Into<String>,
        run_id: impl Into<String>,
        schedule_id: i64,
    ) -> Self {
        Self {
            domain_id: domain_id.into(),
            workflow_id: workflow_id.into(),
            run_id: run_id.into(),
            schedule_id,
        }
    }

    pub fn domain_id(&self) -> &str {
        &self.domain_id
    }

    pub fn workflow_id(&self) -> &str {
        &self.workflow_id
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn schedule_id(&self) -> i64 {
        self.schedule_id
    }
}

/// Trait for task token codecs
pub trait TaskTokenSerializer: Send + Sync {
    fn serialize(&self, token: &TaskToken) -> Result<Vec<u8>, TokenError>;

    fn deserialize(&self, data: &[u8]) -> Result<TaskToken, TokenError>;
}

/// Default JSON task token codec
#[derive(Debug, Default)]
pub struct JsonTaskTokenSerializer;

impl JsonTaskTokenSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl TaskTokenSerializer for JsonTaskTokenSerializer {
    fn serialize(&self, token: &TaskToken) -> Result<Vec<u8>, TokenError> {
        serde_json::to_vec(token).map_err(|e| TokenError::Encode(e.to_string()))
    }

    fn deserialize(&self, data: &[u8]) -> Result<TaskToken, TokenError> {
        serde_json::from_slice(data).map_err(|e| TokenError::Decode(e.to_string()))
    }
}

/// Resumption state for one logical history read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryContinuationToken {
    run_id: String,
    next_event_id: i64,
    persistence_token: Vec<u8>,
}

impl HistoryContinuationToken {
    pub fn new(run_id: impl Into<String>, next_event_id: i64, persistence_token: Vec<u8>) -> Self {
        Self {
            run_id: run_id.into(),
            next_event_id,
            persistence_token,
        }
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Exclusive upper bound of the read, fixed when the read began
    pub fn next_event_id(&self) -> i64 {
        self.next_event_id
    }

    /// Page marker of the history store
    pub fn persistence_token(&self) -> &[u8] {
        &self.persistence_token
    }

    pub fn encode(&self) -> Result<Vec<u8>, TokenError> {
        serde_json::to_vec(self).map_err(|e| TokenError::Encode(e.to_string()))
    }

    pub fn decode(data: &[u8]) -> Result<Self, TokenError> {
        serde_json::from_slice(data).map_err(|e| TokenError::Decode(e.to_string()))
    }
}
