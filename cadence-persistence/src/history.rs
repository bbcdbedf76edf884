//! History store interface and the on-disk event batch encoding.
//!
//! Events are persisted in batches. Each batch is an encoded blob tagged with
//! an encoding type and a version; blobs written before the tags existed carry
//! neither and are read as the oldest format.

use async_trait::async_trait;
use cadence_core::{CadenceError, CadenceResult};
use cadence_proto::{HistoryEvent, WorkflowExecution};
use serde::{Deserialize, Serialize};

/// Version assumed for batches stored without one.
pub const DEFAULT_HISTORY_VERSION: i32 = 1;

/// Newest batch version this build can decode.
pub const MAX_SUPPORTED_HISTORY_VERSION: i32 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingType {
    #[default]
    Json,
    ThriftRw,
}

impl std::fmt::Display for EncodingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodingType::Json => write!(f, "json"),
            EncodingType::ThriftRw => write!(f, "thriftrw"),
        }
    }
}

/// A batch of events as persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedHistoryEventBatch {
    pub encoding_type: Option<EncodingType>,
    /// Zero means the batch predates versioning.
    pub version: i32,
    pub data: Vec<u8>,
}

impl SerializedHistoryEventBatch {
    /// Fill in the version and encoding of batches that were stored without them.
    pub fn apply_defaults(&mut self) {
        if self.version == 0 {
            self.version = DEFAULT_HISTORY_VERSION;
        }
        if self.encoding_type.is_none() {
            self.encoding_type = Some(EncodingType::default());
        }
    }
}

/// A decoded batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEventBatch {
    pub version: i32,
    pub events: Vec<HistoryEvent>,
}

impl HistoryEventBatch {
    pub fn new(events: Vec<HistoryEvent>) -> Self {
        Self {
            version: DEFAULT_HISTORY_VERSION,
            events,
        }
    }
}

/// Trait for history batch encoders
pub trait HistorySerializer: Send + Sync {
    fn serialize(&self, batch: &HistoryEventBatch) -> CadenceResult<SerializedHistoryEventBatch>;

    fn deserialize(&self, batch: &SerializedHistoryEventBatch) -> CadenceResult<HistoryEventBatch>;
}

/// JSON history encoding
#[derive(Debug, Default)]
pub struct JsonHistorySerializer;

impl HistorySerializer for JsonHistorySerializer {
    fn serialize(&self, batch: &HistoryEventBatch) -> CadenceResult<SerializedHistoryEventBatch> {
        let data = serde_json::to_vec(batch)
            .map_err(|e| CadenceError::Serialization(e.to_string()))?;
        Ok(SerializedHistoryEventBatch {
            encoding_type: Some(EncodingType::Json),
            version: batch.version,
            data,
        })
    }

    fn deserialize(&self, batch: &SerializedHistoryEventBatch) -> CadenceResult<HistoryEventBatch> {
        if batch.version > MAX_SUPPORTED_HISTORY_VERSION {
            return Err(CadenceError::Serialization(format!(
                "unsupported history version {}",
                batch.version
            )));
        }
        serde_json::from_slice(&batch.data).map_err(|e| CadenceError::Serialization(e.to_string()))
    }
}

/// Picks a serializer by encoding type
#[derive(Debug, Default)]
pub struct HistorySerializerFactory {
    json: JsonHistorySerializer,
}

impl HistorySerializerFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, encoding: EncodingType) -> CadenceResult<&dyn HistorySerializer> {
        match encoding {
            EncodingType::Json => Ok(&self.json),
            other => Err(CadenceError::Serialization(format!(
                "unknown history encoding type: {other}"
            ))),
        }
    }
}

/// Read of one page of stored batches.
///
/// Covers events with ids in `[first_event_id, next_event_id)`. An empty
/// `next_page_token` starts from the beginning of that range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetWorkflowExecutionHistoryRequest {
    pub domain_id: String,
    pub execution: WorkflowExecution,
    pub first_event_id: i64,
    pub next_event_id: i64,
    pub page_size: usize,
    pub next_page_token: Vec<u8>,
}

/// `next_page_token` is empty once the range is exhausted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetWorkflowExecutionHistoryResponse {
    pub events: Vec<SerializedHistoryEventBatch>,
    pub next_page_token: Vec<u8>,
}

#[async_trait]
pub trait HistoryManager: Send + Sync {
    async fn get_workflow_execution_history(
        &self,
        request: GetWorkflowExecutionHistoryRequest,
    ) -> CadenceResult<GetWorkflowExecutionHistoryResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_proto::EventType;

    #[test]
    fn test_apply_defaults_fills_missing_tags() {
        let mut batch = SerializedHistoryEventBatch {
            encoding_type: None,
            version: 0,
            data: vec![],
        };
        batch.apply_defaults();

        assert_eq!(batch.version, DEFAULT_HISTORY_VERSION);
        assert_eq!(batch.encoding_type, Some(EncodingType::Json));
    }

    #[test]
    fn test_apply_defaults_keeps_explicit_tags() {
        let mut batch = SerializedHistoryEventBatch {
            encoding_type: Some(EncodingType::ThriftRw),
            version: 7,
            data: vec![],
        };
        batch.apply_defaults();

        assert_eq!(batch.version, 7);
        assert_eq!(batch.encoding_type, Some(EncodingType::ThriftRw));
    }

    #[test]
    fn test_json_serializer_decodes_its_output() {
        let serializer = JsonHistorySerializer;
        let batch = HistoryEventBatch::new(vec![
            HistoryEvent::new(1, EventType::WorkflowExecutionStarted),
            HistoryEvent::new(2, EventType::DecisionTaskScheduled),
        ]);

        let stored = serializer.serialize(&batch).unwrap();
        let decoded = serializer.deserialize(&stored).unwrap();

        assert_eq!(decoded, batch);
    }

    #[test]
    fn test_json_serializer_rejects_future_versions() {
        let serializer = JsonHistorySerializer;
        let mut stored = serializer
            .serialize(&HistoryEventBatch::new(vec![]))
            .unwrap();
        stored.version = MAX_SUPPORTED_HISTORY_VERSION + 1;

        assert!(matches!(
            serializer.deserialize(&stored),
            Err(CadenceError::Serialization(_))
        ));
    }

    #[test]
    fn test_factory_rejects_unknown_encoding() {
        let factory = HistorySerializerFactory::new();
        assert!(factory.get(EncodingType::Json).is_ok());
        assert!(factory.get(EncodingType::ThriftRw).is_err());
    }
}
