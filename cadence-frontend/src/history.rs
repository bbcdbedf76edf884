//! Paged history reads.
//!
//! A page of stored batches is decoded into a flat event list. Whether another
//! page follows is decided here, and the resumption state is packed into a
//! [`HistoryContinuationToken`] so nothing is kept between calls.

use std::sync::Arc;

use cadence_core::{CadenceError, CadenceResult};
use cadence_persistence::{
    GetWorkflowExecutionHistoryRequest, HistoryManager, HistorySerializerFactory,
};
use cadence_proto::{History, HistoryEvent, WorkflowExecution};

use crate::token::HistoryContinuationToken;

/// Where a page read starts and stops
#[derive(Debug, Clone)]
pub struct HistoryRead {
    pub domain_id: String,
    pub execution: WorkflowExecution,
    pub first_event_id: i64,
    /// Exclusive upper bound, fixed for the whole logical read
    pub next_event_id: i64,
    pub page_size: usize,
    /// Store page marker; empty starts at `first_event_id`
    pub persistence_token: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryPage {
    pub history: History,
    /// Encoded continuation token, `None` once the read is complete
    pub next_page_token: Option<Vec<u8>>,
}

pub struct HistoryAssembler {
    history_manager: Arc<dyn HistoryManager>,
    serializers: HistorySerializerFactory,
}

impl HistoryAssembler {
    pub fn new(history_manager: Arc<dyn HistoryManager>) -> Self {
        Self {
            history_manager,
            serializers: HistorySerializerFactory::new(),
        }
    }

    /// Read and decode one page.
    ///
    /// A batch that fails to decode fails the whole page.
    pub async fn read_page(&self, read: HistoryRead) -> CadenceResult<HistoryPage> {
        let response = self
            .history_manager
            .get_workflow_execution_history(GetWorkflowExecutionHistoryRequest {
                domain_id: read.domain_id.clone(),
                execution: read.execution.clone(),
                first_event_id: read.first_event_id,
                next_event_id: read.next_event_id,
                page_size: read.page_size,
                next_page_token: read.persistence_token,
            })
            .await?;

        let mut events = Vec::new();
        for mut batch in response.events {
            batch.apply_defaults();
            let encoding = batch.encoding_type.unwrap_or_default();
            let decoded = self.serializers.get(encoding)?.deserialize(&batch)?;
            events.extend(decoded.events);
        }

        let next_page_token = continuation_token(
            &read.execution.run_id,
            read.next_event_id,
            response.next_page_token,
            &events,
        )?;

        Ok(HistoryPage {
            history: History { events },
            next_page_token,
        })
    }
}

fn continuation_token(
    run_id: &str,
    next_event_id: i64,
    persistence_token: Vec<u8>,
    events: &[HistoryEvent],
) -> CadenceResult<Option<Vec<u8>>> {
    let more_remain = match events.last() {
        Some(last) => !persistence_token.is_empty() && last.event_id < next_event_id - 1,
        None => false,
    };
    if !more_remain {
        return Ok(None);
    }

    HistoryContinuationToken::new(run_id, next_event_id, persistence_token)
        .encode()
        .map(Some)
        .map_err(|e| CadenceError::Serialization(e.to_string()))
}
