//! Requests sent to the matching service.

use serde::{Deserialize, Serialize};

use crate::shared::{WorkflowExecution, WorkflowType};
use crate::workflow_service as api;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollForActivityTaskRequest {
    pub domain_uuid: String,
    pub poll_request: api::PollForActivityTaskRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollForDecisionTaskRequest {
    pub domain_uuid: String,
    pub poll_request: api::PollForDecisionTaskRequest,
}

/// Decision task as dispatched by matching, before history is attached.
///
/// `workflow_execution` is `None` when the poll expired without work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PollForDecisionTaskResponse {
    pub task_token: Vec<u8>,
    pub workflow_execution: Option<WorkflowExecution>,
    pub workflow_type: Option<WorkflowType>,
    pub previous_started_event_id: i64,
    pub started_event_id: i64,
}
