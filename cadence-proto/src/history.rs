//! Requests sent to the history service.
//!
//! Each envelope pairs the resolved domain id with the untouched client
//! request, so the history service validates task tokens itself.

use serde::{Deserialize, Serialize};

use crate::shared::WorkflowExecution;
use crate::workflow_service as api;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartWorkflowExecutionRequest {
    pub domain_uuid: String,
    pub start_request: api::StartWorkflowExecutionRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetWorkflowExecutionNextEventIdRequest {
    pub domain_uuid: String,
    pub execution: WorkflowExecution,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetWorkflowExecutionNextEventIdResponse {
    /// Id the next recorded event will get; all stored events are below it.
    pub event_id: i64,
    pub run_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordActivityTaskHeartbeatRequest {
    pub domain_uuid: String,
    pub heartbeat_request: api::RecordActivityTaskHeartbeatRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RespondActivityTaskCompletedRequest {
    pub domain_uuid: String,
    pub complete_request: api::RespondActivityTaskCompletedRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RespondActivityTaskFailedRequest {
    pub domain_uuid: String,
    pub failed_request: api::RespondActivityTaskFailedRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RespondActivityTaskCanceledRequest {
    pub domain_uuid: String,
    pub cancel_request: api::RespondActivityTaskCanceledRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RespondDecisionTaskCompletedRequest {
    pub domain_uuid: String,
    pub complete_request: api::RespondDecisionTaskCompletedRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RespondDecisionTaskFailedRequest {
    pub domain_uuid: String,
    pub failed_request: api::RespondDecisionTaskFailedRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalWorkflowExecutionRequest {
    pub domain_uuid: String,
    pub signal_request: api::SignalWorkflowExecutionRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminateWorkflowExecutionRequest {
    pub domain_uuid: String,
    pub terminate_request: api::TerminateWorkflowExecutionRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestCancelWorkflowExecutionRequest {
    pub domain_uuid: String,
    pub cancel_request: api::RequestCancelWorkflowExecutionRequest,
}
