//! Visibility store interface.
//!
//! Listings are partitioned by domain id and ordered by start time,
//! newest first. Page tokens are opaque to the frontend.

use async_trait::async_trait;
use cadence_core::CadenceResult;
use cadence_proto::{WorkflowExecutionCloseStatus, WorkflowExecutionInfo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListWorkflowExecutionsRequest {
    pub domain_uuid: String,
    pub page_size: usize,
    pub next_page_token: Option<Vec<u8>>,
    pub earliest_start_time: i64,
    pub latest_start_time: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListWorkflowExecutionsByWorkflowIdRequest {
    pub base: ListWorkflowExecutionsRequest,
    pub workflow_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListWorkflowExecutionsByTypeRequest {
    pub base: ListWorkflowExecutionsRequest,
    pub workflow_type_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListClosedWorkflowExecutionsByStatusRequest {
    pub base: ListWorkflowExecutionsRequest,
    pub status: WorkflowExecutionCloseStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListWorkflowExecutionsResponse {
    pub executions: Vec<WorkflowExecutionInfo>,
    pub next_page_token: Option<Vec<u8>>,
}

#[async_trait]
pub trait VisibilityManager: Send + Sync {
    async fn list_open_workflow_executions(
        &self,
        request: ListWorkflowExecutionsRequest,
    ) -> CadenceResult<ListWorkflowExecutionsResponse>;

    async fn list_open_workflow_executions_by_workflow_id(
        &self,
        request: ListWorkflowExecutionsByWorkflowIdRequest,
    ) -> CadenceResult<ListWorkflowExecutionsResponse>;

    async fn list_open_workflow_executions_by_type(
        &self,
        request: ListWorkflowExecutionsByTypeRequest,
    ) -> CadenceResult<ListWorkflowExecutionsResponse>;

    async fn list_closed_workflow_executions(
        &self,
        request: ListWorkflowExecutionsRequest,
    ) -> CadenceResult<ListWorkflowExecutionsResponse>;

    async fn list_closed_workflow_executions_by_workflow_id(
        &self,
        request: ListWorkflowExecutionsByWorkflowIdRequest,
    ) -> CadenceResult<ListWorkflowExecutionsResponse>;

    async fn list_closed_workflow_executions_by_type(
        &self,
        request: ListWorkflowExecutionsByTypeRequest,
    ) -> CadenceResult<ListWorkflowExecutionsResponse>;

    async fn list_closed_workflow_executions_by_status(
        &self,
        request: ListClosedWorkflowExecutionsByStatusRequest,
    ) -> CadenceResult<ListWorkflowExecutionsResponse>;
}
