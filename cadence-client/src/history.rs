//! History service client interface.
//!
//! The history service owns the execution state machine. The frontend only
//! forwards validated, domain-resolved requests to it.

use async_trait::async_trait;
use cadence_core::{CadenceResult, CallContext};
use cadence_proto::history::*;
use cadence_proto::workflow_service::{
    RecordActivityTaskHeartbeatResponse, StartWorkflowExecutionResponse,
};

#[async_trait]
pub trait HistoryClient: Send + Sync {
    async fn start_workflow_execution(
        &self,
        ctx: &CallContext,
        request: StartWorkflowExecutionRequest,
    ) -> CadenceResult<StartWorkflowExecutionResponse>;

    async fn get_workflow_execution_next_event_id(
        &self,
        ctx: &CallContext,
        request: GetWorkflowExecutionNextEventIdRequest,
    ) -> CadenceResult<GetWorkflowExecutionNextEventIdResponse>;

    async fn record_activity_task_heartbeat(
        &self,
        ctx: &CallContext,
        request: RecordActivityTaskHeartbeatRequest,
    ) -> CadenceResult<RecordActivityTaskHeartbeatResponse>;

    async fn respond_activity_task_completed(
        &self,
        ctx: &CallContext,
        request: RespondActivityTaskCompletedRequest,
    ) -> CadenceResult<()>;

    async fn respond_activity_task_failed(
        &self,
        ctx: &CallContext,
        request: RespondActivityTaskFailedRequest,
    ) -> CadenceResult<()>;

    async fn respond_activity_task_canceled(
        &self,
        ctx: &CallContext,
        request: RespondActivityTaskCanceledRequest,
    ) -> CadenceResult<()>;

    async fn respond_decision_task_completed(
        &self,
        ctx: &CallContext,
        request: RespondDecisionTaskCompletedRequest,
    ) -> CadenceResult<()>;

    async fn respond_decision_task_failed(
        &self,
        ctx: &CallContext,
        request: RespondDecisionTaskFailedRequest,
    ) -> CadenceResult<()>;

    async fn signal_workflow_execution(
        &self,
        ctx: &CallContext,
        request: SignalWorkflowExecutionRequest,
    ) -> CadenceResult<()>;

    async fn terminate_workflow_execution(
        &self,
        ctx: &CallContext,
        request: TerminateWorkflowExecutionRequest,
    ) -> CadenceResult<()>;

    async fn request_cancel_workflow_execution(
        &self,
        ctx: &CallContext,
        request: RequestCancelWorkflowExecutionRequest,
    ) -> CadenceResult<()>;
}
