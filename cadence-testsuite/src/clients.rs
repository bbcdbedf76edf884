//! Spying history and matching clients.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cadence_client::{
    BoxedHistoryClient, BoxedMatchingClient, ClientFactory, HistoryClient, MatchingClient,
};
use cadence_core::{CadenceError, CadenceResult, CallContext};
use cadence_proto::history::*;
use cadence_proto::matching;
use cadence_proto::workflow_service::{
    PollForActivityTaskResponse, RecordActivityTaskHeartbeatResponse,
    StartWorkflowExecutionResponse,
};
use parking_lot::Mutex;
use uuid::Uuid;

/// One call received by a spy client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub operation: &'static str,
    pub domain_uuid: String,
}

#[derive(Debug, Default)]
struct Script {
    calls: Mutex<Vec<RecordedCall>>,
    error: Mutex<Option<CadenceError>>,
    delay: Mutex<Option<Duration>>,
}

impl Script {
    async fn record(&self, operation: &'static str, domain_uuid: &str) -> CadenceResult<()> {
        self.calls.lock().push(RecordedCall {
            operation,
            domain_uuid: domain_uuid.to_string(),
        });

        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let error = self.error.lock().clone();
        match error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// History client that records calls and answers from a script
#[derive(Debug, Default)]
pub struct SpyHistoryClient {
    script: Script,
    next_event_ids: Mutex<HashMap<String, GetWorkflowExecutionNextEventIdResponse>>,
}

impl SpyHistoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every call with `err` until cleared with `None`.
    pub fn fail_with(&self, err: Option<CadenceError>) {
        *self.script.error.lock() = err;
    }

    /// Delay every answer, to exercise request deadlines.
    pub fn set_delay(&self, delay: Option<Duration>) {
        *self.script.delay.lock() = delay;
    }

    /// Answer next-event-id lookups for `workflow_id`.
    pub fn set_next_event_id(&self, workflow_id: &str, run_id: &str, event_id: i64) {
        self.next_event_ids.lock().insert(
            workflow_id.to_string(),
            GetWorkflowExecutionNextEventIdResponse {
                event_id,
                run_id: run_id.to_string(),
            },
        );
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.script.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.script.calls.lock().len()
    }
}

#[async_trait]
impl HistoryClient for SpyHistoryClient {
    async fn start_workflow_execution(
        &self,
        _ctx: &CallContext,
        request: StartWorkflowExecutionRequest,
    ) -> CadenceResult<StartWorkflowExecutionResponse> {
        self.script
            .record("StartWorkflowExecution", &request.domain_uuid)
            .await?;
        Ok(StartWorkflowExecutionResponse {
            run_id: Uuid::new_v4().to_string(),
        })
    }

    async fn get_workflow_execution_next_event_id(
        &self,
        _ctx: &CallContext,
        request: GetWorkflowExecutionNextEventIdRequest,
    ) -> CadenceResult<GetWorkflowExecutionNextEventIdResponse> {
        self.script
            .record("GetWorkflowExecutionNextEventId", &request.domain_uuid)
            .await?;
        self.next_event_ids
            .lock()
            .get(&request.execution.workflow_id)
            .cloned()
            .ok_or_else(|| {
                cadence_core::ServerError::entity_not_exists(format!(
                    "Workflow execution {} not found.",
                    request.execution.workflow_id
                ))
                .into()
            })
    }

    async fn record_activity_task_heartbeat(
        &self,
        _ctx: &CallContext,
        request: RecordActivityTaskHeartbeatRequest,
    ) -> CadenceResult<RecordActivityTaskHeartbeatResponse> {
        self.script
            .record("RecordActivityTaskHeartbeat", &request.domain_uuid)
            .await?;
        Ok(RecordActivityTaskHeartbeatResponse {
            cancel_requested: false,
        })
    }

    async fn respond_activity_task_completed(
        &self,
        _ctx: &CallContext,
        request: RespondActivityTaskCompletedRequest,
    ) -> CadenceResult<()> {
        self.script
            .record("RespondActivityTaskCompleted", &request.domain_uuid)
            .await
    }

    async fn respond_activity_task_failed(
        &self,
        _ctx: &CallContext,
        request: RespondActivityTaskFailedRequest,
    ) -> CadenceResult<()> {
        self.script
            .record("RespondActivityTaskFailed", &request.domain_uuid)
            .await
    }

    async fn respond_activity_task_canceled(
        &self,
        _ctx: &CallContext,
        request: RespondActivityTaskCanceledRequest,
    ) -> CadenceResult<()> {
        self.script
            .record("RespondActivityTaskCanceled", &request.domain_uuid)
            .await
    }

    async fn respond_decision_task_completed(
        &self,
        _ctx: &CallContext,
        request: RespondDecisionTaskCompletedRequest,
    ) -> CadenceResult<()> {
        self.script
            .record("RespondDecisionTaskCompleted", &request.domain_uuid)
            .await
    }

    async fn respond_decision_task_failed(
        &self,
        _ctx: &CallContext,
        request: RespondDecisionTaskFailedRequest,
    ) -> CadenceResult<()> {
        self.script
            .record("RespondDecisionTaskFailed", &request.domain_uuid)
            .await
    }

    async fn signal_workflow_execution(
        &self,
        _ctx: &CallContext,
        request: SignalWorkflowExecutionRequest,
    ) -> CadenceResult<()> {
        self.script
            .record("SignalWorkflowExecution", &request.domain_uuid)
            .await
    }

    async fn terminate_workflow_execution(
        &self,
        _ctx: &CallContext,
        request: TerminateWorkflowExecutionRequest,
    ) -> CadenceResult<()> {
        self.script
            .record("TerminateWorkflowExecution", &request.domain_uuid)
            .await
    }

    async fn request_cancel_workflow_execution(
        &self,
        _ctx: &CallContext,
        request: RequestCancelWorkflowExecutionRequest,
    ) -> CadenceResult<()> {
        self.script
            .record("RequestCancelWorkflowExecution", &request.domain_uuid)
            .await
    }
}

/// Matching client that hands out queued tasks.
///
/// An empty queue answers like an expired long poll.
#[derive(Debug, Default)]
pub struct SpyMatchingClient {
    script: Script,
    activity_tasks: Mutex<VecDeque<PollForActivityTaskResponse>>,
    decision_tasks: Mutex<VecDeque<matching::PollForDecisionTaskResponse>>,
}

impl SpyMatchingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_with(&self, err: Option<CadenceError>) {
        *self.script.error.lock() = err;
    }

    pub fn push_activity_task(&self, task: PollForActivityTaskResponse) {
        self.activity_tasks.lock().push_back(task);
    }

    pub fn push_decision_task(&self, task: matching::PollForDecisionTaskResponse) {
        self.decision_tasks.lock().push_back(task);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.script.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.script.calls.lock().len()
    }
}

#[async_trait]
impl MatchingClient for SpyMatchingClient {
    async fn poll_for_activity_task(
        &self,
        _ctx: &CallContext,
        request: matching::PollForActivityTaskRequest,
    ) -> CadenceResult<PollForActivityTaskResponse> {
        self.script
            .record("PollForActivityTask", &request.domain_uuid)
            .await?;
        Ok(self.activity_tasks.lock().pop_front().unwrap_or_default())
    }

    async fn poll_for_decision_task(
        &self,
        _ctx: &CallContext,
        request: matching::PollForDecisionTaskRequest,
    ) -> CadenceResult<matching::PollForDecisionTaskResponse> {
        self.script
            .record("PollForDecisionTask", &request.domain_uuid)
            .await?;
        Ok(self.decision_tasks.lock().pop_front().unwrap_or_default())
    }
}

/// Factory handing out the same spy clients every time
#[derive(Debug, Clone)]
pub struct StaticClientFactory {
    history: Arc<SpyHistoryClient>,
    matching: Arc<SpyMatchingClient>,
    build_delay: Option<Duration>,
    builds: Arc<AtomicUsize>,
}

impl StaticClientFactory {
    pub fn new(history: Arc<SpyHistoryClient>, matching: Arc<SpyMatchingClient>) -> Self {
        Self {
            history,
            matching,
            build_delay: None,
            builds: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Sleep before handing out each history client.
    pub fn with_build_delay(mut self, delay: Duration) -> Self {
        self.build_delay = Some(delay);
        self
    }

    /// History clients built so far, shared across clones.
    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClientFactory for StaticClientFactory {
    async fn new_history_client(&self) -> CadenceResult<BoxedHistoryClient> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.build_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.history.clone())
    }

    async fn new_matching_client(&self) -> CadenceResult<BoxedMatchingClient> {
        Ok(self.matching.clone())
    }
}

/// Factory whose backends can never be reached
#[derive(Debug, Clone)]
pub struct FailingClientFactory {
    message: String,
}

impl FailingClientFactory {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl ClientFactory for FailingClientFactory {
    async fn new_history_client(&self) -> CadenceResult<BoxedHistoryClient> {
        Err(CadenceError::Transport(self.message.clone()))
    }

    async fn new_matching_client(&self) -> CadenceResult<BoxedMatchingClient> {
        Err(CadenceError::Transport(self.message.clone()))
    }
}
