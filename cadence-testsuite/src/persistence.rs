//! In-memory stores.
//!
//! Each store counts the calls it receives so tests can assert that a
//! rejected request never reached it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use cadence_core::{CadenceError, CadenceResult, ServerError};
use cadence_persistence::*;
use cadence_proto::{HistoryEvent, WorkflowExecution, WorkflowExecutionInfo};
use parking_lot::Mutex;
use uuid::Uuid;

/// Metadata store keyed by domain name
#[derive(Debug, Default)]
pub struct InMemoryMetadataManager {
    domains: Mutex<HashMap<String, GetDomainResponse>>,
    unavailable: AtomicBool,
    create_calls: AtomicUsize,
    get_calls: AtomicUsize,
    update_calls: AtomicUsize,
}

impl InMemoryMetadataManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// While set, every call fails with a persistence error.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn get_domain_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn create_domain_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_domain_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.get_domain_calls() + self.create_domain_calls() + self.update_domain_calls()
    }

    fn check_available(&self) -> CadenceResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CadenceError::Persistence(
                "metadata store unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl MetadataManager for InMemoryMetadataManager {
    async fn create_domain(
        &self,
        request: CreateDomainRequest,
    ) -> CadenceResult<CreateDomainResponse> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        let mut domains = self.domains.lock();
        if domains.contains_key(&request.name) {
            return Err(ServerError::domain_already_exists(format!(
                "Domain {} already exists.",
                request.name
            ))
            .into());
        }

        let id = Uuid::new_v4().to_string();
        domains.insert(
            request.name.clone(),
            GetDomainResponse {
                info: DomainInfo {
                    id: id.clone(),
                    name: request.name,
                    status: request.status,
                    description: request.description,
                    owner_email: request.owner_email,
                },
                config: DomainConfig {
                    retention: request.retention,
                    emit_metric: request.emit_metric,
                },
            },
        );
        Ok(CreateDomainResponse { id })
    }

    async fn get_domain(&self, name: &str) -> CadenceResult<GetDomainResponse> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        self.domains.lock().get(name).cloned().ok_or_else(|| {
            ServerError::entity_not_exists(format!("Domain {name} does not exist.")).into()
        })
    }

    async fn update_domain(&self, request: UpdateDomainRequest) -> CadenceResult<()> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        let mut domains = self.domains.lock();
        match domains.get_mut(&request.info.name) {
            Some(stored) if stored.info.id == request.info.id => {
                stored.info = request.info;
                stored.config = request.config;
                Ok(())
            }
            _ => Err(ServerError::entity_not_exists(format!(
                "Domain {} does not exist.",
                request.info.name
            ))
            .into()),
        }
    }
}

#[derive(Debug, Clone)]
struct StoredBatch {
    first_event_id: i64,
    batch: SerializedHistoryEventBatch,
}

type ExecutionKey = (String, String, String);

fn execution_key(domain_id: &str, execution: &WorkflowExecution) -> ExecutionKey {
    (
        domain_id.to_string(),
        execution.workflow_id.clone(),
        execution.run_id.clone(),
    )
}

/// History store holding encoded batches per execution.
///
/// Pages count batches, not events. Like a wide-row store, a full page always
/// carries a page marker, even when nothing follows it.
#[derive(Debug, Default)]
pub struct InMemoryHistoryManager {
    batches: Mutex<HashMap<ExecutionKey, Vec<StoredBatch>>>,
    error: Mutex<Option<CadenceError>>,
    calls: AtomicUsize,
}

impl InMemoryHistoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode `events` as one JSON batch and append it.
    pub fn append_batch(
        &self,
        domain_id: &str,
        execution: &WorkflowExecution,
        events: Vec<HistoryEvent>,
    ) {
        let first_event_id = events.first().map_or(0, |event| event.event_id);
        let batch = JsonHistorySerializer
            .serialize(&HistoryEventBatch::new(events))
            .unwrap_or_else(|err| panic!("failed to encode history batch: {err}"));
        self.append_raw_batch(domain_id, execution, first_event_id, batch);
    }

    /// Append an already encoded batch whose first event is `first_event_id`.
    pub fn append_raw_batch(
        &self,
        domain_id: &str,
        execution: &WorkflowExecution,
        first_event_id: i64,
        batch: SerializedHistoryEventBatch,
    ) {
        self.batches
            .lock()
            .entry(execution_key(domain_id, execution))
            .or_default()
            .push(StoredBatch {
                first_event_id,
                batch,
            });
    }

    /// Fail every read with `err` until cleared with `None`.
    pub fn fail_with(&self, err: Option<CadenceError>) {
        *self.error.lock() = err;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HistoryManager for InMemoryHistoryManager {
    async fn get_workflow_execution_history(
        &self,
        request: GetWorkflowExecutionHistoryRequest,
    ) -> CadenceResult<GetWorkflowExecutionHistoryResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.error.lock().clone() {
            return Err(err);
        }

        let start = if request.next_page_token.is_empty() {
            0
        } else {
            std::str::from_utf8(&request.next_page_token)
                .ok()
                .and_then(|offset| offset.parse::<usize>().ok())
                .ok_or_else(|| CadenceError::Persistence("invalid history page token".to_string()))?
        };

        let batches = self.batches.lock();
        let in_range: Vec<_> = batches
            .get(&execution_key(&request.domain_id, &request.execution))
            .map(|stored| {
                stored
                    .iter()
                    .filter(|stored| {
                        stored.first_event_id >= request.first_event_id
                            && stored.first_event_id < request.next_event_id
                    })
                    .collect()
            })
            .unwrap_or_default();

        let events: Vec<_> = in_range
            .iter()
            .skip(start)
            .take(request.page_size)
            .map(|stored| stored.batch.clone())
            .collect();

        let next_page_token = if request.page_size > 0 && events.len() == request.page_size {
            (start + events.len()).to_string().into_bytes()
        } else {
            Vec::new()
        };

        Ok(GetWorkflowExecutionHistoryResponse {
            events,
            next_page_token,
        })
    }
}

/// A listing call as received by [`InMemoryVisibilityManager`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibilityCall {
    ListOpen,
    ListOpenByWorkflowId(String),
    ListOpenByType(String),
    ListClosed,
    ListClosedByWorkflowId(String),
    ListClosedByType(String),
    ListClosedByStatus(cadence_proto::WorkflowExecutionCloseStatus),
}

/// Visibility store that records which listing was used
#[derive(Debug, Default)]
pub struct InMemoryVisibilityManager {
    open: Mutex<Vec<(String, WorkflowExecutionInfo)>>,
    closed: Mutex<Vec<(String, WorkflowExecutionInfo)>>,
    calls: Mutex<Vec<(VisibilityCall, ListWorkflowExecutionsRequest)>>,
}

impl InMemoryVisibilityManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_open(&self, domain_id: &str, info: WorkflowExecutionInfo) {
        self.open.lock().push((domain_id.to_string(), info));
    }

    pub fn add_closed(&self, domain_id: &str, info: WorkflowExecutionInfo) {
        self.closed.lock().push((domain_id.to_string(), info));
    }

    pub fn calls(&self) -> Vec<VisibilityCall> {
        self.calls.lock().iter().map(|(call, _)| call.clone()).collect()
    }

    /// The base request of the most recent listing
    pub fn last_request(&self) -> Option<ListWorkflowExecutionsRequest> {
        self.calls.lock().last().map(|(_, request)| request.clone())
    }

    fn list(
        &self,
        call: VisibilityCall,
        request: ListWorkflowExecutionsRequest,
        closed: bool,
        matches: impl Fn(&WorkflowExecutionInfo) -> bool,
    ) -> ListWorkflowExecutionsResponse {
        let source = if closed { &self.closed } else { &self.open };
        let mut executions: Vec<_> = source
            .lock()
            .iter()
            .filter(|(domain_id, info)| {
                let start_time = info.start_time.unwrap_or_default();
                *domain_id == request.domain_uuid
                    && start_time >= request.earliest_start_time
                    && start_time <= request.latest_start_time
                    && matches(info)
            })
            .map(|(_, info)| info.clone())
            .collect();
        executions.sort_by_key(|info| std::cmp::Reverse(info.start_time));
        executions.truncate(request.page_size);

        self.calls.lock().push((call, request));
        ListWorkflowExecutionsResponse {
            executions,
            next_page_token: None,
        }
    }
}

fn workflow_id_of(info: &WorkflowExecutionInfo) -> Option<&str> {
    info.execution.as_ref().map(|e| e.workflow_id.as_str())
}

fn type_name_of(info: &WorkflowExecutionInfo) -> Option<&str> {
    info.workflow_type.as_ref().map(|t| t.name.as_str())
}

#[async_trait]
impl VisibilityManager for InMemoryVisibilityManager {
    async fn list_open_workflow_executions(
        &self,
        request: ListWorkflowExecutionsRequest,
    ) -> CadenceResult<ListWorkflowExecutionsResponse> {
        Ok(self.list(VisibilityCall::ListOpen, request, false, |_| true))
    }

    async fn list_open_workflow_executions_by_workflow_id(
        &self,
        request: ListWorkflowExecutionsByWorkflowIdRequest,
    ) -> CadenceResult<ListWorkflowExecutionsResponse> {
        let workflow_id = request.workflow_id;
        Ok(self.list(
            VisibilityCall::ListOpenByWorkflowId(workflow_id.clone()),
            request.base,
            false,
            |info| workflow_id_of(info) == Some(workflow_id.as_str()),
        ))
    }

    async fn list_open_workflow_executions_by_type(
        &self,
        request: ListWorkflowExecutionsByTypeRequest,
    ) -> CadenceResult<ListWorkflowExecutionsResponse> {
        let type_name = request.workflow_type_name;
        Ok(self.list(
            VisibilityCall::ListOpenByType(type_name.clone()),
            request.base,
            false,
            |info| type_name_of(info) == Some(type_name.as_str()),
        ))
    }

    async fn list_closed_workflow_executions(
        &self,
        request: ListWorkflowExecutionsRequest,
    ) -> CadenceResult<ListWorkflowExecutionsResponse> {
        Ok(self.list(VisibilityCall::ListClosed, request, true, |_| true))
    }

    async fn list_closed_workflow_executions_by_workflow_id(
        &self,
        request: ListWorkflowExecutionsByWorkflowIdRequest,
    ) -> CadenceResult<ListWorkflowExecutionsResponse> {
        let workflow_id = request.workflow_id;
        Ok(self.list(
            VisibilityCall::ListClosedByWorkflowId(workflow_id.clone()),
            request.base,
            true,
            |info| workflow_id_of(info) == Some(workflow_id.as_str()),
        ))
    }

    async fn list_closed_workflow_executions_by_type(
        &self,
        request: ListWorkflowExecutionsByTypeRequest,
    ) -> CadenceResult<ListWorkflowExecutionsResponse> {
        let type_name = request.workflow_type_name;
        Ok(self.list(
            VisibilityCall::ListClosedByType(type_name.clone()),
            request.base,
            true,
            |info| type_name_of(info) == Some(type_name.as_str()),
        ))
    }

    async fn list_closed_workflow_executions_by_status(
        &self,
        request: ListClosedWorkflowExecutionsByStatusRequest,
    ) -> CadenceResult<ListWorkflowExecutionsResponse> {
        let status = request.status;
        Ok(self.list(
            VisibilityCall::ListClosedByStatus(status),
            request.base,
            true,
            |info| info.close_status == Some(status),
        ))
    }
}
