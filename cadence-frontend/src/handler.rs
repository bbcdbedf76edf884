//! Client-facing workflow service handler.
//!
//! Every operation follows the same path: wait for the backends, validate,
//! resolve the domain, call the backend with the domain id, shape the
//! response. Errors leave through [`ServerError`] only.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use cadence_client::{BoxedHistoryClient, BoxedMatchingClient, ClientFactory};
use cadence_core::{BadRequest, CadenceError, CadenceResult, CallContext, ServerError};
use cadence_persistence::{
    CreateDomainRequest, GetDomainResponse, HistoryManager, ListClosedWorkflowExecutionsByStatusRequest,
    ListWorkflowExecutionsByTypeRequest, ListWorkflowExecutionsByWorkflowIdRequest,
    ListWorkflowExecutionsRequest, ListWorkflowExecutionsResponse, MetadataManager,
    UpdateDomainRequest as StoreUpdateDomainRequest, VisibilityManager,
};
use cadence_proto::workflow_service::*;
use cadence_proto::{history as history_api, matching as matching_api};
use tokio::sync::Mutex;

use crate::domain_cache::{DomainCache, DomainCacheEntry};
use crate::gate::ReadinessGate;
use crate::history::{HistoryAssembler, HistoryRead};
use crate::options::FrontendOptions;
use crate::token::{HistoryContinuationToken, JsonTaskTokenSerializer, TaskToken, TaskTokenSerializer};
use crate::validation::{self, Listing, ListingFilter};

/// First event of every execution
const FIRST_EVENT_ID: i64 = 1;

/// Backend clients bound at start
struct Backends {
    history: BoxedHistoryClient,
    matching: BoxedMatchingClient,
}

/// The frontend request gateway.
///
/// Construct with [`WorkflowHandler::new`], then call
/// [`WorkflowHandler::start`] once the backend services are reachable.
/// Requests that arrive before that wait.
pub struct WorkflowHandler {
    options: FrontendOptions,
    metadata: Arc<dyn MetadataManager>,
    domain_cache: DomainCache,
    history_assembler: HistoryAssembler,
    visibility: Arc<dyn VisibilityManager>,
    token_serializer: Box<dyn TaskTokenSerializer>,
    backends: ReadinessGate<Backends>,
    /// Serializes `start` so the factory runs once per successful start
    start_lock: Mutex<()>,
}

impl WorkflowHandler {
    pub fn new(
        options: FrontendOptions,
        metadata: Arc<dyn MetadataManager>,
        history_store: Arc<dyn HistoryManager>,
        visibility: Arc<dyn VisibilityManager>,
    ) -> Self {
        tracing::debug!(?options, "Creating frontend handler");
        Self {
            domain_cache: DomainCache::new(metadata.clone(), options.domain_cache_refresh_interval),
            history_assembler: HistoryAssembler::new(history_store),
            token_serializer: Box::new(JsonTaskTokenSerializer::new()),
            backends: ReadinessGate::new(),
            start_lock: Mutex::new(()),
            options,
            metadata,
            visibility,
        }
    }

    /// Build the backend clients and start serving.
    ///
    /// On error the handler stays closed and `start` may be retried.
    pub async fn start(&self, factory: &dyn ClientFactory) -> CadenceResult<()> {
        let _starting = self.start_lock.lock().await;
        if self.backends.is_open() {
            return Err(CadenceError::Other(
                "frontend handler already started".to_string(),
            ));
        }

        let history = factory.new_history_client().await?;
        let matching = factory.new_matching_client().await?;
        self.backends
            .open(Backends { history, matching })
            .map_err(|_| CadenceError::Other("frontend handler already started".to_string()))?;

        tracing::info!("Frontend handler started");
        Ok(())
    }

    pub fn is_started(&self) -> bool {
        self.backends.is_open()
    }

    pub fn domain_cache(&self) -> &DomainCache {
        &self.domain_cache
    }

    /// Run a collaborator call under the request deadline.
    async fn call<T, F>(&self, ctx: &CallContext, fut: F) -> Result<T, ServerError>
    where
        F: Future<Output = CadenceResult<T>>,
    {
        ctx.or_timeout(self.options.backend_call_timeout)
            .run(fut)
            .await
            .map_err(ServerError::from)
    }

    async fn resolve_domain(
        &self,
        ctx: &CallContext,
        name: &str,
    ) -> Result<Arc<DomainCacheEntry>, ServerError> {
        self.call(ctx, self.domain_cache.resolve(name)).await
    }

    fn decode_task_token(&self, token: &[u8]) -> Result<TaskToken, ServerError> {
        validation::require_task_token(token)?;
        let task_token = self
            .token_serializer
            .deserialize(token)
            .map_err(|_| BadRequest::InvalidTaskToken)?;
        if task_token.domain_id().is_empty() {
            return Err(BadRequest::DomainNotSet.into());
        }
        Ok(task_token)
    }

    async fn list_executions(
        &self,
        closed: bool,
        base: ListWorkflowExecutionsRequest,
        filter: ListingFilter,
    ) -> CadenceResult<ListWorkflowExecutionsResponse> {
        let visibility = &self.visibility;
        match (closed, filter) {
            (false, ListingFilter::All) => visibility.list_open_workflow_executions(base).await,
            (false, ListingFilter::WorkflowId(workflow_id)) => {
                visibility
                    .list_open_workflow_executions_by_workflow_id(
                        ListWorkflowExecutionsByWorkflowIdRequest { base, workflow_id },
                    )
                    .await
            }
            (false, ListingFilter::WorkflowType(workflow_type_name)) => {
                visibility
                    .list_open_workflow_executions_by_type(ListWorkflowExecutionsByTypeRequest {
                        base,
                        workflow_type_name,
                    })
                    .await
            }
            (true, ListingFilter::All) => visibility.list_closed_workflow_executions(base).await,
            (true, ListingFilter::WorkflowId(workflow_id)) => {
                visibility
                    .list_closed_workflow_executions_by_workflow_id(
                        ListWorkflowExecutionsByWorkflowIdRequest { base, workflow_id },
                    )
                    .await
            }
            (true, ListingFilter::WorkflowType(workflow_type_name)) => {
                visibility
                    .list_closed_workflow_executions_by_type(ListWorkflowExecutionsByTypeRequest {
                        base,
                        workflow_type_name,
                    })
                    .await
            }
            // Only closed listings carry a status filter.
            (_, ListingFilter::Status(status)) => {
                visibility
                    .list_closed_workflow_executions_by_status(
                        ListClosedWorkflowExecutionsByStatusRequest { base, status },
                    )
                    .await
            }
        }
    }

    fn listing_base(
        &self,
        domain_id: &str,
        maximum_page_size: i32,
        next_page_token: Option<Vec<u8>>,
        listing: &Listing,
    ) -> ListWorkflowExecutionsRequest {
        ListWorkflowExecutionsRequest {
            domain_uuid: domain_id.to_string(),
            page_size: validation::page_size(
                maximum_page_size,
                self.options.visibility_max_page_size,
            ),
            next_page_token: next_page_token.filter(|token| !token.is_empty()),
            earliest_start_time: listing.earliest_start_time,
            latest_start_time: listing.latest_start_time,
        }
    }
}

fn describe(stored: &GetDomainResponse) -> (DomainInfo, DomainConfiguration) {
    let info = DomainInfo {
        name: stored.info.name.clone(),
        status: Some(stored.info.status),
        description: stored.info.description.clone(),
        owner_email: stored.info.owner_email.clone(),
        uuid: stored.info.id.clone(),
    };
    let configuration = DomainConfiguration {
        workflow_execution_retention_period_in_days: stored.config.retention,
        emit_metric: stored.config.emit_metric,
    };
    (info, configuration)
}

fn log_task_failure(operation: &str, token: &TaskToken, err: &ServerError) {
    tracing::error!(
        operation,
        workflow_id = token.workflow_id(),
        run_id = token.run_id(),
        schedule_id = token.schedule_id(),
        error = %err,
        "Task operation failed"
    );
}

#[async_trait]
impl WorkflowService for WorkflowHandler {
    type Error = ServerError;

    async fn is_healthy(&self) -> bool {
        true
    }

    async fn register_domain(
        &self,
        ctx: &CallContext,
        request: RegisterDomainRequest,
    ) -> Result<(), ServerError> {
        self.backends.wait().await;
        validation::require_domain(&request.name)?;

        let response = self
            .call(
                ctx,
                self.metadata.create_domain(CreateDomainRequest {
                    name: request.name.clone(),
                    status: DomainStatus::Registered,
                    description: request.description.unwrap_or_default(),
                    owner_email: request.owner_email,
                    retention: request.workflow_execution_retention_period_in_days,
                    emit_metric: request.emit_metric.unwrap_or_default(),
                }),
            )
            .await?;

        tracing::info!(domain = %request.name, domain_id = %response.id, "Register domain succeeded");
        Ok(())
    }

    async fn describe_domain(
        &self,
        ctx: &CallContext,
        request: DescribeDomainRequest,
    ) -> Result<DescribeDomainResponse, ServerError> {
        self.backends.wait().await;
        let name = validation::require_domain_name(request.name.as_deref())?;

        let stored = self.call(ctx, self.metadata.get_domain(name)).await?;
        let (info, configuration) = describe(&stored);
        Ok(DescribeDomainResponse {
            domain_info: Some(info),
            configuration: Some(configuration),
        })
    }

    async fn update_domain(
        &self,
        ctx: &CallContext,
        request: UpdateDomainRequest,
    ) -> Result<UpdateDomainResponse, ServerError> {
        self.backends.wait().await;
        let name = validation::require_domain_name(request.name.as_deref())?;

        let mut stored = self.call(ctx, self.metadata.get_domain(name)).await?;
        if let Some(updated) = request.updated_info {
            if let Some(description) = updated.description {
                stored.info.description = description;
            }
            if let Some(owner_email) = updated.owner_email {
                stored.info.owner_email = owner_email;
            }
        }
        if let Some(config) = request.configuration {
            if let Some(retention) = config.workflow_execution_retention_period_in_days {
                stored.config.retention = retention;
            }
            if let Some(emit_metric) = config.emit_metric {
                stored.config.emit_metric = emit_metric;
            }
        }

        self.call(
            ctx,
            self.metadata.update_domain(StoreUpdateDomainRequest {
                info: stored.info.clone(),
                config: stored.config.clone(),
            }),
        )
        .await?;
        self.domain_cache.invalidate(name);

        tracing::info!(domain = %name, "Update domain succeeded");
        let (info, configuration) = describe(&stored);
        Ok(UpdateDomainResponse {
            domain_info: Some(info),
            configuration: Some(configuration),
        })
    }

    async fn deprecate_domain(
        &self,
        ctx: &CallContext,
        request: DeprecateDomainRequest,
    ) -> Result<(), ServerError> {
        self.backends.wait().await;
        let name = validation::require_domain_name(request.name.as_deref())?;

        let mut stored = self.call(ctx, self.metadata.get_domain(name)).await?;
        match stored.info.status {
            DomainStatus::Deprecated => return Ok(()),
            DomainStatus::Deleted => {
                return Err(BadRequest::DomainDeleted {
                    name: name.to_string(),
                }
                .into())
            }
            DomainStatus::Registered => {}
        }

        stored.info.status = DomainStatus::Deprecated;
        self.call(
            ctx,
            self.metadata.update_domain(StoreUpdateDomainRequest {
                info: stored.info,
                config: stored.config,
            }),
        )
        .await?;
        self.domain_cache.invalidate(name);

        tracing::info!(domain = %name, "Deprecate domain succeeded");
        Ok(())
    }

    async fn poll_for_activity_task(
        &self,
        ctx: &CallContext,
        request: PollForActivityTaskRequest,
    ) -> Result<PollForActivityTaskResponse, ServerError> {
        let backends = self.backends.wait().await;
        tracing::debug!(domain = %request.domain, "Received PollForActivityTask");
        validation::require_domain(&request.domain)?;
        validation::require_task_list(request.task_list.as_ref())?;

        let domain = self.resolve_domain(ctx, &request.domain).await?;
        self.call(
            ctx,
            backends.matching.poll_for_activity_task(
                ctx,
                matching_api::PollForActivityTaskRequest {
                    domain_uuid: domain.id().to_string(),
                    poll_request: request,
                },
            ),
        )
        .await
        .inspect_err(|err| tracing::error!(error = %err, "PollForActivityTask failed"))
    }

    async fn poll_for_decision_task(
        &self,
        ctx: &CallContext,
        request: PollForDecisionTaskRequest,
    ) -> Result<PollForDecisionTaskResponse, ServerError> {
        let backends = self.backends.wait().await;
        tracing::debug!(domain = %request.domain, "Received PollForDecisionTask");
        validation::require_domain(&request.domain)?;
        validation::require_task_list(request.task_list.as_ref())?;

        let domain = self.resolve_domain(ctx, &request.domain).await?;
        let task = self
            .call(
                ctx,
                backends.matching.poll_for_decision_task(
                    ctx,
                    matching_api::PollForDecisionTaskRequest {
                        domain_uuid: domain.id().to_string(),
                        poll_request: request,
                    },
                ),
            )
            .await
            .inspect_err(|err| tracing::error!(error = %err, "PollForDecisionTask failed"))?;

        // Long poll expired without work.
        let Some(execution) = task.workflow_execution else {
            return Ok(PollForDecisionTaskResponse::default());
        };

        let page = self
            .call(
                ctx,
                self.history_assembler.read_page(HistoryRead {
                    domain_id: domain.id().to_string(),
                    execution: execution.clone(),
                    first_event_id: FIRST_EVENT_ID,
                    next_event_id: task.started_event_id + 1,
                    page_size: self.options.history_max_page_size,
                    persistence_token: Vec::new(),
                }),
            )
            .await
            .inspect_err(|err| {
                tracing::error!(
                    workflow_id = %execution.workflow_id,
                    run_id = %execution.run_id,
                    error = %err,
                    "Failed to read history for decision task"
                )
            })?;

        Ok(PollForDecisionTaskResponse {
            task_token: task.task_token,
            workflow_execution: Some(execution),
            workflow_type: task.workflow_type,
            previous_started_event_id: task.previous_started_event_id,
            started_event_id: task.started_event_id,
            history: Some(page.history),
            next_page_token: page.next_page_token,
        })
    }

    async fn record_activity_task_heartbeat(
        &self,
        ctx: &CallContext,
        request: RecordActivityTaskHeartbeatRequest,
    ) -> Result<RecordActivityTaskHeartbeatResponse, ServerError> {
        let backends = self.backends.wait().await;
        let token = self.decode_task_token(&request.task_token)?;

        self.call(
            ctx,
            backends.history.record_activity_task_heartbeat(
                ctx,
                history_api::RecordActivityTaskHeartbeatRequest {
                    domain_uuid: token.domain_id().to_string(),
                    heartbeat_request: request,
                },
            ),
        )
        .await
        .inspect_err(|err| log_task_failure("RecordActivityTaskHeartbeat", &token, err))
    }

    async fn respond_activity_task_completed(
        &self,
        ctx: &CallContext,
        request: RespondActivityTaskCompletedRequest,
    ) -> Result<RespondActivityTaskCompletedResponse, ServerError> {
        let backends = self.backends.wait().await;
        let token = self.decode_task_token(&request.task_token)?;

        self.call(
            ctx,
            backends.history.respond_activity_task_completed(
                ctx,
                history_api::RespondActivityTaskCompletedRequest {
                    domain_uuid: token.domain_id().to_string(),
                    complete_request: request,
                },
            ),
        )
        .await
        .inspect_err(|err| log_task_failure("RespondActivityTaskCompleted", &token, err))?;
        Ok(RespondActivityTaskCompletedResponse {})
    }

    async fn respond_activity_task_failed(
        &self,
        ctx: &CallContext,
        request: RespondActivityTaskFailedRequest,
    ) -> Result<RespondActivityTaskFailedResponse, ServerError> {
        let backends = self.backends.wait().await;
        let token = self.decode_task_token(&request.task_token)?;

        self.call(
            ctx,
            backends.history.respond_activity_task_failed(
                ctx,
                history_api::RespondActivityTaskFailedRequest {
                    domain_uuid: token.domain_id().to_string(),
                    failed_request: request,
                },
            ),
        )
        .await
        .inspect_err(|err| log_task_failure("RespondActivityTaskFailed", &token, err))?;
        Ok(RespondActivityTaskFailedResponse {})
    }

    async fn respond_activity_task_canceled(
        &self,
        ctx: &CallContext,
        request: RespondActivityTaskCanceledRequest,
    ) -> Result<RespondActivityTaskCanceledResponse, ServerError> {
        let backends = self.backends.wait().await;
        let token = self.decode_task_token(&request.task_token)?;

        self.call(
            ctx,
            backends.history.respond_activity_task_canceled(
                ctx,
                history_api::RespondActivityTaskCanceledRequest {
                    domain_uuid: token.domain_id().to_string(),
                    cancel_request: request,
                },
            ),
        )
        .await
        .inspect_err(|err| log_task_failure("RespondActivityTaskCanceled", &token, err))?;
        Ok(RespondActivityTaskCanceledResponse {})
    }

    async fn respond_decision_task_completed(
        &self,
        ctx: &CallContext,
        request: RespondDecisionTaskCompletedRequest,
    ) -> Result<RespondDecisionTaskCompletedResponse, ServerError> {
        let backends = self.backends.wait().await;
        let token = self.decode_task_token(&request.task_token)?;

        self.call(
            ctx,
            backends.history.respond_decision_task_completed(
                ctx,
                history_api::RespondDecisionTaskCompletedRequest {
                    domain_uuid: token.domain_id().to_string(),
                    complete_request: request,
                },
            ),
        )
        .await
        .inspect_err(|err| log_task_failure("RespondDecisionTaskCompleted", &token, err))?;
        Ok(RespondDecisionTaskCompletedResponse {})
    }

    async fn respond_decision_task_failed(
        &self,
        ctx: &CallContext,
        request: RespondDecisionTaskFailedRequest,
    ) -> Result<RespondDecisionTaskFailedResponse, ServerError> {
        let backends = self.backends.wait().await;
        let token = self.decode_task_token(&request.task_token)?;

        self.call(
            ctx,
            backends.history.respond_decision_task_failed(
                ctx,
                history_api::RespondDecisionTaskFailedRequest {
                    domain_uuid: token.domain_id().to_string(),
                    failed_request: request,
                },
            ),
        )
        .await
        .inspect_err(|err| log_task_failure("RespondDecisionTaskFailed", &token, err))?;
        Ok(RespondDecisionTaskFailedResponse {})
    }

    async fn start_workflow_execution(
        &self,
        ctx: &CallContext,
        request: StartWorkflowExecutionRequest,
    ) -> Result<StartWorkflowExecutionResponse, ServerError> {
        let backends = self.backends.wait().await;
        tracing::debug!(
            domain = %request.domain,
            workflow_id = %request.workflow_id,
            "Received StartWorkflowExecution"
        );
        validation::validate_start(&request)?;

        let domain = self.resolve_domain(ctx, &request.domain).await?;
        self.call(
            ctx,
            backends.history.start_workflow_execution(
                ctx,
                history_api::StartWorkflowExecutionRequest {
                    domain_uuid: domain.id().to_string(),
                    start_request: request,
                },
            ),
        )
        .await
        .inspect_err(|err| tracing::error!(error = %err, "StartWorkflowExecution failed"))
    }

    async fn get_workflow_execution_history(
        &self,
        ctx: &CallContext,
        request: GetWorkflowExecutionHistoryRequest,
    ) -> Result<GetWorkflowExecutionHistoryResponse, ServerError> {
        let backends = self.backends.wait().await;
        let execution = validation::validate_history(&request)?.clone();

        let continuation = match request.next_page_token.as_deref() {
            Some(token) if !token.is_empty() => {
                let token = HistoryContinuationToken::decode(token)
                    .map_err(|_| BadRequest::InvalidNextPageToken)?;
                if token.run_id() != execution.run_id {
                    return Err(BadRequest::InvalidNextPageToken.into());
                }
                Some(token)
            }
            _ => None,
        };

        let domain = self.resolve_domain(ctx, &request.domain).await?;

        // The request names the run, so the read and its token pin that run
        // whatever run id the lookup echoes back.
        let (next_event_id, persistence_token) = match continuation {
            Some(token) => (token.next_event_id(), token.persistence_token().to_vec()),
            None => {
                let response = self
                    .call(
                        ctx,
                        backends.history.get_workflow_execution_next_event_id(
                            ctx,
                            history_api::GetWorkflowExecutionNextEventIdRequest {
                                domain_uuid: domain.id().to_string(),
                                execution: execution.clone(),
                            },
                        ),
                    )
                    .await?;
                (response.event_id, Vec::new())
            }
        };

        let page = self
            .call(
                ctx,
                self.history_assembler.read_page(HistoryRead {
                    domain_id: domain.id().to_string(),
                    execution,
                    first_event_id: FIRST_EVENT_ID,
                    next_event_id,
                    page_size: validation::page_size(
                        request.maximum_page_size,
                        self.options.history_max_page_size,
                    ),
                    persistence_token,
                }),
            )
            .await?;

        Ok(GetWorkflowExecutionHistoryResponse {
            history: Some(page.history),
            next_page_token: page.next_page_token,
        })
    }

    async fn signal_workflow_execution(
        &self,
        ctx: &CallContext,
        request: SignalWorkflowExecutionRequest,
    ) -> Result<SignalWorkflowExecutionResponse, ServerError> {
        let backends = self.backends.wait().await;
        validation::validate_signal(&request)?;

        let domain = self.resolve_domain(ctx, &request.domain).await?;
        self.call(
            ctx,
            backends.history.signal_workflow_execution(
                ctx,
                history_api::SignalWorkflowExecutionRequest {
                    domain_uuid: domain.id().to_string(),
                    signal_request: request,
                },
            ),
        )
        .await
        .inspect_err(|err| tracing::error!(error = %err, "SignalWorkflowExecution failed"))?;
        Ok(SignalWorkflowExecutionResponse {})
    }

    async fn terminate_workflow_execution(
        &self,
        ctx: &CallContext,
        request: TerminateWorkflowExecutionRequest,
    ) -> Result<TerminateWorkflowExecutionResponse, ServerError> {
        let backends = self.backends.wait().await;
        validation::validate_terminate(&request)?;

        let domain = self.resolve_domain(ctx, &request.domain).await?;
        self.call(
            ctx,
            backends.history.terminate_workflow_execution(
                ctx,
                history_api::TerminateWorkflowExecutionRequest {
                    domain_uuid: domain.id().to_string(),
                    terminate_request: request,
                },
            ),
        )
        .await
        .inspect_err(|err| tracing::error!(error = %err, "TerminateWorkflowExecution failed"))?;
        Ok(TerminateWorkflowExecutionResponse {})
    }

    async fn request_cancel_workflow_execution(
        &self,
        ctx: &CallContext,
        request: RequestCancelWorkflowExecutionRequest,
    ) -> Result<RequestCancelWorkflowExecutionResponse, ServerError> {
        let backends = self.backends.wait().await;
        validation::validate_cancel(&request)?;

        let domain = self.resolve_domain(ctx, &request.domain).await?;
        self.call(
            ctx,
            backends.history.request_cancel_workflow_execution(
                ctx,
                history_api::RequestCancelWorkflowExecutionRequest {
                    domain_uuid: domain.id().to_string(),
                    cancel_request: request,
                },
            ),
        )
        .await
        .inspect_err(|err| {
            tracing::error!(error = %err, "RequestCancelWorkflowExecution failed")
        })?;
        Ok(RequestCancelWorkflowExecutionResponse {})
    }

    async fn list_open_workflow_executions(
        &self,
        ctx: &CallContext,
        request: ListOpenWorkflowExecutionsRequest,
    ) -> Result<ListOpenWorkflowExecutionsResponse, ServerError> {
        self.backends.wait().await;
        let listing = validation::validate_list_open(&request)?;

        let domain = self.resolve_domain(ctx, &request.domain).await?;
        let base = self.listing_base(
            domain.id(),
            request.maximum_page_size,
            request.next_page_token,
            &listing,
        );
        let response = self
            .call(ctx, self.list_executions(false, base, listing.filter))
            .await?;

        Ok(ListOpenWorkflowExecutionsResponse {
            executions: response.executions,
            next_page_token: response.next_page_token,
        })
    }

    async fn list_closed_workflow_executions(
        &self,
        ctx: &CallContext,
        request: ListClosedWorkflowExecutionsRequest,
    ) -> Result<ListClosedWorkflowExecutionsResponse, ServerError> {
        self.backends.wait().await;
        let listing = validation::validate_list_closed(&request)?;

        let domain = self.resolve_domain(ctx, &request.domain).await?;
        let base = self.listing_base(
            domain.id(),
            request.maximum_page_size,
            request.next_page_token,
            &listing,
        );
        let response = self
            .call(ctx, self.list_executions(true, base, listing.filter))
            .await?;

        Ok(ListClosedWorkflowExecutionsResponse {
            executions: response.executions,
            next_page_token: response.next_page_token,
        })
    }
}
