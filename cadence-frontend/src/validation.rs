//! Request precondition checks.
//!
//! Each check reports the first violated field, in the order the fields are
//! listed on the request. Nothing here touches a backend.

use cadence_core::BadRequest;
use cadence_proto::*;
use uuid::Uuid;

/// Which visibility listing a request maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ListingFilter {
    All,
    WorkflowId(String),
    WorkflowType(String),
    Status(WorkflowExecutionCloseStatus),
}

/// Validated start-time window plus the selected filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Listing {
    pub earliest_start_time: i64,
    pub latest_start_time: i64,
    pub filter: ListingFilter,
}

pub(crate) fn require_domain(domain: &str) -> Result<(), BadRequest> {
    if domain.is_empty() {
        return Err(BadRequest::DomainNotSet);
    }
    Ok(())
}

/// Domain operations carry an optional name; unset and empty are the same.
pub(crate) fn require_domain_name(name: Option<&str>) -> Result<&str, BadRequest> {
    match name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(BadRequest::DomainNotSet),
    }
}

pub(crate) fn require_task_token(token: &[u8]) -> Result<(), BadRequest> {
    if token.is_empty() {
        return Err(BadRequest::TaskTokenNotSet);
    }
    Ok(())
}

pub(crate) fn require_task_list(task_list: Option<&TaskList>) -> Result<(), BadRequest> {
    match task_list {
        Some(task_list) if !task_list.name.is_empty() => Ok(()),
        _ => Err(BadRequest::TaskListNotSet),
    }
}

/// Execution present with a workflow id.
pub(crate) fn require_execution(
    execution: Option<&WorkflowExecution>,
) -> Result<&WorkflowExecution, BadRequest> {
    let execution = execution.ok_or(BadRequest::ExecutionNotSet)?;
    if execution.workflow_id.is_empty() {
        return Err(BadRequest::WorkflowIdNotSet);
    }
    Ok(execution)
}

/// An empty run id passes; a non-empty one must be a UUID.
pub(crate) fn validate_run_id(run_id: &str) -> Result<(), BadRequest> {
    if !run_id.is_empty() && Uuid::parse_str(run_id).is_err() {
        return Err(BadRequest::InvalidRunId);
    }
    Ok(())
}

pub(crate) fn require_run_id(run_id: &str) -> Result<(), BadRequest> {
    if run_id.is_empty() {
        return Err(BadRequest::RunIdNotSet);
    }
    validate_run_id(run_id)
}

/// Caller page size, or the default when unset.
pub(crate) fn page_size(requested: i32, default: usize) -> usize {
    if requested <= 0 {
        default
    } else {
        requested as usize
    }
}

pub(crate) fn validate_start(request: &StartWorkflowExecutionRequest) -> Result<(), BadRequest> {
    require_domain(&request.domain)?;
    if request.workflow_id.is_empty() {
        return Err(BadRequest::WorkflowIdNotSet);
    }
    match &request.workflow_type {
        Some(workflow_type) if !workflow_type.name.is_empty() => {}
        _ => return Err(BadRequest::WorkflowTypeNotSet),
    }
    require_task_list(request.task_list.as_ref())?;
    if !request
        .execution_start_to_close_timeout_seconds
        .is_some_and(|seconds| seconds > 0)
    {
        return Err(BadRequest::InvalidExecutionStartToCloseTimeout);
    }
    if !request
        .task_start_to_close_timeout_seconds
        .is_some_and(|seconds| seconds > 0)
    {
        return Err(BadRequest::InvalidTaskStartToCloseTimeout);
    }
    Ok(())
}

pub(crate) fn validate_signal(request: &SignalWorkflowExecutionRequest) -> Result<(), BadRequest> {
    require_domain(&request.domain)?;
    let execution = require_execution(request.workflow_execution.as_ref())?;
    validate_run_id(&execution.run_id)?;
    if request.signal_name.is_empty() {
        return Err(BadRequest::SignalNameNotSet);
    }
    Ok(())
}

pub(crate) fn validate_terminate(
    request: &TerminateWorkflowExecutionRequest,
) -> Result<(), BadRequest> {
    require_domain(&request.domain)?;
    let execution = require_execution(request.workflow_execution.as_ref())?;
    validate_run_id(&execution.run_id)
}

pub(crate) fn validate_cancel(
    request: &RequestCancelWorkflowExecutionRequest,
) -> Result<(), BadRequest> {
    require_domain(&request.domain)?;
    let execution = require_execution(request.workflow_execution.as_ref())?;
    require_run_id(&execution.run_id)
}

pub(crate) fn validate_history(
    request: &GetWorkflowExecutionHistoryRequest,
) -> Result<&WorkflowExecution, BadRequest> {
    require_domain(&request.domain)?;
    let execution = require_execution(request.execution.as_ref())?;
    require_run_id(&execution.run_id)?;
    Ok(execution)
}

fn start_window(filter: Option<&StartTimeFilter>) -> Result<(i64, i64), BadRequest> {
    let filter = filter.ok_or(BadRequest::StartTimeFilterNotSet)?;
    let earliest = filter.earliest_time.ok_or(BadRequest::EarliestTimeNotSet)?;
    let latest = filter.latest_time.ok_or(BadRequest::LatestTimeNotSet)?;
    Ok((earliest, latest))
}

/// Open listings accept an execution filter or a type filter, not both.
pub(crate) fn validate_list_open(
    request: &ListOpenWorkflowExecutionsRequest,
) -> Result<Listing, BadRequest> {
    require_domain(&request.domain)?;
    let (earliest_start_time, latest_start_time) =
        start_window(request.start_time_filter.as_ref())?;

    let filter = match (&request.execution_filter, &request.type_filter) {
        (Some(_), Some(_)) => return Err(BadRequest::ConflictingOpenFilters),
        (Some(execution), None) => ListingFilter::WorkflowId(execution.workflow_id.clone()),
        (None, Some(workflow_type)) => ListingFilter::WorkflowType(workflow_type.name.clone()),
        (None, None) => ListingFilter::All,
    };

    Ok(Listing {
        earliest_start_time,
        latest_start_time,
        filter,
    })
}

/// Closed listings accept at most one of execution, type and status filters.
pub(crate) fn validate_list_closed(
    request: &ListClosedWorkflowExecutionsRequest,
) -> Result<Listing, BadRequest> {
    require_domain(&request.domain)?;
    let (earliest_start_time, latest_start_time) =
        start_window(request.start_time_filter.as_ref())?;

    let set = [
        request.execution_filter.is_some(),
        request.type_filter.is_some(),
        request.status_filter.is_some(),
    ]
    .iter()
    .filter(|set| **set)
    .count();
    if set > 1 {
        return Err(BadRequest::ConflictingClosedFilters);
    }

    let filter = if let Some(execution) = &request.execution_filter {
        ListingFilter::WorkflowId(execution.workflow_id.clone())
    } else if let Some(workflow_type) = &request.type_filter {
        ListingFilter::WorkflowType(workflow_type.name.clone())
    } else if let Some(status) = request.status_filter {
        ListingFilter::Status(status)
    } else {
        ListingFilter::All
    };

    Ok(Listing {
        earliest_start_time,
        latest_start_time,
        filter,
    })
}
