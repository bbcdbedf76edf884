//! Error types for the Cadence frontend.
//!
//! Two layers live here. [`CadenceError`] is what every collaborator (metadata
//! store, history store, history and matching services) returns. [`ServerError`]
//! is the stable taxonomy handed back to callers of the frontend; the only way
//! to get from the former to the latter is the `From` conversion at the bottom
//! of this module.

use thiserror::Error;

/// Precondition violations raised by the frontend before any backend call.
///
/// `Other` carries bad-request messages raised by a backend service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BadRequest {
    #[error("Domain not set on request.")]
    DomainNotSet,

    #[error("Task token not set on request.")]
    TaskTokenNotSet,

    #[error("Invalid TaskToken.")]
    InvalidTaskToken,

    #[error("TaskList is not set on request.")]
    TaskListNotSet,

    #[error("Execution is not set on request.")]
    ExecutionNotSet,

    #[error("WorkflowId is not set on request.")]
    WorkflowIdNotSet,

    #[error("RunId is not set on request.")]
    RunIdNotSet,

    #[error("Invalid RunId.")]
    InvalidRunId,

    #[error("Invalid NextPageToken.")]
    InvalidNextPageToken,

    #[error("WorkflowType is not set on request.")]
    WorkflowTypeNotSet,

    #[error("A valid ExecutionStartToCloseTimeoutSeconds is not set on request.")]
    InvalidExecutionStartToCloseTimeout,

    #[error("A valid TaskStartToCloseTimeoutSeconds is not set on request.")]
    InvalidTaskStartToCloseTimeout,

    #[error("SignalName is not set on request.")]
    SignalNameNotSet,

    #[error("StartTimeFilter is required")]
    StartTimeFilterNotSet,

    #[error("EarliestTime in StartTimeFilter is required")]
    EarliestTimeNotSet,

    #[error("LatestTime in StartTimeFilter is required")]
    LatestTimeNotSet,

    #[error("Only one of ExecutionFilter or TypeFilter is allowed")]
    ConflictingOpenFilters,

    #[error("Only one of ExecutionFilter, TypeFilter or StatusFilter is allowed")]
    ConflictingClosedFilters,

    #[error("Domain {name} is deleted.")]
    DomainDeleted { name: String },

    #[error("{0}")]
    Other(String),
}

/// Errors returned to frontend callers.
///
/// Nothing outside this set ever leaves the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServerError {
    #[error("BadRequestError: {0}")]
    BadRequest(#[from] BadRequest),

    #[error("EntityNotExistsError: {message}")]
    EntityNotExists { message: String },

    #[error("WorkflowExecutionAlreadyStartedError: {message}")]
    WorkflowExecutionAlreadyStarted { message: String },

    #[error("DomainAlreadyExistsError: {message}")]
    DomainAlreadyExists { message: String },

    #[error("InternalServiceError: {message}")]
    InternalService { message: String },
}

impl ServerError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ServerError::BadRequest(BadRequest::Other(message.into()))
    }

    pub fn entity_not_exists(message: impl Into<String>) -> Self {
        ServerError::EntityNotExists {
            message: message.into(),
        }
    }

    pub fn workflow_execution_already_started(message: impl Into<String>) -> Self {
        ServerError::WorkflowExecutionAlreadyStarted {
            message: message.into(),
        }
    }

    pub fn domain_already_exists(message: impl Into<String>) -> Self {
        ServerError::DomainAlreadyExists {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ServerError::InternalService {
            message: message.into(),
        }
    }

    /// The bare message, without the classification prefix used by `Display`.
    pub fn message(&self) -> String {
        match self {
            ServerError::BadRequest(reason) => reason.to_string(),
            ServerError::EntityNotExists { message }
            | ServerError::WorkflowExecutionAlreadyStarted { message }
            | ServerError::DomainAlreadyExists { message }
            | ServerError::InternalService { message } => message.clone(),
        }
    }
}

/// Errors produced by frontend collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CadenceError {
    /// Already classified in the client-facing taxonomy; passes through as-is.
    #[error(transparent)]
    Server(#[from] ServerError),

    #[error("ServiceBusyError: {0}")]
    ServiceBusy(String),

    #[error("DomainNotActiveError: {0}")]
    DomainNotActive(String),

    #[error("Deadline exceeded: {0}")]
    Timeout(String),

    #[error("Request canceled: {0}")]
    Canceled(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Other error: {0}")]
    Other(String),
}

pub type CadenceResult<T> = Result<T, CadenceError>;

impl From<CadenceError> for ServerError {
    fn from(err: CadenceError) -> Self {
        match err {
            CadenceError::Server(server) => server,
            other => ServerError::InternalService {
                message: other.to_string(),
            },
        }
    }
}

/// Helper functions to check error types
pub fn is_bad_request_error(err: &ServerError) -> bool {
    matches!(err, ServerError::BadRequest(_))
}

pub fn is_entity_not_exists_error(err: &ServerError) -> bool {
    matches!(err, ServerError::EntityNotExists { .. })
}

pub fn is_internal_service_error(err: &ServerError) -> bool {
    matches!(err, ServerError::InternalService { .. })
}
