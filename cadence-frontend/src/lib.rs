//! Cadence frontend service.
//!
//! The frontend is the gateway clients and workers talk to. It validates
//! requests, resolves domain names through a cache, decodes task and history
//! tokens, and forwards work to the history and matching services. See
//! [`WorkflowHandler`] for the entry point.
//!
//! ```ignore
//! let handler = WorkflowHandler::new(options, metadata, history_store, visibility);
//! handler.start(&client_factory).await?;
//! let response = handler
//!     .start_workflow_execution(&CallContext::with_timeout(timeout), request)
//!     .await?;
//! ```

pub mod domain_cache;
pub mod gate;
pub mod handler;
pub mod history;
pub mod options;
pub mod token;
mod validation;

pub use domain_cache::{DomainCache, DomainCacheEntry};
pub use gate::ReadinessGate;
pub use handler::WorkflowHandler;
pub use history::{HistoryAssembler, HistoryPage, HistoryRead};
pub use options::FrontendOptions;
pub use token::{
    HistoryContinuationToken, JsonTaskTokenSerializer, TaskToken, TaskTokenSerializer, TokenError,
};
