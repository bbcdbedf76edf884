//! Protocol types for the Cadence frontend.
//!
//! `shared` and `workflow_service` describe the client-facing surface; the
//! `history` and `matching` modules hold the envelopes the frontend sends to
//! the two backend services. Their names overlap with the client-facing
//! types, so they are not re-exported at the crate root.

pub mod history;
pub mod matching;
pub mod shared;
pub mod workflow_service;

pub use shared::*;
pub use workflow_service::*;
