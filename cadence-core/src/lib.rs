//! Core types for the Cadence frontend.
//!
//! This crate provides the error taxonomy returned to clients, the error type
//! used by backend collaborators, and the call context that carries request
//! deadlines to outbound calls.

pub mod context;
pub mod error;

pub use context::*;
pub use error::*;
