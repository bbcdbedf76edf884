//! Testing utilities for the Cadence frontend.
//!
//! This crate provides in-memory stores and spying backend clients so the
//! frontend can be exercised without a running cluster.

pub mod clients;
pub mod persistence;

pub use clients::*;
pub use persistence::*;
