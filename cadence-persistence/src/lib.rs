//! Persistence interfaces consumed by the Cadence frontend.
//!
//! The frontend reads domains from the metadata store, event batches from
//! the history store, and execution listings from the visibility store. The
//! engines behind these traits live elsewhere.

pub mod history;
pub mod metadata;
pub mod visibility;

pub use history::*;
pub use metadata::*;
pub use visibility::*;
