//! Construction of backend clients.

use std::sync::Arc;

use async_trait::async_trait;
use cadence_core::CadenceResult;

use crate::history::HistoryClient;
use crate::matching::MatchingClient;

pub type BoxedHistoryClient = Arc<dyn HistoryClient>;
pub type BoxedMatchingClient = Arc<dyn MatchingClient>;

/// Builds backend clients once the hosting service is up.
///
/// Construction may involve discovery or connection setup, so it is async
/// and fallible.
#[async_trait]
pub trait ClientFactory: Send + Sync {
    async fn new_history_client(&self) -> CadenceResult<BoxedHistoryClient>;

    async fn new_matching_client(&self) -> CadenceResult<BoxedMatchingClient>;
}
