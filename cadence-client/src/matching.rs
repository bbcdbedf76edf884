//! Matching service client interface.

use async_trait::async_trait;
use cadence_core::{CadenceResult, CallContext};
use cadence_proto::matching::*;
use cadence_proto::workflow_service::PollForActivityTaskResponse;

/// Task dispatch. Polls long-poll on the matching side; the frontend just
/// forwards the caller's deadline.
#[async_trait]
pub trait MatchingClient: Send + Sync {
    async fn poll_for_activity_task(
        &self,
        ctx: &CallContext,
        request: PollForActivityTaskRequest,
    ) -> CadenceResult<PollForActivityTaskResponse>;

    async fn poll_for_decision_task(
        &self,
        ctx: &CallContext,
        request: PollForDecisionTaskRequest,
    ) -> CadenceResult<PollForDecisionTaskResponse>;
}
