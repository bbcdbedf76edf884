//! Per-call deadline propagation.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::error::{CadenceError, CadenceResult};

/// Deadline carried from an inbound request to every outbound backend call.
///
/// Cancellation needs no extra plumbing: dropping the inbound future drops the
/// outbound one with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallContext {
    deadline: Option<Instant>,
}

impl CallContext {
    /// A context without a deadline.
    pub fn background() -> Self {
        Self { deadline: None }
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline, `None` when unbounded.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Fill in a deadline when the caller did not supply one.
    pub fn or_timeout(self, timeout: Option<Duration>) -> Self {
        match (self.deadline, timeout) {
            (None, Some(timeout)) => Self::with_timeout(timeout),
            _ => self,
        }
    }

    /// Drive `fut` to completion, giving up once the deadline passes.
    pub async fn run<T, F>(&self, fut: F) -> CadenceResult<T>
    where
        F: Future<Output = CadenceResult<T>>,
    {
        match self.deadline {
            Some(deadline) => match tokio::time::timeout_at(deadline, fut).await {
                Ok(result) => result,
                Err(_) => Err(CadenceError::Timeout(
                    "backend call did not complete before the request deadline".to_string(),
                )),
            },
            None => fut.await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_run_times_out_past_deadline() {
        let ctx = CallContext::with_timeout(Duration::from_millis(50));

        let result: CadenceResult<()> = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(())
            })
            .await;

        assert!(matches!(result, Err(CadenceError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_background_context_is_unbounded() {
        let ctx = CallContext::background();
        assert!(ctx.remaining().is_none());

        let result = ctx.run(async { Ok(7) }).await;
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn test_or_timeout_keeps_caller_deadline() {
        let caller = CallContext::with_deadline(Instant::now());
        assert_eq!(caller.or_timeout(Some(Duration::from_secs(60))), caller);

        let filled = CallContext::background().or_timeout(Some(Duration::from_secs(60)));
        assert!(filled.deadline().is_some());
    }
}
