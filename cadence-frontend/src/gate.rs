//! One-shot readiness gate.

use tokio::sync::{Notify, OnceCell, SetError};

/// Holds a value that becomes available exactly once.
///
/// Every request path awaits [`ReadinessGate::wait`] before touching the
/// value. Once opened the gate never closes.
#[derive(Debug)]
pub struct ReadinessGate<T> {
    value: OnceCell<T>,
    opened: Notify,
}

impl<T> Default for ReadinessGate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ReadinessGate<T> {
    pub fn new() -> Self {
        Self {
            value: OnceCell::new(),
            opened: Notify::new(),
        }
    }

    /// Publish the value and release all waiters. Returns the value back if
    /// the gate was already open.
    pub fn open(&self, value: T) -> Result<(), T> {
        self.value.set(value).map_err(|err| match err {
            SetError::AlreadyInitializedError(value) | SetError::InitializingError(value) => value,
        })?;
        self.opened.notify_waiters();
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.value.initialized()
    }

    pub fn get(&self) -> Option<&T> {
        self.value.get()
    }

    pub async fn wait(&self) -> &T {
        loop {
            // Register before checking so an open() in between is not missed.
            let opened = self.opened.notified();
            if let Some(value) = self.value.get() {
                return value;
            }
            opened.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_waiters_released_on_open() {
        let gate = Arc::new(ReadinessGate::new());

        let waiters: Vec<_> = (0..8)
            .map(|_| {
                let gate = gate.clone();
                tokio::spawn(async move { *gate.wait().await })
            })
            .collect();

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!gate.is_open());
        gate.open(11).unwrap();

        for waiter in waiters {
            assert_eq!(waiter.await.unwrap(), 11);
        }
    }

    #[tokio::test]
    async fn test_open_is_single_fire() {
        let gate = ReadinessGate::new();
        assert!(gate.open("first").is_ok());
        assert_eq!(gate.open("second"), Err("second"));
        assert_eq!(*gate.wait().await, "first");
    }
}
