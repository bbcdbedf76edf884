//! Frontend options.

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_HISTORY_MAX_PAGE_SIZE: usize = 1000;
pub const DEFAULT_VISIBILITY_MAX_PAGE_SIZE: usize = 1000;

/// Frontend configuration options
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct FrontendOptions {
    /// Page size for history reads when the caller passes none
    pub history_max_page_size: usize,
    /// Page size for visibility listings when the caller passes none
    pub visibility_max_page_size: usize,
    /// Age after which a cached domain is re-read from the metadata store
    pub domain_cache_refresh_interval: Duration,
    /// Upper bound on a single backend call when the caller set no deadline
    pub backend_call_timeout: Option<Duration>,
}

impl Default for FrontendOptions {
    fn default() -> Self {
        Self {
            history_max_page_size: DEFAULT_HISTORY_MAX_PAGE_SIZE,
            visibility_max_page_size: DEFAULT_VISIBILITY_MAX_PAGE_SIZE,
            domain_cache_refresh_interval: Duration::from_secs(10),
            backend_call_timeout: None,
        }
    }
}

impl std::fmt::Debug for FrontendOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrontendOptions")
            .field("history_max_page_size", &self.history_max_page_size)
            .field("visibility_max_page_size", &self.visibility_max_page_size)
            .field(
                "domain_cache_refresh_interval",
                &self.domain_cache_refresh_interval,
            )
            .field("backend_call_timeout", &self.backend_call_timeout)
            .finish()
    }
}
