#![allow(dead_code)]

use std::sync::Arc;

use cadence_core::CallContext;
use cadence_frontend::{
    FrontendOptions, JsonTaskTokenSerializer, TaskToken, TaskTokenSerializer, WorkflowHandler,
};
use cadence_proto::{RegisterDomainRequest, WorkflowService};
use cadence_testsuite::*;

pub const RUN_ID: &str = "5b4f7a4e-2c1d-4e8f-9a3b-6c7d8e9f0a1b";
pub const DOMAIN: &str = "orders";

pub struct Harness {
    pub handler: Arc<WorkflowHandler>,
    pub metadata: Arc<InMemoryMetadataManager>,
    pub history_store: Arc<InMemoryHistoryManager>,
    pub visibility: Arc<InMemoryVisibilityManager>,
    pub history: Arc<SpyHistoryClient>,
    pub matching: Arc<SpyMatchingClient>,
}

impl Harness {
    pub fn unstarted(options: FrontendOptions) -> Self {
        let metadata = Arc::new(InMemoryMetadataManager::new());
        let history_store = Arc::new(InMemoryHistoryManager::new());
        let visibility = Arc::new(InMemoryVisibilityManager::new());
        let handler = Arc::new(WorkflowHandler::new(
            options,
            metadata.clone(),
            history_store.clone(),
            visibility.clone(),
        ));

        Self {
            handler,
            metadata,
            history_store,
            visibility,
            history: Arc::new(SpyHistoryClient::new()),
            matching: Arc::new(SpyMatchingClient::new()),
        }
    }

    pub async fn started() -> Self {
        Self::started_with(FrontendOptions::default()).await
    }

    pub async fn started_with(options: FrontendOptions) -> Self {
        let harness = Self::unstarted(options);
        harness.start().await;
        harness
    }

    pub async fn start(&self) {
        self.handler
            .start(&self.factory())
            .await
            .expect("handler should start");
    }

    pub fn factory(&self) -> StaticClientFactory {
        StaticClientFactory::new(self.history.clone(), self.matching.clone())
    }

    /// Register a domain and return its id.
    pub async fn register(&self, name: &str) -> String {
        self.handler
            .register_domain(
                &CallContext::background(),
                RegisterDomainRequest {
                    name: name.to_string(),
                    description: Some("order processing".to_string()),
                    owner_email: "orders@example.com".to_string(),
                    workflow_execution_retention_period_in_days: 3,
                    emit_metric: Some(true),
                },
            )
            .await
            .expect("domain should register");

        self.handler
            .domain_cache()
            .resolve(name)
            .await
            .expect("registered domain should resolve")
            .id()
            .to_string()
    }

    /// Calls that reached any backend or store past domain registration.
    pub fn backend_calls(&self) -> usize {
        self.history.call_count()
            + self.matching.call_count()
            + self.history_store.calls()
            + self.visibility.calls().len()
    }
}

pub fn task_token(domain_id: &str, workflow_id: &str, schedule_id: i64) -> Vec<u8> {
    JsonTaskTokenSerializer::new()
        .serialize(&TaskToken::new(domain_id, workflow_id, RUN_ID, schedule_id))
        .expect("token should encode")
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
