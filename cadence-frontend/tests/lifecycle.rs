mod common;

use std::time::Duration;

use cadence_core::{BadRequest, CallContext, ServerError};
use cadence_frontend::FrontendOptions;
use cadence_persistence::{CreateDomainRequest, MetadataManager};
use cadence_proto::*;
use cadence_testsuite::{FailingClientFactory, VisibilityCall};
use common::{Harness, DOMAIN, RUN_ID};

fn start_request() -> StartWorkflowExecutionRequest {
    StartWorkflowExecutionRequest {
        domain: DOMAIN.to_string(),
        workflow_id: "order-42".to_string(),
        workflow_type: Some(WorkflowType {
            name: "OrderWorkflow".to_string(),
        }),
        task_list: Some(TaskList::normal("orders-tl")),
        execution_start_to_close_timeout_seconds: Some(3600),
        task_start_to_close_timeout_seconds: Some(10),
        ..Default::default()
    }
}

fn window() -> Option<StartTimeFilter> {
    Some(StartTimeFilter {
        earliest_time: Some(0),
        latest_time: Some(1_000),
    })
}

fn execution_info(workflow_id: &str, type_name: &str, start_time: i64) -> WorkflowExecutionInfo {
    WorkflowExecutionInfo {
        execution: Some(WorkflowExecution::new(workflow_id, RUN_ID)),
        workflow_type: Some(WorkflowType {
            name: type_name.to_string(),
        }),
        start_time: Some(start_time),
        close_time: None,
        close_status: None,
        history_length: 0,
    }
}

#[tokio::test]
async fn test_requests_wait_for_start() {
    let harness = Harness::unstarted(FrontendOptions::default());
    harness
        .metadata
        .create_domain(CreateDomainRequest {
            name: DOMAIN.to_string(),
            status: DomainStatus::Registered,
            description: String::new(),
            owner_email: String::new(),
            retention: 1,
            emit_metric: false,
        })
        .await
        .unwrap();

    let pending: Vec<_> = (0..4)
        .map(|i| {
            let handler = harness.handler.clone();
            let mut request = start_request();
            request.workflow_id = format!("order-{i}");
            tokio::spawn(async move {
                handler
                    .start_workflow_execution(&CallContext::background(), request)
                    .await
            })
        })
        .collect();

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(!harness.handler.is_started());
    assert!(pending.iter().all(|task| !task.is_finished()));
    assert_eq!(harness.history.call_count(), 0);

    harness.start().await;

    for task in pending {
        assert!(task.await.unwrap().is_ok());
    }
    assert_eq!(harness.history.call_count(), 4);
}

#[tokio::test]
async fn test_failed_start_keeps_gate_closed() {
    let harness = Harness::unstarted(FrontendOptions::default());

    let err = harness
        .handler
        .start(&FailingClientFactory::new("history ring empty"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("history ring empty"));
    assert!(!harness.handler.is_started());

    harness.start().await;
    assert!(harness.handler.is_started());
    assert!(harness.handler.start(&harness.factory()).await.is_err());
    assert!(harness.handler.is_healthy().await);
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_start_builds_clients_once() {
    let harness = Harness::unstarted(FrontendOptions::default());
    let factory = harness.factory().with_build_delay(Duration::from_millis(50));

    let starts: Vec<_> = (0..2)
        .map(|_| {
            let handler = harness.handler.clone();
            let factory = factory.clone();
            tokio::spawn(async move { handler.start(&factory).await })
        })
        .collect();

    let mut succeeded = 0;
    for start in starts {
        if start.await.unwrap().is_ok() {
            succeeded += 1;
        }
    }

    assert_eq!(succeeded, 1);
    assert_eq!(factory.builds(), 1);
    assert!(harness.handler.is_started());
}

#[tokio::test(start_paused = true)]
async fn test_request_deadline_bounds_backend_call() {
    let harness = Harness::started().await;
    harness.register(DOMAIN).await;
    harness.history.set_delay(Some(Duration::from_secs(30)));

    let err = harness
        .handler
        .start_workflow_execution(
            &CallContext::with_timeout(Duration::from_millis(200)),
            start_request(),
        )
        .await
        .unwrap_err();

    match err {
        ServerError::InternalService { message } => assert!(message.contains("Deadline exceeded")),
        other => panic!("expected InternalService, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_configured_timeout_applies_without_deadline() {
    let options = FrontendOptions {
        backend_call_timeout: Some(Duration::from_secs(1)),
        ..Default::default()
    };
    let harness = Harness::started_with(options).await;
    harness.register(DOMAIN).await;
    harness.history.set_delay(Some(Duration::from_secs(30)));

    let err = harness
        .handler
        .signal_workflow_execution(
            &CallContext::background(),
            SignalWorkflowExecutionRequest {
                domain: DOMAIN.to_string(),
                workflow_execution: Some(WorkflowExecution::new("order-42", RUN_ID)),
                signal_name: "approve".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ServerError::InternalService { .. }));
}

#[tokio::test]
async fn test_closed_listing_routes_by_filter() {
    let harness = Harness::started().await;
    let domain_id = harness.register(DOMAIN).await;
    let mut failed = execution_info("order-1", "OrderWorkflow", 10);
    failed.close_status = Some(WorkflowExecutionCloseStatus::Failed);
    harness.visibility.add_closed(&domain_id, failed);
    harness
        .visibility
        .add_closed(&domain_id, execution_info("refund-1", "RefundWorkflow", 20));
    let ctx = CallContext::background();

    let by_status = harness
        .handler
        .list_closed_workflow_executions(
            &ctx,
            ListClosedWorkflowExecutionsRequest {
                domain: DOMAIN.to_string(),
                start_time_filter: window(),
                status_filter: Some(WorkflowExecutionCloseStatus::Failed),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(by_status.executions.len(), 1);

    let by_type = harness
        .handler
        .list_closed_workflow_executions(
            &ctx,
            ListClosedWorkflowExecutionsRequest {
                domain: DOMAIN.to_string(),
                start_time_filter: window(),
                type_filter: Some(WorkflowTypeFilter {
                    name: "RefundWorkflow".to_string(),
                }),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(by_type.executions.len(), 1);

    let err = harness
        .handler
        .list_closed_workflow_executions(
            &ctx,
            ListClosedWorkflowExecutionsRequest {
                domain: DOMAIN.to_string(),
                start_time_filter: window(),
                type_filter: Some(WorkflowTypeFilter {
                    name: "RefundWorkflow".to_string(),
                }),
                status_filter: Some(WorkflowExecutionCloseStatus::Completed),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ServerError::BadRequest(BadRequest::ConflictingClosedFilters)
    );

    assert_eq!(
        harness.visibility.calls(),
        vec![
            VisibilityCall::ListClosedByStatus(WorkflowExecutionCloseStatus::Failed),
            VisibilityCall::ListClosedByType("RefundWorkflow".to_string()),
        ]
    );
    let last = harness.visibility.last_request().unwrap();
    assert_eq!(last.domain_uuid, domain_id);
    assert_eq!(last.page_size, 1000);
}

#[tokio::test]
async fn test_open_listing_routes_by_filter() {
    let harness = Harness::started().await;
    let domain_id = harness.register(DOMAIN).await;
    harness
        .visibility
        .add_open(&domain_id, execution_info("order-1", "OrderWorkflow", 10));
    harness
        .visibility
        .add_open(&domain_id, execution_info("order-2", "OrderWorkflow", 20));
    harness
        .visibility
        .add_open(&domain_id, execution_info("order-3", "OrderWorkflow", 5_000));
    let ctx = CallContext::background();

    let all = harness
        .handler
        .list_open_workflow_executions(
            &ctx,
            ListOpenWorkflowExecutionsRequest {
                domain: DOMAIN.to_string(),
                maximum_page_size: 10,
                start_time_filter: window(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let ids: Vec<_> = all
        .executions
        .iter()
        .filter_map(|info| info.execution.as_ref())
        .map(|execution| execution.workflow_id.as_str())
        .collect();
    assert_eq!(ids, vec!["order-2", "order-1"]);

    let one = harness
        .handler
        .list_open_workflow_executions(
            &ctx,
            ListOpenWorkflowExecutionsRequest {
                domain: DOMAIN.to_string(),
                start_time_filter: window(),
                execution_filter: Some(WorkflowExecutionFilter {
                    workflow_id: "order-1".to_string(),
                }),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(one.executions.len(), 1);

    let err = harness
        .handler
        .list_open_workflow_executions(
            &ctx,
            ListOpenWorkflowExecutionsRequest {
                domain: DOMAIN.to_string(),
                start_time_filter: window(),
                execution_filter: Some(WorkflowExecutionFilter {
                    workflow_id: "order-1".to_string(),
                }),
                type_filter: Some(WorkflowTypeFilter {
                    name: "OrderWorkflow".to_string(),
                }),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, ServerError::BadRequest(BadRequest::ConflictingOpenFilters));

    assert_eq!(
        harness.visibility.calls(),
        vec![
            VisibilityCall::ListOpen,
            VisibilityCall::ListOpenByWorkflowId("order-1".to_string()),
        ]
    );
}
