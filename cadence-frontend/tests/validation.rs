mod common;

use cadence_core::{BadRequest, CallContext, ServerError};
use cadence_proto::*;
use common::{Harness, DOMAIN, RUN_ID};

fn ctx() -> CallContext {
    CallContext::background()
}

fn valid_start() -> StartWorkflowExecutionRequest {
    StartWorkflowExecutionRequest {
        domain: DOMAIN.to_string(),
        workflow_id: "order-42".to_string(),
        workflow_type: Some(WorkflowType {
            name: "OrderWorkflow".to_string(),
        }),
        task_list: Some(TaskList::normal("orders-tl")),
        execution_start_to_close_timeout_seconds: Some(3600),
        task_start_to_close_timeout_seconds: Some(10),
        request_id: "req-1".to_string(),
        ..Default::default()
    }
}

fn assert_bad_request<T: std::fmt::Debug>(result: Result<T, ServerError>, expected: BadRequest) {
    match result {
        Err(ServerError::BadRequest(reason)) => assert_eq!(reason, expected),
        other => panic!("expected BadRequest({expected:?}), got {other:?}"),
    }
}

#[tokio::test]
async fn test_rejected_requests_never_reach_backends() {
    common::init_tracing();
    let harness = Harness::started().await;
    harness.register(DOMAIN).await;
    let lookups_before = harness.metadata.get_domain_calls();
    let handler = &harness.handler;

    let mut request = valid_start();
    request.domain.clear();
    assert_bad_request(
        handler.start_workflow_execution(&ctx(), request).await,
        BadRequest::DomainNotSet,
    );

    let mut request = valid_start();
    request.workflow_type = None;
    assert_bad_request(
        handler.start_workflow_execution(&ctx(), request).await,
        BadRequest::WorkflowTypeNotSet,
    );

    let mut request = valid_start();
    request.task_start_to_close_timeout_seconds = Some(0);
    assert_bad_request(
        handler.start_workflow_execution(&ctx(), request).await,
        BadRequest::InvalidTaskStartToCloseTimeout,
    );

    assert_bad_request(
        handler
            .poll_for_activity_task(
                &ctx(),
                PollForActivityTaskRequest {
                    domain: DOMAIN.to_string(),
                    task_list: None,
                    identity: "worker-1".to_string(),
                },
            )
            .await,
        BadRequest::TaskListNotSet,
    );

    assert_bad_request(
        handler
            .poll_for_decision_task(
                &ctx(),
                PollForDecisionTaskRequest {
                    domain: String::new(),
                    task_list: Some(TaskList::normal("orders-tl")),
                    identity: "worker-1".to_string(),
                },
            )
            .await,
        BadRequest::DomainNotSet,
    );

    assert_bad_request(
        handler
            .respond_activity_task_completed(&ctx(), RespondActivityTaskCompletedRequest::default())
            .await,
        BadRequest::TaskTokenNotSet,
    );

    assert_bad_request(
        handler
            .signal_workflow_execution(
                &ctx(),
                SignalWorkflowExecutionRequest {
                    domain: DOMAIN.to_string(),
                    workflow_execution: Some(WorkflowExecution::new("order-42", RUN_ID)),
                    ..Default::default()
                },
            )
            .await,
        BadRequest::SignalNameNotSet,
    );

    assert_bad_request(
        handler
            .get_workflow_execution_history(
                &ctx(),
                GetWorkflowExecutionHistoryRequest {
                    domain: DOMAIN.to_string(),
                    execution: None,
                    ..Default::default()
                },
            )
            .await,
        BadRequest::ExecutionNotSet,
    );

    assert_bad_request(
        handler
            .list_open_workflow_executions(
                &ctx(),
                ListOpenWorkflowExecutionsRequest {
                    domain: DOMAIN.to_string(),
                    ..Default::default()
                },
            )
            .await,
        BadRequest::StartTimeFilterNotSet,
    );

    assert_bad_request(
        handler
            .describe_domain(&ctx(), DescribeDomainRequest { name: None })
            .await,
        BadRequest::DomainNotSet,
    );

    assert_eq!(harness.backend_calls(), 0);
    assert_eq!(harness.metadata.get_domain_calls(), lookups_before);
}

#[tokio::test]
async fn test_malformed_run_ids_are_bad_requests() {
    let harness = Harness::started().await;
    harness.register(DOMAIN).await;
    let handler = &harness.handler;

    for run_id in ["not-a-uuid", "1234", "5b4f7a4e-2c1d-4e8f-9a3b"] {
        let execution = Some(WorkflowExecution::new("order-42", run_id));

        assert_bad_request(
            handler
                .get_workflow_execution_history(
                    &ctx(),
                    GetWorkflowExecutionHistoryRequest {
                        domain: DOMAIN.to_string(),
                        execution: execution.clone(),
                        ..Default::default()
                    },
                )
                .await,
            BadRequest::InvalidRunId,
        );

        assert_bad_request(
            handler
                .signal_workflow_execution(
                    &ctx(),
                    SignalWorkflowExecutionRequest {
                        domain: DOMAIN.to_string(),
                        workflow_execution: execution.clone(),
                        signal_name: "approve".to_string(),
                        ..Default::default()
                    },
                )
                .await,
            BadRequest::InvalidRunId,
        );

        assert_bad_request(
            handler
                .terminate_workflow_execution(
                    &ctx(),
                    TerminateWorkflowExecutionRequest {
                        domain: DOMAIN.to_string(),
                        workflow_execution: execution.clone(),
                        ..Default::default()
                    },
                )
                .await,
            BadRequest::InvalidRunId,
        );

        assert_bad_request(
            handler
                .request_cancel_workflow_execution(
                    &ctx(),
                    RequestCancelWorkflowExecutionRequest {
                        domain: DOMAIN.to_string(),
                        workflow_execution: execution,
                        ..Default::default()
                    },
                )
                .await,
            BadRequest::InvalidRunId,
        );
    }

    assert_eq!(harness.backend_calls(), 0);
}

#[tokio::test]
async fn test_terminate_without_run_id_is_forwarded() {
    let harness = Harness::started().await;
    let domain_id = harness.register(DOMAIN).await;

    harness
        .handler
        .terminate_workflow_execution(
            &ctx(),
            TerminateWorkflowExecutionRequest {
                domain: DOMAIN.to_string(),
                workflow_execution: Some(WorkflowExecution::new("order-42", "")),
                reason: Some("operator".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let calls = harness.history.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].operation, "TerminateWorkflowExecution");
    assert_eq!(calls[0].domain_uuid, domain_id);
}

#[tokio::test]
async fn test_start_forwards_domain_id() {
    let harness = Harness::started().await;
    let domain_id = harness.register(DOMAIN).await;

    let response = harness
        .handler
        .start_workflow_execution(&ctx(), valid_start())
        .await
        .unwrap();

    assert!(uuid::Uuid::parse_str(&response.run_id).is_ok());
    assert_eq!(harness.history.calls()[0].domain_uuid, domain_id);
}

#[tokio::test]
async fn test_unknown_domain_passes_through_as_entity_not_exists() {
    let harness = Harness::started().await;

    let err = harness
        .handler
        .start_workflow_execution(&ctx(), valid_start())
        .await
        .unwrap_err();

    assert!(matches!(err, ServerError::EntityNotExists { .. }));
    assert_eq!(harness.history.call_count(), 0);
}
