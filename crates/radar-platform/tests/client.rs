//! Integration tests for `PlatformClient` using wiremock HTTP mocks.

use radar_platform::{AgentInvoker, PlatformClient, PlatformError, ScheduleService};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PlatformClient {
    PlatformClient::new(base_url, Some("test-key"), Some(30), "listing-radar-test")
        .expect("client construction should not fail")
}

#[tokio::test]
async fn invoke_sends_message_and_returns_envelope() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "success": true,
        "response": {
            "result": "{\"scan_status\":\"completed\",\"total_listings_found\":2}"
        }
    });

    Mock::given(method("POST"))
        .and(path("/api/agent"))
        .and(header("x-api-key", "test-key"))
        .and(body_json(serde_json::json!({
            "message": "Scan for listings",
            "agent_id": "agent-1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let envelope = client
        .invoke("Scan for listings", "agent-1")
        .await
        .expect("should return envelope");

    assert!(envelope.success);
    assert!(envelope.result().is_some_and(serde_json::Value::is_string));
}

#[tokio::test]
async fn invoke_returns_failure_envelope_as_ok() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/agent"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"success": false, "error": "quota exceeded"})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let envelope = client.invoke("msg", "agent-1").await.expect("envelope");
    assert!(!envelope.success);
    assert_eq!(envelope.error.as_deref(), Some("quota exceeded"));
}

#[tokio::test]
async fn invoke_server_error_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/agent"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.invoke("msg", "agent-1").await;
    assert!(matches!(result, Err(PlatformError::Http(_))), "got: {result:?}");
}

#[tokio::test]
async fn invoke_non_json_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.invoke("msg", "agent-1").await;
    assert!(matches!(result, Err(PlatformError::Deserialize { .. })));
}

#[tokio::test]
async fn list_schedules_parses_schedules() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "success": true,
        "schedules": [
            {
                "id": "sched-1",
                "is_active": true,
                "cron_expression": "0 * * * *",
                "timezone": "America/New_York",
                "next_run_time": "2026-02-20T15:00:00Z",
                "last_run_at": "2026-02-20T14:00:00Z"
            },
            {
                "id": "sched-2",
                "is_active": false,
                "cron_expression": "0 9 * * *"
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/api/schedules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let listed = client.list().await.expect("should parse schedules");

    assert!(listed.success);
    let schedules = listed.schedules.expect("schedules present");
    assert_eq!(schedules.len(), 2);
    assert_eq!(schedules[0].id, "sched-1");
    assert!(schedules[0].is_active);
    assert!(schedules[1].timezone.is_none());
}

#[tokio::test]
async fn list_schedules_skips_malformed_entries() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "success": true,
        "schedules": [
            {"id": ["bad"], "is_active": true},
            {
                "id": "6998a1",
                "is_active": true,
                "cron_expression": null,
                "timezone": null
            },
            {"id": 7, "is_active": "false"}
        ]
    });

    Mock::given(method("GET"))
        .and(path("/api/schedules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let listed = client.list().await.expect("bad elements must not fail the listing");

    let schedules = listed.schedules.expect("schedules present");
    assert_eq!(schedules.len(), 2);
    assert_eq!(schedules[0].id, "6998a1");
    assert!(schedules[0].cron_expression.is_empty());
    assert_eq!(schedules[1].id, "7");
    assert!(!schedules[1].is_active);
}

#[tokio::test]
async fn logs_passes_limit_query() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "success": true,
        "executions": [
            {"id": "run-2", "executed_at": "2026-02-20T14:00:00Z", "success": true},
            {"id": "run-1", "executed_at": "2026-02-20T13:00:00Z", "success": false}
        ]
    });

    Mock::given(method("GET"))
        .and(path("/api/schedules/sched-1/logs"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client.logs("sched-1", 5).await.expect("should parse logs");

    let executions = page.executions.expect("executions present");
    assert_eq!(executions.len(), 2);
    assert!(executions[0].success);
    assert!(!executions[1].success);
}

#[tokio::test]
async fn pause_and_resume_hit_their_endpoints() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/schedules/sched-1/pause"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/schedules/sched-1/resume"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client.pause("sched-1").await.expect("pause acknowledged");
    client.resume("sched-1").await.expect("empty 2xx body is an ack");
}

#[tokio::test]
async fn rejected_mutation_returns_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/schedules/sched-1/pause"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"success": false, "error": "schedule locked"})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.pause("sched-1").await.unwrap_err();
    assert!(
        err.to_string().contains("schedule locked"),
        "expected message to contain 'schedule locked', got: {err}"
    );
}
