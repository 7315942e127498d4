//! Integration tests for the n8n tool handlers
//!
//! Each test starts an in-process mock of the n8n public API on an
//! ephemeral port and drives the handlers against it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use n8n_mcp::handlers;
use n8n_mcp::params::*;
use n8n_mcp::registry::MemoryStore;
use n8n_mcp::translate::{ConnectionSpec, NodeSpec, MAX_OUTPUT_INDEX, SERVER_ASSIGNED_FIELDS};
use n8n_mcp::types::ExecutionStatus;
use n8n_mcp::{ApiContext, N8nError};

const API_KEY: &str = "test-api-key-0001";

// ============================================================================
// Mock n8n API
// ============================================================================

#[derive(Default)]
struct MockN8n {
    requests: AtomicUsize,
    next_id: AtomicUsize,
    fail_activation: bool,
    workflows: Mutex<Vec<Value>>,
    last_query: Mutex<HashMap<String, String>>,
    last_body: Mutex<Option<Value>>,
    /// `METHOD /path?query` of every request, as received
    seen: Mutex<Vec<String>>,
}

type Shared = Arc<MockN8n>;

async fn record(State(state): State<Shared>, request: Request, next: Next) -> Response {
    let line = format!("{} {}", request.method(), request.uri());
    state.seen.lock().unwrap().push(line);
    next.run(request).await
}

async fn unmatched() -> Response {
    not_found()
}

fn reply(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

/// Count the request and check the API key
fn admit(state: &MockN8n, headers: &HeaderMap) -> Option<Response> {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let key = headers.get("x-n8n-api-key").and_then(|v| v.to_str().ok());
    if key != Some(API_KEY) {
        return Some(reply(
            StatusCode::UNAUTHORIZED,
            json!({"message": "'X-N8N-API-KEY' header required"}),
        ));
    }
    None
}

async fn list_workflows(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Some(denied) = admit(&state, &headers) {
        return denied;
    }
    *state.last_query.lock().unwrap() = query;
    let data = state.workflows.lock().unwrap().clone();
    reply(StatusCode::OK, json!({"data": data, "nextCursor": null}))
}

async fn create_workflow(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Some(denied) = admit(&state, &headers) {
        return denied;
    }
    *state.last_body.lock().unwrap() = Some(body.clone());

    let id = format!("wf-{}", state.next_id.fetch_add(1, Ordering::SeqCst) + 1);
    let mut created = body;
    created["id"] = json!(id);
    created["active"] = json!(false);
    created["createdAt"] = json!("2024-05-01T10:00:00.000Z");
    created["updatedAt"] = json!("2024-05-01T10:00:00.000Z");
    created["versionId"] = json!("v-1");
    state.workflows.lock().unwrap().push(created.clone());

    reply(StatusCode::OK, created)
}

fn find(state: &MockN8n, id: &str) -> Option<usize> {
    state
        .workflows
        .lock()
        .unwrap()
        .iter()
        .position(|w| w["id"] == id)
}

fn not_found() -> Response {
    reply(StatusCode::NOT_FOUND, json!({"message": "Not Found"}))
}

async fn get_workflow(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Some(denied) = admit(&state, &headers) {
        return denied;
    }
    match find(&state, &id) {
        Some(i) => reply(StatusCode::OK, state.workflows.lock().unwrap()[i].clone()),
        None => not_found(),
    }
}

async fn patch_workflow(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if let Some(denied) = admit(&state, &headers) {
        return denied;
    }
    *state.last_body.lock().unwrap() = Some(body.clone());
    if state.fail_activation {
        return reply(
            StatusCode::BAD_REQUEST,
            json!({"message": "Workflow has no node to start the workflow"}),
        );
    }
    let Some(i) = find(&state, &id) else {
        return not_found();
    };
    let mut workflows = state.workflows.lock().unwrap();
    workflows[i]["active"] = body["active"].clone();
    reply(StatusCode::OK, workflows[i].clone())
}

async fn put_workflow(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if let Some(denied) = admit(&state, &headers) {
        return denied;
    }
    *state.last_body.lock().unwrap() = Some(body.clone());
    let Some(i) = find(&state, &id) else {
        return not_found();
    };
    let mut workflows = state.workflows.lock().unwrap();
    let mut updated = body;
    updated["id"] = json!(id);
    workflows[i] = updated.clone();
    reply(StatusCode::OK, updated)
}

async fn delete_workflow(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Some(denied) = admit(&state, &headers) {
        return denied;
    }
    let Some(i) = find(&state, &id) else {
        return not_found();
    };
    let removed = state.workflows.lock().unwrap().remove(i);
    reply(StatusCode::OK, removed)
}

async fn list_executions(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if let Some(denied) = admit(&state, &headers) {
        return denied;
    }
    *state.last_query.lock().unwrap() = query;
    reply(
        StatusCode::OK,
        json!({
            "data": [{
                "id": 501,
                "finished": false,
                "status": "error",
                "workflowId": "wf-1",
                "startedAt": "2024-05-01T10:00:00.000Z",
                "stoppedAt": "2024-05-01T10:00:01.250Z"
            }],
            "nextCursor": null
        }),
    )
}

async fn start_mock(mock: MockN8n) -> (Shared, String) {
    let state = Arc::new(mock);
    let app = Router::new()
        .route("/api/v1/workflows", get(list_workflows).post(create_workflow))
        .route(
            "/api/v1/workflows/{id}",
            get(get_workflow)
                .patch(patch_workflow)
                .put(put_workflow)
                .delete(delete_workflow),
        )
        .route("/api/v1/executions", get(list_executions))
        .fallback(unmatched)
        .layer(middleware::from_fn_with_state(state.clone(), record))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (state, format!("http://{}", addr))
}

async fn context_for(url: &str, api_key: &str) -> ApiContext {
    let ctx = ApiContext::new(Arc::new(MemoryStore::new())).unwrap();
    handlers::add_server(
        &ctx,
        AddServerParams {
            name: "local".to_string(),
            url: url.to_string(),
            api_key: api_key.to_string(),
            is_default: None,
        },
    )
    .await
    .unwrap();
    ctx
}

async fn setup(mock: MockN8n) -> (Shared, ApiContext) {
    let (state, url) = start_mock(mock).await;
    let ctx = context_for(&url, API_KEY).await;
    (state, ctx)
}

fn node(node_type: &str, name: &str) -> NodeSpec {
    serde_json::from_value(json!({"type": node_type, "name": name})).unwrap()
}

fn connection(from: &str, to: &str) -> ConnectionSpec {
    serde_json::from_value(json!({"from_node": from, "to_node": to})).unwrap()
}

fn create_params(activate: bool) -> CreateWorkflowParams {
    CreateWorkflowParams {
        server: None,
        name: "Hourly sync".to_string(),
        nodes: vec![
            node("n8n-nodes-base.scheduleTrigger", "Every hour"),
            node("n8n-nodes-base.httpRequest", "Fetch"),
        ],
        connections: vec![connection("Every hour", "Fetch")],
        settings: None,
        activate: Some(activate),
    }
}

// ============================================================================
// Workflows
// ============================================================================

#[tokio::test]
async fn test_list_workflows_uses_default_limit() {
    let (state, ctx) = setup(MockN8n::default()).await;
    handlers::create_workflow(&ctx, create_params(false)).await.unwrap();

    let text = handlers::list_workflows(
        &ctx,
        ListWorkflowsParams {
            server: None,
            limit: None,
            active: None,
        },
    )
    .await
    .unwrap();

    assert!(text.starts_with("Found 1 workflows:"));
    assert!(text.contains("[wf-1] Hourly sync (inactive)"));
    assert_eq!(state.last_query.lock().unwrap()["limit"], "100");
}

#[tokio::test]
async fn test_create_workflow_sends_canonical_document() {
    let (state, ctx) = setup(MockN8n::default()).await;

    let text = handlers::create_workflow(&ctx, create_params(false))
        .await
        .unwrap();
    assert_eq!(text, "Workflow created successfully: \"Hourly sync\" (id: wf-1)");

    let body = state.last_body.lock().unwrap().clone().unwrap();
    assert_eq!(
        body["connections"],
        json!({"Every hour": {"main": [[{"node": "Fetch", "type": "main", "index": 0}]]}})
    );
    assert_eq!(body["nodes"][0]["position"], json!([0, 300]));
    assert_eq!(body["nodes"][1]["position"], json!([250, 300]));
    assert_eq!(body["settings"], json!({}));
    assert_eq!(state.requests.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_create_and_activate() {
    let (state, ctx) = setup(MockN8n::default()).await;

    let text = handlers::create_workflow(&ctx, create_params(true))
        .await
        .unwrap();
    assert!(text.contains("Workflow activated."));
    assert_eq!(state.requests.load(Ordering::SeqCst), 2);
    assert_eq!(state.workflows.lock().unwrap()[0]["active"], json!(true));
    assert_eq!(
        state.last_body.lock().unwrap().clone().unwrap(),
        json!({"active": true})
    );
}

#[tokio::test]
async fn test_activation_failure_is_partial_success() {
    let (state, ctx) = setup(MockN8n {
        fail_activation: true,
        ..Default::default()
    })
    .await;

    let text = handlers::create_workflow(&ctx, create_params(true))
        .await
        .unwrap();

    assert!(text.contains("id: wf-1"));
    assert!(text.contains("activation failed"));
    assert!(text.contains("Workflow has no node to start the workflow"));
    // Created workflow is not rolled back
    assert_eq!(state.workflows.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_requires_nodes() {
    let (state, ctx) = setup(MockN8n::default()).await;
    let mut params = create_params(false);
    params.nodes.clear();

    let err = handlers::create_workflow(&ctx, params).await.unwrap_err();
    assert!(matches!(err, N8nError::MalformedInput(_)));
    assert_eq!(state.requests.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_get_missing_workflow_is_remote_error() {
    let (_, ctx) = setup(MockN8n::default()).await;

    let err = handlers::get_workflow(
        &ctx,
        GetWorkflowParams {
            server: None,
            id: "nope".to_string(),
        },
    )
    .await
    .unwrap_err();

    match err {
        N8nError::RemoteNonSuccess { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "Not Found");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_wrong_api_key_is_rejected() {
    let (_, url) = start_mock(MockN8n::default()).await;
    let ctx = context_for(&url, "wrong-key-000000").await;

    let err = handlers::list_workflows(
        &ctx,
        ListWorkflowsParams {
            server: None,
            limit: Some(5),
            active: None,
        },
    )
    .await
    .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(err.to_string().contains("X-N8N-API-KEY"));
}

#[tokio::test]
async fn test_update_set_active_and_delete() {
    let (state, ctx) = setup(MockN8n::default()).await;
    handlers::create_workflow(&ctx, create_params(false)).await.unwrap();

    let text = handlers::update_workflow(
        &ctx,
        UpdateWorkflowParams {
            server: None,
            id: "wf-1".to_string(),
            workflow_json: json!({
                "id": "wf-1",
                "name": "Renamed",
                "active": true,
                "nodes": [],
                "connections": {},
                "settings": {}
            })
            .to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(text, "Workflow wf-1 updated successfully.");
    let sent = state.last_body.lock().unwrap().clone().unwrap();
    assert!(sent.get("id").is_none());
    assert!(sent.get("active").is_none());
    assert_eq!(sent["name"], "Renamed");

    let text = handlers::set_workflow_active(
        &ctx,
        SetWorkflowActiveParams {
            server: None,
            id: "wf-1".to_string(),
            active: true,
        },
    )
    .await
    .unwrap();
    assert_eq!(text, "Workflow wf-1 activated.");

    let text = handlers::delete_workflow(
        &ctx,
        DeleteWorkflowParams {
            server: None,
            id: "wf-1".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(text, "Workflow wf-1 deleted.");
    assert!(state.workflows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_update_rejects_invalid_json() {
    let (state, ctx) = setup(MockN8n::default()).await;

    let err = handlers::update_workflow(
        &ctx,
        UpdateWorkflowParams {
            server: None,
            id: "wf-1".to_string(),
            workflow_json: "{ nodes: ".to_string(),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, N8nError::MalformedInput(_)));
    assert_eq!(state.requests.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_update_with_only_server_fields() {
    let (state, ctx) = setup(MockN8n::default()).await;

    let err = handlers::update_workflow(
        &ctx,
        UpdateWorkflowParams {
            server: None,
            id: "wf-1".to_string(),
            workflow_json: json!({"id": "1", "active": true}).to_string(),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, N8nError::MalformedInput(ref msg) if msg.contains("no updatable fields")));
    assert_eq!(state.requests.load(Ordering::SeqCst), 0);

    let err = handlers::update_workflow(
        &ctx,
        UpdateWorkflowParams {
            server: None,
            id: "wf-1".to_string(),
            workflow_json: "[1, 2]".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, N8nError::MalformedInput(ref msg) if msg.contains("must be a JSON object")));
}

#[tokio::test]
async fn test_huge_output_index_is_rejected() {
    let (state, ctx) = setup(MockN8n::default()).await;

    for index in [MAX_OUTPUT_INDEX + 1, 1 << 40, usize::MAX] {
        let mut params = create_params(false);
        params.connections = vec![ConnectionSpec {
            from_node: "Every hour".to_string(),
            to_node: "Fetch".to_string(),
            from_output_index: index,
            to_input_index: 0,
        }];

        let err = handlers::create_workflow(&ctx, params).await.unwrap_err();
        assert!(matches!(err, N8nError::MalformedInput(_)), "index {}", index);
    }
    assert_eq!(state.requests.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_workflow_id_stays_in_its_path_segment() {
    let (state, ctx) = setup(MockN8n::default()).await;

    let err = handlers::delete_workflow(
        &ctx,
        DeleteWorkflowParams {
            server: None,
            id: "../credentials/7".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.status(), Some(404));

    let err = handlers::get_workflow(
        &ctx,
        GetWorkflowParams {
            server: None,
            id: "1?limit=999".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.status(), Some(404));

    let err = handlers::export_workflow(
        &ctx,
        ExportWorkflowParams {
            server: None,
            id: "../executions".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.status(), Some(404));

    assert_eq!(
        state.seen.lock().unwrap().clone(),
        vec![
            "DELETE /api/v1/workflows/..%2Fcredentials%2F7",
            "GET /api/v1/workflows/1%3Flimit=999",
            "GET /api/v1/workflows/..%2Fexecutions",
        ]
    );
}

#[tokio::test]
async fn test_dot_segment_ids_are_refused() {
    let (state, ctx) = setup(MockN8n::default()).await;

    for id in ["..", ".", "  "] {
        let err = handlers::set_workflow_active(
            &ctx,
            SetWorkflowActiveParams {
                server: None,
                id: id.to_string(),
                active: true,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, N8nError::MalformedInput(_)), "id {:?}", id);
    }
    assert!(state.seen.lock().unwrap().is_empty());
}

// ============================================================================
// Executions
// ============================================================================

#[tokio::test]
async fn test_list_executions_forwards_filters() {
    let (state, ctx) = setup(MockN8n::default()).await;

    let text = handlers::list_executions(
        &ctx,
        ListExecutionsParams {
            server: None,
            workflow_id: Some("wf-1".to_string()),
            status: Some(ExecutionStatus::Error),
            limit: None,
        },
    )
    .await
    .unwrap();

    assert!(text.contains("[501] error (workflow wf-1)"));
    assert!(text.contains("took 1.2s") || text.contains("took 1.3s"));

    let query = state.last_query.lock().unwrap().clone();
    assert_eq!(query["limit"], "20");
    assert_eq!(query["workflowId"], "wf-1");
    assert_eq!(query["status"], "error");
}

// ============================================================================
// Export / Import
// ============================================================================

#[tokio::test]
async fn test_export_strips_server_fields() {
    let (_, ctx) = setup(MockN8n::default()).await;
    handlers::create_workflow(&ctx, create_params(false)).await.unwrap();

    let text = handlers::export_workflow(
        &ctx,
        ExportWorkflowParams {
            server: None,
            id: "wf-1".to_string(),
        },
    )
    .await
    .unwrap();

    let exported: Value = serde_json::from_str(&text).unwrap();
    for field in SERVER_ASSIGNED_FIELDS {
        assert!(exported.get(*field).is_none(), "{} exported", field);
    }
    assert_eq!(exported["name"], "Hourly sync");
    assert!(exported.get("nodes").is_some());
}

#[tokio::test]
async fn test_import_missing_connections_makes_no_request() {
    let (state, ctx) = setup(MockN8n::default()).await;

    let err = handlers::import_workflow(
        &ctx,
        ImportWorkflowParams {
            server: None,
            workflow_json: json!({"name": "x", "nodes": []}).to_string(),
            name: None,
            activate: Some(true),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, N8nError::MalformedInput(_)));
    assert_eq!(state.requests.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_import_sanitizes_and_renames() {
    let (state, ctx) = setup(MockN8n::default()).await;

    let document = json!({
        "id": "old-id",
        "name": "Original",
        "active": true,
        "tags": [],
        "versionId": "v-9",
        "createdAt": "2023-01-01T00:00:00.000Z",
        "updatedAt": "2023-01-01T00:00:00.000Z",
        "nodes": [{"name": "Start", "type": "n8n-nodes-base.manualTrigger", "typeVersion": 1, "position": [0, 0], "parameters": {}}],
        "connections": {},
        "settings": {"executionOrder": "v1"}
    });

    let text = handlers::import_workflow(
        &ctx,
        ImportWorkflowParams {
            server: None,
            workflow_json: document.to_string(),
            name: Some("Copy".to_string()),
            activate: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(text, "Workflow imported successfully: \"Copy\" (id: wf-1)");

    let sent = state.last_body.lock().unwrap().clone().unwrap();
    for field in SERVER_ASSIGNED_FIELDS {
        assert!(sent.get(*field).is_none(), "{} sent", field);
    }
    assert_eq!(sent["settings"], json!({"executionOrder": "v1"}));
}

// ============================================================================
// Server Profiles
// ============================================================================

#[tokio::test]
async fn test_no_server_configured() {
    let ctx = ApiContext::new(Arc::new(MemoryStore::new())).unwrap();

    let err = handlers::list_workflows(
        &ctx,
        ListWorkflowsParams {
            server: None,
            limit: None,
            active: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, N8nError::NoServerConfigured));

    let text = handlers::list_servers(&ctx).await.unwrap();
    assert!(text.starts_with("No servers configured"));
}

#[tokio::test]
async fn test_server_profile_lifecycle() {
    let (_, ctx) = setup(MockN8n::default()).await;

    let text = handlers::add_server(
        &ctx,
        AddServerParams {
            name: "prod".to_string(),
            url: "https://n8n.example.com/".to_string(),
            api_key: "prod-secret-key-123".to_string(),
            is_default: Some(true),
        },
    )
    .await
    .unwrap();
    assert_eq!(
        text,
        "Server 'prod' saved (https://n8n.example.com, key: prod...) as the default server."
    );

    let text = handlers::list_servers(&ctx).await.unwrap();
    assert!(text.contains("- local: "));
    assert!(text.contains("- prod [default]: https://n8n.example.com (key: prod...)"));
    assert!(!text.contains("prod-secret-key-123"));
    assert!(!text.contains(API_KEY));

    let text = handlers::remove_server(
        &ctx,
        RemoveServerParams {
            name: "prod".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(text, "Server 'prod' removed. Default server is now 'local'.");

    let err = handlers::remove_server(
        &ctx,
        RemoveServerParams {
            name: "prod".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, N8nError::ServerNotFound(_)));
}

#[tokio::test]
async fn test_add_server_rejects_bad_url() {
    let ctx = ApiContext::new(Arc::new(MemoryStore::new())).unwrap();

    let err = handlers::add_server(
        &ctx,
        AddServerParams {
            name: "bad".to_string(),
            url: "not a url".to_string(),
            api_key: "key".to_string(),
            is_default: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, N8nError::MalformedInput(_)));
    assert!(handlers::list_servers(&ctx).await.unwrap().starts_with("No servers"));
}

#[tokio::test]
async fn test_server_reachability() {
    let (state, ctx) = setup(MockN8n::default()).await;

    let text = handlers::test_server(&ctx, TestServerParams { name: None })
        .await
        .unwrap();
    assert!(text.starts_with("Server 'local' is reachable"));
    assert_eq!(state.last_query.lock().unwrap()["limit"], "1");

    let err = handlers::test_server(
        &ctx,
        TestServerParams {
            name: Some("other".to_string()),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, N8nError::ServerNotFound(_)));
}

#[tokio::test]
async fn test_unreachable_server_reports_status_zero() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let ctx = context_for(&format!("http://127.0.0.1:{}", port), API_KEY).await;

    let err = handlers::test_server(&ctx, TestServerParams { name: None })
        .await
        .unwrap_err();
    assert!(matches!(err, N8nError::NetworkFailure(_)));
    assert_eq!(err.status(), Some(0));
}

// ============================================================================
// Node Catalog
// ============================================================================

#[test]
fn test_describe_node_types() {
    let text = handlers::describe_node_types(DescribeNodeTypesParams {
        category: Some(n8n_mcp::types::NodeCategory::Logic),
    })
    .unwrap();
    assert!(text.contains("n8n-nodes-base.if"));
    assert!(!text.contains("n8n-nodes-base.webhook"));
}
