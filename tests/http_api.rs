use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use promptcart_server::core::{CatalogServer, Config, HttpConfig, build_router};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app_with(config: Config) -> Router {
    let http = config.transport.clone();
    build_router(CatalogServer::new(config), &http)
}

fn app() -> Router {
    app_with(Config::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&value).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .expect("request success");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

fn new_prompt_body() -> Value {
    json!({
        "title": "T",
        "description": "D",
        "category": "misc",
        "author": "A",
        "content": "C"
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn list_returns_seeds_sorted_by_upvotes() {
    let (status, body) = send(&app(), Method::GET, "/prompts", None).await;
    assert_eq!(status, StatusCode::OK);

    let upvotes: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["upvotes"].as_u64().unwrap())
        .collect();
    assert_eq!(upvotes, vec![87, 78, 65, 53, 42]);
}

#[tokio::test]
async fn create_upvote_then_get_round_trip() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/prompts", Some(new_prompt_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Prompt created successfully");
    assert_eq!(body["prompt"]["upvotes"], 0);
    let id = body["prompt"]["_id"].as_str().unwrap().to_string();
    assert!(body["prompt"].get("id").is_none());
    assert_eq!(id, "6");

    let (status, body) = send(&app, Method::POST, &format!("/prompts/{id}/upvote"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["upvotes"], 1);

    let (status, body) = send(&app, Method::GET, &format!("/prompts/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["upvotes"], 1);
    assert_eq!(body["title"], "T");
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn create_with_missing_fields_is_rejected() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/prompts",
        Some(json!({ "title": "T", "category": "  ", "content": "C" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["missing"], json!(["description", "category", "author"]));
    assert_eq!(
        body["required"],
        json!(["title", "description", "category", "author", "content"])
    );

    let (_, listed) = send(&app, Method::GET, "/prompts", None).await;
    assert_eq!(listed.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/prompts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let app = app();

    for (method, uri) in [
        (Method::GET, "/prompts/404"),
        (Method::POST, "/prompts/404/upvote"),
        (Method::DELETE, "/prompts/404"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"], "Prompt not found");
    }
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let app = app();

    let (status, body) = send(&app, Method::DELETE, "/prompts/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Prompt deleted successfully");

    let (status, _) = send(&app, Method::GET, "/prompts/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_supports_category_and_search_filters() {
    let app = app();

    let (_, body) = send(&app, Method::GET, "/prompts?category=marketing", None).await;
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["5", "3"]);

    let (_, body) = send(&app, Method::GET, "/prompts?search=EMAIL", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["_id"], "1");
}

#[tokio::test]
async fn repeated_query_params_are_a_json_bad_request() {
    let (status, body) = send(&app(), Method::GET, "/prompts?category=a&category=b", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
    assert!(body["details"].as_str().unwrap().contains("category"));
}

#[tokio::test]
async fn generate_fills_defaults() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/generate",
        Some(json!({ "objective": "Write a poem" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let prompt = body["prompt"].as_str().unwrap();
    assert!(prompt.contains("Write a poem"));
    assert!(prompt.contains("world-class Expert"));
    assert!(prompt.contains("Tone: Professional"));
    assert!(prompt.contains("Constraints: None"));
}

#[tokio::test]
async fn generate_without_objective_is_rejected() {
    let (status, body) = send(&app(), Method::POST, "/generate", Some(json!({ "role": "Chef" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Objective is required");
}

#[tokio::test]
async fn generate_uses_configured_variant() {
    let mut config = Config::default();
    config.generator.variant = "senior".parse().unwrap();

    let (_, body) = send(
        &app_with(config),
        Method::POST,
        "/generate",
        Some(json!({ "objective": "Plan a launch", "outputFormat": "Checklist" })),
    )
    .await;
    let prompt = body["prompt"].as_str().unwrap();
    assert!(prompt.contains("senior General Assistant"));
    assert!(prompt.contains("OUTPUT FORMAT:\nChecklist"));
}

#[tokio::test]
async fn bare_options_on_generate_is_empty_ok() {
    let (status, body) = send(&app(), Method::OPTIONS, "/generate", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn cors_preflight_allows_any_origin_with_credentials() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/generate")
        .header(header::ORIGIN, "https://promptcart.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://promptcart.example"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn simple_requests_carry_cors_headers() {
    let request = Request::builder()
        .uri("/prompts")
        .header(header::ORIGIN, "http://localhost:5500")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5500"
    );
}

#[tokio::test]
async fn routes_mount_under_prefix() {
    let config = Config {
        transport: HttpConfig::default().with_prefix("/api"),
        ..Default::default()
    };
    let app = app_with(config);

    let (status, _) = send(&app, Method::GET, "/api/prompts/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, "/prompts/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["endpoints"]["generate"], "/api/generate");
}

#[tokio::test]
async fn schema_limits_apply_when_enabled() {
    let mut config = Config::default();
    config.catalog.validation = promptcart_server::domains::prompts::ValidationRules::schema();
    let app = app_with(config);

    let (status, body) = send(&app, Method::POST, "/prompts", Some(new_prompt_body())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "category");
}
