//! Integration tests for the poker session HTTP API.
//!
//! These tests drive the fully layered router the binary serves:
//! 1. Create, join, vote, reveal, reset and delete over HTTP
//! 2. Hidden votes stay hidden until the admin reveals them
//! 3. Concurrent voters on one session never lose a vote

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use scrum_poker::adapters::http::{app_router, SessionAppState};
use scrum_poker::adapters::{InMemorySessionStore, OpaqueTokenValidator};
use scrum_poker::application::UnknownSessionPolicy;
use scrum_poker::config::ServerConfig;
use scrum_poker::domain::session::Deck;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app_with_policy(policy: UnknownSessionPolicy) -> Router {
    let state = SessionAppState::new(
        Arc::new(InMemorySessionStore::default()),
        policy,
        Deck::standard(),
        2500,
    );
    app_router(
        state,
        Arc::new(OpaqueTokenValidator::new()),
        &ServerConfig::default(),
    )
}

fn app() -> Router {
    app_with_policy(UnknownSessionPolicy::Reject)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Creates a session as `admin` and returns (session id, admin token).
async fn create_session(app: &Router, admin: &str) -> (String, String) {
    let response = send(
        app,
        Method::POST,
        "/session",
        None,
        Some(json!({ "Username": admin })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    (
        body["SessionID"].as_str().unwrap().to_string(),
        body["Bearer"].as_str().unwrap().to_string(),
    )
}

async fn join(app: &Router, session_id: &str, name: &str) -> String {
    let response = send(
        app,
        Method::POST,
        &format!("/session/{}/join", session_id),
        None,
        Some(json!({ "Username": name })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response).await["Bearer"]
        .as_str()
        .unwrap()
        .to_string()
}

async fn vote(app: &Router, session_id: &str, token: &str, card: &str) -> StatusCode {
    send(
        app,
        Method::PUT,
        &format!("/session/{}/{}", session_id, card),
        Some(token),
        None,
    )
    .await
    .status()
}

async fn status(app: &Router, session_id: &str, token: &str) -> Value {
    let response = send(
        app,
        Method::GET,
        &format!("/session/{}/status", session_id),
        Some(token),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response).await
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn full_voting_round() {
    let app = app();
    let (session_id, alice) = create_session(&app, "Alice").await;
    let bob = join(&app, &session_id, "Bob").await;
    let carol = join(&app, &session_id, "Carol").await;

    assert_eq!(vote(&app, &session_id, &alice, "3").await, StatusCode::NO_CONTENT);
    assert_eq!(vote(&app, &session_id, &bob, "5").await, StatusCode::NO_CONTENT);
    assert_eq!(vote(&app, &session_id, &carol, "8").await, StatusCode::NO_CONTENT);

    // Hidden: Bob sees only his own card, but the tally is already there.
    let hidden = status(&app, &session_id, &bob).await;
    assert_eq!(
        hidden["Votes"],
        json!([
            { "Name": "Alice", "Vote": "*" },
            { "Name": "Bob", "Vote": "5" },
            { "Name": "Carol", "Vote": "*" }
        ])
    );
    let average = hidden["Average"].as_f64().unwrap();
    assert!((average - 16.0 / 3.0).abs() < 1e-9);
    assert_eq!(hidden["Closest"], 5.0);

    // Reveal.
    let response = send(
        &app,
        Method::PUT,
        &format!("/session/{}", session_id),
        Some(&alice),
        Some(json!({ "ShouldShow": true })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let revealed = status(&app, &session_id, &bob).await;
    assert_eq!(revealed["Votes"][0]["Vote"], "3");
    assert_eq!(revealed["Votes"][2]["Vote"], "8");

    // New round.
    let response = send(
        &app,
        Method::GET,
        &format!("/session/{}/reset", session_id),
        Some(&carol),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let reset = status(&app, &session_id, &alice).await;
    assert_eq!(reset["Votes"].as_array().unwrap().len(), 3);
    assert!(reset["Votes"]
        .as_array()
        .unwrap()
        .iter()
        .all(|v| v["Vote"] == ""));
    assert_eq!(reset["Average"], Value::Null);
    assert_eq!(reset["Closest"], Value::Null);
}

#[tokio::test]
async fn only_admin_can_delete_and_delete_is_idempotent() {
    let app = app();
    let (session_id, alice) = create_session(&app, "Alice").await;
    let bob = join(&app, &session_id, "Bob").await;
    let uri = format!("/session/{}", session_id);

    let response = send(&app, Method::DELETE, &uri, Some(&bob), None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = send(&app, Method::DELETE, &uri, Some(&alice), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, Method::DELETE, &uri, Some(&alice), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(
        &app,
        Method::GET,
        &format!("/session/{}/status", session_id),
        Some(&alice),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn custom_deck_restricts_votes() {
    let app = app();
    let response = send(
        &app,
        Method::POST,
        "/session",
        None,
        Some(json!({ "Username": "Alice", "Cards": ["S", "M", "L", "status"] })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    let session_id = body["SessionID"].as_str().unwrap();
    let alice = body["Bearer"].as_str().unwrap();

    assert_eq!(vote(&app, session_id, alice, "M").await, StatusCode::NO_CONTENT);
    assert_eq!(vote(&app, session_id, alice, "5").await, StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        Method::GET,
        &format!("/session/{}", session_id),
        Some(alice),
        None,
    )
    .await;
    let view = json_body(response).await;
    assert_eq!(view["Cards"], json!(["S", "M", "L"]));

    // Non-numeric votes do not produce a tally.
    let current = status(&app, session_id, alice).await;
    assert_eq!(current["Votes"][0]["Vote"], "M");
    assert_eq!(current["Average"], Value::Null);
}

#[tokio::test]
async fn missing_bearer_is_unauthorized() {
    let app = app();
    let (session_id, _) = create_session(&app, "Alice").await;

    let response = send(
        &app,
        Method::GET,
        &format!("/session/{}/status", session_id),
        None,
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn stranger_cannot_vote() {
    let app = app();
    let (session_id, _) = create_session(&app, "Alice").await;

    let code = vote(&app, &session_id, "someone-else", "5").await;

    assert_eq!(code, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_policy_lets_first_joiner_become_admin() {
    let app = app_with_policy(UnknownSessionPolicy::Create);
    let session_id = uuid::Uuid::new_v4().to_string();

    let alice = join(&app, &session_id, "Alice").await;
    let response = send(
        &app,
        Method::GET,
        &format!("/session/{}", session_id),
        Some(&alice),
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["IsAdmin"], true);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_votes_are_all_recorded() {
    let app = app();
    let (session_id, _) = create_session(&app, "Alice").await;

    let mut tokens = Vec::new();
    for i in 0..20 {
        tokens.push(join(&app, &session_id, &format!("Voter {}", i)).await);
    }

    let tasks: Vec<_> = tokens
        .iter()
        .cloned()
        .map(|token| {
            let app = app.clone();
            let session_id = session_id.clone();
            tokio::spawn(async move { vote(&app, &session_id, &token, "8").await })
        })
        .collect();
    for task in tasks {
        assert_eq!(task.await.unwrap(), StatusCode::NO_CONTENT);
    }

    let current = status(&app, &session_id, &tokens[0]).await;
    let votes = current["Votes"].as_array().unwrap();
    assert_eq!(votes.len(), 21);
    assert_eq!(votes.iter().filter(|v| v["Vote"] != "").count(), 20);
    assert_eq!(current["Average"], 8.0);
}
