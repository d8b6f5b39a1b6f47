//! Shared helpers for gtm-bff integration tests

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use gtm_bff::{build_router, AppState};
use gtm_common::auth::{create_user, issue_token, SqliteTokenVerifier};
use gtm_common::db::open_in_memory;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::util::ServiceExt;

pub const API_KEY: &str = "test-anon-key";

pub struct TestApp {
    pub router: Router,
    pub db: SqlitePool,
    pub token: String,
}

impl TestApp {
    /// App with one registered user and the public API key check enabled
    pub async fn new() -> Self {
        let db = open_in_memory().await.expect("in-memory database");
        let user = create_user(&db, "owner@example.com").await.unwrap();
        let token = issue_token(&db, &user).await.unwrap();

        let verifier = Arc::new(SqliteTokenVerifier::new(db.clone()));
        let state = AppState::new(db.clone(), verifier, Some(API_KEY.to_string()));

        Self {
            router: build_router(state),
            db,
            token,
        }
    }

    /// Token for a second, unrelated user
    pub async fn other_user_token(&self) -> String {
        let user = create_user(&self.db, "other@example.com").await.unwrap();
        issue_token(&self.db, &user).await.unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    pub async fn json(&self, request: Request<Body>) -> (StatusCode, Value) {
        let (status, body) = self.send(request).await;
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.json(authed("GET", uri, &self.token, None)).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.json(authed("POST", uri, &self.token, Some(body))).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.json(authed("PATCH", uri, &self.token, Some(body))).await
    }

    /// Create a project through the landscape scan; returns its id
    pub async fn scan_project(&self, category: &str) -> String {
        let (status, body) = self
            .post(
                "/functions/v1/market-landscape",
                serde_json::json!({"category": category, "geography": "India"}),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "scan failed: {}", body);
        body["project"]["id"].as_str().unwrap().to_string()
    }
}

/// Request carrying the public API key and a bearer token
pub fn authed(method: &str, uri: &str, token: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("apikey", API_KEY)
        .header("authorization", format!("Bearer {}", token));

    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
