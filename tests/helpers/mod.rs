//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

use devlink_api::AppState;
use devlink_core::config::AppConfig;
use devlink_database::Database;

/// Test application context backed by the in-memory stores.
pub struct TestApp {
    /// The full service, including path normalization
    pub app: NormalizePath<Router>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.provider = "memory".to_string();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config.auth.argon2_memory_kib = 1024;
        config.auth.argon2_iterations = 1;

        let state =
            AppState::new(config.clone(), Database::in_memory()).expect("Failed to build state");

        Self {
            app: devlink_api::build_app(state),
            config,
        }
    }

    /// Send a JSON request through the service
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .app
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Register an account and return its bearer token
    pub async fn register(&self, name: &str, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/v1/auth/register",
                Some(json!({ "name": name, "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.body["token"]
            .as_str()
            .expect("token in response")
            .to_string()
    }

    /// Create a resource and return its id
    pub async fn create_resource(&self, token: &str, body: Value) -> i64 {
        let response = self
            .request("POST", "/api/v1/resources", Some(body), Some(token))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.body["id"].as_i64().expect("id in response")
    }
}

/// Test response wrapper
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
