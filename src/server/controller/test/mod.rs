//! HTTP tests driving each service router end to end over in-memory SQLite.


use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Duration;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::builder::TestBuilder;
use tower::ServiceExt;
use uuid::Uuid;

use crate::server::{
    config::{Environment, ServiceKind},
    router::router,
    service::token::TokenService,
    state::AppState,
};

pub struct TestApp {
    router: Router,
    pub db: DatabaseConnection,
    pub tokens: TokenService,
}

impl TestApp {
    pub async fn new(service: ServiceKind, builder: TestBuilder) -> Self {
        Self::with_environment(service, Environment::Production, builder).await
    }

    pub async fn with_environment(
        service: ServiceKind,
        environment: Environment,
        builder: TestBuilder,
    ) -> Self {
        let test = builder.build().await.unwrap();
        let db = test.db.clone().unwrap();
        let tokens = TokenService::new("test-secret", Duration::hours(1));

        let state = AppState::new(db.clone(), tokens.clone(), 4);

        Self {
            router: router(service, environment).with_state(state),
            db,
            tokens,
        }
    }

    /// `Authorization` header value carrying a valid token.
    pub fn bearer(&self) -> String {
        let token = self
            .tokens
            .issue(Uuid::new_v4(), "tester@example.com")
            .unwrap();
        format!("Bearer {}", token)
    }

    /// Sends an unauthenticated request.
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.request(method, uri, body, None).await
    }

    /// Sends a request with a valid bearer token.
    pub async fn send_auth(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let bearer = self.bearer();
        self.request(method, uri, body, Some(&bearer)).await
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(authorization) = authorization {
            builder = builder.header(header::AUTHORIZATION, authorization);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }
}
