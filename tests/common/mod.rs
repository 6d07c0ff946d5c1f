use std::sync::{Arc, Once};

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use org_hierarchy_api::app::{self, AppState};
use org_hierarchy_api::config::{ApiConfig, HierarchyConfig};
use org_hierarchy_api::database::MemoryEmployeeStore;
use org_hierarchy_api::hierarchy::EmployeeStore;

static TRACING: Once = Once::new();

/// Route handler logs to the test harness; silent unless `RUST_LOG` is set
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Router backed by a fresh in-memory store
pub fn test_app(max_depth: u32) -> Router {
    test_app_with_store(Arc::new(MemoryEmployeeStore::new()), max_depth)
}

/// Router backed by the given store
pub fn test_app_with_store(store: Arc<dyn EmployeeStore>, max_depth: u32) -> Router {
    init_tracing();
    tracing::debug!("Building test router with include depth {}", max_depth);
    let state = AppState::new(
        store,
        &HierarchyConfig {
            max_depth,
            collapse_read_errors: false,
        },
    );
    app::router(
        state,
        &ApiConfig {
            port: 0,
            enable_request_logging: false,
            enable_cors: false,
        },
    )
}

/// Send one request through the router and decode the JSON body
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json)?)
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body)?).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, value))
}

/// POST /employees/create and return the new id
pub async fn create_employee(
    app: &Router,
    name: &str,
    position_id: i32,
    position_name: &str,
    parent_id: Option<i32>,
) -> Result<i64> {
    let (status, body) = send(
        app,
        Method::POST,
        "/employees/create",
        Some(serde_json::json!({
            "name": name,
            "positionId": position_id,
            "positionName": position_name,
            "parentId": parent_id,
        })),
    )
    .await?;
    anyhow::ensure!(status == StatusCode::CREATED, "create failed with {}: {}", status, body);
    body["data"]["user"]["id"]
        .as_i64()
        .ok_or_else(|| anyhow::anyhow!("missing id in {}", body))
}
