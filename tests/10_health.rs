mod common;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use axum::http::{Method, StatusCode};

use org_hierarchy_api::database::models::{Employee, EmployeeNode, NewEmployee};
use org_hierarchy_api::database::DatabaseError;
use org_hierarchy_api::hierarchy::{EmployeeStore, IncludeSpec};

/// Store whose connection is gone
struct UnreachableStore;

#[async_trait]
impl EmployeeStore for UnreachableStore {
    async fn find_one(&self, _id: i32) -> Result<Option<Employee>, DatabaseError> {
        Err(DatabaseError::QueryError("connection refused".to_string()))
    }

    async fn create(&self, _new_employee: NewEmployee) -> Result<Employee, DatabaseError> {
        Err(DatabaseError::QueryError("connection refused".to_string()))
    }

    async fn find_many(&self, _position_id: i32, _include: &IncludeSpec) -> Result<Vec<EmployeeNode>, DatabaseError> {
        Err(DatabaseError::QueryError("connection refused".to_string()))
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Err(DatabaseError::QueryError("connection refused".to_string()))
    }
}

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let app = common::test_app(30);

    let (status, body) = common::send(&app, Method::GET, "/health", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn root_lists_endpoints() -> Result<()> {
    let app = common::test_app(30);

    let (status, body) = common::send(&app, Method::GET, "/", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["endpoints"]["create"].is_string(), "missing create endpoint: {}", body);
    Ok(())
}

#[tokio::test]
async fn health_reports_unavailable_store() -> Result<()> {
    let app = common::test_app_with_store(Arc::new(UnreachableStore), 30);

    let (status, body) = common::send(&app, Method::GET, "/health", None).await?;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "SERVICE_UNAVAILABLE");
    Ok(())
}
