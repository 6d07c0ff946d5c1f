mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn returns_nested_tree_for_position() -> Result<()> {
    let app = common::test_app(30);
    let a = common::create_employee(&app, "A", 7, "Director", None).await?;
    let b = common::create_employee(&app, "B", 3, "Engineer", Some(a as i32)).await?;
    let c = common::create_employee(&app, "C", 3, "Engineer", Some(b as i32)).await?;

    let (status, body) = common::send(&app, Method::POST, "/employees/hierarchy", Some(json!({ "id": 7 }))).await?;

    assert_eq!(status, StatusCode::OK, "unexpected body: {}", body);
    assert_eq!(
        body,
        json!([{
            "id": a,
            "name": "A",
            "positionId": 7,
            "positionName": "Director",
            "child": [{
                "id": b,
                "name": "B",
                "positionId": 3,
                "positionName": "Engineer",
                "child": [{
                    "id": c,
                    "name": "C",
                    "positionId": 3,
                    "positionName": "Engineer",
                    "child": null
                }]
            }]
        }])
    );
    Ok(())
}

#[tokio::test]
async fn get_form_matches_post_form() -> Result<()> {
    let app = common::test_app(30);
    let a = common::create_employee(&app, "A", 7, "Director", None).await?;
    common::create_employee(&app, "B", 3, "Engineer", Some(a as i32)).await?;

    let (_, via_post) = common::send(&app, Method::POST, "/employees/hierarchy", Some(json!({ "id": 3 }))).await?;
    let (status, via_get) = common::send(&app, Method::GET, "/employees/hierarchy/3", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(via_post, via_get);
    Ok(())
}

#[tokio::test]
async fn unknown_position_is_not_found() -> Result<()> {
    let app = common::test_app(30);
    common::create_employee(&app, "A", 7, "Director", None).await?;

    let (status, body) = common::send(&app, Method::POST, "/employees/hierarchy", Some(json!({ "id": 999 }))).await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No employees found for position ID 999");
    assert_eq!(body["code"], "NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn deep_chains_stop_at_configured_depth() -> Result<()> {
    let app = common::test_app(2);
    let mut parent = None;
    for level in 0..5 {
        let position_id = if level == 0 { 1 } else { 2 };
        let id = common::create_employee(&app, &format!("L{level}"), position_id, "Staff", parent).await?;
        parent = Some(id as i32);
    }

    let (status, body) = common::send(&app, Method::GET, "/employees/hierarchy/1", None).await?;

    assert_eq!(status, StatusCode::OK);
    let level2 = &body[0]["child"][0]["child"][0];
    assert_eq!(level2["name"], "L2");
    assert!(level2["child"].is_null(), "expected truncation at depth 2: {}", body);
    Ok(())
}

#[tokio::test]
async fn malformed_position_in_path_is_json_bad_request() -> Result<()> {
    let app = common::test_app(30);

    let (status, body) = common::send(&app, Method::GET, "/employees/hierarchy/abc", None).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["error"].is_string(), "missing error message: {}", body);
    Ok(())
}
