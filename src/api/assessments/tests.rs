use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::test_support::{self, question_body};

#[tokio::test]
async fn blank_title_is_rejected() {
    let (app, _guard) = test_support::lazy_app().await;

    let response = app
        .oneshot(test_support::json_request(
            Method::POST,
            "/api/v1/assessments",
            Some(json!({ "title": "" })),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn assessment_crud_cascades_to_questions() {
    let Some(ctx) = test_support::setup_test_context().await else {
        return;
    };

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(
            Method::POST,
            "/api/v1/assessments",
            Some(json!({ "title": "Botany", "description": "Plants" })),
        ))
        .await
        .expect("create");
    let status = response.status();
    let created = test_support::read_json(response).await;
    assert_eq!(status, StatusCode::CREATED, "response: {created}");
    let identifier = created["assessment_identifier"].as_str().unwrap().to_string();
    assert!(identifier.starts_with('A') && identifier.len() == 11, "{identifier}");

    for content in ["Leaf colour", "Root function"] {
        let response = ctx
            .app
            .clone()
            .oneshot(test_support::json_request(
                Method::POST,
                "/api/v1/questions",
                Some(question_body(&identifier, content)),
            ))
            .await
            .expect("add question");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(
            Method::GET,
            &format!("/api/v1/assessments/{identifier}"),
            None,
        ))
        .await
        .expect("get");
    let fetched = test_support::read_json(response).await;
    assert_eq!(fetched["question_count"], 2);

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(
            Method::PUT,
            &format!("/api/v1/assessments/{identifier}"),
            Some(json!({ "title": "Advanced botany" })),
        ))
        .await
        .expect("update");
    let updated = test_support::read_json(response).await;
    assert_eq!(updated["title"], "Advanced botany");
    assert_eq!(updated["assessment_identifier"], identifier.as_str());
    assert_eq!(updated["question_count"], 2);

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(
            Method::GET,
            "/api/v1/assessments?keyword=botany",
            None,
        ))
        .await
        .expect("list");
    let listed = test_support::read_json(response).await;
    assert_eq!(listed["total_elements"], 1);

    let delete = || {
        test_support::json_request(
            Method::DELETE,
            &format!("/api/v1/assessments/{identifier}"),
            None,
        )
    };
    let response = ctx.app.clone().oneshot(delete()).await.expect("delete");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = ctx.app.clone().oneshot(delete()).await.expect("second delete");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
        .fetch_one(ctx.state.db())
        .await
        .expect("count");
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn unknown_category_is_rejected() {
    let Some(ctx) = test_support::setup_test_context().await else {
        return;
    };

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(
            Method::POST,
            "/api/v1/assessments",
            Some(json!({ "title": "Zoology", "category_id": 9999 })),
        ))
        .await
        .expect("create");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = test_support::read_json(response).await;
    assert_eq!(json["detail"], "Category not found with this id 9999");
}
