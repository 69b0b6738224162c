//! HTTP-level tests for public registration intake and the admin review
//! endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, create_event, delete_auth, event_body, get, get_auth, post_json,
    put_json_auth, FailingNotifier, RecordingNotifier, RecordingStore,
};
use sqlx::PgPool;

fn submission(event_id: i64, name: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "event_id": event_id,
        "full_name": name,
        "email": email,
        "phone": "+965 9999 1234",
    })
}

async fn register(pool: &PgPool, body: serde_json::Value) -> axum::http::Response<axum::body::Body> {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/registrations", body).await
}

// ---------------------------------------------------------------------------
// Intake
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn capacity_one_admits_first_and_rejects_second(pool: PgPool) {
    let mut body = event_body("Tiny Workshop", 10);
    body["max_capacity"] = serde_json::json!(1);
    let event = create_event(&pool, body).await;
    let event_id = event["id"].as_i64().unwrap();

    let response = register(&pool, submission(event_id, "Alice", "alice@x.com")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let alice = body_json(response).await;
    assert_eq!(alice["status"], "pending");
    assert_eq!(alice["event"]["id"], event_id);

    let response = register(&pool, submission(event_id, "Bob", "bob@x.com")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CAPACITY_EXCEEDED");
    assert_eq!(json["error"], "This event is fully booked");

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/events/{event_id}")).await;
    assert_eq!(body_json(response).await["registration_count"], 1);

    // Approval does not free or consume capacity.
    let id = alice["id"].as_i64().unwrap();
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/registrations/{id}"),
        serde_json::json!({"status": "approved"}),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "approved");
    assert_eq!(json["event"]["title"], "Tiny Workshop");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/events/{event_id}")).await;
    assert_eq!(body_json(response).await["registration_count"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_differing_in_case_returns_409(pool: PgPool) {
    let event = create_event(&pool, event_body("Expo", 10)).await;
    let event_id = event["id"].as_i64().unwrap();

    let response = register(&pool, submission(event_id, "Alice", "alice@x.com")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = register(&pool, submission(event_id, "Alice Again", "ALICE@X.COM")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["error"], "You have already registered for this event");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn same_email_may_register_for_different_events(pool: PgPool) {
    let first = create_event(&pool, event_body("Expo One", 10)).await;
    let second = create_event(&pool, event_body("Expo Two", 12)).await;

    for event in [first, second] {
        let id = event["id"].as_i64().unwrap();
        let response = register(&pool, submission(id, "Alice", "alice@x.com")).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unpublished_event_rejects_registration(pool: PgPool) {
    let mut body = event_body("Draft Event", 10);
    body["is_published"] = serde_json::json!(false);
    let event = create_event(&pool, body).await;

    let response = register(
        &pool,
        submission(event["id"].as_i64().unwrap(), "Alice", "alice@x.com"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_STATE");
    assert_eq!(json["error"], "This event is not accepting registrations");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ended_event_rejects_registration(pool: PgPool) {
    let event = create_event(&pool, event_body("Last Week", -7)).await;

    let response = register(
        &pool,
        submission(event["id"].as_i64().unwrap(), "Alice", "alice@x.com"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "This event has already ended");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn running_multi_day_event_still_accepts(pool: PgPool) {
    let mut body = event_body("Week Long Fair", -1);
    let end = chrono::Utc::now() + chrono::Duration::days(3);
    body["end_date"] = serde_json::json!(end.to_rfc3339());
    let event = create_event(&pool, body).await;

    let response = register(
        &pool,
        submission(event["id"].as_i64().unwrap(), "Alice", "alice@x.com"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_event_returns_404(pool: PgPool) {
    let response = register(&pool, submission(999_999, "Alice", "alice@x.com")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_fields_return_400(pool: PgPool) {
    let event = create_event(&pool, event_body("Expo", 10)).await;
    let event_id = event["id"].as_i64().unwrap();

    let bad_email = submission(event_id, "Alice", "not-an-email");
    let mut bad_phone = submission(event_id, "Alice", "alice@x.com");
    bad_phone["phone"] = serde_json::json!("12");
    let missing_name = serde_json::json!({
        "event_id": event_id,
        "email": "alice@x.com",
        "phone": "+965 9999 1234",
    });

    for body in [bad_email, bad_phone, missing_name] {
        let response = register(&pool, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mistyped_event_id_returns_json_400(pool: PgPool) {
    let mut body = submission(1, "Alice", "alice@x.com");
    body["event_id"] = serde_json::json!("abc");

    let response = register(&pool, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("event_id"));
}

/// Fire `bodies` at the intake endpoint at once and collect the statuses.
async fn register_concurrently(pool: &PgPool, bodies: Vec<serde_json::Value>) -> Vec<StatusCode> {
    let handles: Vec<_> = bodies
        .into_iter()
        .map(|body| {
            let pool = pool.clone();
            tokio::spawn(async move { register(&pool, body).await.status() })
        })
        .collect();

    let mut statuses = Vec::with_capacity(handles.len());
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }
    statuses
}

async fn stored_registrations(pool: &PgPool, event_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM registrations WHERE event_id = $1")
        .bind(event_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_submissions_never_overbook(pool: PgPool) {
    let mut body = event_body("Tiny Workshop", 10);
    body["max_capacity"] = serde_json::json!(1);
    let event = create_event(&pool, body).await;
    let event_id = event["id"].as_i64().unwrap();

    let bodies = (0..10)
        .map(|i| submission(event_id, "Guest", &format!("guest{i}@x.com")))
        .collect();
    let statuses = register_concurrently(&pool, bodies).await;

    let created = statuses.iter().filter(|s| **s == StatusCode::CREATED).count();
    assert_eq!(created, 1, "statuses: {statuses:?}");
    assert!(statuses
        .iter()
        .all(|s| *s == StatusCode::CREATED || *s == StatusCode::BAD_REQUEST));
    assert_eq!(stored_registrations(&pool, event_id).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_duplicate_email_admits_one(pool: PgPool) {
    let event = create_event(&pool, event_body("Expo", 10)).await;
    let event_id = event["id"].as_i64().unwrap();

    let bodies = (0..10)
        .map(|_| submission(event_id, "Alice", "alice@x.com"))
        .collect();
    let statuses = register_concurrently(&pool, bodies).await;

    let created = statuses.iter().filter(|s| **s == StatusCode::CREATED).count();
    let conflicts = statuses.iter().filter(|s| **s == StatusCode::CONFLICT).count();
    assert_eq!((created, conflicts), (1, 9), "statuses: {statuses:?}");
    assert_eq!(stored_registrations(&pool, event_id).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn email_is_stored_lowercased_and_operators_notified(pool: PgPool) {
    let event = create_event(&pool, event_body("Expo", 10)).await;
    let notifier = Arc::new(RecordingNotifier::default());
    let app = common::build_test_app_with(
        pool,
        Arc::new(RecordingStore::default()),
        notifier.clone(),
    );

    let response = post_json(
        app,
        "/api/v1/registrations",
        submission(event["id"].as_i64().unwrap(), "Alice", "Alice@X.com"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["email"], "alice@x.com");

    let sent = notifier.registrations.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].event_title, "Expo");
    assert_eq!(sent[0].full_name, "Alice");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn notification_failure_does_not_fail_registration(pool: PgPool) {
    let event = create_event(&pool, event_body("Expo", 10)).await;
    let app = common::build_test_app_with(
        pool,
        Arc::new(RecordingStore::default()),
        Arc::new(FailingNotifier),
    );

    let response = post_json(
        app,
        "/api/v1/registrations",
        submission(event["id"].as_i64().unwrap(), "Alice", "alice@x.com"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Admin review
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_newest_first_and_filterable(pool: PgPool) {
    let first = create_event(&pool, event_body("Expo One", 10)).await;
    let second = create_event(&pool, event_body("Expo Two", 12)).await;
    let first_id = first["id"].as_i64().unwrap();
    let second_id = second["id"].as_i64().unwrap();

    register(&pool, submission(first_id, "Alice", "alice@x.com")).await;
    register(&pool, submission(second_id, "Bob", "bob@x.com")).await;
    register(&pool, submission(first_id, "Carol", "carol@x.com")).await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/registrations", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["full_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Carol", "Bob", "Alice"]);
    assert_eq!(json[0]["event"]["title"], "Expo One");

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/registrations?event_id={first_id}&status=pending"),
        &admin_token(),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_with_unknown_status_filter_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/registrations?status=maybe", &admin_token()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_status_validates_value(pool: PgPool) {
    let event = create_event(&pool, event_body("Expo", 10)).await;
    let response = register(
        &pool,
        submission(event["id"].as_i64().unwrap(), "Alice", "alice@x.com"),
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    for body in [serde_json::json!({"status": "cancelled"}), serde_json::json!({})] {
        let app = common::build_test_app(pool.clone());
        let response = put_json_auth(
            app,
            &format!("/api/v1/registrations/{id}"),
            body,
            &admin_token(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // Any status may follow any other.
    for status in ["rejected", "pending", "approved"] {
        let app = common::build_test_app(pool.clone());
        let response = put_json_auth(
            app,
            &format!("/api/v1/registrations/{id}"),
            serde_json::json!({"status": status}),
            &admin_token(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], status);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_and_delete_registration(pool: PgPool) {
    let event = create_event(&pool, event_body("Expo", 10)).await;
    let response = register(
        &pool,
        submission(event["id"].as_i64().unwrap(), "Alice", "alice@x.com"),
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/registrations/{id}"), &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["event"]["title"], "Expo");

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/registrations/{id}"), &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/registrations/{id}"), &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_event_removes_its_registrations(pool: PgPool) {
    let event = create_event(&pool, event_body("Expo", 10)).await;
    let event_id = event["id"].as_i64().unwrap();
    let response = register(&pool, submission(event_id, "Alice", "alice@x.com")).await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/events/{event_id}"), &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/registrations/{id}"), &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
