//! End-to-end flows for entries and bookmarks.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use dram::config::Config;
use dram::db::NewUser;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

struct Taster {
    id: i32,
    key: String,
}

struct TestApp {
    router: Router,
    alice: Taster,
    bob: Taster,
}

async fn spawn_app() -> TestApp {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();
    config.security.argon2_memory_cost_kib = 1024;
    config.security.argon2_time_cost = 1;
    let security = config.security.clone();

    let state = dram::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");

    let mut tasters = Vec::new();
    for (username, first, last) in [("alice", "Alice", "Smith"), ("bob", "Bob", "Jones")] {
        let user = state
            .store()
            .create_user(
                NewUser {
                    username: username.to_string(),
                    first_name: first.to_string(),
                    last_name: last.to_string(),
                    email: format!("{username}@example.com"),
                    password: "correct horse battery".to_string(),
                    is_admin: false,
                },
                Some(&security),
            )
            .await
            .expect("Failed to create user");
        tasters.push(Taster {
            id: user.id,
            key: user.api_key,
        });
    }

    let bob = tasters.pop().unwrap();
    let alice = tasters.pop().unwrap();

    TestApp {
        router: dram::api::router(state),
        alice,
        bob,
    }
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    who: Option<&Taster>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(taster) = who {
        builder = builder.header("Authorization", format!("Token {}", taster.key));
    }

    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

fn lagavulin() -> Value {
    json!({
        "whiskey": "Lagavulin 16",
        "type_id": 7,
        "country": "Scotland",
        "part_of_country": "Islay",
        "age_in_years": 16,
        "proof": 86,
        "color_id": 10,
        "nose": "Peat smoke, iodine",
        "palate": "Rich, dried fruit",
        "finish": "Long and smoky",
        "rating_id": 5,
        "notes": "A classic"
    })
}

async fn create_entry(app: &TestApp, who: &Taster, whiskey: &str) -> Value {
    let mut payload = lagavulin();
    payload["whiskey"] = json!(whiskey);

    let (status, body) = send(&app.router, "POST", "/entries", Some(who), Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

#[tokio::test]
async fn test_create_entry_expands_lookups() {
    let app = spawn_app().await;

    let entry = create_entry(&app, &app.alice, "Lagavulin 16").await;

    assert!(entry["id"].is_number());
    assert_eq!(entry["is_owner"], true);
    assert_eq!(entry["user_id"], app.alice.id);
    assert_eq!(entry["whiskey"], "Lagavulin 16");
    assert_eq!(entry["whiskey_type"], json!({"id": 7, "label": "Single Malt"}));
    assert_eq!(
        entry["color"],
        json!({
            "id": 10,
            "label": "amontillado sherry",
            "color_grade": 0.9,
            "hex_code": "F7C23B",
            "tailwind_name": "amontillado-sherry"
        })
    );
    assert_eq!(
        entry["rating"],
        json!({"id": 5, "number_rating": 4, "label": "very good"})
    );
    assert_eq!(
        entry["user"],
        json!({"author_name": "Alice Smith", "username": "alice"})
    );
    assert_eq!(entry["proof"], 86.0);
    assert_eq!(entry["published"], false);
    assert_eq!(
        entry["publication_date"],
        chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
    );
}

#[tokio::test]
async fn test_create_entry_requires_auth() {
    let app = spawn_app().await;

    let (status, _) = send(&app.router, "POST", "/entries", None, Some(lagavulin())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_entry_rejects_bad_payloads() {
    let app = spawn_app().await;

    let mut missing = lagavulin();
    missing.as_object_mut().unwrap().remove("nose");
    let (status, body) = send(
        &app.router,
        "POST",
        "/entries",
        Some(&app.alice),
        Some(missing),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("nose"));

    let mut wrong_type = lagavulin();
    wrong_type["proof"] = json!("strong");
    let (status, _) = send(
        &app.router,
        "POST",
        "/entries",
        Some(&app.alice),
        Some(wrong_type),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut unknown_type = lagavulin();
    unknown_type["type_id"] = json!(999);
    let (status, _) = send(
        &app.router,
        "POST",
        "/entries",
        Some(&app.alice),
        Some(unknown_type),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let mut unknown_color = lagavulin();
    unknown_color["color_id"] = json!(999);
    let (status, _) = send(
        &app.router,
        "POST",
        "/entries",
        Some(&app.alice),
        Some(unknown_color),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_entry_without_color() {
    let app = spawn_app().await;

    let mut payload = lagavulin();
    payload.as_object_mut().unwrap().remove("color_id");
    let (status, body) = send(
        &app.router,
        "POST",
        "/entries",
        Some(&app.alice),
        Some(payload),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["color"].is_null());
}

#[tokio::test]
async fn test_retrieve_entry() {
    let app = spawn_app().await;
    let created = create_entry(&app, &app.alice, "Lagavulin 16").await;
    let uri = format!("/entries/{}", created["id"]);

    let (status, fetched) = send(&app.router, "GET", &uri, Some(&app.alice), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, anonymous) = send(&app.router, "GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(anonymous["is_owner"], false);
    assert_eq!(anonymous["whiskey_type"], created["whiskey_type"]);

    let (_, as_bob) = send(&app.router, "GET", &uri, Some(&app.bob), None).await;
    assert_eq!(as_bob["is_owner"], false);

    let (status, body) = send(&app.router, "GET", "/entries/9999", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_list_entries_by_username() {
    let app = spawn_app().await;
    let first = create_entry(&app, &app.alice, "Ardbeg 10").await;
    let second = create_entry(&app, &app.alice, "Talisker 10").await;
    create_entry(&app, &app.bob, "Buffalo Trace").await;

    let (status, all) = send(&app.router, "GET", "/entries", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (status, mine) = send(
        &app.router,
        "GET",
        "/entries?username=alice",
        Some(&app.alice),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let mine = mine.as_array().unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|e| e["user"]["username"] == "alice"));
    assert!(mine.iter().all(|e| e["is_owner"] == true));
    // Same publication day, so the newer id comes first.
    assert_eq!(mine[0]["id"], second["id"]);
    assert_eq!(mine[1]["id"], first["id"]);

    let (status, _) = send(&app.router, "GET", "/entries?username=nobody", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_blank_username_lists_everything() {
    let app = spawn_app().await;
    let entry = create_entry(&app, &app.alice, "Ardbeg 10").await;
    create_entry(&app, &app.bob, "Buffalo Trace").await;

    let (status, _) = send(
        &app.router,
        "POST",
        "/bookmarks",
        Some(&app.bob),
        Some(json!({"entry_id": entry["id"]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    for uri in ["/entries?username=", "/entries?username=%20"] {
        let (status, body) = send(&app.router, "GET", uri, None, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}: {body}");
        assert_eq!(body.as_array().unwrap().len(), 2, "{uri}");
    }

    let (status, body) = send(&app.router, "GET", "/bookmarks?username=", None, None).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_malformed_ids_in_path() {
    let app = spawn_app().await;

    for (method, uri) in [
        ("GET", "/entries/abc"),
        ("DELETE", "/entries/99999999999"),
        ("GET", "/bookmarks/abc"),
        ("GET", "/types/abc"),
        ("GET", "/colors/x"),
        ("GET", "/ratings/1.5"),
    ] {
        let (status, body) = send(&app.router, method, uri, Some(&app.alice), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
        assert!(body["detail"].is_string(), "{method} {uri}: {body}");
    }
}

#[tokio::test]
async fn test_update_entry() {
    let app = spawn_app().await;
    let created = create_entry(&app, &app.alice, "Lagavulin 16").await;
    let uri = format!("/entries/{}", created["id"]);

    let mut changed = lagavulin();
    changed["whiskey"] = json!("Lagavulin 8");
    changed["rating_id"] = json!(6);
    changed["published"] = json!(true);

    let (status, _) = send(&app.router, "PUT", &uri, Some(&app.bob), Some(changed.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(
        &app.router,
        "PUT",
        &uri,
        Some(&app.alice),
        Some(changed.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert!(body.is_null());

    let (_, fetched) = send(&app.router, "GET", &uri, None, None).await;
    assert_eq!(fetched["whiskey"], "Lagavulin 8");
    assert_eq!(fetched["rating"]["number_rating"], 5);
    assert_eq!(fetched["published"], true);
    assert_eq!(fetched["user_id"], app.alice.id);
    assert_eq!(fetched["publication_date"], created["publication_date"]);

    let (status, _) = send(
        &app.router,
        "PATCH",
        &uri,
        Some(&app.alice),
        Some(json!({"whiskey": "Only a name"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app.router, "PUT", &uri, None, Some(changed.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app.router,
        "PUT",
        "/entries/9999",
        Some(&app.alice),
        Some(changed),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_entry() {
    let app = spawn_app().await;
    let created = create_entry(&app, &app.alice, "Lagavulin 16").await;
    let uri = format!("/entries/{}", created["id"]);

    let (status, _) = send(&app.router, "DELETE", &uri, Some(&app.bob), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app.router, "DELETE", &uri, Some(&app.alice), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app.router, "GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app.router, "DELETE", &uri, Some(&app.alice), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bookmark_flow() {
    let app = spawn_app().await;
    let entry = create_entry(&app, &app.alice, "Lagavulin 16").await;

    let (status, bookmark) = send(
        &app.router,
        "POST",
        "/bookmarks",
        Some(&app.bob),
        Some(json!({"entryId": entry["id"]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(bookmark["entry"], entry["id"]);
    assert_eq!(bookmark["user"], app.bob.id);
    assert_eq!(bookmark["is_owner"], true);

    let uri = format!("/bookmarks/{}", bookmark["id"]);

    let (status, as_alice) = send(&app.router, "GET", &uri, Some(&app.alice), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_alice["is_owner"], false);

    let (_, as_bob) = send(&app.router, "GET", &uri, Some(&app.bob), None).await;
    assert_eq!(as_bob["is_owner"], true);

    let (status, _) = send(&app.router, "DELETE", &uri, Some(&app.alice), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app.router, "DELETE", &uri, Some(&app.bob), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app.router, "GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bookmark_requires_existing_entry() {
    let app = spawn_app().await;

    let (status, _) = send(
        &app.router,
        "POST",
        "/bookmarks",
        Some(&app.bob),
        Some(json!({"entry_id": 9999})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app.router,
        "POST",
        "/bookmarks",
        None,
        Some(json!({"entry_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_bookmark_list_expand() {
    let app = spawn_app().await;
    let older = create_entry(&app, &app.alice, "Ardbeg 10").await;
    let newer = create_entry(&app, &app.alice, "Talisker 10").await;

    for entry in [&older, &newer] {
        let (status, _) = send(
            &app.router,
            "POST",
            "/bookmarks",
            Some(&app.bob),
            Some(json!({"entry_id": entry["id"]})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, flat) = send(&app.router, "GET", "/bookmarks", Some(&app.bob), None).await;
    assert_eq!(status, StatusCode::OK);
    let flat = flat.as_array().unwrap();
    assert_eq!(flat.len(), 2);
    assert_eq!(flat[0]["entry"], newer["id"]);
    assert_eq!(flat[1]["entry"], older["id"]);

    let (status, expanded) = send(
        &app.router,
        "GET",
        "/bookmarks?expand=entry",
        Some(&app.bob),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let expanded = expanded.as_array().unwrap();
    assert_eq!(expanded[0]["entry"]["id"], newer["id"]);
    assert_eq!(expanded[0]["entry"]["whiskey"], "Talisker 10");
    assert_eq!(expanded[0]["entry"]["whiskey_type"]["label"], "Single Malt");
    assert_eq!(expanded[0]["entry"]["user"]["username"], "alice");
    // Bob owns the bookmark, not the entry inside it.
    assert_eq!(expanded[0]["is_owner"], true);
    assert_eq!(expanded[0]["entry"]["is_owner"], false);

    let (status, by_alice) = send(
        &app.router,
        "GET",
        "/bookmarks?username=alice",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_alice, json!([]));

    let (status, _) = send(&app.router, "GET", "/bookmarks?username=nobody", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_entry_removes_its_bookmarks() {
    let app = spawn_app().await;
    let entry = create_entry(&app, &app.alice, "Lagavulin 16").await;

    let (status, _) = send(
        &app.router,
        "POST",
        "/bookmarks",
        Some(&app.bob),
        Some(json!({"entry_id": entry["id"]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/entries/{}", entry["id"]);
    let (status, _) = send(&app.router, "DELETE", &uri, Some(&app.alice), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, bookmarks) = send(&app.router, "GET", "/bookmarks", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bookmarks, json!([]));
}
