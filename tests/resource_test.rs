//! Integration tests for resource CRUD, listings, and click tracking.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_private_resource_flow() {
    let app = helpers::TestApp::new();
    let ann = app.register("Ann", "ann@x.com", "secret1").await;

    let created = app
        .request(
            "POST",
            "/api/v1/resources",
            Some(json!({ "title": "Go Docs", "url": "https://go.dev", "is_public": false })),
            Some(&ann),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["title"], "Go Docs");
    assert_eq!(created.body["click_count"], 0);
    assert_eq!(created.body["is_public"], false);
    let id = created.body["id"].as_i64().expect("id");

    let anonymous = app
        .request("GET", &format!("/api/v1/resources/{id}"), None, None)
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let public = app
        .request("GET", "/api/v1/resources/public", None, None)
        .await;
    assert_eq!(public.status, StatusCode::OK);
    assert_eq!(public.body["total"], 0);
    assert_eq!(public.body["resources"], json!([]));
    assert_eq!(public.body["pages"], 0);

    let own = app
        .request("GET", &format!("/api/v1/resources/{id}"), None, Some(&ann))
        .await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(own.body["url"], "https://go.dev");
}

#[tokio::test]
async fn test_other_users_see_public_but_cannot_write() {
    let app = helpers::TestApp::new();
    let ann = app.register("Ann", "ann@x.com", "secret1").await;
    let bob = app.register("Bob", "bob@x.com", "secret1").await;

    let public_id = app
        .create_resource(
            &ann,
            json!({ "title": "Rust Book", "url": "https://doc.rust-lang.org/book", "is_public": true }),
        )
        .await;
    let private_id = app
        .create_resource(&ann, json!({ "title": "Notes", "url": "https://notes.example" }))
        .await;

    let read_public = app
        .request("GET", &format!("/api/v1/resources/{public_id}"), None, Some(&bob))
        .await;
    assert_eq!(read_public.status, StatusCode::OK);

    let read_private = app
        .request("GET", &format!("/api/v1/resources/{private_id}"), None, Some(&bob))
        .await;
    assert_eq!(read_private.status, StatusCode::NOT_FOUND);
    assert_eq!(read_private.body["message"], "Resource not found");

    let update = app
        .request(
            "PUT",
            &format!("/api/v1/resources/{public_id}"),
            Some(json!({ "title": "Hijacked" })),
            Some(&bob),
        )
        .await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);

    let delete = app
        .request("DELETE", &format!("/api/v1/resources/{public_id}"), None, Some(&bob))
        .await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);

    let still_there = app
        .request("GET", &format!("/api/v1/resources/{public_id}"), None, Some(&ann))
        .await;
    assert_eq!(still_there.body["title"], "Rust Book");
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let app = helpers::TestApp::new();
    let ann = app.register("Ann", "ann@x.com", "secret1").await;
    let id = app
        .create_resource(
            &ann,
            json!({
                "title": "Go Docs",
                "url": "https://go.dev",
                "description": "Official docs",
                "category": "docs",
                "tags": "go,lang",
                "is_public": true
            }),
        )
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/resources/{id}"),
            Some(json!({ "title": "X" })),
            Some(&ann),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "X");
    assert_eq!(response.body["url"], "https://go.dev");
    assert_eq!(response.body["description"], "Official docs");
    assert_eq!(response.body["category"], "docs");
    assert_eq!(response.body["tags"], "go,lang");
    assert_eq!(response.body["is_public"], true);

    let invalid = app
        .request(
            "PUT",
            &format!("/api/v1/resources/{id}"),
            Some(json!({ "url": "not a url" })),
            Some(&ann),
        )
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_hides_resource() {
    let app = helpers::TestApp::new();
    let ann = app.register("Ann", "ann@x.com", "secret1").await;
    let id = app
        .create_resource(&ann, json!({ "title": "Temp", "url": "https://temp.example" }))
        .await;

    let deleted = app
        .request("DELETE", &format!("/api/v1/resources/{id}"), None, Some(&ann))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "Resource deleted successfully");

    let fetch = app
        .request("GET", &format!("/api/v1/resources/{id}"), None, Some(&ann))
        .await;
    assert_eq!(fetch.status, StatusCode::NOT_FOUND);

    let again = app
        .request("DELETE", &format!("/api/v1/resources/{id}"), None, Some(&ann))
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let listing = app
        .request("GET", "/api/v1/resources", None, Some(&ann))
        .await;
    assert_eq!(listing.body["total"], 0);
}

#[tokio::test]
async fn test_owned_listing_paginates_and_filters() {
    let app = helpers::TestApp::new();
    let ann = app.register("Ann", "ann@x.com", "secret1").await;
    let bob = app.register("Bob", "bob@x.com", "secret1").await;

    for i in 0..12 {
        let category = if i % 3 == 0 { "video" } else { "docs" };
        app.create_resource(
            &ann,
            json!({
                "title": format!("Link {i}"),
                "url": format!("https://example.com/{i}"),
                "category": category,
                "is_public": i % 2 == 0
            }),
        )
        .await;
    }
    app.create_resource(&bob, json!({ "title": "Bob's", "url": "https://bob.example" }))
        .await;

    let second_page = app
        .request("GET", "/api/v1/resources?page=2&limit=5", None, Some(&ann))
        .await;
    assert_eq!(second_page.status, StatusCode::OK);
    assert_eq!(second_page.body["total"], 12);
    assert_eq!(second_page.body["pages"], 3);
    assert_eq!(second_page.body["page"], 2);
    assert_eq!(second_page.body["resources"].as_array().map(Vec::len), Some(5));
    // Newest first: page 2 starts at the 6th most recent.
    assert_eq!(second_page.body["resources"][0]["title"], "Link 6");

    let videos = app
        .request("GET", "/api/v1/resources?category=VIDEO", None, Some(&ann))
        .await;
    assert_eq!(videos.body["total"], 4);

    let private_only = app
        .request("GET", "/api/v1/resources?is_public=false", None, Some(&ann))
        .await;
    assert_eq!(private_only.body["total"], 6);

    let search = app
        .request("GET", "/api/v1/resources?search=example.com/1", None, Some(&ann))
        .await;
    assert_eq!(search.body["total"], 3);

    let clamped = app
        .request("GET", "/api/v1/resources?page=0&limit=1000", None, Some(&ann))
        .await;
    assert_eq!(clamped.body["page"], 1);
    assert_eq!(clamped.body["limit"], 100);

    let far_page = app
        .request(
            "GET",
            "/api/v1/resources?page=100000000000000000&limit=100",
            None,
            Some(&ann),
        )
        .await;
    assert_eq!(far_page.status, StatusCode::OK);
    assert_eq!(far_page.body["total"], 12);
    assert_eq!(far_page.body["resources"].as_array().map(Vec::len), Some(0));

    let bad_page = app
        .request("GET", "/api/v1/resources?page=abc", None, Some(&ann))
        .await;
    assert_eq!(bad_page.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_public_listing_spans_owners() {
    let app = helpers::TestApp::new();
    let ann = app.register("Ann", "ann@x.com", "secret1").await;
    let bob = app.register("Bob", "bob@x.com", "secret1").await;

    app.create_resource(
        &ann,
        json!({ "title": "Ann public", "url": "https://a.example", "is_public": true }),
    )
    .await;
    app.create_resource(&ann, json!({ "title": "Ann private", "url": "https://b.example" }))
        .await;
    app.create_resource(
        &bob,
        json!({ "title": "Bob public", "url": "https://c.example", "is_public": true }),
    )
    .await;

    let response = app
        .request("GET", "/api/v1/resources/public", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 2);
    assert_eq!(response.body["resources"][0]["title"], "Bob public");
    assert_eq!(response.body["resources"][1]["title"], "Ann public");
}

#[tokio::test]
async fn test_click_tracking_is_anonymous() {
    let app = helpers::TestApp::new();
    let ann = app.register("Ann", "ann@x.com", "secret1").await;
    let id = app
        .create_resource(
            &ann,
            json!({ "title": "Go Docs", "url": "https://go.dev", "is_public": true }),
        )
        .await;

    for _ in 0..3 {
        let click = app
            .request("POST", &format!("/api/v1/resources/{id}/click"), None, None)
            .await;
        assert_eq!(click.status, StatusCode::OK);
        assert_eq!(click.body["message"], "Click tracked");
    }

    let fetched = app
        .request("GET", &format!("/api/v1/resources/{id}"), None, Some(&ann))
        .await;
    assert_eq!(fetched.body["click_count"], 3);

    let unknown = app
        .request("POST", "/api/v1/resources/999999/click", None, None)
        .await;
    assert_eq!(unknown.status, StatusCode::OK);
}

#[tokio::test]
async fn test_invalid_id_and_trailing_slash() {
    let app = helpers::TestApp::new();
    let ann = app.register("Ann", "ann@x.com", "secret1").await;

    let invalid = app
        .request("GET", "/api/v1/resources/abc", None, Some(&ann))
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.body["message"], "Invalid resource ID");

    let trailing = app
        .request("GET", "/api/v1/resources/", None, Some(&ann))
        .await;
    assert_eq!(trailing.status, StatusCode::OK);
    assert_eq!(trailing.body["total"], 0);
}
