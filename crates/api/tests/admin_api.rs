//! HTTP-level integration tests for the admin contact endpoints.
//!
//! Covers Basic-auth enforcement on every `/admin/contacts` route, the
//! paginated and searchable listing, and deletion.

mod common;

use agency_api::auth::basic::encode_basic_header;
use agency_api::error::INTERNAL_ERROR_MESSAGE;
use agency_db::models::contact::ContactFilter;
use agency_db::repositories::ContactRepo;
use axum::http::{header, StatusCode};
use common::{
    admin_auth, body_json, body_text, delete, delete_auth, get, get_auth, post_json, spawn_app,
    valid_submission, TestApp,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Submit `n` valid contacts through the API and return their ids.
async fn submit_many(test: &TestApp, n: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(n);
    for i in 0..n {
        let response = post_json(&test.app, "/contact", valid_submission(i)).await;
        assert_eq!(response.status(), StatusCode::OK);
        ids.push(body_json(response).await["contact_id"].as_i64().unwrap());
    }
    ids
}

/// Ids of the rows rendered in an admin listing, in page order.
fn rendered_ids(html: &str) -> Vec<i64> {
    html.split("<tr data-id=\"")
        .skip(1)
        .map(|rest| rest.split('"').next().unwrap().parse().unwrap())
        .collect()
}

fn assert_challenge(response: &axum::response::Response) {
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let challenge = response
        .headers()
        .get(header::WWW_AUTHENTICATE)
        .expect("401 must carry a WWW-Authenticate challenge")
        .to_str()
        .unwrap();
    assert!(challenge.starts_with("Basic realm="), "got: {challenge}");
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[tokio::test]
async fn listing_without_credentials_is_challenged() {
    let test = spawn_app().await;

    let response = get(&test.app, "/admin/contacts").await;
    assert_challenge(&response);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["detail"], "Invalid credentials");
}

#[tokio::test]
async fn listing_with_wrong_password_is_challenged() {
    let test = spawn_app().await;

    let auth = encode_basic_header(common::ADMIN_USERNAME, "wrong");
    let response = get_auth(&test.app, "/admin/contacts", &auth).await;
    assert_challenge(&response);
}

#[tokio::test]
async fn listing_with_bearer_token_is_challenged() {
    let test = spawn_app().await;

    let response = get_auth(&test.app, "/admin/contacts", "Bearer abc.def.ghi").await;
    assert_challenge(&response);
}

#[tokio::test]
async fn delete_requires_credentials() {
    let test = spawn_app().await;
    let ids = submit_many(&test, 1).await;

    let response = delete(&test.app, &format!("/admin/contacts/{}", ids[0])).await;
    assert_challenge(&response);

    assert!(ContactRepo::find_by_id(&test.pool, ids[0]).await.unwrap().is_some());
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn second_page_of_45_shows_contacts_21_to_40() {
    let test = spawn_app().await;
    let ids = submit_many(&test, 45).await;
    let newest_first: Vec<i64> = ids.iter().rev().copied().collect();

    let response = get_auth(&test.app, "/admin/contacts?page=2", &admin_auth()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert_eq!(rendered_ids(&html), newest_first[20..40]);
    assert!(html.contains("Всего: 45. Страница 2 из 3."));
    assert!(html.contains("/admin/contacts?page=1"));
    assert!(html.contains("/admin/contacts?page=3"));
}

#[tokio::test]
async fn page_defaults_to_first_and_clamps_below_one() {
    let test = spawn_app().await;
    let ids = submit_many(&test, 25).await;

    for uri in ["/admin/contacts", "/admin/contacts?page=0", "/admin/contacts?page=-3"] {
        let html = body_text(get_auth(&test.app, uri, &admin_auth()).await).await;
        let rendered = rendered_ids(&html);
        assert_eq!(rendered.len(), 20, "{uri}");
        assert_eq!(rendered[0], *ids.last().unwrap(), "{uri}");
    }
}

#[tokio::test]
async fn page_past_the_end_is_empty() {
    let test = spawn_app().await;
    submit_many(&test, 3).await;

    let html = body_text(get_auth(&test.app, "/admin/contacts?page=9", &admin_auth()).await).await;
    assert!(rendered_ids(&html).is_empty());
    assert!(html.contains("Заявок не найдено"));
}

#[tokio::test]
async fn search_filters_and_counts() {
    let test = spawn_app().await;
    submit_many(&test, 3).await;
    let special = post_json(
        &test.app,
        "/contact",
        json!({
            "name": "Мария Сидорова",
            "email": "maria@agency.ru",
            "phone": "+7 (912) 000-11-22",
            "message": "Свадьба в августе",
        }),
    )
    .await;
    let special_id = body_json(special).await["contact_id"].as_i64().unwrap();

    for term in ["agency.ru", "9120001122", "%D0%9C%D0%B0%D1%80%D0%B8%D1%8F"] {
        let uri = format!("/admin/contacts?search={term}");
        let html = body_text(get_auth(&test.app, &uri, &admin_auth()).await).await;
        assert_eq!(rendered_ids(&html), vec![special_id], "search {term}");
        assert!(html.contains("Всего: 1."), "search {term}");
    }
}

#[tokio::test]
async fn blank_search_lists_everything() {
    let test = spawn_app().await;
    submit_many(&test, 4).await;

    let html = body_text(get_auth(&test.app, "/admin/contacts?search=%20%20", &admin_auth()).await).await;
    assert_eq!(rendered_ids(&html).len(), 4);
}

#[tokio::test]
async fn invalid_page_parameter_is_rejected() {
    let test = spawn_app().await;

    let response = get_auth(&test.app, "/admin/contacts?page=two", &admin_auth()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_contact_and_is_terminal() {
    let test = spawn_app().await;
    let ids = submit_many(&test, 2).await;
    let uri = format!("/admin/contacts/{}", ids[0]);

    let response = delete_auth(&test.app, &uri, &admin_auth()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "success");

    let again = delete_auth(&test.app, &uri, &admin_auth()).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(again).await["code"], "NOT_FOUND");

    assert_eq!(
        ContactRepo::count(&test.pool, &ContactFilter::All).await.unwrap(),
        1
    );
}

#[tokio::test]
async fn delete_unknown_contact_is_not_found() {
    let test = spawn_app().await;

    let response = delete_auth(&test.app, "/admin/contacts/424242", &admin_auth()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "Contact with id 424242 not found");
}

#[tokio::test]
async fn delete_with_non_numeric_id_is_a_json_bad_request() {
    let test = spawn_app().await;

    let response = delete_auth(&test.app, "/admin/contacts/abc", &admin_auth()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn delete_with_non_numeric_id_still_requires_credentials() {
    let test = spawn_app().await;

    let response = delete(&test.app, "/admin/contacts/abc").await;
    assert_challenge(&response);
}

// ---------------------------------------------------------------------------
// Storage faults
// ---------------------------------------------------------------------------

#[tokio::test]
async fn storage_fault_on_delete_is_a_generic_500() {
    let test = spawn_app().await;
    let ids = submit_many(&test, 1).await;
    test.pool.close().await;

    let uri = format!("/admin/contacts/{}", ids[0]);
    let response = delete_auth(&test.app, &uri, &admin_auth()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["detail"], INTERNAL_ERROR_MESSAGE);
}

#[tokio::test]
async fn storage_fault_on_listing_is_a_generic_500() {
    let test = spawn_app().await;
    test.pool.close().await;

    let response = get_auth(&test.app, "/admin/contacts", &admin_auth()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "INTERNAL_ERROR");
}
