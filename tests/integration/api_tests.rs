//! API integration tests
//!
//! Run against a live server backed by a migrated database, started with
//! the bootstrap admin from `.env.example`:
//! `cargo test --test api_tests -- --ignored`

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Register a fresh employee and return (email, bearer token)
async fn sign_up_and_login(client: &Client) -> (String, String) {
    let email = format!("it-{}@example.com", Uuid::new_v4());

    let response = client
        .post(format!("{}/Users/SignUp", BASE_URL))
        .json(&json!({
            "name": "Integration Tester",
            "email": email,
            "password": "secret123"
        }))
        .send()
        .await
        .expect("Failed to send sign-up request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = client
        .post(format!("{}/auth/credentials", BASE_URL))
        .json(&json!({ "email": email, "password": "secret123" }))
        .send()
        .await
        .expect("Failed to send login request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse login response");
    let token = body["data"]["token"].as_str().expect("No token in response").to_string();
    (email, format!("Bearer {}", token))
}

/// Log in as the bootstrap admin configured in `.env.example`
async fn admin_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/auth/credentials", BASE_URL))
        .json(&json!({ "email": "admin@example.com", "password": "admin123" }))
        .send()
        .await
        .expect("Failed to send admin login request");
    assert!(response.status().is_success(), "bootstrap admin is not configured");

    let body: Value = response.json().await.expect("Failed to parse login response");
    let token = body["data"]["token"].as_str().expect("No token in response");
    format!("Bearer {}", token)
}

/// DELETE `path` and check it is a 404 wrapped in the error envelope
async fn assert_delete_not_found(client: &Client, token: &str, path: &str) {
    let response = client
        .delete(format!("{}{}", BASE_URL, path))
        .header("Authorization", token)
        .send()
        .await
        .expect("Failed to send delete request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND, "DELETE {}", path);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false, "DELETE {}", path);
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/credentials", BASE_URL))
        .json(&json!({ "email": "nobody@example.com", "password": "wrong" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_sign_up_conflicts() {
    let client = Client::new();
    let (email, _) = sign_up_and_login(&client).await;

    let response = client
        .post(format!("{}/Users/SignUp", BASE_URL))
        .json(&json!({ "name": "Again", "email": email.to_uppercase(), "password": "secret123" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore]
async fn test_request_status_normalization_end_to_end() {
    let client = Client::new();
    let (email, token) = sign_up_and_login(&client).await;

    let response = client
        .post(format!("{}/Requests", BASE_URL))
        .header("Authorization", &token)
        .json(&json!({ "title": "New laptop", "created_by": email, "status": "Pending" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let pending: Value = client
        .get(format!("{}/Requests/Created_by/{}/pending", BASE_URL, email))
        .header("Authorization", &token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(pending["data"][0]["id"], id.as_str());

    let response = client
        .put(format!("{}/Requests/Id/{}", BASE_URL, id))
        .header("Authorization", &token)
        .json(&json!({ "status": "cancelled" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    for token_text in ["canceled", "cancelled", "CANCELED", "all"] {
        let body: Value = client
            .get(format!("{}/Requests/Created_by/{}/{}", BASE_URL, email, token_text))
            .header("Authorization", &token)
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["data"][0]["id"], id.as_str(), "status token {}", token_text);
        assert_eq!(body["data"][0]["status"], "Canceled");
    }

    let none: Value = client
        .get(format!("{}/Requests/Created_by/{}/pending", BASE_URL, email))
        .header("Authorization", &token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(none["data"], json!([]));
}

#[tokio::test]
#[ignore]
async fn test_log_is_trimmed_to_fifty() {
    let client = Client::new();
    let (email, token) = sign_up_and_login(&client).await;

    for i in 0..60 {
        let response = client
            .post(format!("{}/Log", BASE_URL))
            .header("Authorization", &token)
            .json(&json!({
                "user_email": email,
                "action": format!("action-{}", i)
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let body: Value = client
        .get(format!("{}/Log/{}?page=1&limit=50", BASE_URL, email))
        .header("Authorization", &token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["total"], 50);
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 50);
    // Newest first; the sign-up entry and the ten oldest posted entries are gone
    assert_eq!(entries[0]["action"], "action-59");
    assert!(entries.iter().all(|e| e["action"] != "action-0" && e["action"] != "sign_up"));
}

#[tokio::test]
#[ignore]
async fn test_get_missing_request_is_not_found() {
    let client = Client::new();
    let (_, token) = sign_up_and_login(&client).await;

    let response = client
        .get(format!("{}/Requests/Id/{}", BASE_URL, Uuid::new_v4()))
        .header("Authorization", &token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
#[ignore]
async fn test_delete_missing_ids_are_not_found() {
    let client = Client::new();
    let token = admin_token(&client).await;

    for resource in [
        "/Requests/Id",
        "/Assets",
        "/AssetServices",
        "/Receipts",
        "/Departments",
        "/AssetCategories",
        "/Users",
    ] {
        let path = format!("{}/{}", resource, Uuid::new_v4());
        assert_delete_not_found(&client, &token, &path).await;
    }
}

#[tokio::test]
#[ignore]
async fn test_delete_request_then_delete_again() {
    let client = Client::new();
    let (email, token) = sign_up_and_login(&client).await;
    let admin = admin_token(&client).await;

    let response = client
        .post(format!("{}/Requests", BASE_URL))
        .header("Authorization", &token)
        .json(&json!({ "title": "Docking station", "created_by": email }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let response = client
        .delete(format!("{}/Requests/Id/{}", BASE_URL, id))
        .header("Authorization", &admin)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);

    assert_delete_not_found(&client, &admin, &format!("/Requests/Id/{}", id)).await;
}

#[tokio::test]
#[ignore]
async fn test_missing_required_field_writes_nothing() {
    let client = Client::new();
    let (email, token) = sign_up_and_login(&client).await;

    let response = client
        .post(format!("{}/Requests", BASE_URL))
        .header("Authorization", &token)
        .json(&json!({ "created_by": email }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = client
        .get(format!("{}/Requests/Created_by/{}/all", BASE_URL, email))
        .header("Authorization", &token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"], json!([]));
}
