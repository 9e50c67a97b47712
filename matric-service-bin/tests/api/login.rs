use serde_json::Value;

use crate::helpers::{TestApp, registration_body};

#[tokio::test]
async fn login_by_email_succeeds_with_registered_credentials() {
    let app = TestApp::spawn().await;
    app.post_register(&registration_body(
        "12345678",
        "Alice",
        "alice@tum.de",
        "secret",
    ))
    .await;

    let response = app.post_login_email("alice@tum.de", "secret").await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "Login successful");
}

#[tokio::test]
async fn login_by_email_returns_401_for_wrong_password() {
    let app = TestApp::spawn().await;
    app.post_register(&registration_body(
        "12345678",
        "Alice",
        "alice@tum.de",
        "secret",
    ))
    .await;

    let response = app.post_login_email("alice@tum.de", "wrong_").await;

    assert_eq!(response.status().as_u16(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid email or password");
}

#[tokio::test]
async fn login_by_email_returns_401_for_unknown_account() {
    let app = TestApp::spawn().await;

    let response = app.post_login_email("bob@tum.de", "secret").await;

    // Indistinguishable from a wrong password on purpose.
    assert_eq!(response.status().as_u16(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid email or password");
}

#[tokio::test]
async fn login_by_matriculation_number_succeeds_with_registered_credentials() {
    let app = TestApp::spawn().await;
    app.post_register(&registration_body(
        "87654321",
        "Bob",
        "bob@tum.de",
        "secret",
    ))
    .await;

    let response = app.post_login_matriculation("87654321", "secret").await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "Login successful");
}

#[tokio::test]
async fn login_by_matriculation_number_returns_401_for_unknown_account() {
    let app = TestApp::spawn().await;

    let response = app.post_login_matriculation("00000000", "secret").await;

    assert_eq!(response.status().as_u16(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid matriculation number or password");
}

#[tokio::test]
async fn accounts_sharing_a_raw_password_each_verify_against_their_own_hash() {
    let app = TestApp::spawn().await;
    app.post_register(&registration_body(
        "11111111",
        "Alice",
        "alice@tum.de",
        "shared-pw",
    ))
    .await;
    app.post_register(&registration_body(
        "22222222",
        "Bob",
        "bob@tum.de",
        "shared-pw",
    ))
    .await;

    assert_eq!(
        app.post_login_email("alice@tum.de", "shared-pw")
            .await
            .status()
            .as_u16(),
        200
    );
    assert_eq!(
        app.post_login_email("bob@tum.de", "shared-pw")
            .await
            .status()
            .as_u16(),
        200
    );
}

#[tokio::test]
async fn login_lookup_does_not_normalize_the_email() {
    let app = TestApp::spawn().await;
    app.post_register(&registration_body(
        "12345678",
        "Alice",
        "alice@tum.de",
        "secret",
    ))
    .await;

    // Registration stored the lowercased address; the raw uppercase key
    // matches nothing.
    let response = app.post_login_email("Alice@TUM.de", "secret").await;
    assert_eq!(response.status().as_u16(), 401);
}
