use serde_json::Value;

use crate::helpers::{TestApp, registration_body};

#[tokio::test]
async fn register_returns_201_with_the_public_profile() {
    let app = TestApp::spawn().await;

    let response = app
        .post_register(&registration_body(
            "12345678",
            "Alice",
            "alice@tum.de",
            "secret",
        ))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let profile: Value = response.json().await.unwrap();
    assert_eq!(profile["matriculationNumber"], "12345678");
    assert_eq!(profile["name"], "Alice");
    assert_eq!(profile["email"], "alice@tum.de");
    assert!(profile.get("passwordHash").is_none());
    assert!(profile.get("password").is_none());
}

#[tokio::test]
async fn register_normalizes_email_and_trims_fields() {
    let app = TestApp::spawn().await;

    let response = app
        .post_register(&registration_body(
            " 12345678 ",
            "  Alice Auer ",
            " Alice@TUM.de ",
            "secret",
        ))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let profile: Value = response.json().await.unwrap();
    assert_eq!(profile["matriculationNumber"], "12345678");
    assert_eq!(profile["name"], "Alice Auer");
    assert_eq!(profile["email"], "alice@tum.de");
}

#[tokio::test]
async fn register_returns_400_for_malformed_input() {
    let app = TestApp::spawn().await;

    let cases = [
        ("1234567", "Alice", "alice@tum.de", "secret", "7-digit matriculation number"),
        ("123456789", "Alice", "alice@tum.de", "secret", "9-digit matriculation number"),
        ("12345678", "Alice", "alice@gmail.com", "secret", "non-university email"),
        ("12345678", "Alice", "alice@tum.de", "", "empty password"),
        ("12345678", "Alice", "alice@tum.de", "   ", "whitespace password"),
    ];

    for (matriculation_number, name, email, password, case) in cases {
        let response = app
            .post_register(&registration_body(matriculation_number, name, email, password))
            .await;
        assert_eq!(response.status().as_u16(), 400, "case: {case}");
    }
}

#[tokio::test]
async fn register_returns_409_for_duplicate_matriculation_number() {
    let app = TestApp::spawn().await;

    let first = app
        .post_register(&registration_body(
            "12345678",
            "Alice",
            "alice@tum.de",
            "secret",
        ))
        .await;
    assert_eq!(first.status().as_u16(), 201);

    let second = app
        .post_register(&registration_body("12345678", "Bob", "bob@tum.de", "pw2"))
        .await;
    assert_eq!(second.status().as_u16(), 409);
    let body: Value = second.json().await.unwrap();
    assert_eq!(
        body["error"],
        "A student with this matriculation number already has an account"
    );
}

#[tokio::test]
async fn register_returns_409_for_duplicate_email() {
    let app = TestApp::spawn().await;

    app.post_register(&registration_body("11111111", "A", "dup@tum.de", "pw1"))
        .await;
    let second = app
        .post_register(&registration_body("22222222", "B", "dup@tum.de", "pw2"))
        .await;

    assert_eq!(second.status().as_u16(), 409);
    let body: Value = second.json().await.unwrap();
    assert_eq!(
        body["error"],
        "A student with this e-mail already has an account"
    );
}

#[tokio::test]
async fn register_reports_format_errors_before_uniqueness() {
    let app = TestApp::spawn().await;

    app.post_register(&registration_body(
        "12345678",
        "Alice",
        "alice@tum.de",
        "secret",
    ))
    .await;

    // Duplicate matriculation number and a broken email: the format check
    // runs first, so this is a 400, not a 409.
    let response = app
        .post_register(&registration_body(
            "12345678",
            "Bob",
            "bob@gmail.com",
            "pw2",
        ))
        .await;
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn failed_registration_does_not_create_an_account() {
    let app = TestApp::spawn().await;

    app.post_register(&registration_body("1234567", "Alice", "alice@tum.de", "secret"))
        .await;

    let students: Value = app.get_students().await.json().await.unwrap();
    assert_eq!(students.as_array().unwrap().len(), 0);
}
