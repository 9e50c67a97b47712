use serde_json::Value;

use crate::helpers::{TestApp, registration_body};

#[tokio::test]
async fn students_returns_empty_list_for_fresh_store() {
    let app = TestApp::spawn().await;

    let response = app.get_students().await;

    assert_eq!(response.status().as_u16(), 200);
    let students: Value = response.json().await.unwrap();
    assert_eq!(students, Value::Array(vec![]));
}

#[tokio::test]
async fn students_lists_every_registered_account() {
    let app = TestApp::spawn().await;
    app.post_register(&registration_body(
        "11111111",
        "Alice",
        "alice@tum.de",
        "pw1",
    ))
    .await;
    app.post_register(&registration_body(
        "22222222",
        "Bob",
        "bob@mytum.de",
        "pw2",
    ))
    .await;

    let students: Value = app.get_students().await.json().await.unwrap();
    let students = students.as_array().unwrap();
    assert_eq!(students.len(), 2);

    let mut numbers: Vec<&str> = students
        .iter()
        .map(|student| student["matriculationNumber"].as_str().unwrap())
        .collect();
    numbers.sort();
    assert_eq!(numbers, ["11111111", "22222222"]);
}

#[tokio::test]
async fn students_projection_never_contains_password_material() {
    let app = TestApp::spawn().await;
    app.post_register(&registration_body(
        "12345678",
        "Alice",
        "alice@tum.de",
        "secret",
    ))
    .await;

    let response = app.get_students().await;
    let raw = response.text().await.unwrap();
    assert!(!raw.contains("password"));
    assert!(!raw.contains("secret"));
    assert!(!raw.contains("argon2"));

    let students: Value = serde_json::from_str(&raw).unwrap();
    let student = students.as_array().unwrap()[0].as_object().unwrap();
    assert_eq!(student.len(), 3);
    assert!(student.contains_key("matriculationNumber"));
    assert!(student.contains_key("name"));
    assert!(student.contains_key("email"));
}
