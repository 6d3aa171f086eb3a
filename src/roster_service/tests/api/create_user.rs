use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use uuid::Uuid;

use crate::helpers::{TestApp, json_body};

#[tokio::test]
async fn valid_input_returns_the_new_user() {
    let app = TestApp::spawn().await;

    let response = app.post_user("Test User", "test@example.com").await;

    assert_eq!(response.status(), 200);
    let body = json_body(response).await;
    assert_eq!(body["name"], "Test User");
    assert_eq!(body["email"], "test@example.com");
    let id = body["id"].as_str().expect("id missing from response");
    assert!(Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn a_taken_email_is_rejected() {
    let app = TestApp::spawn().await;
    app.post_user("Test User", "test@example.com").await;

    let response = app.post_user("Another User", "test@example.com").await;

    assert_eq!(response.status(), 400);
    let body = json_body(response).await;
    assert_eq!(body["code"], "User.EmailNotUnique");
    assert_eq!(body["message"], "The email is already in use.");
}

#[tokio::test]
async fn a_blank_name_is_rejected_before_the_email_is_checked() {
    let app = TestApp::spawn().await;

    // Email is invalid too; the name error must win.
    let response = app.post_user("   ", "not-an-email").await;

    assert_eq!(response.status(), 400);
    let body = json_body(response).await;
    assert_eq!(body["code"], "UserBuilder.NameEmpty");
}

#[tokio::test]
async fn malformed_emails_are_rejected() {
    let app = TestApp::spawn().await;

    for email in ["invalid-email", "invalid@email", "invalid@.com"] {
        let response = app.post_user("Test User", email).await;

        assert_eq!(response.status(), 400, "{email}");
        let body = json_body(response).await;
        assert_eq!(body["code"], "UserBuilder.InvalidEmail", "{email}");
        assert_eq!(body["message"], "Invalid email format.", "{email}");
    }
}

#[tokio::test]
async fn an_empty_email_is_rejected_with_its_own_message() {
    let app = TestApp::spawn().await;

    let response = app.post_user("Test User", "").await;

    assert_eq!(response.status(), 400);
    let body = json_body(response).await;
    assert_eq!(body["code"], "UserBuilder.InvalidEmail");
    assert_eq!(body["message"], "Email cannot be empty.");
}

#[tokio::test]
async fn generated_inputs_create_distinct_users() {
    let app = TestApp::spawn().await;

    for i in 0..3 {
        let name: String = Name().fake();
        // Prefix dodges the rare generator collision across iterations.
        let email = format!("{i}.{}", SafeEmail().fake::<String>());

        let response = app.post_user(&name, &email).await;

        assert_eq!(response.status(), 200);
        let body = json_body(response).await;
        assert_eq!(body["name"], name.as_str());
        assert_eq!(body["email"], email.as_str());
    }

    let listed = json_body(app.get("/users").await).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(3));
}
