use serde_json::Value;

use crate::helper::spawn_app;

#[tokio::test]
async fn create_subscriber_returns_201_for_a_valid_email() {
    let app = spawn_app().await;

    let response = app
        .post_subscriber(r#"{"email": "bulbasaur@mail.com"}"#)
        .await;

    assert_eq!(201, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["email"], "bulbasaur@mail.com");
    assert!(body["id"].as_str().is_some());
    assert!(body["subscribed_at"].as_str().is_some());

    assert_eq!(vec!["bulbasaur@mail.com".to_string()], app.saved_emails().await);
}

#[tokio::test]
async fn create_subscriber_returns_a_422_when_email_is_missing() {
    let app = spawn_app().await;

    let response = app.post_subscriber("{}").await;

    assert_eq!(422, response.status().as_u16());
}

#[tokio::test]
async fn create_subscriber_returns_a_400_when_email_is_invalid() {
    let app = spawn_app().await;
    let test_cases = [
        (r#"{"email": ""}"#, "empty email"),
        (r#"{"email": "definitely-not-an-email"}"#, "missing the @"),
        (r#"{"email": "bulbasaur@mail"}"#, "missing the domain dot"),
    ];

    for (body, description) in test_cases {
        let response = app.post_subscriber(body).await;
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload was {}.",
            description
        );
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["details"][0]["field"], "email");
    }

    assert!(app.saved_emails().await.is_empty());
}

#[tokio::test]
async fn create_subscriber_returns_a_409_for_a_duplicate_email() {
    let app = spawn_app().await;
    let body = r#"{"email": "bulbasaur@mail.com"}"#;
    app.post_subscriber(body).await;

    let response = app.post_subscriber(body).await;

    assert_eq!(409, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], 409);
}
