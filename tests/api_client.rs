use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pawchat::api::{
    ApiClient, AuthApi, ChatApi, HttpAuthApi, HttpChatApi, ALERT_INTERNAL_SERVER_ERROR,
    ALERT_SERVER_UNREACHABLE, CHAT_PATH, LOGIN_PATH, REGISTRATION_PATH,
};
use pawchat::error::PawChatError;
use pawchat::models::Role;
use pawchat::ui::RecordingAlerts;

fn client_for(base_url: &str) -> (Arc<RecordingAlerts>, ApiClient) {
    let alerts = Arc::new(RecordingAlerts::new());
    let client = ApiClient::new(base_url, alerts.clone()).unwrap();
    (alerts, client)
}

#[tokio::test]
async fn get_history_parses_message_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHAT_PATH))
        .and(query_param("image_url", "https://dog.ceo/dog.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "image_url": "https://dog.ceo/dog.jpg",
            "created_at": "2024-01-01T00:00:00Z",
            "messages": [
                {"id": 10, "role": "user", "content": "cute?", "created_at": "2024-01-01T00:00:01Z"},
                {"id": 11, "role": "model", "content": "Very!", "created_at": "2024-01-01T00:00:02Z"}
            ]
        })))
        .mount(&server)
        .await;

    let (alerts, client) = client_for(&server.uri());
    let api = HttpChatApi::new(client);

    let messages = api.get_history("https://dog.ceo/dog.jpg").await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[0].content, "cute?");
    assert_eq!(messages[1].role, Role::Model);
    assert!(alerts.messages().is_empty());
}

#[tokio::test]
async fn ask_question_posts_payload_and_parses_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .and(body_json(json!({
            "image_url": "https://dog.ceo/dog.jpg",
            "prompt": "what breed?"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "response": "Looks like a shiba inu."
        })))
        .mount(&server)
        .await;

    let (_, client) = client_for(&server.uri());
    let api = HttpChatApi::new(client);

    let reply = api
        .ask_question("https://dog.ceo/dog.jpg", "what breed?")
        .await
        .unwrap();
    assert_eq!(reply, "Looks like a shiba inu.");
}

#[tokio::test]
async fn clear_history_sends_delete_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(CHAT_PATH))
        .and(body_json(json!({"image_url": "https://dog.ceo/dog.jpg"})))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let (_, client) = client_for(&server.uri());
    let api = HttpChatApi::new(client);

    api.clear_history("https://dog.ceo/dog.jpg").await.unwrap();
}

#[tokio::test]
async fn get_all_sessions_parses_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "image_url": "https://dog.ceo/a.jpg", "created_at": "2024-01-01T00:00:00Z"},
            {"id": 2, "image_url": "https://dog.ceo/b.jpg", "created_at": "2024-01-02T00:00:00Z"}
        ])))
        .mount(&server)
        .await;

    let (_, client) = client_for(&server.uri());
    let api = HttpChatApi::new(client);

    let sessions = api.get_all_sessions().await.unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[1].image_url, "https://dog.ceo/b.jpg");
}

#[tokio::test]
async fn delete_all_sessions_uses_bare_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let (_, client) = client_for(&server.uri());
    let api = HttpChatApi::new(client);

    api.delete_all_sessions().await.unwrap();
}

#[tokio::test]
async fn login_parses_issued_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .and(body_json(json!({"username": "alice", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"key": "abc123"})))
        .mount(&server)
        .await;

    let (_, client) = client_for(&server.uri());
    let api = HttpAuthApi::new(client);

    let token = api.login("alice", "pw").await.unwrap();
    assert_eq!(token, "abc123");
}

#[tokio::test]
async fn register_sends_both_password_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(REGISTRATION_PATH))
        .and(body_json(json!({
            "username": "bob",
            "password1": "pw",
            "password2": "pw"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .mount(&server)
        .await;

    let (_, client) = client_for(&server.uri());
    let api = HttpAuthApi::new(client);

    api.register("bob", "pw", "pw").await.unwrap();
}

#[tokio::test]
async fn internal_server_error_fires_one_alert_and_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (alerts, client) = client_for(&server.uri());
    let api = HttpChatApi::new(client);

    let err = api.get_history("https://dog.ceo/dog.jpg").await.unwrap_err();
    match err {
        PawChatError::ApiError { status, .. } => assert_eq!(status, 500),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(alerts.messages(), vec![ALERT_INTERNAL_SERVER_ERROR]);
}

#[tokio::test]
async fn client_error_carries_server_message_without_alert() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "缺少 image_url 或 prompt"})),
        )
        .mount(&server)
        .await;

    let (alerts, client) = client_for(&server.uri());
    let api = HttpChatApi::new(client);

    let err = api.ask_question("https://dog.ceo/dog.jpg", "hi").await.unwrap_err();
    assert_eq!(err.server_message(), Some("缺少 image_url 或 prompt"));
    assert!(alerts.messages().is_empty());
}

#[tokio::test]
async fn timeout_yields_timeout_error_without_alert() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CHAT_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"messages": []}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let alerts = Arc::new(RecordingAlerts::new());
    let client =
        ApiClient::with_timeout(&server.uri(), alerts.clone(), Duration::from_millis(100))
            .unwrap();
    let api = HttpChatApi::new(client);

    let err = api.get_history("https://dog.ceo/dog.jpg").await.unwrap_err();
    assert!(matches!(err, PawChatError::Timeout));
    assert!(alerts.messages().is_empty());
}

#[tokio::test]
async fn missing_base_url_is_a_configuration_error() {
    // Relative paths cannot be turned into requests without a base URL.
    let (alerts, client) = client_for("");
    let api = HttpChatApi::new(client);

    let err = api.get_history("https://dog.ceo/dog.jpg").await.unwrap_err();
    assert!(matches!(err, PawChatError::ConfigError(_)));
    assert!(alerts.messages().is_empty());
}

#[tokio::test]
async fn unreachable_server_fires_network_alert() {
    // Nothing listens on this port.
    let (alerts, client) = client_for("http://127.0.0.1:9");
    let api = HttpChatApi::new(client);

    let err = api.get_history("https://dog.ceo/dog.jpg").await.unwrap_err();
    assert!(matches!(err, PawChatError::NetworkError(_)));
    assert_eq!(alerts.messages(), vec![ALERT_SERVER_UNREACHABLE]);
}
