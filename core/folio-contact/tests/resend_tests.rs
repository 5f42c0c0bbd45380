use folio_contact::{MailError, Mailer, OutboundEmail, ResendConfig, ResendMailer};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_config(server: &MockServer) -> ResendConfig {
    ResendConfig {
        api_key: "re_test_key".to_string(),
        api_base_url: server.uri(),
        ..Default::default()
    }
}

fn notification() -> OutboundEmail {
    OutboundEmail {
        from: "Site <site@example.com>".to_string(),
        to: vec!["ops@example.com".to_string()],
        subject: "[Portfolio] Hello".to_string(),
        reply_to: Some("a@x.com".to_string()),
        html: Some("<p>hi</p>".to_string()),
        text: None,
    }
}

// ── Config ──────────────────────────────────────────────────────

#[test]
fn resend_config_default() {
    let cfg = ResendConfig::default();
    assert_eq!(cfg.api_base_url, "https://api.resend.com");
    assert_eq!(cfg.timeout_secs, 30);
    assert!(cfg.api_key.is_empty());
}

#[test]
fn empty_api_key_is_rejected() {
    let result = ResendMailer::new(ResendConfig::default());
    assert!(matches!(result, Err(MailError::Config(_))));
}

#[test]
fn provider_name() {
    let mailer = ResendMailer::new(ResendConfig {
        api_key: "k".to_string(),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(mailer.provider_name(), "Resend");
}

// ── Wiremock-based integration tests ────────────────────────────

#[tokio::test]
async fn send_posts_json_with_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(header("authorization", "Bearer re_test_key"))
        .and(body_partial_json(serde_json::json!({
            "from": "Site <site@example.com>",
            "to": ["ops@example.com"],
            "reply_to": "a@x.com",
            "subject": "[Portfolio] Hello",
            "html": "<p>hi</p>"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mailer = ResendMailer::new(mock_config(&server)).unwrap();
    let sent = mailer.send(&notification()).await.unwrap();
    assert_eq!(sent.id, "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794");
}

#[tokio::test]
async fn provider_error_message_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "statusCode": 422,
            "name": "validation_error",
            "message": "Invalid `to` field."
        })))
        .mount(&server)
        .await;

    let mailer = ResendMailer::new(mock_config(&server)).unwrap();
    match mailer.send(&notification()).await {
        Err(MailError::Api { status, message }) => {
            assert_eq!(status, 422);
            assert_eq!(message, "Invalid `to` field.");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_is_kept_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let mailer = ResendMailer::new(mock_config(&server)).unwrap();
    match mailer.send(&notification()).await {
        Err(MailError::Api { status, message }) => {
            assert_eq!(status, 502);
            assert_eq!(message, "bad gateway");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_provider_is_http_error() {
    let config = ResendConfig {
        api_key: "re_test_key".to_string(),
        api_base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 5,
    };

    let mailer = ResendMailer::new(config).unwrap();
    let result = mailer.send(&notification()).await;
    assert!(matches!(result, Err(MailError::Http(_))));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "x" })))
        .expect(1)
        .mount(&server)
        .await;

    let config = ResendConfig {
        api_base_url: format!("{}/", server.uri()),
        ..mock_config(&server)
    };
    let mailer = ResendMailer::new(config).unwrap();
    assert_eq!(mailer.send(&notification()).await.unwrap().id, "x");
}
