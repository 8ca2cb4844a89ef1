use std::time::Duration;

use assistbot::ai::completion::{CompletionClient, BODY_SNIPPET_CHARS};
use assistbot::tests::util::{chat_completion_body, test_assistant, test_settings};
use assistbot::{select_template, AssistError, Mode, Profile, RemoteError};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CHAT_PATH: &str = "/v1/chat/completions";

fn chat_url(server: &MockServer) -> String {
    format!("{}{CHAT_PATH}", server.uri())
}

#[tokio::test]
async fn complete_returns_content_and_sends_two_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .and(header("authorization", "Bearer key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body("OK")))
        .expect(1)
        .mount(&server)
        .await;

    let template = select_template(Profile::Writing, Mode::A);
    let client = CompletionClient::new(test_settings(&chat_url(&server), Some("key"))).unwrap();
    let answer = client.complete(template, "hello").await.unwrap();
    assert_eq!(answer, "OK");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: Value = requests[0].body_json().unwrap();
    assert_eq!(
        body["messages"],
        json!([
            { "role": "system", "content": template },
            { "role": "user", "content": "hello" }
        ])
    );
    assert_eq!(body["model"], "gpt-test");
}

#[tokio::test]
async fn user_text_is_forwarded_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body("done")))
        .mount(&server)
        .await;

    let text = format!("  Minutes:\n\n{}\n  ", "decision ".repeat(2_000));
    let client = CompletionClient::new(test_settings(&chat_url(&server), Some("key"))).unwrap();
    client.complete("system", &text).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: Value = requests[0].body_json().unwrap();
    assert_eq!(body["messages"][1]["content"], Value::String(text));
}

#[tokio::test]
async fn empty_credential_fails_without_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body("OK")))
        .expect(0)
        .mount(&server)
        .await;

    for key in [None, Some(""), Some("   ")] {
        let client = CompletionClient::new(test_settings(&chat_url(&server), key)).unwrap();
        let err = client.complete("system", "hello").await.unwrap_err();
        assert!(matches!(err, AssistError::MissingCredential), "{key:?}: {err}");
    }
    server.verify().await;
}

#[tokio::test]
async fn empty_input_fails_without_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body("OK")))
        .expect(0)
        .mount(&server)
        .await;

    let client = CompletionClient::new(test_settings(&chat_url(&server), Some("key"))).unwrap();
    let err = client.complete("system", " \n\t").await.unwrap_err();
    assert!(matches!(err, AssistError::EmptyInput));

    let assistant = test_assistant(Profile::Writing, &chat_url(&server), Some("key"));
    let err = assistant.ask(Mode::B, "").await.unwrap_err();
    assert!(matches!(err, AssistError::EmptyInput));
    server.verify().await;
}

#[tokio::test]
async fn empty_input_is_reported_before_missing_credential() {
    let assistant = test_assistant(Profile::Writing, "http://127.0.0.1:9/unused", None);
    let err = assistant.ask(Mode::A, "   ").await.unwrap_err();
    assert!(matches!(err, AssistError::EmptyInput));
}

#[tokio::test]
async fn server_error_is_remote_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let client = CompletionClient::new(test_settings(&chat_url(&server), Some("key"))).unwrap();
    let err = client.complete("system", "hello").await.unwrap_err();
    match err {
        AssistError::RemoteService(RemoteError::Status { status, body }) => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn long_error_page_is_cut_to_a_snippet() {
    let server = MockServer::start().await;
    let page = format!("<html><body>{}</body></html>", "Bad gateway. ".repeat(500));
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_raw(page.clone(), "text/html"))
        .mount(&server)
        .await;

    let client = CompletionClient::new(test_settings(&chat_url(&server), Some("key"))).unwrap();
    let err = client.complete("system", "hello").await.unwrap_err();
    match err {
        AssistError::RemoteService(RemoteError::Status { status, body }) => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(body.chars().count(), BODY_SNIPPET_CHARS);
            assert!(page.starts_with(&body));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_body_is_remote_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "text/plain"))
        .mount(&server)
        .await;

    let client = CompletionClient::new(test_settings(&chat_url(&server), Some("key"))).unwrap();
    let err = client.complete("system", "hello").await.unwrap_err();
    assert!(matches!(
        err,
        AssistError::RemoteService(RemoteError::Malformed(_))
    ));
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_completion_body("late"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let mut settings = test_settings(&chat_url(&server), Some("key"));
    settings.timeout = Duration::from_millis(200);
    let client = CompletionClient::new(settings).unwrap();
    let err = client.complete("system", "hello").await.unwrap_err();
    assert!(matches!(
        err,
        AssistError::RemoteService(RemoteError::Timeout(_))
    ));
}

#[tokio::test]
async fn unreachable_endpoint_is_remote_service_error() {
    // nothing listens on the discard port
    let client =
        CompletionClient::new(test_settings("http://127.0.0.1:9/v1/chat/completions", Some("key")))
            .unwrap();
    let err = client.complete("system", "hello").await.unwrap_err();
    assert!(matches!(err, AssistError::RemoteService(_)));
}

#[tokio::test]
async fn assistant_uses_profile_template_and_temperature() {
    let server = MockServer::start().await;
    let template = select_template(Profile::Cooking, Mode::B);
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .and(body_partial_json(json!({
            "temperature": 0.6,
            "messages": [{ "role": "system", "content": template }, { "role": "user", "content": "rice and natto" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body("- Nutrition overview")))
        .expect(1)
        .mount(&server)
        .await;

    let assistant = test_assistant(Profile::Cooking, &chat_url(&server), Some("key"));
    let answer = assistant.ask(Mode::B, "rice and natto").await.unwrap();
    assert!(!answer.is_empty());
    server.verify().await;
}
