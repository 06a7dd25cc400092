use super::*;
use mockito::Matcher;

#[tokio::test]
async fn sends_one_authorized_request_with_wire_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", COMPLETION_PATH)
        .match_header("authorization", "Bearer sk-test")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "model": "deepseek-chat",
            "max_tokens": 1000,
            "response_format": {"type": "json_object"},
            "messages": [
                {"role": "system", "content": SYSTEM_INSTRUCTION},
                {"role": "user", "content": "[Background]\nWe sell B2B software.\n\n[Core Question]\nHow do we grow?"}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(&result_json("ok").to_string()))
        .expect(1)
        .create_async()
        .await;

    let coach = coach_for(&server);
    let input = CoachingInput::new("We sell B2B software.", "How do we grow?").unwrap();
    let raw = coach.invoke(&coach.build_request(&input)).await.unwrap();

    assert_eq!(raw.status, 200);
    assert!(raw.text().contains("chatcmpl-test"));
    mock.assert_async().await;
}

#[tokio::test]
async fn rate_limit_envelope_becomes_upstream_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", COMPLETION_PATH)
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":{"message":"rate limited"}}"#)
        .expect(1)
        .create_async()
        .await;

    let err = coach_for(&server)
        .get_coaching_response("Retention fell 20%.", "How do we fix it?")
        .await
        .unwrap_err();

    match err {
        CoachError::Upstream {
            status_code,
            ref provider_message,
            ref raw_body,
        } => {
            assert_eq!(status_code, 429);
            assert_eq!(provider_message, "rate limited");
            assert_eq!(raw_body, r#"{"error":{"message":"rate limited"}}"#);
        }
        other => panic!("expected Upstream, got {other:?}"),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn non_json_error_body_is_kept_as_raw_text() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", COMPLETION_PATH)
        .with_status(503)
        .with_body("upstream connect error")
        .create_async()
        .await;

    let err = coach_for(&server)
        .get_coaching_response("b", "q")
        .await
        .unwrap_err();

    match err {
        CoachError::Upstream {
            status_code,
            provider_message,
            raw_body,
        } => {
            assert_eq!(status_code, 503);
            assert_eq!(provider_message, "model provider request failed");
            assert_eq!(raw_body, "upstream connect error");
        }
        other => panic!("expected Upstream, got {other:?}"),
    }
}

#[tokio::test]
async fn string_error_envelope() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", COMPLETION_PATH)
        .with_status(401)
        .with_body(r#"{"error":"Authentication Fails (no such user)"}"#)
        .create_async()
        .await;

    let err = coach_for(&server)
        .get_coaching_response("b", "q")
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "model provider returned 401: Authentication Fails (no such user)"
    );
}

#[tokio::test]
#[serial]
async fn missing_credential_fails_before_any_request() {
    std::env::remove_var("SMART_COACH_IT_MISSING_KEY");
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let coach = SmartCoach::deepseek()
        .with_base_url(format!("{}/v1", server.url()))
        .with_api_key_env_var("SMART_COACH_IT_MISSING_KEY")
        .logging_enabled(false)
        .init()
        .unwrap();

    let err = coach
        .get_coaching_response("Retention fell 20%.", "How do we fix it?")
        .await
        .unwrap_err();

    assert!(matches!(err, CoachError::Configuration { .. }), "{err:?}");
    assert!(err.to_string().contains("SMART_COACH_IT_MISSING_KEY"));
    mock.assert_async().await;
}

#[tokio::test]
#[serial]
async fn credential_set_after_init_is_used() {
    std::env::remove_var("SMART_COACH_IT_LATE_KEY");
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", COMPLETION_PATH)
        .match_header("authorization", "Bearer sk-late")
        .with_status(200)
        .with_body(completion_body(&result_json("late").to_string()))
        .expect(1)
        .create_async()
        .await;

    let coach = SmartCoach::deepseek()
        .with_base_url(format!("{}/v1", server.url()))
        .with_api_key_env_var("SMART_COACH_IT_LATE_KEY")
        .logging_enabled(false)
        .init()
        .unwrap();

    std::env::set_var("SMART_COACH_IT_LATE_KEY", "sk-late");
    let result = coach.get_coaching_response("b", "q").await.unwrap();
    std::env::remove_var("SMART_COACH_IT_LATE_KEY");

    assert_eq!(result.summary, "late");
    mock.assert_async().await;
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let coach = SmartCoach::deepseek()
        .with_base_url("http://127.0.0.1:1/v1")
        .with_api_key("sk-test")
        .logging_enabled(false)
        .init()
        .unwrap();

    let err = coach.get_coaching_response("b", "q").await.unwrap_err();
    assert!(matches!(err, CoachError::Transport(_)), "{err:?}");
}

#[tokio::test]
async fn invalid_base_url_is_configuration_error() {
    let coach = SmartCoach::deepseek()
        .with_base_url("not a url")
        .with_api_key("sk-test")
        .logging_enabled(false)
        .init()
        .unwrap();

    let err = coach.get_coaching_response("b", "q").await.unwrap_err();
    assert!(matches!(err, CoachError::Configuration { .. }), "{err:?}");
}

#[tokio::test]
async fn timeout_surfaces_as_transport_error() {
    // Accepts connections (via the backlog) and never answers.
    let silent = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = silent.local_addr().unwrap();

    let coach = SmartCoach::deepseek()
        .with_base_url(format!("http://{addr}/v1"))
        .with_api_key("sk-test")
        .with_timeout(std::time::Duration::from_millis(200))
        .logging_enabled(false)
        .init()
        .unwrap();

    let err = coach.get_coaching_response("b", "q").await.unwrap_err();
    assert!(
        matches!(err, CoachError::Transport(ref e) if e.is_timeout()),
        "{err:?}"
    );
    drop(silent);
}
