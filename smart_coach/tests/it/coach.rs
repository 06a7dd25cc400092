use super::*;
use mockito::Matcher;

async fn mock_content(server: &mut mockito::Server, content: &str) -> mockito::Mock {
    server
        .mock("POST", COMPLETION_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(content))
        .expect(1)
        .create_async()
        .await
}

#[tokio::test]
async fn clean_json_content_becomes_structured_result() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_content(&mut server, &result_json("Retention is falling.").to_string()).await;

    let result = coach_for(&server)
        .get_coaching_response(
            "We are a mid-size SaaS company and retention dropped 20% last quarter.",
            "How do we improve retention?",
        )
        .await
        .unwrap();

    assert_eq!(result.summary, "Retention is falling.");
    assert_eq!(result.smart_questions.specific.len(), 1);
    assert!(result.smart_questions.time_bound.is_empty());
    assert_eq!(result.smart_questions.total(), 4);
    assert_eq!(result.critique.shortcomings.len(), 2);
    assert_eq!(
        result.critique.negative_example.question,
        "Should we improve retention?"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn prose_and_fences_around_the_object_are_tolerated() {
    let mut server = mockito::Server::new_async().await;
    let content = format!(
        "Sure! Here is your analysis:\n```json\n{}\n```\nLet me know if you need more.",
        result_json("wrapped")
    );
    let _mock = mock_content(&mut server, &content).await;

    let result = coach_for(&server)
        .get_coaching_response("b", "q")
        .await
        .unwrap();
    assert_eq!(result.summary, "wrapped");
}

#[tokio::test]
async fn unparseable_content_keeps_raw_text() {
    let mut server = mockito::Server::new_async().await;
    let content = "I'm sorry, I can't help with {that request}.";
    let _mock = mock_content(&mut server, content).await;

    let err = coach_for(&server)
        .get_coaching_response("b", "q")
        .await
        .unwrap_err();

    assert!(matches!(err, CoachError::Extraction(_)), "{err:?}");
    assert_eq!(err.raw_text(), Some(content));
    assert!(!err.is_precondition());
}

#[tokio::test]
async fn partial_object_is_a_failure() {
    let mut server = mockito::Server::new_async().await;
    let mut partial = result_json("partial");
    partial["smartQuestions"]
        .as_object_mut()
        .unwrap()
        .remove("timeBound");
    let content = partial.to_string();
    let _mock = mock_content(&mut server, &content).await;

    let err = coach_for(&server)
        .get_coaching_response("b", "q")
        .await
        .unwrap_err();

    match err {
        CoachError::Extraction(failure) => {
            assert_eq!(failure.raw_text, content);
            assert!(failure.reason.contains("timeBound"), "{}", failure.reason);
        }
        other => panic!("expected Extraction, got {other:?}"),
    }
}

#[tokio::test]
async fn success_without_choices_is_extraction_failure() {
    let mut server = mockito::Server::new_async().await;
    let body = r#"{"id":"chatcmpl-empty","model":"deepseek-chat","choices":[]}"#;
    let _mock = server
        .mock("POST", COMPLETION_PATH)
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let err = coach_for(&server)
        .get_coaching_response("b", "q")
        .await
        .unwrap_err();

    match err {
        CoachError::Extraction(failure) => {
            assert_eq!(failure.raw_text, body);
            assert_eq!(failure.reason, "response has no choices[0].message.content");
        }
        other => panic!("expected Extraction, got {other:?}"),
    }
}

#[tokio::test]
async fn blank_input_is_rejected_without_a_call() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let coach = coach_for(&server);

    let err = coach
        .get_coaching_response("   \n\t", "How do we grow?")
        .await
        .unwrap_err();
    assert!(matches!(err, CoachError::Validation { field: "background" }));
    assert!(err.is_precondition());

    let err = coach
        .get_coaching_response("We sell B2B software.", "")
        .await
        .unwrap_err();
    assert!(matches!(err, CoachError::Validation { field: "question" }));

    mock.assert_async().await;
}

#[tokio::test]
async fn concurrent_calls_get_their_own_results() {
    let mut server = mockito::Server::new_async().await;
    let alpha = server
        .mock("POST", COMPLETION_PATH)
        .match_body(Matcher::Regex("alpha background".to_string()))
        .with_status(200)
        .with_body(completion_body(&result_json("alpha").to_string()))
        .expect(1)
        .create_async()
        .await;
    let beta = server
        .mock("POST", COMPLETION_PATH)
        .match_body(Matcher::Regex("beta background".to_string()))
        .with_status(500)
        .with_body(r#"{"error":{"message":"beta broke"}}"#)
        .expect(1)
        .create_async()
        .await;

    let coach = coach_for(&server);
    let (a, b) = tokio::join!(
        coach.get_coaching_response("alpha background", "alpha question"),
        coach.get_coaching_response("beta background", "beta question"),
    );

    assert_eq!(a.unwrap().summary, "alpha");
    match b.unwrap_err() {
        CoachError::Upstream {
            status_code,
            provider_message,
            ..
        } => {
            assert_eq!(status_code, 500);
            assert_eq!(provider_message, "beta broke");
        }
        other => panic!("expected Upstream, got {other:?}"),
    }
    alpha.assert_async().await;
    beta.assert_async().await;
}

#[tokio::test]
async fn same_input_twice_sends_two_requests() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", COMPLETION_PATH)
        .with_status(200)
        .with_body(completion_body(&result_json("again").to_string()))
        .expect(2)
        .create_async()
        .await;

    let coach = coach_for(&server);
    let input = CoachingInput::new("Retention fell 20%.", "How do we fix it?").unwrap();
    let first = coach.coach(&input).await.unwrap();
    let second = coach.coach(&input).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(input.background(), "Retention fell 20%.");
    mock.assert_async().await;
}

#[tokio::test]
async fn truncated_completion_is_extraction_failure() {
    let mut server = mockito::Server::new_async().await;
    let content = r#"{"summary": "Retention fell.", "smartQuestions": {"specific": ["Which seg"#;
    let body = json!({
        "id": "chatcmpl-cut",
        "model": "deepseek-chat",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "length"
        }],
        "usage": {"prompt_tokens": 420, "completion_tokens": 1000, "total_tokens": 1420}
    })
    .to_string();
    let _mock = server
        .mock("POST", COMPLETION_PATH)
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let err = coach_for(&server)
        .get_coaching_response("b", "q")
        .await
        .unwrap_err();

    match err {
        CoachError::Extraction(failure) => {
            assert_eq!(failure.raw_text, content);
            assert!(failure.reason.contains("no JSON object"), "{}", failure.reason);
        }
        other => panic!("expected Extraction, got {other:?}"),
    }
}
