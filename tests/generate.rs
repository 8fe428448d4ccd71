//! HTTP-level tests for the generation client and chat session, driven
//! against a mock Gemini endpoint.

use mari::{GeminiClient, Language, LearningPathInput, PathError, ProficiencyLevel, Role};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_input() -> LearningPathInput {
    LearningPathInput {
        goal: "Learn Data Structures".into(),
        deadline: "2024-12-01".into(),
        level: ProficiencyLevel::Beginner,
        availability: 5,
    }
}

fn path_json() -> serde_json::Value {
    json!({
        "summary": "A 12-week data structures plan",
        "steps": [{
            "id": "s1",
            "title": "Arrays and Lists",
            "description": "Foundational containers and their trade-offs",
            "duration": "2 weeks",
            "academyName": "USTHB",
            "courseLink": "https://example.com/ds-101",
            "isUniversityModule": true
        }],
        "forwardLookingSentence": "You are on track for December."
    })
}

/// Wraps a payload string the way the Gemini API returns generated text.
fn envelope(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }] }
        }]
    })
}

const GENERATE_PATH: &str = "/models/gemini-3-flash-preview:generateContent";

fn mock_client(server: &MockServer) -> GeminiClient {
    GeminiClient::new("test-key").with_base_url(server.uri())
}

#[tokio::test]
async fn conforming_response_decodes_into_a_learning_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&path_json().to_string())))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let result = client
        .generate_learning_path(&sample_input(), Language::En)
        .await
        .unwrap();

    assert_eq!(result.summary, "A 12-week data structures plan");
    assert_eq!(result.steps.len(), 1);
    assert_eq!(result.steps[0].id, "s1");
    assert_eq!(result.steps[0].academy_name, "USTHB");
    assert!(result.steps[0].is_university_module);
    assert_eq!(result.forward_looking_sentence, "You are on track for December.");
}

#[tokio::test]
async fn request_carries_prompt_schema_and_language() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&path_json().to_string())))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    client
        .generate_learning_path(&sample_input(), Language::Ar)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();

    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Learn Data Structures"));
    assert!(prompt.contains("2024-12-01"));
    assert!(prompt.contains("beginner"));
    assert!(prompt.contains("5 hours per week"));

    let instruction = body["systemInstruction"]["parts"][0]["text"]
        .as_str()
        .unwrap();
    assert!(instruction.contains("Arabic"));

    assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
    assert_eq!(
        body["generationConfig"]["responseSchema"]["required"],
        json!(["summary", "steps", "forwardLookingSentence"])
    );
}

#[tokio::test]
async fn identical_inputs_issue_independent_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&path_json().to_string())))
        .expect(2)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let input = sample_input();
    client.generate_learning_path(&input, Language::En).await.unwrap();
    client.generate_learning_path(&input, Language::En).await.unwrap();
}

#[tokio::test]
async fn service_error_surfaces_its_body_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client
        .generate_learning_path(&sample_input(), Language::En)
        .await
        .unwrap_err();

    assert!(matches!(err, PathError::Service { status: 429, .. }));
    assert_eq!(err.display_message(), "quota exceeded");
}

#[tokio::test]
async fn empty_payload_falls_back_to_empty_object_and_fails_decoding() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client
        .generate_learning_path(&sample_input(), Language::En)
        .await
        .unwrap_err();

    // "{}" is substituted before decoding; the missing required fields make
    // it a parse failure rather than a crash or a half-empty Ready path.
    assert!(matches!(err, PathError::Parse(_)));
    assert!(!err.display_message().is_empty());
}

#[tokio::test]
async fn payload_missing_required_fields_is_rejected() {
    let server = MockServer::start().await;
    let partial = json!({ "summary": "only a summary" });
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&partial.to_string())))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client
        .generate_learning_path(&sample_input(), Language::En)
        .await
        .unwrap_err();
    assert!(matches!(err, PathError::Parse(_)));
}

#[tokio::test]
async fn duplicate_step_ids_fail_the_schema_gate() {
    let server = MockServer::start().await;
    let mut doubled = path_json();
    let first = doubled["steps"][0].clone();
    doubled["steps"].as_array_mut().unwrap().push(first);
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&doubled.to_string())))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client
        .generate_learning_path(&sample_input(), Language::En)
        .await
        .unwrap_err();
    assert!(matches!(err, PathError::Schema(_)));
}

#[tokio::test]
async fn invalid_input_is_rejected_before_any_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let mut input = sample_input();
    input.goal = "  ".into();
    assert!(matches!(
        client.generate_learning_path(&input, Language::En).await,
        Err(PathError::Input(_))
    ));

    let mut input = sample_input();
    input.availability = 0;
    assert!(matches!(
        client.generate_learning_path(&input, Language::En).await,
        Err(PathError::Input(_))
    ));
}

#[tokio::test]
async fn chat_session_appends_turns_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope("أهلاً! كيف أساعدك؟")))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope("USTHB تقدم هذه الوحدة.")))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let mut session = client.start_chat(Language::Ar);

    let first = session.send("مرحبا").await.unwrap();
    assert_eq!(first.role, Role::Model);
    assert_eq!(first.text, "أهلاً! كيف أساعدك؟");

    session.send("أين أدرس هياكل البيانات؟").await.unwrap();

    let roles: Vec<Role> = session.messages().iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::User, Role::Model, Role::User, Role::Model]);

    // The second request replays the whole transcript and locks the
    // session's language from open time.
    let requests = server.received_requests().await.unwrap();
    let second: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
    let contents = second["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 3);
    assert_eq!(contents[0]["role"], "user");
    assert_eq!(contents[1]["role"], "model");
    assert_eq!(contents[2]["role"], "user");
    assert!(second["systemInstruction"]["parts"][0]["text"]
        .as_str()
        .unwrap()
        .contains("Arabic"));
}

#[tokio::test]
async fn failed_chat_send_keeps_the_transcript_intact() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope("Back online.")))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let mut session = client.start_chat(Language::En);

    assert!(session.send("hello?").await.is_err());
    // The user turn stays; no model message was appended.
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].role, Role::User);

    // The session is still usable afterwards.
    let reply = session.send("still there?").await.unwrap();
    assert_eq!(reply.text, "Back online.");
    assert_eq!(session.messages().len(), 3);
}

#[tokio::test]
async fn missing_api_key_fails_at_call_time() {
    std::env::remove_var("GEMINI_API_KEY");
    let client = GeminiClient::from_env();
    let err = client
        .generate_learning_path(&sample_input(), Language::En)
        .await
        .unwrap_err();
    assert!(matches!(err, PathError::MissingApiKey));
}
