use autopost_core::{CoreError, LlmError, OllamaConfig, Persona};
use llm_interface::{build_prompt, ContentGenerator, OllamaGenerator};
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn persona() -> Persona {
    Persona {
        name: "Head of Growth".to_string(),
        tone: "warm".to_string(),
        style: "storytelling".to_string(),
    }
}

fn generator_for(server: &MockServer) -> OllamaGenerator {
    let config = OllamaConfig {
        host: Url::parse(&server.uri()).unwrap(),
        model: "llama3".to_string(),
        persona: persona(),
    };
    OllamaGenerator::from_config(&config).unwrap()
}

#[tokio::test]
async fn test_generate_returns_response_verbatim() {
    let mock_server = MockServer::start().await;
    let generated = "  Remote work is here to stay.\n#FutureOfWork  ";

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_json(serde_json::json!({
            "model": "llama3",
            "prompt": build_prompt(&persona(), "remote work"),
            "stream": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "model": "llama3",
            "response": generated,
            "done": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let text = generator_for(&mock_server)
        .generate("remote work")
        .await
        .unwrap();
    assert_eq!(text, generated);
}

#[tokio::test]
async fn test_generate_server_error_carries_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model 'llama3' not found"))
        .mount(&mock_server)
        .await;

    let err = generator_for(&mock_server)
        .generate("AI ethics")
        .await
        .unwrap_err();

    match err {
        CoreError::Llm(LlmError::GenerationFailed { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "model 'llama3' not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_generate_requires_exact_ok_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({
            "response": "queued"
        })))
        .mount(&mock_server)
        .await;

    let err = generator_for(&mock_server)
        .generate("AI ethics")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CoreError::Llm(LlmError::GenerationFailed { status: 202, .. })
    ));
}

#[tokio::test]
async fn test_generate_missing_response_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "done": true
        })))
        .mount(&mock_server)
        .await;

    let err = generator_for(&mock_server)
        .generate("AI ethics")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CoreError::Llm(LlmError::InvalidResponseFormat { .. })
    ));
}
