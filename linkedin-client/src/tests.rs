use crate::{LinkedInClient, Publisher, UgcPost};
use autopost_core::CoreError;
use std::io;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}

fn sample_post() -> UgcPost {
    UgcPost::build("hello world", "12345", None).unwrap()
}

#[tokio::test]
async fn test_publish_created_returns_true() {
    let mock_server = MockServer::start().await;
    let post = sample_post();

    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("content-type", "application/json"))
        .and(body_json(&post))
        .respond_with(
            ResponseTemplate::new(201).insert_header("x-restli-id", "urn:li:share:42"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = LinkedInClient::with_api_base(mock_server.uri()).unwrap();
    let published = client.publish(&post, "test-token").await.unwrap();
    assert!(published);
}

#[tokio::test]
async fn test_publish_unauthorized_returns_false_and_logs_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .respond_with(
            ResponseTemplate::new(401).set_body_string(r#"{"message":"Invalid access token"}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let (logs, _guard) = capture_logs();
    let client = LinkedInClient::with_api_base(mock_server.uri()).unwrap();
    let published = client.publish(&sample_post(), "expired").await.unwrap();

    assert!(!published);
    let output = logs.contents();
    assert!(output.contains("Failed to post to LinkedIn"));
    assert!(output.contains("Invalid access token"));
    assert!(!output.contains("expired"));
}

#[tokio::test]
async fn test_publish_ok_is_not_created() {
    // Only 201 counts as a successful share.
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = LinkedInClient::with_api_base(mock_server.uri()).unwrap();
    let published = client.publish(&sample_post(), "token").await.unwrap();
    assert!(!published);
}

#[tokio::test]
async fn test_publish_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = LinkedInClient::with_api_base(format!("http://{}", addr)).unwrap();
    let result = client.publish(&sample_post(), "token").await;
    assert!(matches!(result, Err(CoreError::Network(_))));
}
