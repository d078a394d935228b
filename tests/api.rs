use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use linkedin_pub_rs::config::{Config, HttpConfig};
use linkedin_pub_rs::{
    AccessToken, ContentPublisher, DiagnosticSink, LinkedInClient, LinkedInError, Operation,
    RegisterUploadRequest,
};
use serde_json::{Value, json};
use tempfile::NamedTempFile;
use tokio_test::assert_ok;
use wiremock::matchers::{body_bytes, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const TOKEN: &str = "test-access-token";
const AUTHOR: &str = "urn:li:person:X";

#[derive(Debug, Default)]
struct RecordingSink {
    bodies: Mutex<Vec<(Operation, u16, String)>>,
}

impl DiagnosticSink for RecordingSink {
    fn response_body(&self, operation: Operation, status: u16, body: &str) {
        self.bodies
            .lock()
            .unwrap()
            .push((operation, status, body.to_string()));
    }
}

fn client_for(server: &MockServer) -> LinkedInClient {
    client_with_token(server, AccessToken::new(TOKEN))
}

fn client_with_token(server: &MockServer, token: AccessToken) -> LinkedInClient {
    let config = Config::builder()
        .http(
            HttpConfig::builder()
                .api_base_url(format!("{}/v2", server.uri()))
                .build(),
        )
        .build();
    match LinkedInClient::with_config(token, config) {
        Ok(client) => client,
        Err(e) => panic!("failed to build client: {e}"),
    }
}

fn image_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .unwrap();
    file.write_all(bytes).unwrap();
    file
}

async fn single_request_body(server: &MockServer) -> Value {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests[0].body_json::<Value>().unwrap()
}

fn registration_body(upload_url: &str) -> Value {
    json!({
        "value": {
            "uploadMechanism": {
                "com.linkedin.digitalmedia.uploading.MediaUploadHttpRequest": {
                    "headers": { "media-type-family": "STILLIMAGE" },
                    "uploadUrl": upload_url
                }
            },
            "mediaArtifact": "urn:li:digitalmediaMediaArtifact:(urn:li:digitalmediaAsset:123,urn:li:digitalmediaMediaArtifactClass:feedshare-uploadedImage)",
            "asset": "urn:li:digitalmediaAsset:123"
        }
    })
}

#[tokio::test]
async fn share_text_posts_text_only_share() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .and(header("Content-Type", "application/json"))
        .and(header("X-Restli-Protocol-Version", "2.0.0"))
        .and(header("Authorization", "Bearer test-access-token"))
        .respond_with(ResponseTemplate::new(201).insert_header("X-RestLi-Id", "urn:li:share:1234"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let share_id = assert_ok!(client.share_text(AUTHOR, "hello").await);
    assert_eq!(share_id, "urn:li:share:1234");

    let body = single_request_body(&server).await;
    let content = &body["specificContent"]["com.linkedin.ugc.ShareContent"];
    assert_eq!(body["author"], AUTHOR);
    assert_eq!(body["lifecycleState"], "PUBLISHED");
    assert_eq!(content["shareCommentary"]["text"], "hello");
    assert_eq!(content["shareMediaCategory"], "NONE");
    assert!(content.get("media").is_none());
    assert_eq!(
        body["visibility"]["com.linkedin.ugc.MemberNetworkVisibility"],
        "PUBLIC"
    );
}

#[tokio::test]
async fn share_article_posts_one_ready_media_item() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .respond_with(ResponseTemplate::new(201).insert_header("X-RestLi-Id", "urn:li:share:77"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let share_id = client
        .share_article(
            AUTHOR,
            "worth a read",
            "https://example.com/post",
            "A Post",
            "About things",
        )
        .await
        .unwrap();
    assert_eq!(share_id, "urn:li:share:77");

    let body = single_request_body(&server).await;
    let content = &body["specificContent"]["com.linkedin.ugc.ShareContent"];
    assert_eq!(content["shareMediaCategory"], "ARTICLE");

    let media = content["media"].as_array().unwrap();
    assert_eq!(media.len(), 1);
    assert_eq!(media[0]["status"], "READY");
    assert_eq!(media[0]["originalUrl"], "https://example.com/post");
    assert_eq!(media[0]["title"]["text"], "A Post");
    assert_eq!(media[0]["description"]["text"], "About things");
}

#[tokio::test]
async fn share_image_references_asset() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .respond_with(ResponseTemplate::new(201).insert_header("X-RestLi-Id", "urn:li:share:9"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .share_image(AUTHOR, "look", "urn:li:digitalmediaAsset:123", "Photo", "A photo")
        .await
        .unwrap();

    let body = single_request_body(&server).await;
    let content = &body["specificContent"]["com.linkedin.ugc.ShareContent"];
    assert_eq!(content["shareMediaCategory"], "IMAGE");
    assert_eq!(content["media"][0]["media"], "urn:li:digitalmediaAsset:123");
    assert!(content["media"][0].get("originalUrl").is_none());
}

#[tokio::test]
async fn create_share_rejects_non_created_statuses() {
    for status in [200u16, 400, 401, 500] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/ugcPosts"))
            .respond_with(
                ResponseTemplate::new(status)
                    .insert_header("X-RestLi-Id", "urn:li:share:should-not-leak")
                    .set_body_string(r#"{"message":"nope"}"#),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        match client.share_text(AUTHOR, "hello").await {
            Err(LinkedInError::UnexpectedStatus {
                operation,
                status: got,
            }) => {
                assert_eq!(operation, Operation::CreateShare);
                assert_eq!(got, status);
            }
            other => panic!("expected rejection for HTTP {status}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn expired_token_is_still_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .and(header("Authorization", "Bearer test-access-token"))
        .respond_with(ResponseTemplate::new(201).insert_header("X-RestLi-Id", "urn:li:share:3"))
        .expect(1)
        .mount(&server)
        .await;

    let token = AccessToken::with_expiry(TOKEN, 0);
    assert!(token.is_expired(0));

    let client = client_with_token(&server, token);
    let share_id = assert_ok!(client.share_text(AUTHOR, "hello").await);
    assert_eq!(share_id, "urn:li:share:3");
}

#[tokio::test]
async fn create_share_requires_id_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.share_text(AUTHOR, "hello").await;
    assert!(matches!(
        result,
        Err(LinkedInError::MissingHeader {
            operation: Operation::CreateShare,
            ..
        })
    ));
}

#[tokio::test]
async fn repeated_shares_are_not_deduplicated() {
    let server = MockServer::start().await;
    let counter = Arc::new(AtomicUsize::new(1));
    let next_id = Arc::clone(&counter);
    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .respond_with(move |_: &Request| {
            let n = next_id.fetch_add(1, Ordering::SeqCst);
            ResponseTemplate::new(201).insert_header("X-RestLi-Id", format!("urn:li:share:{n}"))
        })
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client.share_text(AUTHOR, "same text").await.unwrap();
    let second = client.share_text(AUTHOR, "same text").await.unwrap();

    assert_ne!(first, second);
    assert_eq!(counter.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn register_upload_parses_response() {
    let server = MockServer::start().await;
    let upload_url = format!("{}/mediaUpload/abc", server.uri());
    Mock::given(method("POST"))
        .and(path("/v2/assets"))
        .and(query_param("action", "registerUpload"))
        .and(header("X-Restli-Protocol-Version", "2.0.0"))
        .and(header("Authorization", "Bearer test-access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(registration_body(&upload_url)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let registration = client
        .register_upload(&RegisterUploadRequest::feed_image(AUTHOR))
        .await
        .unwrap();

    assert_eq!(registration.asset(), "urn:li:digitalmediaAsset:123");
    assert_eq!(registration.upload_url().as_str(), upload_url);

    let body = single_request_body(&server).await;
    assert_eq!(body["registerUploadRequest"]["owner"], AUTHOR);
    assert_eq!(
        body["registerUploadRequest"]["recipes"][0],
        "urn:li:digitalmediaRecipe:feedshare-image"
    );
}

#[tokio::test]
async fn register_upload_rejects_non_ok_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/assets"))
        .respond_with(ResponseTemplate::new(422).set_body_json(registration_body(
            "https://api.linkedin.com/mediaUpload/x",
        )))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .register_upload(&RegisterUploadRequest::feed_image(AUTHOR))
        .await;
    assert!(matches!(
        result,
        Err(LinkedInError::UnexpectedStatus {
            operation: Operation::RegisterUpload,
            status: 422
        })
    ));
}

#[tokio::test]
async fn register_upload_with_malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/assets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": { "asset": "urn:li:digitalmediaAsset:123" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .register_upload(&RegisterUploadRequest::feed_image(AUTHOR))
        .await;
    assert!(matches!(result, Err(LinkedInError::Json(_))));
}

#[tokio::test]
async fn upload_image_posts_raw_bytes() {
    let server = MockServer::start().await;
    let bytes = b"\x89PNG\r\n\x1a\nfake image".to_vec();
    Mock::given(method("POST"))
        .and(path("/mediaUpload/abc"))
        .and(header("Content-Type", "application/octet-stream"))
        .and(header("Authorization", "Bearer test-access-token"))
        .and(body_bytes(bytes.clone()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let file = image_file(&bytes);
    let client = client_for(&server);
    let upload_url = format!("{}/mediaUpload/abc", server.uri());
    assert_ok!(client.upload_image(&upload_url, file.path()).await);
}

#[tokio::test]
async fn upload_image_rejection_is_not_io_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/mediaUpload/abc"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let file = image_file(b"bytes");
    let client = client_for(&server);
    let upload_url = format!("{}/mediaUpload/abc", server.uri());
    let result = client.upload_image(&upload_url, file.path()).await;

    match result {
        Err(LinkedInError::UnexpectedStatus { operation, status }) => {
            assert_eq!(operation, Operation::UploadImage);
            assert_eq!(status, 403);
        }
        other => panic!("expected upload rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn upload_image_missing_file_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let upload_url = format!("{}/mediaUpload/abc", server.uri());
    let result = client
        .upload_image(&upload_url, "/no/such/dir/photo.png")
        .await;
    assert!(matches!(result, Err(LinkedInError::Io(_))));
}

#[tokio::test]
async fn upload_registered_image_sends_mechanism_headers() {
    let server = MockServer::start().await;
    let upload_url = format!("{}/mediaUpload/abc", server.uri());
    Mock::given(method("POST"))
        .and(path("/mediaUpload/abc"))
        .and(header("media-type-family", "STILLIMAGE"))
        .and(header("Content-Type", "application/octet-stream"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut body = registration_body(&upload_url);
    body["value"]["uploadMechanism"]["com.linkedin.digitalmedia.uploading.MediaUploadHttpRequest"]
        ["headers"]["Content-Type"] = json!("text/plain");
    let registration = serde_json::from_value(body).unwrap();

    let file = image_file(b"bytes");
    let client = client_for(&server);
    assert_ok!(client.upload_registered_image(&registration, file.path()).await);
}

#[tokio::test]
async fn diagnostic_sink_receives_response_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad author"))
        .mount(&server)
        .await;

    let sink = Arc::new(RecordingSink::default());
    let client = client_for(&server).with_diagnostics(sink.clone());
    assert!(client.share_text(AUTHOR, "hello").await.is_err());

    let bodies = sink.bodies.lock().unwrap();
    assert_eq!(
        *bodies,
        vec![(Operation::CreateShare, 400, "bad author".to_string())]
    );
}

#[tokio::test]
async fn client_is_usable_through_publisher_trait() {
    async fn publish(publisher: &dyn ContentPublisher) -> linkedin_pub_rs::Result<String> {
        publisher.share_text(AUTHOR, "via trait").await
    }

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/ugcPosts"))
        .respond_with(ResponseTemplate::new(201).insert_header("X-RestLi-Id", "urn:li:share:5"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(publish(&client).await.unwrap(), "urn:li:share:5");
}
