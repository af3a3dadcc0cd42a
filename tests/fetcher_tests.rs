use webtldr::errors::SummarizeError;
use webtldr::web::fetcher::{FetchPage, PageFetcher};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher() -> PageFetcher {
    PageFetcher::new(5).unwrap()
}

#[tokio::test]
async fn test_fetch_returns_response_bytes() {
    let server = MockServer::start().await;
    let html = "<html><head><title>Hi</title></head><body>ok</body></html>";

    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .expect(1)
        .mount(&server)
        .await;

    let body = fetcher().fetch(&format!("{}/page", server.uri())).await.unwrap();
    assert_eq!(body, html.as_bytes());
}

#[tokio::test]
async fn test_fetch_sends_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ua"))
        .and(header("user-agent", "Mozilla/5.0 (compatible; webtldr/0.1)"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(1)
        .mount(&server)
        .await;

    fetcher().fetch(&format!("{}/ua", server.uri())).await.unwrap();
}

#[tokio::test]
async fn test_non_success_status_is_fetch_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = fetcher()
        .fetch(&format!("{}/missing", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, SummarizeError::FetchError(_)));
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_server_error_status_is_fetch_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = fetcher().fetch(&server.uri()).await.unwrap_err();
    assert!(matches!(err, SummarizeError::FetchError(_)));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_malformed_url_is_fetch_error() {
    let err = fetcher().fetch("not a url").await.unwrap_err();
    assert!(matches!(err, SummarizeError::FetchError(_)));
}

#[tokio::test]
async fn test_non_http_scheme_is_fetch_error() {
    let err = fetcher().fetch("ftp://example.com/file").await.unwrap_err();
    assert!(matches!(err, SummarizeError::FetchError(_)));
    assert!(err.to_string().contains("unsupported URL scheme"));
}

#[tokio::test]
async fn test_unreachable_host_is_fetch_error() {
    // Port 1 on loopback has no listener; the connection is refused.
    let err = fetcher().fetch("http://127.0.0.1:1/").await.unwrap_err();
    assert!(matches!(err, SummarizeError::FetchError(_)));
}
