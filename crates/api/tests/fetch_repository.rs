use folio_api::{FetchError, GitHubClient};
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn decodes_repository_metadata() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/x/y"))
        .and(header("Accept", "application/vnd.github+json"))
        .and(header_exists("User-Agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 12,
            "stargazers_count": 42,
            "language": "TypeScript",
            "html_url": "https://github.com/x/y"
        })))
        .mount(&mock_server)
        .await;

    let client = GitHubClient::with_base_url(mock_server.uri()).expect("client");
    let repo = client.fetch_repository("x", "y").await.expect("metadata");

    assert_eq!(repo.stargazers_count, 42);
    assert_eq!(repo.language.as_deref(), Some("TypeScript"));
    assert_eq!(repo.html_url, "https://github.com/x/y");
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/x/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = GitHubClient::with_base_url(mock_server.uri()).expect("client");
    let error = client.fetch_repository("x", "missing").await.expect_err("404 must fail");

    assert!(matches!(error, FetchError::Status { status, .. } if status.as_u16() == 404));
    assert!(!error.is_transport());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/x/y"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&mock_server)
        .await;

    let client = GitHubClient::with_base_url(mock_server.uri()).expect("client");
    let error = client.fetch_repository("x", "y").await.expect_err("html must not decode");

    assert!(matches!(error, FetchError::Decode { .. }));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);

    let client = GitHubClient::with_base_url(format!("http://127.0.0.1:{port}")).expect("client");
    let error = client.fetch_repository("x", "y").await.expect_err("closed port must fail");

    assert!(error.is_transport(), "{error}");
}
