//! HTTP Transport Integration Tests
//!
//! Runs the lookup client over `HttpTransport` against a wiremock server, so
//! the request line, headers and status handling are exercised end to end.

use crate::common::{self, AUSTIN_BODY, austin};
use applicant_core::lookup::{LookupClient, LookupConfig, LookupResult};
use applicant_core::value_objects::{Address, Applicant, Name};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build an HTTP client for the mock server off the async runtime, where the
/// blocking reqwest client may be created.
async fn http_client(mock_server: &MockServer, cache: bool) -> LookupClient {
    common::init_logging();
    let config = LookupConfig::default()
        .with_base_url(mock_server.uri())
        .with_timeout(Duration::from_secs(2))
        .with_cache(cache);

    tokio::task::spawn_blocking(move || LookupClient::new(config))
        .await
        .expect("client construction task completes")
        .expect("mock server URI is a valid base URL")
}

async fn mount_austin(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/us/78701"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(AUSTIN_BODY))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_zip_plus_four_requests_five_digit_path() {
    let mock_server = MockServer::start().await;
    mount_austin(&mock_server).await;
    let client = http_client(&mock_server, false).await;

    let result = client.lookup_async("78701-1234").await;
    assert_eq!(result, LookupResult::success(austin()));

    let requests = mock_server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/us/78701");
    assert_eq!(
        requests[0]
            .headers
            .get("accept")
            .and_then(|value| value.to_str().ok()),
        Some("application/json")
    );
}

#[tokio::test]
async fn test_not_found_status_is_a_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/us/00000"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{}"))
        .mount(&mock_server)
        .await;
    let client = http_client(&mock_server, false).await;

    let result = client.lookup_async("00000").await;
    assert_eq!(
        result.error_message(),
        Some("lookup failed with HTTP status 404")
    );
}

#[tokio::test]
async fn test_unusable_body_is_a_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/us/22222"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"places": []}"#))
        .mount(&mock_server)
        .await;
    let client = http_client(&mock_server, false).await;

    let result = client.lookup_async("22222").await;
    assert_eq!(result.error_message(), Some("invalid response format"));
}

#[tokio::test]
async fn test_cached_http_lookup_sends_one_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/us/78701"))
        .respond_with(ResponseTemplate::new(200).set_body_string(AUSTIN_BODY))
        .expect(1)
        .mount(&mock_server)
        .await;
    let client = http_client(&mock_server, true).await;

    assert!(client.lookup_async("78701").await.is_success());
    assert!(client.lookup_async("78701-0001").await.is_success());
    assert_eq!(client.cache_len(), 1);
}

/// Synchronous lookups from a current-thread runtime must not panic
#[tokio::test]
async fn test_sync_lookup_inside_current_thread_runtime() {
    let mock_server = MockServer::start().await;
    mount_austin(&mock_server).await;
    let client = http_client(&mock_server, false).await;

    assert!(client.lookup_async("78701").await.is_success());
    assert_eq!(client.lookup("78701"), LookupResult::success(austin()));

    let address = Address::builder()
        .zip_code("78701")
        .lookup_with(client.resolver())
        .build()
        .expect("resolver works from async code");
    assert_eq!(address.display_format(), "Austin, TX 78701");
}

/// Synchronous lookups from a multi-thread worker must not panic
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_sync_lookup_inside_multi_thread_runtime() {
    let mock_server = MockServer::start().await;
    mount_austin(&mock_server).await;
    let client = http_client(&mock_server, true).await;

    let applicant = Applicant::builder()
        .name(Name::first_last("Jane", "Doe"))
        .ssn("123-45-6789")
        .address(
            Address::builder()
                .zip_code("78701")
                .lookup_with(client.resolver()),
        )
        .build()
        .expect("resolver works from a worker thread");
    assert_eq!(applicant.address().city(), "Austin");

    let fallback = client.fallback_resolver();
    assert!(fallback("99999").is_unknown());
}
