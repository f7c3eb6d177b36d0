//! Retry-loop behavior against a mocked upstream. These tests use a
//! millisecond-scale backoff so the full budget runs in well under a second;
//! the production schedule (1s, 2s, 4s) is covered by unit tests on
//! `RetryPolicy`.

use std::time::Duration;

use camara_api::{Client, DeputadoQuery, Error, RetryPolicy};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fast_policy() -> RetryPolicy {
    RetryPolicy {
        retries: 3,
        initial_delay: Duration::from_millis(5),
    }
}

#[tokio::test]
async fn rate_limited_upstream_exhausts_full_retry_budget() {
    let mock_server = MockServer::start().await;

    // 3 retries means up to 4 attempts total, all of which must hit the wire.
    Mock::given(method("GET"))
        .and(path("/deputados"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .expect(4)
        .mount(&mock_server)
        .await;

    let client = Client::with_config(&mock_server.uri(), fast_policy());
    let err = client
        .get_deputados(&DeputadoQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Status { status: 429, .. }));
}

#[tokio::test]
async fn service_unavailable_recovers_mid_budget() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/deputados"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .up_to_n_times(2)
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/deputados"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"dados": [], "links": []}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_config(&mock_server.uri(), fast_policy());
    let resp = client.get_deputados(&DeputadoQuery::default()).await.unwrap();

    assert!(resp.dados.is_empty());
}

#[tokio::test]
async fn not_found_fails_after_a_single_attempt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/deputados"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_config(&mock_server.uri(), fast_policy());
    let err = client
        .get_deputados(&DeputadoQuery::default())
        .await
        .unwrap_err();

    match err {
        Error::Status { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "Not Found");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn connect_failure_surfaces_as_transport_error() {
    // Nothing listens on this port; reqwest reports a connect error, which
    // is retried and then surfaced as-is.
    let client = Client::with_config(
        "http://127.0.0.1:1",
        RetryPolicy {
            retries: 1,
            initial_delay: Duration::from_millis(1),
        },
    );
    let err = client
        .get_deputados(&DeputadoQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    assert!(err.is_retryable());
}
