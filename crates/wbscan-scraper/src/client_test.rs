use super::*;

fn test_client(relay_url: &str) -> PipelineClient {
    PipelineClient::new(relay_url, 5, "wbscan-test/0.1", 0, 10)
        .expect("failed to build test PipelineClient")
}

#[test]
fn proxy_url_appends_proxy_segment() {
    let client = test_client("http://127.0.0.1:3000");
    assert_eq!(client.proxy_url.as_str(), "http://127.0.0.1:3000/proxy");
}

#[test]
fn proxy_url_tolerates_trailing_slash() {
    let client = test_client("http://127.0.0.1:3000/");
    assert_eq!(client.proxy_url.as_str(), "http://127.0.0.1:3000/proxy");
}

#[test]
fn proxy_url_preserves_base_path() {
    let client = test_client("https://relay.example.com/api");
    assert_eq!(client.proxy_url.as_str(), "https://relay.example.com/api/proxy");
}

#[test]
fn new_rejects_relative_relay_url() {
    let result = PipelineClient::new("not-a-url", 5, "wbscan-test/0.1", 0, 10);
    let err = match result {
        Err(e) => e,
        Ok(_) => panic!("expected InvalidUrl for a relative relay url"),
    };
    assert!(
        matches!(err, ScraperError::InvalidUrl { .. }),
        "expected InvalidUrl, got: {err:?}"
    );
}

#[test]
fn policy_fields_are_stored() {
    let client = PipelineClient::new("http://127.0.0.1:3000", 5, "wbscan-test/0.1", 550, 10)
        .expect("failed to build test PipelineClient");
    assert_eq!(client.inter_page_delay_ms, 550);
    assert_eq!(client.max_pages, 10);
}
