use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::{Duration, Instant};

use therafind::search::client::{SearchClient, SearchError};
use therafind::search::search_state::{Outcome, SearchState};
use tokio_util::sync::CancellationToken;

// ==================== CLI ====================

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("companion-diagnostics"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("therafind"));
}

#[test]
fn test_cli_rejects_invalid_api_url() {
    cargo_bin_cmd!()
        .args(["--api-url", "not-a-url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid API base URL"));
}

// ==================== Canned search service ====================

/// Serve exactly one canned HTTP response on a loopback port.
/// Returns the base URL and a handle yielding the request head (lowercased).
fn one_shot_server(status_line: &str, body: &str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let status_line = status_line.to_string();
    let body = body.to_string();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        // A GET request is headers only; read until the blank line
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();

        String::from_utf8_lossy(&head).to_lowercase()
    });

    (base_url, handle)
}

fn client(base_url: &str) -> SearchClient {
    SearchClient::new(base_url, Duration::from_secs(5))
}

fn pair(name: &str, value: &str) -> (String, String) {
    (name.to_string(), value.to_string())
}

// ==================== Client scenarios ====================

#[tokio::test]
async fn scenario_empty_form_no_results() {
    let (base_url, server) = one_shot_server(
        "200 OK",
        r#"{"columns": ["Tumor Type"], "results": []}"#,
    );

    let result = client(&base_url)
        .search_with_cancel(&[], &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(result.columns, ["Tumor Type"]);
    assert!(result.rows.is_empty());

    // No query string at all when every field is empty
    let request_head = server.join().unwrap();
    assert!(request_head.starts_with("get /search http/1.1\r\n"));
    assert!(request_head.contains("accept: application/json"));
}

#[tokio::test]
async fn scenario_single_field_match() {
    let (base_url, server) = one_shot_server(
        "200 OK",
        r#"{
            "columns": ["Tumor Type", "Test", "Gene mutations", "Therapy"],
            "results": [{
                "Tumor Type": "Non-small cell lung cancer (NSCLC)",
                "Test": "PCR",
                "Gene mutations": "EGFR",
                "Therapy": "Erlotinib"
            }]
        }"#,
    );

    let result = client(&base_url)
        .search_with_cancel(&[pair("tumor_type", "lung")], &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0]["Therapy"], "Erlotinib");

    let request_head = server.join().unwrap();
    assert!(request_head.starts_with("get /search?tumor_type=lung http/1.1\r\n"));
}

#[tokio::test]
async fn scenario_encoded_query_value() {
    let (base_url, server) = one_shot_server("200 OK", r#"{"columns": [], "results": []}"#);

    client(&base_url)
        .search_with_cancel(
            &[pair("gene_mutations", "EGFR & ALK")],
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    let request_head = server.join().unwrap();
    assert!(request_head.contains("/search?gene_mutations=egfr%20%26%20alk"));
}

#[tokio::test]
async fn scenario_http_500() {
    let (base_url, server) = one_shot_server("500 Internal Server Error", "");

    let err = client(&base_url)
        .search_with_cancel(&[], &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err, SearchError::Http { status: 500 });
    assert_eq!(err.to_string(), "HTTP error! Status: 500");
    server.join().unwrap();
}

#[tokio::test]
async fn scenario_domain_error_on_2xx() {
    let (base_url, server) = one_shot_server(
        "200 OK",
        r#"{"error": "Missing expected column: Gene mutations"}"#,
    );

    let err = client(&base_url)
        .search_with_cancel(&[], &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Missing expected column: Gene mutations"
    );
    server.join().unwrap();
}

#[tokio::test]
async fn scenario_malformed_body_on_2xx() {
    let (base_url, server) = one_shot_server("200 OK", "<html>Bad Gateway</html>");

    let err = client(&base_url)
        .search_with_cancel(&[], &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::Data(_)));
    server.join().unwrap();
}

// ==================== Worker end to end ====================

/// Poll until the in-flight submission settles, with a hard timeout
fn wait_for_settlement(state: &mut SearchState) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while state.is_loading() {
        assert!(Instant::now() < deadline, "search did not settle in time");
        state.poll_response();
        thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn worker_round_trip_success() {
    let (base_url, server) = one_shot_server(
        "200 OK",
        r#"{"columns": ["Tumor Type"], "results": [{"Tumor Type": "NSCLC"}]}"#,
    );

    let mut state = SearchState::new(client(&base_url));
    state.submit(vec![pair("tumor_type", "lung")]);
    assert!(state.is_loading());

    wait_for_settlement(&mut state);

    let result = state.result().expect("expected a settled result");
    assert_eq!(result.rows.len(), 1);
    assert!(state.error().is_none());
    server.join().unwrap();
}

#[test]
fn worker_round_trip_http_error() {
    let (base_url, server) = one_shot_server("503 Service Unavailable", "");

    let mut state = SearchState::new(client(&base_url));
    state.submit(vec![]);
    wait_for_settlement(&mut state);

    assert_eq!(state.error(), Some("HTTP error! Status: 503"));
    assert!(state.result().is_none());
    assert!(matches!(state.outcome(), Outcome::Failed(_)));
    server.join().unwrap();
}

#[test]
fn worker_round_trip_connection_refused() {
    // Bind then drop to get a port with nothing listening
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let mut state = SearchState::new(client(&format!("http://127.0.0.1:{}", port)));
    state.submit(vec![]);
    wait_for_settlement(&mut state);

    let message = state.error().expect("expected a transport error");
    assert!(message.starts_with("Failed to fetch results."));
}
