//! Integration tests for the fanlog facade
//!
//! These tests verify:
//! - End-to-end file delivery in both line formats
//! - Per-transport filtering
//! - Failure isolation between transports
//! - Remote collector delivery over a loopback HTTP stub
//!
//! Dropping a `Logger` drops its transports, which joins their delivery
//! workers; tests rely on that to observe background writes.

use fanlog::prelude::*;
use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

fn file_logger(path: &std::path::Path, filter: SeverityFilter) -> Logger {
    Logger::builder()
        .transport(FileTransport::new(path).with_filter(filter))
        .build()
}

#[test]
fn test_file_transport_text_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("text.log");

    let logger = file_logger(&log_file, SeverityFilter::new());
    logger.info(vec![LogValue::from("hello"), LogValue::from(1)]);
    drop(logger);

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with('['));
    assert!(lines[0].ends_with("] [INFO] default: hello 1"));
}

#[test]
fn test_file_transport_json_format() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("json.log");

    let logger = Logger::builder()
        .transport(
            FileTransport::new(&log_file)
                .with_format(FileFormat::Json)
                .with_filter(SeverityFilter::new()),
        )
        .build();
    logger.error(vec![LogValue::from("boom")]);
    drop(logger);

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert!(content.ends_with('\n'));

    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1, "Exactly one JSON object per event");

    let parsed: serde_json::Value = serde_json::from_str(lines[0]).expect("valid JSON line");
    assert!(parsed["timestamp"].is_string());
    assert_eq!(parsed["level"], "ERROR");
    assert_eq!(parsed["message"], "default: boom");
}

#[test]
fn test_minimum_severity_filters_events() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("filtered.log");

    let logger = file_logger(
        &log_file,
        SeverityFilter::new().with_minimum(Severity::Warn),
    );
    logger.debug(vec![LogValue::from("dropped")]);
    logger.info(vec![LogValue::from("dropped")]);
    logger.log(vec![LogValue::from("dropped")]);
    logger.warn(vec![LogValue::from("kept")]);
    logger.error(vec![LogValue::from("kept")]);
    drop(logger);

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[WARN]"));
    assert!(lines[1].contains("[ERROR]"));
}

#[test]
fn test_severity_set_overrides_minimum() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("set.log");

    let logger = file_logger(
        &log_file,
        SeverityFilter::new()
            .with_minimum(Severity::Warn)
            .with_severities([Severity::Debug, Severity::Error]),
    );
    logger.debug(vec![LogValue::from("kept")]);
    logger.warn(vec![LogValue::from("dropped")]);
    logger.error(vec![LogValue::from("kept")]);
    drop(logger);

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[DEBUG]"));
    assert!(lines[1].contains("[ERROR]"));
}

#[test]
fn test_one_call_reaches_all_transports() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let first = temp_dir.path().join("first.log");
    let second = temp_dir.path().join("second.log");

    let logger = Logger::builder()
        .transport(FileTransport::new(&first))
        .transport(FileTransport::new(&second))
        .build();
    logger.warn(vec![LogValue::from("fan-out")]);
    drop(logger);

    for path in [&first, &second] {
        let content = fs::read_to_string(path).expect("Failed to read log file");
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("default: fan-out"));
    }
}

#[test]
fn test_misconfigured_transport_does_not_block_delivery() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("after_misconfigured.log");

    // No endpoint or token: every send fails with a configuration error,
    // reported on the error channel and contained by the transport.
    let splunk = SplunkHecTransport::new().expect("Failed to build client");

    let logger = Logger::builder()
        .transport(splunk)
        .transport(FileTransport::new(&log_file))
        .build();
    logger.error(vec![LogValue::from("still delivered")]);
    drop(logger);

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("default: still delivered"));
}

#[test]
fn test_network_failure_is_contained() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("after_network_failure.log");

    // Bind and immediately drop a listener to get a port nothing listens on
    let closed_port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        listener.local_addr().expect("local addr").port()
    };

    let splunk = SplunkHecTransport::new()
        .expect("Failed to build client")
        .with_endpoint(format!("http://127.0.0.1:{}/services/collector", closed_port))
        .with_token("token");

    let logger = Logger::builder()
        .transport(splunk)
        .transport(FileTransport::new(&log_file))
        .build();
    logger.error(vec![LogValue::from("survives refusal")]);
    drop(logger);

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("default: survives refusal"));
}

#[test]
fn test_unknown_region_is_contained() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("after_unknown_region.log");

    let newrelic = NewRelicTransport::new("key")
        .expect("Failed to build client")
        .with_region("Mars");

    let logger = Logger::builder()
        .transport(newrelic)
        .transport(FileTransport::new(&log_file))
        .build();
    logger.error(vec![LogValue::from("still delivered")]);
    drop(logger);

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn test_identical_calls_differ_only_in_timestamp() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("idempotent.log");

    let logger = file_logger(&log_file, SeverityFilter::new());
    logger.info(vec![LogValue::from("same"), LogValue::from(1)]);
    logger.info(vec![LogValue::from("same"), LogValue::from(1)]);
    drop(logger);

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    // Strip the leading [timestamp] field; the rest must match exactly
    let tail = |line: &str| line.split_once("] ").map(|(_, t)| t.to_string()).unwrap();
    assert_eq!(tail(lines[0]), tail(lines[1]));
    assert_eq!(tail(lines[0]), "[INFO] default: same 1");
}

#[test]
fn test_serialized_collections_reach_the_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("collections.log");

    let logger = file_logger(&log_file, SeverityFilter::new());
    logger.info(vec![
        LogValue::map([("a", 1), ("b", 2)]),
        LogValue::set(["x", "y"]),
        LogValue::Absent,
    ]);
    drop(logger);

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert!(content.contains("default: Map:{ a => 1, b => 2 } Set:{ x, y } undefined"));
}

// ---------------------------------------------------------------------------
// Loopback HTTP stub for remote collector tests
// ---------------------------------------------------------------------------

fn request_complete(buf: &[u8]) -> bool {
    let text = String::from_utf8_lossy(buf);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);
    buf.len() >= header_end + 4 + content_length
}

fn handle_request(stream: &mut TcpStream) -> Option<String> {
    stream.set_read_timeout(Some(Duration::from_secs(5))).ok();
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if request_complete(&buf) {
                    break;
                }
            }
            Err(_) => break,
        }
    }
    let _ = stream.write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 0\r\n\r\n");
    let _ = stream.flush();
    Some(String::from_utf8_lossy(&buf).into_owned())
}

/// Accept one request, answer 200, and hand the raw request text back.
fn spawn_http_stub(path: &str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            if let Some(request) = handle_request(&mut stream) {
                let _ = tx.send(request);
            }
        }
    });

    (format!("http://{}{}", addr, path), rx)
}

fn body_of(request: &str) -> &str {
    request
        .split_once("\r\n\r\n")
        .map(|(_, body)| body)
        .expect("request has a body")
}

#[test]
fn test_splunk_delivery_over_loopback() {
    let (endpoint, rx) = spawn_http_stub("/services/collector");

    let transport = SplunkHecTransport::new()
        .expect("Failed to build client")
        .with_endpoint(endpoint)
        .with_token("integration-token")
        .with_source_type("it");

    let logger = Logger::builder().transport(transport).build();
    logger.error(vec![LogValue::from("remote"), LogValue::from(7)]);
    drop(logger);

    let request = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("collector received the event");
    let lowered = request.to_lowercase();
    assert!(request.starts_with("POST /services/collector"));
    assert!(lowered.contains("authorization: splunk integration-token"));
    assert!(lowered.contains("content-type: application/json"));

    let parsed: serde_json::Value =
        serde_json::from_str(body_of(&request)).expect("JSON body");
    assert_eq!(parsed["source"], "default");
    assert_eq!(parsed["sourcetype"], "it");
    assert_eq!(parsed["event"]["level"], "ERROR");
    assert_eq!(parsed["event"]["message"], "remote 7");
    assert!(parsed["time"].as_f64().is_some());
}

#[test]
fn test_filtered_event_sends_no_request() {
    let (endpoint, rx) = spawn_http_stub("/services/collector");

    let transport = SplunkHecTransport::new()
        .expect("Failed to build client")
        .with_endpoint(endpoint)
        .with_token("integration-token")
        .with_filter(SeverityFilter::new().with_minimum(Severity::Error));

    let logger = Logger::builder().transport(transport).build();
    logger.info(vec![LogValue::from("below threshold")]);
    drop(logger);

    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
}
