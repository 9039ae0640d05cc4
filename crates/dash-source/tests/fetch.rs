//! Fetch tests against a one-shot local HTTP server.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

use dash_source::{DataSource, SourceError, StorageClient, load_into};
use dash_state::{StorageState, UiState};

/// Serve a single response on an ephemeral port and return its URL.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        while reader.read_line(&mut line).unwrap() > 0 {
            if line == "\r\n" {
                break;
            }
            line.clear();
        }
        let mut stream = stream;
        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
    });
    format!("http://{addr}/api/storage")
}

const VALID_BODY: &str = r#"{
    "totalStorage": 2000,
    "usedStorage": 500,
    "files": [
        {"id": "a", "name": "a.txt", "size": 10, "type": "text/plain",
         "lastModified": "2024-06-01T10:00:00Z", "path": "/a.txt"},
        {"id": "", "name": "bad.txt", "size": 10, "type": "text/plain",
         "lastModified": "2024-06-01T10:00:00Z", "path": "/bad.txt"}
    ],
    "storageByType": {"Documents": 900},
    "lastUpdated": "2024-06-01T10:00:00Z"
}"#;

#[test]
fn non_success_status_is_reported_with_code() {
    let url = serve_once("HTTP/1.1 404 Not Found", "{}");
    let client = StorageClient::new().unwrap();

    let error = client.fetch(&url).unwrap_err();

    assert!(matches!(error, SourceError::Http { status: 404 }));
    assert_eq!(error.to_string(), "HTTP error! status: 404");
}

#[test]
fn malformed_body_is_a_decode_error() {
    let url = serve_once("HTTP/1.1 200 OK", "not json");
    let client = StorageClient::new().unwrap();

    let error = client.fetch(&url).unwrap_err();

    assert!(matches!(error, SourceError::Decode(_)));
}

#[test]
fn remote_load_corrects_filters_and_publishes() {
    let url = serve_once("HTTP/1.1 200 OK", VALID_BODY);
    let client = StorageClient::new().unwrap();
    let mut storage = StorageState::new();
    let mut ui = UiState::new();

    assert!(load_into(&DataSource::Remote(url), &client, &mut storage, &mut ui));

    let snapshot = storage.snapshot();
    assert_eq!(snapshot.total_storage, 2000);
    assert_eq!(snapshot.files.len(), 1);
    assert_eq!(snapshot.storage_by_type["Documents"], 500);
    assert_eq!(storage.last_messages(), ["Filtered out 1 invalid file item(s)"]);
    assert!(!ui.snapshot().is_loading);
}

#[test]
fn failed_load_sets_ui_error_and_keeps_storage() {
    let url = serve_once("HTTP/1.1 500 Internal Server Error", "{}");
    let client = StorageClient::new().unwrap();
    let mut storage = StorageState::new();
    let mut ui = UiState::new();
    let before = storage.snapshot();

    assert!(!load_into(&DataSource::Remote(url), &client, &mut storage, &mut ui));

    let ui = ui.snapshot();
    assert!(!ui.is_loading);
    assert_eq!(ui.error.as_deref(), Some("HTTP error! status: 500"));
    assert_eq!(storage.snapshot(), before);
}

#[test]
fn rejected_payload_surfaces_as_ui_error() {
    let url = serve_once(
        "HTTP/1.1 200 OK",
        r#"{"totalStorage": 10, "usedStorage": 50, "files": [], "storageByType": {}, "lastUpdated": "2024-06-01T10:00:00Z"}"#,
    );
    let client = StorageClient::new().unwrap();
    let mut storage = StorageState::new();
    let mut ui = UiState::new();

    assert!(!load_into(&DataSource::Remote(url), &client, &mut storage, &mut ui));

    let error = ui.snapshot().error.unwrap();
    assert!(error.starts_with("Storage data was rejected"));
    assert!(error.contains("cannot exceed totalStorage"));
}
