/// Transport client behavior against a real socket: a minimal single-shot
/// HTTP stub answers one connection with a canned response.
use std::time::Duration;

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use vndash::config::AppConfig;
use vndash::errors::ApiError;
use vndash::external::api_client::{ApiClient, Transport};
use vndash::models::MarketOverview;

/// Serve one connection with the given status line and JSON body, returning
/// the base URL to point the client at.
async fn spawn_stub(status_line: &str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            read_request(&mut socket).await;
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}", addr)
}

/// Read the request head plus any content-length body so the client never
/// sees its upload cut short.
async fn read_request(socket: &mut tokio::net::TcpStream) {
    let mut buf = Vec::with_capacity(8192);
    let mut chunk = [0u8; 1024];

    loop {
        let n = match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        if let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);

            let total = head_end + 4 + content_length;
            while buf.len() < total {
                match socket.read(&mut chunk).await {
                    Ok(0) | Err(_) => return,
                    Ok(n) => buf.extend_from_slice(&chunk[..n]),
                }
            }
            return;
        }
    }
}

fn client_for(base_url: &str) -> ApiClient {
    let config = AppConfig::new(base_url, Duration::from_secs(60)).unwrap();
    ApiClient::new(&config)
}

#[tokio::test]
async fn test_fetch_data_decodes_typed_payload() {
    let body = json!({
        "index_name": "VN-Index",
        "value": 1280.3,
        "change": -4.7,
        "change_percent": -0.37,
        "volume": 598_000_000i64,
        "market_status": "OPEN",
        "last_updated": "2024-03-15T09:00:00Z"
    });
    let base = spawn_stub("200 OK", body.to_string()).await;
    let client = client_for(&base);

    let overview: MarketOverview = client.fetch_data("/market/overview").await.unwrap();

    assert_eq!(overview.index_name, "VN-Index");
    assert_eq!(overview.volume, 598_000_000);
    assert!(!client.is_loading());
    assert!(client.last_error().is_none());
}

#[tokio::test]
async fn test_non_success_status_is_reported() {
    let base = spawn_stub("503 Service Unavailable", "{}".to_string()).await;
    let client = client_for(&base);

    let result: Result<Value, ApiError> = client.fetch_data("/dashboard/summary").await;

    assert!(matches!(result, Err(ApiError::Status(503))));
    assert!(client.last_error().unwrap().contains("503"));
    assert!(!client.is_loading());
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let base = spawn_stub("200 OK", "not json".to_string()).await;
    let client = client_for(&base);

    let result: Result<Value, ApiError> = client.fetch_data("/market/overview").await;

    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn test_post_data_round_trips_json() {
    let base = spawn_stub("200 OK", json!({"ok": true}).to_string()).await;
    let client = client_for(&base);

    let response: Value = client
        .post_data("/trading/orders", &json!({"symbol": "FPT", "quantity": 10}))
        .await
        .unwrap();

    assert_eq!(response, json!({"ok": true}));
    assert!(client.last_error().is_none());
}

#[tokio::test]
async fn test_trait_object_exposes_base_url() {
    let client = client_for("http://localhost:8000");
    let transport: &dyn Transport = &client;
    assert_eq!(transport.base_url(), "http://localhost:8000/");
}
