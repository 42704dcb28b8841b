//! Test utilities and fixtures for video-catalog tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{feed_document, sample_entry};
//!
//! let doc = feed_document(vec![sample_entry("usuv71300001")]);
//! let catalog = adapter::to_catalog(doc, SchemaPolicy::Abort)?;
//! ```

use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::catalog::RawDocument;

/// Creates a valid feed entry for `id` with one artist.
///
/// Title is `"Video {id}"`, artist `"Artist {id}"`, and the image URL
/// `"http://img.example.com/{id}.jpg"`. Customize with `entry["field"] = ...`.
pub fn sample_entry(id: &str) -> Value {
    json!({
        "isrc": id,
        "releaseDate": "2013-05-14T00:00:00",
        "thumbnailUrl": format!("http://img.example.com/{}.jpg", id),
        "title": format!("Video {}", id),
        "artists": [{ "name": format!("Artist {}", id) }],
    })
}

/// Wraps entries in a `{ "videos": [...] }` document.
pub fn feed_document(entries: Vec<Value>) -> RawDocument {
    let mut document = RawDocument::new();
    document.insert("videos".to_string(), Value::Array(entries));
    document
}

/// Serves a single HTTP response on a local port and returns its URL.
///
/// `status` is the status line tail, e.g. `"200 OK"`. The listener accepts one
/// connection, waits for the request headers, writes the response, and closes.
pub async fn serve_once(status: &'static str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }

        let head = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status,
            body.len()
        );
        let _ = socket.write_all(head.as_bytes()).await;
        let _ = socket.write_all(&body).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{}/videos.json", addr)
}

/// Accepts connections on a local port but never answers; returns its URL.
///
/// Each accepted socket is held open until the test runtime shuts down.
pub async fn serve_silent() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    format!("http://{}/videos.json", addr)
}
