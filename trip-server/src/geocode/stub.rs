//! Canned-response HTTP server for client tests.

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A local server that answers every request with the same response.
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// Serve `body` with the given status line (e.g. "200 OK").
    pub async fn start(status: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = requests.clone();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };

                let mut head = Vec::new();
                let mut buf = [0u8; 1024];
                while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => head.extend_from_slice(&buf[..n]),
                    }
                }
                seen.lock()
                    .unwrap()
                    .push(String::from_utf8_lossy(&head).into_owned());

                let response = format!(
                    "HTTP/1.1 {status}\r\n\
                     Content-Type: application/json;charset=UTF-8\r\n\
                     Content-Length: {}\r\n\
                     Connection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self { base_url, requests }
    }

    /// Raw request heads received so far, lower-cased.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.to_lowercase())
            .collect()
    }
}

/// Two hits, best match first.
pub const TWO_DOCUMENTS: &str = r#"{
    "meta": {"total_count": 2, "pageable_count": 2, "is_end": true},
    "documents": [
        {
            "place_name": "Gyeongbokgung",
            "address_name": "Seoul Jongno-gu Sejongno 1-1",
            "road_address_name": "Seoul Jongno-gu Sajik-ro 161",
            "x": "126.977041",
            "y": "37.579617"
        },
        {
            "place_name": "Gyeongbokgung Station",
            "address_name": "Seoul Jongno-gu Jeokseon-dong 1",
            "road_address_name": "",
            "x": "126.973555",
            "y": "37.575762"
        }
    ]
}"#;

pub const NO_DOCUMENTS: &str = r#"{"meta": {"total_count": 0, "is_end": true}, "documents": []}"#;
