//! In-process HTTP collector for tests. Accepts a fixed number of requests,
//! answers each with the same status and records what it received.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

pub struct FakeCollector {
    port: u16,
    handle: JoinHandle<Vec<CapturedRequest>>,
}

impl FakeCollector {
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Waits for the expected number of requests and returns them in arrival order
    pub fn finish(self) -> Vec<CapturedRequest> {
        self.handle.join().unwrap()
    }
}

pub fn spawn_collector(expected_requests: usize, status: u16) -> FakeCollector {
    spawn_delayed_collector(expected_requests, status, Duration::ZERO)
}

/// Like `spawn_collector`, but holds every response for `delay` after reading the request
pub fn spawn_delayed_collector(
    expected_requests: usize,
    status: u16,
    delay: Duration,
) -> FakeCollector {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = thread::spawn(move || {
        let mut captured = Vec::with_capacity(expected_requests);
        for stream in listener.incoming().take(expected_requests) {
            let stream = stream.unwrap();
            captured.push(handle_connection(stream, status, delay));
        }
        captured
    });

    FakeCollector { port, handle }
}

/// A port nothing is listening on. The listener is dropped before the port is used,
/// so another process could bind it in between; tests accept that race.
pub fn unused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

fn handle_connection(mut stream: TcpStream, status: u16, delay: Duration) -> CapturedRequest {
    let mut reader = BufReader::new(stream.try_clone().unwrap());

    let mut request_line = String::new();
    reader.read_line(&mut request_line).unwrap();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0;
    let mut content_type = None;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim();
            match name.trim().to_ascii_lowercase().as_str() {
                "content-length" => content_length = value.parse().unwrap(),
                "content-type" => content_type = Some(value.to_string()),
                _ => {}
            }
        }
    }

    let mut body = vec![0; content_length];
    reader.read_exact(&mut body).unwrap();

    thread::sleep(delay);
    let response = format!(
        "HTTP/1.1 {} Test\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        status
    );
    stream.write_all(response.as_bytes()).unwrap();
    stream.flush().unwrap();

    CapturedRequest {
        method,
        path,
        content_type,
        body,
    }
}
