//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a single static body to any GET. Can omit Content-Length (the
//! client must then stream until EOF) and answer with an arbitrary status.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct AudioServerOptions {
    /// HTTP status code for every response.
    pub status: u32,
    /// If false, omit `Content-Length` and close the connection after the
    /// body (simulates servers that stream without a declared total).
    pub declare_length: bool,
}

impl Default for AudioServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            declare_length: true,
        }
    }
}

/// Starts a server in a background thread serving `body`. Returns the base
/// URL (e.g. "http://127.0.0.1:12345/"). The server runs until the process
/// exits.
pub fn start(body: Vec<u8>) -> String {
    start_with_options(body, AudioServerOptions::default())
}

pub fn start_with_options(body: Vec<u8>, opts: AudioServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body, opts));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream, body: &[u8], opts: AudioServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    // Drain the request head; the response is the same regardless.
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }

    let reason = match opts.status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        429 => "Too Many Requests",
        _ => "Status",
    };
    let head = if opts.declare_length {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: audio/mpeg\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            opts.status,
            reason,
            body.len()
        )
    } else {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: audio/mpeg\r\nConnection: close\r\n\r\n",
            opts.status, reason
        )
    };
    let _ = stream.write_all(head.as_bytes());

    // Write the body in slices so the client sees more than one chunk.
    for piece in body.chunks(4096) {
        if stream.write_all(piece).is_err() {
            return;
        }
    }
    let _ = stream.flush();
}
