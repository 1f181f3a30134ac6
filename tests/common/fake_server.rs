//! Minimal fake HTTP server for loader harnesses.
//!
//! Binds an ephemeral loopback port and answers every connection with one
//! canned response on a background thread. No routing, no keep-alive; the
//! loaders issue a single GET per source, which is all this needs to fake.

use std::io::{Read, Write};
use std::net::TcpListener;

/// Serve `body` with `status` for every request and return the base URL.
///
/// The listener thread runs until the test process exits.
pub fn serve(status: u16, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake server");
    let addr = listener.local_addr().expect("fake server local addr");
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {len}\r\nConnection: close\r\n\r\n{body}",
        reason = reason_phrase(status),
        len = body.len(),
    );

    std::thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request);
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{addr}/")
}

/// A URL nothing listens on: bind an ephemeral port, then drop the
/// listener so connections are refused.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway local addr");
    drop(listener);
    format!("http://{addr}/")
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Response",
    }
}
