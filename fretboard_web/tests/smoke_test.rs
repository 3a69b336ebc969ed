// Integration smoke test for the web server.
//
// Starts the server on localhost, then issues plain HTTP/1.0 requests over
// `TcpStream` and checks status codes, headers, and JSON bodies. Exercises
// the real listener and response encoding, which the in-process route tests
// in `routes.rs` skip.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::path::PathBuf;
use std::time::Duration;

use fretboard_web::{ServerConfig, start_server};
use serde_json::Value;

/// Status code, raw header block, and body of one response.
struct RawResponse {
    status: u16,
    headers: String,
    body: String,
}

fn request(addr: SocketAddr, method: &str, path: &str) -> RawResponse {
    let mut stream = TcpStream::connect(addr).unwrap();
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    write!(stream, "{method} {path} HTTP/1.0\r\nHost: localhost\r\n\r\n").unwrap();

    let mut raw = String::new();
    stream.read_to_string(&mut raw).unwrap();

    let (head, body) = raw.split_once("\r\n\r\n").expect("response has a header block");
    let status = head
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .expect("status line has a code");
    RawResponse {
        status,
        headers: head.to_ascii_lowercase(),
        body: body.to_string(),
    }
}

fn get_json(addr: SocketAddr, path: &str) -> Value {
    let response = request(addr, "GET", path);
    assert_eq!(response.status, 200, "GET {path}: {}", response.body);
    assert!(
        response.headers.contains("content-type: application/json"),
        "GET {path} headers: {}",
        response.headers
    );
    serde_json::from_str(&response.body).unwrap()
}

fn local_config(static_dir: PathBuf, debug: bool) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".into(),
        port: 0, // OS picks a free port
        static_dir,
        debug,
    }
}

#[test]
fn serves_theory_api() {
    let (handle, addr) = start_server(local_config(PathBuf::from("static"), false)).unwrap();

    let board = get_json(addr, "/api/fretboard");
    assert_eq!(board.as_array().unwrap().len(), 6);
    assert_eq!(board[0][0]["note"], "E");
    assert_eq!(board[0][12]["note"], "E");

    let board = get_json(addr, "/api/fretboard/intervals?root=G");
    assert_eq!(board[2][0]["interval"], 0);
    assert_eq!(board[2][0]["interval_name"], "1P");

    let scale = get_json(addr, "/api/scale?root=C&type=major");
    assert_eq!(
        scale["notes"],
        serde_json::json!(["C", "D", "E", "F", "G", "A", "B"])
    );
    assert_eq!(get_json(addr, "/api/scale?root=C&type=bogus_type"), scale);

    let chord = get_json(addr, "/api/chord?root=A&type=minor");
    assert_eq!(chord["notes"], serde_json::json!(["A", "C", "E"]));

    let triads = get_json(addr, "/api/triads?root=C");
    assert_eq!(triads.as_object().unwrap().len(), 4);

    let degrees = get_json(addr, "/api/scale-triads?root=C&type=major");
    assert_eq!(degrees.as_array().unwrap().len(), 7);
    assert_eq!(degrees[1]["root"], "D");
    assert_eq!(degrees[1]["type"], "minor");

    // Invalid root falls back to C.
    assert_eq!(get_json(addr, "/api/chord?root=Z&type=maj7")["notes"][0], "C");

    handle.stop();
}

#[test]
fn rejects_unknown_routes_and_methods() {
    let (handle, addr) = start_server(local_config(PathBuf::from("static"), false)).unwrap();

    let missing = request(addr, "GET", "/nowhere");
    assert_eq!(missing.status, 404);
    assert!(missing.body.contains("not found"));

    assert_eq!(request(addr, "GET", "/debug").status, 404);
    assert_eq!(request(addr, "DELETE", "/api/scale").status, 405);

    handle.stop();
}

#[test]
fn serves_index_and_debug() {
    let dir = std::env::temp_dir().join(format!("fretboard_smoke_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<title>Fretboard</title>").unwrap();

    let (handle, addr) = start_server(local_config(dir.clone(), true)).unwrap();

    let index = request(addr, "GET", "/");
    assert_eq!(index.status, 200);
    assert!(index.headers.contains("content-type: text/html"));
    assert_eq!(index.body, "<title>Fretboard</title>");

    let debug = get_json(addr, "/debug");
    assert!(debug["env"].is_object());
    assert!(
        debug["routes"]
            .as_array()
            .unwrap()
            .iter()
            .any(|r| r == "/api/scale-triads")
    );

    handle.stop();
    std::fs::remove_dir_all(&dir).unwrap();
}
