// HTTP listener and request loop.
//
// Architecture: a single server thread owns the `tiny_http::Server` and
// polls it with `recv_timeout`, so it can notice the `keep_running` flag
// going false between requests. Each request is routed synchronously on
// that thread via `routes::route`; engine calls are pure and finish in
// microseconds, so there is no worker pool.
//
// `start_server` binds before spawning and returns the bound address,
// which lets tests pass port 0 and discover the port the OS picked.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use tiny_http::{Header, Request, Response, Server};

use crate::config::ServerConfig;
use crate::routes::{Reply, route};

/// How long the loop waits for a request before rechecking `keep_running`.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Handle returned by `start_server` to control the running server.
pub struct ServerHandle {
    keep_running: Arc<AtomicBool>,
    thread: Option<thread::JoinHandle<()>>,
}

impl ServerHandle {
    /// Signal the server to stop and wait for it to shut down.
    pub fn stop(mut self) {
        self.keep_running.store(false, Ordering::SeqCst);
        self.join();
    }

    /// Block until the server thread exits.
    pub fn wait(mut self) {
        self.join();
    }

    fn join(&mut self) {
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

/// Bind and start serving on a background thread.
pub fn start_server(config: ServerConfig) -> io::Result<(ServerHandle, SocketAddr)> {
    let server = Server::http((config.host.as_str(), config.port)).map_err(io::Error::other)?;
    let addr = server
        .server_addr()
        .to_ip()
        .ok_or_else(|| io::Error::other("server is not bound to an IP address"))?;

    let keep_running = Arc::new(AtomicBool::new(true));
    let keep_running_clone = keep_running.clone();

    let thread = thread::spawn(move || {
        run_server(server, config, keep_running_clone);
    });

    log::info!("listening on http://{addr}");

    Ok((
        ServerHandle {
            keep_running,
            thread: Some(thread),
        },
        addr,
    ))
}

fn run_server(server: Server, config: ServerConfig, keep_running: Arc<AtomicBool>) {
    while keep_running.load(Ordering::SeqCst) {
        match server.recv_timeout(POLL_INTERVAL) {
            Ok(Some(request)) => handle_request(request, &config),
            Ok(None) => {}
            Err(e) => {
                log::error!("accept failed, shutting down: {e}");
                break;
            }
        }
    }
    log::info!("server stopped");
}

fn handle_request(request: Request, config: &ServerConfig) {
    let method = request.method().as_str().to_string();
    let url = request.url().to_string();
    let reply = route(&method, &url, config);
    log::debug!("{method} {url} -> {}", reply.status);

    if let Err(e) = request.respond(into_response(reply)) {
        log::warn!("failed to respond to {method} {url}: {e}");
    }
}

fn into_response(reply: Reply) -> Response<io::Cursor<Vec<u8>>> {
    let response = Response::from_data(reply.body).with_status_code(reply.status);
    match Header::from_bytes(&b"Content-Type"[..], reply.content_type.as_bytes()) {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
