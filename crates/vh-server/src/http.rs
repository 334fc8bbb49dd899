//! HTTP serve loop for the view process.
//!
//! A single background thread accepts requests over tiny_http and renders
//! every page from the immutable catalog snapshot taken at startup. The
//! loop polls with a short receive timeout so the shutdown flag is observed
//! promptly; shutdown pokes the listener with a dummy connection to unblock
//! the accept.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, error, info, warn};
use vh_catalog::{clamp_page, paginate, total_pages, Catalog, ViewState, PAGE_SIZE};
use vh_render::PageGenerator;

use crate::config::ServerConfig;

/// Everything a request needs, built once at startup and never mutated.
pub struct AppState {
    pub catalog: Catalog,
    /// Load-failure notice shown above every view, when present.
    pub banner: Option<String>,
    pub generator: PageGenerator,
}

/// Handle to the running HTTP server.
pub struct ViewServer {
    shutdown: Arc<AtomicBool>,
    thread: Option<thread::JoinHandle<()>>,
    addr: SocketAddr,
}

impl ViewServer {
    /// Bind the listener and start serving on a background thread.
    pub fn start(config: &ServerConfig, state: AppState) -> Result<Self, String> {
        let addr: SocketAddr = config
            .addr()
            .parse()
            .map_err(|e| format!("invalid bind address {}: {}", config.addr(), e))?;
        let server = tiny_http::Server::http(addr)
            .map_err(|e| format!("failed to start server on {}: {}", addr, e))?;

        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = Arc::clone(&shutdown);
        let state = Arc::new(state);

        info!(
            addr = %addr,
            records = state.catalog.len(),
            "view server started"
        );

        let thread = thread::Builder::new()
            .name("vh-serve".to_string())
            .spawn(move || {
                serve_loop(server, &state, &shutdown_clone);
            })
            .map_err(|e| format!("failed to spawn serve thread: {}", e))?;

        Ok(Self {
            shutdown,
            thread: Some(thread),
            addr,
        })
    }

    /// Address the server actually bound.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Block until the serve thread exits.
    pub fn join(mut self) {
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }

    /// Signal the serve thread to stop and wait for it.
    pub fn shutdown(mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        // Dummy connection to unblock the accept loop
        let _ = std::net::TcpStream::connect(self.addr);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
        info!("view server stopped");
    }
}

impl Drop for ViewServer {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        let _ = std::net::TcpStream::connect(self.addr);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn serve_loop(server: tiny_http::Server, state: &AppState, shutdown: &AtomicBool) {
    loop {
        if shutdown.load(Ordering::SeqCst) {
            debug!("serve loop exiting");
            break;
        }

        let request = match server.recv_timeout(Duration::from_secs(1)) {
            Ok(Some(request)) => request,
            Ok(None) => continue,
            Err(e) => {
                if !shutdown.load(Ordering::SeqCst) {
                    error!(error = %e, "server receive failed");
                }
                break;
            }
        };

        if shutdown.load(Ordering::SeqCst) {
            let response = tiny_http::Response::from_string("shutting down").with_status_code(503);
            let _ = request.respond(response);
            continue;
        }

        let url = request.url().to_string();
        debug!(method = %request.method(), url = %url, "request");

        let (path, query) = split_url(&url);
        let response = match path {
            "/" => {
                let pairs = query_pairs(query);
                let view =
                    ViewState::from_query_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
                html_response(render_view(state, &view))
            }
            "/health" | "/healthz" => tiny_http::Response::from_string("ok"),
            _ => tiny_http::Response::from_string("not found").with_status_code(404),
        };

        if let Err(e) = request.respond(response) {
            warn!(error = %e, url = %url, "failed to send response");
        }
    }
}

/// Pick and render the view for one request.
///
/// The requested page is clamped against the full catalog up front, so the
/// grid, the detail back link, and the not-found back link all agree on
/// where "back" is.
fn render_view(state: &AppState, view: &ViewState) -> String {
    let records = state.catalog.records();
    let total = total_pages(records.len(), PAGE_SIZE);
    let current_page = clamp_page(view.page, total);
    let banner = state.banner.as_deref();

    match &view.selected {
        Some(id) => match state.catalog.get(id) {
            Some(record) => state.generator.render_detail(record, current_page, banner),
            None => state.generator.render_not_found(current_page, banner),
        },
        None => {
            let page = paginate(records, current_page, PAGE_SIZE);
            state.generator.render_list(&page, banner)
        }
    }
}

/// Split a request URL into path and raw query string.
fn split_url(url: &str) -> (&str, &str) {
    match url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (url, ""),
    }
}

/// Decode a raw query string into ordered key/value pairs.
///
/// Order is preserved so the first occurrence of a repeated key stays
/// authoritative downstream. `+` decodes to space; a malformed percent
/// escape keeps its raw text instead of dropping the pair.
pub fn query_pairs(query: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for part in query.split('&') {
        if part.is_empty() {
            continue;
        }
        let (key, value) = match part.split_once('=') {
            Some((k, v)) => (k, v),
            None => (part, ""),
        };
        pairs.push((decode_component(key), decode_component(value)));
    }
    pairs
}

fn decode_component(raw: &str) -> String {
    let plus_decoded = raw.replace('+', " ");
    match urlencoding::decode(&plus_decoded) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => plus_decoded,
    }
}

fn html_response(body: String) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    tiny_http::Response::from_string(body).with_header(
        "Content-Type: text/html; charset=utf-8"
            .parse::<tiny_http::Header>()
            .unwrap(),
    )
}
