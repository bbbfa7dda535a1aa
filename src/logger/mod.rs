//! Server logging
//!
//! Startup banner, per-request access lines and error reporting, written
//! through the sinks installed by [`init`]. Before `init` runs everything
//! falls back to stdout/stderr.

mod format;
pub mod writer;

pub use format::{AccessLogEntry, LogFormat};

use crate::config::Config;
use std::net::SocketAddr;

/// Endpoints announced in the startup banner
const BANNER_ENDPOINTS: [(&str, &str); 10] = [
    ("POST", "/auth/login"),
    ("POST", "/auth/register"),
    ("GET ", "/courts"),
    ("GET ", "/courts/types"),
    ("GET ", "/courts/locations"),
    ("GET ", "/courts/{id}/slots"),
    ("POST", "/bookings"),
    ("GET ", "/admin/dashboard"),
    ("GET ", "/admin/bookings"),
    ("GET ", "/admin/courts"),
];

const RULE: &str = "======================================";

pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn info(message: &str) {
    match writer::get() {
        Some(sinks) => sinks.info(message),
        None => println!("{message}"),
    }
}

fn error(message: &str) {
    match writer::get() {
        Some(sinks) => sinks.error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    info(RULE);
    info(&format!("SportzHub Mock API Server listening on: http://{addr}"));
    info(&format!("Log level: {}", config.logging.level));
    let files = [
        ("Seed data", &config.data.seed_file),
        ("Access log", &config.logging.access_log_file),
        ("Error log", &config.logging.error_log_file),
    ];
    for (label, path) in files {
        if let Some(path) = path {
            info(&format!("{label}: {path}"));
        }
    }
    info("Available endpoints:");
    for (method, path) in BANNER_ENDPOINTS {
        info(&format!("  {method} http://localhost:{}{path}", addr.port()));
    }
    info("Press Ctrl+C to stop the server");
    info(RULE);
}

pub fn log_seed_loaded(users: usize, courts: usize) {
    info(&format!("[Store] Seeded {users} users and {courts} courts"));
}

pub fn log_server_stopped() {
    info("[Shutdown] Server stopped");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    error(&format!("[ERROR] Connection failed: {err:?}"));
}

pub fn log_error(message: &str) {
    error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    error(&format!("[WARN] {message}"));
}

/// Payload of a POST, logged when `logging.show_body` is on
pub fn log_request_body(method: &str, path: &str, body: &serde_json::Value) {
    info(&format!("[Request] {method} {path} - Data: {body}"));
}

pub fn log_access(entry: &AccessLogEntry, format: &str) {
    info(&entry.render(LogFormat::from_name(format)));
}
