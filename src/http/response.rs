//! JSON envelope and preflight responses
//!
//! Every response carries the permissive CORS headers.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::response::Builder;
use hyper::{Response, StatusCode};
use serde_json::Value;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Attach CORS headers to a response builder
pub fn with_cors(builder: Builder) -> Builder {
    builder
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .header("Access-Control-Allow-Methods", ALLOW_METHODS)
        .header("Access-Control-Allow-Headers", ALLOW_HEADERS)
}

/// Build a pretty-printed JSON response
pub fn build_json_response(
    status: StatusCode,
    body: &Value,
    server_name: &str,
) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string_pretty(body) {
        Ok(j) => j,
        Err(e) => {
            crate::logger::log_error(&format!("Failed to serialize response: {e}"));
            return build_fallback_error(server_name);
        }
    };

    with_cors(Response::builder())
        .status(status)
        .header("Content-Type", "application/json")
        .header("Server", server_name)
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// Build the OPTIONS preflight response (200, empty body)
pub fn build_preflight_response(server_name: &str) -> Response<Full<Bytes>> {
    with_cors(Response::builder())
        .status(StatusCode::OK)
        .header("Server", server_name)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Envelope used when the response body itself cannot be produced
fn build_fallback_error(server_name: &str) -> Response<Full<Bytes>> {
    with_cors(Response::builder())
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header("Content-Type", "application/json")
        .header("Server", server_name)
        .body(Full::new(Bytes::from(
            r#"{"success":false,"message":"Internal server error"}"#,
        )))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))))
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
