//! Request dispatch module
//!
//! Entry point for HTTP request processing: preflight handling, body limits,
//! JSON decoding, API dispatch and access logging.

use crate::api::{parse_payload, ApiError, ApiRequest, ApiResponse};
use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, StatusCode, Version};
use serde_json::Value;
use std::any::Any;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

/// Request line details kept for the access log
struct RequestInfo {
    method: Method,
    path: String,
    query: Option<String>,
    version: Version,
    referer: Option<String>,
    user_agent: Option<String>,
}

impl RequestInfo {
    fn from_request<B>(req: &Request<B>) -> Self {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(ToString::to_string)
        };
        Self {
            method: req.method().clone(),
            path: req.uri().path().to_string(),
            query: req.uri().query().map(ToString::to_string),
            version: req.version(),
            referer: header("referer"),
            user_agent: header("user-agent"),
        }
    }

    fn target(&self) -> String {
        match &self.query {
            Some(q) => format!("{}?{q}", self.path),
            None => self.path.clone(),
        }
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let started = Instant::now();
    let info = RequestInfo::from_request(&req);
    let server_name = state.config.http.server_name.as_str();

    let response = if info.method == Method::OPTIONS {
        http::build_preflight_response(server_name)
    } else {
        let outcome = match read_body(req, state.config.http.max_body_size).await {
            Ok(bytes) => dispatch(&state, &info, &bytes),
            Err(err) => err.into_response(),
        };
        http::build_json_response(outcome.status, &outcome.body, server_name)
    };

    if state.config.logging.access_log {
        log_access(&state, &info, peer_addr, &response, started);
    }
    Ok(response)
}

/// Collect the request body, refusing anything above `max_body_size`
async fn read_body<B>(req: Request<B>, max_body_size: u64) -> Result<Bytes, BodyError>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let limit = usize::try_from(max_body_size).unwrap_or(usize::MAX);

    let declared = req
        .headers()
        .get(hyper::header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());
    if let Some(size) = declared {
        if size > max_body_size {
            logger::log_warning(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            return Err(BodyError::TooLarge);
        }
    }

    match Limited::new(req.into_body(), limit).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(e) if e.is::<LengthLimitError>() => {
            logger::log_warning(&format!("Request body exceeded {max_body_size} bytes"));
            Err(BodyError::TooLarge)
        }
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            Err(BodyError::Unreadable)
        }
    }
}

enum BodyError {
    TooLarge,
    Unreadable,
}

impl BodyError {
    fn into_response(self) -> ApiResponse {
        let (status, message) = match self {
            Self::TooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large"),
            Self::Unreadable => (StatusCode::BAD_REQUEST, "Failed to read request body"),
        };
        ApiResponse::new(
            status,
            serde_json::json!({ "success": false, "message": message }),
        )
    }
}

/// Run the API router, turning a handler panic into a 500 envelope
fn dispatch(state: &AppState, info: &RequestInfo, bytes: &Bytes) -> ApiResponse {
    let payload = if info.method == Method::POST {
        parse_payload(bytes)
    } else {
        serde_json::Map::new()
    };

    if info.method == Method::POST && state.config.logging.show_body {
        logger::log_request_body(
            info.method.as_str(),
            &info.path,
            &Value::Object(payload.clone()),
        );
    }

    let api_req = ApiRequest::new(info.method.clone(), &info.target()).with_body(payload);

    catch_unwind(AssertUnwindSafe(|| state.router().dispatch(&api_req))).unwrap_or_else(
        |panic| {
            let message = panic_message(panic.as_ref());
            logger::log_error(&format!(
                "Handler panicked on {} {}: {message}",
                info.method, info.path
            ));
            ApiError::internal(message).into_response()
        },
    )
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown error".to_string())
}

fn log_access(
    state: &AppState,
    info: &RequestInfo,
    peer_addr: SocketAddr,
    response: &Response<Full<Bytes>>,
    started: Instant,
) {
    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        info.method.to_string(),
        info.path.clone(),
    );
    entry.query.clone_from(&info.query);
    entry.version = match info.version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2.0",
        _ => "1.1",
    }
    .to_string();
    entry.status = response.status().as_u16();
    entry.bytes_sent = response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);
    entry.referer.clone_from(&info.referer);
    entry.user_agent.clone_from(&info.user_agent);
    entry.elapsed = started.elapsed();

    logger::log_access(&entry, &state.config.logging.access_log_format);
}
