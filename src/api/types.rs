// API request/response types

use hyper::{Method, StatusCode};
use serde_json::{Map, Value};

use crate::http::QueryParams;

/// Decoded JSON request body; anything that is not a JSON object becomes empty
pub type Payload = Map<String, Value>;

/// Request as seen by the API handlers, independent of the transport
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: QueryParams,
    pub body: Payload,
}

impl ApiRequest {
    /// Build from a method and a request target such as `/courts?type=Padel`
    pub fn new(method: Method, target: &str) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (target, None),
        };
        Self {
            method,
            path: path.to_string(),
            query: QueryParams::parse(query),
            body: Payload::new(),
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: Payload) -> Self {
        self.body = body;
        self
    }

    /// Path as displayed in messages, always with a leading slash
    pub fn display_path(&self) -> String {
        format!("/{}", self.path.trim_matches('/'))
    }

    pub fn has_all(&self, fields: &[&str]) -> bool {
        fields.iter().all(|f| self.body.contains_key(*f))
    }

    /// Field value if present and not JSON null
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name).filter(|v| !v.is_null())
    }

    /// Field value unless it is absent or blank (see [`is_blank`])
    pub fn filled(&self, name: &str) -> Option<&Value> {
        self.body.get(name).filter(|v| !is_blank(v))
    }
}

/// `null`, `false`, zero, and empty strings, arrays or objects
#[allow(clippy::float_cmp)]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Decode a request body, downgrading malformed or non-object JSON to `{}`
pub fn parse_payload(bytes: &[u8]) -> Payload {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => map,
        _ => Payload::new(),
    }
}

/// Status plus JSON envelope
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    pub const fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    pub const fn ok(body: Value) -> Self {
        Self::new(StatusCode::OK, body)
    }

    pub const fn created(body: Value) -> Self {
        Self::new(StatusCode::CREATED, body)
    }
}
