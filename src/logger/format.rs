//! Access log lines
//!
//! `logging.access_log_format` names one of the built-in layouts
//! (`combined`, `common`, `json`) or is a pattern with `$variable`
//! placeholders, e.g. `$request_method $request_uri $status`.

use chrono::{DateTime, Local};
use serde_json::json;
use std::time::Duration;

const CLF_TIME: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Access log layout selected by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat<'a> {
    Combined,
    Common,
    Json,
    Pattern(&'a str),
}

impl<'a> LogFormat<'a> {
    pub fn from_name(name: &'a str) -> Self {
        match name {
            "combined" => Self::Combined,
            "common" => Self::Common,
            "json" => Self::Json,
            pattern => Self::Pattern(pattern),
        }
    }
}

/// Everything recorded about one served request
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub client: String,
    pub received: DateTime<Local>,
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub version: String,
    pub status: u16,
    pub bytes_sent: usize,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
    pub elapsed: Duration,
}

impl AccessLogEntry {
    /// Entry stamped now, with a 200 status and nothing sent yet
    pub fn new(client: String, method: String, path: String) -> Self {
        Self {
            client,
            received: Local::now(),
            method,
            path,
            query: None,
            version: "1.1".to_string(),
            status: 200,
            bytes_sent: 0,
            referer: None,
            user_agent: None,
            elapsed: Duration::ZERO,
        }
    }

    pub fn render(&self, format: LogFormat<'_>) -> String {
        match format {
            LogFormat::Common => self.clf(),
            LogFormat::Combined => format!(
                "{} \"{}\" \"{}\"",
                self.clf(),
                or_dash(self.referer.as_deref()),
                or_dash(self.user_agent.as_deref()),
            ),
            LogFormat::Json => json!({
                "client": self.client,
                "time": self.received.to_rfc3339(),
                "method": self.method,
                "path": self.path,
                "query": self.query,
                "version": self.version,
                "status": self.status,
                "bytes_sent": self.bytes_sent,
                "referer": self.referer,
                "user_agent": self.user_agent,
                "elapsed_ms": self.elapsed.as_secs_f64() * 1000.0,
            })
            .to_string(),
            LogFormat::Pattern(pattern) => self.substitute(pattern),
        }
    }

    fn uri(&self) -> String {
        self.query
            .as_ref()
            .map_or_else(|| self.path.clone(), |q| format!("{}?{q}", self.path))
    }

    fn request_line(&self) -> String {
        format!("{} {} HTTP/{}", self.method, self.uri(), self.version)
    }

    fn clf(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {}",
            self.client,
            self.received.format(CLF_TIME),
            self.request_line(),
            self.status,
            self.bytes_sent,
        )
    }

    fn substitute(&self, pattern: &str) -> String {
        // `$request_time` and friends before the bare `$request`
        let vars = [
            ("$remote_addr", self.client.clone()),
            ("$time_local", self.received.format(CLF_TIME).to_string()),
            ("$time_iso8601", self.received.to_rfc3339()),
            ("$request_time", format!("{:.3}", self.elapsed.as_secs_f64())),
            ("$request_method", self.method.clone()),
            ("$request_uri", self.uri()),
            ("$request", self.request_line()),
            ("$status", self.status.to_string()),
            ("$body_bytes_sent", self.bytes_sent.to_string()),
            ("$http_referer", or_dash(self.referer.as_deref()).to_string()),
            ("$http_user_agent", or_dash(self.user_agent.as_deref()).to_string()),
        ];

        vars.iter()
            .fold(pattern.to_string(), |line, (name, value)| line.replace(name, value))
    }
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AccessLogEntry {
        let mut entry =
            AccessLogEntry::new("10.0.0.7".to_string(), "GET".to_string(), "/courts".to_string());
        entry.query = Some("type=Futsal".to_string());
        entry.bytes_sent = 512;
        entry.referer = Some("http://localhost:5173/".to_string());
        entry.user_agent = Some("okhttp/4.12".to_string());
        entry.elapsed = Duration::from_millis(12);
        entry
    }

    #[test]
    fn test_format_names() {
        assert_eq!(LogFormat::from_name("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_name("$status"), LogFormat::Pattern("$status"));
    }

    #[test]
    fn test_combined_line() {
        let line = sample().render(LogFormat::Combined);
        assert!(line.starts_with("10.0.0.7 - - ["));
        assert!(line.contains("\"GET /courts?type=Futsal HTTP/1.1\" 200 512"));
        assert!(line.ends_with("\"http://localhost:5173/\" \"okhttp/4.12\""));
    }

    #[test]
    fn test_common_line_has_no_agent() {
        let line = sample().render(LogFormat::Common);
        assert!(line.ends_with("200 512"));
        assert!(!line.contains("okhttp"));
    }

    #[test]
    fn test_missing_headers_become_dashes() {
        let mut entry = sample();
        entry.referer = None;
        entry.user_agent = None;
        assert!(entry.render(LogFormat::Combined).ends_with("\"-\" \"-\""));
    }

    #[test]
    fn test_json_line() {
        let line = sample().render(LogFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["method"], "GET");
        assert_eq!(value["status"], 200);
        assert_eq!(value["query"], "type=Futsal");
        assert_eq!(value["bytes_sent"], 512);
    }

    #[test]
    fn test_pattern_line() {
        let line = sample().render(LogFormat::Pattern("$request_method $request_uri -> $status in $request_time"));
        assert_eq!(line, "GET /courts?type=Futsal -> 200 in 0.012");
    }
}
