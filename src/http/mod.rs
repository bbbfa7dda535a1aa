//! HTTP protocol layer module
//!
//! Response builders and query string parsing, decoupled from the API handlers.

pub mod query;
pub mod response;

// Re-export commonly used types
pub use query::QueryParams;
pub use response::{build_json_response, build_preflight_response};
