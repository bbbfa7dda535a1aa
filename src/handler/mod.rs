//! Request handler module
//!
//! Turns hyper requests into API dispatches and JSON responses.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
