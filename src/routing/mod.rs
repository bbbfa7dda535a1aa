//! Routing module
//!
//! Declarative method + path-pattern route table used by the API dispatcher.

mod matcher;

pub use matcher::{split_path, RouteParams, RouteTable};
