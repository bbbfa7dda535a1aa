// API module entry
// Route table and dispatch for the court booking endpoints

mod admin;
mod auth;
mod bookings;
mod courts;
mod error;
mod types;

use hyper::Method;
use serde_json::json;

use crate::logger;
use crate::routing::{split_path, RouteParams, RouteTable};
use crate::store::Store;

pub use error::{ApiError, ApiResult};
pub use types::{parse_payload, ApiRequest, ApiResponse, Payload};

pub const API_NAME: &str = "SportzHub API Server";
pub const API_VERSION: &str = "1.0";

/// Signature shared by every endpoint handler
pub type Handler = fn(&mut Store, &ApiRequest, &RouteParams) -> ApiResult;

/// Request router owning the in-memory store
pub struct Router {
    routes: RouteTable<Handler>,
    store: Store,
}

impl Router {
    pub fn new(store: Store) -> Self {
        Self {
            routes: route_table(),
            store,
        }
    }

    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// Dispatch a request to its handler, turning errors into envelopes.
    /// Faults are logged before they are answered.
    pub fn dispatch(&mut self, req: &ApiRequest) -> ApiResponse {
        let segments = split_path(&req.path);
        let result = match self.routes.find(&req.method, &segments) {
            Some((handler, params)) => handler(&mut self.store, req, &params),
            None => Err(unmatched(req, &segments)),
        };
        result.unwrap_or_else(|err| {
            if let ApiError::Internal(ref cause) = err {
                logger::log_error(&format!("Error handling {} request: {cause}", req.method));
            }
            err.into_response()
        })
    }
}

/// The endpoint table, checked in order.
///
/// Auth actions and the admin dashboard/courts actions are chosen by their
/// second segment alone, so `{*}` lets trailing segments through.
fn route_table() -> RouteTable<Handler> {
    RouteTable::new()
        .route(Method::GET, "/", root as Handler)
        // Auth
        .route(Method::GET, "auth", auth::requires_action)
        .route(Method::GET, "auth/{action}/{*}", auth::get_not_supported)
        .route(Method::POST, "auth", auth::requires_action)
        .route(Method::POST, "auth/login/{*}", auth::login)
        .route(Method::POST, "auth/register/{*}", auth::register)
        .route(Method::POST, "auth/logout/{*}", auth::logout)
        // Courts
        .route(Method::GET, "courts", courts::list)
        .route(Method::GET, "courts/types", courts::types)
        .route(Method::GET, "courts/locations", courts::locations)
        .route(Method::GET, "courts/search", courts::search)
        .route(Method::GET, "courts/{id}", courts::get)
        .route(Method::GET, "courts/{id}/slots", courts::slots)
        // Bookings
        .route(Method::GET, "bookings", bookings::list)
        .route(Method::GET, "bookings/{id}", bookings::get)
        .route(Method::POST, "bookings", bookings::create)
        // Admin
        .route(Method::GET, "admin", admin::requires_action)
        .route(Method::GET, "admin/dashboard/{*}", admin::dashboard)
        .route(Method::GET, "admin/bookings", admin::bookings)
        .route(Method::GET, "admin/bookings/today", admin::todays_bookings)
        .route(Method::GET, "admin/courts/{*}", admin::courts)
        .route(Method::POST, "admin", admin::requires_action)
        .route(Method::POST, "admin/courts/{*}", admin::create_court)
}

fn root(_store: &mut Store, _req: &ApiRequest, _params: &RouteParams) -> ApiResult {
    Ok(ApiResponse::ok(json!({
        "success": true,
        "message": API_NAME,
        "version": API_VERSION,
    })))
}

/// 404 for a request no route accepted, worded after the area it fell into
fn unmatched(req: &ApiRequest, segments: &[&str]) -> ApiError {
    let area = segments.first().copied().unwrap_or_default();
    let action = segments.get(1).copied().unwrap_or_default();
    let path = req.display_path();

    let message = match (&req.method, area) {
        (&Method::GET | &Method::POST, "auth") => format!("Auth action not found: {action}"),
        (&Method::GET, "courts") if segments.len() == 2 => "Invalid court endpoint".to_string(),
        (&Method::GET, "courts") => "Court endpoint not found".to_string(),
        (&Method::GET, "bookings") => "Booking endpoint not found".to_string(),
        (&Method::GET, "admin") if segments.get(1) == Some(&"bookings") => {
            "Admin booking endpoint not found".to_string()
        }
        (&Method::GET, "admin") => format!("Admin action not found: {action}"),
        (&Method::GET, _) => format!("Endpoint not found: {path}"),
        (&Method::POST, "bookings") => "Invalid booking endpoint".to_string(),
        (&Method::POST, "admin") => format!("Admin POST action not found: {action}"),
        (method, _) => format!("{method} endpoint not found: {path}"),
    };
    ApiError::NotFound(message)
}
