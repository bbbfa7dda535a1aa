// Court handlers

use std::collections::BTreeSet;

use serde_json::json;

use super::{ApiError, ApiRequest, ApiResponse, ApiResult};
use crate::routing::RouteParams;
use crate::store::models::{available_slots, today};
use crate::store::{Court, Store};

/// All courts, optionally narrowed by `?type=` (case-insensitive)
pub fn list(store: &mut Store, req: &ApiRequest, _params: &RouteParams) -> ApiResult {
    let courts: Vec<&Court> = match req.query.get("type") {
        Some(wanted) => {
            let wanted = wanted.to_lowercase();
            store
                .courts()
                .iter()
                .filter(|c| c.court_type.to_lowercase() == wanted)
                .collect()
        }
        None => store.courts().iter().collect(),
    };
    Ok(ApiResponse::ok(json!({"success": true, "courts": courts})))
}

pub fn types(store: &mut Store, _req: &ApiRequest, _params: &RouteParams) -> ApiResult {
    let types: BTreeSet<&str> = store.courts().iter().map(|c| c.court_type.as_str()).collect();
    Ok(ApiResponse::ok(json!({"success": true, "types": types})))
}

pub fn locations(store: &mut Store, _req: &ApiRequest, _params: &RouteParams) -> ApiResult {
    let locations: BTreeSet<&str> = store.courts().iter().map(|c| c.location.as_str()).collect();
    Ok(ApiResponse::ok(json!({"success": true, "locations": locations})))
}

/// Search ignores its term and returns every court
pub fn search(store: &mut Store, _req: &ApiRequest, _params: &RouteParams) -> ApiResult {
    Ok(ApiResponse::ok(json!({"success": true, "courts": store.courts()})))
}

pub fn get(store: &mut Store, _req: &ApiRequest, params: &RouteParams) -> ApiResult {
    let court = params
        .id(0)
        .and_then(|id| store.court(id))
        .ok_or_else(|| ApiError::not_found("Court not found"))?;
    Ok(ApiResponse::ok(json!({"success": true, "court": court})))
}

/// Available slots for a court on `?date=` (default today).
///
/// Neither the court nor the date is checked.
pub fn slots(_store: &mut Store, req: &ApiRequest, params: &RouteParams) -> ApiResult {
    let court_id = params
        .id(0)
        .ok_or_else(|| ApiError::not_found("Court endpoint not found"))?;
    let date = req
        .query
        .get("date")
        .map_or_else(today, ToString::to_string);
    let slots = available_slots(court_id, &date);
    Ok(ApiResponse::ok(json!({"success": true, "slots": slots})))
}
