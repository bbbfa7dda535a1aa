// Admin handlers
//
// The "today" reports filter on the booking `date` field, which bookings never
// carry, so they always come back empty.

use serde_json::{json, Value};

use super::{ApiError, ApiRequest, ApiResponse, ApiResult};
use crate::routing::RouteParams;
use crate::store::models::today;
use crate::store::{NewCourt, Store};

const COURT_FIELDS: [&str; 4] = ["court_name", "court_type", "location", "price_per_hour"];

pub fn requires_action(_store: &mut Store, _req: &ApiRequest, _params: &RouteParams) -> ApiResult {
    Err(ApiError::validation("Admin endpoint requires action"))
}

pub fn dashboard(store: &mut Store, _req: &ApiRequest, _params: &RouteParams) -> ApiResult {
    let total_revenue = store.bookings().iter().try_fold(Revenue::Whole(0), |total, b| {
        total.plus(&b.amount_paid).ok_or_else(|| {
            ApiError::internal(format!(
                "amount_paid of booking {} is not a number: {}",
                b.booking_id, b.amount_paid
            ))
        })
    })?;

    Ok(ApiResponse::ok(json!({
        "success": true,
        "stats": {
            "total_bookings": store.bookings().len(),
            "total_revenue": total_revenue.into_value(),
            "active_courts": store.courts().len(),
            "todays_bookings": store.bookings_on(&today()).len(),
        },
    })))
}

pub fn bookings(store: &mut Store, _req: &ApiRequest, _params: &RouteParams) -> ApiResult {
    Ok(ApiResponse::ok(json!({"success": true, "bookings": store.bookings()})))
}

pub fn todays_bookings(store: &mut Store, _req: &ApiRequest, _params: &RouteParams) -> ApiResult {
    Ok(ApiResponse::ok(json!({
        "success": true,
        "bookings": store.bookings_on(&today()),
    })))
}

pub fn courts(store: &mut Store, _req: &ApiRequest, _params: &RouteParams) -> ApiResult {
    Ok(ApiResponse::ok(json!({"success": true, "courts": store.courts()})))
}

pub fn create_court(store: &mut Store, req: &ApiRequest, _params: &RouteParams) -> ApiResult {
    if !req.has_all(&COURT_FIELDS) {
        return Err(ApiError::validation("Missing required fields"));
    }

    let new = NewCourt {
        court_name: required_text(req, "court_name")?,
        court_type: required_text(req, "court_type")?,
        location: required_text(req, "location")?,
        price_per_hour: coerce_float(&req.body["price_per_hour"])?,
        description: optional_text(req, "description")?,
        image_url: optional_text(req, "image_url")?,
    };
    let court = store.add_court(new);

    Ok(ApiResponse::created(json!({
        "success": true,
        "court": court,
        "message": "Court created successfully",
    })))
}

fn required_text(req: &ApiRequest, field: &str) -> Result<String, ApiError> {
    match &req.body[field] {
        Value::String(s) => Ok(s.clone()),
        _ => Err(ApiError::validation(format!("{field} must be a string"))),
    }
}

/// Missing or null text defaults to the empty string
fn optional_text(req: &ApiRequest, field: &str) -> Result<String, ApiError> {
    match req.field(field) {
        None => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ApiError::validation(format!("{field} must be a string"))),
    }
}

/// Revenue total; stays integral until a fractional amount is added
#[derive(Debug, Clone, Copy, PartialEq)]
enum Revenue {
    Whole(i64),
    Fractional(f64),
}

impl Revenue {
    /// Booleans count as 0 or 1; `None` for anything that is not a number
    #[allow(clippy::cast_precision_loss)]
    fn plus(self, amount: &Value) -> Option<Self> {
        let whole = match amount {
            Value::Bool(b) => Some(i64::from(*b)),
            Value::Number(n) => n.as_i64(),
            _ => None,
        };
        match (self, whole) {
            (Self::Whole(total), Some(n)) => Some(
                total
                    .checked_add(n)
                    .map_or_else(|| Self::Fractional(total as f64 + n as f64), Self::Whole),
            ),
            _ => Some(Self::Fractional(self.as_f64() + number(amount)?)),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    const fn as_f64(self) -> f64 {
        match self {
            Self::Whole(n) => n as f64,
            Self::Fractional(f) => f,
        }
    }

    fn into_value(self) -> Value {
        match self {
            Self::Whole(n) => Value::from(n),
            Self::Fractional(f) => Value::from(f),
        }
    }
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Numbers, numeric strings and booleans convert; anything else is a fault.
/// Infinities and NaN have no JSON form and are refused too.
fn coerce_float(value: &Value) -> Result<f64, ApiError> {
    let parsed = match value {
        Value::String(s) => parse_decimal(s),
        other => number(other),
    };
    parsed
        .filter(|f| f.is_finite())
        .ok_or_else(|| ApiError::internal(format!("price_per_hour is not a number: {value}")))
}

/// Decimal text with optional surrounding whitespace and `_` between digits
fn parse_decimal(text: &str) -> Option<f64> {
    let text = text.trim();
    let bytes = text.as_bytes();
    let separators_ok = bytes.iter().enumerate().filter(|(_, b)| **b == b'_').all(|(i, _)| {
        let before = i.checked_sub(1).and_then(|j| bytes.get(j));
        before.is_some_and(u8::is_ascii_digit) && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
    });
    if !separators_ok {
        return None;
    }
    text.replace('_', "").parse().ok()
}
