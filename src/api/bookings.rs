// Booking handlers

use serde_json::{json, Value};

use super::{ApiError, ApiRequest, ApiResponse, ApiResult};
use crate::routing::RouteParams;
use crate::store::{NewBooking, Store, CONFIRMED};

/// Amount recorded when the client omits `amount_paid`
pub const DEFAULT_AMOUNT: f64 = 50.00;
/// Court recorded when the client omits `court_id`
pub const DEFAULT_COURT_ID: u64 = 1;

/// Every booking; there is no per-user filtering
pub fn list(store: &mut Store, _req: &ApiRequest, _params: &RouteParams) -> ApiResult {
    Ok(ApiResponse::ok(json!({"success": true, "bookings": store.bookings()})))
}

pub fn get(store: &mut Store, _req: &ApiRequest, params: &RouteParams) -> ApiResult {
    let booking = params
        .id(0)
        .and_then(|id| store.booking(id))
        .ok_or_else(|| ApiError::not_found("Booking not found"))?;
    Ok(ApiResponse::ok(json!({"success": true, "booking": booking})))
}

pub fn create(store: &mut Store, req: &ApiRequest, _params: &RouteParams) -> ApiResult {
    if !req.has_all(&["user_id", "slot_id"]) {
        return Err(ApiError::validation("Missing required fields"));
    }

    let optional = |field: &str, default: Value| req.body.get(field).cloned().unwrap_or(default);
    let booking = store.add_booking(NewBooking {
        user_id: req.body["user_id"].clone(),
        slot_id: req.body["slot_id"].clone(),
        court_id: optional("court_id", Value::from(DEFAULT_COURT_ID)),
        amount_paid: optional("amount_paid", Value::from(DEFAULT_AMOUNT)),
        payment_status: optional("payment_status", Value::from(CONFIRMED)),
    });

    Ok(ApiResponse::created(json!({
        "success": true,
        "booking": booking,
        "message": "Booking created successfully",
    })))
}

#[cfg(test)]
mod tests {
    use crate::api::tests::{get, post, router};
    use hyper::StatusCode;
    use serde_json::json;

    #[test]
    fn test_create_assigns_count_plus_one() {
        let mut r = router();
        for expected in 1..=3 {
            let before = r.store().bookings().len();
            let resp = post(
                &mut r,
                "/bookings",
                json!({"user_id": 1, "slot_id": format!("1_2024-01-15_{}", 8 + expected)}),
            );
            assert_eq!(resp.status, StatusCode::CREATED);
            assert_eq!(resp.body["booking"]["booking_id"], before + 1);
            assert_eq!(resp.body["booking"]["booking_id"], expected);
        }

        let listed = get(&mut r, "/bookings");
        let bookings = listed.body["bookings"].as_array().unwrap();
        assert_eq!(bookings.len(), 3);
        assert_eq!(bookings[2]["slot_id"], "1_2024-01-15_11");
    }

    #[test]
    fn test_create_defaults() {
        let resp = post(
            &mut router(),
            "/bookings",
            json!({"user_id": 7, "slot_id": "2_2024-01-15_9"}),
        );
        let booking = &resp.body["booking"];
        assert_eq!(booking["court_id"], 1);
        assert_eq!(booking["amount_paid"], 50.0);
        assert_eq!(booking["payment_status"], "Confirmed");
        assert_eq!(booking["status"], "Confirmed");
        assert_eq!(
            booking["confirmation_message"],
            "Booking confirmed for slot 2_2024-01-15_9"
        );
        assert!(booking["booking_date"].as_str().unwrap().contains('T'));
        assert!(booking.get("date").is_none());
        assert_eq!(resp.body["message"], "Booking created successfully");
    }

    #[test]
    fn test_create_keeps_client_values() {
        let resp = post(
            &mut router(),
            "/bookings",
            json!({
                "user_id": "u-1",
                "slot_id": "3_2024-01-15_10",
                "court_id": 3,
                "amount_paid": 60.0,
                "payment_status": "Pending"
            }),
        );
        let booking = &resp.body["booking"];
        assert_eq!(booking["user_id"], "u-1");
        assert_eq!(booking["court_id"], 3);
        assert_eq!(booking["amount_paid"], 60.0);
        assert_eq!(booking["payment_status"], "Pending");
        assert_eq!(booking["status"], "Confirmed");
    }

    #[test]
    fn test_create_missing_fields() {
        let mut r = router();
        let resp = post(&mut r, "/bookings", json!({"user_id": 1}));
        assert_eq!(resp.status, StatusCode::BAD_REQUEST);
        assert_eq!(resp.body["message"], "Missing required fields");
        assert!(r.store().bookings().is_empty());
    }

    #[test]
    fn test_get_booking() {
        let mut r = router();
        post(&mut r, "/bookings", json!({"user_id": 1, "slot_id": "1_2024-01-15_9"}));
        let resp = get(&mut r, "/bookings/1");
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body["booking"]["booking_id"], 1);

        let resp = get(&mut r, "/bookings/2");
        assert_eq!(resp.status, StatusCode::NOT_FOUND);
        assert_eq!(resp.body["message"], "Booking not found");
    }
}
