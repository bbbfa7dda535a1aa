// Domain records held by the store
// Users, courts and bookings are stored; slots are derived per request

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// First hour of the bookable day
pub const FIRST_SLOT_HOUR: u32 = 8;
/// Last hour a slot may start at
pub const LAST_SLOT_HOUR: u32 = 21;
/// Hours that are always reported as taken
pub const BOOKED_HOURS: [u32; 3] = [12, 15, 18];

/// Account role, inferred from the email at login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub role: Role,
}

/// Bookable court
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub court_id: u64,
    pub court_name: String,
    pub court_type: String,
    pub location: String,
    pub price_per_hour: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[allow(clippy::missing_const_for_fn)]
fn default_active() -> bool {
    true
}

/// Fields supplied when an admin creates a court
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourt {
    pub court_name: String,
    pub court_type: String,
    pub location: String,
    pub price_per_hour: f64,
    pub description: String,
    pub image_url: String,
}

/// Confirmed booking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    pub booking_id: u64,
    pub user_id: Value,
    pub slot_id: Value,
    pub court_id: Value,
    pub booking_date: String,
    pub amount_paid: Value,
    pub payment_status: Value,
    pub status: String,
    pub confirmation_message: String,
    /// Calendar day consulted by the "today" reports; bookings never set it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Fields supplied when a booking is created
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub user_id: Value,
    pub slot_id: Value,
    pub court_id: Value,
    pub amount_paid: Value,
    pub payment_status: Value,
}

/// One-hour window on a court, generated on demand
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub slot_id: String,
    pub court_id: u64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub is_booked: bool,
}

/// Generate every slot of the day for a court
pub fn daily_slots(court_id: u64, date: &str) -> Vec<Slot> {
    (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
        .map(|hour| Slot {
            slot_id: format!("{court_id}_{date}_{hour}"),
            court_id,
            date: date.to_string(),
            start_time: format!("{hour:02}:00"),
            end_time: format!("{:02}:00", hour + 1),
            is_booked: BOOKED_HOURS.contains(&hour),
        })
        .collect()
}

/// Slots that can still be booked
pub fn available_slots(court_id: u64, date: &str) -> Vec<Slot> {
    daily_slots(court_id, date)
        .into_iter()
        .filter(|slot| !slot.is_booked)
        .collect()
}

/// Current local date as `YYYY-MM-DD`
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Current local time as ISO-8601 with microseconds
pub fn timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_slots_cover_opening_hours() {
        let slots = daily_slots(1, "2024-01-15");
        assert_eq!(slots.len(), 14);
        assert_eq!(slots[0].slot_id, "1_2024-01-15_8");
        assert_eq!(slots[0].start_time, "08:00");
        assert_eq!(slots[0].end_time, "09:00");
        assert_eq!(slots[13].start_time, "21:00");
        assert_eq!(slots[13].end_time, "22:00");
        assert_eq!(slots.iter().filter(|s| s.is_booked).count(), 3);
    }

    #[test]
    fn test_available_slots_skip_booked_hours() {
        let slots = available_slots(2, "2024-01-15");
        assert_eq!(slots.len(), 11);
        assert!(slots.iter().all(|s| !s.is_booked));
        assert!(!slots.iter().any(|s| s.slot_id == "2_2024-01-15_12"));
        assert!(slots.iter().any(|s| s.slot_id == "2_2024-01-15_13"));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), "admin");
        assert_eq!(serde_json::to_value(Role::User).unwrap(), "user");
    }

    #[test]
    fn test_booking_hides_unset_date() {
        let booking = Booking {
            booking_id: 1,
            user_id: Value::from(1),
            slot_id: Value::from("1_2024-01-15_10"),
            court_id: Value::from(1),
            booking_date: timestamp(),
            amount_paid: Value::from(50.0),
            payment_status: Value::from("Confirmed"),
            status: "Confirmed".to_string(),
            confirmation_message: "Booking confirmed for slot 1_2024-01-15_10".to_string(),
            date: None,
        };
        let json = serde_json::to_value(&booking).unwrap();
        assert!(json.get("date").is_none());
        assert_eq!(json["booking_id"], 1);
    }
}
