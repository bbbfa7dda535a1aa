//! In-memory store module
//!
//! Owns the three process-lifetime collections (users, courts, bookings).
//! Identifiers are assigned as `count + 1` and records are only ever appended;
//! no uniqueness or referential checks are made.

pub mod models;
mod seed;

use serde_json::Value;

pub use models::{Booking, Court, NewBooking, NewCourt, Role, User};
pub use seed::SeedData;

/// Booking status assigned to every new booking
pub const CONFIRMED: &str = "Confirmed";

#[derive(Debug, Clone, Default)]
pub struct Store {
    users: Vec<User>,
    courts: Vec<Court>,
    bookings: Vec<Booking>,
}

impl Store {
    /// Store populated with the built-in seed records
    pub fn seeded() -> Self {
        Self::from_seed(SeedData::default())
    }

    pub fn from_seed(seed: SeedData) -> Self {
        Self {
            users: seed.users,
            courts: seed.courts,
            bookings: Vec::new(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn courts(&self) -> &[Court] {
        &self.courts
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn court(&self, court_id: u64) -> Option<&Court> {
        self.courts.iter().find(|c| c.court_id == court_id)
    }

    pub fn booking(&self, booking_id: u64) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.booking_id == booking_id)
    }

    /// Append a court and return the stored record
    pub fn add_court(&mut self, new: NewCourt) -> &Court {
        let court = Court {
            court_id: next_id(self.courts.len()),
            court_name: new.court_name,
            court_type: new.court_type,
            location: new.location,
            price_per_hour: new.price_per_hour,
            description: new.description,
            image_url: new.image_url,
            is_active: true,
        };
        self.courts.push(court);
        &self.courts[self.courts.len() - 1]
    }

    /// Append a confirmed booking and return the stored record
    pub fn add_booking(&mut self, new: NewBooking) -> &Booking {
        let booking = Booking {
            booking_id: next_id(self.bookings.len()),
            confirmation_message: format!("Booking confirmed for slot {}", value_text(&new.slot_id)),
            user_id: new.user_id,
            slot_id: new.slot_id,
            court_id: new.court_id,
            booking_date: models::timestamp(),
            amount_paid: new.amount_paid,
            payment_status: new.payment_status,
            status: CONFIRMED.to_string(),
            date: None,
        };
        self.bookings.push(booking);
        &self.bookings[self.bookings.len() - 1]
    }

    /// Bookings whose `date` equals the given day
    pub fn bookings_on(&self, day: &str) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.date.as_deref() == Some(day))
            .collect()
    }
}

fn next_id(count: usize) -> u64 {
    u64::try_from(count).unwrap_or(u64::MAX).saturating_add(1)
}

/// Render a JSON value the way it reads in a message: strings without quotes
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
