// Seed data module
// Built-in users and courts, optionally replaced by a TOML seed file

use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::models::{Court, Role, User};

/// Failure to load a seed file
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse seed file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Initial contents of the store
///
/// A seed file may carry `[[users]]` and/or `[[courts]]` tables; a table that is
/// left out falls back to the built-in records.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    #[serde(default = "default_users")]
    pub users: Vec<User>,
    #[serde(default = "default_courts")]
    pub courts: Vec<Court>,
}

impl Default for SeedData {
    fn default() -> Self {
        Self {
            users: default_users(),
            courts: default_courts(),
        }
    }
}

impl SeedData {
    /// Load seed records from a TOML file
    pub fn load(path: &str) -> Result<Self, SeedError> {
        let content = fs::read_to_string(Path::new(path)).map_err(|source| SeedError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::parse(&content).map_err(|source| SeedError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

fn default_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            full_name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone_number: "1234567890".to_string(),
            role: Role::User,
        },
        User {
            id: 2,
            full_name: "Admin User".to_string(),
            email: "admin@test.com".to_string(),
            phone_number: "0987654321".to_string(),
            role: Role::Admin,
        },
    ]
}

fn default_courts() -> Vec<Court> {
    vec![
        Court {
            court_id: 1,
            court_name: "Futsal Court A".to_string(),
            court_type: "Futsal".to_string(),
            location: "Downtown Sports Complex".to_string(),
            price_per_hour: 50.00,
            description: "Professional futsal court with artificial grass".to_string(),
            image_url: "/images/futsal1.jpg".to_string(),
            is_active: true,
        },
        Court {
            court_id: 2,
            court_name: "Badminton Court 1".to_string(),
            court_type: "Badminton".to_string(),
            location: "City Sports Center".to_string(),
            price_per_hour: 30.00,
            description: "Indoor badminton court with wooden floor".to_string(),
            image_url: "/images/badminton1.jpg".to_string(),
            is_active: true,
        },
        Court {
            court_id: 3,
            court_name: "Padel Court Elite".to_string(),
            court_type: "Padel".to_string(),
            location: "Premium Sports Club".to_string(),
            price_per_hour: 60.00,
            description: "Premium padel court with glass walls".to_string(),
            image_url: "/images/padel1.jpg".to_string(),
            is_active: true,
        },
    ]
}
