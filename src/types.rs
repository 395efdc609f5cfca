//! Account and session records shared by storage, services, and views.
//!
//! DESIGN
//! ======
//! Field names serialize in camelCase so the persisted layout under the
//! `users` and `currentUser` storage keys stays readable by any earlier build
//! of the dashboard that wrote the same origin's storage.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Industry a registered company operates in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndustryType {
    Manufacturing,
    Chemical,
    Mining,
    #[serde(rename = "Power Plant")]
    PowerPlant,
    Warehouse,
    /// Also absorbs unrecognized stored values.
    #[default]
    #[serde(other)]
    Other,
}

impl IndustryType {
    /// Every selectable industry, in form display order.
    pub const ALL: [IndustryType; 6] = [
        IndustryType::Manufacturing,
        IndustryType::Chemical,
        IndustryType::Mining,
        IndustryType::PowerPlant,
        IndustryType::Warehouse,
        IndustryType::Other,
    ];

    /// Human-readable label, identical to the persisted value.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Manufacturing => "Manufacturing",
            Self::Chemical => "Chemical",
            Self::Mining => "Mining",
            Self::PowerPlant => "Power Plant",
            Self::Warehouse => "Warehouse",
            Self::Other => "Other",
        }
    }

    /// Parse a form `<select>` value. Empty or unknown input yields `None`.
    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == raw)
    }
}

impl fmt::Display for IndustryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Signup input before an identifier and creation time are assigned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
    pub full_name: String,
    pub company_name: String,
    pub registration_number: String,
    pub industry_type: IndustryType,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// A registered account as stored under the `users` key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    pub full_name: String,
    pub company_name: String,
    pub registration_number: String,
    pub industry_type: IndustryType,
    pub email: String,
    pub phone: String,
    pub password: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl User {
    /// Materialize a stored account from signup input.
    #[must_use]
    pub fn register(new_user: NewUser, created_at: OffsetDateTime) -> Self {
        Self {
            uid: generate_uid(),
            full_name: new_user.full_name,
            company_name: new_user.company_name,
            registration_number: new_user.registration_number,
            industry_type: new_user.industry_type,
            email: new_user.email,
            phone: new_user.phone,
            password: new_user.password,
            created_at,
        }
    }

    /// True when `email` and `password` both match exactly.
    #[must_use]
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }

    /// Session view of this account (everything but the password).
    #[must_use]
    pub fn to_session(&self) -> Session {
        Session {
            uid: self.uid.clone(),
            full_name: self.full_name.clone(),
            company_name: self.company_name.clone(),
            registration_number: self.registration_number.clone(),
            industry_type: self.industry_type,
            email: self.email.clone(),
            phone: self.phone.clone(),
            created_at: self.created_at,
        }
    }
}

/// The signed-in user as stored under the `currentUser` key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub uid: String,
    pub full_name: String,
    pub company_name: String,
    pub registration_number: String,
    pub industry_type: IndustryType,
    pub email: String,
    pub phone: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Account identifier: `user_` followed by a simple-format UUIDv4.
#[must_use]
pub fn generate_uid() -> String {
    format!("user_{}", Uuid::new_v4().simple())
}
