//! Beer Entity
//!
//! Wire JSON shape:
//! `{"id": string, "name": string, "countryISO": string, "created_at": RFC3339}`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog entry.
///
/// `id` and `created_at` are assigned by the repository on create and are
/// immutable afterwards. `country_iso` is stored verbatim, unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    pub id: String,
    pub name: String,
    #[serde(rename = "countryISO")]
    pub country_iso: String,
    pub created_at: DateTime<Utc>,
}
