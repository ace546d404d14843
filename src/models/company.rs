//! Company record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The company the engine operates for. Exactly one record in scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Store-assigned record identifier.
    pub id: String,
    /// Company display name.
    pub name: String,
    /// Short code (2-4 characters) used in login identifiers.
    pub code: String,
    /// URL of the uploaded company logo.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Count of admin and HR officer accounts; mirrors the
    /// privileged-account invariant on employees.
    pub admin_count: u32,
    /// Store-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating the company record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCompany {
    /// Company display name.
    pub name: String,
    /// Short code (2-4 characters) used in login identifiers.
    pub code: String,
    /// URL of the uploaded company logo.
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Fields a company update may change. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyPatch {
    /// New logo URL, if changing.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// New privileged-account count, if changing.
    #[serde(default)]
    pub admin_count: Option<u32>,
}
