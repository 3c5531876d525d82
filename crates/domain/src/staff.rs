use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// External staff identifier owned by the SSO provider.
///
/// Stafflink never generates these; local rows reference them as foreign
/// keys into the external identity source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StaffId(i64);

impl StaffId {
    /// Creates a staff identifier from an external id value.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying id value.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for StaffId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// A named reference object in the SSO profile payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    /// Display name of the referenced entity.
    #[serde(default)]
    pub name: String,
}

/// Staff attributes nested in the SSO profile payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffProfile {
    /// Employee number issued by the SSO provider.
    #[serde(default)]
    pub staff_id: String,
    /// Legal full name.
    #[serde(default)]
    pub full_name: String,
    /// Preferred display name, if the staff member set one.
    #[serde(default)]
    pub preferred_name: Option<String>,
    /// Staff classification, such as permanent or contractor.
    #[serde(default)]
    pub staff_type: NamedRef,
    /// Work email address.
    #[serde(default)]
    pub email: String,
    /// Account status in the identity source.
    #[serde(default)]
    pub status: String,
    /// Job title, if recorded.
    #[serde(default)]
    pub job_title: Option<String>,
    /// Who last updated the profile in the identity source.
    #[serde(default)]
    pub updated_by: Option<String>,
    /// When the profile was last updated in the identity source.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Full profile of an externally-owned user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalUser {
    /// External staff id.
    pub id: StaffId,
    /// Nested staff attributes.
    #[serde(default)]
    pub staff: StaffProfile,
    /// Department assignment, if any.
    #[serde(default)]
    pub department: Option<NamedRef>,
    /// Building assignment, if any.
    #[serde(default)]
    pub building: Option<NamedRef>,
    /// Employing company, if any.
    #[serde(default)]
    pub company: Option<NamedRef>,
}

/// Minimal projection used by name-picker listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalUserSummary {
    /// External staff id.
    pub id: StaffId,
    /// Legal full name.
    pub full_name: String,
}
