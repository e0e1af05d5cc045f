//! User records and the role/status vocabulary shared by every store backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Roles are a strict capability ladder; comparisons never rely on ordering,
/// only on explicit matches in the authorization rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Regular account with access to its own record only.
    #[default]
    User,
    /// Can manage regular users and run listing queries.
    Manager,
    /// Full administrative control, including deletes and role changes.
    SuperAdmin,
}

impl Role {
    /// Uppercase snake case because stored records and API payloads use that convention.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Manager => "MANAGER",
            Self::SuperAdmin => "SUPER_ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = super::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USER" => Ok(Self::User),
            "MANAGER" => Ok(Self::Manager),
            "SUPER_ADMIN" | "SUPERADMIN" => Ok(Self::SuperAdmin),
            _ => Err(super::Error::Validation(format!("unknown role: '{s}'"))),
        }
    }
}

/// Account lifecycle states. Transitions go through [`Status::can_transition`];
/// direct field assignment is deliberately absent from the service layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Freshly registered, email not yet confirmed.
    #[default]
    PendingVerification,
    /// Normal operating state.
    Active,
    /// Administratively parked; reinstatable.
    Inactive,
    /// Administratively blocked; reinstatable.
    Suspended,
}

impl Status {
    /// Uppercase snake case because stored records and API payloads use that convention.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PendingVerification => "PENDING_VERIFICATION",
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Suspended => "SUSPENDED",
        }
    }

    /// The explicit transition table: verification activates a pending account,
    /// administrative transitions park or block an active one, and both parked
    /// states are reinstatable. Same-state writes are accepted as no-ops.
    #[must_use]
    pub fn can_transition(self, to: Self) -> bool {
        if self == to {
            return true;
        }
        matches!(
            (self, to),
            (Self::PendingVerification, Self::Active)
                | (Self::Active, Self::Inactive | Self::Suspended)
                | (Self::Inactive | Self::Suspended, Self::Active)
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = super::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING_VERIFICATION" => Ok(Self::PendingVerification),
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            "SUSPENDED" => Ok(Self::Suspended),
            _ => Err(super::Error::Validation(format!("unknown status: '{s}'"))),
        }
    }
}

/// One user record. IDs are ULIDs so records sort by creation time without a
/// separate sequence column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Ulid,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Registration entry point: new accounts always start as unverified
    /// regular users; elevation happens through an update by a super admin.
    #[must_use]
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Ulid::new(),
            email: email.into(),
            name: name.into(),
            role: Role::User,
            status: Status::PendingVerification,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Field-wise patch for updates — absent fields are left untouched, so callers
/// never have to read-modify-write whole records.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
    pub status: Option<Status>,
}

impl UserUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }
}
