use serde::{Deserialize, Serialize};
use std::fmt;

use crate::paths::*;

/// A user's access category. Drives both routing and authorization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Driver,
    Citizen,
}

/// All roles in display order.
pub const ALL_ROLES: &[Role] = &[Role::Citizen, Role::Driver, Role::Admin];

impl Role {
    /// Lowercase key, identical to the profile document's `userType` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Driver => "driver",
            Role::Citizen => "citizen",
        }
    }

    /// Human-readable name for display in UI.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Driver => "Driver",
            Role::Citizen => "Citizen",
        }
    }

    /// Parse a `userType` value. Matching is exact: `"Driver"` is not a role.
    pub fn parse_role(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "driver" => Some(Role::Driver),
            "citizen" => Some(Role::Citizen),
            _ => None,
        }
    }

    /// EcoLearn dashboard for this role.
    pub fn ecolearn_path(&self) -> &'static str {
        match self {
            Role::Driver => ECOLEARN_DRIVER_PATH,
            Role::Citizen => ECOLEARN_CITIZEN_PATH,
            Role::Admin => ECOLEARN_ADMIN_PATH,
        }
    }

    /// Primary portal a signed-in user of this role lands on.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Citizen => CITIZEN_DASHBOARD_PATH,
            Role::Driver => DRIVER_DASHBOARD_PATH,
            Role::Admin => ADMIN_PORTAL_PATH,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// EcoLearn dashboard for a raw role string.
///
/// Values outside the enumeration land on the EcoLearn landing page instead
/// of failing, so a role added upstream still routes somewhere sensible.
pub fn ecolearn_path_for(role: &str) -> &'static str {
    Role::parse_role(role)
        .map(|r| r.ecolearn_path())
        .unwrap_or(ECOLEARN_PATH)
}

/// The signed-in identity reported by the auth provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub uid: String,
    pub email: String,
    pub display_name: String,
}

/// Profile document loaded by the auth provider for a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    /// Raw `userType` value; see [`UserProfile::role`].
    pub user_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
    #[serde(
        default,
        rename = "photoURL",
        skip_serializing_if = "Option::is_none"
    )]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    /// Driver accounts are created by an admin rather than through sign-up.
    #[serde(default)]
    pub is_driver_account: bool,
}

impl UserProfile {
    /// Minimal profile for the given role.
    pub fn new(uid: impl Into<String>, email: impl Into<String>, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
            display_name: display_name.into(),
            user_type: role.as_str().to_string(),
            driver_id: None,
            photo_url: None,
            points: None,
            rank: None,
            is_driver_account: false,
        }
    }

    pub fn role(&self) -> Option<Role> {
        Role::parse_role(&self.user_type)
    }

    pub fn has_role(&self, required: Role) -> bool {
        self.role() == Some(required)
    }
}
