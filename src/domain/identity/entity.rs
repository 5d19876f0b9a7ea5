//! Identity and payload entities

use serde::{Deserialize, Serialize};

/// Authorization role of a principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Staff,
    Mentor,
    Sponsor,
    Attendee,
}

impl Role {
    /// Check whether the role grants administrative access
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
            Self::Mentor => "mentor",
            Self::Sponsor => "sponsor",
            Self::Attendee => "attendee",
        };
        write!(f, "{}", name)
    }
}

/// A principal and its authorization tier.
///
/// Created by the caller (from an authenticated session or an admin
/// action) and immutable once handed to the codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// User identifier
    pub user: String,
    /// Enumerated role
    pub role: Role,
    /// Numeric authorization tier
    pub access_level: i64,
}

impl Identity {
    pub fn new(user: impl Into<String>, role: Role, access_level: i64) -> Self {
        Self {
            user: user.into(),
            role,
            access_level,
        }
    }
}

/// The cipher's plaintext: an [`Identity`] plus an absolute expiration
/// timestamp in whole seconds since the Unix epoch.
///
/// The encoder always sets `exp` before encryption. A decoded payload
/// with `exp` absent is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub user: String,
    pub role: Role,
    pub access_level: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Payload {
    /// Attach an expiration timestamp to an identity
    pub fn from_identity(identity: &Identity, exp: i64) -> Self {
        Self {
            user: identity.user.clone(),
            role: identity.role,
            access_level: identity.access_level,
            exp: Some(exp),
        }
    }

    /// Strip the expiration and return the identity the payload carries
    pub fn into_identity(self) -> Identity {
        Identity {
            user: self.user,
            role: self.role,
            access_level: self.access_level,
        }
    }
}
