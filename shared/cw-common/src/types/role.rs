//! Casework roles and their privilege order.
//!
//! The role set is closed and totally ordered by rank:
//! `DATA_PROTECTION_OFFICER(0) < READ_ONLY(1) < CASEWORKER(2) <
//! SPECIALIST_REVIEWER(3) < TEAM_LEAD(4) < ADMIN(5)`.
//!
//! Ordering comparisons on [`Role`] always go through [`Role::rank`], never
//! through variant declaration order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// A casework role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Data protection officer. Audits access, holds no casework privileges.
    DataProtectionOfficer,
    /// Read-only access to cases.
    ReadOnly,
    /// Caseworker handling assigned cases.
    Caseworker,
    /// Specialist reviewer for child-protection risk assessments.
    SpecialistReviewer,
    /// Team lead supervising caseworkers.
    TeamLead,
    /// System administrator.
    Admin,
}

impl Role {
    /// Returns the privilege rank. Higher means more privileged; no two roles
    /// share a rank.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::DataProtectionOfficer => 0,
            Self::ReadOnly => 1,
            Self::Caseworker => 2,
            Self::SpecialistReviewer => 3,
            Self::TeamLead => 4,
            Self::Admin => 5,
        }
    }

    /// Returns all roles in ascending rank order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::DataProtectionOfficer,
            Self::ReadOnly,
            Self::Caseworker,
            Self::SpecialistReviewer,
            Self::TeamLead,
            Self::Admin,
        ]
    }

    /// Canonical name, also used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DataProtectionOfficer => "DATA_PROTECTION_OFFICER",
            Self::ReadOnly => "READ_ONLY",
            Self::Caseworker => "CASEWORKER",
            Self::SpecialistReviewer => "SPECIALIST_REVIEWER",
            Self::TeamLead => "TEAM_LEAD",
            Self::Admin => "ADMIN",
        }
    }

    /// Name used by the legacy user directory. Accepted by [`FromStr`] so
    /// imported rosters parse without a mapping table.
    #[must_use]
    pub const fn legacy_name(self) -> &'static str {
        match self {
            Self::DataProtectionOfficer => "DATENSCHUTZBEAUFTRAGTER",
            Self::ReadOnly => "READ_ONLY",
            Self::Caseworker => "FACHKRAFT",
            Self::SpecialistReviewer => "IEFK",
            Self::TeamLead => "TEAMLEITUNG",
            Self::Admin => "ADMIN",
        }
    }

    /// Whether this role is [`Role::Admin`].
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether `self` ranks strictly above `other`.
    #[must_use]
    pub const fn outranks(self, other: Self) -> bool {
        self.rank() > other.rank()
    }
}

/// Returns the privilege rank of `role`.
#[must_use]
pub const fn rank(role: Role) -> u8 {
    role.rank()
}

impl PartialOrd for Role {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Role {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    /// Parses canonical or legacy names, ignoring case and surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|role| {
                role.as_str().eq_ignore_ascii_case(wanted)
                    || role.legacy_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| Error::UnknownRole(s.to_string()))
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse::<Self>().map_err(serde::de::Error::custom)
    }
}
