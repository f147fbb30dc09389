use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;



/// Scopes the Role Strategy plugin partitions its roles into.
///
/// The wire names (e.g. `globalRoles`) are what the plugin expects
/// in the `type` query parameter of every role-strategy endpoint.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum RoleType {
    /// Roles that apply to the entire server.
    #[serde(rename = "globalRoles")]
    Global,

    /// Roles that apply to items whose name matches the role pattern.
    #[serde(rename = "projectRoles")]
    Project,

    /// Roles that apply to agents (nodes) whose name matches the role pattern.
    #[serde(rename = "slaveRoles")]
    Slave,
}

impl RoleType {
    pub const ALL: [RoleType; 3] = [RoleType::Global, RoleType::Project, RoleType::Slave];

    /// Attempts to parse a [`RoleType`] from its wire name
    /// (e.g. "projectRoles").
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "globalRoles" => Some(Self::Global),
            "projectRoles" => Some(Self::Project),
            "slaveRoles" => Some(Self::Slave),
            _ => None,
        }
    }

    /// Returns the wire name of the role type.
    pub fn name(&self) -> &'static str {
        match self {
            RoleType::Global => "globalRoles",
            RoleType::Project => "projectRoles",
            RoleType::Slave => "slaveRoles",
        }
    }

    /// Whether roles of this type carry a pattern.
    /// The plugin ignores patterns on global roles.
    pub fn uses_pattern(&self) -> bool {
        !matches!(self, RoleType::Global)
    }
}

impl Display for RoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}


#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "unknown role type \"{}\" (expected one of: globalRoles, projectRoles, slaveRoles)",
    .name
)]
pub struct InvalidRoleTypeError {
    pub name: String,
}

impl FromStr for RoleType {
    type Err = InvalidRoleTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| InvalidRoleTypeError {
            name: s.to_string(),
        })
    }
}
