use std::fmt;

use itertools::Itertools;
use serde::{
    de::{IgnoredAny, MapAccess, SeqAccess, Visitor},
    Deserialize,
    Deserializer,
    Serialize,
};
use thiserror::Error;



/// A single role definition, as read from an import file.
///
/// A role has no identity beyond its name: the remote server
/// is the source of truth for conflicts such as duplicate names.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct Role {
    pub name: String,

    /// Permission identifiers, usually fully-qualified class names
    /// such as `hudson.model.Item.Build`. Unknown identifiers are
    /// silently skipped by the server.
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub permissions: Vec<String>,

    /// Regular expression restricting which items (or agents) the role applies to.
    /// Not used for global roles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Security identifiers (usually user names) to assign to this role.
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub users: Vec<String>,
}


/// Treats an explicit `null` list the same as a missing one.
fn deserialize_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}


#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidRoleError {
    #[error("role name is empty")]
    EmptyName,
}


impl Role {
    pub fn new<N>(name: N) -> Self
    where
        N: Into<String>,
    {
        Self {
            name: name.into(),
            permissions: Vec::new(),
            pattern: None,
            users: Vec::new(),
        }
    }

    /// Returns the permission identifiers joined with commas,
    /// which is the format the `permissionIds` parameter expects.
    pub fn joined_permissions(&self) -> String {
        self.permissions.iter().join(",")
    }

    /// Returns the pattern, but only if it is non-empty.
    pub fn effective_pattern(&self) -> Option<&str> {
        self.pattern
            .as_deref()
            .filter(|pattern| !pattern.is_empty())
    }

    /// Returns an iterator over the non-empty user identifiers of this role.
    pub fn assignable_users(&self) -> impl Iterator<Item = &str> {
        self.users
            .iter()
            .map(String::as_str)
            .filter(|user| !user.is_empty())
    }

    pub fn validate(&self) -> Result<(), InvalidRoleError> {
        if self.name.trim().is_empty() {
            return Err(InvalidRoleError::EmptyName);
        }

        Ok(())
    }
}



/// Top-level shape of a structured (JSON) role document.
///
/// Both `{"roles": [...]}` and a bare `[...]` are accepted. The shape is picked
/// from the first token, so errors inside a role are reported as-is
/// (including the missing field and its position).
#[derive(PartialEq, Eq, Debug)]
pub enum RoleDocument {
    Wrapped { roles: Vec<Role> },
    Bare(Vec<Role>),
}

impl RoleDocument {
    pub fn into_roles(self) -> Vec<Role> {
        match self {
            RoleDocument::Wrapped { roles } => roles,
            RoleDocument::Bare(roles) => roles,
        }
    }
}

impl<'de> Deserialize<'de> for RoleDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RoleDocumentVisitor)
    }
}


struct RoleDocumentVisitor;

impl<'de> Visitor<'de> for RoleDocumentVisitor {
    type Value = RoleDocument;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a list of roles or an object with a \"roles\" list")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut roles = Vec::with_capacity(seq.size_hint().unwrap_or(0));

        while let Some(role) = seq.next_element::<Role>()? {
            roles.push(role);
        }

        Ok(RoleDocument::Bare(roles))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut roles: Option<Vec<Role>> = None;

        while let Some(key) = map.next_key::<String>()? {
            if key == "roles" {
                if roles.is_some() {
                    return Err(serde::de::Error::duplicate_field("roles"));
                }

                roles = Some(map.next_value()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        let roles = roles.ok_or_else(|| serde::de::Error::missing_field("roles"))?;

        Ok(RoleDocument::Wrapped { roles })
    }
}
