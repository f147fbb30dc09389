use rolesync_core::RoleType;
use serde::Deserialize;

use crate::traits::Resolve;


pub(super) type UnresolvedListingConfiguration = ListingConfiguration;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ListingConfiguration {
    /// Role types the `getAllRoles` endpoint is documented to support.
    /// Listing any other type still happens, but logs a warning.
    pub documented_role_types: Vec<RoleType>,
}

impl Default for ListingConfiguration {
    fn default() -> Self {
        Self {
            documented_role_types: vec![RoleType::Global],
        }
    }
}

impl ListingConfiguration {
    pub fn is_documented(&self, role_type: RoleType) -> bool {
        self.documented_role_types.contains(&role_type)
    }
}

impl Resolve for UnresolvedListingConfiguration {
    type Resolved = ListingConfiguration;

    fn resolve(self) -> Self::Resolved {
        self
    }
}
