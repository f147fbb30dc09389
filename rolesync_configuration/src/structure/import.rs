use std::borrow::Cow;

use rolesync_core::RoleType;
use serde::Deserialize;

use crate::{traits::TryResolve, ImportConfigurationError};


pub(super) type UnresolvedImportConfiguration = ImportConfiguration;

/// Batch import behaviour.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ImportConfiguration {
    /// Role type every imported role is created as.
    pub role_type: RoleType,

    /// Value of the `overwrite` parameter sent when creating imported roles.
    pub overwrite: bool,

    pub role_sheet: String,

    pub user_sheet: String,

    pub role_sheet_header_rows: u32,

    pub user_sheet_header_rows: u32,
}

impl Default for ImportConfiguration {
    fn default() -> Self {
        Self {
            role_type: RoleType::Project,
            overwrite: false,
            role_sheet: "Sheet1".to_string(),
            user_sheet: "Sheet2".to_string(),
            role_sheet_header_rows: 1,
            user_sheet_header_rows: 0,
        }
    }
}

impl TryResolve for UnresolvedImportConfiguration {
    type Resolved = ImportConfiguration;
    type Error = ImportConfigurationError;

    fn try_resolve(self) -> Result<Self::Resolved, Self::Error> {
        if self.role_sheet.trim().is_empty() {
            return Err(ImportConfigurationError::EmptySheetName {
                kind: Cow::Borrowed("role_sheet"),
            });
        }

        if self.user_sheet.trim().is_empty() {
            return Err(ImportConfigurationError::EmptySheetName {
                kind: Cow::Borrowed("user_sheet"),
            });
        }

        Ok(self)
    }
}
