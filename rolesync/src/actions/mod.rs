//! Actions the `rolesync` binary can perform against the Role Strategy plugin.
//!
//! Every action is generic over [`HttpClient`], so it runs the same
//! against a live Jenkins instance and against a recording stub.

use std::path::PathBuf;

use rolesync_api_client::{
    api::roles::{RoleAssignment, RoleStrategyApi, RoleToCreate},
    ClientError,
    HttpClient,
};
use rolesync_configuration::Configuration;
use rolesync_core::RoleType;
use rolesync_import::ImportError;
use thiserror::Error;

mod add_role;
mod assign_role;
mod import;
mod listing;

pub use add_role::add_role_and_list;
pub use assign_role::assign_role_and_list;
pub use import::{import_roles, import_roles_from_file, spreadsheet_layout, ImportSummary};
pub use listing::{list_roles, render_role_listing};



#[derive(Debug, Error)]
pub enum ActionError {
    #[error("failed to list roles of type {role_type}")]
    ListingFailed {
        role_type: RoleType,

        #[source]
        error: ClientError,
    },

    #[error("failed to create role \"{role_name}\"")]
    RoleCreationFailed {
        role_name: String,

        #[source]
        error: ClientError,
    },

    #[error("failed to assign \"{sid}\" to role \"{role_name}\"")]
    RoleAssignmentFailed {
        role_name: String,

        sid: String,

        #[source]
        error: ClientError,
    },

    #[error("failed to load role definitions")]
    LoadingFailed {
        #[from]
        error: ImportError,
    },
}

impl ActionError {
    /// The underlying HTTP error, if this action failed while talking to Jenkins.
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            ActionError::ListingFailed { error, .. }
            | ActionError::RoleCreationFailed { error, .. }
            | ActionError::RoleAssignmentFailed { error, .. } => Some(error),
            ActionError::LoadingFailed { .. } => None,
        }
    }
}



/// A fully-specified action, built from command-line arguments.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ActionRequest {
    GetAllRoles { role_type: RoleType },

    AddRole { role: RoleToCreate },

    AssignRole { assignment: RoleAssignment },

    Import { file_path: PathBuf },
}


#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ActionOutcome {
    /// Raw `getAllRoles` response body.
    RoleListing { role_type: RoleType, body: String },

    Imported(ImportSummary),
}


pub async fn run_action<HC>(
    api: &RoleStrategyApi<'_, HC>,
    request: ActionRequest,
    configuration: &Configuration,
) -> Result<ActionOutcome, ActionError>
where
    HC: HttpClient,
{
    match request {
        ActionRequest::GetAllRoles { role_type } => {
            let body = list_roles(api, role_type, &configuration.listing).await?;

            Ok(ActionOutcome::RoleListing { role_type, body })
        }
        ActionRequest::AddRole { role } => {
            let role_type = role.role_type;
            let body = add_role_and_list(api, &role, &configuration.listing).await?;

            Ok(ActionOutcome::RoleListing { role_type, body })
        }
        ActionRequest::AssignRole { assignment } => {
            let role_type = assignment.role_type;
            let body = assign_role_and_list(api, &assignment, &configuration.listing).await?;

            Ok(ActionOutcome::RoleListing { role_type, body })
        }
        ActionRequest::Import { file_path } => {
            let summary = import_roles_from_file(api, &file_path, &configuration.import).await?;

            Ok(ActionOutcome::Imported(summary))
        }
    }
}
