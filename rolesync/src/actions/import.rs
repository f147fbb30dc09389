use std::path::Path;

use rolesync_api_client::{
    api::roles::{RoleAssignment, RoleStrategyApi, RoleToCreate},
    HttpClient,
};
use rolesync_configuration::ImportConfiguration;
use rolesync_core::Role;
use rolesync_import::{load_roles, SpreadsheetLayout};
use tracing::{debug, info, warn};

use super::ActionError;


/// What a batch import did.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ImportSummary {
    pub roles_created: usize,

    pub users_assigned: usize,

    /// Empty user entries that were not sent to the server.
    pub empty_users_skipped: usize,
}


pub fn spreadsheet_layout(import_configuration: &ImportConfiguration) -> SpreadsheetLayout {
    SpreadsheetLayout {
        role_sheet: import_configuration.role_sheet.clone(),
        user_sheet: import_configuration.user_sheet.clone(),
        role_sheet_header_rows: import_configuration.role_sheet_header_rows,
        user_sheet_header_rows: import_configuration.user_sheet_header_rows,
    }
}


/// Creates every role in order, each immediately followed by its user assignments.
///
/// Stops at the first failed request. Roles created before the failure are left in place.
pub async fn import_roles<HC>(
    api: &RoleStrategyApi<'_, HC>,
    roles: &[Role],
    import_configuration: &ImportConfiguration,
) -> Result<ImportSummary, ActionError>
where
    HC: HttpClient,
{
    let mut summary = ImportSummary::default();

    for role in roles {
        if role.effective_pattern().is_some() && !import_configuration.role_type.uses_pattern() {
            warn!(
                role_name = role.name.as_str(),
                role_type = import_configuration.role_type.name(),
                "Role has a pattern, but this role type ignores patterns."
            );
        }

        debug!(
            role_name = role.name.as_str(),
            permissions = %role.joined_permissions(),
            "Creating role."
        );

        let role_to_create = RoleToCreate::from_role(
            import_configuration.role_type,
            role,
            import_configuration.overwrite,
        );

        api.add_role(&role_to_create)
            .await
            .map_err(|error| ActionError::RoleCreationFailed {
                role_name: role.name.clone(),
                error,
            })?;

        summary.roles_created += 1;


        let assignable_users = role.assignable_users().collect::<Vec<_>>();
        let skipped_users = role.users.len() - assignable_users.len();

        if skipped_users > 0 {
            debug!(
                role_name = role.name.as_str(),
                skipped_users,
                "Skipping empty user entries."
            );
        }

        summary.empty_users_skipped += skipped_users;

        for user in assignable_users {
            let assignment =
                RoleAssignment::new(import_configuration.role_type, role.name.as_str(), user);

            api.assign_role(&assignment)
                .await
                .map_err(|error| ActionError::RoleAssignmentFailed {
                    role_name: assignment.role_name.clone(),
                    sid: assignment.sid.clone(),
                    error,
                })?;

            summary.users_assigned += 1;
        }
    }

    Ok(summary)
}


/// Loads role definitions from `file_path` and imports them.
pub async fn import_roles_from_file<HC>(
    api: &RoleStrategyApi<'_, HC>,
    file_path: &Path,
    import_configuration: &ImportConfiguration,
) -> Result<ImportSummary, ActionError>
where
    HC: HttpClient,
{
    let display_path = dunce::canonicalize(file_path).unwrap_or_else(|_| file_path.to_path_buf());

    let roles = load_roles(file_path, &spreadsheet_layout(import_configuration))?;

    info!(
        file_path = %display_path.display(),
        roles = roles.len(),
        role_type = import_configuration.role_type.name(),
        "Loaded role definitions, importing."
    );

    let summary = import_roles(api, &roles, import_configuration).await?;

    info!(
        roles_created = summary.roles_created,
        users_assigned = summary.users_assigned,
        empty_users_skipped = summary.empty_users_skipped,
        "Import finished."
    );

    Ok(summary)
}
