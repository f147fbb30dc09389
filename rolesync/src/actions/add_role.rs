use rolesync_api_client::{
    api::roles::{RoleStrategyApi, RoleToCreate},
    HttpClient,
};
use rolesync_configuration::ListingConfiguration;

use super::{list_roles, ActionError};


/// Creates a single role, then lists the roles of the same type.
pub async fn add_role_and_list<HC>(
    api: &RoleStrategyApi<'_, HC>,
    role_to_create: &RoleToCreate,
    listing_configuration: &ListingConfiguration,
) -> Result<String, ActionError>
where
    HC: HttpClient,
{
    api.add_role(role_to_create)
        .await
        .map_err(|error| ActionError::RoleCreationFailed {
            role_name: role_to_create.role.name.clone(),
            error,
        })?;

    list_roles(api, role_to_create.role_type, listing_configuration).await
}
