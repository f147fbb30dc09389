use rolesync_api_client::{api::roles::RoleStrategyApi, HttpClient};
use rolesync_configuration::ListingConfiguration;
use rolesync_core::RoleType;
use tracing::warn;

use super::ActionError;


/// Fetches the roles of `role_type`, returning the response body as-is.
///
/// Types outside [`ListingConfiguration::documented_role_types`] are still
/// requested, but a warning is logged first.
pub async fn list_roles<HC>(
    api: &RoleStrategyApi<'_, HC>,
    role_type: RoleType,
    listing_configuration: &ListingConfiguration,
) -> Result<String, ActionError>
where
    HC: HttpClient,
{
    if !listing_configuration.is_documented(role_type) {
        warn!(
            role_type = role_type.name(),
            "getAllRoles is not documented for this role type, the response may be incomplete."
        );
    }

    api.get_all_roles(role_type)
        .await
        .map_err(|error| ActionError::ListingFailed { role_type, error })
}


/// Pretty-prints a listing body if it is JSON, otherwise returns it unchanged.
pub fn render_role_listing(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| body.to_string())
}
