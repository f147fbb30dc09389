use rolesync_api_client::{
    api::roles::{RoleAssignment, RoleStrategyApi},
    HttpClient,
};
use rolesync_configuration::ListingConfiguration;

use super::{list_roles, ActionError};


/// Assigns a single SID to a role, then lists the roles of the same type.
pub async fn assign_role_and_list<HC>(
    api: &RoleStrategyApi<'_, HC>,
    assignment: &RoleAssignment,
    listing_configuration: &ListingConfiguration,
) -> Result<String, ActionError>
where
    HC: HttpClient,
{
    api.assign_role(assignment)
        .await
        .map_err(|error| ActionError::RoleAssignmentFailed {
            role_name: assignment.role_name.clone(),
            sid: assignment.sid.clone(),
            error,
        })?;

    list_roles(api, assignment.role_type, listing_configuration).await
}



#[cfg(test)]
mod test {
    use rolesync_test_util::prelude::*;

    use super::*;

    #[tokio::test]
    async fn assigns_then_lists() {
        let client = RecordingClient::new();
        let assignment = RoleAssignment::new(RoleType::Project, "build", "u1");

        let body = assign_role_and_list(
            &client.role_strategy(),
            &assignment,
            &ListingConfiguration::default(),
        )
        .await
        .unwrap();

        assert!(body.contains("build"));

        let requests = client.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].endpoint(), "assignRole");
        assert_eq!(requests[0].query("sid").as_deref(), Some("u1"));
        assert_eq!(requests[0].query("roleName").as_deref(), Some("build"));
        assert_eq!(requests[1].endpoint(), "getAllRoles");
        assert_eq!(requests[1].query("type").as_deref(), Some("projectRoles"));
    }
}
