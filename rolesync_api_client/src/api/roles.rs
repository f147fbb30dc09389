use reqwest::StatusCode;
use rolesync_core::{Role, RoleType};
use tracing::info;

use crate::{
    errors::ClientResult,
    macros::unexpected_status_code,
    request::{QueryParameters, RequestBuilder},
    HttpClient,
};


const GET_ALL_ROLES_ENDPOINT: &str = "/role-strategy/strategy/getAllRoles";
const ADD_ROLE_ENDPOINT: &str = "/role-strategy/strategy/addRole";
const ASSIGN_ROLE_ENDPOINT: &str = "/role-strategy/strategy/assignRole";



/// A role to create (or update, see [`overwrite`][Self::overwrite]).
///
/// Only the name, permissions and pattern of [`role`][Self::role] are sent.
/// Users are assigned separately.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RoleToCreate {
    pub role_type: RoleType,

    pub role: Role,

    /// Whether an existing role with the same name should be replaced.
    /// The plugin documents this parameter only loosely.
    pub overwrite: bool,
}

impl RoleToCreate {
    pub fn new(role_type: RoleType, role: Role, overwrite: bool) -> Self {
        Self {
            role_type,
            role,
            overwrite,
        }
    }

    pub fn from_role(role_type: RoleType, role: &Role, overwrite: bool) -> Self {
        Self::new(role_type, role.clone(), overwrite)
    }

    /// An empty pattern is omitted, which makes the plugin default to `.*`.
    pub(crate) fn query_parameters(&self) -> QueryParameters {
        let mut parameters: QueryParameters = vec![
            ("type", self.role_type.name().to_string()),
            ("roleName", self.role.name.clone()),
        ];

        if let Some(pattern) = self.role.effective_pattern() {
            parameters.push(("pattern", pattern.to_string()));
        }

        parameters.push(("permissionIds", self.role.joined_permissions()));
        parameters.push(("overwrite", self.overwrite.to_string()));

        parameters
    }
}



/// Assignment of a single SID to an existing role.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RoleAssignment {
    pub role_type: RoleType,

    pub role_name: String,

    pub sid: String,
}

impl RoleAssignment {
    pub fn new<R, S>(role_type: RoleType, role_name: R, sid: S) -> Self
    where
        R: Into<String>,
        S: Into<String>,
    {
        Self {
            role_type,
            role_name: role_name.into(),
            sid: sid.into(),
        }
    }

    pub(crate) fn query_parameters(&self) -> QueryParameters {
        vec![
            ("type", self.role_type.name().to_string()),
            ("roleName", self.role_name.clone()),
            ("sid", self.sid.clone()),
        ]
    }
}



async fn get_all_roles<C>(client: &C, role_type: RoleType) -> ClientResult<String>
where
    C: HttpClient,
{
    let response = RequestBuilder::get(client)
        .endpoint_url(GET_ALL_ROLES_ENDPOINT)
        .query_parameter("type", role_type.name())
        .send()
        .await?;

    if response.status() == StatusCode::OK {
        Ok(response.text())
    } else {
        unexpected_status_code!(response)
    }
}


async fn add_role<C>(client: &C, role_to_create: &RoleToCreate) -> ClientResult<()>
where
    C: HttpClient,
{
    let response = RequestBuilder::post(client)
        .endpoint_url(ADD_ROLE_ENDPOINT)
        .query_parameters(role_to_create.query_parameters())
        .send()
        .await?;

    if response.status() == StatusCode::OK {
        info!(
            role_type = role_to_create.role_type.name(),
            role_name = role_to_create.role.name.as_str(),
            "Added role."
        );

        Ok(())
    } else {
        unexpected_status_code!(response)
    }
}


async fn assign_role<C>(client: &C, assignment: &RoleAssignment) -> ClientResult<()>
where
    C: HttpClient,
{
    let response = RequestBuilder::post(client)
        .endpoint_url(ASSIGN_ROLE_ENDPOINT)
        .query_parameters(assignment.query_parameters())
        .send()
        .await?;

    if response.status() == StatusCode::OK {
        info!(
            role_type = assignment.role_type.name(),
            role_name = assignment.role_name.as_str(),
            sid = assignment.sid.as_str(),
            "Assigned SID to role."
        );

        Ok(())
    } else {
        unexpected_status_code!(response)
    }
}



pub struct RoleStrategyApi<'c, HC>
where
    HC: HttpClient,
{
    client: &'c HC,
}

impl<'c, HC> RoleStrategyApi<'c, HC>
where
    HC: HttpClient,
{
    pub fn new(client: &'c HC) -> Self {
        Self { client }
    }

    /// Lists all roles of the given type and returns the raw response body.
    ///
    /// As of Role Strategy 2.6.1, only [`RoleType::Global`] is documented
    /// for this endpoint.
    pub async fn get_all_roles(&self, role_type: RoleType) -> ClientResult<String> {
        get_all_roles(self.client, role_type).await
    }

    /// Creates a role. Permission identifiers the server does not
    /// recognize are silently skipped by the server.
    pub async fn add_role(&self, role_to_create: &RoleToCreate) -> ClientResult<()> {
        add_role(self.client, role_to_create).await
    }

    pub async fn assign_role(&self, assignment: &RoleAssignment) -> ClientResult<()> {
        assign_role(self.client, assignment).await
    }
}
