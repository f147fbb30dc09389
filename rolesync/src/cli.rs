//! Command-line interface definitions for the `rolesync` binary.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, ValueEnum};
use rolesync_api_client::api::roles::{RoleAssignment, RoleToCreate};
use rolesync_configuration::Protocol;
use rolesync_core::{Role, RoleType};

use crate::actions::ActionRequest;


/// `rolesync` command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "rolesync",
    author,
    about = "Synchronizes role definitions into a Jenkins Role Strategy plugin instance.",
    version
)]
pub struct CliArgs {
    /// Path to the configuration file to use.
    /// If unspecified, `./data/configuration.toml` is used if it exists.
    #[arg(
        short = 'c',
        long = "configuration-file-path",
        help = "Path to the configuration file to use. Defaults to ./data/configuration.toml, if present."
    )]
    pub configuration_file_path: Option<PathBuf>,

    #[command(flatten)]
    pub connection: ConnectionArguments,

    #[arg(
        long = "action",
        value_enum,
        default_value_t = Action::GetAllRoles,
        help = "Action to perform."
    )]
    pub action: Action,

    #[arg(
        long = "filename",
        default_value = "roles.xslx",
        help = "Role definition file to import (.json or a two-sheet spreadsheet)."
    )]
    pub filename: PathBuf,

    #[arg(
        long = "overwrite",
        action = ArgAction::SetTrue,
        help = "With addRole: replace an existing role of the same name."
    )]
    pub overwrite: bool,

    #[arg(
        long = "pattern",
        default_value = ".*",
        help = "With addRole: pattern restricting which items the role applies to."
    )]
    pub pattern: String,

    #[arg(
        long = "permissions",
        value_delimiter = ',',
        default_value = "hudson.model.Item.Discover,hudson.model.Item.Build",
        help = "With addRole: comma-separated list of Jenkins permission identifiers."
    )]
    pub permissions: Vec<String>,

    #[arg(long = "name", default_value = "testrole1", help = "Role name.")]
    pub role_name: String,

    #[arg(
        long = "type",
        default_value = "globalRoles",
        help = "Role type: globalRoles, projectRoles or slaveRoles."
    )]
    pub role_type: RoleType,

    #[arg(
        long = "sid",
        default_value = "user1",
        help = "With assignRole: security identifier (usually a user name) to assign."
    )]
    pub sid: String,
}


/// Connection flags. Each one overrides the matching configuration file value.
#[derive(Args, Debug, Default)]
pub struct ConnectionArguments {
    #[arg(long = "protocol", help = "Jenkins protocol: http or https.")]
    pub protocol: Option<Protocol>,

    #[arg(long = "hostname", help = "Jenkins hostname.")]
    pub hostname: Option<String>,

    #[arg(long = "port", help = "Jenkins HTTP port.")]
    pub port: Option<u16>,

    #[arg(long = "context", help = "Path prefix Jenkins is served under, e.g. /jenkins.")]
    pub context: Option<String>,

    #[arg(long = "username", help = "User name for basic authentication.")]
    pub username: Option<String>,

    #[arg(
        long = "password",
        env = "ROLESYNC_PASSWORD",
        hide_env_values = true,
        help = "Password or API token for basic authentication."
    )]
    pub password: Option<String>,
}


#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    /// List roles of the given type.
    #[value(name = "getAllRoles")]
    GetAllRoles,

    /// Create a single role, then list roles.
    #[value(name = "addRole")]
    AddRole,

    /// Assign a single SID to a role, then list roles.
    #[value(name = "assignRole")]
    AssignRole,

    /// Create every role in a file and assign its users.
    #[value(name = "importXslx", alias = "import")]
    ImportXslx,
}


impl CliArgs {
    pub fn action_request(&self) -> ActionRequest {
        match self.action {
            Action::GetAllRoles => ActionRequest::GetAllRoles {
                role_type: self.role_type,
            },
            Action::AddRole => {
                let mut role = Role::new(self.role_name.as_str());
                role.permissions = self
                    .permissions
                    .iter()
                    .map(|permission| permission.trim())
                    .filter(|permission| !permission.is_empty())
                    .map(str::to_string)
                    .collect();
                role.pattern = Some(self.pattern.clone());

                ActionRequest::AddRole {
                    role: RoleToCreate::new(self.role_type, role, self.overwrite),
                }
            }
            Action::AssignRole => ActionRequest::AssignRole {
                assignment: RoleAssignment::new(
                    self.role_type,
                    self.role_name.as_str(),
                    self.sid.as_str(),
                ),
            },
            Action::ImportXslx => ActionRequest::Import {
                file_path: self.filename.clone(),
            },
        }
    }
}
