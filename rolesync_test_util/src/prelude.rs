pub use reqwest::StatusCode;
pub use rolesync_api_client::api::roles::{RoleAssignment, RoleStrategyApi, RoleToCreate};
pub use rolesync_core::{Role, RoleType};

pub use super::client::{RecordedRequest, RecordingClient};
pub use super::spreadsheet::{sample_spreadsheet, SpreadsheetFixture};
