use serde::Deserialize;

use crate::traits::Resolve;


pub(super) type UnresolvedCredentialsConfiguration = CredentialsConfiguration;

/// Basic authentication credentials for the Jenkins REST API.
/// The password may also be an API token.
#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct CredentialsConfiguration {
    pub username: String,

    pub password: Option<String>,
}

impl Default for CredentialsConfiguration {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: Some("admin".to_string()),
        }
    }
}

impl std::fmt::Debug for CredentialsConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfiguration")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Resolve for UnresolvedCredentialsConfiguration {
    type Resolved = CredentialsConfiguration;

    fn resolve(self) -> Self::Resolved {
        self
    }
}
