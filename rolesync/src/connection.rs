use rolesync_api_client::{
    authentication::BasicCredentials,
    server::{ApiServerOptions, ServerHost},
    ApiServer,
};
use rolesync_configuration::{Configuration, ServerConfiguration, ServerConfigurationError};

use crate::cli::ConnectionArguments;


/// Connection parameters after merging command-line flags over the configuration file.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub server: ServerConfiguration,
    pub username: String,
    pub password: Option<String>,
}

impl ConnectionSettings {
    /// Flags get the same checks as the configuration file.
    pub fn resolve(
        arguments: &ConnectionArguments,
        configuration: &Configuration,
    ) -> Result<Self, ServerConfigurationError> {
        let configured_server = &configuration.server;
        let credentials = &configuration.credentials;

        let server = ServerConfiguration {
            protocol: arguments.protocol.unwrap_or(configured_server.protocol),
            hostname: arguments
                .hostname
                .clone()
                .unwrap_or_else(|| configured_server.hostname.clone()),
            port: arguments.port.unwrap_or(configured_server.port),
            context: arguments
                .context
                .clone()
                .unwrap_or_else(|| configured_server.context.clone()),
        };

        server.validate()?;

        Ok(Self {
            server,
            username: arguments
                .username
                .clone()
                .unwrap_or_else(|| credentials.username.clone()),
            password: arguments
                .password
                .clone()
                .or_else(|| credentials.password.clone()),
        })
    }

    pub fn api_server(&self) -> ApiServer {
        ApiServer::new(
            ServerHost::from(self.server.hostname.trim()),
            ApiServerOptions {
                use_https: self.server.protocol.is_https(),
                port: self.server.port,
                context: self.server.context.clone(),
            },
        )
    }

    pub fn credentials(&self) -> BasicCredentials {
        BasicCredentials::new(self.username.as_str(), self.password.as_deref())
    }
}

impl std::fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("server", &self.server)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
