use std::{fmt::Display, str::FromStr};

use serde::Deserialize;

use crate::{traits::TryResolve, ServerConfigurationError};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    pub fn is_https(&self) -> bool {
        matches!(self, Protocol::Https)
    }
}

impl FromStr for Protocol {
    type Err = ServerConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            _ => Err(ServerConfigurationError::InvalidProtocol {
                protocol: s.to_string(),
            }),
        }
    }
}

impl Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Protocol::Http => f.write_str("http"),
            Protocol::Https => f.write_str("https"),
        }
    }
}



#[derive(Deserialize, Debug)]
#[serde(default)]
pub(super) struct UnresolvedServerConfiguration {
    protocol: String,

    hostname: String,

    port: u16,

    context: String,
}

impl Default for UnresolvedServerConfiguration {
    fn default() -> Self {
        Self {
            protocol: "http".to_string(),
            hostname: "localhost".to_string(),
            port: 8080,
            context: String::new(),
        }
    }
}


/// Where the Jenkins instance lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfiguration {
    pub protocol: Protocol,

    pub hostname: String,

    pub port: u16,

    /// Path prefix Jenkins is served under, e.g. `/jenkins`. Empty if none.
    pub context: String,
}

impl ServerConfiguration {
    /// Checks the values a configuration file or command-line flags can get wrong.
    pub fn validate(&self) -> Result<(), ServerConfigurationError> {
        if self.port == 0 {
            return Err(ServerConfigurationError::ZeroPort);
        }

        if self.hostname.trim().is_empty() {
            return Err(ServerConfigurationError::EmptyHostname);
        }

        Ok(())
    }
}

impl TryResolve for UnresolvedServerConfiguration {
    type Resolved = ServerConfiguration;
    type Error = ServerConfigurationError;

    fn try_resolve(self) -> Result<Self::Resolved, Self::Error> {
        let server = ServerConfiguration {
            protocol: self.protocol.parse::<Protocol>()?,
            hostname: self.hostname,
            port: self.port,
            context: self.context,
        };

        server.validate()?;

        Ok(server)
    }
}
