use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

mod credentials;
mod import;
mod listing;
mod logging;
mod server;

pub use credentials::*;
pub use import::*;
pub use listing::*;
pub use logging::*;
pub use server::*;

use crate::traits::{Resolve, TryResolve, TryResolveWithContext};
use crate::utilities::get_default_configuration_file_path;
use crate::{ConfigurationLoadingError, ConfigurationResolutionError};



#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct UnresolvedConfiguration {
    /// Connection to the Jenkins instance.
    server: UnresolvedServerConfiguration,

    /// Credentials used for basic authentication.
    credentials: UnresolvedCredentialsConfiguration,

    /// Logging-related configuration.
    logging: UnresolvedLoggingConfiguration,

    /// Configuration related to the batch import.
    import: UnresolvedImportConfiguration,

    /// Configuration related to listing roles.
    listing: UnresolvedListingConfiguration,
}


/// The entire `rolesync` configuration.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// This is the file path this [`Configuration`] instance was loaded from,
    /// if it was loaded from a file at all.
    pub configuration_file_path: Option<PathBuf>,

    /// Connection to the Jenkins instance.
    pub server: ServerConfiguration,

    /// Credentials used for basic authentication.
    pub credentials: CredentialsConfiguration,

    /// Logging-related configuration.
    pub logging: LoggingConfiguration,

    /// Configuration related to the batch import.
    pub import: ImportConfiguration,

    /// Configuration related to listing roles.
    pub listing: ListingConfiguration,
}



pub(crate) struct ConfigurationResolutionContext {
    configuration_file_path: Option<PathBuf>,
}


impl TryResolveWithContext for UnresolvedConfiguration {
    type Resolved = Configuration;
    type Context = ConfigurationResolutionContext;
    type Error = ConfigurationResolutionError;

    fn try_resolve_with_context(
        self,
        context: Self::Context,
    ) -> Result<Self::Resolved, Self::Error> {
        let server = self.server.try_resolve()?;
        let credentials = self.credentials.resolve();
        let logging = self.logging.try_resolve()?;
        let import = self.import.try_resolve()?;
        let listing = self.listing.resolve();

        Ok(Configuration {
            configuration_file_path: context.configuration_file_path,
            server,
            credentials,
            logging,
            import,
            listing,
        })
    }
}


impl Configuration {
    /// Parse and resolve configuration from a TOML string.
    pub fn load_from_str(configuration_string: &str) -> Result<Self, ConfigurationLoadingError> {
        Self::load_from_str_with_path(configuration_string, None)
    }

    fn load_from_str_with_path(
        configuration_string: &str,
        configuration_file_path: Option<PathBuf>,
    ) -> Result<Self, ConfigurationLoadingError> {
        // Parse the string into the [`UnresolvedConfiguration`] structure and then resolve it.
        let unresolved_configuration =
            toml::from_str::<UnresolvedConfiguration>(configuration_string)
                .map_err(|error| ConfigurationLoadingError::ParsingError { error })?;

        let resolved_configuration =
            unresolved_configuration.try_resolve_with_context(ConfigurationResolutionContext {
                configuration_file_path,
            })?;

        Ok(resolved_configuration)
    }

    /// Load the configuration from a specific file path.
    pub fn load_from_path<S: AsRef<Path>>(
        configuration_file_path: S,
    ) -> Result<Self, ConfigurationLoadingError> {
        // Read the configuration file into memory as a string.
        let configuration_string =
            fs::read_to_string(configuration_file_path.as_ref()).map_err(|error| {
                ConfigurationLoadingError::UnableToReadConfigurationFile {
                    path: configuration_file_path.as_ref().to_path_buf(),
                    error,
                }
            })?;

        Self::load_from_str_with_path(
            &configuration_string,
            Some(configuration_file_path.as_ref().to_path_buf()),
        )
    }

    /// Load the configuration from the default path (`./data/configuration.toml`)
    /// if a file exists there, otherwise use the built-in defaults.
    pub fn load_from_default_path_or_defaults() -> Result<Self, ConfigurationLoadingError> {
        let default_configuration_file_path = get_default_configuration_file_path()
            .map_err(|error| ConfigurationLoadingError::UnableToDetermineDefaultPath { error })?;

        if default_configuration_file_path.is_file() {
            Self::load_from_path(default_configuration_file_path)
        } else {
            Self::load_from_str("")
        }
    }
}
