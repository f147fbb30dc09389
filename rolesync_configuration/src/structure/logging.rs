use std::{borrow::Cow, path::PathBuf};

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::{traits::TryResolve, LoggingConfigurationError, MissingLoggingDirectoryCreationError};

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub(super) struct UnresolvedLoggingConfiguration {
    console_output_level_filter: String,

    log_file_output_level_filter: String,

    log_file_output_directory: Option<String>,
}

impl Default for UnresolvedLoggingConfiguration {
    fn default() -> Self {
        Self {
            console_output_level_filter: "info".to_string(),
            log_file_output_level_filter: "debug".to_string(),
            log_file_output_directory: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct LoggingConfiguration {
    pub console_output_level_filter: String,

    pub log_file_output_level_filter: String,

    /// If unset, logs are only written to the console.
    pub log_file_output_directory: Option<PathBuf>,
}

fn validate_filter(
    filter: &str,
    kind: &'static str,
) -> Result<(), LoggingConfigurationError> {
    EnvFilter::try_new(filter)
        .map(|_| ())
        .map_err(|error| LoggingConfigurationError::InvalidTracingFilter {
            invalid_filter: filter.to_string(),
            kind: Cow::Borrowed(kind),
            error,
        })
}

impl TryResolve for UnresolvedLoggingConfiguration {
    type Resolved = LoggingConfiguration;
    type Error = LoggingConfigurationError;

    fn try_resolve(self) -> Result<Self::Resolved, Self::Error> {
        validate_filter(
            &self.console_output_level_filter,
            "console_output_level_filter",
        )?;

        validate_filter(
            &self.log_file_output_level_filter,
            "log_file_output_level_filter",
        )?;

        Ok(Self::Resolved {
            console_output_level_filter: self.console_output_level_filter,
            log_file_output_level_filter: self.log_file_output_level_filter,
            log_file_output_directory: self.log_file_output_directory.map(PathBuf::from),
        })
    }
}

impl LoggingConfiguration {
    // Both filters were validated in `try_resolve`, so `EnvFilter::new` sees no invalid directives.

    pub fn console_output_level_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.console_output_level_filter)
    }

    pub fn log_file_output_level_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.log_file_output_level_filter)
    }

    pub fn create_log_file_output_directory_if_missing(
        &self,
    ) -> Result<(), MissingLoggingDirectoryCreationError> {
        let Some(directory_path) = self.log_file_output_directory.as_ref() else {
            return Ok(());
        };

        if directory_path.exists() && !directory_path.is_dir() {
            return Err(MissingLoggingDirectoryCreationError::NotADirectory {
                path: directory_path.clone(),
            });
        }

        std::fs::create_dir_all(directory_path).map_err(|error| {
            MissingLoggingDirectoryCreationError::UnableToCreateDirectory {
                directory_path: directory_path.clone(),
                error,
            }
        })
    }
}
