use reqwest::StatusCode;
use thiserror::Error;



#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to prepare a URL")]
    UrlPreparationError {
        #[from]
        #[source]
        error: url::ParseError,
    },

    #[error("failed while executing HTTP request")]
    RequestExecutionError {
        #[source]
        error: reqwest::Error,
    },

    #[error("failed while reading the response body")]
    ResponseBodyError {
        #[source]
        error: reqwest::Error,
    },

    /// The server responded, but not with `200 OK`.
    /// The Role Strategy plugin does not return structured errors,
    /// so the body is kept around verbatim for diagnostics.
    #[error("server responded with {} (expected 200 OK)", .status_code)]
    UnexpectedStatusCode { status_code: StatusCode, body: String },
}

impl ClientError {
    #[inline]
    pub(crate) fn unexpected_status_code(status_code: StatusCode, body: String) -> Self {
        Self::UnexpectedStatusCode { status_code, body }
    }

    /// Returns the status code if this error was caused by a non-200 response.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            ClientError::UnexpectedStatusCode { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}


pub type ClientResult<V, E = ClientError> = Result<V, E>;



#[derive(Debug, Error)]
pub enum ClientInitializationError {
    #[error("unable to initialize reqwest HTTP client")]
    UnableToInitializeReqwestClient {
        #[from]
        #[source]
        error: reqwest::Error,
    },
}
