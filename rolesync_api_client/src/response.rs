use bytes::Bytes;
use reqwest::StatusCode;

use crate::errors::{ClientError, ClientResult};


/// A fully-received server response.
///
/// Role Strategy responses are tiny, so the body is fetched eagerly;
/// this lets error paths include it without another await point.
pub struct ServerResponse {
    status: StatusCode,
    body: Bytes,
}

impl ServerResponse {
    pub fn new<B>(status: StatusCode, body: B) -> Self
    where
        B: Into<Bytes>,
    {
        Self {
            status,
            body: body.into(),
        }
    }

    pub(crate) async fn from_reqwest_response(response: reqwest::Response) -> ClientResult<Self> {
        let status = response.status();

        let body = response
            .bytes()
            .await
            .map_err(|error| ClientError::ResponseBodyError { error })?;

        Ok(Self { status, body })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
