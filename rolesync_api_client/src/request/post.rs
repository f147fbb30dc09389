use super::{build_request_url_with_parameters, QueryParameters};
use crate::{ClientResult, HttpClient, ServerResponse};



/// Builds a body-less `POST` request.
///
/// The Role Strategy endpoints take all of their arguments
/// as query parameters, so there is no body support here.
pub(crate) struct PostRequestBuilder<'c, HC, const HAS_URL: bool>
where
    HC: HttpClient,
{
    client: &'c HC,

    endpoint: String,

    parameters: QueryParameters,
}


impl<'c, HC, const HAS_URL: bool> PostRequestBuilder<'c, HC, HAS_URL>
where
    HC: HttpClient,
{
    pub(crate) fn new(client: &'c HC) -> PostRequestBuilder<'c, HC, false> {
        PostRequestBuilder {
            client,
            endpoint: String::new(),
            parameters: Vec::new(),
        }
    }

    pub(crate) fn endpoint_url<U>(self, relative_endpoint_url: U) -> PostRequestBuilder<'c, HC, true>
    where
        U: AsRef<str>,
    {
        PostRequestBuilder {
            client: self.client,
            endpoint: relative_endpoint_url.as_ref().to_string(),
            parameters: self.parameters,
        }
    }

    pub(crate) fn query_parameters(mut self, parameters: QueryParameters) -> Self {
        self.parameters.extend(parameters);
        self
    }
}

impl<'c, HC> PostRequestBuilder<'c, HC, true>
where
    HC: HttpClient,
{
    pub(crate) async fn send(self) -> ClientResult<ServerResponse> {
        let request_url = build_request_url_with_parameters(
            self.client.server(),
            &self.endpoint,
            &self.parameters,
        )?;

        self.client.post(request_url).await
    }
}
