use super::{build_request_url_with_parameters, QueryParameters};
use crate::{ClientResult, HttpClient, ServerResponse};

pub(crate) struct GetRequestBuilder<'c, HC, const HAS_URL: bool>
where
    HC: HttpClient,
{
    client: &'c HC,
    endpoint: String,
    parameters: QueryParameters,
}

impl<'c, HC, const HAS_URL: bool> GetRequestBuilder<'c, HC, HAS_URL>
where
    HC: HttpClient,
{
    pub(crate) fn new(client: &'c HC) -> GetRequestBuilder<'c, HC, false> {
        GetRequestBuilder {
            client,
            endpoint: String::new(),
            parameters: Vec::new(),
        }
    }

    pub(crate) fn endpoint_url<U>(self, relative_endpoint_url: U) -> GetRequestBuilder<'c, HC, true>
    where
        U: AsRef<str>,
    {
        GetRequestBuilder {
            client: self.client,
            endpoint: relative_endpoint_url.as_ref().to_string(),
            parameters: self.parameters,
        }
    }

    pub(crate) fn query_parameter<V>(mut self, key: &'static str, value: V) -> Self
    where
        V: Into<String>,
    {
        self.parameters.push((key, value.into()));
        self
    }
}

impl<'c, HC> GetRequestBuilder<'c, HC, true>
where
    HC: HttpClient,
{
    pub(crate) async fn send(self) -> ClientResult<ServerResponse> {
        let request_url = build_request_url_with_parameters(
            self.client.server(),
            &self.endpoint,
            &self.parameters,
        )?;

        self.client.get(request_url).await
    }
}
