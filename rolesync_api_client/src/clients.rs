use std::rc::Rc;

use tracing::debug;
use url::Url;

use crate::{
    api::roles::RoleStrategyApi,
    authentication::BasicCredentials,
    errors::{ClientError, ClientInitializationError, ClientResult},
    response::ServerResponse,
    ApiServer,
};


/// Transport used by the API wrappers.
///
/// [`AuthenticatedClient`] is the real implementation; tests can provide
/// their own to observe which requests would be sent.
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    fn server(&self) -> &ApiServer;

    async fn get(&self, url: Url) -> ClientResult<ServerResponse>;

    async fn post(&self, url: Url) -> ClientResult<ServerResponse>;
}



fn build_client_user_agent() -> String {
    format!("rolesync / v{}", env!("CARGO_PKG_VERSION"))
}

pub struct Client {
    server: Rc<ApiServer>,
    http_client: reqwest::Client,
}

impl Client {
    pub fn new(server: Rc<ApiServer>) -> Result<Self, ClientInitializationError> {
        let http_client = reqwest::Client::builder()
            .user_agent(build_client_user_agent())
            .build()
            .map_err(|error| ClientInitializationError::UnableToInitializeReqwestClient { error })?;

        Ok(Self {
            server,
            http_client,
        })
    }

    /// Every role-strategy endpoint requires authentication,
    /// so this is the only way to obtain a usable [`HttpClient`].
    pub fn with_authentication(&self, credentials: &Rc<BasicCredentials>) -> AuthenticatedClient {
        AuthenticatedClient::new(
            self.server.clone(),
            credentials.clone(),
            self.http_client.clone(),
        )
    }
}



pub struct AuthenticatedClient {
    server: Rc<ApiServer>,
    credentials: Rc<BasicCredentials>,
    http_client: reqwest::Client,
}

impl AuthenticatedClient {
    pub(crate) fn new(
        server: Rc<ApiServer>,
        credentials: Rc<BasicCredentials>,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            server,
            credentials,
            http_client,
        }
    }

    pub fn role_strategy(&self) -> RoleStrategyApi<'_, Self> {
        RoleStrategyApi::new(self)
    }

    async fn execute(&self, request_builder: reqwest::RequestBuilder) -> ClientResult<ServerResponse> {
        let response = request_builder
            .basic_auth(
                self.credentials.username(),
                self.credentials.password(),
            )
            .send()
            .await
            .map_err(|error| ClientError::RequestExecutionError { error })?;

        ServerResponse::from_reqwest_response(response).await
    }
}


impl HttpClient for AuthenticatedClient {
    fn server(&self) -> &ApiServer {
        &self.server
    }

    async fn get(&self, url: Url) -> ClientResult<ServerResponse> {
        debug!(url = url.as_str(), "Sending GET request.");

        self.execute(self.http_client.get(url)).await
    }

    async fn post(&self, url: Url) -> ClientResult<ServerResponse> {
        debug!(url = url.as_str(), "Sending POST request.");

        self.execute(self.http_client.post(url)).await
    }
}



#[cfg(test)]
mod test {
    use std::rc::Rc;

    use rolesync_core::RoleType;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;
    use crate::server::ApiServerOptions;

    fn local_client(port: u16) -> AuthenticatedClient {
        let server = ApiServer::new(
            "127.0.0.1",
            ApiServerOptions {
                use_https: false,
                port,
                context: "/jenkins".to_string(),
            },
        );

        Client::new(Rc::new(server))
            .unwrap()
            .with_authentication(&Rc::new(BasicCredentials::new("admin", Some("admin"))))
    }

    /// Accepts one connection, answers `200 OK` with `body`
    /// and returns the request line and headers as received.
    async fn serve_single_request(listener: TcpListener, body: &'static str) -> String {
        let (mut stream, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buffer = [0u8; 1024];

        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            let read = stream.read(&mut buffer).await.unwrap();
            if read == 0 {
                break;
            }

            request.extend_from_slice(&buffer[..read]);
        }

        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        );

        stream.write_all(response.as_bytes()).await.unwrap();
        let _ = stream.shutdown().await;

        String::from_utf8(request).unwrap()
    }

    fn header<'r>(request: &'r str, name: &str) -> Option<&'r str> {
        request
            .lines()
            .skip(1)
            .filter_map(|line| line.split_once(':'))
            .find(|(key, _)| key.trim().eq_ignore_ascii_case(name))
            .map(|(_, value)| value.trim())
    }


    #[tokio::test]
    async fn sends_basic_authentication_and_user_agent() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let server_task = tokio::spawn(serve_single_request(
            listener,
            r#"{"admin":["admin"]}"#,
        ));

        let client = local_client(port);
        let body = client
            .role_strategy()
            .get_all_roles(RoleType::Global)
            .await
            .unwrap();

        let request = server_task.await.unwrap();

        assert_eq!(body, r#"{"admin":["admin"]}"#);
        assert_eq!(
            request.lines().next(),
            Some("GET /jenkins/role-strategy/strategy/getAllRoles?type=globalRoles HTTP/1.1")
        );
        assert_eq!(
            header(&request, "authorization"),
            Some("Basic YWRtaW46YWRtaW4=")
        );
        assert_eq!(
            header(&request, "user-agent"),
            Some(build_client_user_agent().as_str())
        );
        assert!(build_client_user_agent().starts_with("rolesync / v"));
    }

    #[tokio::test]
    async fn connection_failure_is_a_request_execution_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let error = local_client(port)
            .role_strategy()
            .get_all_roles(RoleType::Global)
            .await
            .unwrap_err();

        assert!(matches!(error, ClientError::RequestExecutionError { .. }));
        assert_eq!(error.status_code(), None);
    }
}
