use std::{fmt::Display, net::IpAddr};

pub enum ServerHost {
    Ip(IpAddr),
    DomainName(String),
}

impl Display for ServerHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerHost::Ip(IpAddr::V6(address)) => write!(f, "[{}]", address),
            ServerHost::Ip(IpAddr::V4(address)) => address.fmt(f),
            ServerHost::DomainName(domain_name) => domain_name.fmt(f),
        }
    }
}

impl From<IpAddr> for ServerHost {
    fn from(value: IpAddr) -> Self {
        Self::Ip(value)
    }
}

impl From<String> for ServerHost {
    fn from(value: String) -> Self {
        match value.parse::<IpAddr>() {
            Ok(address) => Self::Ip(address),
            Err(_) => Self::DomainName(value),
        }
    }
}

impl From<&str> for ServerHost {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}



pub struct ApiServerOptions {
    pub use_https: bool,

    pub port: u16,

    /// Path prefix Jenkins is served under (e.g. `/jenkins`), empty if none.
    pub context: String,
}

impl Default for ApiServerOptions {
    fn default() -> Self {
        Self {
            use_https: false,
            port: 8080,
            context: String::new(),
        }
    }
}


/// Connection descriptor of the remote server.
/// Immutable once constructed.
pub struct ApiServer {
    base_url: String,
}

impl ApiServer {
    pub fn new<S>(server_host: S, options: ApiServerOptions) -> Self
    where
        S: Into<ServerHost>,
    {
        let protocol = match options.use_https {
            true => "https",
            false => "http",
        };

        Self {
            base_url: format!(
                "{}://{}:{}{}",
                protocol,
                server_host.into(),
                options.port,
                normalize_context(&options.context)
            ),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}


fn normalize_context(context: &str) -> String {
    let trimmed_context = context.trim().trim_end_matches('/');

    if trimmed_context.is_empty() {
        String::new()
    } else if trimmed_context.starts_with('/') {
        trimmed_context.to_string()
    } else {
        format!("/{}", trimmed_context)
    }
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builds_base_url_without_context() {
        let server = ApiServer::new("localhost", ApiServerOptions::default());
        assert_eq!(server.base_url(), "http://localhost:8080");
    }

    #[test]
    fn builds_base_url_with_context() {
        let server = ApiServer::new(
            "ci.example.org",
            ApiServerOptions {
                use_https: true,
                port: 443,
                context: "jenkins/".to_string(),
            },
        );

        assert_eq!(server.base_url(), "https://ci.example.org:443/jenkins");
    }

    #[test]
    fn brackets_ipv6_hosts() {
        let server = ApiServer::new("::1", ApiServerOptions::default());
        assert_eq!(server.base_url(), "http://[::1]:8080");
    }
}
