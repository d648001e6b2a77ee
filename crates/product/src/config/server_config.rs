use crate::config::myconfig::Config;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_conn: u32,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            database_url: config.database_url.clone(),
            db_max_conn: config.db_max_conn,
            static_dir: PathBuf::from(&config.static_dir),
        }
    }

    /// Host and port in the form `TcpListener::bind` resolves, so host names
    /// and bare or bracketed IPv6 literals are all accepted.
    pub fn bind_addr(&self) -> (&str, u16) {
        let host = self.host.trim();
        let host = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);

        (host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    fn server_config(host: &str, port: u16) -> ServerConfig {
        let config = Config::from_lookup(|key| match key {
            "HOST" => Some(host.to_string()),
            "PORT" => Some(port.to_string()),
            _ => None,
        })
        .unwrap();

        ServerConfig::from_config(&config)
    }

    #[test]
    fn ipv6_brackets_are_stripped() {
        assert_eq!(server_config("::1", 5000).bind_addr(), ("::1", 5000));
        assert_eq!(server_config("[::1]", 5000).bind_addr(), ("::1", 5000));
        assert_eq!(server_config("0.0.0.0", 80).bind_addr(), ("0.0.0.0", 80));
    }

    #[tokio::test]
    async fn host_names_are_resolved_when_binding() {
        let config = server_config("localhost", 0);

        let listener = TcpListener::bind(config.bind_addr()).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }
}
