//! Picks the transport named by [`TransportConfig`] and serves on it.

use tracing::{error, info};

use super::{TransportConfig, TransportResult};
use crate::core::McpServer;

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "tcp")]
use super::tcp::TcpTransport;

#[cfg(feature = "http")]
use super::http::HttpTransport;

/// Runs an [`McpServer`] on whichever transport the configuration selects.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Serve until the transport stops.
    ///
    /// STDIO returns when the client hangs up; TCP and HTTP only return on a
    /// bind or listener failure.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let description = self.config.description();
        info!(
            "Starting {} with {} tools",
            description,
            server.registry().len()
        );

        let result = match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run(server).await,
            #[cfg(feature = "tcp")]
            TransportConfig::Tcp(cfg) => TcpTransport::new(cfg).run(server).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => HttpTransport::new(cfg).run(server).await,
        };

        if let Err(e) = &result {
            error!("{} stopped: {}", description, e);
        }
        result
    }
}

#[cfg(all(test, feature = "http"))]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::core::transport::{HttpConfig, TransportError};

    #[tokio::test]
    async fn test_run_reports_bind_failure() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let config = TransportConfig::Http(HttpConfig {
            port,
            ..HttpConfig::default()
        });
        let server = McpServer::new(Config::default()).unwrap();

        let err = TransportService::new(config).run(server).await.unwrap_err();
        match err {
            TransportError::Bind { address, .. } => {
                assert_eq!(address, format!("127.0.0.1:{}", port))
            }
            other => panic!("expected a bind error, got {:?}", other),
        }
    }
}
