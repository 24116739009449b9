/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use std::time::Duration;

use tokio::io::AsyncRead;

use crate::config::FtpStoreConfig;
use crate::connection::FtpTransport;
use crate::control::FtpControlChannel;
use crate::dialect::FtpServerDialect;
use crate::error::{FtpConnectError, FtpTransportError};

/// The live association with one connected server.
///
/// Owns the transport plus the two connection-scoped caches: the server
/// dialect and whether UTF-8 mode was applied. Both are written at most
/// once and die with the value, so they can never be reset separately.
pub(crate) struct FtpSession<T: FtpTransport> {
    transport: T,
    command_timeout: Duration,
    dialect: Option<FtpServerDialect>,
    utf8_applied: bool,
}

impl<T: FtpTransport> FtpSession<T> {
    /// Run the connect-time handshake. Every failure here is fatal.
    pub(crate) async fn open(
        config: &FtpStoreConfig,
        mut transport: T,
    ) -> Result<Self, FtpConnectError> {
        let connect_failed = |source: FtpTransportError| FtpConnectError::ConnectFailed {
            host: config.host.clone(),
            port: config.port,
            source,
        };
        match tokio::time::timeout(config.timeout, transport.ping()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(connect_failed(e)),
            Err(_) => return Err(connect_failed(FtpTransportError::Timeout)),
        }

        let mut session = FtpSession {
            transport,
            command_timeout: config.timeout,
            dialect: None,
            utf8_applied: false,
        };

        if config.utf8 {
            session.control().set_use_utf8().await.map_err(|e| {
                log::debug!("utf-8 negotiation failed: {e}");
                FtpConnectError::Utf8NegotiationFailed {
                    host: config.host.clone(),
                    port: config.port,
                }
            })?;
            session.utf8_applied = true;
        }

        if !config.root.is_empty() {
            session
                .control()
                .set_working_dir(&config.root)
                .await
                .map_err(|e| {
                    log::debug!("root scoping failed: {e}");
                    FtpConnectError::InvalidRoot {
                        root: config.root.clone(),
                    }
                })?;
        }

        Ok(session)
    }

    pub(crate) fn control(&mut self) -> FtpControlChannel<'_, T> {
        FtpControlChannel::new(&mut self.transport, self.command_timeout)
    }

    /// Probe the server dialect once and cache it for the session.
    pub(crate) async fn server_dialect(&mut self) -> FtpServerDialect {
        if let Some(dialect) = self.dialect {
            return dialect;
        }
        let rsp = self.control().probe_help().await;
        let dialect = FtpServerDialect::detect(rsp.last_line().unwrap_or_default());
        self.dialect = Some(dialect);
        dialect
    }

    #[inline]
    pub(crate) fn utf8_applied(&self) -> bool {
        self.utf8_applied
    }

    /// Run a data-capturing command (LIST) under the command timeout.
    pub(crate) async fn fetch(&mut self, command: &str) -> Result<String, FtpTransportError> {
        match tokio::time::timeout(self.command_timeout, self.transport.retrieve_text(command))
            .await
        {
            Ok(r) => r,
            Err(_) => Err(FtpTransportError::Timeout),
        }
    }

    pub(crate) async fn store_file(
        &mut self,
        path: &str,
        data: &mut (dyn AsyncRead + Send + Unpin),
    ) -> Result<(), FtpTransportError> {
        self.transport.store_file(path, data).await
    }

    pub(crate) async fn retrieve_file(
        &mut self,
        path: &str,
    ) -> Result<Box<dyn AsyncRead + Send + Unpin>, FtpTransportError> {
        self.transport.retrieve_file(path).await
    }

    pub(crate) fn into_transport(self) -> T {
        self.transport
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::MockTransport;

    #[tokio::test]
    async fn ping_failure_is_fatal() {
        let mut transport = MockTransport::new();
        transport.ping_ok = false;
        let config = FtpStoreConfig {
            host: "ftp.example.net".to_string(),
            ..Default::default()
        };
        match FtpSession::open(&config, transport).await {
            Err(FtpConnectError::ConnectFailed { host, port, .. }) => {
                assert_eq!(host, "ftp.example.net");
                assert_eq!(port, 21);
            }
            _ => panic!("expected ConnectFailed"),
        }
    }

    #[tokio::test]
    async fn utf8_negotiation_failure_is_fatal() {
        let mut transport = MockTransport::new();
        transport.push_reply("502 Command not implemented\r\n");
        let config = FtpStoreConfig {
            utf8: true,
            ..Default::default()
        };
        assert!(matches!(
            FtpSession::open(&config, transport).await,
            Err(FtpConnectError::Utf8NegotiationFailed { .. })
        ));
    }

    #[tokio::test]
    async fn utf8_negotiation_success_is_cached() {
        let mut transport = MockTransport::new();
        transport.push_reply("200 OK, UTF-8 enabled\r\n");
        let config = FtpStoreConfig {
            utf8: true,
            ..Default::default()
        };
        let session = FtpSession::open(&config, transport).await.unwrap();
        assert!(session.utf8_applied());
        assert_eq!(session.transport().commands, ["OPTS UTF8 ON"]);
    }

    #[tokio::test]
    async fn invalid_root_is_fatal() {
        let mut transport = MockTransport::new();
        transport.push_reply("550 No such directory\r\n");
        let config = FtpStoreConfig {
            root: "/data".to_string(),
            ..Default::default()
        };
        match FtpSession::open(&config, transport).await {
            Err(FtpConnectError::InvalidRoot { root }) => assert_eq!(root, "/data"),
            _ => panic!("expected InvalidRoot"),
        }
    }

    #[tokio::test]
    async fn root_scoping_uses_cwd() {
        let mut transport = MockTransport::new();
        transport.push_reply("250 Directory changed\r\n");
        let config = FtpStoreConfig {
            root: "/data".to_string(),
            ..Default::default()
        };
        let session = FtpSession::open(&config, transport).await.unwrap();
        assert_eq!(session.transport().commands, ["CWD /data"]);
        assert!(!session.utf8_applied());
    }
}
