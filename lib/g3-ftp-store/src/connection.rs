/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use async_trait::async_trait;
use tokio::io::AsyncRead;

use crate::error::FtpTransportError;

/// The connection primitive the store drives.
///
/// Implementations own the control and data connections, TLS and login;
/// they execute what they are given and hand back raw text. Reply-code
/// interpretation stays on the caller's side of this seam.
#[async_trait]
pub trait FtpTransport {
    /// Verify the control connection is usable.
    async fn ping(&mut self) -> Result<(), FtpTransportError>;

    /// Run a single raw command and capture the control reply text,
    /// one CRLF-terminated reply line per text line.
    async fn exec_command(&mut self, command: &str) -> Result<String, FtpTransportError>;

    /// Run a command whose payload arrives on the data connection (LIST)
    /// and capture that payload.
    async fn retrieve_text(&mut self, command: &str) -> Result<String, FtpTransportError>;

    /// Upload the reader's contents to `path` under the connection base.
    async fn store_file(
        &mut self,
        path: &str,
        data: &mut (dyn AsyncRead + Send + Unpin),
    ) -> Result<(), FtpTransportError>;

    /// Open a download stream for `path` under the connection base.
    async fn retrieve_file(
        &mut self,
        path: &str,
    ) -> Result<Box<dyn AsyncRead + Send + Unpin>, FtpTransportError>;
}
