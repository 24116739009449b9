/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use thiserror::Error;

use super::FtpTransportError;

/// Fatal session-bootstrap errors. The adapter must not be used after
/// receiving one of these.
#[derive(Debug, Error)]
pub enum FtpConnectError {
    #[error("could not connect to host {host} port {port}: {source}")]
    ConnectFailed {
        host: String,
        port: u16,
        #[source]
        source: FtpTransportError,
    },
    #[error("could not set utf-8 mode for connection {host}:{port}")]
    Utf8NegotiationFailed { host: String, port: u16 },
    #[error("root is invalid or does not exist: {root}")]
    InvalidRoot { root: String },
}
