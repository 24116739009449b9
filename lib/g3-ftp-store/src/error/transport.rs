/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FtpTransportError {
    #[error("io failed: {0:?}")]
    Io(#[from] io::Error),
    #[error("connection closed")]
    ConnectionClosed,
    #[error("operation timed out")]
    Timeout,
    #[error("transfer failed: {0}")]
    TransferFailed(String),
}
