/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use std::time::Duration;

const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(90);

/// Connection parameters for one FTP storage backend.
///
/// The config is consumed twice: by the transport implementation when it
/// opens the control connection, and by [`crate::FtpFileStore`] at session
/// bootstrap. It is not meant to change after a session is established.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FtpStoreConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Server-side directory all paths are scoped to. Empty means the
    /// login directory.
    pub root: String,
    pub ssl: bool,
    /// Negotiate `OPTS UTF8 ON` at bootstrap. Failure is then fatal.
    pub utf8: bool,
    /// Applied to each control command and listing fetch.
    pub timeout: Duration,
    /// Mode set by `SITE CHMOD` for public visibility.
    pub perm_public: u32,
    /// Mode set by `SITE CHMOD` for private visibility.
    pub perm_private: u32,
}

impl Default for FtpStoreConfig {
    fn default() -> Self {
        FtpStoreConfig {
            host: String::new(),
            port: 21,
            username: "anonymous".to_string(),
            password: String::new(),
            root: String::new(),
            ssl: false,
            utf8: false,
            timeout: DEFAULT_COMMAND_TIMEOUT,
            perm_public: 0o744,
            perm_private: 0o700,
        }
    }
}

impl FtpStoreConfig {
    pub fn base_uri(&self) -> String {
        let scheme = if self.ssl { "ftps" } else { "ftp" };
        format!("{scheme}://{}:{}", self.host, self.port)
    }
}
