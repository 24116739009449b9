/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use chrono::{DateTime, Utc};
use mime::Mime;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::config::FtpStoreConfig;
use crate::connection::FtpTransport;
use crate::error::FtpConnectError;
use crate::listing::{self, FtpEntryType, FtpFileEntry};
use crate::path;
use crate::session::FtpSession;
use crate::walk;

/// The two supported visibility levels, each mapped to one fixed
/// permission mode from the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FtpVisibility {
    Public,
    Private,
}

/// File storage over one FTP session.
///
/// Every operation resolves to one or more control commands or transfers
/// on the injected transport. Operational failures never propagate as
/// errors: an operation that cannot complete reports `None`/`false` and
/// leaves the cause in the debug log. Only [`FtpFileStore::connect`] can
/// fail hard.
pub struct FtpFileStore<T: FtpTransport> {
    config: FtpStoreConfig,
    session: FtpSession<T>,
}

impl<T: FtpTransport> FtpFileStore<T> {
    /// Establish the session: connectivity probe, optional UTF-8
    /// negotiation, optional root scoping. Fatal on any failure.
    pub async fn connect(config: FtpStoreConfig, transport: T) -> Result<Self, FtpConnectError> {
        let session = FtpSession::open(&config, transport).await?;
        log::debug!("connected to {}", config.base_uri());
        Ok(FtpFileStore { config, session })
    }

    /// Tear down the session and hand the transport back. All cached
    /// session state dies with the session value.
    pub fn disconnect(self) -> T {
        self.session.into_transport()
    }

    #[inline]
    pub fn config(&self) -> &FtpStoreConfig {
        &self.config
    }

    /// Whether `OPTS UTF8 ON` was applied at bootstrap.
    #[inline]
    pub fn is_utf8(&self) -> bool {
        self.session.utf8_applied()
    }

    /// Store a full byte buffer at `path`.
    pub async fn write(&mut self, path: &str, contents: &[u8]) -> Option<FtpFileEntry> {
        let mut data = contents;
        let mut entry = self.write_stream(path, &mut data).await?;
        entry.set_size(contents.len() as u64);
        if let Some(media_type) = guess_media_type(path) {
            entry.set_media_type(media_type);
        }
        Some(entry)
    }

    /// Upload a stream to `path`. An FTP STOR overwrites, so this is the
    /// single code path for both create and update.
    pub async fn write_stream(
        &mut self,
        path: &str,
        data: &mut (dyn AsyncRead + Send + Unpin),
    ) -> Option<FtpFileEntry> {
        match self.session.store_file(path, data).await {
            Ok(()) => Some(FtpFileEntry::new(FtpEntryType::File, path)),
            Err(e) => {
                log::debug!("store to '{path}' failed: {e}");
                None
            }
        }
    }

    pub async fn update(&mut self, path: &str, contents: &[u8]) -> Option<FtpFileEntry> {
        self.write(path, contents).await
    }

    pub async fn update_stream(
        &mut self,
        path: &str,
        data: &mut (dyn AsyncRead + Send + Unpin),
    ) -> Option<FtpFileEntry> {
        self.write_stream(path, data).await
    }

    /// RNFR/RNTO pair. No compensating action is taken if the server
    /// accepts the source but rejects the destination.
    pub async fn rename(&mut self, path: &str, new_path: &str) -> bool {
        let mut channel = self.session.control();
        if let Err(e) = channel.rename_from(path).await {
            log::debug!("rename source '{path}' rejected: {e}");
            return false;
        }
        if let Err(e) = channel.rename_to(new_path).await {
            log::debug!("rename destination '{new_path}' rejected: {e}");
            return false;
        }
        true
    }

    /// Full in-memory copy. Nothing is written when the read fails.
    pub async fn copy(&mut self, path: &str, new_path: &str) -> bool {
        let Some(contents) = self.read(path).await else {
            return false;
        };
        self.write(new_path, &contents).await.is_some()
    }

    pub async fn delete(&mut self, path: &str) -> bool {
        match self.session.control().delete_file(path).await {
            Ok(()) => true,
            Err(e) => {
                log::debug!("delete of '{path}' failed: {e}");
                false
            }
        }
    }

    /// RMD only: a non-empty directory fails per server semantics.
    pub async fn delete_dir(&mut self, dirname: &str) -> bool {
        match self.session.control().remove_dir(dirname).await {
            Ok(()) => true,
            Err(e) => {
                log::debug!("delete of directory '{dirname}' failed: {e}");
                false
            }
        }
    }

    pub async fn create_dir(&mut self, dirname: &str) -> Option<FtpFileEntry> {
        match self.session.control().make_dir(dirname).await {
            Ok(()) => Some(FtpFileEntry::new(FtpEntryType::Directory, dirname)),
            Err(e) => {
                log::debug!("create of directory '{dirname}' failed: {e}");
                None
            }
        }
    }

    /// `SITE CHMOD` to one of the two configured modes, then fresh
    /// metadata for the path.
    pub async fn set_visibility(
        &mut self,
        path: &str,
        visibility: FtpVisibility,
    ) -> Option<FtpFileEntry> {
        let mode = match visibility {
            FtpVisibility::Public => self.config.perm_public,
            FtpVisibility::Private => self.config.perm_private,
        };
        if let Err(e) = self.session.control().set_file_mode(mode, path).await {
            log::debug!("visibility change of '{path}' failed: {e}");
            return None;
        }
        self.get_metadata(path).await
    }

    /// Download and materialize the full contents.
    pub async fn read(&mut self, path: &str) -> Option<Vec<u8>> {
        let mut stream = self.read_stream(path).await?;
        let mut contents = Vec::new();
        if let Err(e) = stream.read_to_end(&mut contents).await {
            log::debug!("read of '{path}' failed: {e}");
            return None;
        }
        Some(contents)
    }

    /// Open a download stream for `path`.
    pub async fn read_stream(&mut self, path: &str) -> Option<Box<dyn AsyncRead + Send + Unpin>> {
        match self.session.retrieve_file(path).await {
            Ok(stream) => Some(stream),
            Err(e) => {
                log::debug!("retrieve of '{path}' failed: {e}");
                None
            }
        }
    }

    /// Metadata for one path. The empty path is the configured root and
    /// resolves without any network traffic.
    pub async fn get_metadata(&mut self, path: &str) -> Option<FtpFileEntry> {
        if path.is_empty() {
            return Some(FtpFileEntry::root());
        }
        let normalized = path::normalize(&mut self.session, path).await;
        let command = format!("LIST -A {normalized}");
        let text = match self.session.fetch(&command).await {
            Ok(text) => text,
            Err(e) => {
                log::debug!("metadata listing of '{path}' failed: {e}");
                return None;
            }
        };
        listing::parse_listing(&text, "").into_iter().next()
    }

    /// Metadata plus a filename-derived media type.
    pub async fn get_mimetype(&mut self, path: &str) -> Option<FtpFileEntry> {
        let mut entry = self.get_metadata(path).await?;
        if let Some(media_type) = guess_media_type(path) {
            entry.set_media_type(media_type);
        }
        Some(entry)
    }

    /// Modification time via MDTM.
    pub async fn get_timestamp(&mut self, path: &str) -> Option<DateTime<Utc>> {
        match self.session.control().request_mtime(path).await {
            Ok(mtime) => Some(mtime),
            Err(e) => {
                log::debug!("timestamp of '{path}' unavailable: {e}");
                None
            }
        }
    }

    pub async fn list_directory_contents(
        &mut self,
        directory: &str,
        recursive: bool,
    ) -> Vec<FtpFileEntry> {
        if recursive {
            walk::list_recursive(&mut self.session, directory).await
        } else {
            walk::list_flat(&mut self.session, directory).await
        }
    }
}

fn guess_media_type(path: &str) -> Option<Mime> {
    mime_guess::from_path(path).first()
}
