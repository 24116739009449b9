/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use crate::connection::FtpTransport;
use crate::listing::{self, FtpFileEntry};
use crate::path;
use crate::session::FtpSession;

/// List one directory level.
///
/// Entry paths are prefixed with `directory`; listing the server root
/// (`""` or `"/"`) leaves them bare. Any transport or parse failure maps
/// to an empty result.
pub(crate) async fn list_flat<T: FtpTransport>(
    session: &mut FtpSession<T>,
    directory: &str,
) -> Vec<FtpFileEntry> {
    let normalized = path::normalize(session, directory).await;
    let command = format!("LIST -aln {normalized}");
    let text = match session.fetch(command.trim_end()).await {
        Ok(text) => text,
        Err(e) => {
            log::debug!("listing of '{directory}' failed: {e}");
            return Vec::new();
        }
    };
    let prefix = if directory == "/" { "" } else { directory };
    listing::parse_listing(&text, prefix)
}

/// Depth-first recursive listing.
///
/// Only file entries appear in the output; directory entries are expanded
/// in place of being emitted. Each directory's own files come first, then
/// its subdirectories' contents, one fully-expanded subtree at a time, in
/// listing order. The traversal runs off an explicit work list so that
/// deep trees cannot exhaust the call stack.
pub(crate) async fn list_recursive<T: FtpTransport>(
    session: &mut FtpSession<T>,
    directory: &str,
) -> Vec<FtpFileEntry> {
    let mut output = Vec::new();
    let mut pending = vec![directory.to_string()];

    while let Some(dir) = pending.pop() {
        let mut subdirs = Vec::new();
        for entry in list_flat(session, &dir).await {
            if entry.is_dir() {
                subdirs.push(entry.entry_path().to_string());
            } else {
                output.push(entry);
            }
        }
        // reversed push so the first-listed subdirectory is expanded first
        while let Some(subdir) = subdirs.pop() {
            pending.push(subdir);
        }
    }

    output
}
