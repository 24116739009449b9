/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use unicode_normalization::UnicodeNormalization;

use crate::connection::FtpTransport;
use crate::session::FtpSession;

/// Canonicalize and escape a path for inclusion in a listing command.
///
/// An empty input stays empty and denotes the configured root. The first
/// non-empty call on a session triggers the `HELP` dialect probe, whose
/// result is cached for the session lifetime.
pub(crate) async fn normalize<T: FtpTransport>(session: &mut FtpSession<T>, raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let path: String = raw.nfc().collect();

    let path = if session.server_dialect().await.needs_space_escaping() {
        path.replace(' ', "\\ ")
    } else {
        path
    };

    // keep the server's listing engine from expanding literal wildcards
    path.replace('*', "\\*")
}
