/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

/// Server-implementation variant detected from a `HELP` probe.
///
/// Pure-FTPd rejects unescaped spaces in the argument of listing
/// commands; everything else observed in the wild takes them literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FtpServerDialect {
    Standard,
    PureFtpd,
}

impl FtpServerDialect {
    /// Detect from the last line of the `HELP` reply.
    pub(crate) fn detect(help_line: &str) -> Self {
        if help_line.to_lowercase().contains("pure-ftpd") {
            FtpServerDialect::PureFtpd
        } else {
            FtpServerDialect::Standard
        }
    }

    #[inline]
    pub fn needs_space_escaping(&self) -> bool {
        matches!(self, FtpServerDialect::PureFtpd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_marker() {
        assert_eq!(
            FtpServerDialect::detect("214 Pure-FTPd - http://pureftpd.org/"),
            FtpServerDialect::PureFtpd
        );
        assert_eq!(
            FtpServerDialect::detect("214 PURE-FTPD server"),
            FtpServerDialect::PureFtpd
        );
        assert_eq!(
            FtpServerDialect::detect("214 Help OK."),
            FtpServerDialect::Standard
        );
        assert_eq!(FtpServerDialect::detect(""), FtpServerDialect::Standard);
    }
}
