/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

macro_rules! char_to_u16 {
    ($c:expr) => {
        ($c - b'0') as u16
    };
}

/// The captured reply lines of one command invocation.
///
/// Servers may prepend any number of continuation lines (`ddd-text`); only
/// the last line carries the authoritative status code.
#[derive(Debug)]
pub(crate) struct FtpResponse {
    lines: Vec<String>,
}

impl FtpResponse {
    pub(crate) fn empty() -> Self {
        FtpResponse { lines: Vec::new() }
    }

    pub(crate) fn parse(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut offset = 0;
        for end in memchr::memchr_iter(b'\n', text.as_bytes()) {
            push_line(&mut lines, &text[offset..end]);
            offset = end + 1;
        }
        push_line(&mut lines, &text[offset..]);
        FtpResponse { lines }
    }

    #[inline]
    pub(crate) fn lines(&self) -> &[String] {
        &self.lines
    }

    pub(crate) fn last_line(&self) -> Option<&str> {
        self.lines.last().map(|s| s.as_str())
    }

    /// Status code of the last line, if that line carries a valid one.
    pub(crate) fn code(&self) -> Option<u16> {
        let line = self.last_line()?;
        let b = line.as_bytes();
        if b.len() < 3 {
            return None;
        }
        if !b[0].is_ascii_digit() || !b[1].is_ascii_digit() || !b[2].is_ascii_digit() {
            return None;
        }
        if b.len() > 3 && b[3] != b' ' && b[3] != b'-' {
            return None;
        }
        let code = char_to_u16!(b[0]) * 100 + char_to_u16!(b[1]) * 10 + char_to_u16!(b[2]);
        (100..600).contains(&code).then_some(code)
    }

    /// Text after the status code on the last line.
    pub(crate) fn message(&self) -> Option<&str> {
        self.code()?;
        let line = self.last_line()?;
        if line.len() <= 4 {
            return Some("");
        }
        Some(line[4..].trim())
    }
}

fn push_line(lines: &mut Vec<String>, raw: &str) {
    let line = raw.trim_end();
    if !line.is_empty() {
        lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line() {
        let rsp = FtpResponse::parse("250 Rename successful\r\n");
        assert_eq!(rsp.code(), Some(250));
        assert_eq!(rsp.message(), Some("Rename successful"));
        assert_eq!(rsp.lines().len(), 1);
    }

    #[test]
    fn last_line_is_authoritative() {
        let rsp = FtpResponse::parse("214-The following commands are recognized:\r\n ABOR CWD DELE\r\n214 Help OK.\r\n");
        assert_eq!(rsp.code(), Some(214));
        assert_eq!(rsp.last_line(), Some("214 Help OK."));
        assert_eq!(rsp.lines().len(), 3);
    }

    #[test]
    fn bare_code() {
        let rsp = FtpResponse::parse("250\r\n");
        assert_eq!(rsp.code(), Some(250));
        assert_eq!(rsp.message(), Some(""));
    }

    #[test]
    fn mdtm_value() {
        let rsp = FtpResponse::parse("213 20230115120000\r\n");
        assert_eq!(rsp.code(), Some(213));
        assert_eq!(rsp.message(), Some("20230115120000"));
    }

    #[test]
    fn no_status_line() {
        assert_eq!(FtpResponse::empty().code(), None);
        assert_eq!(FtpResponse::parse("").code(), None);
        assert_eq!(FtpResponse::parse("garbage\r\n").code(), None);
        // out of the 100..600 reply code range
        assert_eq!(FtpResponse::parse("999 what\r\n").code(), None);
        // digits not followed by a delimiter
        assert_eq!(FtpResponse::parse("2500 no\r\n").code(), None);
    }
}
