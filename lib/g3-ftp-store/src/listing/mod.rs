/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use chrono::{DateTime, Utc};
use mime::Mime;

mod entry_type;
pub(crate) mod time_val;

pub use entry_type::FtpEntryType;

/// One file or directory entry, parsed from a listing or synthesized by a
/// store operation.
#[derive(Debug, Clone)]
pub struct FtpFileEntry {
    entry_path: String,
    entry_type: FtpEntryType,
    mode: Option<u32>,
    size: Option<u64>,
    media_type: Option<Mime>,
    modify_time: Option<DateTime<Utc>>,
}

impl FtpFileEntry {
    pub(crate) fn new(entry_type: FtpEntryType, path: impl Into<String>) -> Self {
        FtpFileEntry {
            entry_path: path.into(),
            entry_type,
            mode: None,
            size: None,
            media_type: None,
            modify_time: None,
        }
    }

    /// The synthetic entry for the configured root directory.
    pub(crate) fn root() -> Self {
        FtpFileEntry::new(FtpEntryType::Directory, "")
    }

    #[inline]
    pub fn entry_path(&self) -> &str {
        self.entry_path.as_str()
    }

    #[inline]
    pub fn entry_type(&self) -> FtpEntryType {
        self.entry_type
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.entry_type.is_dir()
    }

    /// Permission bits as an octal value in `0..=0o777`.
    #[inline]
    pub fn mode(&self) -> Option<u32> {
        self.mode
    }

    #[inline]
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    #[inline]
    pub(crate) fn set_size(&mut self, size: u64) {
        self.size = Some(size);
    }

    #[inline]
    pub fn media_type(&self) -> Option<&Mime> {
        self.media_type.as_ref()
    }

    #[inline]
    pub(crate) fn set_media_type(&mut self, media_type: Mime) {
        self.media_type = Some(media_type);
    }

    #[inline]
    pub fn mtime(&self) -> Option<&DateTime<Utc>> {
        self.modify_time.as_ref()
    }
}

/// Parse the raw text of a UNIX-style `LIST` reply.
///
/// Entry paths are prefixed with `prefix` using a single forward slash;
/// an empty prefix leaves the parsed names untouched.
pub(crate) fn parse_listing(text: &str, prefix: &str) -> Vec<FtpFileEntry> {
    let mut entries = Vec::new();
    for line in text.lines() {
        if let Some(entry) = parse_unix_line(line.trim_end(), prefix) {
            entries.push(entry);
        }
    }
    entries
}

fn parse_unix_line(line: &str, prefix: &str) -> Option<FtpFileEntry> {
    let mut tokens = line.split_whitespace();

    let perms = tokens.next()?;
    if perms.len() != 10 {
        // also drops the "total N" summary line
        return None;
    }
    let _links = tokens.next()?;
    let _owner = tokens.next()?;
    let _group = tokens.next()?;
    let size = tokens.next()?;
    let month = tokens.next()?;
    let day = tokens.next()?;
    let time_or_year = tokens.next()?;

    let name_parts: Vec<&str> = tokens.collect();
    if name_parts.is_empty() {
        return None;
    }
    let name = name_parts.join(" ");
    if name == "." || name == ".." {
        return None;
    }

    // symbolic links and other special entries count as plain files
    let entry_type = if perms.starts_with('d') {
        FtpEntryType::Directory
    } else {
        FtpEntryType::File
    };

    let mut entry = FtpFileEntry::new(entry_type, join_path(prefix, &name));
    entry.mode = Some(parse_file_mode(perms));
    if entry_type == FtpEntryType::File {
        entry.size = size.parse().ok();
    }
    entry.modify_time = time_val::parse_listing_datetime(month, day, time_or_year);
    Some(entry)
}

/// Convert the 9 permission characters after the type character into an
/// octal value, one digit per rwx group. Flag characters outside
/// `{'-','r','w','x'}` contribute nothing.
fn parse_file_mode(perms: &str) -> u32 {
    let mut mode = 0u32;
    for group in perms.as_bytes()[1..].chunks(3) {
        let mut digit = 0u32;
        for c in group {
            digit += match c {
                b'r' => 4,
                b'w' => 2,
                b'x' => 1,
                _ => 0,
            };
        }
        mode = (mode << 3) | digit;
    }
    mode
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}/{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_mode_exact() {
        assert_eq!(parse_file_mode("-rw-r--r--"), 0o644);
        assert_eq!(parse_file_mode("drwxr-xr-x"), 0o755);
        assert_eq!(parse_file_mode("----------"), 0);
        assert_eq!(parse_file_mode("-rwxrwxrwx"), 0o777);
    }

    #[test]
    fn file_line() {
        let entries = parse_listing("-rw-r--r-- 1 owner group 1024 Jan 15 12:00 foo.txt\r\n", "");
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.entry_path(), "foo.txt");
        assert_eq!(entry.entry_type(), FtpEntryType::File);
        assert_eq!(entry.mode(), Some(0o644));
        assert_eq!(entry.size(), Some(1024));
        assert!(entry.mtime().is_some());
    }

    #[test]
    fn dir_line_has_no_size() {
        let entries = parse_listing("drwxr-xr-x 2 owner group 4096 Mar 1 2023 sub\r\n", "");
        let entry = &entries[0];
        assert_eq!(entry.entry_type(), FtpEntryType::Directory);
        assert_eq!(entry.mode(), Some(0o755));
        assert_eq!(entry.size(), None);
    }

    #[test]
    fn name_with_spaces_is_not_split() {
        let entries = parse_listing(
            "-rw-r--r-- 1 owner group 42 Mar 1 2023 my file name.txt\r\n",
            "",
        );
        assert_eq!(entries[0].entry_path(), "my file name.txt");
    }

    #[test]
    fn pseudo_entries_are_skipped() {
        let text = "drwxr-xr-x 2 o g 4096 Mar 1 2023 .\r\n\
                    drwxr-xr-x 4 o g 4096 Mar 1 2023 ..\r\n\
                    -rw-r--r-- 1 o g 1 Mar 1 2023 a\r\n";
        let entries = parse_listing(text, "");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entry_path(), "a");
    }

    #[test]
    fn summary_and_malformed_lines_are_skipped() {
        let text = "total 8\r\n\
                    garbage\r\n\
                    -rw-r--r-- 1 o g 1 Mar 1 2023 a\r\n";
        let entries = parse_listing(text, "");
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn prefix_is_joined_with_forward_slash() {
        let entries = parse_listing("-rw-r--r-- 1 o g 1 Mar 1 2023 a.txt\r\n", "docs/reports");
        assert_eq!(entries[0].entry_path(), "docs/reports/a.txt");
    }

    #[test]
    fn symlink_counts_as_file() {
        let entries = parse_listing(
            "lrwxrwxrwx 1 o g 11 Mar 1 2023 link -> target\r\n",
            "",
        );
        assert_eq!(entries[0].entry_type(), FtpEntryType::File);
        // the arrow and target stay part of the reconstructed name
        assert_eq!(entries[0].entry_path(), "link -> target");
    }
}
