/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FtpEntryType {
    File,
    Directory,
}

impl fmt::Display for FtpEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FtpEntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FtpEntryType::File => "file",
            FtpEntryType::Directory => "dir",
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, FtpEntryType::Directory)
    }
}
