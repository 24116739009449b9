/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use std::fmt;

#[derive(Debug, Clone, Copy)]
pub struct FtpCommand(&'static str);

impl fmt::Display for FtpCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! ftp_commands {
    (
        $(
            $(#[$docs:meta])*
            ($konst:ident, $phrase:expr);
        )+
    ) => {
        impl FtpCommand {
        $(
            $(#[$docs])*
            pub const $konst: FtpCommand = FtpCommand($phrase);
        )+
        }
    };
}

ftp_commands! {
    (HELP, "HELP");
    (OPTS_UTF8_ON, "OPTS UTF8 ON");
    (CWD, "CWD");
    (RNFR, "RNFR");
    (RNTO, "RNTO");
    (DELE, "DELE");
    (RMD, "RMD");
    (MKD, "MKD");
    (SITE_CHMOD, "SITE CHMOD");
    (MDTM, "MDTM");
    (LIST, "LIST");
}

impl FtpCommand {
    #[inline]
    pub(crate) fn as_str(&self) -> &'static str {
        self.0
    }
}
