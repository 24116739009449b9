/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::connection::FtpTransport;
use crate::error::FtpCommandError;
use crate::listing::time_val;

mod response;
pub(crate) use response::FtpResponse;

mod command;
pub(crate) use command::FtpCommand;

/// One-command-at-a-time view of the control connection.
///
/// Each call sends exactly one command and waits for its reply under the
/// configured timeout. A transport failure yields an empty [`FtpResponse`];
/// the missing status line then fails the per-command code check like any
/// other unexpected reply.
pub(crate) struct FtpControlChannel<'a, T: FtpTransport> {
    transport: &'a mut T,
    command_timeout: Duration,
}

impl<'a, T: FtpTransport> FtpControlChannel<'a, T> {
    pub(crate) fn new(transport: &'a mut T, command_timeout: Duration) -> Self {
        FtpControlChannel {
            transport,
            command_timeout,
        }
    }

    pub(crate) async fn send(&mut self, command: &str) -> FtpResponse {
        #[cfg(feature = "log-raw-io")]
        crate::debug::log_cmd(command);

        let text = match tokio::time::timeout(
            self.command_timeout,
            self.transport.exec_command(command),
        )
        .await
        {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                log::debug!("command failed: {e}");
                return FtpResponse::empty();
            }
            Err(_) => {
                log::debug!("command timed out");
                return FtpResponse::empty();
            }
        };

        let rsp = FtpResponse::parse(&text);

        #[cfg(feature = "log-raw-io")]
        for line in rsp.lines() {
            crate::debug::log_rsp(line);
        }

        if rsp.code().is_none() {
            log::debug!("reply carried no status line ({} lines)", rsp.lines().len());
        }

        rsp
    }

    async fn send_cmd(&mut self, cmd: FtpCommand) -> FtpResponse {
        self.send(cmd.as_str()).await
    }

    async fn send_cmd1(&mut self, cmd: FtpCommand, param1: &str) -> FtpResponse {
        let verb = cmd.as_str();
        let mut buf = String::with_capacity(verb.len() + 1 + param1.len());
        buf.push_str(verb);
        buf.push(' ');
        buf.push_str(param1);
        self.send(&buf).await
    }

    async fn send_cmd2(&mut self, cmd: FtpCommand, param1: &str, param2: &str) -> FtpResponse {
        let verb = cmd.as_str();
        let mut buf = String::with_capacity(verb.len() + 1 + param1.len() + 1 + param2.len());
        buf.push_str(verb);
        buf.push(' ');
        buf.push_str(param1);
        buf.push(' ');
        buf.push_str(param2);
        self.send(&buf).await
    }

    fn check_code(
        cmd: FtpCommand,
        rsp: &FtpResponse,
        expected: u16,
    ) -> Result<(), FtpCommandError> {
        match rsp.code() {
            Some(n) if n == expected => Ok(()),
            Some(n) => Err(FtpCommandError::UnexpectedReplyCode(cmd, n)),
            None => Err(FtpCommandError::NoStatusLine(cmd)),
        }
    }

    pub(crate) async fn probe_help(&mut self) -> FtpResponse {
        self.send_cmd(FtpCommand::HELP).await
    }

    pub(crate) async fn set_use_utf8(&mut self) -> Result<(), FtpCommandError> {
        let cmd = FtpCommand::OPTS_UTF8_ON;
        let rsp = self.send_cmd(cmd).await;
        Self::check_code(cmd, &rsp, 200)
    }

    pub(crate) async fn set_working_dir(&mut self, path: &str) -> Result<(), FtpCommandError> {
        let cmd = FtpCommand::CWD;
        let rsp = self.send_cmd1(cmd, path).await;
        Self::check_code(cmd, &rsp, 250)
    }

    pub(crate) async fn rename_from(&mut self, path: &str) -> Result<(), FtpCommandError> {
        let cmd = FtpCommand::RNFR;
        let rsp = self.send_cmd1(cmd, path).await;
        Self::check_code(cmd, &rsp, 350)
    }

    pub(crate) async fn rename_to(&mut self, path: &str) -> Result<(), FtpCommandError> {
        let cmd = FtpCommand::RNTO;
        let rsp = self.send_cmd1(cmd, path).await;
        Self::check_code(cmd, &rsp, 250)
    }

    pub(crate) async fn delete_file(&mut self, path: &str) -> Result<(), FtpCommandError> {
        let cmd = FtpCommand::DELE;
        let rsp = self.send_cmd1(cmd, path).await;
        Self::check_code(cmd, &rsp, 250)
    }

    pub(crate) async fn remove_dir(&mut self, path: &str) -> Result<(), FtpCommandError> {
        let cmd = FtpCommand::RMD;
        let rsp = self.send_cmd1(cmd, path).await;
        Self::check_code(cmd, &rsp, 250)
    }

    pub(crate) async fn make_dir(&mut self, path: &str) -> Result<(), FtpCommandError> {
        let cmd = FtpCommand::MKD;
        let rsp = self.send_cmd1(cmd, path).await;
        Self::check_code(cmd, &rsp, 257)
    }

    pub(crate) async fn set_file_mode(
        &mut self,
        mode: u32,
        path: &str,
    ) -> Result<(), FtpCommandError> {
        let cmd = FtpCommand::SITE_CHMOD;
        let rsp = self.send_cmd2(cmd, &format!("{mode:o}"), path).await;
        Self::check_code(cmd, &rsp, 200)
    }

    pub(crate) async fn request_mtime(
        &mut self,
        path: &str,
    ) -> Result<DateTime<Utc>, FtpCommandError> {
        let cmd = FtpCommand::MDTM;
        let rsp = self.send_cmd1(cmd, path).await;
        Self::check_code(cmd, &rsp, 213)?;
        let value = rsp.message().unwrap_or_default();
        time_val::parse_from_str(value).map_err(|_| FtpCommandError::InvalidReplySyntax(cmd, 213))
    }
}
