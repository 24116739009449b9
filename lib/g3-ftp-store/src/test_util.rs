/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

use std::collections::{HashMap, VecDeque};
use std::io;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::connection::FtpTransport;
use crate::error::FtpTransportError;

/// Scripted transport for unit tests.
///
/// Control replies are consumed in order from a queue; listing payloads
/// are keyed by the exact command text; downloadable files by path. An
/// unscripted call fails like a dropped connection. All traffic is
/// journaled for assertions.
pub(crate) struct MockTransport {
    pub(crate) ping_ok: bool,
    pub(crate) fail_store: bool,
    replies: VecDeque<String>,
    listings: HashMap<String, String>,
    files: HashMap<String, Vec<u8>>,
    pub(crate) commands: Vec<String>,
    pub(crate) fetches: Vec<String>,
    pub(crate) stored: Vec<(String, Vec<u8>)>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        MockTransport {
            ping_ok: true,
            fail_store: false,
            replies: VecDeque::new(),
            listings: HashMap::new(),
            files: HashMap::new(),
            commands: Vec::new(),
            fetches: Vec::new(),
            stored: Vec::new(),
        }
    }

    pub(crate) fn push_reply(&mut self, text: &str) {
        self.replies.push_back(text.to_string());
    }

    pub(crate) fn add_listing(&mut self, command: &str, text: &str) {
        self.listings.insert(command.to_string(), text.to_string());
    }

    pub(crate) fn add_file(&mut self, path: &str, contents: &[u8]) {
        self.files.insert(path.to_string(), contents.to_vec());
    }
}

#[async_trait]
impl FtpTransport for MockTransport {
    async fn ping(&mut self) -> Result<(), FtpTransportError> {
        if self.ping_ok {
            Ok(())
        } else {
            Err(FtpTransportError::ConnectionClosed)
        }
    }

    async fn exec_command(&mut self, command: &str) -> Result<String, FtpTransportError> {
        self.commands.push(command.to_string());
        self.replies
            .pop_front()
            .ok_or(FtpTransportError::ConnectionClosed)
    }

    async fn retrieve_text(&mut self, command: &str) -> Result<String, FtpTransportError> {
        self.fetches.push(command.to_string());
        self.listings
            .get(command)
            .cloned()
            .ok_or(FtpTransportError::ConnectionClosed)
    }

    async fn store_file(
        &mut self,
        path: &str,
        data: &mut (dyn AsyncRead + Send + Unpin),
    ) -> Result<(), FtpTransportError> {
        if self.fail_store {
            return Err(FtpTransportError::TransferFailed(
                "upload rejected".to_string(),
            ));
        }
        let mut contents = Vec::new();
        data.read_to_end(&mut contents).await?;
        self.stored.push((path.to_string(), contents));
        Ok(())
    }

    async fn retrieve_file(
        &mut self,
        path: &str,
    ) -> Result<Box<dyn AsyncRead + Send + Unpin>, FtpTransportError> {
        match self.files.get(path) {
            Some(contents) => Ok(Box::new(io::Cursor::new(contents.clone()))),
            None => Err(FtpTransportError::ConnectionClosed),
        }
    }
}
