/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2026 G3-OSS developers.
 */

mod command;
mod connect;
mod transport;

pub use command::FtpCommandError;
pub use connect::FtpConnectError;
pub use transport::FtpTransportError;
