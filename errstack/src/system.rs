// errstack
// Module: System Error Formatter
//
// Copyright (c) 2026 The Errstack Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The system error formatter.
//!
//! Wraps an operating-system error code (errno on Unix-like targets, the
//! last-error value on Windows) into the same message chain the plain
//! [`crate::set`] operation builds: the caller's rendered message and the
//! human-readable OS error text, joined by a single space.

use core::fmt;

use crate::{
    error::{self, Error, MessageWriter},
    prelude::{Box, String},
    ErrorDomain,
};

/// Set an error whose message carries the rendering of an OS error code.
///
/// The caller's format arguments are rendered exactly as in
/// [`crate::set`], then the OS error text for `os_error_code` is appended,
/// joined by a single space:
///
/// ```text
/// <caller message> <os-error-text>
/// ```
///
/// The combined message is truncated at
/// [`crate::MESSAGE_MAXIMUM_SIZE`] like any other, and the
/// create-or-append handle semantics are identical to [`crate::set`]: an
/// empty handle records the domain and code, an occupied one only gains a
/// message. A formatting failure discards the whole append and leaves the
/// handle untouched.
///
/// The printf-style entry point is the
/// [`set_system_error!`](crate::set_system_error) macro.
pub fn set_error(
    error: &mut Option<Box<Error>>,
    domain: ErrorDomain,
    code: u16,
    os_error_code: i32,
    args: fmt::Arguments<'_>,
) {
    let Some(message) = error::render(args) else {
        log::debug!("system error message discarded: formatting failed");
        return;
    };
    let mut writer = MessageWriter::from_string(message);
    writer.push_bounded(" ");
    writer.push_bounded(&os_error_message(os_error_code));
    error::set_message(error, domain, code, writer.into_string());
}

/// Get the human-readable text for an OS error code.
///
/// Backed by [`std::io::Error::from_raw_os_error`], which resolves the
/// platform's `strerror_r` / `FormatMessageW` rendering. The lookup cannot
/// fail: codes the platform does not know come back as its "unknown
/// error" text, so a combined message is always complete.
#[must_use]
pub fn os_error_message(code: i32) -> String {
    std::io::Error::from_raw_os_error(code).to_string()
}
