// errstack
// Module: Error Object
//
// Copyright (c) 2026 The Errstack Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The error object and its mutation operations.
//!
//! An [`Error`] owns an ordered chain of rendered messages, oldest first,
//! together with the domain and code of the first recorded failure. Callers
//! hold it through an `Option<Box<Error>>` handle: [`set`] creates the
//! object on an empty handle and appends to an occupied one, [`matches`]
//! probes the handle without requiring it to be occupied, and [`free`]
//! releases it and resets the handle.

use core::fmt;

use crate::prelude::{Box, String, Vec};

/// Maximum rendered size of a single message, in bytes.
///
/// A rendering that would exceed this bound is truncated on a `char`
/// boundary; the truncation is not an error. Growth across multiple
/// appended messages remains unbounded.
pub const MESSAGE_MAXIMUM_SIZE: usize = 64 * 1024;

/// Error domains
///
/// The domain is the coarse category tag of a failure; the fine-grained
/// code constants for each domain live in [`crate::codes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorDomain {
    /// Invalid argument or parameter errors
    Arguments   = 1,
    /// Value conversion errors
    Conversion  = 2,
    /// Compression and decompression errors
    Compression = 3,
    /// Input/output errors
    Io          = 4,
    /// Malformed or unexpected input data errors
    Input       = 5,
    /// Memory allocation and copy errors
    Memory      = 6,
    /// Output production errors
    Output      = 7,
    /// Runtime errors
    Runtime     = 8,
}

/// A failure together with its accumulated message backtrace.
///
/// The domain and code are fixed when the object is created and keep
/// identifying the *first* recorded failure even as later layers append
/// further messages. The object is never created with an empty message
/// chain; every append either stores a complete message or leaves the
/// chain exactly as it was.
#[derive(Debug, Clone)]
pub struct Error {
    domain:   ErrorDomain,
    code:     u16,
    messages: Vec<String>,
}

impl Error {
    /// Create an error holding a single pre-rendered message.
    ///
    /// The message is truncated at [`MESSAGE_MAXIMUM_SIZE`] like any
    /// rendered one.
    #[must_use]
    pub fn from_message(domain: ErrorDomain, code: u16, message: &str) -> Self {
        let mut writer = MessageWriter::new();
        writer.push_bounded(message);
        Self {
            domain,
            code,
            messages: crate::prelude::vec![writer.into_string()],
        }
    }

    /// Get the error domain of the first recorded failure.
    #[must_use]
    pub const fn domain(&self) -> ErrorDomain {
        self.domain
    }

    /// Get the error code of the first recorded failure.
    #[must_use]
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// Check whether this error carries the given domain and code.
    #[must_use]
    pub fn matches(&self, domain: ErrorDomain, code: u16) -> bool {
        self.domain == domain && self.code == code
    }

    /// Get the accumulated messages, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get the most recently appended message.
    ///
    /// `None` signals a corrupted object; a chain created through the
    /// public operations always holds at least one message.
    #[must_use]
    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    /// Append a rendered message, keeping the prior chain intact when the
    /// storage cannot grow.
    fn push_message(&mut self, message: String) {
        if self.messages.try_reserve(1).is_err() {
            #[cfg(feature = "std")]
            log::debug!("error message discarded: message storage could not grow");
            return;
        }
        self.messages.push(message);
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.domain,
            self.code,
            self.last_message().unwrap_or_default()
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Set an error, creating the object on an empty handle.
///
/// On an empty handle this allocates a new [`Error`], stores the domain and
/// code, and appends the rendered message as element 0. On an occupied
/// handle it appends another message; the stored domain and code are left
/// untouched so they keep reflecting the first recorded failure.
///
/// A rendering longer than [`MESSAGE_MAXIMUM_SIZE`] is truncated. If the
/// formatting itself fails (a `Display` implementation reporting
/// `fmt::Error`) the whole append is discarded and the handle keeps the
/// state it had before the call; the discard is logged at debug level.
///
/// The printf-style entry point is the [`set_error!`](crate::set_error)
/// macro, which captures the format arguments and delegates here.
pub fn set(
    error: &mut Option<Box<Error>>,
    domain: ErrorDomain,
    code: u16,
    args: fmt::Arguments<'_>,
) {
    let Some(message) = render(args) else {
        #[cfg(feature = "std")]
        log::debug!("error message discarded: formatting failed");
        return;
    };
    set_message(error, domain, code, message);
}

/// Check whether the handle holds an error with the given domain and code.
///
/// An empty handle always yields `false`, never an error, so callers can
/// probe without a prior occupancy check.
#[must_use]
pub fn matches(error: Option<&Error>, domain: ErrorDomain, code: u16) -> bool {
    error.is_some_and(|error| error.matches(domain, code))
}

/// Release the error and reset the handle.
///
/// An empty handle is a documented no-op. After the call the handle is
/// empty, so releasing twice through the same handle is harmless.
pub fn free(error: &mut Option<Box<Error>>) {
    *error = None;
}

/// Create-or-append on a message that is already rendered and bounded.
pub(crate) fn set_message(
    error: &mut Option<Box<Error>>,
    domain: ErrorDomain,
    code: u16,
    message: String,
) {
    match error {
        Some(existing) => existing.push_message(message),
        None => {
            *error = Some(Box::new(Error {
                domain,
                code,
                messages: crate::prelude::vec![message],
            }));
        },
    }
}

/// Render format arguments into a bounded message.
///
/// Returns `None` when the underlying formatting fails; an oversized
/// rendering is truncated instead.
pub(crate) fn render(args: fmt::Arguments<'_>) -> Option<String> {
    let mut writer = MessageWriter::new();
    match fmt::write(&mut writer, args) {
        Ok(()) => Some(writer.into_string()),
        Err(fmt::Error) => None,
    }
}

/// Accumulates rendered text up to [`MESSAGE_MAXIMUM_SIZE`] bytes.
///
/// Overflow is swallowed rather than reported, so an `Err` out of
/// `fmt::write` can only mean the formatted value itself failed.
pub(crate) struct MessageWriter {
    buffer: String,
}

impl MessageWriter {
    pub(crate) const fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    pub(crate) fn from_string(buffer: String) -> Self {
        let mut writer = Self { buffer };
        writer.truncate_to_bound();
        writer
    }

    pub(crate) fn push_bounded(&mut self, s: &str) {
        let room = MESSAGE_MAXIMUM_SIZE.saturating_sub(self.buffer.len());
        if room == 0 {
            return;
        }
        if s.len() <= room {
            self.buffer.push_str(s);
            return;
        }
        let mut end = room;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.buffer.push_str(&s[..end]);
    }

    pub(crate) fn into_string(self) -> String {
        self.buffer
    }

    fn truncate_to_bound(&mut self) {
        if self.buffer.len() <= MESSAGE_MAXIMUM_SIZE {
            return;
        }
        let mut end = MESSAGE_MAXIMUM_SIZE;
        while !self.buffer.is_char_boundary(end) {
            end -= 1;
        }
        self.buffer.truncate(end);
    }
}

impl fmt::Write for MessageWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_bounded(s);
        Ok(())
    }
}
