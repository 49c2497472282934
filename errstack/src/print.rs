// errstack
// Module: Backtrace Printing
//
// Copyright (c) 2026 The Errstack Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Printing and serialization of the message backtrace.
//!
//! Two independent axes give four operations: single message vs the whole
//! backtrace, and a writable stream vs a caller-supplied byte buffer. The
//! stream variants are `std`-gated; the buffer variants work without `std`.
//!
//! All four return [`crate::Result`] with the byte count written on
//! success. An empty handle fails with [`PrintError::NotSet`]; an object
//! whose message chain is empty — reachable only through corruption —
//! always fails with [`PrintError::NoMessages`] rather than printing
//! nothing.

use core::fmt;

#[cfg(feature = "std")]
use std::io;

use crate::{
    error::Error,
    kinds::PrintError,
    prelude::String,
    Result,
};

/// Line-ending convention placed between backtrace messages.
///
/// The convention is externally observable: it changes the byte counts the
/// backtrace operations return. It is selected per call site, with
/// [`LineEnding::NATIVE`] resolving the compilation target's convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// A single line feed, the Unix convention
    Lf,
    /// Carriage return and line feed, the Windows convention
    CrLf,
}

impl LineEnding {
    /// The convention of the compilation target.
    #[cfg(windows)]
    pub const NATIVE: Self = Self::CrLf;
    /// The convention of the compilation target.
    #[cfg(not(windows))]
    pub const NATIVE: Self = Self::Lf;

    /// Get the line-ending text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Write the most recently appended message to a stream.
///
/// No terminator is added beyond what the message itself embeds. Returns
/// the number of bytes written.
///
/// # Errors
///
/// Fails with [`PrintError::NotSet`] on an empty handle,
/// [`PrintError::NoMessages`] on a corrupted object, and
/// [`PrintError::Io`] when the stream write fails.
#[cfg(feature = "std")]
pub fn fprint<W: io::Write>(error: Option<&Error>, stream: &mut W) -> Result<usize> {
    let error = error.ok_or(PrintError::NotSet)?;
    let message = error.last_message().ok_or(PrintError::NoMessages)?;
    stream.write_all(message.as_bytes())?;
    Ok(message.len())
}

/// Write every message to a stream, oldest first, using the target's
/// native line ending.
///
/// # Errors
///
/// See [`backtrace_fprint_with`].
#[cfg(feature = "std")]
pub fn backtrace_fprint<W: io::Write>(error: Option<&Error>, stream: &mut W) -> Result<usize> {
    backtrace_fprint_with(error, stream, LineEnding::NATIVE)
}

/// Write every message to a stream, oldest first, each followed by the
/// given line ending.
///
/// Returns the total number of bytes written: the sum of each message's
/// length plus one line ending per message.
///
/// # Errors
///
/// Fails with [`PrintError::NotSet`] on an empty handle,
/// [`PrintError::NoMessages`] on a corrupted object, and
/// [`PrintError::Io`] when a stream write fails partway; output already
/// written is not rolled back.
#[cfg(feature = "std")]
pub fn backtrace_fprint_with<W: io::Write>(
    error: Option<&Error>,
    stream: &mut W,
    ending: LineEnding,
) -> Result<usize> {
    let error = error.ok_or(PrintError::NotSet)?;
    let messages = error.messages();
    if messages.is_empty() {
        return Err(PrintError::NoMessages);
    }
    let ending = ending.as_str();
    let mut written = 0;
    for message in messages {
        stream.write_all(message.as_bytes())?;
        stream.write_all(ending.as_bytes())?;
        written += message.len() + ending.len();
    }
    Ok(written)
}

/// Copy the most recently appended message into a caller-supplied buffer,
/// including a terminating NUL.
///
/// Returns the number of bytes copied, terminating NUL included.
///
/// # Errors
///
/// Fails with [`PrintError::NotSet`] on an empty handle,
/// [`PrintError::NoMessages`] on a corrupted object, and
/// [`PrintError::BufferTooSmall`] when the buffer cannot hold the message
/// and its NUL; nothing is written in that case. The buffer length is the
/// capacity, so an unrepresentable capacity cannot be supplied.
pub fn sprint(error: Option<&Error>, buffer: &mut [u8]) -> Result<usize> {
    let error = error.ok_or(PrintError::NotSet)?;
    let message = error.last_message().ok_or(PrintError::NoMessages)?;
    let needed = message.len() + 1;
    if buffer.len() < needed {
        return Err(PrintError::BufferTooSmall {
            needed,
            capacity: buffer.len(),
        });
    }
    buffer[..message.len()].copy_from_slice(message.as_bytes());
    buffer[message.len()] = 0;
    Ok(needed)
}

/// Copy the whole backtrace into a caller-supplied buffer using the
/// target's native line ending.
///
/// # Errors
///
/// See [`backtrace_sprint_with`].
pub fn backtrace_sprint(error: Option<&Error>, buffer: &mut [u8]) -> Result<usize> {
    backtrace_sprint_with(error, buffer, LineEnding::NATIVE)
}

/// Copy the whole backtrace into a caller-supplied buffer, messages oldest
/// first and separated by the given line ending, NUL-terminated at the
/// end.
///
/// The separator is placed between messages, not after the last one.
/// Returns the total number of bytes copied, terminating NUL included.
///
/// # Errors
///
/// Fails with [`PrintError::NotSet`] on an empty handle,
/// [`PrintError::NoMessages`] on a corrupted object, and
/// [`PrintError::BufferTooSmall`] when the buffer cannot hold the joined
/// messages and the NUL; nothing is written in that case.
pub fn backtrace_sprint_with(
    error: Option<&Error>,
    buffer: &mut [u8],
    ending: LineEnding,
) -> Result<usize> {
    let error = error.ok_or(PrintError::NotSet)?;
    let messages = error.messages();
    if messages.is_empty() {
        return Err(PrintError::NoMessages);
    }
    let separator = ending.as_str().as_bytes();
    let needed = messages.iter().map(String::len).sum::<usize>()
        + separator.len() * (messages.len() - 1)
        + 1;
    if buffer.len() < needed {
        return Err(PrintError::BufferTooSmall {
            needed,
            capacity: buffer.len(),
        });
    }
    let mut offset = 0;
    for (index, message) in messages.iter().enumerate() {
        if index > 0 {
            buffer[offset..offset + separator.len()].copy_from_slice(separator);
            offset += separator.len();
        }
        buffer[offset..offset + message.len()].copy_from_slice(message.as_bytes());
        offset += message.len();
    }
    buffer[offset] = 0;
    Ok(offset + 1)
}

/// Displays every message of an error, oldest first.
///
/// The messages are separated by the selected line ending, with no
/// trailing ending, matching what [`backtrace_sprint_with`] copies minus
/// the terminating NUL.
#[derive(Debug, Clone, Copy)]
pub struct Backtrace<'a> {
    error:  &'a Error,
    ending: LineEnding,
}

impl Error {
    /// Get a displayable view of the whole message chain, using the
    /// target's native line ending.
    #[must_use]
    pub const fn backtrace(&self) -> Backtrace<'_> {
        Backtrace {
            error:  self,
            ending: LineEnding::NATIVE,
        }
    }
}

impl Backtrace<'_> {
    /// Select an explicit line ending.
    #[must_use]
    pub const fn with_line_ending(self, ending: LineEnding) -> Self {
        Self {
            error: self.error,
            ending,
        }
    }
}

impl fmt::Display for Backtrace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, message) in self.error.messages().iter().enumerate() {
            if index > 0 {
                f.write_str(self.ending.as_str())?;
            }
            f.write_str(message)?;
        }
        Ok(())
    }
}
