// errstack
// Module: Operation Failure Kinds
//
// Copyright (c) 2026 The Errstack Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Failure kinds of the print and copy operations.
//!
//! These are the library's own failures, distinct from the application
//! failures an [`crate::Error`] represents. None of them retries and none
//! of them terminates the process; every one returns control to the caller
//! with a typed signal.

/// A failure of a print or copy operation.
#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    /// The handle holds no error.
    #[error("no error is set")]
    NotSet,

    /// The error object carries no messages.
    ///
    /// A chain built through the public operations always holds at least
    /// one message, so this signals a corrupted object. It is always a
    /// failure, never success with zero output.
    #[error("error holds no messages")]
    NoMessages,

    /// The caller-supplied buffer cannot hold the serialized messages.
    ///
    /// Nothing is written past the supplied capacity.
    #[error("buffer too small: need {needed} bytes, capacity is {capacity}")]
    BufferTooSmall {
        /// Bytes required, including the terminating NUL.
        needed:   usize,
        /// Capacity of the caller-supplied buffer.
        capacity: usize,
    },

    /// The underlying stream write failed.
    ///
    /// Output already written to the stream is not rolled back.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
