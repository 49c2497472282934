// errstack
// Module: Backtraced Error Reporting
//
// Copyright (c) 2026 The Errstack Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Backtraced error reporting library
//!
//! This library provides a minimal error-reporting primitive: an error
//! object that accumulates a chain of human-readable messages as a failure
//! propagates up through call layers, tagged with a domain and a code that
//! identify the first recorded failure.
//!
//! # Error Domains
//!
//! Errors are organized into domains, each with its own range of error
//! codes:
//!
//! ## Argument Errors (1000-1999)
//! - Invalid, conflicting, or out-of-range argument values
//!
//! ## Conversion Errors (2000-2999)
//! - Input or output conversion failures
//!
//! ## Compression Errors (3000-3999)
//! - Compress and uncompress failures
//!
//! ## Input/Output Errors (4000-4999)
//! - Open, close, read, write, and seek failures
//!
//! ## Input Errors (5000-5999)
//! - Invalid, missing, or mismatching input data
//!
//! ## Memory Errors (6000-6999)
//! - Allocation, copy, and set failures
//!
//! ## Output Errors (7000-7999)
//! - Insufficient output space
//!
//! ## Runtime Errors (8000-8999)
//! - Get, set, initialize, resize, and print failures
//!
//! # Usage
//!
//! The caller-held handle is an `Option<Box<Error>>`. Setting an error on
//! an empty handle records the domain, the code, and the first message;
//! setting it again appends another message while the domain and code keep
//! identifying the first failure:
//!
//! ```
//! use errstack::{codes, ErrorDomain};
//!
//! fn open_config(error: &mut Option<Box<errstack::Error>>) -> bool {
//!     errstack::set_error!(
//!         error,
//!         ErrorDomain::Io,
//!         codes::IO_ERROR_OPEN_FAILED,
//!         "unable to open configuration file '{}'.",
//!         "app.conf"
//!     );
//!     false
//! }
//!
//! let mut error = None;
//! open_config(&mut error);
//!
//! assert!(errstack::matches(
//!     error.as_deref(),
//!     ErrorDomain::Io,
//!     codes::IO_ERROR_OPEN_FAILED
//! ));
//!
//! let mut buffer = [0u8; 64];
//! let written = match errstack::sprint(error.as_deref(), &mut buffer) {
//!     Ok(written) => written,
//!     Err(_) => 0,
//! };
//! assert_eq!(
//!     &buffer[..written - 1],
//!     b"unable to open configuration file 'app.conf'."
//! );
//!
//! errstack::free(&mut error);
//! assert!(error.is_none());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![warn(clippy::pedantic)]
#![warn(clippy::missing_panics_doc)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

// Standard library support
#[cfg(feature = "std")]
extern crate std;

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Error codes grouped by domain
pub mod codes;
/// The error object and its mutation operations
pub mod error;
/// Failure kinds of the print and copy operations
pub mod kinds;
/// Printing and serialization of the message backtrace
pub mod print;

// Modules
pub mod helpers;
pub mod prelude;

/// The system error formatter
#[cfg(feature = "std")]
pub mod system;

// Macros capturing printf-style format arguments
#[macro_use]
pub mod macros;

// Re-export key types
pub use error::{free, matches, set, Error, ErrorDomain, MESSAGE_MAXIMUM_SIZE};
pub use helpers::*;
pub use kinds::PrintError;
#[cfg(feature = "std")]
pub use print::{backtrace_fprint, backtrace_fprint_with, fprint};
pub use print::{backtrace_sprint, backtrace_sprint_with, sprint, Backtrace, LineEnding};
#[cfg(feature = "std")]
pub use system::{os_error_message, set_error as system_set_error};

/// A specialized `Result` type for print and copy operations.
///
/// This type alias uses [`PrintError`] as the error type; successful calls
/// carry the number of bytes written, terminating NUL included where the
/// operation copies one.
pub type Result<T> = core::result::Result<T, PrintError>;
