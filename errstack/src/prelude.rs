// errstack
// Module: Prelude
//
// Copyright (c) 2026 The Errstack Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for errstack.
//!
//! Provides a unified set of imports for both `std` and `no_std` builds,
//! re-exporting the allocation types the crate's modules use together with
//! the crate's own public surface.

// Binary std/no_std choice
#[cfg(not(feature = "std"))]
pub use alloc::{
    boxed::Box,
    format,
    string::{String, ToString},
    vec,
    vec::Vec,
};
pub use core::{
    fmt,
    fmt::{Debug, Display},
};
#[cfg(feature = "std")]
pub use std::{
    boxed::Box,
    format,
    string::{String, ToString},
    vec,
    vec::Vec,
};

// Re-export error types from this crate
pub use crate::{
    codes,
    error::{free, matches, set, Error, ErrorDomain, MESSAGE_MAXIMUM_SIZE},
    kinds::PrintError,
    print::{backtrace_sprint, backtrace_sprint_with, sprint, Backtrace, LineEnding},
    Result,
};
// Re-export helper functions for creating errors
pub use crate::helpers::{
    argument_error,
    compression_error,
    conversion_error,
    input_error,
    io_error,
    memory_error,
    output_error,
    runtime_error,
};
#[cfg(feature = "std")]
pub use crate::print::{backtrace_fprint, backtrace_fprint_with, fprint};
#[cfg(feature = "std")]
pub use crate::system::{os_error_message, set_error as system_set_error};
