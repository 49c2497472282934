// errstack
// Module: Error Helpers
//
// Copyright (c) 2026 The Errstack Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Helper functions for creating boxed errors directly.
//!
//! Each helper seeds a one-message error with its domain's generic code,
//! ready to slot into an `Option<Box<Error>>` handle. Call sites that need
//! a finer code or printf-style formatting use
//! [`set_error!`](crate::set_error) instead.

use crate::{codes, prelude::Box, Error, ErrorDomain};

/// Create a boxed argument error.
#[must_use]
pub fn argument_error(message: &str) -> Box<Error> {
    Box::new(Error::from_message(
        ErrorDomain::Arguments,
        codes::ARGUMENT_ERROR_GENERIC,
        message,
    ))
}

/// Create a boxed conversion error.
#[must_use]
pub fn conversion_error(message: &str) -> Box<Error> {
    Box::new(Error::from_message(
        ErrorDomain::Conversion,
        codes::CONVERSION_ERROR_GENERIC,
        message,
    ))
}

/// Create a boxed compression error.
#[must_use]
pub fn compression_error(message: &str) -> Box<Error> {
    Box::new(Error::from_message(
        ErrorDomain::Compression,
        codes::COMPRESSION_ERROR_GENERIC,
        message,
    ))
}

/// Create a boxed input/output error.
#[must_use]
pub fn io_error(message: &str) -> Box<Error> {
    Box::new(Error::from_message(
        ErrorDomain::Io,
        codes::IO_ERROR_GENERIC,
        message,
    ))
}

/// Create a boxed input error.
#[must_use]
pub fn input_error(message: &str) -> Box<Error> {
    Box::new(Error::from_message(
        ErrorDomain::Input,
        codes::INPUT_ERROR_GENERIC,
        message,
    ))
}

/// Create a boxed memory error.
#[must_use]
pub fn memory_error(message: &str) -> Box<Error> {
    Box::new(Error::from_message(
        ErrorDomain::Memory,
        codes::MEMORY_ERROR_GENERIC,
        message,
    ))
}

/// Create a boxed output error.
#[must_use]
pub fn output_error(message: &str) -> Box<Error> {
    Box::new(Error::from_message(
        ErrorDomain::Output,
        codes::OUTPUT_ERROR_GENERIC,
        message,
    ))
}

/// Create a boxed runtime error.
#[must_use]
pub fn runtime_error(message: &str) -> Box<Error> {
    Box::new(Error::from_message(
        ErrorDomain::Runtime,
        codes::RUNTIME_ERROR_GENERIC,
        message,
    ))
}
