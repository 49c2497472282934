// errstack
// Module: Format-Capturing Macros
//
// Copyright (c) 2026 The Errstack Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Macros capturing printf-style format arguments.
//!
//! The set operations take pre-captured `fmt::Arguments`; these macros are
//! the variadic entry points that capture them at the call site.

/// Set or append an error with a formatted message.
///
/// Expands to [`crate::set`] with the captured format arguments. On an
/// empty handle this records the domain and code and the first message; on
/// an occupied handle it appends another message.
///
/// # Examples
///
/// ```
/// use errstack::{codes, ErrorDomain};
///
/// let mut error = None;
/// errstack::set_error!(
///     &mut error,
///     ErrorDomain::Runtime,
///     codes::RUNTIME_ERROR_GET_FAILED,
///     "unable to retrieve value: {}.",
///     7
/// );
/// assert!(errstack::matches(
///     error.as_deref(),
///     ErrorDomain::Runtime,
///     codes::RUNTIME_ERROR_GET_FAILED
/// ));
/// ```
#[macro_export]
macro_rules! set_error {
    ($error:expr, $domain:expr, $code:expr, $($arg:tt)+) => {
        $crate::set($error, $domain, $code, ::core::format_args!($($arg)+))
    };
}

/// Set or append an error whose message carries an OS error rendering.
///
/// Expands to [`crate::system::set_error`] with the captured format
/// arguments; the OS error text is appended to the rendered message,
/// joined by a single space.
///
/// # Examples
///
/// ```
/// use errstack::{codes, ErrorDomain};
///
/// let mut error = None;
/// errstack::set_system_error!(
///     &mut error,
///     ErrorDomain::Io,
///     codes::IO_ERROR_OPEN_FAILED,
///     2,
///     "unable to open '{}'.",
///     "data.db"
/// );
/// assert!(error.is_some());
/// ```
#[cfg(feature = "std")]
#[macro_export]
macro_rules! set_system_error {
    ($error:expr, $domain:expr, $code:expr, $os_error:expr, $($arg:tt)+) => {
        $crate::system::set_error(
            $error,
            $domain,
            $code,
            $os_error,
            ::core::format_args!($($arg)+),
        )
    };
}
