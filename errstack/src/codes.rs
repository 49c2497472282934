// errstack
// Module: Error Codes
//
// Copyright (c) 2026 The Errstack Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes grouped by domain.
//!
//! Each domain of [`crate::ErrorDomain`] owns a contiguous range; the
//! `*_GENERIC` constant of a range is the catch-all for failures the finer
//! codes do not cover.

// Argument error codes (1000-1999)
/// Generic argument error
pub const ARGUMENT_ERROR_GENERIC: u16 = 1000;
/// Invalid argument value
pub const ARGUMENT_ERROR_INVALID_VALUE: u16 = 1001;
/// Argument value less than zero
pub const ARGUMENT_ERROR_VALUE_LESS_THAN_ZERO: u16 = 1002;
/// Argument value zero or less
pub const ARGUMENT_ERROR_VALUE_ZERO_OR_LESS: u16 = 1003;
/// Argument value exceeds the allowed maximum
pub const ARGUMENT_ERROR_VALUE_EXCEEDS_MAXIMUM: u16 = 1004;
/// Argument value below the allowed minimum
pub const ARGUMENT_ERROR_VALUE_EXCEEDS_MINIMUM: u16 = 1005;
/// Unsupported argument value
pub const ARGUMENT_ERROR_UNSUPPORTED_VALUE: u16 = 1006;
/// Conflicting argument values
pub const ARGUMENT_ERROR_CONFLICTING_VALUE: u16 = 1007;

// Conversion error codes (2000-2999)
/// Generic conversion error
pub const CONVERSION_ERROR_GENERIC: u16 = 2000;
/// Conversion input failed
pub const CONVERSION_ERROR_INPUT_FAILED: u16 = 2001;
/// Conversion output failed
pub const CONVERSION_ERROR_OUTPUT_FAILED: u16 = 2002;

// Compression error codes (3000-3999)
/// Generic compression error
pub const COMPRESSION_ERROR_GENERIC: u16 = 3000;
/// Compression failed
pub const COMPRESSION_ERROR_COMPRESS_FAILED: u16 = 3001;
/// Decompression failed
pub const COMPRESSION_ERROR_UNCOMPRESS_FAILED: u16 = 3002;

// Input/output error codes (4000-4999)
/// Generic input/output error
pub const IO_ERROR_GENERIC: u16 = 4000;
/// Access denied
pub const IO_ERROR_ACCESS_DENIED: u16 = 4001;
/// Invalid resource
pub const IO_ERROR_INVALID_RESOURCE: u16 = 4002;
/// Close failed
pub const IO_ERROR_CLOSE_FAILED: u16 = 4003;
/// Open failed
pub const IO_ERROR_OPEN_FAILED: u16 = 4004;
/// Read failed
pub const IO_ERROR_READ_FAILED: u16 = 4005;
/// Seek failed
pub const IO_ERROR_SEEK_FAILED: u16 = 4006;
/// Write failed
pub const IO_ERROR_WRITE_FAILED: u16 = 4007;
/// Device control request failed
pub const IO_ERROR_IOCTL_FAILED: u16 = 4008;
/// Unlink failed
pub const IO_ERROR_UNLINK_FAILED: u16 = 4009;

// Input error codes (5000-5999)
/// Generic input error
pub const INPUT_ERROR_GENERIC: u16 = 5000;
/// Invalid input data
pub const INPUT_ERROR_INVALID_DATA: u16 = 5001;
/// Missing input data
pub const INPUT_ERROR_MISSING_DATA: u16 = 5002;
/// Input signature mismatch
pub const INPUT_ERROR_SIGNATURE_MISMATCH: u16 = 5003;
/// Input checksum mismatch
pub const INPUT_ERROR_CHECKSUM_MISMATCH: u16 = 5004;
/// Input value mismatch
pub const INPUT_ERROR_VALUE_MISMATCH: u16 = 5005;

// Memory error codes (6000-6999)
/// Generic memory error
pub const MEMORY_ERROR_GENERIC: u16 = 6000;
/// Insufficient memory
pub const MEMORY_ERROR_INSUFFICIENT: u16 = 6001;
/// Memory copy failed
pub const MEMORY_ERROR_COPY_FAILED: u16 = 6002;
/// Memory set failed
pub const MEMORY_ERROR_SET_FAILED: u16 = 6003;

// Output error codes (7000-7999)
/// Generic output error
pub const OUTPUT_ERROR_GENERIC: u16 = 7000;
/// Insufficient output space
pub const OUTPUT_ERROR_INSUFFICIENT_SPACE: u16 = 7001;

// Runtime error codes (8000-8999)
/// Generic runtime error
pub const RUNTIME_ERROR_GENERIC: u16 = 8000;
/// Abort requested
pub const RUNTIME_ERROR_ABORT_REQUESTED: u16 = 8001;
/// Copy failed
pub const RUNTIME_ERROR_COPY_FAILED: u16 = 8002;
/// Finalize failed
pub const RUNTIME_ERROR_FINALIZE_FAILED: u16 = 8003;
/// Get failed
pub const RUNTIME_ERROR_GET_FAILED: u16 = 8004;
/// Initialize failed
pub const RUNTIME_ERROR_INITIALIZE_FAILED: u16 = 8005;
/// Print failed
pub const RUNTIME_ERROR_PRINT_FAILED: u16 = 8006;
/// Resize failed
pub const RUNTIME_ERROR_RESIZE_FAILED: u16 = 8007;
/// Set failed
pub const RUNTIME_ERROR_SET_FAILED: u16 = 8008;
/// Unsupported value
pub const RUNTIME_ERROR_UNSUPPORTED_VALUE: u16 = 8009;
/// Value already set
pub const RUNTIME_ERROR_VALUE_ALREADY_SET: u16 = 8010;
/// Value exceeds the allowed maximum
pub const RUNTIME_ERROR_VALUE_EXCEEDS_MAXIMUM: u16 = 8011;
/// Value missing
pub const RUNTIME_ERROR_VALUE_MISSING: u16 = 8012;
/// Value out of bounds
pub const RUNTIME_ERROR_VALUE_OUT_OF_BOUNDS: u16 = 8013;
