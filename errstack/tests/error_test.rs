//! Tests for error construction, matching, and release.

use core::fmt;

use errstack::{codes, set_error, ErrorDomain, MESSAGE_MAXIMUM_SIZE};

#[test]
fn set_creates_error_on_empty_handle() {
    let mut error = None;

    set_error!(
        &mut error,
        ErrorDomain::Runtime,
        codes::RUNTIME_ERROR_GENERIC,
        "Test error."
    );

    let error = error.unwrap();
    assert_eq!(error.domain(), ErrorDomain::Runtime);
    assert_eq!(error.code(), codes::RUNTIME_ERROR_GENERIC);
    assert_eq!(error.messages(), ["Test error."]);
}

#[test]
fn set_appends_in_call_order() {
    let mut error = None;

    set_error!(
        &mut error,
        ErrorDomain::Runtime,
        codes::RUNTIME_ERROR_GENERIC,
        "Test error 1."
    );
    set_error!(
        &mut error,
        ErrorDomain::Runtime,
        codes::RUNTIME_ERROR_GENERIC,
        "Test error 2."
    );
    set_error!(
        &mut error,
        ErrorDomain::Runtime,
        codes::RUNTIME_ERROR_GENERIC,
        "Test error 3."
    );

    let error = error.unwrap();
    assert_eq!(
        error.messages(),
        ["Test error 1.", "Test error 2.", "Test error 3."]
    );
    assert_eq!(error.last_message(), Some("Test error 3."));
}

#[test]
fn domain_and_code_reflect_first_failure() {
    let mut error = None;

    set_error!(
        &mut error,
        ErrorDomain::Io,
        codes::IO_ERROR_READ_FAILED,
        "unable to read table header."
    );
    set_error!(
        &mut error,
        ErrorDomain::Runtime,
        codes::RUNTIME_ERROR_GET_FAILED,
        "unable to retrieve table."
    );

    assert!(errstack::matches(
        error.as_deref(),
        ErrorDomain::Io,
        codes::IO_ERROR_READ_FAILED
    ));
    assert!(!errstack::matches(
        error.as_deref(),
        ErrorDomain::Runtime,
        codes::RUNTIME_ERROR_GET_FAILED
    ));
}

#[test]
fn matches_requires_both_domain_and_code() {
    let error = errstack::io_error("unable to seek.");

    assert!(error.matches(ErrorDomain::Io, codes::IO_ERROR_GENERIC));
    assert!(!error.matches(ErrorDomain::Io, codes::IO_ERROR_SEEK_FAILED));
    assert!(!error.matches(ErrorDomain::Runtime, codes::IO_ERROR_GENERIC));
}

#[test]
fn matches_on_empty_handle_is_false() {
    assert!(!errstack::matches(
        None,
        ErrorDomain::Runtime,
        codes::RUNTIME_ERROR_GENERIC
    ));
}

#[test]
fn free_resets_handle() {
    let mut error = Some(errstack::runtime_error("Test error."));

    errstack::free(&mut error);
    assert!(error.is_none());

    // Releasing an empty handle is a no-op.
    errstack::free(&mut error);
    assert!(error.is_none());
}

#[test]
fn formatting_failure_leaves_error_untouched() {
    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    let mut error = None;
    set_error!(
        &mut error,
        ErrorDomain::Runtime,
        codes::RUNTIME_ERROR_GENERIC,
        "Test error 1."
    );

    let broken = Broken;
    set_error!(
        &mut error,
        ErrorDomain::Runtime,
        codes::RUNTIME_ERROR_GENERIC,
        "unable to render {broken}."
    );

    let error = error.unwrap();
    assert_eq!(error.messages(), ["Test error 1."]);
}

#[test]
fn formatting_failure_on_empty_handle_sets_nothing() {
    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    let mut error: Option<Box<errstack::Error>> = None;
    let broken = Broken;
    set_error!(
        &mut error,
        ErrorDomain::Runtime,
        codes::RUNTIME_ERROR_GENERIC,
        "unable to render {broken}."
    );

    assert!(error.is_none());
}

#[test]
fn oversized_message_is_truncated() {
    let filler = "x".repeat(MESSAGE_MAXIMUM_SIZE + 512);

    let mut error = None;
    set_error!(
        &mut error,
        ErrorDomain::Memory,
        codes::MEMORY_ERROR_INSUFFICIENT,
        "{filler}"
    );

    let error = error.unwrap();
    assert_eq!(error.messages()[0].len(), MESSAGE_MAXIMUM_SIZE);
}

#[test]
fn truncation_does_not_abort_later_appends() {
    let filler = "y".repeat(MESSAGE_MAXIMUM_SIZE * 2);

    let mut error = None;
    set_error!(
        &mut error,
        ErrorDomain::Memory,
        codes::MEMORY_ERROR_INSUFFICIENT,
        "{filler}"
    );
    set_error!(
        &mut error,
        ErrorDomain::Runtime,
        codes::RUNTIME_ERROR_GENERIC,
        "Test error."
    );

    let error = error.unwrap();
    assert_eq!(error.messages().len(), 2);
    assert_eq!(error.last_message(), Some("Test error."));
}

#[test]
fn helpers_seed_generic_codes() {
    let error = errstack::argument_error("invalid count value.");
    assert!(error.matches(ErrorDomain::Arguments, codes::ARGUMENT_ERROR_GENERIC));
    assert_eq!(error.last_message(), Some("invalid count value."));

    let error = errstack::memory_error("unable to allocate table.");
    assert!(error.matches(ErrorDomain::Memory, codes::MEMORY_ERROR_GENERIC));
}

#[test]
fn display_shows_most_recent_message() {
    let mut error = None;
    set_error!(
        &mut error,
        ErrorDomain::Runtime,
        codes::RUNTIME_ERROR_GENERIC,
        "Test error 1."
    );
    set_error!(
        &mut error,
        ErrorDomain::Runtime,
        codes::RUNTIME_ERROR_GENERIC,
        "Test error 2."
    );

    let error = error.unwrap();
    assert_eq!(error.to_string(), "[Runtime][E1F40] Test error 2.");
}
