//! Tests for the system error formatter.

use errstack::{codes, set_system_error, ErrorDomain};

// ENOENT on every supported target.
const NO_SUCH_FILE: i32 = 2;

#[test]
fn system_set_appends_os_error_text() {
    let mut error = None;

    set_system_error!(
        &mut error,
        ErrorDomain::Io,
        codes::IO_ERROR_OPEN_FAILED,
        NO_SUCH_FILE,
        "unable to open '{}'.",
        "data.db"
    );

    let error = error.unwrap();
    let expected = format!(
        "unable to open 'data.db'. {}",
        errstack::os_error_message(NO_SUCH_FILE)
    );
    assert_eq!(error.last_message(), Some(expected.as_str()));
    assert!(error.matches(ErrorDomain::Io, codes::IO_ERROR_OPEN_FAILED));
}

#[test]
fn system_set_appends_to_existing_chain() {
    let mut error = None;

    set_system_error!(
        &mut error,
        ErrorDomain::Io,
        codes::IO_ERROR_READ_FAILED,
        NO_SUCH_FILE,
        "unable to read block {}.",
        42
    );
    errstack::set_error!(
        &mut error,
        ErrorDomain::Runtime,
        codes::RUNTIME_ERROR_GET_FAILED,
        "unable to retrieve record."
    );

    let error = error.unwrap();
    assert_eq!(error.messages().len(), 2);
    // The first failure keeps identifying the chain.
    assert!(error.matches(ErrorDomain::Io, codes::IO_ERROR_READ_FAILED));
    assert_eq!(error.last_message(), Some("unable to retrieve record."));
}

#[test]
fn os_error_message_is_never_empty() {
    assert!(!errstack::os_error_message(NO_SUCH_FILE).is_empty());

    // Codes the platform does not know still render as its unknown-error
    // text, so a combined message is always complete.
    assert!(!errstack::os_error_message(999_999).is_empty());
}

#[test]
fn unknown_code_still_produces_combined_message() {
    let mut error = None;

    set_system_error!(
        &mut error,
        ErrorDomain::Io,
        codes::IO_ERROR_GENERIC,
        999_999,
        "unable to query device."
    );

    let error = error.unwrap();
    let message = error.last_message().unwrap();
    assert!(message.starts_with("unable to query device. "));
    assert!(message.len() > "unable to query device. ".len());
}
