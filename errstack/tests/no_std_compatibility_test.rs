//! Exercises the surface that stays available without `std`.
//!
//! The stream printers and the system error formatter are `std`-gated;
//! everything touched here only needs `alloc`.

use errstack::{codes, set_error, ErrorDomain, LineEnding};

#[test]
fn alloc_only_surface_covers_set_match_sprint_free() {
    let mut error = None;

    set_error!(
        &mut error,
        ErrorDomain::Input,
        codes::INPUT_ERROR_CHECKSUM_MISMATCH,
        "checksum mismatch in segment {}.",
        3
    );
    set_error!(
        &mut error,
        ErrorDomain::Runtime,
        codes::RUNTIME_ERROR_GET_FAILED,
        "unable to retrieve segment."
    );

    assert!(errstack::matches(
        error.as_deref(),
        ErrorDomain::Input,
        codes::INPUT_ERROR_CHECKSUM_MISMATCH
    ));

    let mut buffer = [0u8; 128];
    let written =
        errstack::backtrace_sprint_with(error.as_deref(), &mut buffer, LineEnding::Lf).unwrap();
    assert_eq!(
        &buffer[..written],
        b"checksum mismatch in segment 3.\nunable to retrieve segment.\0"
    );

    errstack::free(&mut error);
    assert!(error.is_none());
}
