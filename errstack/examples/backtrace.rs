//! Builds an error chain across call layers and prints its backtrace.

use errstack::{codes, set_error, set_system_error, ErrorDomain};

fn read_config(error: &mut Option<Box<errstack::Error>>) -> bool {
    // ENOENT stands in for a real failed open.
    set_system_error!(
        error,
        ErrorDomain::Io,
        codes::IO_ERROR_OPEN_FAILED,
        2,
        "unable to open configuration file '{}'.",
        "app.conf"
    );
    false
}

fn startup(error: &mut Option<Box<errstack::Error>>) -> bool {
    if !read_config(error) {
        set_error!(
            error,
            ErrorDomain::Runtime,
            codes::RUNTIME_ERROR_INITIALIZE_FAILED,
            "unable to initialize application."
        );
        return false;
    }
    true
}

fn main() {
    let mut error = None;

    if !startup(&mut error) {
        if let Some(error) = error.as_deref() {
            eprintln!("startup failed: {error}");
            eprintln!("backtrace:\n{}", error.backtrace());
        }
        errstack::free(&mut error);
        std::process::exit(1);
    }
}
