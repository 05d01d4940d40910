//! Status Module
//!
//! Translation between host status codes and diagnostics:
//! - Host status space
//! - Status-carrying diagnostic and `throw_if`
//! - Catch-and-convert boundary for host-facing entry points

pub mod code;
pub mod diagnostic;

pub use code::StatusCode;
pub use diagnostic::{throw_if, throw_if_at, DiagResult, Diagnostic, UNSET_ORIGIN};

use std::panic::{self, AssertUnwindSafe};

/// Run `f` and convert its outcome into a status code for the host.
///
/// A returned diagnostic gets `origin` back-filled and is logged before its
/// status is handed back. A panic becomes `Failure`.
pub fn boundary<F>(origin: &str, f: F) -> StatusCode
where
    F: FnOnce() -> DiagResult<()>,
{
    match catch(f) {
        Ok(()) => StatusCode::Success,
        Err(mut diag) => {
            diag.fill_origin(origin);
            report(&diag);
            diag.into()
        }
    }
}

/// Log a diagnostic at error level.
pub fn report(diag: &Diagnostic) {
    tracing::error!(status = %diag.status(), "{}", diag);
}

/// Run `f`, turning a panic into a `Failure` diagnostic.
pub(crate) fn catch<T, F>(f: F) -> DiagResult<T>
where
    F: FnOnce() -> DiagResult<T>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => Err(Diagnostic::new(
            StatusCode::Failure,
            format!("panicked: {}", panic_message(payload.as_ref())),
        )),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
