//! Status-carrying diagnostic.
//!
//! The error type that flows through the framework's own call graph. It
//! pairs a host status code with a message and the label of the place that
//! raised it, and is turned back into a bare status code at the boundary.

use crate::status::code::StatusCode;
use thiserror::Error;

/// Origin text used when no label was ever attached.
pub const UNSET_ORIGIN: &str = "<unlogged>";

/// Result type for operations that fail with a [`Diagnostic`].
pub type DiagResult<T> = std::result::Result<T, Diagnostic>;

/// A status code plus message plus origin label.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{}", self.format(None))]
pub struct Diagnostic {
    status: StatusCode,
    message: String,
    origin: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic with an unset origin.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            origin: None,
        }
    }

    /// Attach an origin label.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Status code carried.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Free-text message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Origin label, if one was attached.
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Set the origin only if it is still unset.
    pub fn fill_origin(&mut self, origin: &str) {
        if self.origin.is_none() {
            self.origin = Some(origin.to_string());
        }
    }

    /// Render the operator-facing line:
    /// `[Name] origin : message(host description)`.
    ///
    /// An explicit origin wins over `origin_override`.
    pub fn format(&self, origin_override: Option<&str>) -> String {
        let origin = self
            .origin
            .as_deref()
            .or(origin_override)
            .unwrap_or(UNSET_ORIGIN);
        format!(
            "[{}] {} : {}({})",
            self.status.name(),
            origin,
            self.message,
            self.status.description()
        )
    }
}

impl From<Diagnostic> for StatusCode {
    fn from(diag: Diagnostic) -> Self {
        diag.status
    }
}

impl PartialEq<StatusCode> for Diagnostic {
    fn eq(&self, other: &StatusCode) -> bool {
        self.status == *other
    }
}

/// Raise a diagnostic when `status` is an error; no-op on success.
pub fn throw_if(status: StatusCode, message: impl Into<String>) -> DiagResult<()> {
    if status.is_error() {
        return Err(Diagnostic::new(status, message));
    }
    Ok(())
}

/// [`throw_if`] with an explicit origin label.
pub fn throw_if_at(
    status: StatusCode,
    message: impl Into<String>,
    origin: impl Into<String>,
) -> DiagResult<()> {
    throw_if(status, message).map_err(|d| d.with_origin(origin))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throw_if_every_status() {
        for code in StatusCode::ALL {
            let result = throw_if(code, "probe");
            if code == StatusCode::Success {
                assert!(result.is_ok());
            } else {
                let diag = result.unwrap_err();
                assert_eq!(diag.status(), code);
                assert_eq!(diag.message(), "probe");
                assert!(diag.origin().is_none());
            }
        }
    }

    #[test]
    fn test_throw_if_at_sets_origin() {
        let diag = throw_if_at(StatusCode::NotFound, "gone", "lookup").unwrap_err();
        assert_eq!(diag.origin(), Some("lookup"));
        assert!(throw_if_at(StatusCode::Success, "fine", "lookup").is_ok());
    }

    #[test]
    fn test_format_uses_override_only_when_unset() {
        let diag = Diagnostic::new(StatusCode::InvalidParameter, "bad plug");
        assert_eq!(
            diag.format(Some("compute")),
            "[InvalidParameter] compute : bad plug(Invalid Parameter)"
        );
        assert_eq!(
            diag.format(None),
            "[InvalidParameter] <unlogged> : bad plug(Invalid Parameter)"
        );

        let labelled = diag.with_origin("initialize");
        assert_eq!(
            labelled.format(Some("compute")),
            "[InvalidParameter] initialize : bad plug(Invalid Parameter)"
        );
    }

    #[test]
    fn test_fill_origin_keeps_existing() {
        let mut diag = Diagnostic::new(StatusCode::Failure, "x").with_origin("first");
        diag.fill_origin("second");
        assert_eq!(diag.origin(), Some("first"));

        let mut unset = Diagnostic::new(StatusCode::Failure, "x");
        unset.fill_origin("second");
        assert_eq!(unset.origin(), Some("second"));
    }

    #[test]
    fn test_conversions() {
        let diag = Diagnostic::new(StatusCode::EndOfFile, "eof").with_origin("reader");
        assert_eq!(diag.to_string(), diag.format(None));
        assert!(diag == StatusCode::EndOfFile);
        let code: StatusCode = diag.into();
        assert_eq!(code, StatusCode::EndOfFile);
    }
}
