//! Host status codes.

use serde::{Deserialize, Serialize};

/// Status code in the host's status space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCode {
    /// Operation succeeded
    #[default]
    Success,
    /// Generic failure
    Failure,
    /// Out of memory
    InsufficientMemory,
    /// A parameter had an invalid value
    InvalidParameter,
    /// Host license check failed
    LicenseFailure,
    /// A parameter was not recognized
    UnknownParameter,
    /// Functionality not implemented
    NotImplemented,
    /// Object not found
    NotFound,
    /// End of file reached
    EndOfFile,
}

impl StatusCode {
    /// Every status code, success first.
    pub const ALL: [StatusCode; 9] = [
        StatusCode::Success,
        StatusCode::Failure,
        StatusCode::InsufficientMemory,
        StatusCode::InvalidParameter,
        StatusCode::LicenseFailure,
        StatusCode::UnknownParameter,
        StatusCode::NotImplemented,
        StatusCode::NotFound,
        StatusCode::EndOfFile,
    ];

    /// Whether the code represents an error state.
    pub fn is_error(self) -> bool {
        self != StatusCode::Success
    }

    /// Whether the code is success.
    pub fn is_success(self) -> bool {
        !self.is_error()
    }

    /// Symbolic name.
    pub fn name(self) -> &'static str {
        match self {
            StatusCode::Success => "Success",
            StatusCode::Failure => "Failure",
            StatusCode::InsufficientMemory => "InsufficientMemory",
            StatusCode::InvalidParameter => "InvalidParameter",
            StatusCode::LicenseFailure => "LicenseFailure",
            StatusCode::UnknownParameter => "UnknownParameter",
            StatusCode::NotImplemented => "NotImplemented",
            StatusCode::NotFound => "NotFound",
            StatusCode::EndOfFile => "EndOfFile",
        }
    }

    /// The host's own textual description of the code.
    pub fn description(self) -> &'static str {
        match self {
            StatusCode::Success => "Success",
            StatusCode::Failure => "Unexpected Internal Failure",
            StatusCode::InsufficientMemory => "Insufficient Memory",
            StatusCode::InvalidParameter => "Invalid Parameter",
            StatusCode::LicenseFailure => "License Failure",
            StatusCode::UnknownParameter => "Unknown Parameter",
            StatusCode::NotImplemented => "Not Implemented",
            StatusCode::NotFound => "Object Not Found",
            StatusCode::EndOfFile => "End of File",
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
