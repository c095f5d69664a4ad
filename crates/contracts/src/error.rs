//! Layered error definitions
//!
//! Categorized by source: platform / driver / parse

use thiserror::Error;

/// Unified error type
///
/// Nothing above the driver boundary is required to inspect these; the
/// dispatcher suppresses them uniformly.
#[derive(Debug, Error)]
pub enum HapticError {
    // ===== Platform Errors =====
    /// Platform has no vibration capability
    #[error("haptics unsupported on this platform")]
    Unsupported,

    /// Vibration permission denied by the platform
    #[error("haptics permission denied: {message}")]
    PermissionDenied { message: String },

    // ===== Driver Errors =====
    /// Transient driver failure
    #[error("driver '{driver}' failed: {message}")]
    Driver { driver: String, message: String },

    // ===== Parse Errors =====
    /// Unknown enum spelling
    #[error("unknown {what}: '{value}'")]
    UnknownName { what: String, value: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl HapticError {
    /// Create a permission-denied error
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: message.into(),
        }
    }

    /// Create a driver failure error
    pub fn driver(driver: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Driver {
            driver: driver.into(),
            message: message.into(),
        }
    }

    /// Create an unknown-name parse error
    pub fn unknown_name(what: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownName {
            what: what.into(),
            value: value.into(),
        }
    }
}
