//! FFI-safe type definitions
//!
//! All types in this module are designed to be safely passed across
//! the FFI boundary with C ABI compatibility.

/// Result codes for checked FFI operations
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelloResult {
    /// Operation completed successfully
    Success = 0,
    /// Input was rejected (e.g. a NUL inside a length-carrying name)
    InvalidInput = -1,
    /// Null pointer provided
    NullPointer = -2,
    /// Invalid UTF-8 string
    Utf8Error = -3,
    /// Writing to standard output failed
    IoError = -4,
    /// Memory allocation failure
    MemoryError = -5,
    /// Internal error, including caught panics
    InternalError = -6,
    /// Unknown error
    Unknown = -99,
}

impl HelloResult {
    /// Check if the result indicates success
    pub fn is_success(self) -> bool {
        self == HelloResult::Success
    }

    /// Get a human-readable error message
    pub fn error_message(self) -> &'static str {
        match self {
            HelloResult::Success => "Success",
            HelloResult::InvalidInput => "Invalid input parameters",
            HelloResult::NullPointer => "Null pointer provided",
            HelloResult::Utf8Error => "Invalid UTF-8 string",
            HelloResult::IoError => "Failed to write output",
            HelloResult::MemoryError => "Memory allocation failed",
            HelloResult::InternalError => "Internal error",
            HelloResult::Unknown => "Unknown error",
        }
    }
}
