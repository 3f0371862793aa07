//! Error types for the hello core library
//!
//! The C library's contracts treated bad pointers and unterminated buffers as
//! undefined behavior. Here every such condition is a value of [`Error`].

use thiserror::Error;

/// Main error type for hello operations
#[derive(Error, Debug)]
pub enum Error {
    /// Writing the greeting to its destination failed
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input bytes were not valid UTF-8
    #[error("Invalid UTF-8 in name at byte {position}")]
    InvalidUtf8 {
        position: usize,
    },

    /// Input bytes contained a NUL that cannot cross a C string boundary
    #[error("Name contains a NUL byte at position {position}")]
    InteriorNul {
        position: usize,
    },

    /// A required reference was absent
    #[error("Null pointer: {name}")]
    NullPointer {
        name: String,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an IO error with a short description of what was being written
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a null pointer error naming the offending argument
    pub fn null_pointer(name: impl Into<String>) -> Self {
        Self::NullPointer { name: name.into() }
    }
}
