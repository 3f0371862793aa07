//! Error handling for Python bindings
//!
//! Maps core errors onto Python exceptions.

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyIOError, PyValueError};
use pyo3::prelude::*;

create_exception!(_hello, HelloError, PyException);

/// Convert a core error to the matching Python exception
pub fn to_py_err(error: hello_core::Error) -> PyErr {
    use hello_core::Error;

    let message = error.to_string();
    match error {
        Error::Io { .. } => PyIOError::new_err(message),
        Error::InvalidUtf8 { .. } | Error::InteriorNul { .. } => PyValueError::new_err(message),
        Error::NullPointer { .. } => HelloError::new_err(message),
    }
}
