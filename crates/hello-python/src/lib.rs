//! Hello Python Bindings
//!
//! Exposes the hello operations as the `_hello` extension module. Python has
//! no out-parameters, so `write_constant` returns the stored value.

#![allow(non_local_definitions)] // PyO3 macros generate non-local impl blocks

use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

mod error;

use error::{to_py_err, HelloError};
use hello_core::Name;

/// Hello Python module
#[pymodule]
fn _hello(py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add("HelloError", py.get_type::<HelloError>())?;

    m.add_function(wrap_pyfunction!(greet, m)?)?;
    m.add_function(wrap_pyfunction!(greet_bytes, m)?)?;
    m.add_function(wrap_pyfunction!(greeting, m)?)?;
    m.add_function(wrap_pyfunction!(square, m)?)?;
    m.add_function(wrap_pyfunction!(write_constant, m)?)?;
    m.add_function(wrap_pyfunction!(answer, m)?)?;
    m.add_function(wrap_pyfunction!(version, m)?)?;

    Ok(())
}

/// Print `Hello, <name>!` to the process's standard output
///
/// Raises:
///     IOError: If standard output cannot be written
#[pyfunction]
fn greet(py: Python<'_>, name: &str) -> PyResult<()> {
    py.allow_threads(|| hello_core::greet(&Name::new(name)))
        .map_err(to_py_err)
}

/// Print a greeting for a UTF-8 encoded `bytes` name
///
/// Raises:
///     ValueError: If the bytes are not UTF-8 or contain NUL
#[pyfunction]
fn greet_bytes(py: Python<'_>, name: &[u8]) -> PyResult<()> {
    let name = Name::from_bytes(name).map_err(to_py_err)?;
    py.allow_threads(|| hello_core::greet(&name))
        .map_err(to_py_err)
}

/// Return the greeting line without its newline
#[pyfunction]
fn greeting(name: &str) -> String {
    hello_core::greeting(&Name::new(name))
}

/// Return `x * x`
#[pyfunction]
fn square(x: f64) -> f64 {
    hello_core::square(x)
}

/// Write the constant into fresh storage and return it
#[pyfunction]
fn write_constant() -> i32 {
    let mut value = 0;
    hello_core::write_constant_into(&mut value);
    value
}

/// The constant written by `write_constant`
#[pyfunction]
fn answer() -> i32 {
    hello_core::ANSWER
}

/// Get the version of the hello library
#[pyfunction]
fn version() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
