//! Checked FFI API
//!
//! Every function here validates its pointers, reports failure through a
//! [`HelloResult`] code, and leaves a message retrievable with
//! `hello_get_last_error`.

use std::os::raw::{c_char, c_int};
use std::slice;

use hello_core::{Name, OutSlot};

use crate::error::{map_core_error, validate_ptr};
use crate::memory::{allocate_string, c_str_to_name, clear_last_error, set_last_error};
use crate::types::HelloResult;

/// Print `Hello, <name>!` followed by a newline to standard output
///
/// # Returns
/// `Success`, `NullPointer`, `Utf8Error`, or `IoError`
///
/// # Safety
/// A non-null `name` must be a valid NUL-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn hello_greet(name: *const c_char) -> HelloResult {
    ffi_boundary!({
        clear_last_error();

        let name = c_str_to_name(name, "name")?;
        hello_core::greet(&name).map_err(map_core_error)?;

        Ok(HelloResult::Success)
    })
}

/// Print a greeting for a length-carrying name
///
/// The name is `len` bytes starting at `data`; no terminator is needed.
/// A null `data` is only accepted together with `len == 0`.
///
/// # Returns
/// `Success`, `NullPointer`, `Utf8Error`, `InvalidInput` (NUL in the name),
/// or `IoError`
///
/// # Safety
/// A non-null `data` must be valid for reads of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn hello_greet_n(data: *const u8, len: usize) -> HelloResult {
    ffi_boundary!({
        clear_last_error();

        let bytes: &[u8] = if data.is_null() {
            if len != 0 {
                set_last_error(format!("data is null but len is {}", len));
                return Err(HelloResult::NullPointer);
            }
            &[]
        } else {
            slice::from_raw_parts(data, len)
        };

        let name = Name::from_bytes(bytes).map_err(map_core_error)?;
        hello_core::greet(&name).map_err(map_core_error)?;

        Ok(HelloResult::Success)
    })
}

/// Build the greeting as a newly allocated string (no trailing newline)
///
/// # Parameters
/// - `name`: NUL-terminated UTF-8 name
/// - `out_greeting`: receives the string on success
///
/// # Safety
/// - A non-null `name` must be a valid NUL-terminated C string
/// - A non-null `out_greeting` must be writable
/// - The output string must be freed with `hello_string_free`
#[no_mangle]
pub unsafe extern "C" fn hello_greeting(
    name: *const c_char,
    out_greeting: *mut *mut c_char,
) -> HelloResult {
    ffi_boundary!({
        clear_last_error();

        validate_ptr(out_greeting, "out_greeting")?;
        let name = c_str_to_name(name, "name")?;

        let greeting = allocate_string(&hello_core::greeting(&name));
        if greeting.is_null() {
            return Err(HelloResult::MemoryError);
        }
        *out_greeting = greeting;

        Ok(HelloResult::Success)
    })
}

/// Square `x` into `out`
///
/// # Safety
/// A non-null `out` must be valid for writes of a `double`.
#[no_mangle]
pub unsafe extern "C" fn hello_square(x: f64, out: *mut f64) -> HelloResult {
    ffi_boundary!({
        clear_last_error();

        OutSlot::from_raw(out, "out")
            .map_err(map_core_error)?
            .write(hello_core::square(x));

        Ok(HelloResult::Success)
    })
}

/// Store 42 into `out`
///
/// # Safety
/// A non-null `out` must be valid for writes of an `int`.
#[no_mangle]
pub unsafe extern "C" fn hello_write_constant(out: *mut c_int) -> HelloResult {
    ffi_boundary!({
        clear_last_error();

        let slot = OutSlot::from_raw(out, "out").map_err(map_core_error)?;
        hello_core::write_constant(slot);

        Ok(HelloResult::Success)
    })
}

/// The constant written by `hello_write_constant` and `outputarg`
#[no_mangle]
pub extern "C" fn hello_answer() -> c_int {
    hello_core::ANSWER
}

/// Get version information
///
/// The returned string is static and should NOT be freed.
#[no_mangle]
pub extern "C" fn hello_version() -> *const c_char {
    concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_version() {
        let version = unsafe { CStr::from_ptr(hello_version()) };
        assert!(version.to_str().unwrap().starts_with("hello-ffi "));
    }

    #[test]
    fn test_square_into_slot() {
        let mut out = 0.0;
        let result = unsafe { hello_square(-2.0, &mut out) };
        assert_eq!(result, HelloResult::Success);
        assert_eq!(out, 4.0);
    }

    #[test]
    fn test_write_constant_null() {
        let result = unsafe { hello_write_constant(std::ptr::null_mut()) };
        assert_eq!(result, HelloResult::NullPointer);
        assert!(!crate::memory::hello_get_last_error().is_null());
        clear_last_error();
    }
}
