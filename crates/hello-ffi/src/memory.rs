//! Memory management utilities for FFI
//!
//! Strings handed to the caller, the thread-local last-error slot, and
//! conversion of caller-owned C strings into validated names.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use hello_core::Name;

use crate::error::map_core_error;
use crate::types::HelloResult;

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Set the last error message for the current thread
pub fn set_last_error<S: Into<String>>(err: S) {
    let message = err.into();
    tracing::debug!(error = %message, "Recording FFI error");

    let error_string = CString::new(message.replace('\0', "\\0"))
        .unwrap_or_default();

    LAST_ERROR.with(|e| {
        *e.borrow_mut() = Some(error_string);
    });
}

/// Clear the last error message
pub fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Allocate a new string for FFI return
///
/// Returns null and records an error if `s` contains a NUL byte.
/// The caller must free a non-null result with `hello_string_free`.
pub fn allocate_string(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(c_str) => c_str.into_raw(),
        Err(_) => {
            set_last_error("String contains null byte");
            ptr::null_mut()
        }
    }
}

/// Free a string allocated by this library
///
/// # Safety
/// The pointer must have been returned by a `hello_*` function and not yet
/// freed. Null is accepted and ignored.
#[no_mangle]
pub unsafe extern "C" fn hello_string_free(s: *mut c_char) {
    if s.is_null() {
        return;
    }

    drop(CString::from_raw(s));
}

/// Borrow a C string as a validated [`Name`]
///
/// # Safety
/// A non-null `s` must point to a NUL-terminated string that stays valid for
/// the returned lifetime.
pub unsafe fn c_str_to_name<'a>(s: *const c_char, arg: &str) -> Result<Name<'a>, HelloResult> {
    if s.is_null() {
        set_last_error(format!("{} is null", arg));
        return Err(HelloResult::NullPointer);
    }

    Name::from_c_str(CStr::from_ptr(s)).map_err(map_core_error)
}

/// Get the last error message
///
/// Returns null when the current thread has no recorded error. The pointer
/// stays valid until the next `hello_*` call on the same thread and must NOT
/// be freed by the caller.
#[no_mangle]
pub extern "C" fn hello_get_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(err) => err.as_ptr(),
        None => ptr::null(),
    })
}

/// Clear the last error message
#[no_mangle]
pub extern "C" fn hello_clear_error() {
    clear_last_error();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_handling() {
        set_last_error("Test error");
        let error = hello_get_last_error();
        assert!(!error.is_null());
        let error_str = unsafe { CStr::from_ptr(error) }.to_str().unwrap();
        assert_eq!(error_str, "Test error");

        clear_last_error();
        assert!(hello_get_last_error().is_null());
    }

    #[test]
    fn test_error_with_nul_is_escaped() {
        set_last_error("bad\0byte");
        let error_str = unsafe { CStr::from_ptr(hello_get_last_error()) }
            .to_str()
            .unwrap();
        assert_eq!(error_str, "bad\\0byte");
        clear_last_error();
    }

    #[test]
    fn test_string_allocation() {
        let s = allocate_string("Hello, FFI!");
        assert!(!s.is_null());

        let c_str = unsafe { CStr::from_ptr(s) };
        assert_eq!(c_str.to_str().unwrap(), "Hello, FFI!");

        unsafe { hello_string_free(s) };
    }

    #[test]
    fn test_allocation_rejects_nul() {
        assert!(allocate_string("a\0b").is_null());
        assert!(!hello_get_last_error().is_null());
        clear_last_error();
    }

    #[test]
    fn test_null_name() {
        let result = unsafe { c_str_to_name(ptr::null(), "name") };
        assert_eq!(result.unwrap_err(), HelloResult::NullPointer);
        clear_last_error();
    }
}
