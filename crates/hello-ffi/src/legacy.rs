//! Exports with the C library's symbol names and signatures
//!
//! `hello`, `sqr` and `outputarg` keep their `void`/`double` C signatures so
//! existing callers load this library unchanged. Where the old contract was
//! undefined behavior, these versions do nothing and record a last error.

use std::ffi::CStr;
use std::os::raw::{c_char, c_int};

use hello_core::{Name, OutSlot};

use crate::error::{catch_panic, map_core_error};
use crate::memory::{clear_last_error, set_last_error};
use crate::types::HelloResult;

/// `void hello(char *name)`
///
/// Prints `Hello, <name>!` and a newline. Invalid UTF-8 is printed with
/// replacement characters rather than rejected.
///
/// # Safety
/// A non-null `name` must be a valid NUL-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn hello(name: *const c_char) {
    let _ = catch_panic(|| {
        clear_last_error();

        if name.is_null() {
            set_last_error("hello: name is null");
            return Err(HelloResult::NullPointer);
        }

        let name = Name::from_c_str_lossy(CStr::from_ptr(name));
        hello_core::greet(&name).map_err(map_core_error)
    });
}

/// `double sqr(double x)`
#[no_mangle]
pub extern "C" fn sqr(x: f64) -> f64 {
    hello_core::square(x)
}

/// `void outputarg(int *val)`
///
/// Stores 42 into `*val`.
///
/// # Safety
/// A non-null `val` must be valid for writes of an `int`.
#[no_mangle]
pub unsafe extern "C" fn outputarg(val: *mut c_int) {
    clear_last_error();

    match OutSlot::from_raw(val, "outputarg: val") {
        Ok(slot) => hello_core::write_constant(slot),
        Err(e) => {
            map_core_error(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::hello_get_last_error;

    #[test]
    fn test_sqr() {
        assert_eq!(sqr(3.0), 9.0);
        assert_eq!(sqr(-2.0), 4.0);
    }

    #[test]
    fn test_outputarg() {
        let mut val: c_int = -7;
        unsafe { outputarg(&mut val) };
        assert_eq!(val, 42);
        assert!(hello_get_last_error().is_null());
    }

    #[test]
    fn test_outputarg_null_is_reported() {
        unsafe { outputarg(std::ptr::null_mut()) };
        assert!(!hello_get_last_error().is_null());
        clear_last_error();
    }

    #[test]
    fn test_hello_null_is_reported() {
        unsafe { hello(std::ptr::null()) };
        assert!(!hello_get_last_error().is_null());
        clear_last_error();
    }
}
