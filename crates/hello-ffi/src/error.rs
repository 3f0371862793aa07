//! Error handling for FFI boundary
//!
//! This module provides utilities for safely propagating errors
//! across the FFI boundary without panics or undefined behavior.

use std::any::Any;
use std::panic;

use crate::memory::set_last_error;
use crate::types::HelloResult;

/// Convert a core error to an FFI result code, recording its message
pub fn map_core_error(error: hello_core::Error) -> HelloResult {
    use hello_core::Error;

    set_last_error(error.to_string());

    match error {
        Error::Io { .. } => HelloResult::IoError,
        Error::InvalidUtf8 { .. } => HelloResult::Utf8Error,
        Error::InteriorNul { .. } => HelloResult::InvalidInput,
        Error::NullPointer { .. } => HelloResult::NullPointer,
    }
}

/// Safely execute a closure that might panic
///
/// A panic is converted to `InternalError` so it never unwinds into
/// foreign frames.
pub fn catch_panic<F, R>(f: F) -> Result<R, HelloResult>
where
    F: FnOnce() -> Result<R, HelloResult> + panic::UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(result) => result,
        Err(panic_info) => {
            let msg = get_panic_message(&panic_info);
            tracing::error!(panic = %msg, "Panic caught at FFI boundary");
            set_last_error(format!("Panic occurred: {}", msg));
            Err(HelloResult::InternalError)
        }
    }
}

/// Extract a message from panic info
fn get_panic_message(panic_info: &Box<dyn Any + Send>) -> String {
    if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

/// Run a checked FFI body, returning its code or the failure code
#[macro_export]
macro_rules! ffi_boundary {
    ($body:expr) => {{
        match $crate::error::catch_panic(|| $body) {
            Ok(result) => result,
            Err(code) => return code,
        }
    }};
}

/// Validate that a pointer is not null
pub fn validate_ptr<T>(ptr: *const T, name: &str) -> Result<(), HelloResult> {
    if ptr.is_null() {
        set_last_error(format!("{} is null", name));
        Err(HelloResult::NullPointer)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::clear_last_error;

    #[test]
    fn test_panic_catching() {
        let result = catch_panic(|| {
            panic!("Test panic");
            #[allow(unreachable_code)]
            Ok(42)
        });

        assert_eq!(result.unwrap_err(), HelloResult::InternalError);
        clear_last_error();
    }

    #[test]
    fn test_ptr_validation() {
        let value = 42;
        let ptr = &value as *const i32;

        assert!(validate_ptr(ptr, "test_ptr").is_ok());
        assert!(validate_ptr(std::ptr::null::<i32>(), "null_ptr").is_err());
        clear_last_error();
    }

    #[test]
    fn test_core_error_mapping() {
        let code = map_core_error(hello_core::Error::InteriorNul { position: 1 });
        assert_eq!(code, HelloResult::InvalidInput);

        let code = map_core_error(hello_core::Error::InvalidUtf8 { position: 0 });
        assert_eq!(code, HelloResult::Utf8Error);

        let code = map_core_error(hello_core::Error::null_pointer("out"));
        assert_eq!(code, HelloResult::NullPointer);
        clear_last_error();
    }
}
