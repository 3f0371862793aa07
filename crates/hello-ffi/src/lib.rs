//! Hello FFI - C ABI boundary for the hello demonstration library
//!
//! Builds `libhello` with two sets of exports:
//!
//! - The legacy symbols `hello`, `sqr` and `outputarg`, signature-compatible
//!   with the C library they replace
//! - Checked `hello_*` functions that return a [`HelloResult`] code and leave
//!   a message behind for `hello_get_last_error`
//!
//! `build.rs` writes the matching header to `include/hello.h`.
//!
//! # Safety
//!
//! Pointer arguments are checked for null, and strings are checked for UTF-8
//! where the function says so. Callers must still ensure:
//! - Non-null pointers point to live, correctly sized memory
//! - Strings returned by the library are freed with `hello_string_free`
//! - Last-error pointers are not used after the next call on the same thread

#![warn(missing_docs)]

#[macro_use]
mod error;
mod api;
mod legacy;
mod memory;
mod types;

pub use api::*;
pub use legacy::{hello, outputarg, sqr};
pub use memory::{hello_clear_error, hello_get_last_error, hello_string_free};
pub use types::HelloResult;
