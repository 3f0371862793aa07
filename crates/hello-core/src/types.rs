//! Validated argument types
//!
//! [`Name`] is a length-carrying UTF-8 string and [`OutSlot`] is writable
//! storage owned by the caller. Both are checked once, at construction, so the
//! operations that take them have no failure paths for bad input.

use std::borrow::Cow;
use std::ffi::CStr;
use std::fmt;

use crate::error::{Error, Result};

/// Name to greet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name<'a>(Cow<'a, str>);

impl<'a> Name<'a> {
    /// Borrow an existing Rust string
    pub fn new(name: &'a str) -> Self {
        Name(Cow::Borrowed(name))
    }

    /// Validate bytes handed over by a foreign caller.
    ///
    /// The bytes must be UTF-8 and must not contain NUL, since a NUL would
    /// silently truncate the name on the C side.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self> {
        if let Some(position) = bytes.iter().position(|&b| b == 0) {
            return Err(Error::InteriorNul { position });
        }

        let name = std::str::from_utf8(bytes).map_err(|e| Error::InvalidUtf8 {
            position: e.valid_up_to(),
        })?;

        Ok(Name(Cow::Borrowed(name)))
    }

    /// Validate a NUL-terminated C string
    pub fn from_c_str(name: &'a CStr) -> Result<Self> {
        let name = name.to_str().map_err(|e| Error::InvalidUtf8 {
            position: e.valid_up_to(),
        })?;

        Ok(Name(Cow::Borrowed(name)))
    }

    /// Accept any C string, replacing invalid UTF-8 with U+FFFD
    pub fn from_c_str_lossy(name: &'a CStr) -> Self {
        Name(name.to_string_lossy())
    }

    /// The validated text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the name is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> From<&'a str> for Name<'a> {
    fn from(name: &'a str) -> Self {
        Name::new(name)
    }
}

impl fmt::Display for Name<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Caller-owned storage that the callee may write exactly once
#[derive(Debug)]
pub struct OutSlot<'a, T> {
    slot: &'a mut T,
}

impl<'a, T> OutSlot<'a, T> {
    /// Wrap a mutable reference
    pub fn new(slot: &'a mut T) -> Self {
        Self { slot }
    }

    /// Wrap a raw pointer, rejecting null
    ///
    /// # Safety
    /// A non-null `ptr` must be valid for writes of `T`, properly aligned,
    /// and not aliased for the lifetime `'a`.
    pub unsafe fn from_raw(ptr: *mut T, name: &str) -> Result<Self> {
        match ptr.as_mut() {
            Some(slot) => Ok(Self { slot }),
            None => Err(Error::null_pointer(name)),
        }
    }

    /// Store `value`, consuming the slot
    pub fn write(self, value: T) -> &'a mut T {
        *self.slot = value;
        self.slot
    }
}
