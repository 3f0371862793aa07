//! The greeter
//!
//! Formats `Hello, <name>!` and writes it, newline-terminated, to any
//! [`Write`] sink. [`greet`] targets standard output.

use std::io::{self, Write};

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::types::Name;

/// Build the greeting line without its trailing newline
pub fn greeting(name: &Name<'_>) -> String {
    format!("Hello, {}!", name)
}

/// Write the greeting line to `writer`
pub fn greet_to<W: Write>(writer: &mut W, name: &Name<'_>) -> Result<()> {
    trace!(name_len = name.len(), "Writing greeting");

    writeln!(writer, "{}", greeting(name))
        .map_err(|e| Error::io("writing greeting", e))?;
    writer
        .flush()
        .map_err(|e| Error::io("flushing greeting", e))
}

/// Write the greeting line to standard output
pub fn greet(name: &Name<'_>) -> Result<()> {
    debug!(name = %name, "Greeting on stdout");

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    greet_to(&mut handle, name)
}
