//! Square command handler

use crate::cli::SquareArgs;
use crate::error::Result;
use crate::output::OutputWriter;
use serde::Serialize;

/// Serialized square result
///
/// JSON has no infinity, so an overflowed `result` serializes as `null`.
#[derive(Debug, Serialize)]
struct SquareOutput {
    x: f64,
    result: f64,
}

/// Handle the square command
pub fn handle_square(args: SquareArgs, output: &mut OutputWriter) -> Result<()> {
    let result = hello_core::square(args.x);
    tracing::debug!(x = args.x, result, "Squared");

    if output.is_human() {
        if result.is_infinite() && args.x.is_finite() {
            output.warning("Result overflowed to infinity")?;
        }
        output.writeln(&result.to_string())
    } else {
        output.data(&SquareOutput { x: args.x, result })
    }
}
