//! Write-constant command handler

use crate::cli::WriteConstantArgs;
use crate::error::Result;
use crate::output::OutputWriter;
use hello_core::OutSlot;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct WriteConstantOutput {
    before: i32,
    after: i32,
}

/// Handle the write-constant command
pub fn handle_write_constant(args: WriteConstantArgs, output: &mut OutputWriter) -> Result<()> {
    let mut slot = args.initial;
    hello_core::write_constant(OutSlot::new(&mut slot));

    let report = WriteConstantOutput {
        before: args.initial,
        after: slot,
    };
    tracing::debug!(before = report.before, after = report.after, "Wrote constant");

    if output.is_human() {
        output.info(&format!("slot held {}", report.before))?;
        output.writeln(&report.after.to_string())
    } else {
        output.data(&report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::output::tests::writer;

    #[test]
    fn test_write_constant_human() {
        let (mut output, buffer) = writer(OutputFormat::Human, false);
        handle_write_constant(WriteConstantArgs { initial: -7 }, &mut output).unwrap();
        assert_eq!(buffer.contents(), "INFO: slot held -7\n42\n");
    }

    #[test]
    fn test_write_constant_yaml() {
        let (mut output, buffer) = writer(OutputFormat::Yaml, false);
        handle_write_constant(WriteConstantArgs { initial: 5 }, &mut output).unwrap();
        assert_eq!(buffer.contents(), "before: 5\nafter: 42\n");
    }
}
