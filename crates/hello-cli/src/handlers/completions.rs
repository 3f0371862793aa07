//! Shell completions command handler

use crate::cli::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::output::OutputWriter;
use clap::CommandFactory;
use std::io;

/// Handle the completions command
///
/// Prints the script to stdout, or writes it into `--dir` when given.
pub fn handle_completions(args: CompletionsArgs, output: &mut OutputWriter) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    let shell = args.shell.to_clap_shell();

    match args.dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let path = clap_complete::generate_to(shell, &mut cmd, bin_name, &dir)?;
            output.success(&format!("✓ Wrote {} completions to {}", shell, path.display()))
        }
        None => {
            clap_complete::generate(shell, &mut cmd, bin_name, &mut io::stdout());
            Ok(())
        }
    }
}
