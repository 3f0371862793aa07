//! Greet command handler

use crate::cli::GreetArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;
use hello_core::Name;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct GreetOutput<'a> {
    name: &'a str,
    greeting: String,
}

/// Handle the greet command
pub fn handle_greet(args: GreetArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let name = config.resolve_name(args.name.as_deref());
    tracing::info!(name = %name, from_args = args.name.is_some(), "Greeting");

    let name = Name::new(name);
    if output.is_human() {
        output.greeting(&name)
    } else {
        output.data(&GreetOutput {
            name: name.as_str(),
            greeting: hello_core::greeting(&name),
        })
    }
}
