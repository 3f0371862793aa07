//! hello-cli - command-line driver for the hello demonstration library
//!
//! Runs the greeter, squaring, and out-parameter operations through the
//! same safe API the C and Python bindings wrap.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands, OutputFormat};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;

fn main() {
    let cli = Cli::parse_args();

    let config = match Config::load_with_file(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(&e, !cli.no_color),
    };

    let use_color = cli.use_color() && config.output.color;
    control::set_override(use_color);

    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = run(cli, &config, use_color) {
        exit_with(&e, use_color);
    }
}

fn exit_with(error: &error::Error, use_color: bool) -> ! {
    eprintln!("{}", error::format_error(error, use_color));
    process::exit(error.exit_code());
}

/// Main application logic
fn run(cli: Cli, config: &Config, use_color: bool) -> Result<()> {
    let format = resolve_output_format(&cli, config);
    let mut output = OutputWriter::new(format, use_color, cli.quiet);

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        format = ?format,
        "Executing command"
    );

    let timer = Timer::new(command_name(&cli.command));
    let _entered = timer.span().enter();

    match cli.command {
        Commands::Greet(args) => handlers::handle_greet(args, config, &mut output),
        Commands::Square(args) => handlers::handle_square(args, &mut output),
        Commands::WriteConstant(args) => handlers::handle_write_constant(args, &mut output),
        Commands::Config(args) => handlers::handle_config(args, config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args, &mut output),
    }
}

/// Command-line format wins over the config file
fn resolve_output_format(cli: &Cli, config: &Config) -> OutputFormat {
    if let Some(format) = cli.output {
        return format;
    }

    OutputFormat::from_config_name(&config.output.format).unwrap_or_else(|| {
        tracing::warn!("Invalid output format in config: {}", config.output.format);
        OutputFormat::Human
    })
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Greet(_) => "greet",
        Commands::Square(_) => "square",
        Commands::WriteConstant(_) => "write_constant",
        Commands::Config(_) => "config",
        Commands::Completions(_) => "completions",
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let verbosity = cli.verbosity_level();
    let mut logging_config = LoggingConfig::from_verbosity(verbosity);

    logging_config.merge_with_file(&config.logging, verbosity);
    logging_config.merge_with_env();
    logging_config.ansi = !cli.no_color && config.output.color;

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
    }

    logging::init_logging(logging_config)
}
