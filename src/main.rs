//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `og_check` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Writing the report to stdout and choosing the exit code
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use std::process;

use og_check::initialization::init_logger_with;
use og_check::report::{render_failure, render_json, render_terminal, Stream};
use og_check::{evaluate_exit_code, run_check, Opt, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    // Help and version go to stdout with exit 0; every other parse error is a usage error
    let opt = match Opt::parse_permissive(std::env::args_os()) {
        Ok(opt) => opt,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };
    let config = opt.into_config();

    colored::control::set_override(config.color && config.output == OutputFormat::Terminal);
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_check(&config).await {
        Ok(result) => {
            match config.output {
                OutputFormat::Json => {
                    println!("{}", render_json(&result).context("Failed to serialize report")?)
                }
                OutputFormat::Terminal => println!("{}", render_terminal(&result)),
            }
            process::exit(evaluate_exit_code(&result, config.ci));
        }
        Err(e) => {
            match render_failure(&e, config.output) {
                (Stream::Stdout, text) => println!("{}", text),
                (Stream::Stderr, text) => eprintln!("{}", text),
            }
            process::exit(1);
        }
    }
}
