//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::collections::BTreeMap;
use std::ffi::OsString;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_TIMEOUT_MS, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the check result is written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored terminal report (tag table, previews, issue list)
    Terminal,
    /// Pretty-printed JSON document
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through the command line.
///
/// # Examples
///
/// ```no_run
/// use og_check::Config;
///
/// let config = Config {
///     url: "https://example.com".to_string(),
///     timeout_ms: 5_000,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Normalized URL of the page to check
    pub url: String,

    /// Report format written to stdout
    pub output: OutputFormat,

    /// Exit non-zero when any error-severity issue is found
    pub ci: bool,

    /// Overall fetch timeout in milliseconds, including redirect hops
    pub timeout_ms: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Colorize terminal output
    pub color: bool,

    /// Unrecognized `--key value` options, kept verbatim
    pub extra_options: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            output: OutputFormat::Terminal,
            ci: false,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            color: true,
            extra_options: BTreeMap::new(),
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Terminal report
/// og_check example.com
///
/// # Machine-readable output for a CI pipeline
/// og_check https://example.com/blog/post --json --ci --timeout=5000
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "og_check",
    version,
    about = "Checks a page's Open Graph, Twitter Card and HTML metadata for social sharing.",
    after_help = "Exit codes: 0 = success, 1 = usage error, network error, or --ci with errors"
)]
pub struct Opt {
    /// URL to check (https:// is added when no scheme is given)
    pub url: Option<String>,

    /// Print a JSON report instead of the terminal report
    #[arg(long)]
    pub json: bool,

    /// Exit with code 1 when any error-severity issue is found
    #[arg(long)]
    pub ci: bool,

    /// Fetch timeout in milliseconds (covers all redirects)
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Disable colored output (also honored via NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// Unrecognized options, collected by `parse_permissive`
    #[arg(skip)]
    pub extra_options: BTreeMap<String, String>,
}

/// Long flags that take a value, in either `--flag value` or `--flag=value` form.
const VALUE_FLAGS: &[&str] = &["--timeout", "--user-agent", "--log-level", "--log-format"];

/// Flags understood by clap without a value.
const SWITCH_FLAGS: &[&str] = &[
    "--json",
    "--ci",
    "--no-color",
    "--help",
    "-h",
    "--version",
    "-V",
];

impl Opt {
    /// Parses arguments, accepting unknown `--key value` pairs.
    ///
    /// Known flags are handed to clap. Any other `--key` is stored in
    /// `extra_options`: `--key=value` and `--key value` keep the value, a
    /// bare `--key` (followed by another flag or nothing) stores `"true"`.
    pub fn parse_permissive<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<String> = args
            .into_iter()
            .map(|a| a.into().to_string_lossy().into_owned())
            .collect();
        let (known, extra) = split_extra_options(&args);
        let mut opt = Self::try_parse_from(known)?;
        opt.extra_options = extra;
        Ok(opt)
    }

    /// Converts parsed CLI options into the library configuration.
    ///
    /// The URL is copied as given; normalization happens in
    /// `validate_and_normalize_url` so usage errors are reported in one place.
    pub fn into_config(self) -> Config {
        let color = !self.no_color && std::env::var_os("NO_COLOR").is_none();
        Config {
            url: self.url.unwrap_or_default(),
            output: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Terminal
            },
            ci: self.ci,
            timeout_ms: self.timeout,
            user_agent: self.user_agent,
            log_level: self.log_level,
            log_format: self.log_format,
            color,
            extra_options: self.extra_options,
        }
    }
}

/// Separates unknown long options from the arguments clap understands.
///
/// The first element (program name) is always kept.
fn split_extra_options(args: &[String]) -> (Vec<String>, BTreeMap<String, String>) {
    let mut known = Vec::with_capacity(args.len());
    let mut extra = BTreeMap::new();
    let mut iter = args.iter().peekable();

    if let Some(program) = iter.next() {
        known.push(program.clone());
    }

    while let Some(arg) = iter.next() {
        if !arg.starts_with("--") || arg == "--" {
            known.push(arg.clone());
            continue;
        }

        let name = arg.split('=').next().unwrap_or(arg.as_str());
        if SWITCH_FLAGS.contains(&name) {
            known.push(arg.clone());
            continue;
        }
        if VALUE_FLAGS.contains(&name) {
            known.push(arg.clone());
            if !arg.contains('=') {
                if let Some(value) = iter.next() {
                    known.push(value.clone());
                }
            }
            continue;
        }

        let key = arg.trim_start_matches("--");
        if let Some((key, value)) = key.split_once('=') {
            extra.insert(key.to_string(), value.to_string());
        } else if let Some(value) = iter.next_if(|next| !next.starts_with("--")) {
            extra.insert(key.to_string(), value.clone());
        } else {
            extra.insert(key.to_string(), "true".to_string());
        }
    }

    (known, extra)
}
