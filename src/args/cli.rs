use clap::Parser;

use super::defaults::{DEFAULT_DEST, DEFAULT_REQUEST_COUNT};
use super::parsers::{parse_no_color, parse_destination, parse_request_count};
use super::types::RequestMode;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Fire HTTP GET/PUT requests at a host with spoofed x-forwarded-for headers.",
    next_help_heading = "Advanced Options"
)]
pub struct GeneratorArgs {
    /// Destination host:port
    #[arg(
        long,
        env = "XFFGEN_DEST",
        default_value = DEFAULT_DEST,
        value_parser = parse_destination,
        help_heading = "Common Options"
    )]
    pub dest: String,

    /// Number of HTTP requests to send
    #[arg(
        long = "req",
        env = "XFFGEN_REQ",
        default_value = DEFAULT_REQUEST_COUNT,
        value_parser = parse_request_count,
        help_heading = "Common Options"
    )]
    pub request_count: u64,

    /// Use the valid forwarding address (default)
    #[arg(long, conflicts_with = "invalid", help_heading = "Common Options")]
    pub valid: bool,

    /// Use the invalid forwarding address
    #[arg(long, help_heading = "Common Options")]
    pub invalid: bool,

    /// Request path to drive
    #[arg(long, default_value = "variant", value_enum)]
    pub mode: RequestMode,

    /// Path to config file (TOML/JSON). Defaults to ./xffgen.toml or ./xffgen.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by XFFGEN_LOG/RUST_LOG)
    #[arg(long, short = 'v', alias = "debug")]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_no_color)]
    pub no_color: bool,
}

impl GeneratorArgs {
    /// Whether the variant path should send the valid forwarding address.
    #[must_use]
    pub const fn use_valid_header(&self) -> bool {
        !self.invalid
    }
}
