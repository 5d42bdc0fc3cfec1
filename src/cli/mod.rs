//! Command-line parsing for the `macro-pulse` binary.

use clap::Parser;

/// Fetch the latest FRED macro indicators and print them as JSON.
///
/// Reads `FRED_API_KEY` from the environment or a `.env` file in the working
/// directory.
#[derive(Debug, Parser)]
#[command(name = "macro-pulse", version, about = "Latest FRED macro indicators as JSON")]
pub struct Cli {
    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Log filter when `RUST_LOG` is unset (e.g. `info`, `macro_pulse=debug`).
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["macro-pulse"]);
        assert!(!cli.pretty);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn flags() {
        let cli = Cli::parse_from(["macro-pulse", "--pretty", "--log-level", "debug"]);
        assert!(cli.pretty);
        assert_eq!(cli.log_level, "debug");
    }
}
