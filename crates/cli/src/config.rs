//! Command-line and environment configuration.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use silomap_observability::LogConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Render pasted silo inventory rows (location, item, quantity).
#[derive(Debug, Clone, Parser)]
#[command(name = "silomap", version)]
pub struct Cli {
    /// File holding the pasted rows; omit or pass `-` to read stdin.
    pub input: Option<PathBuf>,

    #[arg(long, value_enum, env = "SILOMAP_FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Also print the floor-plan slot board (text output).
    #[arg(long)]
    pub board: bool,

    /// Also print the KPI summary (text output).
    #[arg(long)]
    pub summary: bool,

    /// Write logs to stderr as JSON lines.
    #[arg(long, env = "SILOMAP_LOG_JSON")]
    pub log_json: bool,
}

impl Cli {
    /// Input file, or `None` for stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            json: self.log_json,
            ..LogConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_read_stdin_as_text() {
        let cli = Cli::try_parse_from(["silomap"]).unwrap();
        assert_eq!(cli.input_path(), None);
        assert!(!cli.board);
        assert!(!cli.summary);
        assert_eq!(cli.log_config().default_filter, "warn");
    }

    #[test]
    fn dash_means_stdin() {
        let cli = Cli::try_parse_from(["silomap", "-"]).unwrap();
        assert_eq!(cli.input_path(), None);

        let cli = Cli::try_parse_from(["silomap", "stock.tsv"]).unwrap();
        assert_eq!(cli.input_path(), Some(Path::new("stock.tsv")));
    }

    #[test]
    fn format_and_sections_are_flags() {
        let cli =
            Cli::try_parse_from(["silomap", "--format", "json", "--board", "--summary", "--log-json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.board && cli.summary);
        assert!(cli.log_config().json);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["silomap", "--format", "html"]).is_err());
    }
}
