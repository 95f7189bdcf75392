pub mod console;
pub mod toml_config;

use crate::core::report::ReportFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_line_count, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use toml_config::TomlConfig;

/// Data file read when neither the command line nor TOML names one.
pub const DEFAULT_DATA_FILE: &str = "data.txt";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "serial-search")]
#[command(about = "Compare linear and binary search over serial-numbered records")]
pub struct CliConfig {
    /// Tab-separated data file: <time>\t<name>\t<serial number>
    #[arg(short, long)]
    pub file: Option<String>,

    /// Number of lines to load (10..=1000000); prompted for when omitted
    #[arg(short = 'n', long)]
    pub lines: Option<usize>,

    /// Serial number to search for; prompted for when omitted
    #[arg(short, long, allow_negative_numbers = true)]
    pub key: Option<i32>,

    /// TOML configuration file; command line values take precedence
    #[arg(short, long)]
    pub config: Option<String>,

    /// Report output format
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU and memory after each phase")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges the optional TOML file under the command line values.
    pub fn resolve(&self) -> Result<SearchSettings> {
        let toml = match &self.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => TomlConfig::default(),
        };

        let overrides = Overrides {
            path: self.file.clone(),
            lines: self.lines,
            key: self.key,
            format: self.format,
            monitor: self.monitor,
        };
        Ok(SearchSettings::resolve(&overrides, &toml))
    }
}

/// Values given explicitly by the operator; these win over TOML.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub path: Option<String>,
    pub lines: Option<usize>,
    pub key: Option<i32>,
    pub format: Option<ReportFormat>,
    pub monitor: bool,
}

/// Effective settings for one run. `lines` and `key` left as `None` are
/// asked for interactively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    pub path: String,
    pub lines: Option<usize>,
    pub key: Option<i32>,
    pub format: ReportFormat,
    pub monitor: bool,
}

impl SearchSettings {
    pub fn resolve(overrides: &Overrides, toml: &TomlConfig) -> Self {
        Self {
            path: overrides
                .path
                .clone()
                .or_else(|| toml.input.path.clone())
                .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string()),
            lines: overrides.lines.or(toml.input.lines),
            key: overrides.key.or(toml.search.key),
            format: overrides.format.or(toml.report.format).unwrap_or_default(),
            monitor: overrides.monitor || toml.monitoring.enabled,
        }
    }
}

impl Validate for SearchSettings {
    fn validate(&self) -> Result<()> {
        validate_path("file", &self.path)?;
        if let Some(lines) = self.lines {
            validate_line_count("lines", lines)?;
        }
        Ok(())
    }
}
