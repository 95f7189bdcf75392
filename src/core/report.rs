use crate::domain::model::SearchOutcome;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{}' (expected text or json)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyReport {
    pub steps: usize,
    pub match_count: usize,
    pub matches: Vec<usize>,
}

impl From<SearchOutcome> for StrategyReport {
    fn from(outcome: SearchOutcome) -> Self {
        Self {
            steps: outcome.steps,
            match_count: outcome.matches.len(),
            matches: outcome.matches,
        }
    }
}

/// Side-by-side result of both strategies for one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub key: i32,
    pub lines_processed: usize,
    pub linear: StrategyReport,
    pub binary: StrategyReport,
}

impl SearchReport {
    pub fn new(
        key: i32,
        lines_processed: usize,
        linear: SearchOutcome,
        binary: SearchOutcome,
    ) -> Self {
        Self {
            key,
            lines_processed,
            linear: linear.into(),
            binary: binary.into(),
        }
    }

    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => self.render_json(),
        }
    }

    pub fn render_text(&self) -> String {
        self.to_string()
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search Key (Serial Number): {}", self.key)?;
        writeln!(f, "Number of Lines Processed: {}", self.lines_processed)?;
        write_section(f, "Linear Search", &self.linear)?;
        write_section(f, "Uniform Binary Search", &self.binary)
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, report: &StrategyReport) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "--- {} Results ---", title)?;
    writeln!(f, "Number of Search Steps: {}", report.steps)?;

    if report.matches.is_empty() {
        return writeln!(f, "No lines with matching serial number found");
    }

    let lines: Vec<String> = report.matches.iter().map(ToString::to_string).collect();
    writeln!(
        f,
        "Matching Original Line Numbers (Total {} lines): {}",
        report.match_count,
        lines.join(" ")
    )
}
