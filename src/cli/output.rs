use crate::converter::{Conversion, Diagnostic};
use crate::error::CaseError;
use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Outcome of converting a single input
#[derive(Debug, Clone)]
pub struct ConversionRecord {
    pub input: String,
    pub result: Result<String, CaseError>,
    pub warnings: Vec<Diagnostic>,
}

impl ConversionRecord {
    pub fn new(input: &str, result: Result<String, CaseError>, warnings: Vec<Diagnostic>) -> Self {
        Self {
            input: input.to_string(),
            result,
            warnings,
        }
    }

    pub fn is_err(&self) -> bool {
        self.result.is_err()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonResult {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonError>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonError {
    kind: String,
    message: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    conversion: Conversion,
    total: usize,
    failed: usize,
    results: Vec<JsonResult>,
}

pub fn print_results(
    conversion: Conversion,
    records: &[ConversionRecord],
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_results(records, colored_output);
            Ok(())
        }
        OutputFormat::Json => print_json_results(conversion, records),
    }
}

fn print_text_results(records: &[ConversionRecord], colored_output: bool) {
    for record in records {
        match &record.result {
            Ok(output) => {
                println!("{}", output);
                for warning in &record.warnings {
                    print_warning(&warning.to_string(), colored_output);
                }
            }
            Err(e) => print_error(&record.input, e, colored_output),
        }
    }
}

fn to_json_output(conversion: Conversion, records: &[ConversionRecord]) -> JsonOutput {
    let results: Vec<JsonResult> = records
        .iter()
        .map(|r| JsonResult {
            input: r.input.clone(),
            output: r.result.as_ref().ok().cloned(),
            error: r.result.as_ref().err().map(|e| JsonError {
                kind: e.kind().to_string(),
                message: e.to_string(),
            }),
            warnings: r.warnings.iter().map(|w| w.to_string()).collect(),
        })
        .collect();

    JsonOutput {
        conversion,
        total: records.len(),
        failed: records.iter().filter(|r| r.is_err()).count(),
        results,
    }
}

fn print_json_results(conversion: Conversion, records: &[ConversionRecord]) -> Result<()> {
    let output = to_json_output(conversion, records);
    let json = serde_json::to_string_pretty(&output).context("Failed to serialize results")?;
    println!("{}", json);
    Ok(())
}

pub fn print_warning(message: &str, colored: bool) {
    if colored {
        eprintln!("{}", message.yellow());
    } else {
        eprintln!("{}", message);
    }
}

fn print_error(input: &str, error: &CaseError, colored: bool) {
    if colored {
        eprintln!("{} {:?}: {}", "✗".red().bold(), input, error);
    } else {
        eprintln!("✗ {:?}: {}", input, error);
    }
}

/// Print a one-line tally of rejected inputs to stderr
pub fn print_failure_summary(failed: usize, total: usize, colored: bool) {
    if failed == 0 {
        return;
    }

    let noun = if total == 1 { "input" } else { "inputs" };
    if colored {
        eprintln!(
            "{} {} of {} {} rejected",
            "✗".red().bold(),
            failed.to_string().red().bold(),
            total,
            noun
        );
    } else {
        eprintln!("✗ {} of {} {} rejected", failed, total, noun);
    }
}
