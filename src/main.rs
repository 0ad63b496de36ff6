use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::cli::output::{self, ConversionRecord, OutputFormat};
use recase::config::CliOverrides;
use recase::{CaseConverter, Config, Conversion, Diagnostic};
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert text between kebab-case, camelCase, dot.case and snake_case", long_about = None)]
struct Cli {
    /// Strings to convert (read from stdin, one per line, when omitted)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target conversion (kebab, camel, dot, snake, camel-normalized)
    #[arg(short = 't', long = "to", value_name = "CONVERSION")]
    conversion: Option<Conversion>,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some inputs are rejected
    #[arg(long)]
    no_fail: bool,

    /// Suppress leading-digit warnings
    #[arg(short, long)]
    quiet: bool,

    /// Keep accented letters instead of reducing them to their base form
    #[arg(long)]
    keep_diacritics: bool,

    /// Configuration file to load after the global and local ones
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(CliOverrides {
        config_path: cli.config.clone(),
        conversion: cli.conversion,
        format: cli.format,
        keep_diacritics: cli.keep_diacritics,
        quiet: cli.quiet,
    })?;

    let inputs = if cli.inputs.is_empty() {
        read_stdin_lines()?
    } else {
        cli.inputs.clone()
    };

    if inputs.is_empty() {
        anyhow::bail!("No input given. Pass strings as arguments or pipe them on stdin.");
    }

    let mut converter: CaseConverter<Vec<Diagnostic>> =
        CaseConverter::with_sink(config.converter_options(), Vec::new());

    let records: Vec<ConversionRecord> = inputs
        .iter()
        .map(|input| {
            let result = converter.convert(input, config.conversion);
            let warnings = std::mem::take(converter.sink_mut());
            ConversionRecord::new(input, result, warnings)
        })
        .collect();

    let colored = !cli.no_color;
    output::print_results(config.conversion, &records, colored, &config.format)?;

    let failed = records.iter().filter(|r| r.is_err()).count();
    if config.format == OutputFormat::Text {
        output::print_failure_summary(failed, records.len(), colored);
    }

    // Exit with appropriate code
    if failed > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to read input from stdin")
}
