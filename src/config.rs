use crate::cli::output::OutputFormat;
use crate::converter::{Conversion, ConverterOptions};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".recase.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub conversion: Conversion,
    pub strip_diacritics: bool,
    pub warn_leading_digit: bool,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            conversion: Conversion::Kebab,
            strip_diacritics: true,
            warn_leading_digit: true,
            format: OutputFormat::Text,
        }
    }
}

/// A config file: every key is optional and only set keys override
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub conversion: Option<Conversion>,
    pub strip_diacritics: Option<bool>,
    pub warn_leading_digit: Option<bool>,
    pub format: Option<OutputFormat>,
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub conversion: Option<Conversion>,
    pub format: Option<OutputFormat>,
    pub keep_diacritics: bool,
    pub quiet: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > --config file > local config > global config > defaults
    pub fn load(overrides: CliOverrides) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            config = config.merge(Self::from_file(&local_path)?);
        }

        // Explicit config file must exist
        if let Some(path) = &overrides.config_path {
            config = config.merge(Self::from_file(path)?);
        }

        // Apply CLI overrides
        if let Some(conversion) = overrides.conversion {
            config.conversion = conversion;
        }
        if let Some(format) = overrides.format {
            config.format = format;
        }
        if overrides.keep_diacritics {
            config.strip_diacritics = false;
        }
        if overrides.quiet {
            config.warn_leading_digit = false;
        }

        debug!("effective config: {:?}", config);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn merge(mut self, other: ConfigFile) -> Self {
        if let Some(conversion) = other.conversion {
            self.conversion = conversion;
        }
        if let Some(strip) = other.strip_diacritics {
            self.strip_diacritics = strip;
        }
        if let Some(warn) = other.warn_leading_digit {
            self.warn_leading_digit = warn;
        }
        if let Some(format) = other.format {
            self.format = format;
        }
        self
    }

    pub fn converter_options(&self) -> ConverterOptions {
        ConverterOptions {
            strip_diacritics: self.strip_diacritics,
            warn_leading_digit: self.warn_leading_digit,
        }
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
