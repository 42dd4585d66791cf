//! Configuration management for partbench
//!
//! This module handles CLI argument parsing and logging setup.

use anyhow::{anyhow, Result};
use clap::builder::styling;
use clap::{value_parser, Arg, ArgMatches, ColorChoice, Command};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::info;

use crate::components::ComponentType;
use crate::error::CatalogError;

fn parse_component(s: &str) -> std::result::Result<ComponentType, CatalogError> {
    s.parse()
}

/// Build the CLI command
pub fn build_cli() -> Command {
    let styles = styling::Styles::styled()
        .header(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .usage(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .literal(styling::AnsiColor::Blue.on_default() | styling::Effects::BOLD)
        .placeholder(styling::AnsiColor::Cyan.on_default());

    Command::new("partbench")
        .about("partbench - Electronic component catalog and resistor color codes")
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no_progress")
                .long("no-progress")
                .help("Disable progress indicators")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("encode")
                .about("Encode a resistor value as four color bands")
                .arg(
                    Arg::new("value")
                        .help("Resistance in ohms")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    Arg::new("tolerance")
                        .short('t')
                        .long("tolerance")
                        .help("Tolerance in percent")
                        .value_parser(value_parser!(String))
                        .default_value("5"),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Apply component parameters from a CSV or spreadsheet file")
                .arg(
                    Arg::new("path")
                        .help("Sheet file (.csv, .xlsx, .xls, .ods)")
                        .required(true)
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("show")
                        .short('s')
                        .long("show")
                        .help("Component to display after the import")
                        .value_parser(parse_component)
                        .default_value("resistor"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Describe a component with its default parameters")
                .arg(
                    Arg::new("component")
                        .help("Component type, e.g. resistor, led, dcsource")
                        .value_parser(parse_component)
                        .default_value("resistor"),
                ),
        )
        .subcommand(Command::new("bands").about("Print the resistor color band table"))
}

/// What the user asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Encode { value: f64, tolerance: String },
    Import { path: PathBuf, show: ComponentType },
    Show { component: ComponentType },
    Bands,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub action: Action,

    /// Enable verbose logging
    pub verbose: bool,

    /// Disable progress bars
    pub no_progress: bool,
}

impl Config {
    /// Parse process arguments and set up logging
    pub fn from_args() -> Result<Self> {
        let config = Self::from_matches(&build_cli().get_matches())?;
        config.init_logging();

        if config.verbose {
            info!("Configuration: {:?}", config);
        }

        Ok(config)
    }

    /// Parse an explicit argument list without touching logging
    pub fn try_from_iter<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = build_cli().try_get_matches_from(args)?;
        Self::from_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let action = match matches.subcommand() {
            Some(("encode", sub)) => Action::Encode {
                value: sub
                    .get_one::<f64>("value")
                    .copied()
                    .ok_or_else(|| anyhow!("Resistor value is required"))?,
                tolerance: sub
                    .get_one::<String>("tolerance")
                    .cloned()
                    .unwrap_or_else(|| "5".to_string()),
            },
            Some(("import", sub)) => Action::Import {
                path: sub
                    .get_one::<PathBuf>("path")
                    .cloned()
                    .ok_or_else(|| anyhow!("Input path is required"))?,
                show: sub
                    .get_one::<ComponentType>("show")
                    .copied()
                    .unwrap_or(ComponentType::Resistor),
            },
            Some(("show", sub)) => Action::Show {
                component: sub
                    .get_one::<ComponentType>("component")
                    .copied()
                    .unwrap_or(ComponentType::Resistor),
            },
            Some(("bands", _)) => Action::Bands,
            _ => return Err(anyhow!("A subcommand is required")),
        };

        Ok(Config {
            action,
            verbose: matches.get_flag("verbose"),
            no_progress: matches.get_flag("no_progress"),
        })
    }

    /// Install the tracing subscriber. RUST_LOG takes precedence over the
    /// verbose flag.
    pub fn init_logging(&self) {
        let default_filter = if self.verbose { "info" } else { "off" };
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        if let Action::Import { path, .. } = &self.action {
            if !path.exists() {
                return Err(anyhow!("Input path does not exist: {}", path.display()));
            }
        }

        info!("Configuration validation completed successfully");
        Ok(())
    }
}
