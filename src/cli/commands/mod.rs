//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule for maintainability:
//! - `lookup`: Federated product search
//! - `codes`: Validation, format conversion and code generation
//! - `settings`: Source listing and config file management

mod codes;
mod lookup;
mod settings;

use clap::{Parser, Subcommand, ValueEnum};
use tokio::runtime::Runtime;

use crate::barcode::{Barcode, CodeType};
use crate::config::{self, Config};
use crate::error::ResultExt;

pub use codes::{cmd_convert, cmd_generate, cmd_validate};
pub use lookup::cmd_lookup;
pub use settings::{cmd_config_init, cmd_config_path, cmd_sources};

/// Barcode Lookup CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// RapidAPI key (enables the Google Shopping sources)
    #[arg(long, global = true, env = "RAPIDAPI_KEY", hide_env_values = true)]
    pub rapidapi_key: Option<String>,

    /// UPCDatabase.org API key
    #[arg(long, global = true, env = "UPC_DATABASE_KEY", hide_env_values = true)]
    pub upc_database_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Identify a product by its barcode
    Lookup {
        /// Barcode to look up (separators are ignored)
        code: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a barcode and show its type and alternative formats
    Validate {
        /// Barcode to check
        code: String,
    },
    /// Convert a barcode to another format
    Convert {
        /// Barcode to convert
        code: String,
        /// Target format
        #[arg(long, value_enum)]
        to: Format,
    },
    /// Generate EAN-13 codes from a country prefix and product code
    Generate {
        /// Country prefix (1-3 digits)
        #[arg(short, long)]
        prefix: String,
        /// Product code (up to 8 digits)
        #[arg(short, long)]
        code: String,
        /// Generate one code instead of ten candidates
        #[arg(long)]
        single: bool,
    },
    /// List the sources consulted, in order
    Sources,
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config file actions
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the config file location
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Barcode formats accepted by `convert --to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Ean8,
    Upca,
    Ean13,
    Isbn10,
    Isbn13,
}

impl From<Format> for CodeType {
    fn from(format: Format) -> Self {
        match format {
            Format::Ean8 => CodeType::Ean8,
            Format::Upca => CodeType::UpcA,
            Format::Ean13 => CodeType::Ean13,
            Format::Isbn10 => CodeType::Isbn10,
            Format::Isbn13 => CodeType::Isbn13,
        }
    }
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Lookup { code, json } => {
            let rt = Runtime::new()?;
            cmd_lookup(&rt, &effective_config(cli), code, *json)
        }
        Commands::Validate { code } => cmd_validate(code),
        Commands::Convert { code, to } => cmd_convert(code, (*to).into()),
        Commands::Generate {
            prefix,
            code,
            single,
        } => cmd_generate(prefix, code, *single),
        Commands::Sources => cmd_sources(&effective_config(cli)),
        Commands::Config { action } => match action {
            ConfigAction::Path => cmd_config_path(),
            ConfigAction::Init { force } => cmd_config_init(*force),
        },
    }
}

/// Config file settings with command-line/environment keys applied on top.
fn effective_config(cli: &Cli) -> Config {
    let mut config = config::load();
    config
        .credentials
        .apply_overrides(cli.rapidapi_key.as_deref(), cli.upc_database_key.as_deref());
    config
}

/// Parse user input, naming the rejected input in the error.
pub(crate) fn parse_code(raw: &str) -> anyhow::Result<Barcode> {
    Ok(Barcode::parse(raw).with_context(format!("'{}'", raw.trim()))?)
}
