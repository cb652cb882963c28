//! # cashvm-cli
//!
//! Command-line interface for the CashVM opcode browser.
//!
//! ## Usage
//!
//! ```bash
//! # Table queries
//! cashvm table
//! cashvm show OP_CHECKSIG
//! cashvm show 0x7e
//! cashvm search sig --category crypto --year 2018
//! cashvm categories
//!
//! # Interactive session, optionally from a deep link
//! cashvm browse --fragment '#OP_CAT'
//!
//! # Web server
//! cashvm serve --addr 127.0.0.1:3000 --static-dir ./dist
//! ```

use std::path::PathBuf;

use cashvm_browser::{ActivationYear, Catalog};
use cashvm_opcodes::Category;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;
mod output;
mod render;

pub use config::{Config, LogFormat};
pub use error::CliError;
pub use output::Output;

/// CashVM opcode browser
#[derive(Parser, Debug)]
#[command(name = "cashvm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Config file (default: ~/.cashvm/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log line format
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

/// CLI commands
#[derive(Debug, Subcommand)]
enum Commands {
    /// Print all 256 opcodes
    Table,
    /// Show one opcode by name, alias or byte (0x..)
    Show {
        /// Opcode identifier
        id: String,
    },
    /// Search names and descriptions
    Search {
        /// Text to look for (case-insensitive)
        #[arg(default_value = "")]
        text: String,
        /// Only these categories (repeatable)
        #[arg(long = "category")]
        categories: Vec<Category>,
        /// Only these activation years (repeatable)
        #[arg(long = "year")]
        years: Vec<ActivationYear>,
    },
    /// List categories present in the table
    Categories,
    /// Interactive browsing session on stdin/stdout
    Browse {
        /// Initial location fragment, e.g. "#OP_CAT"
        #[arg(long, default_value = "")]
        fragment: String,
    },
    /// Run the web server
    Serve {
        /// Listen address
        #[arg(long)]
        addr: Option<String>,
        /// Static asset directory (repeatable, searched in order)
        #[arg(long = "static-dir")]
        static_dirs: Vec<PathBuf>,
    },
    /// Show or edit configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Set the server listen address
        #[arg(long)]
        set_addr: Option<String>,
        /// Set the log level
        #[arg(long)]
        set_log_level: Option<String>,
        /// Set the log format
        #[arg(long, value_enum)]
        set_log_format: Option<LogFormat>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = load_config(cli.config.as_ref()).and_then(|mut config| {
        init_logging(
            cli.log_level.as_deref().unwrap_or(&config.log_level),
            cli.log_format.unwrap_or(config.log_format),
        );
        run(cli.command, &mut config, cli.config.as_ref(), cli.json)
    });

    if let Err(e) = result {
        if cli.json {
            println!(
                "{}",
                serde_json::json!({
                    "error": e.to_string(),
                    "success": false
                })
            );
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config, CliError> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

// Logs go to stderr so stdout stays clean for --json.
fn init_logging(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

fn run(
    command: Commands,
    config: &mut Config,
    config_path: Option<&PathBuf>,
    json: bool,
) -> Result<(), CliError> {
    let catalog = Catalog::global();

    match command {
        Commands::Table => commands::query::table(catalog, json),
        Commands::Show { id } => commands::query::show(catalog, &id, json),
        Commands::Search {
            text,
            categories,
            years,
        } => commands::query::search(catalog, &text, categories, years, json),
        Commands::Categories => commands::query::categories(catalog, json),
        Commands::Browse { fragment } => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            commands::browse::run(catalog, &fragment, stdin.lock(), &mut stdout)
        }
        Commands::Serve { addr, static_dirs } => {
            let server_config = commands::serve::server_config(config, addr, static_dirs)?;
            commands::serve::serve(server_config)
        }
        Commands::Config {
            show,
            set_addr,
            set_log_level,
            set_log_format,
        } => handle_config(
            config,
            config_path,
            show,
            ConfigUpdate {
                addr: set_addr,
                log_level: set_log_level,
                log_format: set_log_format,
            },
            json,
        ),
    }
}

struct ConfigUpdate {
    addr: Option<String>,
    log_level: Option<String>,
    log_format: Option<LogFormat>,
}

fn handle_config(
    config: &mut Config,
    config_path: Option<&PathBuf>,
    show: bool,
    update: ConfigUpdate,
    json: bool,
) -> Result<(), CliError> {
    let mut modified = false;

    if let Some(addr) = update.addr {
        config.listen_addr = addr;
        modified = true;
    }

    if let Some(level) = update.log_level {
        config.log_level = level;
        modified = true;
    }

    if let Some(format) = update.log_format {
        config.log_format = format;
        modified = true;
    }

    if modified {
        match config_path {
            Some(path) => config.save_to(path)?,
            None => config.save()?,
        }
        Output::new(json)
            .field("status", "saved")
            .message("Configuration saved")
            .print()?;
    } else if show {
        let dirs: Vec<String> = config
            .static_dirs
            .iter()
            .map(|dir| dir.display().to_string())
            .collect();
        Output::new(json)
            .field("listen_addr", &config.listen_addr)
            .field("static_dirs", &dirs)
            .field("log_level", &config.log_level)
            .field("log_format", &config.log_format)
            .message(&format!(
                "Listen address: {}\nStatic dirs: {}\nLog level: {}\nLog format: {}",
                config.listen_addr,
                dirs.join(", "),
                config.log_level,
                config.log_format.as_str()
            ))
            .print()?;
    } else {
        Output::new(json)
            .message("Use --show to display config, or --set-addr/--set-log-level/--set-log-format to modify")
            .print()?;
    }

    Ok(())
}
