//! TinyText - A minimal terminal line editor.
//!
//! # Usage
//!
//! ```bash
//! tinytext notes.txt
//! tinytext --log-file tinytext.log --log-level debug notes.txt
//! tinytext --log-level info --save notes.txt
//! ```

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tinytext::app::App;
use tinytext::config::{
    ConfigFlags, LogLevel, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};

/// A minimal terminal line editor
#[derive(Parser, Debug)]
#[command(name = "tinytext", version, about, long_about = None)]
struct Cli {
    /// File to edit (created if missing)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Write logs to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Minimum log level (RUST_LOG directives are also honored)
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn init_logging(flags: &ConfigFlags) -> Result<()> {
    let level = flags.log_level.unwrap_or(LogLevel::Warn).to_tracing();
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if let Some(path) = &flags.log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);
    init_logging(&effective)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        file = %cli.file.display(),
        log_file = ?cli.log_file,
        log_level = ?cli.log_level,
        "starting tinytext"
    );

    // Run the application
    let mut app = App::new(cli.file);
    app.run().context("Application error")
}
