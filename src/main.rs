// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Euthymia: Journal Mood Tracker
//!
//! Scores free-text journal entries with a lexicon sentiment analyzer and
//! serves the single-page journal UI.

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use euthymia::config::AppConfig;
use euthymia::mood::classify;
use euthymia::sentiment::SentimentEngine;
use euthymia::Result;

/// Euthymia CLI - Journal Mood Tracker
#[derive(Parser, Debug)]
#[command(name = "euthymia")]
#[command(author = "Jonathan D. A. Jewell <hyperpolymath>")]
#[command(version = "0.3.0")]
#[command(about = "Journal mood tracker with local sentiment analysis", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file (JSON format)
    #[arg(short, long, default_value = "config.json", global = true)]
    config: PathBuf,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable trace logging (most verbose)
    #[arg(long, global = true)]
    trace: bool,

    /// Suppress non-essential output (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the journal web server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Open browser automatically
        #[arg(long)]
        open: bool,
    },

    /// Analyze a single entry from the command line
    Analyze {
        /// Entry text (reads --file or stdin when omitted)
        text: Option<String>,

        /// Read the entry from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format for results
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show engine and configuration status
    Status,
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Generate default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config.json")]
        output: PathBuf,
    },

    /// Validate configuration file
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if !cli.quiet {
        info!("Euthymia v0.3.0 - Journal Mood Tracker");
    }

    // Load configuration
    let config = AppConfig::load(&cli.config)?;

    match cli.command {
        Some(Commands::Serve { host, port, open }) => {
            run_serve(config, host, port, open).await
        }
        Some(Commands::Analyze { text, file, format }) => {
            run_analyze(text, file, &format).await
        }
        Some(Commands::Config { action }) => {
            run_config_command(config, action, &cli.config).await
        }
        Some(Commands::Status) => {
            run_status(config).await
        }
        None => {
            // Default: serve the journal
            run_serve(config, None, None, false).await
        }
    }
}

/// Run the web server
async fn run_serve(
    mut config: AppConfig,
    host: Option<String>,
    port: Option<u16>,
    open: bool,
) -> Result<()> {
    if let Some(host) = host {
        config.web.host = host;
    }
    if let Some(port) = port {
        config.web.port = port;
    }

    if open {
        let url = format!("http://{}:{}", config.web.host, config.web.port);
        if let Err(e) = open_browser(&url) {
            error!("Failed to open browser: {}", e);
        }
    }

    euthymia::web::start_server(config).await
}

/// Run a one-shot analysis
async fn run_analyze(text: Option<String>, file: Option<PathBuf>, format: &str) -> Result<()> {
    let entry = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let engine = SentimentEngine::new();
    let result = engine.analyze(&entry)?;
    let mood = classify(result.polarity);

    match format {
        "json" => {
            let output = serde_json::json!({
                "polarity": result.polarity,
                "mood": mood.label(),
                "severity": mood.severity().css_class(),
                "scores": {
                    "positive": result.positive,
                    "neutral": result.neutral,
                    "negative": result.negative,
                },
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => {
            println!("Polarity: {:.3}", result.polarity);
            println!("Mood: {} {}", mood.label(), mood.emoji());
            println!("Severity: {}", mood.severity().css_class());
        }
    }

    Ok(())
}

/// Run config commands
async fn run_config_command(
    config: AppConfig,
    action: ConfigCommands,
    config_path: &Path,
) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{}", json);
        }
        ConfigCommands::Generate { output } => {
            let default_config = AppConfig::default();
            default_config.save(&output)?;
            println!("Generated config at {:?}", output);
        }
        ConfigCommands::Validate => {
            println!("Configuration at {:?} is valid", config_path);
            println!("  Web: {}:{}", config.web.host, config.web.port);
            println!("  Default theme: {:?}", config.ui.default_theme);
        }
    }

    Ok(())
}

/// Run status check
async fn run_status(config: AppConfig) -> Result<()> {
    println!("Euthymia v0.3.0 Status");
    println!("======================");

    let engine = SentimentEngine::new();
    match engine.analyze("The lexicon is loaded and scoring works.") {
        Ok(result) => println!("Engine: OK (smoke polarity {:.3})", result.polarity),
        Err(e) => println!("Engine: Error - {}", e),
    }

    println!("\nConfiguration:");
    println!("  Web: {}:{}", config.web.host, config.web.port);
    println!("  Default theme: {:?}", config.ui.default_theme);
    println!("  Title: {}", config.ui.title);

    Ok(())
}

fn open_browser(url: &str) -> std::io::Result<()> {
    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(url)
            .spawn()?;
    }
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(url)
            .spawn()?;
    }
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }
    Ok(())
}
