use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry};

use glide_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "glide")]
#[command(author, version, about = "Pointer, scroll and drag motion for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive showcase
    Run,
    /// Replay a scripted session headlessly, printing one JSON frame per line
    Replay {
        /// Path to the replay script (TOML)
        script: PathBuf,
        /// Pretty-print each frame
        #[arg(long)]
        pretty: bool,
        /// Only print the final frame
        #[arg(long)]
        last: bool,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Runtime control over the log filter
pub struct LogControl {
    handle: reload::Handle<EnvFilter, Registry>,
    directive: String,
}

impl LogControl {
    /// Stop emitting logs, e.g. while the alternate screen is up
    pub fn silence(&self) -> Result<()> {
        self.handle.modify(|filter| *filter = EnvFilter::new("off"))?;
        Ok(())
    }

    pub fn restore(&self) -> Result<()> {
        let directive = self.directive.clone();
        self.handle.modify(|filter| *filter = EnvFilter::new(directive))?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first so its log level can seed the filter
    let loaded = AppConfig::load();
    let fallback = loaded
        .as_ref()
        .map(|config| config.general.log_level.clone())
        .unwrap_or_else(|_| "info".into());

    // Initialize logging
    let directive = std::env::var("RUST_LOG").unwrap_or(fallback);
    let (filter, handle) = reload::Layer::new(EnvFilter::new(&directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
    let log = LogControl { handle, directive };

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load {}: {}; using defaults", AppConfig::config_path().display(), e);
            AppConfig::default()
        }
    };

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config, &log).await,
        Some(Commands::Replay {
            script,
            pretty,
            last,
        }) => commands::replay::run(&config, &script, pretty, last).await,
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show(&config).await,
            ConfigAction::Path => commands::config::path().await,
            ConfigAction::Init { force } => commands::config::init(force).await,
        },
    }
}
