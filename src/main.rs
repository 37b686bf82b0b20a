//! Queue Board CLI
//!
//! Command-line interface for the appointment board:
//! - Render the board once (text, HTML or JSON)
//! - Serve the board over HTTP
//! - Generate a config file

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use queueboard::api::{serve, AppState};
use queueboard::board::{render_page, render_text};
use queueboard::config::{generate_default_config, Config, LoggingConfig};
use queueboard::loader::{AppointmentLoader, AppointmentSource, FileSource};
use queueboard::LoadState;

#[derive(Parser)]
#[command(name = "queueboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scheduled service appointments as a status-colored board")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Feed URL, without the location query
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Store location to show
    #[arg(long, global = true)]
    pub location_id: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the feed once and print the board
    Render {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Render a saved feed body instead of calling the endpoint
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Serve the board over HTTP
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(url) = cli.url {
        config.source.url = url;
    }
    if let Some(location_id) = cli.location_id {
        config.source.location_id = location_id;
    }

    init_tracing(&config.logging);

    match cli.command {
        Commands::Render {
            format,
            output,
            input,
        } => {
            let source: Box<dyn AppointmentSource> = match input {
                Some(path) => Box::new(FileSource::new(path)),
                None => Box::new(AppointmentLoader::new(config.loader_config())?),
            };

            let state = source.load_state().await;
            let rendered = render(&state, format)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, &rendered)?;
                    tracing::info!("Board written to {:?}", path);
                }
                None => print!("{}", rendered),
            }

            if matches!(state, LoadState::Error(_)) {
                std::process::exit(1);
            }
        }

        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            tracing::info!("Queue board v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("Feed: {}", config.loader_config().url());

            let loader = AppointmentLoader::new(config.loader_config())?;
            let state = AppState::new(Arc::new(loader));
            serve(state, &config.server).await?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }
    }

    Ok(())
}

fn render(state: &LoadState, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(state),
        OutputFormat::Html => render_page(state),
        OutputFormat::Json => {
            let value = match state {
                LoadState::Loaded(appointments) => serde_json::to_value(appointments)?,
                LoadState::Error(message) => serde_json::json!({ "error": message }),
                LoadState::Loading => serde_json::json!({ "loading": true }),
            };
            format!("{}\n", serde_json::to_string_pretty(&value)?)
        }
    })
}

/// Logs go to stderr so rendered output on stdout stays clean
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("queueboard={},tower_http=info", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
