mod app;
mod config;
mod fetch;
mod handlers;
mod loader;
mod pipeline;
mod render;
mod state;
mod theme;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use linkbio_core::config::ValidationPolicy;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    app::create_app,
    config::Config,
    fetch::Source,
    pipeline::Pipeline,
    render::{render_json, render_page},
    state::AppState,
};

/// linkbio - Render a link-in-bio page from a JSON document
#[derive(Parser, Debug)]
#[command(name = "linkbio")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Site root: a directory or an http(s) base URL
    #[arg(long, short, global = true, default_value = ".", env = "LINKBIO_SOURCE")]
    source: Source,

    /// Required-section policy for the document (overrides LINKBIO_VALIDATION)
    #[arg(long, global = true)]
    validation: Option<ValidationPolicy>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the pipeline once and write the result
    Render {
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "html")]
        format: OutputFormat,
    },
    /// Serve the page over HTTP, rendering it afresh per request
    Serve {
        /// Host address to bind the server to
        #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
        host: String,

        /// Port to listen on
        #[arg(long, short, default_value = "3000", env = "PORT")]
        port: u16,
    },
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// The rendered HTML document.
    #[default]
    Html,
    /// The page's presentation state as JSON.
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so rendered output can be piped.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "linkbio=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().with_validation(cli.validation);
    tracing::debug!(source = %cli.source, ?config, "Configuration loaded");

    let pipeline = Pipeline::new(cli.source.fetcher(), &config);

    match cli.command {
        Commands::Render { output, format } => render(&pipeline, output, format).await,
        Commands::Serve { host, port } => {
            let site_dir = cli.source.directory().map(|dir| dir.to_path_buf());
            serve(pipeline, site_dir, &host, port).await
        }
    }
}

/// Run the pipeline once and write the page.
///
/// Fails after writing if the page settled on its error surface.
async fn render(pipeline: &Pipeline, output: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let page = pipeline.run().await;

    let rendered = match format {
        OutputFormat::Html => render_page(&page)?,
        OutputFormat::Json => render_json(&page)?,
    };

    match output {
        Some(path) => {
            tokio::fs::write(&path, rendered)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Page written");
        }
        None => println!("{rendered}"),
    }

    if let Some(message) = page.presentation.error_message() {
        anyhow::bail!("{message}");
    }
    Ok(())
}

/// Serve the page until Ctrl+C or SIGTERM.
async fn serve(pipeline: Pipeline, site_dir: Option<PathBuf>, host: &str, port: u16) -> Result<()> {
    let app = create_app(AppState::new(pipeline, site_dir));

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{host}:{port}");
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
