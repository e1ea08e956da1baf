use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use portfolio::routes::{self, AppState};
use portfolio_contact::{SmtpMailer, SmtpSettings};

/// portfolio - personal website server
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Static portfolio site with a contact-form mailer", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = portfolio::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    portfolio::observability::init_observability(
        "portfolio",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: portfolio::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    let mailer = SmtpMailer::new(&SmtpSettings {
        host: config.email.smtp_host.clone(),
        port: config.email.smtp_port,
        username: config.email.smtp_username.clone(),
        password: config.email.smtp_password.clone(),
    })?;

    let state = AppState {
        config,
        mailer: Arc::new(mailer),
    };

    let app = routes::router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
