use clap::Parser;
use tracing_subscriber::EnvFilter;

use neosearch::cli::{self, Cli, Command};
use neosearch::config::Config;
use neosearch::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Cli::parse();
    let config = Config::from_env();
    let state = AppState::new(config.clone())?;

    match args.command {
        Command::Serve => {
            tracing::info!("Registry file: {}", config.registry_path().display());
            tracing::info!("Tracking {} repositories", state.registry.list().len());

            let app = neosearch::api::router(state);
            let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
            tracing::info!("Server listening on {}", config.bind_addr);

            axum::serve(listener, app).await?;
            Ok(())
        }
        other => std::process::exit(cli::run(other, &state)),
    }
}
