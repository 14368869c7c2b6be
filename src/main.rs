mod api_doc;
mod auth;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod secrets;
mod server;
mod state;

use clap::Parser;
use config::Config;
use state::AppState;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

#[derive(Parser, Debug)]
#[command(name = "secrets-vault")]
#[command(about = "Static service-account secrets behind a bearer-token check")]
#[command(version)]
struct Cli {
    /// Print the OpenAPI document as JSON and exit
    #[arg(long)]
    openapi: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.openapi {
        println!("{}", api_doc::ApiDoc::openapi().to_pretty_json()?);
        return Ok(());
    }

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("secrets-vault {} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    config.log_startup();

    let app = routes::router(AppState::new(config.clone()));
    server::serve(&config, app).await
}
