use std::path::PathBuf;

use clap::Parser;
use meter_core::{DashboardConfig, ProviderManager};
use meter_web::AppState;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "meter-web")]
#[command(about = "AI Spend Dashboard server")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 3030)]
    port: u16,

    /// Directory holding the built dashboard bundle
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("meter_web=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();
    let config = DashboardConfig::from_env();
    let state = AppState::new(ProviderManager::new(meter_core::http_client()), config);
    let app = meter_web::app(state, &args.static_dir);

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port)).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
