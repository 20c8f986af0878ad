use anyhow::{Context, Result};
use clap::Parser;
use disclosure_lib::Config;
use disclosure_server::{build_router, AppState};
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(name = "disclosure")]
#[command(about = "Serve EDINET filings and gBizINFO company data over HTTP")]
struct Cli {
    /// Listen address, overrides BIND_ADDR
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("disclosure=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }
    tracing::debug!("Loaded {:?}", config);

    let state = AppState::from_config(&config)?;
    let app = build_router(state, &config);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;
    tracing::info!("disclosure server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
