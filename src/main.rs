use rulebot::config::ServerConfig;
use rulebot::services::server;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging/tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!("Rulebot booting...");

    let config = ServerConfig::from_env()?;
    server::run(config).await?;

    Ok(())
}
