use clap::Parser;
use server::config::{ServerArgs, ServerConfig};
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let args = ServerArgs::parse();
    tracing::debug!("args: {args:?}");
    let config = ServerConfig::load(args)?;

    server::start_server(config).await?;
    Ok(())
}
