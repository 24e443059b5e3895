use asset_loadtest::{cli, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _guard = logging::init_logging_with_config(&logging::LogConfig::from_env())?;
    cli::run_cli().await
}
