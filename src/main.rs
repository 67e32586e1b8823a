use album_catalog::config::AppConfig;
use album_catalog::run_server;
use env_logger::{Builder, Env};
use log::LevelFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Info by default, quiet HTTP internals; RUST_LOG overrides both
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("hyper", LevelFilter::Warn)
        .filter_module("reqwest", LevelFilter::Warn)
        .parse_env(Env::default())
        .init();

    let config = AppConfig::load()?;
    log::info!(
        "Configuration loaded: server={}:{}",
        config.server.host,
        config.server.port
    );
    if let Some(source) = &config.sales.default_source {
        log::info!("Default sales data source: {}", source);
    }

    run_server(&config).await
}
