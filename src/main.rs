use app_directory::{config, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    let telemetry = telemetry::init_telemetry(&telemetry::TelemetryConfig::from(&config))?;
    config.print_summary();

    server::run(config, telemetry).await
}
