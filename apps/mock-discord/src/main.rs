use anyhow::Result;
use clap::Parser;
use mock_discord::{DEFAULT_PORT, bind, serve};
use mock_telemetry::{TelemetryConfig, install as init_telemetry};

#[derive(Parser, Debug)]
#[command(author, version, about = "Mock Discord webhook endpoint for integration tests")]
struct Cli {
    /// Port to listen on, loopback only
    #[arg(default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_telemetry(TelemetryConfig::from_env("mock-discord"))?;

    let listener = bind(cli.port).await?;
    tracing::info!("Starting on port {}", listener.local_addr()?.port());
    serve(listener).await
}
