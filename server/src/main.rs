use shopping_server::config::Config;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    shopping_server::telemetry::init(config.mode);

    let listener = TcpListener::bind(config.addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, mode = ?config.mode, "listening");
    shopping_server::run(listener).await?;
    Ok(())
}
