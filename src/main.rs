use clap::Parser;
use std::net::SocketAddr;
use themis::application::MockBackend;
use themis::cli::Cli;
use themis::config::Settings;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting Themis questionnaire mock backend on {}:{}", host, port);

    // The pool is fully built before the listener binds
    let backend = MockBackend::from_settings(&settings)?;
    let app = themis::create_app(backend);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
