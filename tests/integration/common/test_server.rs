use chrono::Utc;
use std::net::SocketAddr;
use themis::application::MockBackend;
use themis::config::{PoolSource, Settings, ServerSettings};

pub struct TestServer {
    pub addr: SocketAddr,
    pub base_url: String,
}

impl TestServer {
    pub async fn new() -> Self {
        Self::with_source(PoolSource::Generated).await
    }

    pub async fn with_source(source: PoolSource) -> Self {
        // Create test configuration
        let mut settings = Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
            },
            ..Default::default()
        };
        settings.mock.seed = Some(1234);
        settings.mock.source = source;

        let backend = MockBackend::build(&settings, Utc::now()).unwrap();
        let app = themis::create_app(backend);

        // Start server on random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestServer { addr, base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
