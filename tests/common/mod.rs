//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::net::SocketAddr;
use std::time::Duration;

use bank_registry::{HttpServer, ServiceConfig, Shutdown};
use tempfile::NamedTempFile;
use tokio::net::TcpListener;

pub const TWO_BANKS: &str = r#"[{"MFO":1,"SHORTNAME":"Bank A","COD_STATE":1},{"MFO":2,"SHORTNAME":"Bank B","COD_STATE":0}]"#;

/// Write `content` to a fresh temp file.
pub fn data_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// A server running on an ephemeral port. Stops when dropped.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the service for `file` with compact XML output.
pub async fn start_server(file: &NamedTempFile) -> TestServer {
    let mut config = ServiceConfig::default();
    config.data.input = file.path().to_path_buf();
    config.xml.indent = 0;
    start_server_with(config).await
}

pub async fn start_server_with(config: ServiceConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer { addr, shutdown }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
