//! Common test utilities.

#![allow(dead_code)]

use std::io::Write;
use std::sync::Arc;
use tokio::net::TcpListener;

use schools_api::{Config, MemorySchoolStore, SchoolServer, SchoolServerBuilder};

/// Test server wrapper.
pub struct TestServer {
    pub base_url: String,
}

impl TestServer {
    /// Creates and starts a test server with an empty store.
    pub async fn start() -> Self {
        Self::start_with(MemorySchoolStore::new()).await
    }

    /// Creates and starts a test server holding `count` generated schools.
    pub async fn start_with_schools(count: usize) -> Self {
        Self::start_with(MemorySchoolStore::from_names(
            (0..count).map(|i| format!("School {}", i)),
        ))
        .await
    }

    /// Creates and starts a test server from a seed file.
    pub async fn start_with_seed(lines: &[&str]) -> Self {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        let config = Config {
            seed: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let server = SchoolServer::from_config(config).unwrap();
        Self::spawn(server).await
    }

    async fn start_with(store: MemorySchoolStore) -> Self {
        let server = SchoolServerBuilder::new()
            .host("127.0.0.1")
            .store(Arc::new(store))
            .build();
        Self::spawn(server).await
    }

    async fn spawn(server: SchoolServer) -> Self {
        // Bind an ephemeral port and hand the listener to the server
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            server.serve(listener).await.unwrap();
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
        }
    }

    /// Returns the URL of the schools collection.
    pub fn schools_url(&self) -> String {
        format!("{}/schools", self.base_url)
    }

    /// Returns the URL of a single school.
    pub fn school_url(&self, id: impl std::fmt::Display) -> String {
        format!("{}/schools/{}", self.base_url, id)
    }
}

/// Extracts the `(offset, limit)` query parameters of a page link.
pub fn page_params(link: &str) -> (u64, u64) {
    let url = url::Url::parse(link).unwrap();
    let mut offset = None;
    let mut limit = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "offset" => offset = Some(value.parse().unwrap()),
            "limit" => limit = Some(value.parse().unwrap()),
            _ => {}
        }
    }
    (offset.unwrap(), limit.unwrap())
}
