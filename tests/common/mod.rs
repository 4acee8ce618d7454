//! Shared helpers for integration tests that need a live server.

use std::net::SocketAddr;
use std::time::Duration;

use random_numbers::{create_router, AppState, RecordStore};
use tokio::task::JoinHandle;

/// A server bound to an ephemeral loopback port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub state: AppState,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Starts a server seeded with `initial_count` records.
    pub async fn start(initial_count: usize, get_delay: Duration) -> Self {
        let state = AppState::new(RecordStore::new(initial_count), get_delay);
        let app = create_router(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    /// Base URL for clients.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
