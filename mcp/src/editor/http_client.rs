//! Shared HTTP client for editor bridge requests with connection pooling
//!
//! A single editor instance serves every tool call, so one pooled client
//! prevents connection churn when an LLM fires many operations in a row.

use std::sync::LazyLock;
use std::time::Duration;

use reqwest::Client;

/// Seconds an idle pooled connection is kept alive
const POOL_IDLE_TIMEOUT: u64 = 300;
/// Idle connections retained per host
const POOL_MAX_IDLE_PER_HOST: usize = 10;
/// Seconds allowed for TCP connect to the bridge
const CONNECTION_TIMEOUT: u64 = 5;
/// Overall request timeout in seconds - scene saves can be slow
const REQUEST_TIMEOUT: u64 = 30;

/// Shared HTTP client instance for localhost editor traffic
static HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT))
        .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT))
        .connect_timeout(Duration::from_secs(CONNECTION_TIMEOUT))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Get the shared HTTP client instance
pub fn get_client() -> &'static Client {
    &HTTP_CLIENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_singleton() {
        let client1 = get_client();
        let client2 = get_client();

        // Both references should point to the same instance
        assert!(std::ptr::eq(client1, client2));
    }
}
