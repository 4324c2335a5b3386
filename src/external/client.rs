use std::sync::LazyLock;
use std::time::Duration;

/// Global HTTP client for outbound webhook delivery.
///
/// Initialized lazily on first use and shared across requests so TCP
/// connections to Discord are pooled. Per-request timeouts are applied
/// at the call site from configuration; the values here are outer
/// bounds.
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .use_rustls_tls()
        .user_agent(concat!("linear-relay/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to build HTTP client")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_initialization() {
        // Access the client to ensure it initializes without panicking
        let _ = &*HTTP_CLIENT;
    }
}
