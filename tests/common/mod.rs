#![allow(dead_code)]

use dnsme::Client;

pub const APIKEY: &str = "test-api-key";
pub const SECRETKEY: &str = "test-secret-key";

pub fn client(endpoint: &str) -> Client {
    Client::new(endpoint, APIKEY, SECRETKEY).unwrap()
}

/// Runs a blocking client call off the async runtime.
pub async fn blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}
