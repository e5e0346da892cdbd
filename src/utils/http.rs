use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = concat!("ActivationBot/", env!("CARGO_PKG_VERSION"));

pub fn create_telegram_client() -> reqwest::Result<Client> {
    // Long polling holds a request open, so the timeout has to outlast it.
    let builder = Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .pool_idle_timeout(Duration::from_secs(60))
        .tcp_keepalive(Duration::from_secs(30))
        .user_agent(DEFAULT_USER_AGENT);

    builder.build()
}

pub fn create_firebase_client() -> reqwest::Result<Client> {
    let builder = Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(DEFAULT_USER_AGENT);

    builder.build()
}
