use bot::BotService;
use config::AppConfig;
use error::BotResult;

extern crate pretty_env_logger;
#[macro_use]
extern crate log;
#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "ru");

mod bot;
mod command;
mod config;
mod error;
mod handler;
mod service;
mod storage;
mod utils;


#[tokio::main]
async fn main() -> BotResult<()> {
    let dotenv = dotenvy::dotenv();

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    let _ = pretty_env_logger::try_init_timed();

    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }

    info!("Starting bot...");

    let config = AppConfig::from_env()?;
    rust_i18n::set_locale(&config.locale);

    BotService::new(&config)?.start().await
}
