use std::sync::Arc;

use anyhow::Context;
use teloxide::prelude::*;
use teloxide::Bot;

use crate::config::{AppConfig, PaymentConfig};
use crate::error::BotResult;
use crate::handler::get_handler;
use crate::service::ActivationService;
use crate::storage::FirebaseStore;
use crate::utils::http;

pub struct BotService {
    bot: Bot,
    activation: ActivationService,
    payment: PaymentConfig,
}

impl BotService {
    pub fn new(config: &AppConfig) -> BotResult<Self> {
        info!("Initializing BotService...");

        let client = http::create_telegram_client().context("Failed to build Telegram HTTP client")?;
        let bot = Bot::with_client(config.telegram.0.clone(), client);

        let firebase_client = http::create_firebase_client().context("Failed to build Firebase HTTP client")?;
        let store = FirebaseStore::new(&config.firebase, firebase_client)?;
        let activation = ActivationService::new(Arc::new(store));

        info!("BotService initialized");

        Ok(Self {
            bot,
            activation,
            payment: config.payment.clone(),
        })
    }

    pub async fn start(self) -> BotResult<()> {
        info!("Testing connection to Telegram API...");
        match self.bot.get_me().await {
            Ok(me) => info!("Successfully connected to Telegram API as @{}", me.username()),
            Err(e) => {
                error!("Failed to connect to Telegram API: {:?}", e);
                return Err(anyhow::anyhow!("Failed to connect to Telegram API: {}", e).into());
            }
        }

        crate::command::setup_user_commands(&self.bot).await?;

        let handler = get_handler();

        Dispatcher::builder(self.bot, handler)
            .dependencies(dptree::deps![self.activation, self.payment])
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error has occurred in the dispatcher",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        info!("Dispatcher stopped");

        Ok(())
    }
}
