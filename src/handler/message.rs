use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::{MessageEntity, MessageEntityKind};
use teloxide::Bot;

use crate::config::PaymentConfig;
use crate::error::HandlerResult;

use super::reply;

async fn handle_plan_choice(bot: Bot, msg: Message, text: String, payment: PaymentConfig) -> HandlerResult<()> {
    bot.send_message(msg.chat.id, reply::plan_choice(&text, &payment)).await?;
    Ok(())
}

pub async fn handle_message_unknown(msg: Message) -> HandlerResult<()> {
    debug!("Ignoring message {} in chat {}", msg.id, msg.chat.id);
    Ok(())
}

/// Whether Telegram would treat `text` as a bot command: a `bot_command` entity at
/// offset 0. Without entities, falls back to the same lexical rule, a `/` followed by
/// a command-name character.
fn is_command(text: &str, entities: Option<&[MessageEntity]>) -> bool {
    match entities {
        Some(entities) if !entities.is_empty() => entities
            .first()
            .is_some_and(|e| e.offset == 0 && matches!(e.kind, MessageEntityKind::BotCommand)),
        _ => {
            let mut chars = text.chars();
            chars.next() == Some('/') && chars.next().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        }
    }
}

/// Plain text that is not a command. Unknown `/commands` fall through to
/// [`handle_message_unknown`].
pub fn get_message_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync>> {
    Update::filter_message()
        .filter(|msg: Message| !msg.text().is_some_and(|text| is_command(text, msg.entities())))
        .filter_map(|msg: Message| msg.text().map(str::to_owned))
        .endpoint(handle_plan_choice)
}
