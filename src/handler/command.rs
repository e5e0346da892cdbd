use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::Me;
use teloxide::Bot;

use crate::command::Command;
use crate::error::HandlerResult;
use crate::service::{ActivationService, ConfirmOutcome};

use super::{reply, sender_id};

async fn handle_start(bot: Bot, msg: Message) -> HandlerResult<()> {
    bot.send_message(msg.chat.id, reply::start()).await?;
    Ok(())
}

async fn handle_help(bot: Bot, msg: Message) -> HandlerResult<()> {
    bot.send_message(msg.chat.id, reply::help()).await?;
    Ok(())
}

async fn handle_confirm(bot: Bot, msg: Message, args: String, activation: ActivationService) -> HandlerResult<()> {
    let Some(user_id) = sender_id(&msg) else {
        warn!("Ignoring /confirm without a sender in chat {}", msg.chat.id);
        return Ok(());
    };

    let outcome = activation.confirm(&user_id, &args).await?;
    if let ConfirmOutcome::InvalidPlan(plan) = &outcome {
        debug!("Rejected /confirm from user {} with plan {:?}", user_id, plan);
    }
    bot.send_message(msg.chat.id, reply::confirm(&outcome)).await?;

    Ok(())
}

async fn handle_code(bot: Bot, msg: Message, activation: ActivationService) -> HandlerResult<()> {
    let Some(user_id) = sender_id(&msg) else {
        warn!("Ignoring /code without a sender in chat {}", msg.chat.id);
        return Ok(());
    };

    let issued = activation.lookup(&user_id).await?;
    bot.send_message(msg.chat.id, reply::code(issued.as_ref())).await?;

    Ok(())
}

async fn handle_command(bot: Bot, msg: Message, cmd: Command, activation: ActivationService) -> HandlerResult<()> {
    debug!("Command {:?} in chat {}", cmd, msg.chat.id);

    match cmd {
        Command::Start => handle_start(bot, msg).await?,
        Command::Help => handle_help(bot, msg).await?,
        Command::Confirm(args) => handle_confirm(bot, msg, args, activation).await?,
        Command::Code => handle_code(bot, msg, activation).await?,
    }

    Ok(())
}

pub fn get_command_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync>> {
    Update::filter_message()
        .filter_map(|msg: Message, me: Me| {
            msg.text()
                .and_then(|text| Command::parse_any_case(text, me.username()).ok())
        })
        .endpoint(handle_command)
}
