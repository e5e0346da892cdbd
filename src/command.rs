use teloxide::{
    macros::BotCommands,
    prelude::{Requester, ResponseResult},
    types::BotCommand,
    utils::command::{BotCommands as _, ParseError},
    Bot,
};

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    Start,
    // Raw arguments, validated by the handler.
    Confirm(String),
    Code,
    Help,
}

impl Command {
    /// Parses `text` ignoring the case of the command name (`/START`, `/Confirm year`).
    /// Arguments keep their case.
    pub fn parse_any_case(text: &str, bot_name: &str) -> Result<Self, ParseError> {
        let (name, rest) = text.split_at(text.find(char::is_whitespace).unwrap_or(text.len()));
        Self::parse(&format!("{}{}", name.to_lowercase(), rest), bot_name)
    }

    pub fn user_commands() -> Vec<BotCommand> {
        vec![
            BotCommand::new("start", t!("commands.description.start")),
            BotCommand::new("confirm", t!("commands.description.confirm")),
            BotCommand::new("code", t!("commands.description.code")),
            BotCommand::new("help", t!("commands.description.help")),
        ]
    }
}

pub async fn setup_user_commands(bot: &Bot) -> ResponseResult<()> {
    bot.delete_my_commands().await?;
    bot.set_my_commands(Command::user_commands()).await?;
    Ok(())
}
