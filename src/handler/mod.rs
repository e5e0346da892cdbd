mod command;
mod message;
pub mod reply;

use command::get_command_handler;
use message::{get_message_handler, handle_message_unknown};
use teloxide::{
    dispatching::{UpdateFilterExt, UpdateHandler},
    dptree,
    types::{Message, Update},
};

/// Routing table: known commands first, then plain text, everything else is dropped.
pub fn get_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry()
        .branch(get_command_handler())
        .branch(get_message_handler())
        .branch(Update::filter_message().endpoint(handle_message_unknown))
}

/// Store key for the sender of `msg`.
fn sender_id(msg: &Message) -> Option<String> {
    msg.from.as_ref().map(|user| user.id.0.to_string())
}
