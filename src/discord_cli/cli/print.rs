use colored::Colorize;
use discord_cli::commands::{CmdMessage, CmdResult, MessageLevel};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// Payload first as pretty JSON, then any messages.
pub(super) fn print_result(result: &CmdResult) -> anyhow::Result<()> {
    if let Some(payload) = &result.payload {
        println!("{}", serde_json::to_string_pretty(payload)?);
    }
    print_messages(&result.messages);
    Ok(())
}
