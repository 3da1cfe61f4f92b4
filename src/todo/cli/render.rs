use colored::Colorize;
use todo::api::{render_lines, CmdMessage, ListedPrimary, MessageLevel};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_list(listed: &[ListedPrimary]) {
    for line in render_lines(listed) {
        println!("{}", line);
    }
}

/// Plain lines, no styling: the completion script reads these.
pub(super) fn print_suggestions(suggestions: &[String]) {
    for suggestion in suggestions {
        println!("{}", suggestion);
    }
}

pub(super) fn print_config(entries: &[(&str, String)]) {
    for (key, value) in entries {
        println!("{} = {}", key, value);
    }
}
