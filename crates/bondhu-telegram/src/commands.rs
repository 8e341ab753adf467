// SPDX-FileCopyrightText: 2026 Bondhu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bot command definitions.

use bondhu_core::Intent;
use teloxide::utils::command::BotCommands;

/// Commands understood by the bot. Descriptions are bilingual because
/// Telegram shows one command menu to all users.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "Start the bot / বট শুরু করুন")]
    Start,
    #[command(description = "Show help / সাহায্য দেখুন")]
    Help,
    #[command(description = "Generate code / কোড তৈরি করুন")]
    Code(String),
    #[command(description = "Create app code / অ্যাপ কোড তৈরি করুন")]
    App(String),
    #[command(description = "Create website code / ওয়েবসাইট কোড তৈরি করুন")]
    Web(String),
    #[command(description = "AI/ML projects / AI/ML প্রোজেক্ট")]
    Ai(String),
    #[command(description = "Machine learning / মেশিন লার্নিং")]
    Ml(String),
    #[command(description = "Mobile app dev / মোবাইল অ্যাপ")]
    Mobile(String),
    #[command(description = "Database projects / ডাটাবেস প্রোজেক্ট")]
    Db(String),
    #[command(description = "API development / API ডেভেলপমেন্ট")]
    Api(String),
    #[command(description = "Ask any question / যেকোনো প্রশ্ন করুন")]
    Ask(String),
    #[command(description = "Change language / ভাষা পরিবর্তন করুন")]
    Lang,
    #[command(description = "Bot status / বট স্ট্যাটাস")]
    Status,
}

impl Command {
    /// The intent and argument for commands that call the generation
    /// provider; `None` for informational commands.
    pub fn generation_request(&self) -> Option<(Intent, &str)> {
        match self {
            Command::Code(arg) => Some((Intent::Code, arg)),
            Command::App(arg) => Some((Intent::App, arg)),
            Command::Web(arg) => Some((Intent::Web, arg)),
            Command::Ai(arg) => Some((Intent::Ai, arg)),
            Command::Ml(arg) => Some((Intent::Ml, arg)),
            Command::Mobile(arg) => Some((Intent::Mobile, arg)),
            Command::Db(arg) => Some((Intent::Database, arg)),
            Command::Api(arg) => Some((Intent::Api, arg)),
            Command::Ask(arg) => Some((Intent::Ask, arg)),
            Command::Start | Command::Help | Command::Lang | Command::Status => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_command_with_argument() {
        let cmd = Command::parse("/code sort a list in python", "bondhu_bot").unwrap();
        assert_eq!(cmd, Command::Code("sort a list in python".to_string()));
    }

    #[test]
    fn parses_bare_command_with_empty_argument() {
        let cmd = Command::parse("/code", "bondhu_bot").unwrap();
        assert_eq!(cmd, Command::Code(String::new()));
    }

    #[test]
    fn parses_db_command_to_database_intent() {
        let cmd = Command::parse("/db user table schema", "bondhu_bot").unwrap();
        let (intent, arg) = cmd.generation_request().unwrap();
        assert_eq!(intent, Intent::Database);
        assert_eq!(arg, "user table schema");
    }

    #[test]
    fn informational_commands_have_no_generation_request() {
        for cmd in [Command::Start, Command::Help, Command::Lang, Command::Status] {
            assert!(cmd.generation_request().is_none());
        }
    }

    #[test]
    fn unknown_command_fails_to_parse() {
        assert!(Command::parse("/bogus", "bondhu_bot").is_err());
    }
}
