use async_trait::async_trait;
use crate::commands::{Command, CommandError, Session};
use crate::input::ArgInput;

pub struct RevCommand;

fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

#[async_trait]
impl Command<Session> for RevCommand {
    fn keywords(&self) -> &[&'static str] {
        &["rev"]
    }

    fn usage(&self) -> Vec<String> {
        vec!["rev <text> [text...]".to_string()]
    }

    fn summary(&self) -> &str {
        "reverse each argument characterwise"
    }

    fn help_text(&self) -> String {
        "Prints every argument with its characters in reverse order, one per line.".to_string()
    }

    async fn execute(&self, args: &mut ArgInput, session: &mut Session) -> Result<(), CommandError> {
        if args.is_empty() {
            return Err(CommandError::usage("rev", "missing operand"));
        }

        for token in args.by_ref() {
            session.outln(&reverse_string(&token));
        }
        Ok(())
    }
}
