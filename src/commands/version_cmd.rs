use async_trait::async_trait;
use crate::commands::{Command, CommandError, Session};
use crate::input::ArgInput;

pub struct VersionCommand;

#[async_trait]
impl Command<Session> for VersionCommand {
    fn keywords(&self) -> &[&'static str] {
        &["version"]
    }

    fn usage(&self) -> Vec<String> {
        vec!["version".to_string()]
    }

    fn summary(&self) -> &str {
        "print version information"
    }

    fn help_text(&self) -> String {
        String::new()
    }

    async fn execute(&self, _args: &mut ArgInput, session: &mut Session) -> Result<(), CommandError> {
        session.outln(&format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")));
        Ok(())
    }
}
