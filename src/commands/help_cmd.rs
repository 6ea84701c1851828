use async_trait::async_trait;
use crate::commands::{Command, CommandError, CommandInfo, Session};
use crate::input::ArgInput;

pub struct HelpCommand;

impl HelpCommand {
    fn render_listing(session: &mut Session) {
        let mut stdout = String::from("Available commands:\n\n");

        let width = session
            .commands
            .iter()
            .map(|info| info.keywords.join(", ").len())
            .max()
            .unwrap_or(0);

        for info in session.commands.iter() {
            stdout.push_str(&format!(
                "  {:<width$}  {}\n",
                info.keywords.join(", "),
                info.summary,
                width = width
            ));
        }

        stdout.push_str("\nUse 'help <command>' for details on a specific command.\n");
        session.out(&stdout);
    }

    fn render_command(info: &CommandInfo) -> String {
        let mut stdout = format!("{} - {}\n", info.name(), info.summary);

        if !info.usage.is_empty() {
            stdout.push_str("\nUsage:\n");
            for line in &info.usage {
                stdout.push_str(&format!("  {}\n", line));
            }
        }

        if info.keywords.len() > 1 {
            stdout.push_str(&format!("\nAliases: {}\n", info.keywords[1..].join(", ")));
        }

        if !info.help_text.is_empty() {
            stdout.push('\n');
            stdout.push_str(&info.help_text);
            if !info.help_text.ends_with('\n') {
                stdout.push('\n');
            }
        }

        stdout
    }
}

#[async_trait]
impl Command<Session> for HelpCommand {
    fn keywords(&self) -> &[&'static str] {
        &["help"]
    }

    fn usage(&self) -> Vec<String> {
        vec!["help".to_string(), "help <command>".to_string()]
    }

    fn summary(&self) -> &str {
        "display available commands"
    }

    fn help_text(&self) -> String {
        "Without arguments, lists every registered command with its summary.\n\
         With a command keyword, shows that command's usage and help text."
            .to_string()
    }

    async fn execute(&self, args: &mut ArgInput, session: &mut Session) -> Result<(), CommandError> {
        let Some(keyword) = args.next() else {
            Self::render_listing(session);
            return Ok(());
        };

        match session.lookup(&keyword).map(Self::render_command) {
            Some(text) => session.out(&text),
            None => {
                session.errln(&format!("help: no help topics match '{}'", keyword));
                session.exit_code = 1;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::commands::{CommandRegistry, EchoCommand};

    fn create_session() -> Session {
        Session::new(vec![CommandInfo::of(&HelpCommand), CommandInfo::of(&EchoCommand)])
    }

    #[tokio::test]
    async fn test_list_commands() {
        let mut session = create_session();
        HelpCommand.execute(&mut ArgInput::default(), &mut session).await.unwrap();

        assert_eq!(session.exit_code, 0);
        assert!(session.stdout.contains("Available commands"));
        assert!(session.stdout.contains("help"));
        assert!(session.stdout.contains("echo, print"));
        assert!(session.stdout.contains("display available commands"));
    }

    #[tokio::test]
    async fn test_help_for_command() {
        let mut session = create_session();
        let mut args = ArgInput::from(["print"]);
        HelpCommand.execute(&mut args, &mut session).await.unwrap();

        assert!(session.stdout.starts_with("echo - "));
        assert!(session.stdout.contains("Usage:"));
        assert!(session.stdout.contains("Aliases: print"));
        assert!(args.is_empty());
    }

    struct Printer;

    #[async_trait]
    impl Command<Session> for Printer {
        fn keywords(&self) -> &[&'static str] {
            &["print"]
        }

        fn usage(&self) -> Vec<String> {
            vec!["print <file>".to_string()]
        }

        fn summary(&self) -> &str {
            "send a file to the printer"
        }

        fn help_text(&self) -> String {
            String::new()
        }

        async fn execute(&self, _args: &mut ArgInput, _session: &mut Session) -> Result<(), CommandError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_listing_omits_reassigned_keywords() {
        let mut registry: CommandRegistry<Session> = CommandRegistry::new();
        registry.add(Arc::new(EchoCommand));
        registry.add(Arc::new(Printer));
        let mut session = Session::new(registry.describe());

        HelpCommand.execute(&mut ArgInput::default(), &mut session).await.unwrap();
        assert!(!session.stdout.contains("echo, print"));
        assert!(session.stdout.contains("echo "));
        assert!(session.stdout.contains("send a file to the printer"));

        let mut topic = Session::new(registry.describe());
        HelpCommand.execute(&mut ArgInput::from(["print"]), &mut topic).await.unwrap();
        assert!(topic.stdout.starts_with("print - send a file"));
    }

    #[tokio::test]
    async fn test_help_unknown_topic() {
        let mut session = create_session();
        let mut args = ArgInput::from(["nope"]);
        HelpCommand.execute(&mut args, &mut session).await.unwrap();

        assert_eq!(session.exit_code, 1);
        assert!(session.stdout.is_empty());
        assert!(session.stderr.contains("nope"));
    }
}
