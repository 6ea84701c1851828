//! Driver
//!
//! Builds a registry from the configured units, dispatches one token list
//! and turns the outcome into a `CommandResult`.

use crate::commands::{builtin_catalog, CommandError, CommandRegistry, CommandResult, Session};
use crate::config::DispatchOptions;
use crate::input::ArgInput;

/// Exit code when the keyword has no command.
pub const EXIT_NOT_FOUND: i32 = 127;
/// Exit code for usage errors and bad configuration.
pub const EXIT_USAGE: i32 = 2;

/// Build the registry described by `options`.
pub fn build_registry(options: &DispatchOptions) -> Result<CommandRegistry<Session>, CommandResult> {
    let units = builtin_catalog()
        .select(options.units.as_slice())
        .map_err(|e| CommandResult::error(format!("{}\n", e), EXIT_USAGE))?;

    CommandRegistry::create(&units).map_err(|e| CommandResult::error(format!("{}\n", e), EXIT_USAGE))
}

/// Dispatch `tokens` against the configured registry.
pub async fn run(options: &DispatchOptions, tokens: Vec<String>) -> CommandResult {
    let registry = match build_registry(options) {
        Ok(registry) => registry,
        Err(result) => return result,
    };

    let mut session = Session::new(registry.describe());
    let mut args = ArgInput::new(tokens);

    match registry.dispatch(&mut args, &mut session).await {
        Ok(()) => {}
        Err(CommandError::NotFound(e)) => {
            session.errln(&e.to_string());
            if let Some(keyword) = registry.help_command().and_then(|c| c.keywords().first().copied()) {
                session.errln(&format!("Try '{}' for a list of commands.", keyword));
            }
            session.exit_code = EXIT_NOT_FOUND;
        }
        Err(e @ CommandError::Usage { .. }) => {
            session.errln(&e.to_string());
            session.exit_code = EXIT_USAGE;
        }
        Err(e) => {
            session.errln(&e.to_string());
            session.exit_code = 1;
        }
    }

    session.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_run_echo() {
        let result = run(&DispatchOptions::default(), tokens(&["echo", "hi"])).await;
        assert_eq!(result, CommandResult::success("hi\n".to_string()));
    }

    #[tokio::test]
    async fn test_run_empty_is_silent() {
        let result = run(&DispatchOptions::default(), vec![]).await;
        assert_eq!(result, CommandResult::success(String::new()));
    }

    #[tokio::test]
    async fn test_run_not_found_suggests_help() {
        let result = run(&DispatchOptions::default(), tokens(&["frobnicate"])).await;
        assert_eq!(result.exit_code, EXIT_NOT_FOUND);
        assert!(result.stderr.contains("\"frobnicate\""));
        assert!(result.stderr.contains("Try 'help'"));
    }

    #[tokio::test]
    async fn test_run_not_found_without_help_command() {
        let options = DispatchOptions { units: vec!["text".to_string()], ..Default::default() };
        let result = run(&options, tokens(&["help"])).await;
        assert_eq!(result.exit_code, EXIT_NOT_FOUND);
        assert!(!result.stderr.contains("Try"));
    }

    #[tokio::test]
    async fn test_run_usage_error() {
        let result = run(&DispatchOptions::default(), tokens(&["rev"])).await;
        assert_eq!(result.exit_code, EXIT_USAGE);
        assert_eq!(result.stderr, "rev: missing operand\n");
    }

    #[tokio::test]
    async fn test_run_unknown_unit() {
        let options = DispatchOptions { units: vec!["core".to_string(), "net".to_string()], ..Default::default() };
        let result = run(&options, tokens(&["help"])).await;
        assert_eq!(result.exit_code, EXIT_USAGE);
        assert!(result.stderr.contains("Unknown command unit 'net'"));
    }

    #[tokio::test]
    async fn test_help_command_output_topic() {
        let result = run(&DispatchOptions::default(), tokens(&["help", "rev"])).await;
        assert_eq!(result.exit_code, 0);
        assert!(result.stdout.contains("rev <text> [text...]"));
    }
}
