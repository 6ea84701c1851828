// src/commands/types.rs
use async_trait::async_trait;
use thiserror::Error;
use crate::input::ArgInput;

/// Raised by dispatch when a keyword has no registered command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No command found for the keyword \"{keyword}\"")]
pub struct CommandNotFound {
    pub keyword: String,
}

impl CommandNotFound {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self { keyword: keyword.into() }
    }
}

/// Default failure type for commands and dispatch.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    NotFound(#[from] CommandNotFound),

    #[error("{keyword}: {message}")]
    Usage { keyword: String, message: String },

    #[error("{0}")]
    Failed(String),
}

impl CommandError {
    pub fn usage(keyword: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Usage { keyword: keyword.into(), message: message.into() }
    }
}

/// 命令 trait
///
/// `C` is the context the caller passes through dispatch; `E` is what a
/// failed execution produces.
#[async_trait]
pub trait Command<C, E = CommandError>: Send + Sync
where
    C: Send,
{
    /// Keywords this command is registered under. Never empty.
    fn keywords(&self) -> &[&'static str];

    fn usage(&self) -> Vec<String>;

    /// One-line summary for command listings.
    fn summary(&self) -> &str;

    fn help_text(&self) -> String;

    /// Run the command. `args` is already advanced past the keyword.
    async fn execute(&self, args: &mut ArgInput, ctx: &mut C) -> Result<(), E>;
}

/// Snapshot of a command's help surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInfo {
    pub keywords: Vec<String>,
    pub usage: Vec<String>,
    pub summary: String,
    pub help_text: String,
}

impl CommandInfo {
    pub fn of<C, E, T>(command: &T) -> Self
    where
        C: Send,
        T: Command<C, E> + ?Sized,
    {
        Self {
            keywords: command.keywords().iter().map(|k| k.to_string()).collect(),
            usage: command.usage(),
            summary: command.summary().to_string(),
            help_text: command.help_text(),
        }
    }

    /// First keyword, used as the display name.
    pub fn name(&self) -> &str {
        self.keywords.first().map(String::as_str).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = CommandNotFound::new("frobnicate");
        assert_eq!(err.to_string(), "No command found for the keyword \"frobnicate\"");
    }

    #[test]
    fn test_command_error_from_not_found() {
        let err: CommandError = CommandNotFound::new("x").into();
        assert!(matches!(err, CommandError::NotFound(ref e) if e.keyword == "x"));
        assert_eq!(err.to_string(), "No command found for the keyword \"x\"");
    }

    #[test]
    fn test_usage_message() {
        let err = CommandError::usage("rev", "missing operand");
        assert_eq!(err.to_string(), "rev: missing operand");
    }
}
