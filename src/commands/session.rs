// src/commands/session.rs
use std::sync::Arc;
use serde::Serialize;
use super::types::CommandInfo;

/// 命令执行结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    #[serde(rename = "exitCode")]
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self { stdout, stderr: String::new(), exit_code: 0 }
    }

    pub fn error(stderr: String, exit_code: i32) -> Self {
        Self { stdout: String::new(), stderr, exit_code }
    }
}

/// Context handed to the built-in commands: collected output plus a
/// snapshot of what is registered, for `help`.
#[derive(Debug, Clone)]
pub struct Session {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub commands: Arc<[CommandInfo]>,
}

impl Session {
    pub fn new(commands: impl Into<Arc<[CommandInfo]>>) -> Self {
        Self {
            stdout: String::new(),
            stderr: String::new(),
            exit_code: 0,
            commands: commands.into(),
        }
    }

    pub fn out(&mut self, text: &str) {
        self.stdout.push_str(text);
    }

    pub fn outln(&mut self, line: &str) {
        self.stdout.push_str(line);
        self.stdout.push('\n');
    }

    pub fn errln(&mut self, line: &str) {
        self.stderr.push_str(line);
        self.stderr.push('\n');
    }

    /// Look up a command snapshot by any of its keywords.
    pub fn lookup(&self, keyword: &str) -> Option<&CommandInfo> {
        self.commands.iter().rev().find(|info| info.keywords.iter().any(|k| k == keyword))
    }

    pub fn into_result(self) -> CommandResult {
        CommandResult {
            stdout: self.stdout,
            stderr: self.stderr,
            exit_code: self.exit_code,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
