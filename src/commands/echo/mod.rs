// src/commands/echo/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandError, Session};
use crate::input::ArgInput;

pub struct EchoCommand;

#[async_trait]
impl Command<Session> for EchoCommand {
    fn keywords(&self) -> &[&'static str] {
        &["echo", "print"]
    }

    fn usage(&self) -> Vec<String> {
        vec!["echo [-neE] [text...]".to_string()]
    }

    fn summary(&self) -> &str {
        "write arguments to standard output"
    }

    fn help_text(&self) -> String {
        "Options:\n  -n    do not output the trailing newline\n  -e    interpret backslash escapes\n  -E    do not interpret backslash escapes (default)".to_string()
    }

    async fn execute(&self, args: &mut ArgInput, session: &mut Session) -> Result<(), CommandError> {
        let mut no_newline = false;
        let mut interpret_escapes = false;

        // Leading flags only; the first non-flag token ends option parsing
        while let Some(flag) = args.current() {
            match flag {
                "-n" => no_newline = true,
                "-e" => interpret_escapes = true,
                "-E" => interpret_escapes = false,
                "-ne" | "-en" => {
                    no_newline = true;
                    interpret_escapes = true;
                }
                _ => break,
            }
            args.next();
        }

        let mut output = args.by_ref().collect::<Vec<_>>().join(" ");

        if interpret_escapes {
            let result = process_escapes(&output);
            output = result.output;
            if result.stop {
                // \c encountered - suppress newline and stop
                session.out(&output);
                return Ok(());
            }
        }

        if !no_newline {
            output.push('\n');
        }

        session.out(&output);
        Ok(())
    }
}

/// Result of processing escape sequences
struct EscapeResult {
    output: String,
    stop: bool,
}

/// Process `echo -e` escape sequences
fn process_escapes(input: &str) -> EscapeResult {
    let mut result = String::new();
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        match chars.next() {
            None => result.push('\\'),
            Some('\\') => result.push('\\'),
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('a') => result.push('\x07'),
            Some('e') | Some('E') => result.push('\x1b'),
            Some('c') => return EscapeResult { output: result, stop: true },
            Some(other) => {
                // Unknown escape - keep the backslash and character
                result.push('\\');
                result.push(other);
            }
        }
    }

    EscapeResult { output: result, stop: false }
}
