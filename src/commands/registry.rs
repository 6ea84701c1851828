// src/commands/registry.rs
use std::sync::Arc;
use indexmap::IndexMap;
use crate::input::ArgInput;
use super::types::{Command, CommandError, CommandInfo, CommandNotFound};

/// Shared handle to a registered command.
pub type CommandRef<C, E = CommandError> = Arc<dyn Command<C, E>>;

/// Keyword table and dispatcher.
///
/// Populate it with `add` (or a loader) first, then dispatch. Registration
/// takes `&mut self` and dispatch takes `&self`, so the two phases cannot
/// overlap on one registry.
pub struct CommandRegistry<C: Send, E = CommandError> {
    commands: Vec<CommandRef<C, E>>,
    keywords: IndexMap<String, CommandRef<C, E>>,
    help_command: Option<CommandRef<C, E>>,
}

impl<C: Send, E> CommandRegistry<C, E> {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            keywords: IndexMap::new(),
            help_command: None,
        }
    }

    /// Register a command under all of its keywords.
    ///
    /// Adding the same instance twice is a no-op. A keyword already owned by
    /// another command is reassigned to this one.
    pub fn add(&mut self, command: CommandRef<C, E>) {
        if self.contains(&command) {
            return;
        }

        for keyword in command.keywords() {
            let previous = self.keywords.insert(keyword.to_string(), command.clone());
            if previous.is_some() {
                log::debug!("keyword '{}' reassigned to the latest registration", keyword);
            }
        }
        log::trace!("registered command '{}'", command.keywords().first().copied().unwrap_or_default());
        self.commands.push(command);
    }

    /// Exact-match keyword lookup.
    pub fn find(&self, keyword: &str) -> Option<&CommandRef<C, E>> {
        self.keywords.get(keyword)
    }

    pub fn contains(&self, command: &CommandRef<C, E>) -> bool {
        self.commands.iter().any(|c| Arc::ptr_eq(c, command))
    }

    pub fn help_command(&self) -> Option<&CommandRef<C, E>> {
        self.help_command.as_ref()
    }

    /// Designate the help command. This does not register it.
    pub fn set_help_command(&mut self, command: CommandRef<C, E>) {
        self.help_command = Some(command);
    }

    /// Registered commands in registration order.
    pub fn commands(&self) -> &[CommandRef<C, E>] {
        &self.commands
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Help snapshots in registration order. Keywords taken over by a later
    /// registration are left out, and so are commands with none left.
    pub fn describe(&self) -> Vec<CommandInfo> {
        self.commands
            .iter()
            .filter_map(|c| {
                let mut info = CommandInfo::of::<C, E, _>(c.as_ref());
                info.keywords.retain(|k| self.find(k).is_some_and(|owner| Arc::ptr_eq(owner, c)));
                (!info.keywords.is_empty()).then_some(info)
            })
            .collect()
    }
}

impl<C: Send, E: From<CommandNotFound>> CommandRegistry<C, E> {
    /// Consume one keyword from `args` and run the matching command with
    /// the rest of the cursor.
    ///
    /// No keyword left, or an empty one, is a silent no-op. Whatever the
    /// command returns is passed back untouched.
    pub async fn dispatch(&self, args: &mut ArgInput, ctx: &mut C) -> Result<(), E> {
        let Some(keyword) = args.next().filter(|k| !k.is_empty()) else {
            return Ok(());
        };

        let command = self
            .find(&keyword)
            .ok_or_else(|| CommandNotFound::new(keyword.as_str()))?;

        log::debug!("dispatching '{}' with {} remaining token(s)", keyword, args.remaining());
        command.execute(args, ctx).await
    }
}

impl<C: Send, E> Default for CommandRegistry<C, E> {
    fn default() -> Self {
        Self::new()
    }
}
