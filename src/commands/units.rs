// src/commands/units.rs
use std::sync::Arc;
use super::echo::EchoCommand;
use super::help_cmd::HelpCommand;
use super::loader::{CommandUnit, UnitCatalog};
use super::registry::{CommandRef, CommandRegistry};
use super::rev_cmd::RevCommand;
use super::session::Session;
use super::version_cmd::VersionCommand;

/// `help` (also the designated help command) and `version`.
pub fn core_unit() -> CommandUnit<Session> {
    CommandUnit::new("core", |registry: &mut CommandRegistry<Session>| {
        let help: CommandRef<Session> = Arc::new(HelpCommand);
        registry.add(help.clone());
        registry.set_help_command(help);
        registry.add(Arc::new(VersionCommand));
    })
}

/// `echo`/`print` and `rev`.
pub fn text_unit() -> CommandUnit<Session> {
    CommandUnit::new("text", |registry: &mut CommandRegistry<Session>| {
        registry.add(Arc::new(EchoCommand));
        registry.add(Arc::new(RevCommand));
    })
}

/// Every unit shipped with the crate.
pub fn builtin_catalog() -> UnitCatalog<Session> {
    let mut catalog = UnitCatalog::new();
    catalog.insert("core", core_unit);
    catalog.insert("text", text_unit);
    catalog
}
