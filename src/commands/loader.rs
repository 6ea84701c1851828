// src/commands/loader.rs
//! Command units and the registrar capability.
//!
//! A unit is whatever a discovery mechanism produced for one source of
//! commands. Loading it only requires that it exposes a registrar; how the
//! units were found is up to the caller.

use indexmap::IndexMap;
use thiserror::Error;
use super::registry::CommandRegistry;
use super::types::CommandError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Could not find a registrar in unit '{unit}'")]
    MissingRegistrar { unit: String },

    #[error("Unknown command unit '{name}'")]
    UnknownUnit { name: String },
}

/// Something that adds commands to a registry.
pub trait Registrar<C: Send, E = CommandError>: Send + Sync {
    fn register(&self, registry: &mut CommandRegistry<C, E>);
}

impl<C: Send, E, F> Registrar<C, E> for F
where
    F: Fn(&mut CommandRegistry<C, E>) + Send + Sync,
{
    fn register(&self, registry: &mut CommandRegistry<C, E>) {
        self(registry)
    }
}

/// A named unit of commands with an optional registrar.
pub struct CommandUnit<C: Send, E = CommandError> {
    name: String,
    registrar: Option<Box<dyn Registrar<C, E>>>,
}

impl<C: Send, E> CommandUnit<C, E> {
    pub fn new(name: impl Into<String>, registrar: impl Registrar<C, E> + 'static) -> Self {
        Self { name: name.into(), registrar: Some(Box::new(registrar)) }
    }

    /// A unit that was found but exposes nothing to register.
    pub fn without_registrar(name: impl Into<String>) -> Self {
        Self { name: name.into(), registrar: None }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registrar(&self) -> Option<&dyn Registrar<C, E>> {
        self.registrar.as_deref()
    }
}

impl<C: Send, E> CommandRegistry<C, E> {
    /// Run the unit's registrar against this registry.
    pub fn load(&mut self, unit: &CommandUnit<C, E>) -> Result<(), LoadError> {
        let registrar = unit.registrar().ok_or_else(|| LoadError::MissingRegistrar {
            unit: unit.name().to_string(),
        })?;
        let before = self.len();
        registrar.register(self);
        log::debug!("loaded unit '{}' ({} new command(s))", unit.name(), self.len() - before);
        Ok(())
    }

    /// Load units in order, stopping at the first malformed one.
    pub fn load_all<'a, I>(&mut self, units: I) -> Result<(), LoadError>
    where
        I: IntoIterator<Item = &'a CommandUnit<C, E>>,
        C: 'a,
        E: 'a,
    {
        for unit in units {
            self.load(unit)?;
        }
        Ok(())
    }

    /// Fresh registry populated from `units`.
    pub fn create<'a, I>(units: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = &'a CommandUnit<C, E>>,
        C: 'a,
        E: 'a,
    {
        let mut registry = Self::new();
        registry.load_all(units)?;
        Ok(registry)
    }
}

type UnitFactory<C, E> = Box<dyn Fn() -> CommandUnit<C, E> + Send + Sync>;

/// Named table of the units a program knows how to build.
pub struct UnitCatalog<C: Send, E = CommandError> {
    factories: IndexMap<String, UnitFactory<C, E>>,
}

impl<C: Send, E> UnitCatalog<C, E> {
    pub fn new() -> Self {
        Self { factories: IndexMap::new() }
    }

    /// Add a unit factory. A later entry with the same name replaces the
    /// earlier one.
    pub fn insert<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> CommandUnit<C, E> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(|k| k.as_str())
    }

    /// Build every known unit in catalog order.
    pub fn all(&self) -> Vec<CommandUnit<C, E>> {
        self.factories.values().map(|f| f()).collect()
    }

    /// Build the named units in the order requested.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<CommandUnit<C, E>>, LoadError> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.factories
                    .get(name)
                    .map(|f| f())
                    .ok_or_else(|| LoadError::UnknownUnit { name: name.to_string() })
            })
            .collect()
    }
}

impl<C: Send, E> Default for UnitCatalog<C, E> {
    fn default() -> Self {
        Self::new()
    }
}
