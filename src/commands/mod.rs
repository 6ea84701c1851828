// src/commands/mod.rs
pub mod echo;
pub mod help_cmd;
pub mod loader;
pub mod registry;
pub mod rev_cmd;
pub mod session;
pub mod types;
pub mod units;
pub mod version_cmd;

pub use echo::EchoCommand;
pub use help_cmd::HelpCommand;
pub use loader::{CommandUnit, LoadError, Registrar, UnitCatalog};
pub use registry::{CommandRef, CommandRegistry};
pub use rev_cmd::RevCommand;
pub use session::{CommandResult, Session};
pub use types::{Command, CommandError, CommandInfo, CommandNotFound};
pub use units::{builtin_catalog, core_unit, text_unit};
pub use version_cmd::VersionCommand;
