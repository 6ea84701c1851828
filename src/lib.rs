//! keyword-dispatch - Keyword-based command dispatch
//!
//! An `ArgInput` cursor walks an already-split token list. A
//! `CommandRegistry` takes the first token as a keyword, finds the command
//! registered under it and hands that command the rest of the cursor.

pub mod commands;
pub mod config;
pub mod driver;
pub mod input;

pub use commands::{Command, CommandError, CommandNotFound, CommandRegistry, CommandUnit, LoadError, Registrar};
pub use config::{ConfigError, DispatchOptions};
pub use input::ArgInput;
