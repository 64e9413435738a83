//! Command construction and dispatch core for stubkit
//!
//! This crate provides the polymorphic command abstraction behind the
//! stubkit tool: a single-operation `Command` trait, its three concrete
//! variants (help, runner, stubber), and a stateless factory that builds
//! exactly one validated command per tool invocation.

pub mod commands;
pub mod error;
pub mod factory;
pub mod options;
pub mod stub;

pub use commands::{Command, HelpCommand, LaunchOptions, RunnerCommand, StubberCommand};
pub use error::{Error, Result};
pub use options::OptionsDescription;
pub use stub::{StubEngine, StubRequest};
