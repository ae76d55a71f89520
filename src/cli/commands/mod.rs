//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Built-ins are `init`, `doctor`
//! and `config`; everything else goes to [`passthrough`].

pub mod config;
pub mod dispatcher;
pub mod doctor;
pub mod init;
pub mod passthrough;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
