//! Application-level utilities for the Crypt CLI.
//!
//! This module provides:
//! - Application context for unified CLI + config handling
//! - Path resolution for config and store files
//! - The terminal-backed password and hint source

mod context;
mod operator;
mod resolver;

pub use context::AppContext;
pub use operator::TerminalOperator;
