//! UI primitives for the Crypt CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges and text styles
//! - **Render**: Tables, receipts, hints, errors
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{receipt, print, UiContext};
//!
//! let ui = ctx.ui_context(args.json, args.format.as_deref());
//! if ui.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//! print(&ui, &receipt(&ui, "Stored notes.txt", &[("Name", "notes.txt")]));
//! ```

mod context;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;

pub use render::{hint, print, print_error, receipt, simple_table, warning, Column};
