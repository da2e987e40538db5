//! Command handlers, one module per verb.

pub mod add;
pub mod delete;
pub mod list;
pub mod misc;
pub mod read;
pub mod rename;
pub mod upgrade;
