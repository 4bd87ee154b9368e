//! Handles Command Line Interface (CLI) related functionalities.
//!
//! Includes defining commands, parsing arguments, handling user interaction
//! (prompts, menus), rendering contacts, and the `App` that owns the session's store.

mod commands;
mod prompts;
mod render;

pub use commands::*;
pub use prompts::*;
