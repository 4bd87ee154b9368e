//! Defines the data structures and models used throughout the application.
//!
//! This includes the contact record itself, the names of its editable fields,
//! and the result types reported back to the CLI after an edit.

mod contact;

pub use contact::*;
