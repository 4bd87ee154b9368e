//! In-memory contact storage.
//!
//! The store lives for the whole session and is owned by the CLI `App`;
//! import/export through the `codec` module is the only way data enters or leaves it.

mod contact_store;

pub use contact_store::*;
