//! Reading and writing contacts in the line-oriented text format.
//!
//! Includes:
//! - `line`: pure encoding/decoding of the `id | name | phone | email | info` format.
//! - `file`: export/import of that format to and from files on disk.

mod file;
mod line;

pub use file::*;
pub use line::*;
