//! XYZ coordinate files: an atom count line, a free-text comment line, then one
//! `symbol x y z` line per atom.

mod reader;
mod writer;

pub use reader::read;
pub use writer::{write, write_parts};
