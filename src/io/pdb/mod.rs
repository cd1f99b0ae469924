//! Protein Data Bank coordinate records (read-only).

mod reader;

pub use reader::read;
