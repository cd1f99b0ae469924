//! Reading and writing atom sets in plain-text coordinate formats.
//!
//! | Format | Read | Write |
//! |--------|------|-------|
//! | XYZ    | yes  | yes   |
//! | PDB    | yes  | no    |
//!
//! [`StructureReader`] and [`StructureWriter`] dispatch on [`Format`]; the
//! per-format modules can also be used directly.

use std::fmt;
use std::io::{BufRead, Write};

use crate::model::system::AtomSet;

pub mod error;
pub mod pdb;
pub mod util;
pub mod xyz;

pub use error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Xyz,
    Pdb,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Xyz => write!(f, "XYZ"),
            Format::Pdb => write!(f, "PDB"),
        }
    }
}

pub struct StructureReader<R> {
    reader: R,
    format: Format,
}

impl<R: BufRead> StructureReader<R> {
    pub fn new(reader: R, format: Format) -> Self {
        Self { reader, format }
    }

    pub fn read(self) -> Result<AtomSet, Error> {
        match self.format {
            Format::Xyz => xyz::read(self.reader),
            Format::Pdb => pdb::read(self.reader),
        }
    }
}

pub struct StructureWriter<W> {
    writer: W,
    format: Format,
}

impl<W: Write> StructureWriter<W> {
    pub fn new(writer: W, format: Format) -> Self {
        Self { writer, format }
    }

    pub fn write(self, atoms: &AtomSet) -> Result<(), Error> {
        match self.format {
            Format::Xyz => xyz::write(self.writer, atoms),
            Format::Pdb => Err(Error::UnsupportedWriteFormat(Format::Pdb)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn format_display() {
        assert_eq!(Format::Xyz.to_string(), "XYZ");
        assert_eq!(Format::Pdb.to_string(), "PDB");
    }

    #[test]
    fn reader_dispatches_on_format() {
        let set = StructureReader::new(Cursor::new("1\nc\nN 0 0 1\n"), Format::Xyz)
            .read()
            .unwrap();
        assert_eq!(set.atoms[0].symbol, "N");

        let err = StructureReader::new(Cursor::new("1\nc\nN 0 0 1\n"), Format::Pdb)
            .read()
            .unwrap_err();
        assert!(matches!(err, Error::Parse { format: Format::Pdb, .. }));
    }

    #[test]
    fn pdb_output_is_unsupported() {
        let set = AtomSet::from_parts(&["C"], &[[0.0; 3]]).unwrap();
        let mut buf = Vec::new();
        let err = StructureWriter::new(&mut buf, Format::Pdb)
            .write(&set)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "the 'PDB' format is not supported for this write operation"
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn xyz_writer_dispatch_roundtrips() {
        let set = AtomSet::from_parts(&["O", "H"], &[[0.0; 3], [0.0, 0.0, 0.97]])
            .unwrap()
            .with_comment("OH");
        let mut buf = Vec::new();
        StructureWriter::new(&mut buf, Format::Xyz)
            .write(&set)
            .unwrap();
        let back = StructureReader::new(Cursor::new(buf), Format::Xyz)
            .read()
            .unwrap();
        assert_eq!(back, set);
    }
}
