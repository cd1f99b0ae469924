use crate::io::error::Error;
use crate::model::{
    atom::Point,
    system::{AtomSet, ValidationError},
};
use std::io::Write;

/// Writes `atoms` as a single XYZ frame.
pub fn write<W: Write>(writer: W, atoms: &AtomSet) -> Result<(), Error> {
    write_frame(
        writer,
        atoms.atom_count(),
        &atoms.comment,
        atoms.atoms.iter().map(|a| (a.symbol.as_str(), a.position)),
    )
}

/// Writes parallel symbol and coordinate sequences as a single XYZ frame.
///
/// # Errors
///
/// Returns [`Error::Validation`] when the two sequences differ in length.
pub fn write_parts<W, S>(
    writer: W,
    symbols: &[S],
    coordinates: &[Point],
    comment: &str,
) -> Result<(), Error>
where
    W: Write,
    S: AsRef<str>,
{
    if symbols.len() != coordinates.len() {
        return Err(ValidationError {
            symbols: symbols.len(),
            coordinates: coordinates.len(),
        }
        .into());
    }

    write_frame(
        writer,
        symbols.len(),
        comment,
        symbols
            .iter()
            .map(|s| s.as_ref())
            .zip(coordinates.iter().copied()),
    )
}

fn write_frame<'a, W, I>(
    mut writer: W,
    count: usize,
    comment: &str,
    atoms: I,
) -> Result<(), Error>
where
    W: Write,
    I: Iterator<Item = (&'a str, Point)>,
{
    writeln!(writer, "{count}")?;
    // The comment must stay on one line or it would shift every atom record.
    writeln!(writer, "{}", comment.replace(['\r', '\n'], " "))?;

    for (symbol, [x, y, z]) in atoms {
        writeln!(writer, "{symbol:<3}{x:>16.8}{y:>16.8}{z:>16.8}")?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::xyz::reader;
    use std::io::Cursor;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn writes_expected_layout() {
        let set = AtomSet::from_parts(&["Cl", "H"], &[[0.0, 0.0, 0.0], [1.27, -0.5, 2.0]])
            .unwrap()
            .with_comment("hydrogen chloride");

        let mut buf = Vec::new();
        write(&mut buf, &set).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "2");
        assert_eq!(lines[1], "hydrogen chloride");
        assert_eq!(
            lines[3],
            "H        1.27000000     -0.50000000      2.00000000"
        );
    }

    #[test]
    fn writes_and_reads_roundtrip() {
        let set = AtomSet::from_parts(
            &["C", "O", "N", "Br"],
            &[
                [0.0, 0.0, 0.0],
                [1.2345678912, -0.000000001, 3.5],
                [-12.75, 8.125, -0.333333333],
                [100.5, -100.25, 0.1],
            ],
        )
        .unwrap()
        .with_comment("roundtrip");

        let mut buf = Vec::new();
        write(&mut buf, &set).unwrap();
        let parsed = reader::read(Cursor::new(buf)).unwrap();

        assert_eq!(parsed.comment, set.comment);
        assert_eq!(parsed.atom_count(), set.atom_count());
        for (a, b) in set.atoms.iter().zip(parsed.atoms.iter()) {
            assert_eq!(a.symbol, b.symbol);
            for k in 0..3 {
                assert!(approx_eq(a.position[k], b.position[k], 1e-8));
            }
        }
    }

    #[test]
    fn multiline_comment_is_flattened() {
        let set = AtomSet::from_parts(&["H"], &[[0.0; 3]])
            .unwrap()
            .with_comment("first\nsecond");
        let mut buf = Vec::new();
        write(&mut buf, &set).unwrap();

        let parsed = reader::read(Cursor::new(buf)).unwrap();
        assert_eq!(parsed.comment, "first second");
        assert_eq!(parsed.atom_count(), 1);
    }

    #[test]
    fn write_parts_matches_write() {
        let symbols = ["O", "H"];
        let coords = [[0.0, 0.0, 0.0], [0.96, 0.0, 0.0]];

        let mut from_parts = Vec::new();
        write_parts(&mut from_parts, &symbols, &coords, "c").unwrap();

        let mut from_set = Vec::new();
        let set = AtomSet::from_parts(&symbols, &coords)
            .unwrap()
            .with_comment("c");
        write(&mut from_set, &set).unwrap();

        assert_eq!(from_parts, from_set);
    }

    #[test]
    fn write_parts_rejects_count_mismatch() {
        let mut buf = Vec::new();
        let err = write_parts(&mut buf, &["O", "H", "H"], &[[0.0; 3]], "").unwrap_err();
        match err {
            Error::Validation(v) => {
                assert_eq!(v.symbols, 3);
                assert_eq!(v.coordinates, 1);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(buf.is_empty());
    }
}
