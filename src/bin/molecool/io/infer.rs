use std::path::Path;

use molecool::io::Format;

fn extension(path: &Path) -> Option<String> {
    Some(path.extension()?.to_str()?.to_ascii_lowercase())
}

pub fn input(path: &Path) -> Option<Format> {
    match extension(path)?.as_str() {
        "xyz" => Some(Format::Xyz),
        "pdb" | "ent" => Some(Format::Pdb),
        _ => None,
    }
}

/// Only formats with a writer are inferred; a `.pdb` target has to be named explicitly.
pub fn output(path: &Path) -> Option<Format> {
    match extension(path)?.as_str() {
        "xyz" => Some(Format::Xyz),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_extensions_are_case_insensitive() {
        assert_eq!(input(Path::new("water.XYZ")), Some(Format::Xyz));
        assert_eq!(input(Path::new("1abc.ent")), Some(Format::Pdb));
        assert_eq!(input(Path::new("dir/protein.Pdb")), Some(Format::Pdb));
    }

    #[test]
    fn unknown_or_missing_extension() {
        assert_eq!(input(Path::new("ligand.mol2")), None);
        assert_eq!(input(Path::new("README")), None);
    }

    #[test]
    fn pdb_is_not_an_output_format() {
        assert_eq!(output(Path::new("out.xyz")), Some(Format::Xyz));
        assert_eq!(output(Path::new("out.pdb")), None);
    }
}
