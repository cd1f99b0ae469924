use super::atom::{Atom, Point};
use super::properties::{LookupError, weight_of};
use thiserror::Error;

/// Raised when parallel symbol and coordinate sequences disagree in length.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("symbol count ({symbols}) does not match coordinate count ({coordinates})")]
pub struct ValidationError {
    pub symbols: usize,
    pub coordinates: usize,
}

/// Ordered collection of atoms. An atom's index in `atoms` is its identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtomSet {
    pub atoms: Vec<Atom>,
    pub comment: String,
}

impl AtomSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zips parallel symbol and coordinate sequences into an atom set.
    pub fn from_parts<S>(symbols: &[S], coordinates: &[Point]) -> Result<Self, ValidationError>
    where
        S: AsRef<str>,
    {
        if symbols.len() != coordinates.len() {
            return Err(ValidationError {
                symbols: symbols.len(),
                coordinates: coordinates.len(),
            });
        }

        let atoms = symbols
            .iter()
            .zip(coordinates)
            .map(|(symbol, position)| Atom::new(symbol.as_ref(), *position))
            .collect();

        Ok(Self {
            atoms,
            comment: String::new(),
        })
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> + '_ {
        self.atoms.iter().map(|a| a.symbol.as_str())
    }

    /// Coordinates as an `N × 3` array.
    pub fn coordinates(&self) -> Vec<Point> {
        self.atoms.iter().map(|a| a.position).collect()
    }

    /// Sum of the atomic weights of all atoms.
    pub fn molecular_mass(&self) -> Result<f64, LookupError> {
        self.atoms.iter().map(|a| weight_of(&a.symbol)).sum()
    }

    /// Mass-weighted mean position. An empty set yields the origin.
    pub fn center_of_mass(&self) -> Result<Point, LookupError> {
        let mut total = 0.0;
        let mut weighted = [0.0; 3];

        for atom in &self.atoms {
            let mass = weight_of(&atom.symbol)?;
            total += mass;
            for (acc, x) in weighted.iter_mut().zip(atom.position) {
                *acc += mass * x;
            }
        }

        if total == 0.0 {
            return Ok([0.0; 3]);
        }

        Ok(weighted.map(|w| w / total))
    }
}
