//! Bond inference from raw coordinates.
//!
//! [`build_bond_graph`] examines every unordered atom pair exactly once and keeps
//! the pairs whose separation lies strictly inside a [`BondWindow`]. The scan is
//! quadratic in atom count and is meant for molecules of up to a few hundred atoms.

mod graph;

pub use graph::{AtomPair, BondGraph, Iter};

use crate::geometry::{AngleUnit, DomainError, angle, distance};
use crate::model::atom::Point;
use crate::model::system::AtomSet;
use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Open distance interval `(min_bond, max_bond)` in Ångström.
///
/// A pair is bonded when `min_bond < d < max_bond`. Distances equal to either
/// bound are excluded. A window with `min_bond >= max_bond` admits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BondWindow {
    pub min_bond: f64,
    pub max_bond: f64,
}

impl Default for BondWindow {
    fn default() -> Self {
        Self {
            min_bond: 0.0,
            max_bond: 1.5,
        }
    }
}

impl BondWindow {
    pub fn new(min_bond: f64, max_bond: f64) -> Self {
        Self { min_bond, max_bond }
    }

    #[inline]
    pub fn contains(&self, d: f64) -> bool {
        self.min_bond < d && d < self.max_bond
    }

    /// `true` when no distance can satisfy the window.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min_bond >= self.max_bond
    }
}

/// Builds the bond graph of `atoms` under `window`.
pub fn build_bond_graph(atoms: &AtomSet, window: &BondWindow) -> BondGraph {
    let points = atoms.coordinates();
    build_bond_graph_from_points(&points, window)
}

/// Builds the bond graph of a bare coordinate slice; indices follow slice order.
pub fn build_bond_graph_from_points(points: &[Point], window: &BondWindow) -> BondGraph {
    let n = points.len();
    let mut bonds = BTreeMap::new();

    for i in 0..n {
        for j in (i + 1)..n {
            let d = distance(points[i], points[j]);
            if window.contains(d) {
                bonds.insert(AtomPair::new(i, j), d);
            }
        }
    }

    debug!(
        "bond scan: {} atoms, {} pairs, {} bonds in ({}, {})",
        n,
        n * n.saturating_sub(1) / 2,
        bonds.len(),
        window.min_bond,
        window.max_bond
    );

    BondGraph::from_map(bonds)
}

/// Measures the angle of every bonded triple in `graph`, as returned by
/// [`BondGraph::bonded_angles`].
///
/// # Errors
///
/// Propagates [`DomainError`] when coincident atoms were bonded, which only a
/// negative `min_bond` allows.
///
/// # Panics
///
/// Panics if `graph` refers to an index past the end of `atoms`, i.e. it was
/// built from a different atom set.
pub fn measure_bonded_angles(
    atoms: &AtomSet,
    graph: &BondGraph,
    unit: AngleUnit,
) -> Result<Vec<([usize; 3], f64)>, DomainError> {
    graph
        .bonded_angles()
        .into_iter()
        .map(|[a, b, c]| {
            let value = angle(
                atoms.atoms[a].position,
                atoms.atoms[b].position,
                atoms.atoms[c].position,
                unit,
            )?;
            Ok(([a, b, c], value))
        })
        .collect()
}
