//! A small molecular-geometry toolkit: pairwise distances and angles, distance-window
//! bond inference, and plain-text coordinate file I/O.
//!
//! # Features
//!
//! - **Geometry**: Euclidean [`distance`] and vertex [`angle`] between points,
//!   with an explicit [`DomainError`] for zero-length rays
//! - **Bond inference**: [`build_bond_graph`] keeps every atom pair whose
//!   separation lies strictly inside a [`BondWindow`]
//! - **Atom properties**: static atomic weight ([`weight_of`]) and display color
//!   ([`color_of`]) tables, plus molecular mass and centre of mass
//! - **I/O**: read/write XYZ and read PDB through [`io`]
//! - **Configuration**: TOML analysis settings through [`Config`]
//!
//! # Quick Start
//!
//! ```
//! use molecool::{AngleUnit, AtomSet, BondWindow, angle, build_bond_graph, distance};
//!
//! // Water, O–H 0.9572 Å, H–O–H 104.52°
//! let water = AtomSet::from_parts(
//!     &["O", "H", "H"],
//!     &[[0.0, 0.0, 0.0], [0.9572, 0.0, 0.0], [-0.2400, 0.9266, 0.0]],
//! )?;
//!
//! let bonds = build_bond_graph(&water, &BondWindow::default());
//! assert_eq!(bonds.len(), 2);
//! assert!(bonds.contains(0, 1));
//! assert!(bonds.contains(2, 0));
//! assert!(!bonds.contains(1, 2));
//!
//! let oh = distance(water.atoms[0].position, water.atoms[1].position);
//! assert!((oh - 0.9572).abs() < 1e-12);
//!
//! let hoh = angle(
//!     water.atoms[1].position,
//!     water.atoms[0].position,
//!     water.atoms[2].position,
//!     AngleUnit::Degrees,
//! )?;
//! assert!((hoh - 104.52).abs() < 0.01);
//!
//! let mass = water.molecular_mass()?;
//! assert!((mass - 18.01468).abs() < 1e-9);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`geometry`]: Distance and angle primitives
//! - [`bonds`]: Bond window, bond graph and inference
//! - [`model`]: Atoms, atom sets and property tables
//! - [`io`]: XYZ and PDB readers and writers
//! - [`config`]: TOML-backed analysis settings

pub mod bonds;
pub mod config;
pub mod geometry;
pub mod io;
pub mod model;

pub use model::atom::{Atom, Point};
pub use model::properties::{
    COLORED_ELEMENTS, Color, LookupError, PropertyTable, WEIGHTED_ELEMENTS, color_of, weight_of,
};
pub use model::system::{AtomSet, ValidationError};

pub use geometry::{AngleUnit, DomainError, Endpoint, angle, distance};

pub use bonds::{
    AtomPair, BondGraph, BondWindow, build_bond_graph, build_bond_graph_from_points,
    measure_bonded_angles,
};

pub use config::{AngleSettings, Config, ConfigError};
