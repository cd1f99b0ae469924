//! Core data structures describing a molecule's geometry.
//!
//! - [`atom`] – [`Point`](atom::Point) coordinates and the single [`Atom`](atom::Atom).
//! - [`system`] – The ordered [`AtomSet`](system::AtomSet) and its mass analysis.
//! - [`properties`] – Static atomic weight and display color tables.

pub mod atom;
pub mod properties;
pub mod system;
