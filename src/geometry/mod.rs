//! Euclidean distance and bond angle primitives over [`Point`]s.
//!
//! Everything here is a pure function of its arguments.

mod error;

pub use error::{DomainError, Endpoint};

use crate::model::atom::Point;
use serde::Deserialize;

/// Unit an angle is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    pub fn from_degrees_flag(in_degrees: bool) -> Self {
        if in_degrees {
            AngleUnit::Degrees
        } else {
            AngleUnit::Radians
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            AngleUnit::Radians => "rad",
            AngleUnit::Degrees => "°",
        }
    }

    fn convert(&self, radians: f64) -> f64 {
        match self {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        }
    }
}

#[inline]
fn sub(a: Point, b: Point) -> Point {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
fn dot(a: Point, b: Point) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Euclidean length. Nonzero for every nonzero `v`, finite for every finite `v`.
#[inline]
fn norm(v: Point) -> f64 {
    v[0].hypot(v[1]).hypot(v[2])
}

#[inline]
fn unit(v: Point, len: f64) -> Point {
    [v[0] / len, v[1] / len, v[2] / len]
}

/// Euclidean distance between `a` and `b`.
///
/// Non-negative for finite input and zero exactly when the points coincide.
/// The result for non-finite components is unspecified.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    norm(sub(a, b))
}

/// Angle at vertex `b` formed by the rays `b→a` and `b→c`.
///
/// # Errors
///
/// Returns [`DomainError::ZeroLengthRay`] when `b` coincides with `a` or `c`.
pub fn angle(a: Point, b: Point, c: Point, unit: AngleUnit) -> Result<f64, DomainError> {
    let ba = sub(b, a);
    let bc = sub(b, c);

    let len_ba = norm(ba);
    if len_ba == 0.0 {
        return Err(DomainError::ZeroLengthRay {
            endpoint: Endpoint::First,
        });
    }
    let len_bc = norm(bc);
    if len_bc == 0.0 {
        return Err(DomainError::ZeroLengthRay {
            endpoint: Endpoint::Last,
        });
    }

    // Rounding can push colinear input just past ±1.
    let cos = dot(self::unit(ba, len_ba), self::unit(bc, len_bc)).clamp(-1.0, 1.0);
    Ok(unit.convert(cos.acos()))
}
