/// Cartesian coordinate in Ångström, stored as `[x, y, z]`.
pub type Point = [f64; 3];

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub symbol: String,
    pub position: Point,
}

impl Atom {
    pub fn new(symbol: impl Into<String>, position: Point) -> Self {
        Self {
            symbol: symbol.into(),
            position,
        }
    }
}
