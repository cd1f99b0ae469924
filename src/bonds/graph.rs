use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

/// Unordered pair of distinct atom indices, stored with the smaller index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomPair {
    i: usize,
    j: usize,
}

impl AtomPair {
    pub fn new(idx1: usize, idx2: usize) -> Self {
        if idx1 <= idx2 {
            Self { i: idx1, j: idx2 }
        } else {
            Self { i: idx2, j: idx1 }
        }
    }

    #[inline]
    pub fn i(&self) -> usize {
        self.i
    }

    #[inline]
    pub fn j(&self) -> usize {
        self.j
    }

    /// The index at the other end of the pair, if `idx` is one of its ends.
    pub fn partner(&self, idx: usize) -> Option<usize> {
        if idx == self.i {
            Some(self.j)
        } else if idx == self.j {
            Some(self.i)
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for AtomPair {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}

impl fmt::Display for AtomPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

/// Distance-filtered bond graph keyed by atom pair.
///
/// Iteration is in ascending `(i, j)` order. The graph is read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BondGraph {
    bonds: BTreeMap<AtomPair, f64>,
}

impl BondGraph {
    pub(super) fn from_map(bonds: BTreeMap<AtomPair, f64>) -> Self {
        Self { bonds }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }

    /// Bond length between `a` and `b`, in either order.
    pub fn distance(&self, a: usize, b: usize) -> Option<f64> {
        self.bonds.get(&AtomPair::new(a, b)).copied()
    }

    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.bonds.contains_key(&AtomPair::new(a, b))
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.bonds.iter(),
        }
    }

    pub fn pairs(&self) -> impl Iterator<Item = AtomPair> + '_ {
        self.bonds.keys().copied()
    }

    pub fn lengths(&self) -> impl Iterator<Item = f64> + '_ {
        self.bonds.values().copied()
    }

    /// Indices bonded to `idx`, ascending.
    pub fn neighbors(&self, idx: usize) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .bonds
            .keys()
            .filter_map(|pair| pair.partner(idx))
            .collect();
        out.sort_unstable();
        out
    }

    pub fn degree(&self, idx: usize) -> usize {
        self.bonds
            .keys()
            .filter(|pair| pair.partner(idx).is_some())
            .count()
    }

    /// Every `[a, center, c]` with `a < c` where both `a` and `c` bond to `center`.
    ///
    /// Sorted by center, then `a`, then `c`.
    pub fn bonded_angles(&self) -> Vec<[usize; 3]> {
        let mut adjacency: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for pair in self.bonds.keys() {
            adjacency.entry(pair.i).or_default().push(pair.j);
            adjacency.entry(pair.j).or_default().push(pair.i);
        }

        let mut triples = Vec::new();
        for (center, mut neighbors) in adjacency {
            neighbors.sort_unstable();
            for (k, &a) in neighbors.iter().enumerate() {
                for &c in &neighbors[k + 1..] {
                    triples.push([a, center, c]);
                }
            }
        }
        triples
    }
}

pub struct Iter<'a> {
    inner: btree_map::Iter<'a, AtomPair, f64>,
}

impl Iterator for Iter<'_> {
    type Item = (AtomPair, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(pair, d)| (*pair, *d))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a BondGraph {
    type Item = (AtomPair, f64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(entries: &[(usize, usize, f64)]) -> BondGraph {
        BondGraph::from_map(
            entries
                .iter()
                .map(|&(a, b, d)| (AtomPair::new(a, b), d))
                .collect(),
        )
    }

    #[test]
    fn pair_is_canonicalized() {
        let p = AtomPair::new(5, 2);
        assert_eq!((p.i(), p.j()), (2, 5));
        assert_eq!(p, AtomPair::from((2, 5)));
        assert_eq!(p.to_string(), "(2, 5)");
    }

    #[test]
    fn pair_partner() {
        let p = AtomPair::new(1, 4);
        assert_eq!(p.partner(1), Some(4));
        assert_eq!(p.partner(4), Some(1));
        assert_eq!(p.partner(2), None);
    }

    #[test]
    fn lookup_ignores_argument_order() {
        let g = graph(&[(0, 1, 0.96)]);
        assert_eq!(g.distance(1, 0), Some(0.96));
        assert!(g.contains(0, 1));
        assert!(!g.contains(0, 2));
    }

    #[test]
    fn iteration_is_in_key_order() {
        let g = graph(&[(2, 3, 1.0), (0, 2, 1.1), (0, 1, 1.2)]);
        let keys: Vec<_> = g.pairs().map(|p| (p.i(), p.j())).collect();
        assert_eq!(keys, vec![(0, 1), (0, 2), (2, 3)]);
        assert_eq!(g.iter().len(), 3);
    }

    #[test]
    fn neighbors_and_degree() {
        let g = graph(&[(0, 1, 1.0), (1, 2, 1.0), (1, 3, 1.0)]);
        assert_eq!(g.neighbors(1), vec![0, 2, 3]);
        assert_eq!(g.neighbors(3), vec![1]);
        assert!(g.neighbors(7).is_empty());
        assert_eq!(g.degree(1), 3);
        assert_eq!(g.degree(0), 1);
    }

    #[test]
    fn bonded_angles_of_branched_center() {
        let g = graph(&[(0, 1, 1.0), (1, 2, 1.0), (1, 3, 1.0), (3, 4, 1.0)]);
        assert_eq!(
            g.bonded_angles(),
            vec![[0, 1, 2], [0, 1, 3], [2, 1, 3], [1, 3, 4]]
        );
    }

    #[test]
    fn bonded_angles_of_empty_graph() {
        assert!(BondGraph::default().bonded_angles().is_empty());
    }
}
