/*
Undirected city graph stored as a packed lower triangle.

Only pairs with row > col are kept, one slot per unordered pair, so a graph of N cities needs
N * (N - 1) / 2 slots. Missing edges are stored as a reserved sentinel and surface as `None`.

Edge weights are `u32` and arrival times `u64`. A shortest path has at most N - 1 edges, and N
stays below 2^32 because the triangle has to fit in memory, so no arrival time can overflow.
*/

use crate::error::{Result, SearchError};

pub type CityId = usize;
pub type Weight = u32;
pub type Time = u64;

const NO_EDGE: Weight = Weight::MAX;

/// Largest travel time a single edge can carry.
pub const MAX_WEIGHT: Weight = NO_EDGE - 1;

/// Maps an unordered pair of distinct cities to its slot in the packed triangle.
/// Returns `None` when `row == col` or the slot does not fit in `usize`.
pub fn index_of(row: CityId, col: CityId) -> Option<usize> {
    if row == col {
        return None;
    }
    let (row, col) = if col > row { (col, row) } else { (row, col) };
    row.checked_mul(row - 1)?.checked_div(2)?.checked_add(col)
}

/// Read access to edge weights, as the search needs it.
pub trait Adjacency {
    fn num_cities(&self) -> usize;

    /// Travel time between two distinct cities, `None` if there is no direct path.
    fn weight_of(&self, row: CityId, col: CityId) -> Option<Weight>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityGraph {
    num_cities: usize,
    weights: Vec<Weight>,
}

impl CityGraph {
    /// Creates a graph of `num_cities` cities with no edges.
    ///
    /// Every slot is written up front, so the whole triangle is touched before this returns.
    /// Callers reading untrusted sizes should check the input first (the parser counts values
    /// before allocating).
    pub fn new(num_cities: usize) -> Result<Self> {
        if num_cities == 0 {
            return Err(SearchError::InvalidGraphSize);
        }
        let slots = num_cities
            .checked_mul(num_cities - 1)
            .map(|n| n / 2)
            .ok_or(SearchError::AllocationFailure(usize::MAX))?;
        let mut weights = Vec::new();
        weights
            .try_reserve_exact(slots)
            .map_err(|_| SearchError::AllocationFailure(slots))?;
        weights.resize(slots, NO_EDGE);
        Ok(Self {
            num_cities,
            weights,
        })
    }

    /// Builds a graph from the lower triangle in row-major order: (1,0), (2,0), (2,1), (3,0), ...
    #[cfg(test)]
    pub(crate) fn from_lower_triangle(num_cities: usize, values: &[Option<Weight>]) -> Self {
        assert_eq!(values.len(), num_cities * (num_cities - 1) / 2);
        let mut graph = Self::new(num_cities).unwrap();
        let mut values = values.iter();
        for row in 1..num_cities {
            for col in 0..row {
                graph.set_weight(row, col, *values.next().unwrap()).unwrap();
            }
        }
        graph
    }

    pub fn num_cities(&self) -> usize {
        self.num_cities
    }

    fn slot(&self, row: CityId, col: CityId) -> Result<usize> {
        for city in [row, col] {
            if city >= self.num_cities {
                return Err(SearchError::CityOutOfRange {
                    city,
                    num_cities: self.num_cities,
                });
            }
        }
        index_of(row, col).ok_or(SearchError::SelfLoop(row))
    }

    /// Sets the travel time between two cities, `None` meaning the path is blocked.
    pub fn set_weight(&mut self, row: CityId, col: CityId, weight: Option<Weight>) -> Result<()> {
        let slot = self.slot(row, col)?;
        self.weights[slot] = match weight {
            Some(w) if w > MAX_WEIGHT => return Err(SearchError::WeightTooLarge(w)),
            Some(w) => w,
            None => NO_EDGE,
        };
        Ok(())
    }

    /// Travel time between two distinct cities, `None` if there is no direct path.
    pub fn weight_of(&self, row: CityId, col: CityId) -> Option<Weight> {
        if row >= self.num_cities || col >= self.num_cities {
            return None;
        }
        let w = self.weights[index_of(row, col)?];
        (w != NO_EDGE).then_some(w)
    }

    /// Number of unordered pairs joined by an edge.
    pub fn num_edges(&self) -> usize {
        self.weights.iter().filter(|&&w| w != NO_EDGE).count()
    }
}

impl Adjacency for CityGraph {
    fn num_cities(&self) -> usize {
        self.num_cities
    }

    fn weight_of(&self, row: CityId, col: CityId) -> Option<Weight> {
        CityGraph::weight_of(self, row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_a_bijection_onto_the_triangle() {
        let n = 40;
        let mut seen = vec![false; n * (n - 1) / 2];
        for row in 0..n {
            for col in 0..row {
                let i = index_of(row, col).unwrap();
                assert_eq!(index_of(col, row), Some(i));
                assert!(!seen[i], "slot {} hit twice", i);
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn diagonal_has_no_index() {
        assert_eq!(index_of(0, 0), None);
        assert_eq!(index_of(7, 7), None);
    }

    #[test]
    fn weights_are_symmetric() {
        let mut graph = CityGraph::new(4).unwrap();
        graph.set_weight(3, 1, Some(9)).unwrap();
        graph.set_weight(0, 2, Some(0)).unwrap();
        assert_eq!(graph.weight_of(1, 3), Some(9));
        assert_eq!(graph.weight_of(3, 1), Some(9));
        assert_eq!(graph.weight_of(2, 0), Some(0));
        assert_eq!(graph.weight_of(0, 1), None);
        assert_eq!(graph.weight_of(2, 2), None);
        assert_eq!(graph.num_edges(), 2);
    }

    #[test]
    fn blocking_removes_an_edge() {
        let mut graph = CityGraph::new(2).unwrap();
        graph.set_weight(0, 1, Some(5)).unwrap();
        graph.set_weight(1, 0, None).unwrap();
        assert_eq!(graph.weight_of(0, 1), None);
    }

    #[test]
    fn zero_cities_is_rejected() {
        assert_eq!(CityGraph::new(0), Err(SearchError::InvalidGraphSize));
    }

    #[test]
    fn single_city_has_no_slots() {
        let graph = CityGraph::new(1).unwrap();
        assert_eq!(graph.num_cities(), 1);
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn bad_pairs_are_rejected() {
        let mut graph = CityGraph::new(3).unwrap();
        assert_eq!(graph.set_weight(1, 1, Some(2)), Err(SearchError::SelfLoop(1)));
        assert_eq!(
            graph.set_weight(0, 3, Some(2)),
            Err(SearchError::CityOutOfRange {
                city: 3,
                num_cities: 3
            })
        );
        assert_eq!(graph.weight_of(0, 3), None);
    }

    #[test]
    fn index_overflow_is_none() {
        assert_eq!(index_of(usize::MAX, 0), None);
        assert_eq!(index_of(0, usize::MAX), None);
    }

    #[test]
    fn sentinel_weight_is_rejected() {
        let mut graph = CityGraph::new(2).unwrap();
        assert_eq!(
            graph.set_weight(0, 1, Some(Weight::MAX)),
            Err(SearchError::WeightTooLarge(Weight::MAX))
        );
        graph.set_weight(0, 1, Some(MAX_WEIGHT)).unwrap();
        assert_eq!(graph.weight_of(1, 0), Some(MAX_WEIGHT));
    }

    #[test]
    fn oversized_graph_fails_to_allocate() {
        assert_eq!(
            CityGraph::new(usize::MAX / 2),
            Err(SearchError::AllocationFailure(usize::MAX))
        );
        assert!(matches!(
            CityGraph::new(1 << 32),
            Err(SearchError::AllocationFailure(_))
        ));
    }

    #[test]
    fn lower_triangle_order() {
        let graph = CityGraph::from_lower_triangle(3, &[Some(1), Some(4), None]);
        assert_eq!(graph.weight_of(1, 0), Some(1));
        assert_eq!(graph.weight_of(2, 0), Some(4));
        assert_eq!(graph.weight_of(2, 1), None);
    }
}
