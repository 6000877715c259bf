use crate::error::{Result, SearchError};
use crate::graph::{CityId, Time};
use crate::min_heap::PathNode;

/// Append-only set of cities whose shortest time is final.
#[derive(Debug)]
pub struct VisitedSet {
    nodes: Vec<PathNode>,
    capacity: usize,
}

impl VisitedSet {
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut nodes = Vec::new();
        nodes
            .try_reserve_exact(capacity)
            .map_err(|_| SearchError::AllocationFailure(capacity))?;
        Ok(Self { nodes, capacity })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends a node if there is room. Callers add each city at most once.
    pub fn add(&mut self, node: PathNode) -> bool {
        if self.nodes.len() >= self.capacity {
            return false;
        }
        self.nodes.push(node);
        true
    }

    pub fn find_by_city(&self, city: CityId) -> Option<usize> {
        self.nodes.iter().position(|n| n.city == city)
    }

    pub fn contains(&self, city: CityId) -> bool {
        self.find_by_city(city).is_some()
    }

    /// True once every city has been reached.
    pub fn is_complete(&self) -> bool {
        self.nodes.len() == self.capacity
    }

    pub fn max_time(&self) -> Time {
        self.nodes.iter().map(|n| n.time).max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathNode> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_when_full() {
        let mut visited = VisitedSet::with_capacity(2).unwrap();
        assert!(!visited.is_complete());
        assert!(visited.add(PathNode::new(1, 0)));
        assert!(!visited.is_complete());
        assert!(visited.add(PathNode::new(0, 7)));
        assert!(visited.is_complete());
        assert!(!visited.add(PathNode::new(2, 1)));
        assert_eq!(visited.len(), 2);
        assert_eq!(visited.max_time(), 7);
    }

    #[test]
    fn finds_cities_by_position() {
        let mut visited = VisitedSet::with_capacity(3).unwrap();
        visited.add(PathNode::new(2, 0));
        visited.add(PathNode::new(0, 3));
        assert_eq!(visited.find_by_city(0), Some(1));
        assert_eq!(visited.find_by_city(0), Some(1));
        assert_eq!(visited.find_by_city(2), Some(0));
        assert_eq!(visited.find_by_city(1), None);
        assert!(!visited.contains(1));
    }

    #[test]
    fn empty_set_has_zero_max() {
        let visited = VisitedSet::with_capacity(4).unwrap();
        assert_eq!(visited.max_time(), 0);
        assert_eq!(visited.iter().count(), 0);
    }

    #[test]
    fn oversized_set_fails_to_allocate() {
        assert!(matches!(
            VisitedSet::with_capacity(usize::MAX),
            Err(SearchError::AllocationFailure(usize::MAX))
        ));
    }
}
