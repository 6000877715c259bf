/*
Fixed-capacity binary min-heap of (city, time) pairs, ordered by time.

Children of slot i live at 2i + 1 and 2i + 2. Comparisons are strict, so equal times never swap.
Entries are found by a linear scan over the slots; the capacity is bounded by the number of cities.
*/

use crate::error::{Result, SearchError};
use crate::graph::{CityId, Time};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PathNode {
    pub city: CityId,
    pub time: Time,
}

impl PathNode {
    pub fn new(city: CityId, time: Time) -> Self {
        Self { city, time }
    }
}

#[derive(Debug)]
pub struct MinHeap {
    nodes: Vec<PathNode>,
    capacity: usize,
}

impl MinHeap {
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

    pub fn get(&self, index: usize) -> Option<&PathNode> {
        self.nodes.get(index)
    }

    /// Adds a node. Does nothing and returns false when the heap is full.
    pub fn insert(&mut self, node: PathNode) -> bool {
        if self.nodes.len() >= self.capacity {
            return false;
        }
        self.nodes.push(node);
        self.sift_up(self.nodes.len() - 1);
        true
    }

    /// Removes and returns the node with the lowest time.
    pub fn extract_min(&mut self) -> Option<PathNode> {
        if self.nodes.is_empty() {
            return None;
        }
        let root = self.nodes.swap_remove(0);
        self.sift_down(0);
        Some(root)
    }

    pub fn find_by_city(&self, city: CityId) -> Option<usize> {
        self.nodes.iter().position(|n| n.city == city)
    }

    /// Moves the node at `index` to `time`, sifting up or down as needed.
    pub fn change_key(&mut self, index: usize, time: Time) {
        let Some(node) = self.nodes.get_mut(index) else {
            return;
        };
        if time < node.time {
            node.time = time;
            self.sift_up(index);
        } else if time > node.time {
            node.time = time;
            self.sift_down(index);
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.nodes[index].time < self.nodes[parent].time {
                self.nodes.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.nodes.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            if left >= len {
                break;
            }
            let smallest = if right < len && self.nodes[right].time <= self.nodes[left].time {
                right
            } else {
                left
            };
            if self.nodes[smallest].time < self.nodes[index].time {
                self.nodes.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }

    #[cfg(test)]
    pub fn is_heap(&self) -> bool {
        (1..self.nodes.len()).all(|i| self.nodes[(i - 1) / 2].time <= self.nodes[i].time)
    }
}
