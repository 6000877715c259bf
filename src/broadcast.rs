// Broadcast time from one city to every other, by Dijkstra over an indexed min-heap.
use crate::error::{Result, SearchError};
use crate::graph::{Adjacency, CityGraph, CityId, Time};
use crate::min_heap::{MinHeap, PathNode};
use crate::visited::VisitedSet;

/// Result of one broadcast search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every city was reached; `max_time` is the arrival time at the farthest one.
    ReachedAll { max_time: Time },
    /// Some city is cut off from the source. `reached` counts the source too.
    Unreachable { reached: usize },
}

impl Outcome {
    pub fn from_arrivals(arrivals: &[Option<Time>]) -> Self {
        let reached = arrivals.iter().filter(|a| a.is_some()).count();
        if reached == arrivals.len() {
            Outcome::ReachedAll {
                max_time: arrivals.iter().flatten().copied().max().unwrap_or(0),
            }
        } else {
            Outcome::Unreachable { reached }
        }
    }

    pub fn reached_all(&self) -> bool {
        matches!(self, Outcome::ReachedAll { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub outcome: Outcome,
    /// Shortest arrival time per city, `None` where the broadcast never arrives.
    pub arrivals: Vec<Option<Time>>,
}

/// One search over a graph. `run` consumes it, so a finished search cannot be stepped again.
pub struct BroadcastSearch<'g, G: Adjacency + ?Sized = CityGraph> {
    graph: &'g G,
    frontier: MinHeap,
    visited: VisitedSet,
}

impl<'g, G: Adjacency + ?Sized> BroadcastSearch<'g, G> {
    pub fn new(graph: &'g G, source: CityId) -> Result<Self> {
        let n = graph.num_cities();
        if source >= n {
            return Err(SearchError::SourceOutOfRange {
                city: source,
                num_cities: n,
            });
        }
        let mut frontier = MinHeap::with_capacity(n)?;
        let visited = VisitedSet::with_capacity(n)?;
        frontier.insert(PathNode::new(source, 0));
        Ok(Self {
            graph,
            frontier,
            visited,
        })
    }

    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    /// Finalizes the closest frontier city and relaxes its neighbours.
    /// Returns false once the frontier is empty.
    pub fn step(&mut self) -> bool {
        let Some(lowest) = self.frontier.extract_min() else {
            return false;
        };
        self.visited.add(lowest);
        self.relax(lowest);
        true
    }

    fn relax(&mut self, from: PathNode) {
        for city in 0..self.graph.num_cities() {
            if city == from.city || self.visited.contains(city) {
                continue;
            }
            let Some(weight) = self.graph.weight_of(from.city, city) else {
                continue;
            };
            // Cannot overflow: see the bound on weights and city count in `graph`.
            let candidate = from.time + Time::from(weight);
            match self.frontier.find_by_city(city) {
                Some(index) => {
                    if self.frontier.get(index).is_some_and(|n| n.time > candidate) {
                        self.frontier.change_key(index, candidate);
                    }
                }
                None => {
                    self.frontier.insert(PathNode::new(city, candidate));
                }
            }
        }
    }

    pub fn run(mut self) -> Report {
        while self.step() {}
        self.finish()
    }

    fn finish(self) -> Report {
        let outcome = if self.visited.is_complete() {
            Outcome::ReachedAll {
                max_time: self.visited.max_time(),
            }
        } else {
            Outcome::Unreachable {
                reached: self.visited.len(),
            }
        };
        let mut arrivals = vec![None; self.graph.num_cities()];
        for node in self.visited.iter() {
            arrivals[node.city] = Some(node.time);
        }
        Report { outcome, arrivals }
    }
}

/// Broadcast from city 0.
pub fn broadcast<G: Adjacency + ?Sized>(graph: &G) -> Result<Report> {
    broadcast_from(graph, 0)
}

pub fn broadcast_from<G: Adjacency + ?Sized>(graph: &G, source: CityId) -> Result<Report> {
    Ok(BroadcastSearch::new(graph, source)?.run())
}
