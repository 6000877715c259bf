use orx_priority_queue::*;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{CityGraph, CityId, Time};

#[derive(Copy, Clone, PartialEq, Eq)]
struct State {
    time: Time,
    city: CityId,
}

// Min-heap by time
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .time
            .cmp(&self.time)
            .then_with(|| other.city.cmp(&self.city))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lazy-deletion Dijkstra from `start`. Returns arrival times, `None` when unreachable.
pub fn dijkstra_all(graph: &CityGraph, start: CityId) -> Vec<Option<Time>> {
    let n = graph.num_cities();
    let mut dist: Vec<Option<Time>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[start] = Some(0);
    heap.push(State { time: 0, city: start });

    while let Some(State { time, city }) = heap.pop() {
        if dist[city].is_some_and(|d| time > d) {
            continue;
        }
        for next in 0..n {
            let Some(w) = graph.weight_of(city, next) else {
                continue;
            };
            let next_time = time + Time::from(w);
            if dist[next].map_or(true, |d| next_time < d) {
                dist[next] = Some(next_time);
                heap.push(State { time: next_time, city: next });
            }
        }
    }
    dist
}

/// Dijkstra over an indexed heap with decrease-key, so each city sits in the queue at most once.
pub fn dijkstra_indexed(graph: &CityGraph, start: CityId) -> Vec<Option<Time>> {
    let n = graph.num_cities();
    let mut dist: Vec<Option<Time>> = vec![None; n];
    let mut done = vec![false; n];
    let mut pq: BinaryHeapWithMap<CityId, Time> = BinaryHeapWithMap::new();

    pq.decrease_key_or_push(&start, 0);
    while let Some((city, time)) = pq.pop() {
        done[city] = true;
        dist[city] = Some(time);
        for next in 0..n {
            if done[next] {
                continue;
            }
            if let Some(w) = graph.weight_of(city, next) {
                pq.decrease_key_or_push(&next, time + Time::from(w));
            }
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broadcast::tests::{brute_force, random_graph};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn sample_graph() {
        let mut graph = CityGraph::new(5).unwrap();
        graph.set_weight(0, 1, Some(2)).unwrap();
        graph.set_weight(0, 2, Some(10)).unwrap();
        graph.set_weight(1, 3, Some(1)).unwrap();
        graph.set_weight(3, 4, Some(4)).unwrap();
        graph.set_weight(2, 4, Some(0)).unwrap();

        let expected = vec![Some(0), Some(2), Some(7), Some(3), Some(7)];
        assert_eq!(dijkstra_all(&graph, 0), expected);
        assert_eq!(dijkstra_indexed(&graph, 0), expected);
    }

    #[test]
    fn unreachable_cities_stay_none() {
        let mut graph = CityGraph::new(3).unwrap();
        graph.set_weight(1, 2, Some(1)).unwrap();
        assert_eq!(dijkstra_all(&graph, 0), vec![Some(0), None, None]);
        assert_eq!(dijkstra_indexed(&graph, 1), vec![None, Some(0), Some(1)]);
    }

    #[test]
    fn engines_agree_with_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        for n in [1, 3, 8, 20] {
            for p_blocked in [0.0, 0.5, 0.9] {
                for _ in 0..10 {
                    let graph = random_graph(rng, n, p_blocked);
                    let start = n / 2;
                    let expected = brute_force(&graph, start);
                    assert_eq!(dijkstra_all(&graph, start), expected);
                    assert_eq!(dijkstra_indexed(&graph, start), expected);
                }
            }
        }
    }
}
