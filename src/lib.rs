//! Broadcast time over an undirected city graph.
//!
//! A [`CityGraph`] is built once, usually by [`parser::parse_file`], and [`broadcast`] runs a
//! single-source shortest path search from city 0 to find when the last city hears the message.

pub mod broadcast;
pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod min_heap;
pub mod parser;
pub mod visited;

pub use broadcast::{broadcast, broadcast_from, BroadcastSearch, Outcome, Report};
pub use error::{ParseError, SearchError};
pub use graph::{Adjacency, CityGraph, CityId, Time, Weight, MAX_WEIGHT};
