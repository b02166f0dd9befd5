#![doc = include_str!("../README.md")]

mod builder;
mod campus;
mod connection;
mod error;
mod graph;
mod model;
mod routing;
mod script;

pub use builder::{Segment, campus_graph, co_occurrence_graph};
pub use campus::{Building, Campus};
pub use connection::{Link, shortest_connection};
pub use error::{CampusError, GraphError, ScriptError};
pub use graph::{Edge, LabeledGraph};
pub use model::{Distance, Point};
pub use routing::{Hop, Route, ShortestPathConfig, shortest_path, shortest_path_with};
pub use script::{Command, ScriptLabel, ScriptRunner};
