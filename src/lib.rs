//! A directed graph over plain node values, with breadth-first path finding.
//!
//! ```
//! use pathgraph::prelude::*;
//!
//! let mut graph: DirectedGraph<&str> = DirectedGraph::new();
//! graph.add_edge("a", "b");
//! graph.add_edge("b", "c");
//! assert_eq!(graph.path(&"a", &"c"), vec!["a", "b", "c"]);
//! assert!(graph.path(&"c", &"a").is_empty());
//! ```
pub mod directed_graph;
pub mod error;
pub mod graph;
pub mod path;
pub mod prelude;
pub mod search;
pub mod tracing_support;
pub mod view;

pub use directed_graph::DirectedGraph;
pub use error::{GraphError, NetworkError};
pub use graph::{Graph, GraphMut};
pub use path::Path;
