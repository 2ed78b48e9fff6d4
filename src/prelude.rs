pub use crate::directed_graph::DirectedGraph;
pub use crate::error::{GraphError, NetworkError};
pub use crate::graph::{Graph, GraphMut};
pub use crate::path::Path;
