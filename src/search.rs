use std::collections::{HashMap, HashSet, VecDeque};

use crate::{
    Graph,
    error::GraphError,
    path::Path,
    tracing_support::{debug, info_span, trace},
};

const DEFAULT_HASH_SET_CAPACITY: usize = 64;

/// Breadth-first traversal from a single start node.
///
/// Nodes are yielded in order of increasing edge distance from the start.  A
/// node is marked visited when it is first discovered, so it is queued at
/// most once, and the node it was discovered from is recorded as its
/// predecessor.
pub struct BfsIterator<'g, G: Graph> {
    graph: &'g G,
    visited: HashSet<&'g G::Node>,
    queue: VecDeque<&'g G::Node>,
    predecessors: HashMap<&'g G::Node, &'g G::Node>,
}

impl<'g, G> BfsIterator<'g, G>
where
    G: Graph,
{
    /// Creates a traversal starting at `start`, which must be a reference
    /// into `graph` (see [`Graph::find_node`]).  With `None`, the traversal
    /// is empty.
    pub fn new(graph: &'g G, start: Option<&'g G::Node>) -> Self {
        let mut visited = HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY);
        visited.extend(start);
        Self {
            graph,
            visited,
            queue: start.into_iter().collect(),
            predecessors: HashMap::new(),
        }
    }

    /// Returns the node from which `node` was discovered, or `None` for the
    /// start node and for nodes not discovered yet.
    pub fn predecessor(&self, node: &G::Node) -> Option<&'g G::Node> {
        self.predecessors.get(node).copied()
    }

    /// Returns the number of nodes discovered so far, including those still
    /// queued.
    pub fn num_visited(&self) -> usize {
        self.visited.len()
    }
}

impl<'g, G> Iterator for BfsIterator<'g, G>
where
    G: Graph,
{
    type Item = &'g G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.queue.pop_front()?;
        for neighbor in self.graph.successors(current) {
            if self.visited.insert(neighbor) {
                self.predecessors.insert(neighbor, current);
                self.queue.push_back(neighbor);
            }
        }
        Some(current)
    }
}

/// Finds one path with the fewest edges between two nodes of a graph.
///
/// A `PathFinder` only reads the graph, and every query starts a fresh
/// search; nothing is cached between queries.
pub struct PathFinder<'g, G: Graph> {
    graph: &'g G,
}

impl<'g, G> PathFinder<'g, G>
where
    G: Graph,
{
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Returns a path from `source` to `target`, or an empty path if either
    /// is `None` or missing from the graph, or if no path exists.
    pub fn find_path(&self, source: Option<&G::Node>, target: Option<&G::Node>) -> Path<G::Node> {
        let (Some(source), Some(target)) = (source, target) else {
            trace!("path query with an absent endpoint");
            return Path::empty();
        };
        self.try_find_path(source, target).unwrap_or_default()
    }

    /// Returns a path from `source` to `target`, or the reason there is
    /// none.
    pub fn try_find_path(
        &self,
        source: &G::Node,
        target: &G::Node,
    ) -> Result<Path<G::Node>, GraphError<G::Node>> {
        let _span = info_span!("find_path").entered();
        let source = self
            .graph
            .find_node(source)
            .ok_or_else(|| GraphError::NodeNotFound(source.clone()))?;
        let target = self
            .graph
            .find_node(target)
            .ok_or_else(|| GraphError::NodeNotFound(target.clone()))?;

        let mut search = BfsIterator::new(self.graph, Some(source));
        let found = search.by_ref().any(|current| current == target);
        let path = if found {
            Self::reconstruct(source, target, &search)
        } else {
            None
        };

        match path {
            Some(path) => {
                debug!(
                    visited = search.num_visited(),
                    edges = path.num_edges(),
                    "path found"
                );
                Ok(path)
            }
            None => {
                debug!(visited = search.num_visited(), "no path found");
                Err(GraphError::NoPath {
                    from: source.clone(),
                    to: target.clone(),
                })
            }
        }
    }

    /// Follows predecessors back from `target`.  Fails unless the chain ends
    /// at `source`.
    fn reconstruct(
        source: &G::Node,
        target: &'g G::Node,
        search: &BfsIterator<'g, G>,
    ) -> Option<Path<G::Node>> {
        let mut nodes = vec![target.clone()];
        let mut current = target;
        while let Some(previous) = search.predecessor(current) {
            // A chain longer than the visited set must contain a cycle.
            if nodes.len() >= search.num_visited() {
                trace!("predecessor chain does not terminate");
                return None;
            }
            nodes.push(previous.clone());
            current = previous;
        }
        if current != source {
            trace!("predecessor chain does not lead back to the source");
            return None;
        }
        nodes.reverse();
        Some(Path::from_nodes(nodes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DirectedGraph, GraphMut as _};

    fn create_simple_graph() -> DirectedGraph<usize> {
        let mut graph = DirectedGraph::new();
        graph.add_edge(0, 1);
        graph.add_edge(0, 2);
        graph.add_edge(1, 3);
        graph.add_node(4);
        graph
    }

    fn create_cyclic_graph() -> DirectedGraph<usize> {
        let mut graph = DirectedGraph::new();
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(2, 0);
        graph
    }

    #[test]
    fn test_bfs_simple_graph() {
        let graph = create_simple_graph();
        let visited: Vec<_> = graph.bfs(&0).copied().collect();
        assert_eq!(visited.len(), 4);
        assert_eq!(visited[0], 0);
        assert!(visited[1..3].contains(&1));
        assert!(visited[1..3].contains(&2));
        assert_eq!(visited[3], 3);
    }

    #[test]
    fn test_bfs_records_predecessors() {
        let graph = create_simple_graph();
        let mut search = graph.bfs(&0);
        search.by_ref().for_each(drop);
        assert_eq!(search.predecessor(&0), None);
        assert_eq!(search.predecessor(&1), Some(&0));
        assert_eq!(search.predecessor(&2), Some(&0));
        assert_eq!(search.predecessor(&3), Some(&1));
        assert_eq!(search.predecessor(&4), None);
        assert_eq!(search.num_visited(), 4);
    }

    #[test]
    fn test_bfs_absent_start() {
        let graph = create_simple_graph();
        assert_eq!(graph.bfs(&99).count(), 0);
    }

    #[test]
    fn test_bfs_handles_cycles() {
        let graph = create_cyclic_graph();
        assert_eq!(graph.bfs(&0).count(), 3);
        assert_eq!(graph.bfs(&2).count(), 3);
    }

    #[test]
    fn test_find_path_in_cycle() {
        let graph = create_cyclic_graph();
        let finder = PathFinder::new(&graph);
        assert_eq!(finder.find_path(Some(&1), Some(&0)), vec![1, 2, 0]);
        assert_eq!(finder.find_path(Some(&0), Some(&0)), vec![0]);
    }

    #[test]
    fn test_find_path_absent_endpoints() {
        let graph = create_simple_graph();
        let finder = PathFinder::new(&graph);
        assert!(finder.find_path(None, Some(&1)).is_empty());
        assert!(finder.find_path(Some(&0), None).is_empty());
        assert!(finder.find_path(Some(&0), Some(&99)).is_empty());
        assert!(finder.find_path(Some(&99), Some(&0)).is_empty());
    }

    #[test]
    fn test_try_find_path_errors() {
        let graph = create_simple_graph();
        let finder = PathFinder::new(&graph);
        assert_eq!(
            finder.try_find_path(&99, &0),
            Err(GraphError::NodeNotFound(99))
        );
        assert_eq!(
            finder.try_find_path(&0, &99),
            Err(GraphError::NodeNotFound(99))
        );
        assert_eq!(
            finder.try_find_path(&3, &0),
            Err(GraphError::NoPath { from: 3, to: 0 })
        );
        assert_eq!(finder.try_find_path(&0, &4), Err(GraphError::NoPath { from: 0, to: 4 }));
        assert_eq!(finder.try_find_path(&0, &3), Ok(Path::from_nodes(vec![0, 1, 3])));
    }

    #[test]
    fn test_reconstruct_rejects_chain_not_ending_at_source() {
        let graph = create_simple_graph();
        let mut search = graph.bfs(&1);
        search.by_ref().for_each(drop);
        let (Some(source), Some(target)) = (graph.find_node(&0), graph.find_node(&3)) else {
            panic!("missing nodes");
        };
        assert_eq!(PathFinder::reconstruct(source, target, &search), None);
    }
}
