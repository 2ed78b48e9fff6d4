//! `Graph` and `GraphMut` are the core traits of this library.  `Graph`
//! provides read-only access to the adjacency relation of a directed graph,
//! while `GraphMut` extends `Graph` with methods for adding nodes and edges.
//!
//! Nodes are plain values compared by equality and hashing; there are no
//! separate node identifiers and no data attached to edges.  Any type that
//! implements [`Graph`] gets breadth-first traversal and path finding from
//! the provided methods.
//!
//! Absent nodes are never an error.  Mutators ignore them, and queries
//! return an empty result.  The `try_` queries are the strict alternative
//! and report [`GraphError`] instead.
use std::hash::Hash;

use crate::{
    error::GraphError,
    path::Path,
    search::{BfsIterator, PathFinder},
};

/// A trait representing a directed graph.  Methods that return iterators over
/// nodes return them in an unspecified order.
///
/// Implementations must not be mutated while a traversal borrowed from them
/// is in progress; the borrow checker enforces this for safe code.
pub trait Graph: Sized {
    type Node: Eq + Hash + Clone;

    /// Gets an iterator over all nodes in the graph.
    fn nodes(&self) -> impl Iterator<Item = &Self::Node> + '_;

    /// Looks up a node, returning the value stored in the graph that is equal
    /// to `node`, or `None` if the node is not a member of the graph.
    fn find_node(&self, node: &Self::Node) -> Option<&Self::Node>;

    /// Gets an iterator over the nodes directly reachable from `node`.  The
    /// iterator is empty if `node` is not in the graph.
    fn successors<'g>(
        &'g self,
        node: &'g Self::Node,
    ) -> impl Iterator<Item = &'g Self::Node> + 'g;

    fn contains_node(&self, node: &Self::Node) -> bool {
        self.find_node(node).is_some()
    }

    /// Gets the number of nodes in the graph.
    fn num_nodes(&self) -> usize {
        self.nodes().count()
    }

    /// Gets the number of edges in the graph.
    fn num_edges(&self) -> usize {
        self.nodes().map(|node| self.successors(node).count()).sum()
    }

    /// Checks if there is an edge from one node to another.
    fn has_edge(&self, from: &Self::Node, into: &Self::Node) -> bool {
        self.successors(from).any(|node| node == into)
    }

    /// Performs a breadth-first search starting from the given node.  Yields
    /// nothing if `start` is not in the graph.
    fn bfs<'g>(&'g self, start: &Self::Node) -> BfsIterator<'g, Self> {
        BfsIterator::new(self, self.find_node(start))
    }

    /// Finds a path with the fewest edges from `source` to `target`.
    ///
    /// Returns an empty path if either end is `None` or not in the graph, or
    /// if `target` cannot be reached from `source`.  When several shortest
    /// paths exist, which one is returned depends on the iteration order of
    /// [`Self::successors`].
    fn path<'a>(
        &self,
        source: impl Into<Option<&'a Self::Node>>,
        target: impl Into<Option<&'a Self::Node>>,
    ) -> Path<Self::Node>
    where
        Self::Node: 'a,
    {
        PathFinder::new(self).find_path(source.into(), target.into())
    }

    /// Like [`Self::path`], but reports why no path could be returned.
    fn try_path(
        &self,
        source: &Self::Node,
        target: &Self::Node,
    ) -> Result<Path<Self::Node>, GraphError<Self::Node>> {
        PathFinder::new(self).try_find_path(source, target)
    }
}

/// A trait for graphs that support adding nodes and edges.  There are no
/// removal operations; a graph only grows over its lifetime.
pub trait GraphMut: Graph {
    /// Creates a new, empty graph.
    fn new() -> Self;

    /// Adds a node with no outgoing edges.  Does nothing if `node` is `None`
    /// or already present.  Returns true if the node was inserted.
    fn add_node(&mut self, node: impl Into<Option<Self::Node>>) -> bool;

    /// Adds an edge from `source` to `target`, adding either node to the
    /// graph if it is missing.  Does nothing if either end is `None`.
    /// Returns true if the edge was not already present.
    fn add_edge(
        &mut self,
        source: impl Into<Option<Self::Node>>,
        target: impl Into<Option<Self::Node>>,
    ) -> bool;

    /// Adds every edge produced by `edges`, returning how many were new.
    fn extend_edges<I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = (Self::Node, Self::Node)>,
    {
        edges
            .into_iter()
            .map(|(source, target)| self.add_edge(source, target))
            .filter(|&added| added)
            .count()
    }

    /// Reserves capacity for at least the given number of additional nodes.
    /// Does nothing by default.
    fn reserve(&mut self, additional_nodes: usize) {
        let _ = additional_nodes;
    }
}
