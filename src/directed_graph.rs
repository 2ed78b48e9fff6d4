use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

use derivative::Derivative;

use crate::{
    Graph, GraphMut,
    tracing_support::trace,
    view::{LinkedNodes, NodeSet},
};

/// A directed graph stored as a map from each node to the set of nodes it
/// has edges to.
///
/// Every endpoint of an edge is a node of the graph, whether or not it was
/// added with [`GraphMut::add_node`].  Edges are unique, and self-loops are
/// allowed.
///
/// Successors are iterated in `HashSet` order, so when several shortest
/// paths exist, which one [`Graph::path`] returns is unspecified.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "N: Clone"),
    Debug(bound = "N: std::fmt::Debug"),
    Default(bound = "")
)]
pub struct DirectedGraph<N> {
    adjacency: HashMap<N, HashSet<N>>,
}

impl<N> DirectedGraph<N>
where
    N: Eq + Hash + Clone,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Creates an empty graph with room for at least `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(nodes),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns a read-only view of all nodes.
    pub fn node_set(&self) -> NodeSet<'_, N> {
        NodeSet::new(&self.adjacency)
    }

    /// Returns a read-only view of the nodes `node` has edges to.  The view
    /// is empty if `node` is not in the graph.
    pub fn linked_nodes(&self, node: &N) -> LinkedNodes<'_, N> {
        LinkedNodes::new(self.adjacency.get(node))
    }

    /// Adds edges from a fallible source, such as one read over the network.
    ///
    /// Stops at the first error and returns it; edges read before the error
    /// stay in the graph.  On success, returns how many edges were new.
    pub fn try_extend<I, E>(&mut self, edges: I) -> Result<usize, E>
    where
        I: IntoIterator<Item = Result<(N, N), E>>,
    {
        let mut added = 0;
        for edge in edges {
            let (source, target) = edge?;
            if self.add_edge(source, target) {
                added += 1;
            }
        }
        Ok(added)
    }

    fn ensure_node(&mut self, node: N) -> &mut HashSet<N> {
        self.adjacency.entry(node).or_default()
    }
}

impl<N> Graph for DirectedGraph<N>
where
    N: Eq + Hash + Clone,
{
    type Node = N;

    fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    fn find_node(&self, node: &N) -> Option<&N> {
        self.adjacency.get_key_value(node).map(|(node, _)| node)
    }

    fn successors<'g>(&'g self, node: &'g N) -> impl Iterator<Item = &'g N> + 'g {
        self.linked_nodes(node).iter()
    }

    fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    fn num_edges(&self) -> usize {
        self.adjacency.values().map(HashSet::len).sum()
    }

    fn has_edge(&self, from: &N, into: &N) -> bool {
        self.linked_nodes(from).contains(into)
    }
}

impl<N> GraphMut for DirectedGraph<N>
where
    N: Eq + Hash + Clone,
{
    fn new() -> Self {
        DirectedGraph::new()
    }

    fn add_node(&mut self, node: impl Into<Option<N>>) -> bool {
        let Some(node) = node.into() else {
            trace!("ignoring absent node");
            return false;
        };
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, HashSet::new());
        trace!(num_nodes = self.adjacency.len(), "added node");
        true
    }

    fn add_edge(&mut self, source: impl Into<Option<N>>, target: impl Into<Option<N>>) -> bool {
        let (Some(source), Some(target)) = (source.into(), target.into()) else {
            trace!("ignoring edge with an absent endpoint");
            return false;
        };
        self.ensure_node(target.clone());
        let added = self.ensure_node(source).insert(target);
        if added {
            trace!(num_nodes = self.adjacency.len(), "added edge");
        }
        added
    }

    fn reserve(&mut self, additional_nodes: usize) {
        self.adjacency.reserve(additional_nodes);
    }
}

impl<N> Extend<(N, N)> for DirectedGraph<N>
where
    N: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (N, N)>>(&mut self, iter: T) {
        self.extend_edges(iter);
    }
}

impl<N> FromIterator<(N, N)> for DirectedGraph<N>
where
    N: Eq + Hash + Clone,
{
    fn from_iter<T: IntoIterator<Item = (N, N)>>(iter: T) -> Self {
        let mut graph = DirectedGraph::new();
        graph.extend_edges(iter);
        graph
    }
}
