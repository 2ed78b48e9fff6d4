use std::slice;

use derivative::Derivative;

use crate::Graph;

/// A path in a graph, represented as the sequence of nodes it visits from
/// its source to its target, both inclusive.
///
/// An empty path means that no path was found, or that the query was
/// invalid.  A path with a single node is the trivial path from a node to
/// itself.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "N: Clone"),
    Debug(bound = "N: std::fmt::Debug"),
    Default(bound = ""),
    Hash(bound = "N: std::hash::Hash"),
    PartialEq(bound = "N: PartialEq"),
    Eq(bound = "N: Eq")
)]
pub struct Path<N> {
    nodes: Vec<N>,
}

impl<N> Path<N> {
    /// Creates the empty path, meaning "no path".
    pub fn empty() -> Self {
        Self { nodes: Vec::new() }
    }

    pub(crate) fn from_nodes(nodes: Vec<N>) -> Self {
        Self { nodes }
    }

    /// Returns true if this path holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of nodes in the path.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges traversed by the path.
    pub fn num_edges(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Returns the first node in the path, if any.
    pub fn first_node(&self) -> Option<&N> {
        self.nodes.first()
    }

    /// Returns the last node in the path, if any.
    pub fn last_node(&self) -> Option<&N> {
        self.nodes.last()
    }

    /// Returns an iterator over the nodes in the path.
    pub fn nodes(&self) -> slice::Iter<'_, N> {
        self.nodes.iter()
    }

    /// Returns an iterator over the edges in the path as `(source, target)`
    /// pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.nodes.windows(2).filter_map(|pair| match pair {
            [source, target] => Some((source, target)),
            _ => None,
        })
    }

    /// Returns true if the path visits the given node.
    pub fn contains(&self, node: &N) -> bool
    where
        N: PartialEq,
    {
        self.nodes.contains(node)
    }

    pub fn as_slice(&self) -> &[N] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    /// Checks that every consecutive pair of nodes is an edge of `graph`.
    /// The empty path is trivially a walk, and a single node is a walk if it
    /// belongs to the graph.
    pub fn is_walk_in<G>(&self, graph: &G) -> bool
    where
        G: Graph<Node = N>,
    {
        match self.nodes.as_slice() {
            [] => true,
            [node] => graph.contains_node(node),
            _ => self
                .edges()
                .all(|(source, target)| graph.has_edge(source, target)),
        }
    }
}

impl<N> From<Path<N>> for Vec<N> {
    fn from(path: Path<N>) -> Self {
        path.nodes
    }
}

impl<N> IntoIterator for Path<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, N> IntoIterator for &'a Path<N> {
    type Item = &'a N;
    type IntoIter = slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl<N: PartialEq> PartialEq<[N]> for Path<N> {
    fn eq(&self, other: &[N]) -> bool {
        self.nodes.as_slice() == other
    }
}

impl<N: PartialEq> PartialEq<Vec<N>> for Path<N> {
    fn eq(&self, other: &Vec<N>) -> bool {
        &self.nodes == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DirectedGraph, GraphMut as _};

    #[test]
    fn test_empty_path() {
        let path = Path::<&str>::empty();
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.num_edges(), 0);
        assert_eq!(path.first_node(), None);
        assert_eq!(path.last_node(), None);
        assert_eq!(path.edges().count(), 0);
        assert_eq!(path, Path::default());
    }

    #[test]
    fn test_single_node_path() {
        let path = Path::from_nodes(vec!["a"]);
        assert_eq!(path.len(), 1);
        assert_eq!(path.num_edges(), 0);
        assert_eq!(path.first_node(), Some(&"a"));
        assert_eq!(path.last_node(), Some(&"a"));
        assert_eq!(path.edges().count(), 0);
    }

    #[test]
    fn test_edges() {
        let path = Path::from_nodes(vec![1, 2, 3]);
        assert_eq!(path.edges().collect::<Vec<_>>(), vec![(&1, &2), (&2, &3)]);
        assert_eq!(path.num_edges(), 2);
        assert!(path.contains(&2));
        assert!(!path.contains(&4));
    }

    #[test]
    fn test_comparisons_and_conversions() {
        let path = Path::from_nodes(vec!['a', 'b']);
        assert_eq!(path, vec!['a', 'b']);
        assert!(path == ['a', 'b'][..]);
        assert_eq!(path.as_slice(), &['a', 'b']);
        assert_eq!((&path).into_iter().count(), 2);
        let nodes: Vec<char> = path.clone().into();
        assert_eq!(nodes, path.into_nodes());
    }

    #[test]
    fn test_is_walk_in() {
        let mut graph: DirectedGraph<&str> = DirectedGraph::new();
        graph.add_edge("a", "b");
        graph.add_edge("b", "c");
        assert!(Path::from_nodes(vec!["a", "b", "c"]).is_walk_in(&graph));
        assert!(Path::from_nodes(vec!["a"]).is_walk_in(&graph));
        assert!(Path::<&str>::empty().is_walk_in(&graph));
        assert!(!Path::from_nodes(vec!["c", "b"]).is_walk_in(&graph));
        assert!(!Path::from_nodes(vec!["z"]).is_walk_in(&graph));
    }

    #[test]
    fn test_debug() {
        let path = Path::from_nodes(vec![1, 2]);
        let debug_str = format!("{:?}", path);
        assert!(debug_str.contains("Path"));
        assert!(debug_str.contains("nodes"));
    }
}
