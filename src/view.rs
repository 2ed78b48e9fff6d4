//! Read-only views over the contents of a [`DirectedGraph`](crate::DirectedGraph).
//!
//! Views borrow the graph, so the graph cannot be mutated while one is alive,
//! and they offer no way to mutate it themselves.  Use `to_hash_set` for an
//! owned copy that outlives the borrow.
use std::{
    collections::{HashMap, HashSet, hash_map},
    hash::Hash,
    iter::Flatten,
    option,
};

use derivative::Derivative;

/// The set of all nodes of a graph.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Copy(bound = ""),
    Debug(bound = "N: std::fmt::Debug")
)]
pub struct NodeSet<'g, N> {
    adjacency: &'g HashMap<N, HashSet<N>>,
}

impl<'g, N> NodeSet<'g, N> {
    pub(crate) fn new(adjacency: &'g HashMap<N, HashSet<N>>) -> Self {
        Self { adjacency }
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains(&self, node: &N) -> bool
    where
        N: Eq + Hash,
    {
        self.adjacency.contains_key(node)
    }

    pub fn iter(&self) -> hash_map::Keys<'g, N, HashSet<N>> {
        self.adjacency.keys()
    }

    /// Copies the nodes into a new set.
    pub fn to_hash_set(&self) -> HashSet<N>
    where
        N: Eq + Hash + Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<'g, N> IntoIterator for NodeSet<'g, N> {
    type Item = &'g N;
    type IntoIter = hash_map::Keys<'g, N, HashSet<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The nodes directly reachable from one node of a graph.  Empty when that
/// node is not in the graph.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Copy(bound = ""),
    Debug(bound = "N: std::fmt::Debug")
)]
pub struct LinkedNodes<'g, N> {
    targets: Option<&'g HashSet<N>>,
}

impl<'g, N> LinkedNodes<'g, N> {
    pub(crate) fn new(targets: Option<&'g HashSet<N>>) -> Self {
        Self { targets }
    }

    pub fn len(&self) -> usize {
        self.targets.map_or(0, HashSet::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, node: &N) -> bool
    where
        N: Eq + Hash,
    {
        self.targets.is_some_and(|targets| targets.contains(node))
    }

    pub fn iter(&self) -> Flatten<option::IntoIter<&'g HashSet<N>>> {
        self.targets.into_iter().flatten()
    }

    /// Copies the nodes into a new set.
    pub fn to_hash_set(&self) -> HashSet<N>
    where
        N: Eq + Hash + Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<'g, N> IntoIterator for LinkedNodes<'g, N> {
    type Item = &'g N;
    type IntoIter = Flatten<option::IntoIter<&'g HashSet<N>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
