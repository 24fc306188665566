//! Transposition registry: the arena that owns every node of a search.
//!
//! Nodes are looked up by state equality. Hashes only narrow the candidates;
//! a node matches only if its state compares equal to the query.

use crate::node::{Node, NodeId};
use duel_core::Game;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// Every node created during one search, one per distinct state.
///
/// Append-only: nodes are never removed, so a [`NodeId`] handed out by the
/// registry stays valid for the registry's lifetime.
#[derive(Clone, Debug)]
pub struct Registry<S, A> {
    nodes: Vec<Node<S, A>>,
    buckets: HashMap<u64, Vec<NodeId>>,
}

impl<S, A> Registry<S, A>
where
    S: Clone + Eq + Hash,
    A: Copy + Ord,
{
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            buckets: HashMap::new(),
        }
    }

    /// Get a reference to a node by ID.
    ///
    /// # Panics
    /// Panics if the NodeId did not come from this registry.
    pub fn get(&self, id: NodeId) -> &Node<S, A> {
        &self.nodes[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<S, A> {
        &mut self.nodes[id.0]
    }

    /// Get the number of nodes in the registry.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The first node registered, which is the search root.
    pub fn root(&self) -> Option<&Node<S, A>> {
        self.nodes.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<S, A>)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    /// Find the node whose state equals `state`.
    pub fn find(&self, state: &S) -> Option<NodeId> {
        self.buckets
            .get(&bucket_key(state))?
            .iter()
            .copied()
            .find(|id| self.nodes[id.0].state() == state)
    }

    /// Return the node for `state`, registering a new one if no equal state
    /// has been seen.
    pub fn lookup_or_create<G>(&mut self, game: &G, state: &S) -> NodeId
    where
        G: Game<State = S, Action = A>,
    {
        if let Some(id) = self.find(state) {
            return id;
        }

        let id = NodeId(self.nodes.len());
        let node = Node::new(
            state.clone(),
            game.side_to_move(state),
            game.legal_actions(state),
        );
        debug!(
            node = id.0,
            side = %node.side(),
            legal_actions = node.legal_actions().len(),
            "registered node"
        );
        self.nodes.push(node);
        self.buckets.entry(bucket_key(state)).or_default().push(id);
        id
    }

    /// Resolve the successor of `parent` for `state`: the parent's own child
    /// cache first, then the whole registry, then a new node. The result is
    /// linked into the parent's cache.
    pub(crate) fn resolve_child<G>(&mut self, game: &G, parent: NodeId, state: &S) -> NodeId
    where
        G: Game<State = S, Action = A>,
    {
        let cached = self.nodes[parent.0]
            .children()
            .iter()
            .copied()
            .find(|id| self.nodes[id.0].state() == state);
        if let Some(id) = cached {
            return id;
        }

        let id = self.lookup_or_create(game, state);
        self.nodes[parent.0].link_child(id);
        id
    }

    /// Visit counts of every action tried at the root, in action order.
    pub fn root_visit_counts(&self) -> Vec<(A, u32)> {
        self.root()
            .map(|root| {
                root.stats()
                    .iter()
                    .map(|(action, stats)| (*action, stats.visit_count()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl<S, A> Default for Registry<S, A>
where
    S: Clone + Eq + Hash,
    A: Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

fn bucket_key<S: Hash>(state: &S) -> u64 {
    let mut hasher = DefaultHasher::new();
    state.hash(&mut hasher);
    hasher.finish()
}
