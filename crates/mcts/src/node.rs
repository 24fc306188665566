//! Search nodes and their per-action statistics.
//!
//! Nodes live in the registry arena and refer to each other by index, so a
//! node reachable along several paths (or along a cycle) is stored once.

use crate::error::{Result, SearchError};
use duel_core::Side;
use std::collections::BTreeMap;

/// Index into the registry arena.
///
/// Handles stay valid for the whole search because nodes are never removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The search root is always the first node registered.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the registry.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Aggregate result of every simulation that took one action at one node.
///
/// Values are stored from the perspective of the side to move at the node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ActionStats {
    total_value: f64,
    visit_count: u32,
}

impl ActionStats {
    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    pub fn visit_count(&self) -> u32 {
        self.visit_count
    }

    /// Mean value over all visits.
    ///
    /// # Errors
    /// Returns `SearchError::ZeroVisits` if the action was never visited.
    pub fn average(&self) -> Result<f64> {
        if self.visit_count == 0 {
            return Err(SearchError::ZeroVisits);
        }
        Ok(self.total_value / self.visit_count as f64)
    }

    /// Value and count always move together.
    pub(crate) fn record(&mut self, value: f64) {
        self.total_value += value;
        self.visit_count += 1;
    }
}

/// One distinct game state in the search graph.
#[derive(Clone, Debug)]
pub struct Node<S, A> {
    state: S,

    /// Side to move at `state`; decides which perspective the stats use.
    side: Side,

    /// Legal actions, sorted and deduplicated.
    legal_actions: Vec<A>,

    /// Statistics for every action tried so far.
    stats: BTreeMap<A, ActionStats>,

    /// Successor nodes already resolved from this node.
    children: Vec<NodeId>,

    fully_expanded: bool,

    /// Non-zero while the node is on the path of the simulation in flight.
    cycle_marker: u32,
}

impl<S, A: Copy + Ord> Node<S, A> {
    /// Create an unexpanded node.
    pub(crate) fn new(state: S, side: Side, mut legal_actions: Vec<A>) -> Self {
        legal_actions.sort();
        legal_actions.dedup();
        Self {
            state,
            side,
            legal_actions,
            stats: BTreeMap::new(),
            children: Vec::new(),
            fully_expanded: false,
            cycle_marker: 0,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn legal_actions(&self) -> &[A] {
        &self.legal_actions
    }

    pub fn stats(&self) -> &BTreeMap<A, ActionStats> {
        &self.stats
    }

    /// Statistics for one action, if it has been tried.
    pub fn action_stats(&self, action: &A) -> Option<&ActionStats> {
        self.stats.get(action)
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// True once every legal action has been tried at least once.
    pub fn is_fully_expanded(&self) -> bool {
        self.fully_expanded
    }

    pub fn cycle_marker(&self) -> u32 {
        self.cycle_marker
    }

    /// Legal actions without statistics yet, in action order.
    pub fn untried_actions(&self) -> Vec<A> {
        self.legal_actions
            .iter()
            .filter(|action| !self.stats.contains_key(*action))
            .copied()
            .collect()
    }

    /// Sum of visit counts over all actions (N in UCB1).
    pub fn visits(&self) -> u32 {
        self.stats.values().map(ActionStats::visit_count).sum()
    }

    /// Visit-weighted mean value of the node, from the side to move.
    ///
    /// # Errors
    /// Returns `SearchError::ZeroVisits` if no action has been visited.
    pub fn average_value(&self) -> Result<f64> {
        let visits = self.visits();
        if visits == 0 {
            return Err(SearchError::ZeroVisits);
        }
        let total: f64 = self.stats.values().map(ActionStats::total_value).sum();
        Ok(total / visits as f64)
    }

    /// Start tracking `action`. Flips `fully_expanded` once every legal
    /// action has an entry.
    pub(crate) fn add_action(&mut self, action: A) {
        self.stats.entry(action).or_default();
        if self.stats.len() == self.legal_actions.len() {
            self.fully_expanded = true;
        }
    }

    pub(crate) fn stats_mut(&mut self, action: &A) -> Option<&mut ActionStats> {
        self.stats.get_mut(action)
    }

    pub(crate) fn link_child(&mut self, child: NodeId) {
        if !self.children.contains(&child) {
            self.children.push(child);
        }
    }

    pub(crate) fn mark_on_path(&mut self) {
        self.cycle_marker += 1;
    }

    pub(crate) fn is_on_path(&self) -> bool {
        self.cycle_marker > 0
    }

    pub(crate) fn clear_marker(&mut self) {
        self.cycle_marker = 0;
    }
}
