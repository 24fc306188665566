//! Monte Carlo Tree Search over a transposition registry.
//!
//! Each simulation runs:
//! 1. Selection: walk fully expanded nodes by UCB1 until a node with untried
//!    actions, a terminal state, or a node already on the current path
//! 2. Expansion: try one untried action and evaluate the resulting state
//!    (terminal and cycle stops evaluate the reached state directly)
//! 3. Backpropagation: credit every `(node, action)` on the path, flipping
//!    the value for nodes where the second party moves

use crate::{
    config::MctsConfig,
    error::{Result, SearchError},
    evaluator::Evaluator,
    node::{Node, NodeId},
    registry::Registry,
    ucb::ucb1,
};
use duel_core::{Game, Side, Value};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt::Debug;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// Counters for the last search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Simulations completed.
    pub simulations: usize,

    /// Simulations that ended by trying a new action.
    pub expansions: usize,

    /// Simulations whose selection walked into a terminal state.
    pub terminal_hits: usize,

    /// Simulations whose selection walked back onto its own path.
    pub cycle_hits: usize,

    /// Total `(node, action)` updates made by backpropagation.
    pub updates: usize,
}

/// The `(node, action)` pairs one simulation passed through, in order.
pub type SelectionPath<A> = Vec<(NodeId, A)>;

/// Why selection stopped walking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stop {
    /// Reached a node with untried actions.
    Expandable,
    Terminal,
    Cycle,
}

/// Where one selection walk ended.
struct Selection<S, A> {
    node: NodeId,
    state: S,
    path: SelectionPath<A>,
    stop: Stop,
}

/// Monte Carlo Tree Search with UCB1 selection over shared nodes.
///
/// Generic over:
/// - `G`: The game being played
/// - `E`: The evaluation strategy
/// - `R`: The random number generator used for selection ties, expansion
///   and stochastic transitions
pub struct Mcts<G: Game, E: Evaluator<G>, R: Rng> {
    config: MctsConfig,
    evaluator: E,
    rng: R,
    stats: SearchStats,
    _game: PhantomData<G>,
}

impl<G, E, R> Mcts<G, E, R>
where
    G: Game,
    E: Evaluator<G>,
    R: Rng,
{
    /// Create a new MCTS instance.
    pub fn new(config: MctsConfig, evaluator: E, rng: R) -> Self {
        Self {
            config,
            evaluator,
            rng,
            stats: SearchStats::default(),
            _game: PhantomData,
        }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Counters for the most recent call to [`Mcts::search`].
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Run the configured number of simulations from `root_state`.
    ///
    /// Returns every node created, with the root at [`NodeId::ROOT`].
    ///
    /// # Errors
    /// Any transition, evaluation or invariant failure aborts the whole run.
    pub fn search(
        &mut self,
        game: &G,
        root_state: &G::State,
    ) -> Result<Registry<G::State, G::Action>> {
        self.config.validate()?;
        if game.is_terminal(root_state) {
            return Err(SearchError::TerminalRoot {
                state: describe(root_state),
            });
        }

        self.stats = SearchStats::default();
        let mut registry = Registry::new();
        registry.lookup_or_create(game, root_state);

        for _ in 0..self.config.num_simulations {
            self.simulate(game, &mut registry, root_state)?;
        }

        debug!(
            simulations = self.stats.simulations,
            nodes = registry.len(),
            expansions = self.stats.expansions,
            terminal_hits = self.stats.terminal_hits,
            cycle_hits = self.stats.cycle_hits,
            "MCTS search complete"
        );

        Ok(registry)
    }

    /// Search from `state` and recommend the most visited action.
    pub fn choose_action(&mut self, game: &G, state: &G::State) -> Result<G::Action> {
        let registry = self.search(game, state)?;
        recommend_action(&registry, state, &mut self.rng)
    }

    /// Run a single simulation: select -> expand or evaluate -> backpropagate.
    fn simulate(
        &mut self,
        game: &G,
        registry: &mut Registry<G::State, G::Action>,
        root_state: &G::State,
    ) -> Result<()> {
        let Selection {
            node,
            state,
            mut path,
            stop,
        } = self.select(game, registry, root_state)?;

        let value = match stop {
            Stop::Terminal => {
                self.stats.terminal_hits += 1;
                self.evaluate(game, &state)?
            }
            Stop::Cycle => {
                self.stats.cycle_hits += 1;
                self.evaluate(game, &state)?
            }
            Stop::Expandable => {
                self.stats.expansions += 1;
                self.expand(game, registry, node, &state, &mut path)?
            }
        };

        self.backpropagate(registry, &path, value);
        self.stats.simulations += 1;

        trace!(
            node = node.index(),
            path_len = path.len(),
            value = value.get(),
            stop = ?stop,
            "MCTS simulation complete"
        );

        Ok(())
    }

    /// Walk from the root through fully expanded nodes.
    fn select(
        &mut self,
        game: &G,
        registry: &mut Registry<G::State, G::Action>,
        root_state: &G::State,
    ) -> Result<Selection<G::State, G::Action>> {
        let mut current = NodeId::ROOT;
        let mut state = root_state.clone();
        let mut path = Vec::new();

        while registry.get(current).is_fully_expanded() {
            let action = self.select_action(registry.get(current))?;
            registry.get_mut(current).mark_on_path();
            path.push((current, action));

            state = game
                .apply_action(&state, action, &mut self.rng)
                .map_err(|source| transition_error(&state, &action, source))?;

            if game.is_terminal(&state) {
                return Ok(Selection {
                    node: current,
                    state,
                    path,
                    stop: Stop::Terminal,
                });
            }

            let child = registry.resolve_child(game, current, &state);
            if registry.get(child).is_on_path() {
                return Ok(Selection {
                    node: current,
                    state,
                    path,
                    stop: Stop::Cycle,
                });
            }
            current = child;
        }

        Ok(Selection {
            node: current,
            state,
            path,
            stop: Stop::Expandable,
        })
    }

    /// Pick the action with the highest UCB1 score, breaking ties uniformly.
    fn select_action(&mut self, node: &Node<G::State, G::Action>) -> Result<G::Action> {
        let total_visits = node.visits();
        let exploration = self.config.exploration_constant;

        let mut best_score = f64::NEG_INFINITY;
        let mut best = Vec::new();
        for (action, stats) in node.stats() {
            let score = ucb1(stats.average()?, total_visits, stats.visit_count(), exploration);
            if score > best_score {
                best_score = score;
                best.clear();
                best.push(*action);
            } else if score == best_score {
                best.push(*action);
            }
        }

        best.choose(&mut self.rng)
            .copied()
            .ok_or_else(|| SearchError::NoLegalActions {
                state: describe(node.state()),
            })
    }

    /// Try one untried action at `id` and evaluate where it leads.
    fn expand(
        &mut self,
        game: &G,
        registry: &mut Registry<G::State, G::Action>,
        id: NodeId,
        state: &G::State,
        path: &mut SelectionPath<G::Action>,
    ) -> Result<Value> {
        let node = registry.get(id);
        if node.is_fully_expanded() {
            return Err(SearchError::AlreadyExpanded {
                state: describe(node.state()),
            });
        }

        let action = node
            .untried_actions()
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| SearchError::NoLegalActions {
                state: describe(node.state()),
            })?;

        let next = game
            .apply_action(state, action, &mut self.rng)
            .map_err(|source| transition_error(state, &action, source))?;

        registry.get_mut(id).add_action(action);
        path.push((id, action));

        self.evaluate(game, &next)
    }

    fn evaluate(&self, game: &G, state: &G::State) -> Result<Value> {
        self.evaluator
            .evaluate(game, state)
            .map_err(|source| SearchError::Evaluation {
                state: describe(state),
                source,
            })
    }

    /// Fold `value` into every `(node, action)` on the path.
    ///
    /// `value` is from the first party's perspective; nodes where the second
    /// party moves are credited with its reverse. Clears every cycle marker
    /// the walk set.
    fn backpropagate(
        &mut self,
        registry: &mut Registry<G::State, G::Action>,
        path: &[(NodeId, G::Action)],
        value: Value,
    ) {
        for (id, action) in path {
            let node = registry.get_mut(*id);
            let credited = match node.side() {
                Side::First => value,
                Side::Second => self.evaluator.reverse(value),
            };
            node.stats_mut(action)
                .expect("BUG: path holds an action without statistics")
                .record(credited.get());
            node.clear_marker();
            self.stats.updates += 1;
        }
    }
}

/// Run `config.num_simulations` simulations from `root_state`.
///
/// Convenience wrapper around [`Mcts::search`] for one-off searches.
pub fn run_search<G, E, R>(
    game: &G,
    root_state: &G::State,
    config: &MctsConfig,
    evaluator: &E,
    rng: &mut R,
) -> Result<Registry<G::State, G::Action>>
where
    G: Game,
    E: Evaluator<G>,
    R: Rng,
{
    Mcts::new(config.clone(), evaluator, rng).search(game, root_state)
}

/// Recommend the most visited action at `root_state`.
///
/// Ties on visit count are broken uniformly at random.
///
/// # Errors
/// Returns `SearchError::UnknownState` if `root_state` has no node in the
/// registry and `SearchError::NoStatistics` if no action was ever tried there.
pub fn recommend_action<S, A, R>(registry: &Registry<S, A>, root_state: &S, rng: &mut R) -> Result<A>
where
    S: Clone + Eq + std::hash::Hash + Debug,
    A: Copy + Ord,
    R: Rng + ?Sized,
{
    let id = registry
        .find(root_state)
        .ok_or_else(|| SearchError::UnknownState {
            state: describe(root_state),
        })?;
    let node = registry.get(id);

    let no_statistics = || SearchError::NoStatistics {
        state: describe(root_state),
    };
    let max_visits = node
        .stats()
        .values()
        .map(|stats| stats.visit_count())
        .max()
        .ok_or_else(no_statistics)?;

    let best: Vec<A> = node
        .stats()
        .iter()
        .filter(|(_, stats)| stats.visit_count() == max_visits)
        .map(|(action, _)| *action)
        .collect();

    best.choose(rng).copied().ok_or_else(no_statistics)
}

fn describe<T: Debug>(value: &T) -> String {
    format!("{:?}", value)
}

fn transition_error<S: Debug, A: Debug>(
    state: &S,
    action: &A,
    source: duel_core::GameError,
) -> SearchError {
    SearchError::Transition {
        state: describe(state),
        action: describe(action),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::{OutcomeEvaluator, RolloutEvaluator};
    use crate::games::{Pendulum, PendulumState, Push, TicTacToe, TicTacToeAction};
    use duel_core::{GameError, Outcome};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::cell::Cell;

    /// Two doors out of the start position, both ending in a draw.
    #[derive(Clone)]
    struct TwoDoors;

    impl Game for TwoDoors {
        type State = u8;
        type Action = u8;

        fn is_terminal(&self, state: &u8) -> bool {
            *state != 0
        }

        fn outcome(&self, state: &u8) -> duel_core::Result<Outcome> {
            if *state != 0 {
                Ok(Outcome::Draw)
            } else {
                Err(GameError::NotTerminal)
            }
        }

        fn side_to_move(&self, _state: &u8) -> Side {
            Side::First
        }

        fn legal_actions(&self, state: &u8) -> Vec<u8> {
            if *state == 0 {
                vec![1, 2]
            } else {
                Vec::new()
            }
        }

        fn apply_action<R: Rng + ?Sized>(
            &self,
            _state: &u8,
            action: u8,
            _rng: &mut R,
        ) -> duel_core::Result<u8> {
            Ok(action)
        }
    }

    /// Two positions that lead to each other forever.
    #[derive(Clone)]
    struct Loop;

    impl Game for Loop {
        type State = u8;
        type Action = u8;

        fn is_terminal(&self, _state: &u8) -> bool {
            false
        }

        fn outcome(&self, _state: &u8) -> duel_core::Result<Outcome> {
            Err(GameError::NotTerminal)
        }

        fn side_to_move(&self, state: &u8) -> Side {
            if *state == 0 {
                Side::First
            } else {
                Side::Second
            }
        }

        fn legal_actions(&self, _state: &u8) -> Vec<u8> {
            vec![0]
        }

        fn apply_action<R: Rng + ?Sized>(
            &self,
            state: &u8,
            _action: u8,
            _rng: &mut R,
        ) -> duel_core::Result<u8> {
            Ok(state ^ 1)
        }
    }

    /// One move to a first-party win whose engine breaks after `fail_after`
    /// successful transitions.
    struct Flaky {
        fail_after: u32,
        calls: Cell<u32>,
    }

    impl Game for Flaky {
        type State = u8;
        type Action = u8;

        fn is_terminal(&self, state: &u8) -> bool {
            *state == 1
        }

        fn outcome(&self, state: &u8) -> duel_core::Result<Outcome> {
            if *state == 1 {
                Ok(Outcome::FirstPartyWin)
            } else {
                Err(GameError::NotTerminal)
            }
        }

        fn side_to_move(&self, _state: &u8) -> Side {
            Side::First
        }

        fn legal_actions(&self, _state: &u8) -> Vec<u8> {
            vec![7]
        }

        fn apply_action<R: Rng + ?Sized>(
            &self,
            _state: &u8,
            _action: u8,
            _rng: &mut R,
        ) -> duel_core::Result<u8> {
            let calls = self.calls.get();
            self.calls.set(calls + 1);
            if calls >= self.fail_after {
                Err(GameError::Engine("state corrupted".to_string()))
            } else {
                Ok(1)
            }
        }
    }

    /// A running game with nothing to play.
    #[derive(Clone)]
    struct Stuck;

    impl Game for Stuck {
        type State = u8;
        type Action = u8;

        fn is_terminal(&self, _state: &u8) -> bool {
            false
        }

        fn outcome(&self, _state: &u8) -> duel_core::Result<Outcome> {
            Err(GameError::NotTerminal)
        }

        fn side_to_move(&self, _state: &u8) -> Side {
            Side::First
        }

        fn legal_actions(&self, _state: &u8) -> Vec<u8> {
            Vec::new()
        }

        fn apply_action<R: Rng + ?Sized>(
            &self,
            _state: &u8,
            _action: u8,
            _rng: &mut R,
        ) -> duel_core::Result<u8> {
            Err(GameError::NoLegalActions)
        }
    }

    fn mcts<G: Game>(
        seed: u64,
        simulations: usize,
    ) -> Mcts<G, RolloutEvaluator<ChaCha8Rng>, ChaCha8Rng> {
        let config = MctsConfig::with_simulations(simulations).with_exploration(1.0);
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let evaluator = RolloutEvaluator::new(rng.clone());
        Mcts::new(config, evaluator, rng)
    }

    #[test]
    fn test_two_doors_scenario() {
        let mut search = mcts::<TwoDoors>(42, 2);
        let registry = search.search(&TwoDoors, &0).unwrap();

        // Terminal successors are never registered
        assert_eq!(registry.len(), 1);

        let root = registry.get(NodeId::ROOT);
        assert!(root.is_fully_expanded());
        for door in [1, 2] {
            let stats = root.action_stats(&door).unwrap();
            assert_eq!(stats.total_value(), 0.5);
            assert_eq!(stats.visit_count(), 1);
        }
        assert_eq!(search.stats().expansions, 2);
    }

    #[test]
    fn test_two_doors_recommendation_breaks_ties_randomly() {
        let registry = mcts::<TwoDoors>(0, 2).search(&TwoDoors, &0).unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut picks = [0usize; 3];
        for _ in 0..200 {
            let action = recommend_action(&registry, &0, &mut rng).unwrap();
            picks[action as usize] += 1;
        }
        assert_eq!(picks[0], 0);
        assert!(picks[1] > 50 && picks[2] > 50, "picks {:?}", picks);
    }

    #[test]
    fn test_cycle_stops_selection_and_still_backpropagates() {
        let config = MctsConfig::with_simulations(3).with_exploration(1.0);
        let mut search = Mcts::new(config, OutcomeEvaluator, ChaCha8Rng::seed_from_u64(5));
        let registry = search.search(&Loop, &0).unwrap();

        // Simulation 1 expands the root, 2 registers and expands the other
        // position, 3 walks back onto the root and stops.
        assert_eq!(registry.len(), 2);
        assert_eq!(search.stats().cycle_hits, 1);

        let root = registry.get(NodeId::ROOT);
        let other = registry.get(NodeId(1));
        assert_eq!(root.visits(), 3);
        assert_eq!(other.visits(), 2);
        assert_eq!(root.children(), &[NodeId(1)]);
        assert_eq!(other.children(), &[NodeId::ROOT]);
        assert!(registry.iter().all(|(_, node)| node.cycle_marker() == 0));
    }

    #[test]
    fn test_cyclic_graph_terminates() {
        let config = MctsConfig::with_simulations(500);
        let mut search = Mcts::new(config, OutcomeEvaluator, ChaCha8Rng::seed_from_u64(9));
        let registry = search.search(&Loop, &0).unwrap();

        assert_eq!(search.stats().simulations, 500);
        assert_eq!(registry.get(NodeId::ROOT).visits(), 500);
        assert_eq!(search.stats().cycle_hits, 498);
    }

    #[test]
    fn test_backpropagation_credits_side_to_move() {
        // On a reach-1 track every push ends the game: Right is a first-party
        // win, Left a second-party win.
        let game = Pendulum::new(1);

        for side in [Side::First, Side::Second] {
            let root_state = PendulumState::new(0, side);
            let registry = mcts::<Pendulum>(1, 50).search(&game, &root_state).unwrap();
            let root = registry.get(NodeId::ROOT);
            assert_eq!(root.side(), side);

            let right = root.action_stats(&Push::Right).unwrap();
            let left = root.action_stats(&Push::Left).unwrap();
            let (right_value, left_value) = match side {
                Side::First => (1.0, 0.0),
                Side::Second => (0.0, 1.0),
            };
            assert_eq!(right.total_value(), right_value * right.visit_count() as f64);
            assert_eq!(left.total_value(), left_value * left.visit_count() as f64);
        }
    }

    #[test]
    fn test_second_party_update_mirrors_first_party() {
        let game = Pendulum::new(3);
        let mut search = mcts::<Pendulum>(0, 0);
        let mut registry = Registry::new();
        let first = registry.lookup_or_create(&game, &PendulumState::new(0, Side::First));
        let second = registry.lookup_or_create(&game, &PendulumState::new(0, Side::Second));
        registry.get_mut(first).add_action(Push::Right);
        registry.get_mut(second).add_action(Push::Right);

        for v in [0.0, 0.25, 0.5, 1.0] {
            let value = Value::new(v).unwrap();
            search.backpropagate(&mut registry, &[(second, Push::Right)], value);
            search.backpropagate(&mut registry, &[(first, Push::Right)], value.reverse());
        }

        assert_eq!(
            registry.get(first).action_stats(&Push::Right),
            registry.get(second).action_stats(&Push::Right)
        );
        assert_eq!(registry.get(second).visits(), 4);
        assert_eq!(search.stats().updates, 8);
    }

    #[test]
    fn test_finds_winning_move() {
        let game = TicTacToe;
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut state = game.initial_state();
        for cell in [0, 3, 1, 4] {
            state = game
                .apply_action(&state, TicTacToeAction(cell), &mut rng)
                .unwrap();
        }

        let mut search = mcts::<TicTacToe>(42, 2000);
        assert_eq!(search.choose_action(&game, &state).unwrap(), TicTacToeAction(2));
    }

    #[test]
    fn test_finds_winning_move_for_second_party() {
        let game = TicTacToe;
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut state = game.initial_state();
        for cell in [0, 3, 1, 4, 8] {
            state = game
                .apply_action(&state, TicTacToeAction(cell), &mut rng)
                .unwrap();
        }
        assert_eq!(game.side_to_move(&state), Side::Second);

        let mut search = mcts::<TicTacToe>(42, 2000);
        assert_eq!(search.choose_action(&game, &state).unwrap(), TicTacToeAction(5));
    }

    #[test]
    fn test_transition_failure_during_expansion() {
        let game = Flaky {
            fail_after: 0,
            calls: Cell::new(0),
        };
        let err = mcts::<Flaky>(0, 10).search(&game, &0).unwrap_err();

        match err {
            SearchError::Transition {
                state,
                action,
                source,
            } => {
                assert_eq!(state, "0");
                assert_eq!(action, "7");
                assert!(matches!(source, GameError::Engine(_)));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_transition_failure_during_selection() {
        // The expansion succeeds, the next simulation's walk fails
        let game = Flaky {
            fail_after: 1,
            calls: Cell::new(0),
        };
        let err = mcts::<Flaky>(0, 10).search(&game, &0).unwrap_err();

        assert!(matches!(err, SearchError::Transition { .. }));
        assert_eq!(game.calls.get(), 2);
    }

    #[test]
    fn test_terminal_root_is_rejected() {
        let game = TicTacToe;
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut state = game.initial_state();
        for cell in [0, 3, 1, 4, 2] {
            state = game
                .apply_action(&state, TicTacToeAction(cell), &mut rng)
                .unwrap();
        }

        let err = mcts::<TicTacToe>(0, 10).search(&game, &state).unwrap_err();
        assert!(matches!(err, SearchError::TerminalRoot { .. }));
    }

    #[test]
    fn test_running_game_without_actions_fails() {
        let err = mcts::<Stuck>(0, 10).search(&Stuck, &0).unwrap_err();
        assert!(matches!(err, SearchError::NoLegalActions { .. }));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = MctsConfig::with_simulations(10).with_exploration(-1.0);
        let mut search = Mcts::new(config, OutcomeEvaluator, ChaCha8Rng::seed_from_u64(0));
        let err = search.search(&TwoDoors, &0).unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfig(_)));
    }

    #[test]
    fn test_expanding_a_fully_expanded_node_fails() {
        let mut search = mcts::<TwoDoors>(0, 2);
        let mut registry = search.search(&TwoDoors, &0).unwrap();
        let mut path = Vec::new();

        let err = search
            .expand(&TwoDoors, &mut registry, NodeId::ROOT, &0, &mut path)
            .unwrap_err();
        assert!(matches!(err, SearchError::AlreadyExpanded { .. }));
        assert!(path.is_empty());
    }

    #[test]
    fn test_recommend_unknown_state() {
        let registry = mcts::<TwoDoors>(0, 2).search(&TwoDoors, &0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let err = recommend_action(&registry, &5, &mut rng).unwrap_err();
        assert!(matches!(err, SearchError::UnknownState { .. }));
    }

    #[test]
    fn test_recommend_without_statistics() {
        let mut registry = Registry::new();
        registry.lookup_or_create(&TwoDoors, &0);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let err = recommend_action(&registry, &0, &mut rng).unwrap_err();
        assert!(matches!(err, SearchError::NoStatistics { .. }));
    }

    #[test]
    fn test_run_search_matches_mcts() {
        let game = TicTacToe;
        let state = game.initial_state();
        let config = MctsConfig::with_simulations(200);

        let evaluator = RolloutEvaluator::new(ChaCha8Rng::seed_from_u64(4));
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let registry = run_search(&game, &state, &config, &evaluator, &mut rng).unwrap();

        let evaluator = RolloutEvaluator::new(ChaCha8Rng::seed_from_u64(4));
        let mut search = Mcts::new(config, evaluator, ChaCha8Rng::seed_from_u64(4));
        let expected = search.search(&game, &state).unwrap();

        assert_eq!(registry.len(), expected.len());
        assert_eq!(registry.root_visit_counts(), expected.root_visit_counts());
    }

    #[test]
    fn test_mcts_deterministic() {
        let game = Pendulum::new(3).with_slip(0.2);

        let run = |seed: u64| {
            let mut search = mcts::<Pendulum>(seed, 300);
            let registry = search.search(&game, &game.initial_state()).unwrap();
            (registry.len(), registry.root_visit_counts(), *search.stats())
        };

        assert_eq!(run(12345), run(12345));
    }
}
