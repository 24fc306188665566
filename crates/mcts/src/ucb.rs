//! UCB1 score calculation.
//!
//! score(a) = average(a) + X * sqrt(ln(N) / n(a))
//!
//! where `N` is the total visit count of the node and `n(a)` the visit count
//! of the action. `X` is the only tunable.

/// Calculate the UCB1 score of one action.
///
/// `average` is the action's mean value from the perspective of the side to
/// move at the node. Callers must only pass visited actions (`visits > 0`).
///
/// # Arguments
/// * `average` - Mean value of the action
/// * `total_visits` - Sum of visit counts over all actions at the node (N)
/// * `visits` - Visit count of this action (n)
/// * `exploration` - Exploration constant (X)
#[inline]
pub fn ucb1(average: f64, total_visits: u32, visits: u32, exploration: f64) -> f64 {
    debug_assert!(visits > 0, "UCB1 of an unvisited action");
    let bonus = ((total_visits as f64).ln() / visits as f64).sqrt();
    average + exploration * bonus
}
