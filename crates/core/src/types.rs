//! Party, outcome and value types shared by engines and the search.
//!
//! Values are always stated from the first party's point of view:
//! - 1.0 means the first party wins
//! - 0.0 means the second party wins
//! - 0.5 is a draw

use crate::{GameError, Result};
use std::fmt;

/// One of the two parties in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Get the opposing side.
    pub fn opposite(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub fn is_first(self) -> bool {
        self == Side::First
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => write!(f, "first"),
            Side::Second => write!(f, "second"),
        }
    }
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    FirstPartyWin,
    SecondPartyWin,
    Draw,
}

impl Outcome {
    /// Outcome in which `side` wins.
    pub fn win_for(side: Side) -> Self {
        match side {
            Side::First => Outcome::FirstPartyWin,
            Side::Second => Outcome::SecondPartyWin,
        }
    }

    /// The winning side, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::FirstPartyWin => Some(Side::First),
            Outcome::SecondPartyWin => Some(Side::Second),
            Outcome::Draw => None,
        }
    }
}

/// A value estimate from the first party's perspective.
///
/// Invariant: the value is in [0, 1] and never NaN.
///
/// # Example
/// ```
/// use duel_core::Value;
///
/// let value = Value::new(0.75).unwrap();
/// assert_eq!(value.reverse().get(), 0.25);
/// assert_eq!(value.reverse().reverse(), value);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Value(f64);

impl Value {
    /// Value for a first-party win.
    pub const WIN: Self = Self(1.0);

    /// Value for a second-party win.
    pub const LOSS: Self = Self(0.0);

    /// Value for a draw.
    pub const DRAW: Self = Self(0.5);

    /// Create a new value.
    ///
    /// # Errors
    /// Returns `GameError::InvalidValue` if the value is outside [0, 1] or NaN.
    pub fn new(value: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(GameError::InvalidValue(format!(
                "value {} is outside range [0, 1]",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Create a value by clamping to [0, 1].
    ///
    /// NaN clamps to a draw.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            Self::DRAW
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Get the underlying value.
    pub fn get(self) -> f64 {
        self.0
    }

    /// The same estimate from the other party's perspective.
    pub fn reverse(self) -> Self {
        Self(1.0 - self.0)
    }

    /// The estimate from `side`'s perspective.
    pub fn for_side(self, side: Side) -> Self {
        match side {
            Side::First => self,
            Side::Second => self.reverse(),
        }
    }
}

impl From<Outcome> for Value {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::FirstPartyWin => Value::WIN,
            Outcome::SecondPartyWin => Value::LOSS,
            Outcome::Draw => Value::DRAW,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<Value> for f64 {
    fn from(v: Value) -> f64 {
        v.0
    }
}
