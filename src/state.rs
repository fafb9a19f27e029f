//! Count states and terminal outcomes of an at-bat
//!
//! An at-bat is modeled over 16 states: the twelve ball-strike counts
//! `0-0 .. 3-2` in row-major order (`balls * 3 + strikes`), followed by four
//! absorbing outcomes (hit, field out, walk, strikeout) in the last four
//! slots of the state vector.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Total number of states (12 counts + 4 terminal outcomes).
pub const NUM_STATES: usize = 16;

/// Number of non-terminal count states.
pub const NUM_COUNT_STATES: usize = 12;

/// State index of the hit outcome.
pub const HIT: usize = 12;

/// State index of the generic batted-ball out outcome.
pub const FIELD_OUT: usize = 13;

/// State index of the walk outcome.
pub const WALK: usize = 14;

/// State index of the strikeout outcome.
pub const STRIKEOUT: usize = 15;

/// A ball-strike count (0-3 balls, 0-2 strikes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Count {
    balls: u8,
    strikes: u8,
}

impl Count {
    /// Create a count, validating that it is reachable within an at-bat.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCount`] if balls > 3 or strikes > 2.
    pub fn new(balls: u8, strikes: u8) -> Result<Self> {
        if balls <= 3 && strikes <= 2 {
            Ok(Count { balls, strikes })
        } else {
            Err(Error::InvalidCount { balls, strikes })
        }
    }

    /// The row-major state index of this count (`balls * 3 + strikes`).
    pub fn index(&self) -> usize {
        usize::from(self.balls) * 3 + usize::from(self.strikes)
    }

    /// Recover a count from its state index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStateIndex`] if the index is not a count state.
    pub fn from_index(index: usize) -> Result<Self> {
        if index < NUM_COUNT_STATES {
            Ok(Count {
                balls: (index / 3) as u8,
                strikes: (index % 3) as u8,
            })
        } else {
            Err(Error::InvalidStateIndex { index })
        }
    }

    pub fn balls(&self) -> u8 {
        self.balls
    }

    pub fn strikes(&self) -> u8 {
        self.strikes
    }

    /// The count after a taken ball, or `None` when ball four would walk
    /// the batter.
    pub fn with_ball(&self) -> Option<Count> {
        (self.balls < 3).then(|| Count {
            balls: self.balls + 1,
            strikes: self.strikes,
        })
    }

    /// The count after a strike, or `None` when strike three would end
    /// the at-bat.
    pub fn with_strike(&self) -> Option<Count> {
        (self.strikes < 2).then(|| Count {
            balls: self.balls,
            strikes: self.strikes + 1,
        })
    }

    pub fn has_two_strikes(&self) -> bool {
        self.strikes == 2
    }

    pub fn has_three_balls(&self) -> bool {
        self.balls == 3
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.balls, self.strikes)
    }
}

/// One of the 16 at-bat states: a live count or an absorbing outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    Count(Count),
    Hit,
    FieldOut,
    Walk,
    Strikeout,
}

impl State {
    /// The slot of this state in the 16-element state vector.
    pub fn index(&self) -> usize {
        match self {
            State::Count(count) => count.index(),
            State::Hit => HIT,
            State::FieldOut => FIELD_OUT,
            State::Walk => WALK,
            State::Strikeout => STRIKEOUT,
        }
    }

    /// Recover a state from its index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStateIndex`] if the index is >= 16.
    pub fn from_index(index: usize) -> Result<Self> {
        match index {
            HIT => Ok(State::Hit),
            FIELD_OUT => Ok(State::FieldOut),
            WALK => Ok(State::Walk),
            STRIKEOUT => Ok(State::Strikeout),
            _ => Count::from_index(index).map(State::Count),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, State::Count(_))
    }
}

impl From<Count> for State {
    fn from(count: Count) -> Self {
        State::Count(count)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Count(count) => write!(f, "{count}"),
            State::Hit => write!(f, "HIT"),
            State::FieldOut => write!(f, "FIELD OUT"),
            State::Walk => write!(f, "WALK"),
            State::Strikeout => write!(f, "STRIKEOUT"),
        }
    }
}
