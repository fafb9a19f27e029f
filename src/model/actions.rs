//! Fixed action enumeration
//!
//! The action space is read off the aggregated table's index once, at model
//! construction, and stays frozen for the life of a solving session: every
//! action index used by the tensors, the Q table, and the observation tuples
//! refers to this same ordered list.

use std::collections::HashMap;

use crate::{
    error::{Error, Result},
    statcast::OutcomeTable,
    types::{PitchCall, PitchType, Zone},
};

/// Upper bound on the enumeration size.
pub const ACTION_LIMIT: usize = 134;

/// Bijection between action indices and (pitch type, zone) pairs.
#[derive(Debug, Clone)]
pub struct ActionSet {
    calls: Vec<PitchCall>,
    index: HashMap<PitchCall, usize>,
}

impl ActionSet {
    /// Build the enumeration from the first [`ACTION_LIMIT`] distinct
    /// (pitch type, zone) pairs of the table, in table order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyOutcomeTable`] if the table has no rows.
    pub fn from_table(table: &OutcomeTable) -> Result<Self> {
        if table.is_empty() {
            return Err(Error::EmptyOutcomeTable);
        }

        let mut calls = Vec::new();
        let mut index = HashMap::new();
        for entry in table.iter() {
            let call = PitchCall::new(entry.pitch_type, entry.zone);
            if index.contains_key(&call) {
                continue;
            }
            index.insert(call, calls.len());
            calls.push(call);
            if calls.len() == ACTION_LIMIT {
                break;
            }
        }

        Ok(ActionSet { calls, index })
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// The call at an action index.
    pub fn call(&self, action: usize) -> PitchCall {
        self.calls[action]
    }

    /// The action index of a (pitch type, zone) pair, if enumerated.
    pub fn position(&self, pitch_type: PitchType, zone: Zone) -> Option<usize> {
        self.index.get(&PitchCall::new(pitch_type, zone)).copied()
    }

    /// Enumerated calls in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, PitchCall)> + '_ {
        self.calls.iter().copied().enumerate()
    }
}
