use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

use crate::{config::set::DiceSetConfig, error::DiceError, rules::bounds::SET_COUNT};

/// Position of a set in the [`SetConfigStore`], as shown to the user.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    Ord,
    Eq,
    Hash,
    From,
    Into,
    Display,
    Serialize,
    Deserialize,
)]
#[display("#{}", _0 + 1)]
pub struct SetId(pub usize);

impl SetId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owns every configured dice set for the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetConfigStore {
    sets: Vec<DiceSetConfig>,
}

impl SetConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every set with `count` fresh ones.
    ///
    /// The count is checked before anything is touched, so a rejected count
    /// leaves the previous sets in place.
    pub fn reconfigure(&mut self, count: u32) -> Result<(), DiceError> {
        if !SET_COUNT.contains(count) {
            return Err(DiceError::InvalidSetCount(count));
        }
        self.sets = vec![DiceSetConfig::default(); count as usize];
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn get(&self, id: SetId) -> Result<&DiceSetConfig, DiceError> {
        self.sets.get(id.0).ok_or(DiceError::UnknownSet(id))
    }

    pub fn get_mut(&mut self, id: SetId) -> Result<&mut DiceSetConfig, DiceError> {
        self.sets.get_mut(id.0).ok_or(DiceError::UnknownSet(id))
    }

    pub fn ids(&self) -> impl Iterator<Item = SetId> + use<> {
        (0..self.sets.len()).map(SetId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SetId, &DiceSetConfig)> {
        self.sets.iter().enumerate().map(|(i, set)| (SetId(i), set))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SetId, &mut DiceSetConfig)> {
        self.sets
            .iter_mut()
            .enumerate()
            .map(|(i, set)| (SetId(i), set))
    }
}
