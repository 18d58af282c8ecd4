/// Newest-first state history with an undo/redo cursor.
///
/// States are stored with the most recently added one at index 0. The cursor
/// (`current_index`) moves toward older states on undo and back toward the
/// head on redo. Adding a state while the cursor is behind the head drops
/// every state newer than the cursor before the new one is pushed.
use std::collections::VecDeque;

use crate::config::HistoryConfig;
use crate::error::{HistoryError, Result};

/// Linear undo/redo history for a single owner.
///
/// Every mutating operation takes `&mut self` and either succeeds completely
/// or returns an error without touching the history.
#[derive(Debug, Clone)]
pub struct StateHistory<T> {
    /// States, newest first.
    states: VecDeque<T>,
    /// Index of the current state. Always 0 when `states` is empty.
    current_index: usize,
    /// Bumped on every successful mutation.
    revision: u64,
    config: HistoryConfig,
}

impl<T> Default for StateHistory<T> {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

impl<T> StateHistory<T> {
    /// Creates an empty history.
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            states: VecDeque::new(),
            current_index: 0,
            revision: 0,
            config,
        }
    }

    /// Creates an empty history without a depth limit.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// All stored states, newest first.
    pub fn states(&self) -> &VecDeque<T> {
        &self.states
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The state under the cursor, or `None` when the history is empty.
    pub fn current(&self) -> Option<&T> {
        self.states.get(self.current_index)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Whether `previous_state` would succeed.
    pub fn can_undo(&self) -> bool {
        self.current_index + 1 < self.states.len()
    }

    /// Whether `next_state` would succeed.
    pub fn can_redo(&self) -> bool {
        !self.states.is_empty() && self.current_index > 0
    }

    /// Mutation counter. Changes after every successful write, so observers
    /// can compare it against a previously seen value to detect updates.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Pushes a new state at the head and moves the cursor there.
    ///
    /// If the cursor is behind the head, the states newer than the cursor
    /// (the redo branch) are discarded first. When a depth limit is set, the
    /// oldest states beyond it are dropped.
    pub fn add_state(&mut self, new_state: T) {
        if self.current_index != 0 {
            let newer = self.current_index.min(self.states.len());
            self.states.drain(..newer);
            self.current_index = 0;
        }
        self.states.push_front(new_state);

        if self.config.is_bounded() && self.states.len() > self.config.max_depth {
            self.states.truncate(self.config.max_depth);
        }
        self.touch();
    }

    /// Undo: moves the cursor one step toward older states.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NoPreviousState`] if the cursor already sits on
    /// the oldest state or the history is empty.
    pub fn previous_state(&mut self) -> Result<()> {
        let new_index = self.current_index + 1;
        if new_index >= self.states.len() {
            return Err(HistoryError::NoPreviousState);
        }
        self.current_index = new_index;
        self.touch();
        Ok(())
    }

    /// Redo: moves the cursor one step toward the head.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NoNextState`] if the cursor is already at the
    /// head or the history is empty.
    pub fn next_state(&mut self) -> Result<()> {
        if self.states.is_empty() || self.current_index == 0 {
            return Err(HistoryError::NoNextState);
        }
        self.current_index -= 1;
        self.touch();
        Ok(())
    }

    /// Moves the cursor to an absolute position.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidIndex`] if `index` is not a valid
    /// position in the current state list.
    pub fn set_current_index(&mut self, index: usize) -> Result<()> {
        let len = self.states.len();
        if index >= len {
            return Err(HistoryError::InvalidIndex { index, len });
        }
        self.current_index = index;
        self.touch();
        Ok(())
    }

    /// Replaces the whole state list and the cursor at once.
    ///
    /// Without `new_index` the existing cursor is kept. The depth limit is not
    /// applied to a supplied list.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidCombination`] if the resulting cursor
    /// would not point into `new_states`.
    pub fn set_states<I>(&mut self, new_states: I, new_index: Option<usize>) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let new_states: VecDeque<T> = new_states.into_iter().collect();
        let index = new_index.unwrap_or(self.current_index);
        let len = new_states.len();
        if index >= len {
            return Err(HistoryError::InvalidCombination { index, len });
        }
        self.states = new_states;
        self.current_index = index;
        self.touch();
        Ok(())
    }

    /// Removes the state at `index` and returns it.
    ///
    /// The cursor keeps pointing at the same state when a newer one is
    /// removed. If the current state itself is removed, the cursor moves to
    /// the next older state, or to the oldest remaining one when there is none.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidIndex`] if `index` is out of range.
    pub fn delete_state(&mut self, index: usize) -> Result<T> {
        let len = self.states.len();
        let Some(removed) = self.states.remove(index) else {
            return Err(HistoryError::InvalidIndex { index, len });
        };

        if index < self.current_index {
            self.current_index -= 1;
        } else if self.current_index >= self.states.len() {
            self.current_index = self.states.len().saturating_sub(1);
        }
        self.touch();
        Ok(removed)
    }

    /// Drops every state and resets the cursor.
    pub fn clear_history(&mut self) {
        self.states.clear();
        self.current_index = 0;
        self.touch();
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
