//! Managing undo state

use crate::core::settings::UNDO_STACK_SIZE;
use std::collections::VecDeque;

/// A stack of states that can be undone and redone.
#[derive(Debug, Clone)]
pub struct UndoState<T: Clone> {
    /// Maximum number of undo states to store.
    max_undo_count: usize,
    /// The stack of states.
    stack: VecDeque<T>,
    /// The index in `stack` of the current state.
    live_index: usize,
}

impl<T: Clone> UndoState<T> {
    /// Create a new undo state with the default stack size.
    pub fn new(init_state: T) -> Self {
        Self::new_sized(UNDO_STACK_SIZE, init_state)
    }

    /// Create a new undo state with a specific maximum stack size.
    pub fn new_sized(max_undo_count: usize, init_state: T) -> Self {
        let mut stack = VecDeque::new();
        stack.push_back(init_state);
        UndoState {
            max_undo_count: max_undo_count.max(1),
            stack,
            live_index: 0,
        }
    }

    /// Undo the last action, returning the previous state.
    pub fn undo(&mut self) -> Option<&T> {
        if self.live_index == 0 {
            return None;
        }
        self.live_index -= 1;
        self.stack.get(self.live_index)
    }

    /// Redo a previously undone action, returning the state to revert to.
    pub fn redo(&mut self) -> Option<&T> {
        if self.live_index == self.stack.len() - 1 {
            return None;
        }
        self.live_index += 1;
        self.stack.get(self.live_index)
    }

    /// Add a new state to the undo stack.
    pub fn push(&mut self, item: T) {
        // Editing after an undo drops the redo branch
        if self.live_index < self.stack.len() - 1 {
            self.stack.truncate(self.live_index + 1);
        }

        self.live_index += 1;
        self.stack.push_back(item);

        if self.stack.len() > self.max_undo_count {
            self.stack.pop_front();
            self.live_index -= 1;
        }
    }

    /// Replace the state of the currently active undo group.
    ///
    /// Used when an edit combines with the previous one, like typing more
    /// characters into the same label.
    pub fn update_current(&mut self, item: T) {
        if let Some(state) = self.stack.get_mut(self.live_index) {
            *state = item;
        }
    }

    pub fn can_undo(&self) -> bool {
        self.live_index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.live_index + 1 < self.stack.len()
    }

    /// Get the number of states in the undo stack.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Never true: the stack always holds the initial state.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
