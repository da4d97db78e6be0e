//! Frame loop state machine
//!
//! The loop only ever starts: there is no pause, game over or shutdown.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Loop states
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    NotStarted,
    Running,
}

/// Actions that trigger state transitions
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    Start,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: LoopState,
    pub to_state: LoopState,
    pub action: LoopAction,
}

/// Frame loop finite state machine
#[derive(Debug)]
pub struct LoopFsm {
    state: LoopState,
}

impl LoopFsm {
    pub fn new() -> Self {
        Self {
            state: LoopState::NotStarted,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn can_transition(&self, action: LoopAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: LoopAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    fn get_next_state(&self, action: LoopAction) -> Option<LoopState> {
        match (self.state, action) {
            (LoopState::NotStarted, LoopAction::Start) => Some(LoopState::Running),
            // Running is never left
            (LoopState::Running, LoopAction::Start) => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }
}

impl Default for LoopFsm {
    fn default() -> Self {
        Self::new()
    }
}
