//! Per-card entry/exit state.

use gatepass_core::AccessAction;
use serde::{Deserialize, Serialize};

/// Mutable state tracked for one registered identity.
///
/// The state space is `{None, Entry, Exit} x {cycle_complete}`. A fresh
/// card starts at `(None, false)`; the only valid trajectory is
/// `None -> Entry -> Exit`, at which point the cycle is complete and the
/// card is locked out for the rest of the process lifetime. There is no
/// reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardState {
    /// Last recorded action, `None` before the first valid scan.
    pub last_action: Option<AccessAction>,

    /// Set once the Entry -> Exit pair has completed; never reverts.
    pub cycle_complete: bool,
}

impl CardState {
    /// Fresh state: no action recorded, cycle open.
    pub fn new() -> Self {
        Self {
            last_action: None,
            cycle_complete: false,
        }
    }

    /// The next valid action for this card.
    ///
    /// Entry when nothing has been recorded yet (or after an exit); Exit
    /// after an entry.
    pub fn next_action(&self) -> AccessAction {
        match self.last_action {
            None | Some(AccessAction::Exit) => AccessAction::Entry,
            Some(AccessAction::Entry) => AccessAction::Exit,
        }
    }

    /// Record an action, returning whether the state changed.
    ///
    /// A repeat of the already-recorded action leaves the state untouched
    /// and returns `false`; recording an `Exit` from any other state also
    /// marks the cycle complete.
    pub fn apply(&mut self, action: AccessAction) -> bool {
        if self.last_action == Some(action) {
            return false;
        }

        self.last_action = Some(action);
        if action == AccessAction::Exit {
            self.cycle_complete = true;
        }
        true
    }

    /// Returns `true` if the card has used up its entry/exit cycle.
    pub fn is_locked_out(&self) -> bool {
        self.cycle_complete
    }
}

impl Default for CardState {
    fn default() -> Self {
        Self::new()
    }
}
