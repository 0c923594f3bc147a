//! Scan decision engine.
//!
//! `AccessController` owns the registry and one [`CardState`] per
//! registered identity, and maps every scan to exactly one [`Outcome`].
//! Decisions are total and deterministic: there is no failure path, only
//! domain outcomes.

use crate::registry::{IdentityRegistry, Resolution};
use crate::state::CardState;
use gatepass_core::{
    AccessAction, TagUid,
    constants::{LABEL_NO_PASS, LABEL_REJECTED, UNKNOWN_DISPLAY_NAME},
};
use gatepass_hardware::LedColor;
use std::collections::HashMap;
use tracing::debug;

/// Indicator color for scans of unregistered tags.
pub const REJECTED_COLOR: LedColor = LedColor::Red;

/// Indicator color for scans of cards whose cycle is already complete.
pub const NO_PASS_COLOR: LedColor = LedColor::White;

/// Decision for a single scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The tag is not in the registry. No state exists or is created.
    Rejected,

    /// The card already completed its entry/exit cycle. State untouched.
    NoPass,

    /// A valid (or re-announced) action was recorded.
    ///
    /// `state_changed` is `false` for a redundant consecutive scan of the
    /// same action, which is reported again without touching state.
    ActionTaken {
        action: AccessAction,
        state_changed: bool,
    },
}

impl Outcome {
    /// Returns `true` if the scan produced an entry or exit action.
    pub fn is_granted(&self) -> bool {
        matches!(self, Outcome::ActionTaken { .. })
    }
}

/// Full result of processing one scan: the decision plus the presentation
/// data (name, color, wire label) the indicator and event publisher need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Canonical UID that was scanned.
    pub uid: TagUid,

    /// Display name for the event record (`"Desconocido"` when unknown).
    pub display_name: String,

    /// Indicator color for this outcome.
    pub color: LedColor,

    /// The decision itself.
    pub outcome: Outcome,
}

impl ScanOutcome {
    /// Wire label for the event record.
    ///
    /// One of `"entrada"`, `"salida"`, `"tarjeta rechazada"`,
    /// `"tarjeta sin pase"`.
    pub fn label(&self) -> &'static str {
        match self.outcome {
            Outcome::Rejected => LABEL_REJECTED,
            Outcome::NoPass => LABEL_NO_PASS,
            Outcome::ActionTaken { action, .. } => action.label(),
        }
    }

    /// Returns `true` if the scan produced an entry or exit action.
    pub fn is_granted(&self) -> bool {
        self.outcome.is_granted()
    }
}

/// Owns the registry and all per-card state; decides every scan.
///
/// One controller instance exists per reader. Card states are created for
/// every registered identity at construction and live for the controller's
/// lifetime; unregistered tags never get one.
///
/// # Examples
///
/// ```
/// use gatepass_access::{AccessController, IdentityRegistry, Outcome, RegistryEntry};
/// use gatepass_core::AccessAction;
///
/// let registry = IdentityRegistry::from_entries(vec![RegistryEntry {
///     uid: "AA".to_string(),
///     name: "Alice".to_string(),
///     color: [0, 255, 0],
/// }])
/// .unwrap();
/// let mut controller = AccessController::new(registry);
///
/// let uid = "aa".parse().unwrap();
/// let first = controller.process_scan(&uid);
/// assert_eq!(
///     first.outcome,
///     Outcome::ActionTaken { action: AccessAction::Entry, state_changed: true }
/// );
/// ```
#[derive(Debug)]
pub struct AccessController {
    registry: IdentityRegistry,
    states: HashMap<TagUid, CardState>,
}

impl AccessController {
    /// Create a controller with a fresh `(None, false)` state per identity.
    pub fn new(registry: IdentityRegistry) -> Self {
        let states = registry
            .identities()
            .map(|identity| (identity.uid.clone(), CardState::new()))
            .collect();

        Self { registry, states }
    }

    /// Decide one scan.
    ///
    /// Total function: every UID maps to exactly one outcome. Mutates the
    /// card's state only on a state-changing granted action.
    pub fn process_scan(&mut self, uid: &TagUid) -> ScanOutcome {
        let identity = match self.registry.resolve(uid) {
            Resolution::Known(identity) => identity.clone(),
            Resolution::Unknown => {
                debug!(%uid, "scan rejected: tag not in registry");
                return ScanOutcome {
                    uid: uid.clone(),
                    display_name: UNKNOWN_DISPLAY_NAME.to_string(),
                    color: REJECTED_COLOR,
                    outcome: Outcome::Rejected,
                };
            }
        };

        // Registered identities always have a state entry; entry() covers
        // a controller constructed before the identity was added, which
        // cannot happen through the public API.
        let state = self.states.entry(identity.uid.clone()).or_default();

        if state.is_locked_out() {
            debug!(%uid, name = %identity.display_name, "scan refused: cycle already complete");
            return ScanOutcome {
                uid: identity.uid,
                display_name: identity.display_name,
                color: NO_PASS_COLOR,
                outcome: Outcome::NoPass,
            };
        }

        let action = state.next_action();
        let state_changed = state.apply(action);
        debug!(
            %uid,
            name = %identity.display_name,
            %action,
            state_changed,
            "scan granted"
        );

        ScanOutcome {
            uid: identity.uid,
            display_name: identity.display_name,
            color: identity.color,
            outcome: Outcome::ActionTaken {
                action,
                state_changed,
            },
        }
    }

    /// Current state for a registered UID, if any.
    pub fn card_state(&self, uid: &TagUid) -> Option<&CardState> {
        self.states.get(uid)
    }

    /// The registry this controller decides against.
    pub fn registry(&self) -> &IdentityRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryEntry;

    fn controller_with(entries: Vec<(&str, &str, [u8; 3])>) -> AccessController {
        let entries = entries
            .into_iter()
            .map(|(uid, name, color)| RegistryEntry {
                uid: uid.to_string(),
                name: name.to_string(),
                color,
            })
            .collect();
        AccessController::new(IdentityRegistry::from_entries(entries).unwrap())
    }

    #[test]
    fn test_all_states_initialized_fresh() {
        let controller = controller_with(vec![
            ("AA", "Alice", [0, 255, 0]),
            ("BB", "Bob", [0, 0, 255]),
        ]);

        for identity in controller.registry().identities() {
            let state = controller.card_state(&identity.uid).unwrap();
            assert_eq!(*state, CardState::new());
        }
    }

    #[test]
    fn test_first_scan_enters() {
        let mut controller = controller_with(vec![("AA", "Alice", [0, 255, 0])]);
        let uid: TagUid = "AA".parse().unwrap();

        let result = controller.process_scan(&uid);

        assert_eq!(
            result.outcome,
            Outcome::ActionTaken {
                action: AccessAction::Entry,
                state_changed: true
            }
        );
        assert_eq!(result.label(), "entrada");
        assert_eq!(result.display_name, "Alice");
        assert_eq!(result.color, LedColor::Green);

        let state = controller.card_state(&uid).unwrap();
        assert_eq!(state.last_action, Some(AccessAction::Entry));
        assert!(!state.cycle_complete);
    }

    #[test]
    fn test_second_scan_exits_and_completes() {
        let mut controller = controller_with(vec![("AA", "Alice", [0, 255, 0])]);
        let uid: TagUid = "AA".parse().unwrap();

        controller.process_scan(&uid);
        let result = controller.process_scan(&uid);

        assert_eq!(
            result.outcome,
            Outcome::ActionTaken {
                action: AccessAction::Exit,
                state_changed: true
            }
        );
        assert_eq!(result.label(), "salida");

        let state = controller.card_state(&uid).unwrap();
        assert_eq!(state.last_action, Some(AccessAction::Exit));
        assert!(state.cycle_complete);
    }

    #[test]
    fn test_scan_after_cycle_is_no_pass() {
        let mut controller = controller_with(vec![("AA", "Alice", [0, 255, 0])]);
        let uid: TagUid = "AA".parse().unwrap();

        controller.process_scan(&uid);
        controller.process_scan(&uid);
        let before = *controller.card_state(&uid).unwrap();

        let result = controller.process_scan(&uid);
        assert_eq!(result.outcome, Outcome::NoPass);
        assert_eq!(result.label(), "tarjeta sin pase");
        assert_eq!(result.color, NO_PASS_COLOR);
        assert_eq!(result.display_name, "Alice");

        // NoPass is idempotent: state untouched, repeatable forever.
        assert_eq!(*controller.card_state(&uid).unwrap(), before);
        assert_eq!(controller.process_scan(&uid).outcome, Outcome::NoPass);
    }

    #[test]
    fn test_unknown_tag_rejected_without_state() {
        let mut controller = controller_with(vec![("BB", "Bob", [0, 0, 255])]);
        let uid: TagUid = "CC".parse().unwrap();

        let result = controller.process_scan(&uid);

        assert_eq!(result.outcome, Outcome::Rejected);
        assert_eq!(result.label(), "tarjeta rechazada");
        assert_eq!(result.color, REJECTED_COLOR);
        assert_eq!(result.display_name, "Desconocido");
        assert!(controller.card_state(&uid).is_none());
    }

    #[test]
    fn test_case_insensitive_resolution() {
        let mut controller = controller_with(vec![("AA", "Alice", [0, 255, 0])]);

        let lower: TagUid = "aa".parse().unwrap();
        let upper: TagUid = "AA".parse().unwrap();

        assert!(controller.process_scan(&lower).is_granted());

        let state = controller.card_state(&upper).unwrap();
        assert_eq!(state.last_action, Some(AccessAction::Entry));
    }

    #[test]
    fn test_identities_are_independent() {
        let mut controller = controller_with(vec![
            ("AA", "Alice", [0, 255, 0]),
            ("BB", "Bob", [0, 0, 255]),
        ]);
        let alice: TagUid = "AA".parse().unwrap();
        let bob: TagUid = "BB".parse().unwrap();

        controller.process_scan(&alice);
        controller.process_scan(&alice);

        // Alice's completed cycle does not affect Bob.
        let result = controller.process_scan(&bob);
        assert_eq!(
            result.outcome,
            Outcome::ActionTaken {
                action: AccessAction::Entry,
                state_changed: true
            }
        );
    }
}
