//! Declaratively configured state machine that splits an input sequence into
//! contiguous groups.
//!
//! Every state carries an [`Action`]: entering a [`Action::Start`] state opens
//! a new group, entering an [`Action::Append`] state extends the current one.
//! The next state is resolved per input from its four-level feature key:
//!
//! 1. a transition registered for `(current state, key)`,
//! 2. otherwise a transition registered for `(*, key)`,
//! 3. otherwise the default state.


use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::morpheme::{Features, FEATURE_LEVELS, POS_SEPARATOR};

/// Index of a state within its [`StateMachine`].
pub type StateId = usize;

/// What happens to the current input when a state is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Open a new group, then append the input to it.
    Start,
    /// Append the input to the most recently opened group.
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub name: String,
    pub action: Action,
}

impl State {
    pub fn new(name: impl Into<String>, action: Action) -> Self {
        Self {
            name: name.into(),
            action,
        }
    }

    pub fn starts_group(&self) -> bool {
        self.action == Action::Start
    }
}

/// Source side of a transition rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Matches whatever state the machine is currently in.
    Any,
    State(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: Source,
    /// Exactly four tag levels, each a literal label or `*`.
    pub features: Vec<String>,
    pub to: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FsmError {
    #[error("no states declared")]
    NoStates,
    #[error("duplicate state: {0}")]
    DuplicateState(String),
    #[error("unknown state {name:?} referenced by {context}")]
    UnknownState { name: String, context: String },
    #[error("{context} state {name:?} must start a new group")]
    MustStartGroup { name: String, context: &'static str },
    #[error("transition features {features:?} must be 4 non-empty levels without ','")]
    InvalidFeatures { features: Vec<String> },
    #[error("duplicate transition from {from} on {key}")]
    DuplicateTransition { from: String, key: String },
}

/// Destinations registered for one feature key.
#[derive(Debug, Clone, Default)]
struct Targets {
    by_source: HashMap<StateId, StateId>,
    any: Option<StateId>,
}

/// Compiled state machine. Immutable after construction and safe to share
/// between threads.
#[derive(Debug, Clone)]
pub struct StateMachine {
    states: Vec<State>,
    initial: StateId,
    default: StateId,
    transitions: HashMap<String, Targets>,
}

impl StateMachine {
    /// Validate and compile a state machine.
    ///
    /// Every state named by `initial`, `default` or a transition must be
    /// declared, and the initial and default states must start a new group so
    /// that an append never happens before the first group is opened.
    pub fn new(
        states: Vec<State>,
        initial: &str,
        default: &str,
        transitions: impl IntoIterator<Item = Transition>,
    ) -> Result<Self, FsmError> {
        if states.is_empty() {
            return Err(FsmError::NoStates);
        }

        let mut ids: HashMap<&str, StateId> = HashMap::with_capacity(states.len());
        for (id, state) in states.iter().enumerate() {
            if ids.insert(state.name.as_str(), id).is_some() {
                return Err(FsmError::DuplicateState(state.name.clone()));
            }
        }
        let resolve = |name: &str, context: &str| -> Result<StateId, FsmError> {
            ids.get(name).copied().ok_or_else(|| FsmError::UnknownState {
                name: name.to_string(),
                context: context.to_string(),
            })
        };

        let initial = resolve(initial, "initial")?;
        let default = resolve(default, "default")?;
        for (id, context) in [(initial, "initial"), (default, "default")] {
            if !states[id].starts_group() {
                return Err(FsmError::MustStartGroup {
                    name: states[id].name.clone(),
                    context,
                });
            }
        }

        let mut compiled: HashMap<String, Targets> = HashMap::new();
        for rule in transitions {
            let key = feature_key(&rule.features)?;
            let to = resolve(&rule.to, &format!("transition to {}", rule.to))?;
            match &rule.from {
                Source::Any => {
                    let targets = compiled.entry(key.clone()).or_default();
                    if targets.any.replace(to).is_some() {
                        return Err(FsmError::DuplicateTransition {
                            from: "*".to_string(),
                            key,
                        });
                    }
                }
                Source::State(name) => {
                    let from = resolve(name, &format!("transition from {name}"))?;
                    let targets = compiled.entry(key.clone()).or_default();
                    if targets.by_source.insert(from, to).is_some() {
                        return Err(FsmError::DuplicateTransition {
                            from: name.clone(),
                            key,
                        });
                    }
                }
            }
        }

        Ok(Self {
            states,
            initial,
            default,
            transitions: compiled,
        })
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The state with the given id, or `None` if this machine has no such
    /// state.
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id)
    }

    pub fn initial(&self) -> StateId {
        self.initial
    }

    pub fn default_state(&self) -> StateId {
        self.default
    }

    pub fn transition_count(&self) -> usize {
        self.transitions
            .values()
            .map(|t| t.by_source.len() + usize::from(t.any.is_some()))
            .sum()
    }

    /// Resolve the state entered from `from` on an input with feature `key`.
    pub fn next_state(&self, from: StateId, key: &str) -> StateId {
        self.transitions
            .get(key)
            .and_then(|t| t.by_source.get(&from).copied().or(t.any))
            .unwrap_or(self.default)
    }

    /// The sequence of states entered while consuming `inputs`, one per input.
    pub fn trace<T: Features>(&self, inputs: &[T]) -> Vec<StateId> {
        let mut current = self.initial;
        inputs
            .iter()
            .map(|input| {
                current = self.next_state(current, &input.feature_key());
                current
            })
            .collect()
    }

    /// Split `inputs` into groups.
    ///
    /// Every input lands in exactly one group and order is preserved, so
    /// flattening the result reproduces the input. Empty input yields no
    /// groups.
    pub fn run<T, I>(&self, inputs: I) -> Vec<Vec<T>>
    where
        T: Features,
        I: IntoIterator<Item = T>,
    {
        let _span = debug_span!("fsm_run").entered();
        let mut groups: Vec<Vec<T>> = Vec::new();
        let mut current = self.initial;

        for input in inputs {
            let next = self.next_state(current, &input.feature_key());
            match (self.states[next].action, groups.last_mut()) {
                (Action::Append, Some(group)) => group.push(input),
                // A wildcard rule may route the very first input into an
                // append state; it still needs a group to land in.
                _ => groups.push(vec![input]),
            }
            current = next;
        }

        debug!(groups = groups.len());
        groups
    }
}

/// Validate a four-level feature tuple and join it into a lookup key.
fn feature_key(features: &[String]) -> Result<String, FsmError> {
    let valid = features.len() == FEATURE_LEVELS
        && features
            .iter()
            .all(|f| !f.is_empty() && !f.contains(POS_SEPARATOR));
    if !valid {
        return Err(FsmError::InvalidFeatures {
            features: features.to_vec(),
        });
    }
    Ok(features.join(","))
}
