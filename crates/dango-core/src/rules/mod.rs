//! Word aggregation rules loaded from TOML.
//!
//! The built-in rule set (`default_rules.toml`) fuses Sudachi verb and
//! adjective stems with their inflectional auxiliaries. Custom rule files use
//! the same schema and go through the same validation as the built-in one.

use serde::Deserialize;

use crate::fsm::{Action, FsmError, Source, State, StateMachine, Transition};
use crate::morpheme::WILDCARD;

pub const DEFAULT_RULES_TOML: &str = include_str!("default_rules.toml");

/// Returns the embedded default rules TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_RULES_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("{0:?} is reserved for wildcard sources and cannot name a state")]
    ReservedName(String),
    #[error(transparent)]
    Invalid(#[from] FsmError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RulesConfig {
    initial: String,
    default: String,
    states: Vec<StateConfig>,
    #[serde(default)]
    transitions: Vec<TransitionConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StateConfig {
    name: String,
    action: Action,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TransitionConfig {
    from: String,
    features: Vec<String>,
    to: String,
}

/// Parse and validate a rules document into a compiled [`StateMachine`].
pub fn parse_rules_toml(toml_str: &str) -> Result<StateMachine, RulesError> {
    let config: RulesConfig =
        toml::from_str(toml_str).map_err(|e| RulesError::Parse(e.to_string()))?;

    if let Some(state) = config.states.iter().find(|s| s.name == WILDCARD) {
        return Err(RulesError::ReservedName(state.name.clone()));
    }

    let states = config
        .states
        .into_iter()
        .map(|s| State::new(s.name, s.action))
        .collect();
    let transitions = config.transitions.into_iter().map(|t| Transition {
        from: if t.from == WILDCARD {
            Source::Any
        } else {
            Source::State(t.from)
        },
        features: t.features,
        to: t.to,
    });

    Ok(StateMachine::new(
        states,
        &config.initial,
        &config.default,
        transitions,
    )?)
}

/// Build the state machine for the built-in rule set.
pub fn default_state_machine() -> Result<StateMachine, RulesError> {
    parse_rules_toml(DEFAULT_RULES_TOML)
}
