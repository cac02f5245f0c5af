//! Declarative transition tables loaded from JSON.
//!
//! A schema describes states, actions and targets only. Callbacks cannot be
//! serialized; attach them after loading through
//! [`FsmBuilder`](crate::builder::FsmBuilder).
//!
//! ```rust
//! use actionfsm::builder::FsmBuilder;
//! use actionfsm::schema::MachineSchema;
//! use std::convert::Infallible;
//!
//! let schema = MachineSchema::from_json(r#"{
//!     "initialState": "one",
//!     "states": {
//!         "one": { "actions": { "inc": { "targetState": "two" } } },
//!         "two": {}
//!     }
//! }"#).unwrap();
//!
//! let mut fsm = FsmBuilder::<(), Infallible>::from_schema(schema, ()).build().unwrap();
//! assert_eq!(fsm.do_action("inc").unwrap(), "two");
//! ```

use crate::core::{ActionDefinition, MachineConfig, StateDefinition};
use crate::error::FsmError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod error;

pub use error::SchemaError;

/// Serializable description of a machine's transition table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineSchema {
    /// Starting state; validated when the machine is constructed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_state: Option<String>,

    /// State identifier -> state description
    #[serde(default)]
    pub states: BTreeMap<String, StateSchema>,
}

/// Serializable description of one state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSchema {
    /// Action identifier -> action description
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub actions: BTreeMap<String, ActionSchema>,
}

/// Serializable description of one action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSchema {
    pub target_state: String,
}

impl MachineSchema {
    /// Parse a schema from JSON.
    ///
    /// A JSON `null` document is reported as
    /// [`FsmError::ConfigurationMissing`].
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schema: Option<Self> = serde_json::from_str(json)?;
        schema.ok_or_else(|| FsmError::ConfigurationMissing.into())
    }

    /// Render the schema as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Convert into a hook-less configuration carrying `data`.
    pub fn into_config<C, E>(self, data: C) -> MachineConfig<C, E> {
        let mut config = MachineConfig::new(data);
        config.initial_state = self.initial_state;
        config.states = self
            .states
            .into_iter()
            .map(|(name, state)| (name, state.into_definition()))
            .collect();
        config
    }
}

impl StateSchema {
    fn into_definition<C, E>(self) -> StateDefinition<C, E> {
        self.actions
            .into_iter()
            .fold(StateDefinition::new(), |state, (name, action)| {
                state.action(name, ActionDefinition::new(action.target_state))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNTER: &str = r#"{
        "initialState": "one",
        "states": {
            "one": { "actions": { "inc": { "targetState": "two" } } },
            "two": {}
        }
    }"#;

    #[test]
    fn parses_camel_case_document() {
        let schema = MachineSchema::from_json(COUNTER).unwrap();

        assert_eq!(schema.initial_state.as_deref(), Some("one"));
        assert_eq!(schema.states.len(), 2);
        assert_eq!(schema.states["one"].actions["inc"].target_state, "two");
        assert!(schema.states["two"].actions.is_empty());
    }

    #[test]
    fn null_document_is_missing_configuration() {
        let err = MachineSchema::from_json("null").unwrap_err();

        assert!(matches!(
            err,
            SchemaError::Fsm(FsmError::ConfigurationMissing)
        ));
        assert_eq!(err.to_string(), "FSM: You must provide machine configuration");
    }

    #[test]
    fn initial_state_is_optional_on_the_wire() {
        let schema = MachineSchema::from_json(r#"{ "states": {} }"#).unwrap();

        assert!(schema.initial_state.is_none());
    }

    #[test]
    fn action_without_target_is_rejected() {
        let err = MachineSchema::from_json(r#"{ "states": { "one": { "actions": { "inc": {} } } } }"#)
            .unwrap_err();

        assert!(matches!(err, SchemaError::Parse(_)));
        assert!(err.to_string().starts_with("FSM: invalid machine schema"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            MachineSchema::from_json("{ not json"),
            Err(SchemaError::Parse(_))
        ));
    }

    #[test]
    fn to_json_renders_parseable_document() {
        let schema = MachineSchema::from_json(COUNTER).unwrap();
        let json = schema.to_json().unwrap();

        assert!(json.contains("\"initialState\": \"one\""));
        assert!(json.contains("\"targetState\": \"two\""));
        assert_eq!(MachineSchema::from_json(&json).unwrap(), schema);
    }

    #[test]
    fn into_config_builds_state_definitions() {
        let config = MachineSchema::from_json(COUNTER)
            .unwrap()
            .into_config::<u8, ()>(5);

        assert_eq!(config.initial_state.as_deref(), Some("one"));
        assert_eq!(config.data, 5);
        assert_eq!(
            config.states["one"].get_action("inc").unwrap().target_state(),
            "two"
        );
        assert!(config.states["two"].is_empty());
        assert!(config.validate().is_ok());
    }
}
