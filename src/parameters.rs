use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Control field asking Jenkins to start the build without a quiet period
pub const DELAY_FIELD: &str = "delay";

/// Job description filtered down to its parameter definitions
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct JobParameters {
    #[serde(default)]
    pub property: Vec<JobProperty>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct JobProperty {
    #[serde(rename = "parameterDefinitions")]
    pub parameter_definitions: Option<Vec<ParameterDefinition>>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ParameterDefinition {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "string_choices")]
    pub choices: Vec<String>,
}

/// Plugin parameter types put arbitrary JSON under `choices`; only string
/// entries mean anything to a `ChoiceParameterDefinition`
fn string_choices<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let choices = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(choice) => Some(choice),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(choices)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    Boolean,
    String,
    Choice,
}

impl ParameterKind {
    /// Map a Jenkins definition type; unsupported kinds yield `None`
    pub fn from_type(kind: &str) -> Option<Self> {
        match kind {
            "BooleanParameterDefinition" => Some(ParameterKind::Boolean),
            "StringParameterDefinition" => Some(ParameterKind::String),
            "ChoiceParameterDefinition" => Some(ParameterKind::Choice),
            _ => None,
        }
    }
}

impl JobParameters {
    /// All definitions carried by any property, in server order
    pub fn definitions(&self) -> Vec<ParameterDefinition> {
        self.property
            .iter()
            .filter_map(|prop| prop.parameter_definitions.as_ref())
            .flatten()
            .cloned()
            .collect()
    }
}

/// A job's parameters split into the groups the operator is prompted for.
///
/// Each name lives in exactly one group. Choice lists keep the order the
/// server declared them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    pub booleans: Vec<String>,
    pub strings: Vec<String>,
    pub choices: BTreeMap<String, Vec<String>>,
    descriptions: BTreeMap<String, String>,
}

impl ParameterSet {
    pub fn is_empty(&self) -> bool {
        self.booleans.is_empty() && self.strings.is_empty() && self.choices.is_empty()
    }

    pub fn description(&self, name: &str) -> Option<&str> {
        self.descriptions.get(name).map(String::as_str)
    }

    fn contains(&self, name: &str) -> bool {
        self.booleans.iter().any(|n| n == name)
            || self.strings.iter().any(|n| n == name)
            || self.choices.contains_key(name)
    }
}

/// Classify parameter definitions by their declared type
pub fn classify(definitions: &[ParameterDefinition]) -> ParameterSet {
    let mut set = ParameterSet::default();

    for definition in definitions {
        let Some(kind) = ParameterKind::from_type(&definition.kind) else {
            continue;
        };
        if set.contains(&definition.name) {
            continue;
        }

        match kind {
            ParameterKind::Boolean => set.booleans.push(definition.name.clone()),
            ParameterKind::String => set.strings.push(definition.name.clone()),
            ParameterKind::Choice => {
                set.choices
                    .insert(definition.name.clone(), definition.choices.clone());
            }
        }

        if let Some(description) = definition.description.as_deref().filter(|d| !d.trim().is_empty()) {
            set.descriptions
                .insert(definition.name.clone(), description.to_string());
        }
    }

    set
}

/// Parameter values submitted with a build trigger.
///
/// Always carries `delay=0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BuildRequest {
    values: BTreeMap<String, String>,
}

impl Default for BuildRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildRequest {
    pub fn new() -> Self {
        let mut values = BTreeMap::new();
        values.insert(DELAY_FIELD.to_string(), "0".to_string());
        Self { values }
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    #[allow(dead_code)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Pairs that go on the wire; empty values are left out
    pub fn form_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
