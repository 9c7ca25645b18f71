//! Programmatically supplied lines.
//!
//! A line data object is a loose key/value map: `type` selects the kind,
//! `value` holds the content (markup allowed), `class` is the styling hook,
//! and every other key becomes a prefixed attribute (`delay` ->
//! `data-ty-delay`). Unknown keys are kept as attributes too, so new
//! settings pass through without code changes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::line::{AttrNames, Attributes, LineElement};
use crate::markup;

/// One programmatic line descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineData(Map<String, Value>);

impl LineData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Materialize into the element form markup lines use.
    pub fn to_element(&self, names: &AttrNames) -> LineElement {
        let mut attributes = Attributes::new();
        let mut class = None;
        let mut nodes = Vec::new();

        for (key, value) in &self.0 {
            match key.as_str() {
                "class" => class = Some(value_to_string(value)),
                "type" => attributes.insert(names.kind(), value_to_string(value)),
                "value" => {
                    let text = value_to_string(value);
                    if !text.is_empty() {
                        nodes = markup::fragment_nodes(&text);
                    }
                }
                other => attributes.insert(&names.setting(other), value_to_string(value)),
            }
        }

        if let Some(class) = &class {
            attributes.insert("class", class.clone());
        }

        LineElement {
            attributes,
            class,
            nodes,
        }
    }
}

impl From<Map<String, Value>> for LineData {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
