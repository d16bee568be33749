use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A species reference inside a reaction, together with its stoichiometric
/// coefficient. The name is resolved against the mechanism species list
/// when the mechanism is converted, never earlier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionComponent {
    pub species_name: String,
    pub coefficient: f64,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub unknown_properties: HashMap<String, String>,
}

impl Default for ReactionComponent {
    fn default() -> Self {
        Self {
            species_name: String::new(),
            coefficient: 1.0,
            unknown_properties: HashMap::new(),
        }
    }
}

impl ReactionComponent {
    pub fn new(species_name: &str) -> Self {
        Self {
            species_name: species_name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_coefficient(species_name: &str, coefficient: f64) -> Self {
        Self {
            species_name: species_name.to_string(),
            coefficient,
            ..Default::default()
        }
    }
}
