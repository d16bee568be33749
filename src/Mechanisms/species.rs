use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A chemical species declaration.
///
/// The name is the unique key every other part of a mechanism refers to.
/// Physical properties are optional because most mechanisms only fill in
/// the ones their solver actually needs; property names the schema does not
/// recognize are kept verbatim in `unknown_properties` so a mechanism can be
/// written back to disk without losing anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Species {
    pub name: String,
    /// unit: kg mol⁻¹
    #[serde(skip_serializing_if = "Option::is_none")]
    pub molecular_weight: Option<f64>,
    /// unit: m² s⁻¹
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diffusion_coefficient: Option<f64>,
    /// solver convergence tolerance for this species concentration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_tolerance: Option<f64>,
    /// tag for species handled outside ordinary kinetics, e.g. "THIRD_BODY"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracer_type: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub unknown_properties: HashMap<String, String>,
}

impl Default for Species {
    fn default() -> Self {
        Self {
            name: String::new(),
            molecular_weight: None,
            diffusion_coefficient: None,
            absolute_tolerance: None,
            tracer_type: None,
            unknown_properties: HashMap::new(),
        }
    }
}

impl Species {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}
