use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the phase every gas-phase reaction runs in. Solver assembly
/// requires a phase with this name to exist.
pub const GAS_PHASE: &str = "gas";
/// Name of the condensed phase synthesized when a legacy mechanism is
/// migrated. Legacy mechanisms predate phase declarations.
pub const CONDENSED_PHASE: &str = "condensed";

/// Membership of one species in a phase. A phase entry may override the
/// diffusion coefficient of the species it names, which is how aqueous and
/// aerosol phases carry medium-specific transport data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseSpecies {
    pub name: String,
    /// unit: m² s⁻¹, overrides the species-level value when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diffusion_coefficient: Option<f64>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub unknown_properties: HashMap<String, String>,
}

impl Default for PhaseSpecies {
    fn default() -> Self {
        Self {
            name: String::new(),
            diffusion_coefficient: None,
            unknown_properties: HashMap::new(),
        }
    }
}

impl PhaseSpecies {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

/// A named group of species that share a physical medium.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Phase {
    pub name: String,
    pub species: Vec<PhaseSpecies>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub unknown_properties: HashMap<String, String>,
}

impl Default for Phase {
    fn default() -> Self {
        Self {
            name: String::new(),
            species: Vec::new(),
            unknown_properties: HashMap::new(),
        }
    }
}

impl Phase {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_species(name: &str, species_names: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            species: species_names.iter().map(|n| PhaseSpecies::new(n)).collect(),
            ..Default::default()
        }
    }
}
