//! Typed tree of the legacy mechanism schema (major version 0).
//!
//! Legacy mechanisms express rate parameters on the number-density basis,
//! molecules cm⁻³, and have no phase declarations. The struct names repeat
//! the ones in [`current_schema`](super::current_schema) on purpose: the
//! two generations describe the same chemistry and differ in units and in
//! the fields the migrator fills in.
#![allow(non_snake_case)]

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::components::ReactionComponent;
use super::current_schema::SchemaVersion;
use super::species::Species;

/// k = A · exp(−C/T) · (T/D)^B · (1 + E·P), molecules cm⁻³ basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Arrhenius {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub A: f64,
    pub B: f64,
    pub C: f64,
    pub D: f64,
    pub E: f64,
    pub reactants: Vec<ReactionComponent>,
    pub products: Vec<ReactionComponent>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub unknown_properties: HashMap<String, String>,
}

impl Default for Arrhenius {
    fn default() -> Self {
        Self {
            name: None,
            A: 1.0,
            B: 0.0,
            C: 0.0,
            D: 300.0,
            E: 0.0,
            reactants: Vec::new(),
            products: Vec::new(),
            unknown_properties: HashMap::new(),
        }
    }
}

/// Peroxy-radical branching, molecules cm⁻³ basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Branched {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub X: f64,
    pub Y: f64,
    pub a0: f64,
    pub n: f64,
    pub reactants: Vec<ReactionComponent>,
    pub alkoxy_products: Vec<ReactionComponent>,
    pub nitrate_products: Vec<ReactionComponent>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub unknown_properties: HashMap<String, String>,
}

impl Default for Branched {
    fn default() -> Self {
        Self {
            name: None,
            X: 1.0,
            Y: 0.0,
            a0: 1.0,
            n: 0.0,
            reactants: Vec::new(),
            alkoxy_products: Vec::new(),
            nitrate_products: Vec::new(),
            unknown_properties: HashMap::new(),
        }
    }
}

/// Surface uptake. The reaction probability is dimensionless, so this kind
/// migrates without rescaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Surface {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub reaction_probability: f64,
    pub gas_phase_species: ReactionComponent,
    pub gas_phase_products: Vec<ReactionComponent>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub unknown_properties: HashMap<String, String>,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            name: None,
            reaction_probability: 1.0,
            gas_phase_species: ReactionComponent::default(),
            gas_phase_products: Vec::new(),
            unknown_properties: HashMap::new(),
        }
    }
}

/// Troe falloff, molecules cm⁻³ basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Troe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub k0_A: f64,
    pub k0_B: f64,
    pub k0_C: f64,
    pub kinf_A: f64,
    pub kinf_B: f64,
    pub kinf_C: f64,
    pub Fc: f64,
    pub N: f64,
    pub reactants: Vec<ReactionComponent>,
    pub products: Vec<ReactionComponent>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub unknown_properties: HashMap<String, String>,
}

impl Default for Troe {
    fn default() -> Self {
        Self {
            name: None,
            k0_A: 1.0,
            k0_B: 0.0,
            k0_C: 0.0,
            kinf_A: 1.0,
            kinf_B: 0.0,
            kinf_C: 0.0,
            Fc: 0.6,
            N: 1.0,
            reactants: Vec::new(),
            products: Vec::new(),
            unknown_properties: HashMap::new(),
        }
    }
}

/// Chemical activation falloff, molecules cm⁻³ basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TernaryChemicalActivation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub k0_A: f64,
    pub k0_B: f64,
    pub k0_C: f64,
    pub kinf_A: f64,
    pub kinf_B: f64,
    pub kinf_C: f64,
    pub Fc: f64,
    pub N: f64,
    pub reactants: Vec<ReactionComponent>,
    pub products: Vec<ReactionComponent>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub unknown_properties: HashMap<String, String>,
}

impl Default for TernaryChemicalActivation {
    fn default() -> Self {
        Self {
            name: None,
            k0_A: 1.0,
            k0_B: 0.0,
            k0_C: 0.0,
            kinf_A: 1.0,
            kinf_B: 0.0,
            kinf_C: 0.0,
            Fc: 0.6,
            N: 1.0,
            reactants: Vec::new(),
            products: Vec::new(),
            unknown_properties: HashMap::new(),
        }
    }
}

/// Wigner tunneling form, molecules cm⁻³ basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunneling {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub A: f64,
    pub B: f64,
    pub C: f64,
    pub reactants: Vec<ReactionComponent>,
    pub products: Vec<ReactionComponent>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub unknown_properties: HashMap<String, String>,
}

impl Default for Tunneling {
    fn default() -> Self {
        Self {
            name: None,
            A: 1.0,
            B: 0.0,
            C: 0.0,
            reactants: Vec::new(),
            products: Vec::new(),
            unknown_properties: HashMap::new(),
        }
    }
}

/// Externally supplied photolysis rate. The scaling factor is
/// dimensionless and survives migration unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Photolysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub scaling_factor: f64,
    pub reactants: Vec<ReactionComponent>,
    pub products: Vec<ReactionComponent>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub unknown_properties: HashMap<String, String>,
}

impl Default for Photolysis {
    fn default() -> Self {
        Self {
            name: None,
            scaling_factor: 1.0,
            reactants: Vec::new(),
            products: Vec::new(),
            unknown_properties: HashMap::new(),
        }
    }
}

/// Zero-order source with an externally supplied rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Emission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub scaling_factor: f64,
    pub products: Vec<ReactionComponent>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub unknown_properties: HashMap<String, String>,
}

impl Default for Emission {
    fn default() -> Self {
        Self {
            name: None,
            scaling_factor: 1.0,
            products: Vec::new(),
            unknown_properties: HashMap::new(),
        }
    }
}

/// First-order sink with an externally supplied rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirstOrderLoss {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub scaling_factor: f64,
    pub reactants: Vec<ReactionComponent>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub unknown_properties: HashMap<String, String>,
}

impl Default for FirstOrderLoss {
    fn default() -> Self {
        Self {
            name: None,
            scaling_factor: 1.0,
            reactants: Vec::new(),
            unknown_properties: HashMap::new(),
        }
    }
}

/// Fully user-supplied rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDefined {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub scaling_factor: f64,
    pub reactants: Vec<ReactionComponent>,
    pub products: Vec<ReactionComponent>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub unknown_properties: HashMap<String, String>,
}

impl Default for UserDefined {
    fn default() -> Self {
        Self {
            name: None,
            scaling_factor: 1.0,
            reactants: Vec::new(),
            products: Vec::new(),
            unknown_properties: HashMap::new(),
        }
    }
}

/// All reactions of a legacy mechanism. The legacy schema has no condensed
/// phase kinetics, so the kind set is one shorter than the current one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyReactions {
    pub arrhenius: Vec<Arrhenius>,
    pub branched: Vec<Branched>,
    pub surface: Vec<Surface>,
    pub troe: Vec<Troe>,
    pub ternary_chemical_activation: Vec<TernaryChemicalActivation>,
    pub tunneling: Vec<Tunneling>,
    pub photolysis: Vec<Photolysis>,
    pub emission: Vec<Emission>,
    pub first_order_loss: Vec<FirstOrderLoss>,
    pub user_defined: Vec<UserDefined>,
}

impl LegacyReactions {
    pub fn len(&self) -> usize {
        self.arrhenius.len()
            + self.branched.len()
            + self.surface.len()
            + self.troe.len()
            + self.ternary_chemical_activation.len()
            + self.tunneling.len()
            + self.photolysis.len()
            + self.emission.len()
            + self.first_order_loss.len()
            + self.user_defined.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Root of a legacy mechanism tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyMechanism {
    pub name: String,
    pub version: SchemaVersion,
    pub species: Vec<Species>,
    pub reactions: LegacyReactions,
}

impl Default for LegacyMechanism {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: SchemaVersion::LEGACY,
            species: Vec::new(),
            reactions: LegacyReactions::default(),
        }
    }
}

impl LegacyMechanism {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}
