//! Typed tree of the current mechanism schema (major version 1).
//!
//! All rate parameters in this schema are on the molar basis, mol m⁻³.
//! Parameter fields keep their chemistry notation (A, B, C, k0_A, Fc and
//! so on) because that is how every published mechanism writes them.
#![allow(non_snake_case)]

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::components::ReactionComponent;
use super::phases::Phase;
use super::species::Species;

/// Version tag carried by every mechanism tree. Only the major number is
/// meaningful to conversion; minor and patch exist for forward-compatible
/// readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SchemaVersion {
    /// The schema this module describes.
    pub const CURRENT: SchemaVersion = SchemaVersion {
        major: 1,
        minor: 0,
        patch: 0,
    };
    /// The last schema generation on the molecules cm⁻³ basis.
    pub const LEGACY: SchemaVersion = SchemaVersion {
        major: 0,
        minor: 1,
        patch: 0,
    };

    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

////////////////////////////REACTION KINDS///////////////////////////////////

/// k = A · exp(−C/T) · (T/D)^B · (1 + E·P)
///
/// A carries the concentration dimension: for a reaction of total reactant
/// order n its unit is (mol m⁻³)^(1−n) s⁻¹.
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
    pub gas_phase: String,
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
            gas_phase: String::new(),
            unknown_properties: HashMap::new(),
        }
    }
}

/// Peroxy-radical branching with an alkoxy and a nitrate channel.
/// One schema entry, two solver processes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Branched {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// pre-exponential factor, carries the concentration dimension
    pub X: f64,
    /// exponential term, K
    pub Y: f64,
    /// branching ratio parameter
    pub a0: f64,
    /// number of heavy atoms in the peroxy radical
    pub n: f64,
    pub reactants: Vec<ReactionComponent>,
    pub alkoxy_products: Vec<ReactionComponent>,
    pub nitrate_products: Vec<ReactionComponent>,
    pub gas_phase: String,
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
            gas_phase: String::new(),
            unknown_properties: HashMap::new(),
        }
    }
}

/// Uptake of one gas-phase species onto a condensed surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Surface {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// dimensionless sticking probability, 0 to 1
    pub reaction_probability: f64,
    pub gas_phase_species: ReactionComponent,
    pub gas_phase_products: Vec<ReactionComponent>,
    pub gas_phase: String,
    pub condensed_phase: String,
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
            gas_phase: String::new(),
            condensed_phase: String::new(),
            unknown_properties: HashMap::new(),
        }
    }
}

/// Falloff between a low-pressure limit k0 and a high-pressure limit k∞
/// with Troe broadening.
///
/// k0_A is bimolecular in the third body on top of the listed reactants,
/// so its unit carries one more concentration power than kinf_A.
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
    /// broadening factor
    pub Fc: f64,
    /// broadening exponent
    pub N: f64,
    pub reactants: Vec<ReactionComponent>,
    pub products: Vec<ReactionComponent>,
    pub gas_phase: String,
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
            gas_phase: String::new(),
            unknown_properties: HashMap::new(),
        }
    }
}

/// Chemical activation falloff. Same parameter set as [`Troe`], but the
/// rate interpolates from the low-pressure side, and both pre-exponential
/// factors share the unit of the listed reactant order.
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
    pub gas_phase: String,
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
            gas_phase: String::new(),
            unknown_properties: HashMap::new(),
        }
    }
}

/// k = A · exp(−B/T) · exp(C/T³), the Wigner tunneling correction form.
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
    pub gas_phase: String,
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
            gas_phase: String::new(),
            unknown_properties: HashMap::new(),
        }
    }
}

/// Arrhenius kinetics inside a condensed phase. Declarable in the schema,
/// but gas-phase solver assembly has no rate model for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CondensedPhaseArrhenius {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub A: f64,
    pub B: f64,
    pub C: f64,
    pub D: f64,
    pub E: f64,
    pub reactants: Vec<ReactionComponent>,
    pub products: Vec<ReactionComponent>,
    pub condensed_phase: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub unknown_properties: HashMap<String, String>,
}

impl Default for CondensedPhaseArrhenius {
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
            condensed_phase: String::new(),
            unknown_properties: HashMap::new(),
        }
    }
}

/// Rate supplied at run time from a photolysis rate table or radiation
/// scheme, looked up by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Photolysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub scaling_factor: f64,
    pub reactants: Vec<ReactionComponent>,
    pub products: Vec<ReactionComponent>,
    pub gas_phase: String,
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
            gas_phase: String::new(),
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
    pub gas_phase: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub unknown_properties: HashMap<String, String>,
}

impl Default for Emission {
    fn default() -> Self {
        Self {
            name: None,
            scaling_factor: 1.0,
            products: Vec::new(),
            gas_phase: String::new(),
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
    pub gas_phase: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub unknown_properties: HashMap<String, String>,
}

impl Default for FirstOrderLoss {
    fn default() -> Self {
        Self {
            name: None,
            scaling_factor: 1.0,
            reactants: Vec::new(),
            gas_phase: String::new(),
            unknown_properties: HashMap::new(),
        }
    }
}

/// Fully user-supplied rate, looked up by name at run time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDefined {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub scaling_factor: f64,
    pub reactants: Vec<ReactionComponent>,
    pub products: Vec<ReactionComponent>,
    pub gas_phase: String,
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
            gas_phase: String::new(),
            unknown_properties: HashMap::new(),
        }
    }
}

////////////////////////////REACTION CONTAINER///////////////////////////////

/// All reactions of a mechanism, one vector per kind. The set of kinds is
/// closed, so code that must treat every reaction goes through
/// [`Reactions::variants`] and matches exhaustively; adding a kind then
/// breaks every such site at compile time instead of at run time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reactions {
    pub arrhenius: Vec<Arrhenius>,
    pub branched: Vec<Branched>,
    pub surface: Vec<Surface>,
    pub troe: Vec<Troe>,
    pub ternary_chemical_activation: Vec<TernaryChemicalActivation>,
    pub tunneling: Vec<Tunneling>,
    pub condensed_phase_arrhenius: Vec<CondensedPhaseArrhenius>,
    pub photolysis: Vec<Photolysis>,
    pub emission: Vec<Emission>,
    pub first_order_loss: Vec<FirstOrderLoss>,
    pub user_defined: Vec<UserDefined>,
}

/// Borrowed view of one reaction of any kind.
#[derive(Debug, Clone, Copy)]
pub enum ReactionVariant<'a> {
    Arrhenius(&'a Arrhenius),
    Branched(&'a Branched),
    Surface(&'a Surface),
    Troe(&'a Troe),
    TernaryChemicalActivation(&'a TernaryChemicalActivation),
    Tunneling(&'a Tunneling),
    CondensedPhaseArrhenius(&'a CondensedPhaseArrhenius),
    Photolysis(&'a Photolysis),
    Emission(&'a Emission),
    FirstOrderLoss(&'a FirstOrderLoss),
    UserDefined(&'a UserDefined),
}

impl ReactionVariant<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            ReactionVariant::Arrhenius(_) => "ARRHENIUS",
            ReactionVariant::Branched(_) => "BRANCHED",
            ReactionVariant::Surface(_) => "SURFACE",
            ReactionVariant::Troe(_) => "TROE",
            ReactionVariant::TernaryChemicalActivation(_) => "TERNARY_CHEMICAL_ACTIVATION",
            ReactionVariant::Tunneling(_) => "TUNNELING",
            ReactionVariant::CondensedPhaseArrhenius(_) => "CONDENSED_PHASE_ARRHENIUS",
            ReactionVariant::Photolysis(_) => "PHOTOLYSIS",
            ReactionVariant::Emission(_) => "EMISSION",
            ReactionVariant::FirstOrderLoss(_) => "FIRST_ORDER_LOSS",
            ReactionVariant::UserDefined(_) => "USER_DEFINED",
        }
    }
}

impl Reactions {
    pub fn len(&self) -> usize {
        self.arrhenius.len()
            + self.branched.len()
            + self.surface.len()
            + self.troe.len()
            + self.ternary_chemical_activation.len()
            + self.tunneling.len()
            + self.condensed_phase_arrhenius.len()
            + self.photolysis.len()
            + self.emission.len()
            + self.first_order_loss.len()
            + self.user_defined.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every reaction in declaration order of the kinds above, each paired
    /// with its index inside its own kind vector. This is the one iteration
    /// order the rest of the crate relies on.
    pub fn variants(&self) -> Vec<(usize, ReactionVariant<'_>)> {
        let mut all: Vec<(usize, ReactionVariant<'_>)> = Vec::with_capacity(self.len());
        all.extend(
            self.arrhenius
                .iter()
                .enumerate()
                .map(|(i, r)| (i, ReactionVariant::Arrhenius(r))),
        );
        all.extend(
            self.branched
                .iter()
                .enumerate()
                .map(|(i, r)| (i, ReactionVariant::Branched(r))),
        );
        all.extend(
            self.surface
                .iter()
                .enumerate()
                .map(|(i, r)| (i, ReactionVariant::Surface(r))),
        );
        all.extend(
            self.troe
                .iter()
                .enumerate()
                .map(|(i, r)| (i, ReactionVariant::Troe(r))),
        );
        all.extend(
            self.ternary_chemical_activation
                .iter()
                .enumerate()
                .map(|(i, r)| (i, ReactionVariant::TernaryChemicalActivation(r))),
        );
        all.extend(
            self.tunneling
                .iter()
                .enumerate()
                .map(|(i, r)| (i, ReactionVariant::Tunneling(r))),
        );
        all.extend(
            self.condensed_phase_arrhenius
                .iter()
                .enumerate()
                .map(|(i, r)| (i, ReactionVariant::CondensedPhaseArrhenius(r))),
        );
        all.extend(
            self.photolysis
                .iter()
                .enumerate()
                .map(|(i, r)| (i, ReactionVariant::Photolysis(r))),
        );
        all.extend(
            self.emission
                .iter()
                .enumerate()
                .map(|(i, r)| (i, ReactionVariant::Emission(r))),
        );
        all.extend(
            self.first_order_loss
                .iter()
                .enumerate()
                .map(|(i, r)| (i, ReactionVariant::FirstOrderLoss(r))),
        );
        all.extend(
            self.user_defined
                .iter()
                .enumerate()
                .map(|(i, r)| (i, ReactionVariant::UserDefined(r))),
        );
        all
    }
}

////////////////////////////MECHANISM ROOT///////////////////////////////////

/// Root of a current-schema mechanism tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mechanism {
    pub name: String,
    pub version: SchemaVersion,
    pub species: Vec<Species>,
    pub phases: Vec<Phase>,
    pub reactions: Reactions,
}

impl Default for Mechanism {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: SchemaVersion::CURRENT,
            species: Vec::new(),
            phases: Vec::new(),
            reactions: Reactions::default(),
        }
    }
}

impl Mechanism {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}
