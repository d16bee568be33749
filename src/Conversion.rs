//! # Conversion
//! Validation, migration and lowering of mechanism trees.
//!
//! ## Purpose
//! Two operations live here, both eager and both atomic: either the whole
//! output is produced or the first defect is reported and nothing escapes.
//!
//! - [`migrator::migrate`] upgrades a legacy (major 0) mechanism to the
//!   current schema, rescaling every rate parameter that carries a
//!   concentration dimension from molecules cm⁻³ to mol m⁻³ and
//!   synthesizing the phase declarations the legacy schema lacked.
//! - [`assembler::assemble`] lowers a current (major 1) mechanism to the
//!   flat [`crate::ChemistryIR::chemistry::Chemistry`] form solvers consume.
//!
//! ## Examples
//! ```
//! use MechIR::Conversion::migrator::migrate;
//! use MechIR::Mechanisms::components::ReactionComponent;
//! use MechIR::Mechanisms::legacy_schema::{self, LegacyMechanism};
//! use MechIR::Mechanisms::species::Species;
//!
//! let mut legacy = LegacyMechanism::new("demo");
//! legacy.species = vec![Species::new("A"), Species::new("B")];
//! legacy.reactions.arrhenius.push(legacy_schema::Arrhenius {
//!     A: 1.0e-11,
//!     reactants: vec![ReactionComponent::new("A"), ReactionComponent::new("B")],
//!     products: vec![ReactionComponent::new("B")],
//!     ..Default::default()
//! });
//! let current = migrate(&legacy).unwrap();
//! assert_eq!(current.phases.len(), 2);
//! assert!(current.reactions.arrhenius[0].A > 1.0e-11);
//! ```

use thiserror::Error;

/// Everything that can go wrong while validating, migrating or lowering a
/// mechanism. Conversion stops at the first defect.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// A reaction or phase referenced a species the mechanism never
    /// declared. The context names the referencing site.
    #[error("species '{species}' in {context} is not declared in the species list")]
    UnknownSpecies { species: String, context: String },

    /// Two species declarations share a name.
    #[error("species '{0}' is declared more than once")]
    DuplicateSpecies(String),

    /// A reaction kind with no lowering rule reached solver assembly.
    #[error("no lowering rule for reaction kind '{kind}' ({context})")]
    UnsupportedReactionKind { kind: String, context: String },

    /// The tree does not match the schema generation the operation expects.
    #[error("schema mismatch: {0}")]
    MalformedSchema(String),
}

/// Species list indexing and duplicate detection.
pub mod species_table;

/// Number-density to molar basis rescaling of rate parameters.
pub mod units;

/// Resolution of reactant and product component lists against the species
/// table.
pub mod resolver;

/// Phase resolution and the synthetic phases for migrated legacy
/// mechanisms.
pub mod phase_builder;

/// Lowering of individual reactions to solver processes.
pub mod process_builder;

/// The legacy to current schema migration.
pub mod migrator;

/// The current schema to solver chemistry lowering.
pub mod assembler;
