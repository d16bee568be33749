//! # Mechanisms
//! Typed mechanism trees for both schema generations.
//!
//! ## Purpose
//! A mechanism is the user-facing description of a chemical system: species
//! declarations, phase membership and a set of reactions grouped by rate
//! model. This module holds the data only. Validation, unit conversion and
//! lowering to the solver form live in [`crate::Conversion`].
//!
//! ## Schema generations
//! - [`current_schema`] is major version 1, molar basis (mol m⁻³), with
//!   explicit phases.
//! - [`legacy_schema`] is major version 0, number-density basis
//!   (molecules cm⁻³), without phases.

/// Species declarations shared by both schema generations.
pub mod species;

/// Species references with stoichiometric coefficients, as they appear in
/// reactant and product lists.
pub mod components;

/// Phases and phase membership.
pub mod phases;

/// The current mechanism schema, major version 1.
/// ## Examples
/// ```
/// use MechIR::Mechanisms::components::ReactionComponent;
/// use MechIR::Mechanisms::current_schema::{Arrhenius, Mechanism};
///
/// let mut mechanism = Mechanism::new("chapman");
/// mechanism.reactions.arrhenius.push(Arrhenius {
///     A: 8.018e-17,
///     reactants: vec![ReactionComponent::new("O"), ReactionComponent::new("O2")],
///     products: vec![ReactionComponent::new("O3")],
///     gas_phase: "gas".to_string(),
///     ..Default::default()
/// });
/// let json = serde_json::to_string(&mechanism).unwrap();
/// assert!(json.contains("chapman"));
/// let back: Mechanism = serde_json::from_str(&json).unwrap();
/// assert_eq!(back, mechanism);
/// ```
pub mod current_schema;

/// The legacy mechanism schema, major version 0.
pub mod legacy_schema;

mod schema_tests;
