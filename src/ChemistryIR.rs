//! # ChemistryIR
//! The flat chemistry representation handed to solvers.
//!
//! ## Purpose
//! Solvers do not want schema trees. They want a gas phase, a map of any
//! further phases and a flat list of processes where every species is fully
//! resolved and every rate parameter is on the molar basis. This module
//! defines that form; [`crate::Conversion::assembler`] produces it.

/// Processes, resolved phases and the [`chemistry::Chemistry`] root.
pub mod chemistry;

/// Per-model rate parameter structs and the [`rate_params::RateLaw`]
/// dispatch over them.
pub mod rate_params;

/// Net stoichiometric matrix of the gas phase, for solver Jacobians and
/// conservation checks.
pub mod stoichiometry;
