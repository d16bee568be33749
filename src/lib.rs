//! Chemical mechanism configuration core.
//!
//! Mechanisms arrive as typed trees in one of two schema generations
//! ([`Mechanisms`]), legacy trees are upgraded to the current schema with
//! unit-consistent rate parameter rescaling ([`Conversion::migrator`]),
//! and current trees are lowered to the flat solver form
//! ([`Conversion::assembler`], [`ChemistryIR`]).

#[allow(non_snake_case)]
pub mod ChemistryIR;
#[allow(non_snake_case)]
pub mod Conversion;
#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Mechanisms;
#[allow(non_snake_case)]
pub mod Utils;
