//! Lowering of current-schema mechanisms to solver chemistry.

use std::collections::HashMap;

use log::info;

use super::phase_builder::resolve_phases;
use super::process_builder::build_processes;
use super::species_table::SpeciesTable;
use super::ConversionError;
use crate::ChemistryIR::chemistry::Chemistry;
use crate::Mechanisms::current_schema::{Mechanism, SchemaVersion};
use crate::Mechanisms::phases::GAS_PHASE;

/// Lowers a current-schema mechanism to the flat [`Chemistry`] form.
///
/// The input is read only; running twice on the same tree gives two equal
/// results, and no rate parameter is rescaled here. Units were settled
/// when the mechanism was written or migrated. Either the whole chemistry
/// is produced or the first defect is returned.
pub fn assemble(mechanism: &Mechanism) -> Result<Chemistry, ConversionError> {
    if mechanism.version.major != SchemaVersion::CURRENT.major {
        return Err(ConversionError::MalformedSchema(format!(
            "solver assembly expects a current (major {}) mechanism, found version {}; \
             migrate legacy mechanisms first",
            SchemaVersion::CURRENT.major,
            mechanism.version
        )));
    }
    info!(
        "assembling solver chemistry for mechanism '{}': {} species, {} phases, {} reactions",
        mechanism.name,
        mechanism.species.len(),
        mechanism.phases.len(),
        mechanism.reactions.len()
    );

    let table = SpeciesTable::build(&mechanism.species)?;
    let mut gas_phase = None;
    let mut phases = HashMap::new();
    for phase in resolve_phases(&mechanism.phases, &table)? {
        if phase.name == GAS_PHASE {
            gas_phase = Some(phase);
        } else {
            phases.insert(phase.name.clone(), phase);
        }
    }
    let gas_phase = gas_phase.ok_or_else(|| {
        ConversionError::MalformedSchema(format!(
            "mechanism '{}' declares no phase named '{}'",
            mechanism.name, GAS_PHASE
        ))
    })?;

    let processes = build_processes(&mechanism.reactions, &table)?;
    info!(
        "mechanism '{}' assembled into {} solver processes",
        mechanism.name,
        processes.len()
    );
    Ok(Chemistry {
        gas_phase,
        phases,
        processes,
    })
}
