//! Upgrade of legacy (major 0) mechanisms to the current schema.
//!
//! The migration does three things per mechanism: it rescales every rate
//! parameter that carries a concentration dimension from the
//! molecules cm⁻³ basis to mol m⁻³, it synthesizes the phase declarations
//! the legacy schema lacked, and it validates every species reference so a
//! defective mechanism fails here instead of inside a solver run.

use log::{debug, info};

use super::phase_builder::synthesize_legacy_phases;
use super::resolver::{resolve_products, resolve_reactants};
use super::species_table::SpeciesTable;
use super::units::{
    to_molar_basis, GENERIC_RATE_EXPONENT_OFFSET, LOW_PRESSURE_RATE_EXPONENT_OFFSET,
};
use super::ConversionError;
use crate::Mechanisms::current_schema as current;
use crate::Mechanisms::current_schema::{Mechanism, Reactions, SchemaVersion};
use crate::Mechanisms::legacy_schema as legacy;
use crate::Mechanisms::legacy_schema::LegacyMechanism;
use crate::Mechanisms::phases::{CONDENSED_PHASE, GAS_PHASE};

/// Migrates a legacy mechanism to the current schema. Either every
/// reaction migrates or the first defect is returned and no partial tree
/// escapes.
pub fn migrate(mechanism: &LegacyMechanism) -> Result<Mechanism, ConversionError> {
    if mechanism.version.major != SchemaVersion::LEGACY.major {
        return Err(ConversionError::MalformedSchema(format!(
            "migration expects a legacy (major {}) mechanism, found version {}",
            SchemaVersion::LEGACY.major,
            mechanism.version
        )));
    }
    info!(
        "migrating mechanism '{}' from schema {} to {}: {} species, {} reactions",
        mechanism.name,
        mechanism.version,
        SchemaVersion::CURRENT,
        mechanism.species.len(),
        mechanism.reactions.len()
    );

    let table = SpeciesTable::build(&mechanism.species)?;
    let reactions = Reactions {
        arrhenius: migrate_all(&mechanism.reactions.arrhenius, &table, migrate_arrhenius)?,
        branched: migrate_all(&mechanism.reactions.branched, &table, migrate_branched)?,
        surface: migrate_all(&mechanism.reactions.surface, &table, migrate_surface)?,
        troe: migrate_all(&mechanism.reactions.troe, &table, migrate_troe)?,
        ternary_chemical_activation: migrate_all(
            &mechanism.reactions.ternary_chemical_activation,
            &table,
            migrate_ternary,
        )?,
        tunneling: migrate_all(&mechanism.reactions.tunneling, &table, migrate_tunneling)?,
        condensed_phase_arrhenius: Vec::new(),
        photolysis: migrate_all(&mechanism.reactions.photolysis, &table, migrate_photolysis)?,
        emission: migrate_all(&mechanism.reactions.emission, &table, migrate_emission)?,
        first_order_loss: migrate_all(
            &mechanism.reactions.first_order_loss,
            &table,
            migrate_first_order_loss,
        )?,
        user_defined: migrate_all(
            &mechanism.reactions.user_defined,
            &table,
            migrate_user_defined,
        )?,
    };

    info!(
        "mechanism '{}' migrated, {} reactions on the molar basis",
        mechanism.name,
        reactions.len()
    );
    Ok(Mechanism {
        name: mechanism.name.clone(),
        version: SchemaVersion::CURRENT,
        species: mechanism.species.clone(),
        phases: synthesize_legacy_phases(&mechanism.species),
        reactions,
    })
}

fn migrate_all<L, C>(
    reactions: &[L],
    table: &SpeciesTable,
    rule: impl Fn(&L, &SpeciesTable, usize) -> Result<C, ConversionError>,
) -> Result<Vec<C>, ConversionError> {
    reactions
        .iter()
        .enumerate()
        .map(|(index, reaction)| rule(reaction, table, index))
        .collect()
}

fn migrate_arrhenius(
    reaction: &legacy::Arrhenius,
    table: &SpeciesTable,
    index: usize,
) -> Result<current::Arrhenius, ConversionError> {
    let context = format!("ARRHENIUS reaction {index}");
    resolve_reactants(
        &reaction.reactants,
        table,
        &format!("reactants of {context}"),
    )?;
    resolve_products(&reaction.products, table, &format!("products of {context}"))?;
    Ok(current::Arrhenius {
        name: reaction.name.clone(),
        A: to_molar_basis(&reaction.reactants, reaction.A, GENERIC_RATE_EXPONENT_OFFSET),
        B: reaction.B,
        C: reaction.C,
        D: reaction.D,
        E: reaction.E,
        reactants: reaction.reactants.clone(),
        products: reaction.products.clone(),
        gas_phase: GAS_PHASE.to_string(),
        unknown_properties: reaction.unknown_properties.clone(),
    })
}

fn migrate_branched(
    reaction: &legacy::Branched,
    table: &SpeciesTable,
    index: usize,
) -> Result<current::Branched, ConversionError> {
    let context = format!("BRANCHED reaction {index}");
    resolve_reactants(
        &reaction.reactants,
        table,
        &format!("reactants of {context}"),
    )?;
    resolve_products(
        &reaction.alkoxy_products,
        table,
        &format!("alkoxy products of {context}"),
    )?;
    resolve_products(
        &reaction.nitrate_products,
        table,
        &format!("nitrate products of {context}"),
    )?;
    Ok(current::Branched {
        name: reaction.name.clone(),
        X: to_molar_basis(&reaction.reactants, reaction.X, GENERIC_RATE_EXPONENT_OFFSET),
        Y: reaction.Y,
        a0: reaction.a0,
        n: reaction.n,
        reactants: reaction.reactants.clone(),
        alkoxy_products: reaction.alkoxy_products.clone(),
        nitrate_products: reaction.nitrate_products.clone(),
        gas_phase: GAS_PHASE.to_string(),
        unknown_properties: reaction.unknown_properties.clone(),
    })
}

fn migrate_surface(
    reaction: &legacy::Surface,
    table: &SpeciesTable,
    index: usize,
) -> Result<current::Surface, ConversionError> {
    let context = format!("SURFACE reaction {index}");
    resolve_reactants(
        std::slice::from_ref(&reaction.gas_phase_species),
        table,
        &format!("gas-phase species of {context}"),
    )?;
    resolve_products(
        &reaction.gas_phase_products,
        table,
        &format!("gas-phase products of {context}"),
    )?;
    // the sticking probability is dimensionless, nothing to rescale
    Ok(current::Surface {
        name: reaction.name.clone(),
        reaction_probability: reaction.reaction_probability,
        gas_phase_species: reaction.gas_phase_species.clone(),
        gas_phase_products: reaction.gas_phase_products.clone(),
        gas_phase: GAS_PHASE.to_string(),
        condensed_phase: CONDENSED_PHASE.to_string(),
        unknown_properties: reaction.unknown_properties.clone(),
    })
}

fn migrate_troe(
    reaction: &legacy::Troe,
    table: &SpeciesTable,
    index: usize,
) -> Result<current::Troe, ConversionError> {
    let context = format!("TROE reaction {index}");
    resolve_reactants(
        &reaction.reactants,
        table,
        &format!("reactants of {context}"),
    )?;
    resolve_products(&reaction.products, table, &format!("products of {context}"))?;
    debug!(
        "k0_A of TROE reaction {index} takes one extra basis factor for the third body"
    );
    Ok(current::Troe {
        name: reaction.name.clone(),
        k0_A: to_molar_basis(
            &reaction.reactants,
            reaction.k0_A,
            LOW_PRESSURE_RATE_EXPONENT_OFFSET,
        ),
        k0_B: reaction.k0_B,
        k0_C: reaction.k0_C,
        kinf_A: to_molar_basis(
            &reaction.reactants,
            reaction.kinf_A,
            GENERIC_RATE_EXPONENT_OFFSET,
        ),
        kinf_B: reaction.kinf_B,
        kinf_C: reaction.kinf_C,
        Fc: reaction.Fc,
        N: reaction.N,
        reactants: reaction.reactants.clone(),
        products: reaction.products.clone(),
        gas_phase: GAS_PHASE.to_string(),
        unknown_properties: reaction.unknown_properties.clone(),
    })
}

fn migrate_ternary(
    reaction: &legacy::TernaryChemicalActivation,
    table: &SpeciesTable,
    index: usize,
) -> Result<current::TernaryChemicalActivation, ConversionError> {
    let context = format!("TERNARY_CHEMICAL_ACTIVATION reaction {index}");
    resolve_reactants(
        &reaction.reactants,
        table,
        &format!("reactants of {context}"),
    )?;
    resolve_products(&reaction.products, table, &format!("products of {context}"))?;
    // Unlike TROE, k0_A uses the generic exponent here. Mechanisms already
    // converted this way are in circulation, and changing the rule would
    // silently change their chemistry.
    Ok(current::TernaryChemicalActivation {
        name: reaction.name.clone(),
        k0_A: to_molar_basis(
            &reaction.reactants,
            reaction.k0_A,
            GENERIC_RATE_EXPONENT_OFFSET,
        ),
        k0_B: reaction.k0_B,
        k0_C: reaction.k0_C,
        kinf_A: to_molar_basis(
            &reaction.reactants,
            reaction.kinf_A,
            GENERIC_RATE_EXPONENT_OFFSET,
        ),
        kinf_B: reaction.kinf_B,
        kinf_C: reaction.kinf_C,
        Fc: reaction.Fc,
        N: reaction.N,
        reactants: reaction.reactants.clone(),
        products: reaction.products.clone(),
        gas_phase: GAS_PHASE.to_string(),
        unknown_properties: reaction.unknown_properties.clone(),
    })
}

fn migrate_tunneling(
    reaction: &legacy::Tunneling,
    table: &SpeciesTable,
    index: usize,
) -> Result<current::Tunneling, ConversionError> {
    let context = format!("TUNNELING reaction {index}");
    resolve_reactants(
        &reaction.reactants,
        table,
        &format!("reactants of {context}"),
    )?;
    resolve_products(&reaction.products, table, &format!("products of {context}"))?;
    Ok(current::Tunneling {
        name: reaction.name.clone(),
        A: to_molar_basis(&reaction.reactants, reaction.A, GENERIC_RATE_EXPONENT_OFFSET),
        B: reaction.B,
        C: reaction.C,
        reactants: reaction.reactants.clone(),
        products: reaction.products.clone(),
        gas_phase: GAS_PHASE.to_string(),
        unknown_properties: reaction.unknown_properties.clone(),
    })
}

fn migrate_photolysis(
    reaction: &legacy::Photolysis,
    table: &SpeciesTable,
    index: usize,
) -> Result<current::Photolysis, ConversionError> {
    let context = format!("PHOTOLYSIS reaction {index}");
    resolve_reactants(
        &reaction.reactants,
        table,
        &format!("reactants of {context}"),
    )?;
    resolve_products(&reaction.products, table, &format!("products of {context}"))?;
    // externally supplied rates are dimensionless at this level, the
    // scaling factor passes through
    Ok(current::Photolysis {
        name: reaction.name.clone(),
        scaling_factor: reaction.scaling_factor,
        reactants: reaction.reactants.clone(),
        products: reaction.products.clone(),
        gas_phase: GAS_PHASE.to_string(),
        unknown_properties: reaction.unknown_properties.clone(),
    })
}

fn migrate_emission(
    reaction: &legacy::Emission,
    table: &SpeciesTable,
    index: usize,
) -> Result<current::Emission, ConversionError> {
    let context = format!("EMISSION reaction {index}");
    resolve_products(&reaction.products, table, &format!("products of {context}"))?;
    Ok(current::Emission {
        name: reaction.name.clone(),
        scaling_factor: reaction.scaling_factor,
        products: reaction.products.clone(),
        gas_phase: GAS_PHASE.to_string(),
        unknown_properties: reaction.unknown_properties.clone(),
    })
}

fn migrate_first_order_loss(
    reaction: &legacy::FirstOrderLoss,
    table: &SpeciesTable,
    index: usize,
) -> Result<current::FirstOrderLoss, ConversionError> {
    let context = format!("FIRST_ORDER_LOSS reaction {index}");
    resolve_reactants(
        &reaction.reactants,
        table,
        &format!("reactants of {context}"),
    )?;
    Ok(current::FirstOrderLoss {
        name: reaction.name.clone(),
        scaling_factor: reaction.scaling_factor,
        reactants: reaction.reactants.clone(),
        gas_phase: GAS_PHASE.to_string(),
        unknown_properties: reaction.unknown_properties.clone(),
    })
}

fn migrate_user_defined(
    reaction: &legacy::UserDefined,
    table: &SpeciesTable,
    index: usize,
) -> Result<current::UserDefined, ConversionError> {
    let context = format!("USER_DEFINED reaction {index}");
    resolve_reactants(
        &reaction.reactants,
        table,
        &format!("reactants of {context}"),
    )?;
    resolve_products(&reaction.products, table, &format!("products of {context}"))?;
    Ok(current::UserDefined {
        name: reaction.name.clone(),
        scaling_factor: reaction.scaling_factor,
        reactants: reaction.reactants.clone(),
        products: reaction.products.clone(),
        gas_phase: GAS_PHASE.to_string(),
        unknown_properties: reaction.unknown_properties.clone(),
    })
}
