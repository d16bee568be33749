//! Lowering of schema reactions to solver processes.
//!
//! Most kinds map to exactly one process. A branched reaction maps to two,
//! one per product channel. Condensed-phase kinetics has no gas-phase rate
//! model and is rejected. Kinds whose rate is supplied by the host at run
//! time lower to a user-defined process whose label is a namespace prefix
//! plus the reaction name, which is how hosts find the rate to fill in.

use super::resolver::{resolve_products, resolve_reactants};
use super::species_table::SpeciesTable;
use super::ConversionError;
use crate::ChemistryIR::chemistry::Process;
use crate::ChemistryIR::rate_params::{
    ArrheniusRateParameters, Branch, BranchedRateParameters, RateParameters,
    SurfaceRateParameters, TernaryChemicalActivationRateParameters, TroeRateParameters,
    TunnelingRateParameters, UserDefinedRateParameters,
};
use crate::Mechanisms::components::ReactionComponent;
use crate::Mechanisms::current_schema::{
    Arrhenius, Branched, Photolysis, ReactionVariant, Reactions, Surface,
    TernaryChemicalActivation, Troe, Tunneling,
};

/// Label namespace of photolysis rates.
pub const PHOTOLYSIS_PREFIX: &str = "PHOTO.";
/// Label namespace of emission rates.
pub const EMISSION_PREFIX: &str = "EMIS.";
/// Label namespace of first-order loss rates.
pub const FIRST_ORDER_LOSS_PREFIX: &str = "LOSS.";
/// Label namespace of fully user-defined rates.
pub const USER_DEFINED_PREFIX: &str = "USER.";

/// Lowers every reaction to its solver processes, in the cross-kind order
/// of [`Reactions::variants`]. The first defective reaction aborts the
/// whole pass.
pub fn build_processes(
    reactions: &Reactions,
    table: &SpeciesTable,
) -> Result<Vec<Process>, ConversionError> {
    let mut processes = Vec::with_capacity(reactions.len() + reactions.branched.len());
    for (index, variant) in reactions.variants() {
        match variant {
            ReactionVariant::Arrhenius(reaction) => {
                processes.push(arrhenius_process(reaction, table, index)?);
            }
            ReactionVariant::Branched(reaction) => {
                let [alkoxy, nitrate] = branched_processes(reaction, table, index)?;
                processes.push(alkoxy);
                processes.push(nitrate);
            }
            ReactionVariant::Surface(reaction) => {
                processes.push(surface_process(reaction, table, index)?);
            }
            ReactionVariant::Troe(reaction) => {
                processes.push(troe_process(reaction, table, index)?);
            }
            ReactionVariant::TernaryChemicalActivation(reaction) => {
                processes.push(ternary_process(reaction, table, index)?);
            }
            ReactionVariant::Tunneling(reaction) => {
                processes.push(tunneling_process(reaction, table, index)?);
            }
            ReactionVariant::CondensedPhaseArrhenius(_) => {
                return Err(ConversionError::UnsupportedReactionKind {
                    kind: variant.kind().to_string(),
                    context: format!(
                        "reaction {index}; gas-phase solver assembly has no rate model for condensed-phase kinetics"
                    ),
                });
            }
            ReactionVariant::Photolysis(reaction) => {
                processes.push(photolysis_process(reaction, table, index)?);
            }
            ReactionVariant::Emission(reaction) => {
                let context = format!("EMISSION reaction {index}");
                processes.push(external_rate_process(
                    EMISSION_PREFIX,
                    reaction.name.as_deref(),
                    reaction.scaling_factor,
                    &[],
                    &reaction.products,
                    table,
                    &context,
                )?);
            }
            ReactionVariant::FirstOrderLoss(reaction) => {
                let context = format!("FIRST_ORDER_LOSS reaction {index}");
                processes.push(external_rate_process(
                    FIRST_ORDER_LOSS_PREFIX,
                    reaction.name.as_deref(),
                    reaction.scaling_factor,
                    &reaction.reactants,
                    &[],
                    table,
                    &context,
                )?);
            }
            ReactionVariant::UserDefined(reaction) => {
                let context = format!("USER_DEFINED reaction {index}");
                processes.push(external_rate_process(
                    USER_DEFINED_PREFIX,
                    reaction.name.as_deref(),
                    reaction.scaling_factor,
                    &reaction.reactants,
                    &reaction.products,
                    table,
                    &context,
                )?);
            }
        }
    }
    Ok(processes)
}

fn arrhenius_process(
    reaction: &Arrhenius,
    table: &SpeciesTable,
    index: usize,
) -> Result<Process, ConversionError> {
    let context = format!("ARRHENIUS reaction {index}");
    Ok(Process {
        reactants: resolve_reactants(
            &reaction.reactants,
            table,
            &format!("reactants of {context}"),
        )?,
        products: resolve_products(
            &reaction.products,
            table,
            &format!("products of {context}"),
        )?,
        rate_parameters: RateParameters::Arrhenius(ArrheniusRateParameters {
            A: reaction.A,
            B: reaction.B,
            C: reaction.C,
            D: reaction.D,
            E: reaction.E,
        }),
    })
}

/// One branched reaction becomes two processes that share reactants and
/// numeric parameters and differ in product channel and branch tag.
fn branched_processes(
    reaction: &Branched,
    table: &SpeciesTable,
    index: usize,
) -> Result<[Process; 2], ConversionError> {
    let context = format!("BRANCHED reaction {index}");
    let reactants = resolve_reactants(
        &reaction.reactants,
        table,
        &format!("reactants of {context}"),
    )?;
    let alkoxy_products = resolve_products(
        &reaction.alkoxy_products,
        table,
        &format!("alkoxy products of {context}"),
    )?;
    let nitrate_products = resolve_products(
        &reaction.nitrate_products,
        table,
        &format!("nitrate products of {context}"),
    )?;
    let parameters = |branch: Branch| {
        RateParameters::Branched(BranchedRateParameters {
            X: reaction.X,
            Y: reaction.Y,
            a0: reaction.a0,
            n: reaction.n,
            branch,
        })
    };
    Ok([
        Process {
            reactants: reactants.clone(),
            products: alkoxy_products,
            rate_parameters: parameters(Branch::Alkoxy),
        },
        Process {
            reactants,
            products: nitrate_products,
            rate_parameters: parameters(Branch::Nitrate),
        },
    ])
}

fn surface_process(
    reaction: &Surface,
    table: &SpeciesTable,
    index: usize,
) -> Result<Process, ConversionError> {
    let context = format!("SURFACE reaction {index}");
    let reactants = resolve_reactants(
        std::slice::from_ref(&reaction.gas_phase_species),
        table,
        &format!("gas-phase species of {context}"),
    )?;
    let products = resolve_products(
        &reaction.gas_phase_products,
        table,
        &format!("gas-phase products of {context}"),
    )?;
    let species = table
        .require(&reaction.gas_phase_species.species_name, &context)?
        .clone();
    Ok(Process {
        reactants,
        products,
        rate_parameters: RateParameters::Surface(SurfaceRateParameters {
            reaction_probability: reaction.reaction_probability,
            species,
        }),
    })
}

fn troe_process(
    reaction: &Troe,
    table: &SpeciesTable,
    index: usize,
) -> Result<Process, ConversionError> {
    let context = format!("TROE reaction {index}");
    Ok(Process {
        reactants: resolve_reactants(
            &reaction.reactants,
            table,
            &format!("reactants of {context}"),
        )?,
        products: resolve_products(
            &reaction.products,
            table,
            &format!("products of {context}"),
        )?,
        rate_parameters: RateParameters::Troe(TroeRateParameters {
            k0_A: reaction.k0_A,
            k0_B: reaction.k0_B,
            k0_C: reaction.k0_C,
            kinf_A: reaction.kinf_A,
            kinf_B: reaction.kinf_B,
            kinf_C: reaction.kinf_C,
            Fc: reaction.Fc,
            N: reaction.N,
        }),
    })
}

fn ternary_process(
    reaction: &TernaryChemicalActivation,
    table: &SpeciesTable,
    index: usize,
) -> Result<Process, ConversionError> {
    let context = format!("TERNARY_CHEMICAL_ACTIVATION reaction {index}");
    Ok(Process {
        reactants: resolve_reactants(
            &reaction.reactants,
            table,
            &format!("reactants of {context}"),
        )?,
        products: resolve_products(
            &reaction.products,
            table,
            &format!("products of {context}"),
        )?,
        rate_parameters: RateParameters::TernaryChemicalActivation(
            TernaryChemicalActivationRateParameters {
                k0_A: reaction.k0_A,
                k0_B: reaction.k0_B,
                k0_C: reaction.k0_C,
                kinf_A: reaction.kinf_A,
                kinf_B: reaction.kinf_B,
                kinf_C: reaction.kinf_C,
                Fc: reaction.Fc,
                N: reaction.N,
            },
        ),
    })
}

fn tunneling_process(
    reaction: &Tunneling,
    table: &SpeciesTable,
    index: usize,
) -> Result<Process, ConversionError> {
    let context = format!("TUNNELING reaction {index}");
    Ok(Process {
        reactants: resolve_reactants(
            &reaction.reactants,
            table,
            &format!("reactants of {context}"),
        )?,
        products: resolve_products(
            &reaction.products,
            table,
            &format!("products of {context}"),
        )?,
        rate_parameters: RateParameters::Tunneling(TunnelingRateParameters {
            A: reaction.A,
            B: reaction.B,
            C: reaction.C,
        }),
    })
}

fn photolysis_process(
    reaction: &Photolysis,
    table: &SpeciesTable,
    index: usize,
) -> Result<Process, ConversionError> {
    let context = format!("PHOTOLYSIS reaction {index}");
    external_rate_process(
        PHOTOLYSIS_PREFIX,
        reaction.name.as_deref(),
        reaction.scaling_factor,
        &reaction.reactants,
        &reaction.products,
        table,
        &context,
    )
}

/// Shared lowering for every kind whose rate the host supplies at run
/// time. The prefix is passed in explicitly so each caller states which
/// namespace it fills.
fn external_rate_process(
    prefix: &str,
    name: Option<&str>,
    scaling_factor: f64,
    reactants: &[ReactionComponent],
    products: &[ReactionComponent],
    table: &SpeciesTable,
    context: &str,
) -> Result<Process, ConversionError> {
    Ok(Process {
        reactants: resolve_reactants(reactants, table, &format!("reactants of {context}"))?,
        products: resolve_products(products, table, &format!("products of {context}"))?,
        rate_parameters: RateParameters::UserDefined(UserDefinedRateParameters {
            label: format!("{}{}", prefix, name.unwrap_or_default()),
            scaling_factor,
        }),
    })
}
