use log::warn;

use super::species_table::SpeciesTable;
use super::ConversionError;
use crate::Mechanisms::components::ReactionComponent;
use crate::Mechanisms::species::Species;

/// Resolves a reactant list to full species records, repeating each record
/// once per whole unit of its coefficient. A coefficient of 2 yields the
/// species twice; a fractional part is truncated, since a solver process
/// consumes reactants in whole molecules. The truncation is logged because
/// it changes the chemistry the author wrote.
///
/// Every referenced name must be declared; the first unknown aborts the
/// conversion with `context` in the error.
pub fn resolve_reactants(
    components: &[ReactionComponent],
    table: &SpeciesTable,
    context: &str,
) -> Result<Vec<Species>, ConversionError> {
    let mut resolved = Vec::new();
    for component in components {
        let species = table.require(&component.species_name, context)?;
        let repeats = component.coefficient.trunc();
        if component.coefficient.fract() != 0.0 {
            warn!(
                "coefficient {} of reactant '{}' in {} is truncated to {} repeated entries",
                component.coefficient, component.species_name, context, repeats
            );
        }
        for _ in 0..repeats as usize {
            resolved.push(species.clone());
        }
    }
    Ok(resolved)
}

/// Resolves a product list to (species, yield) pairs. Yields stay exactly
/// as written, fractions included.
pub fn resolve_products(
    components: &[ReactionComponent],
    table: &SpeciesTable,
    context: &str,
) -> Result<Vec<(Species, f64)>, ConversionError> {
    components
        .iter()
        .map(|component| {
            table
                .require(&component.species_name, context)
                .map(|species| (species.clone(), component.coefficient))
        })
        .collect()
}
