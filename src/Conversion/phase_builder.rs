use log::debug;

use super::species_table::SpeciesTable;
use super::ConversionError;
use crate::ChemistryIR::chemistry::ResolvedPhase;
use crate::Mechanisms::phases::{Phase, PhaseSpecies, CONDENSED_PHASE, GAS_PHASE};
use crate::Mechanisms::species::Species;

/// Resolves declared phases against the species table. Every listed name
/// must be a declared species. A phase entry may override the diffusion
/// coefficient of the record it names; the override applies to the copy in
/// that phase only.
pub fn resolve_phases(
    phases: &[Phase],
    table: &SpeciesTable,
) -> Result<Vec<ResolvedPhase>, ConversionError> {
    let mut resolved = Vec::with_capacity(phases.len());
    for phase in phases {
        let context = format!("phase '{}'", phase.name);
        let mut members = Vec::with_capacity(phase.species.len());
        for member in &phase.species {
            let mut species = table.require(&member.name, &context)?.clone();
            if let Some(diffusion) = member.diffusion_coefficient {
                debug!(
                    "phase '{}' overrides the diffusion coefficient of '{}'",
                    phase.name, member.name
                );
                species.diffusion_coefficient = Some(diffusion);
            }
            members.push(species);
        }
        resolved.push(ResolvedPhase {
            name: phase.name.clone(),
            species: members,
        });
    }
    Ok(resolved)
}

/// Phase declarations for a migrated legacy mechanism. The legacy schema
/// had no phases, so migration synthesizes a gas phase and a condensed
/// phase that each list every declared species in declaration order. That
/// keeps surface reactions, which move mass between the two media,
/// satisfiable without guessing which species the author meant to confine.
pub fn synthesize_legacy_phases(species: &[Species]) -> Vec<Phase> {
    let everything: Vec<PhaseSpecies> =
        species.iter().map(|s| PhaseSpecies::new(&s.name)).collect();
    vec![
        Phase {
            name: GAS_PHASE.to_string(),
            species: everything.clone(),
            ..Default::default()
        },
        Phase {
            name: CONDENSED_PHASE.to_string(),
            species: everything,
            ..Default::default()
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SpeciesTable {
        let mut hno3 = Species::new("HNO3");
        hno3.diffusion_coefficient = Some(1.0e-5);
        SpeciesTable::build(&[hno3, Species::new("NO2")]).unwrap()
    }

    #[test]
    fn test_resolve_copies_full_records() {
        let phases = vec![Phase::with_species(GAS_PHASE, &["HNO3", "NO2"])];
        let resolved = resolve_phases(&phases, &table()).unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name, "gas");
        assert_eq!(resolved[0].species[0].diffusion_coefficient, Some(1.0e-5));
    }

    #[test]
    fn test_phase_level_diffusion_override_wins() {
        let mut phase = Phase::new("aqueous aerosol");
        let mut member = PhaseSpecies::new("HNO3");
        member.diffusion_coefficient = Some(9.0e-10);
        phase.species.push(member);
        let resolved = resolve_phases(&[phase], &table()).unwrap();
        assert_eq!(resolved[0].species[0].diffusion_coefficient, Some(9.0e-10));
        // the table copy is untouched
        assert_eq!(
            table().get("HNO3").unwrap().diffusion_coefficient,
            Some(1.0e-5)
        );
    }

    #[test]
    fn test_phase_with_unknown_species_fails() {
        let phases = vec![Phase::with_species("gas", &["HNO3", "N2O5"])];
        let err = resolve_phases(&phases, &table()).unwrap_err();
        match err {
            ConversionError::UnknownSpecies { species, context } => {
                assert_eq!(species, "N2O5");
                assert!(context.contains("phase 'gas'"));
            }
            other => panic!("wrong error: {other:?}"),
        }
    }

    #[test]
    fn test_synthesized_phases_cover_every_species() {
        let species = vec![Species::new("A"), Species::new("B"), Species::new("C")];
        let phases = synthesize_legacy_phases(&species);
        assert_eq!(phases.len(), 2);
        assert_eq!(phases[0].name, GAS_PHASE);
        assert_eq!(phases[1].name, CONDENSED_PHASE);
        for phase in &phases {
            let names: Vec<&str> = phase.species.iter().map(|s| s.name.as_str()).collect();
            assert_eq!(names, vec!["A", "B", "C"]);
        }
    }
}
