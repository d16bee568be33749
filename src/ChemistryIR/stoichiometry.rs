use nalgebra::DMatrix;
use std::collections::HashMap;

use super::chemistry::Chemistry;

/// Net stoichiometric matrix of the gas phase: one row per gas-phase
/// species in phase order, one column per process in process order.
/// Reactants contribute −1 per repeated entry, products contribute their
/// yield. Species outside the gas phase are not given rows.
///
/// Returns the matrix together with the row species names.
pub fn stoichiometric_matrix(chemistry: &Chemistry) -> (DMatrix<f64>, Vec<String>) {
    let names: Vec<String> = chemistry
        .gas_phase
        .species
        .iter()
        .map(|s| s.name.clone())
        .collect();
    let row_of: HashMap<&str, usize> = names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    let mut matrix = DMatrix::zeros(names.len(), chemistry.processes.len());
    for (j, process) in chemistry.processes.iter().enumerate() {
        for species in &process.reactants {
            if let Some(&i) = row_of.get(species.name.as_str()) {
                matrix[(i, j)] -= 1.0;
            }
        }
        for (species, coefficient) in &process.products {
            if let Some(&i) = row_of.get(species.name.as_str()) {
                matrix[(i, j)] += coefficient;
            }
        }
    }
    (matrix, names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChemistryIR::chemistry::{Process, ResolvedPhase};
    use crate::ChemistryIR::rate_params::{
        ArrheniusRateParameters, RateParameters, UserDefinedRateParameters,
    };
    use crate::Mechanisms::species::Species;

    fn gas_chemistry(names: &[&str], processes: Vec<Process>) -> Chemistry {
        Chemistry {
            gas_phase: ResolvedPhase {
                name: "gas".to_string(),
                species: names.iter().map(|n| Species::new(n)).collect(),
            },
            phases: HashMap::new(),
            processes,
        }
    }

    #[test]
    fn test_matrix_entries() {
        // O + O3 -> 2 O2, then an emission of O
        let recombination = Process {
            reactants: vec![Species::new("O"), Species::new("O3")],
            products: vec![(Species::new("O2"), 2.0)],
            rate_parameters: RateParameters::Arrhenius(ArrheniusRateParameters {
                A: 8.0e-12,
                B: 0.0,
                C: 2060.0,
                D: 300.0,
                E: 0.0,
            }),
        };
        let source = Process {
            reactants: vec![],
            products: vec![(Species::new("O"), 1.0)],
            rate_parameters: RateParameters::UserDefined(UserDefinedRateParameters {
                label: "EMIS.O".to_string(),
                scaling_factor: 1.0,
            }),
        };
        let chemistry = gas_chemistry(&["O", "O2", "O3"], vec![recombination, source]);
        let (matrix, names) = stoichiometric_matrix(&chemistry);
        assert_eq!(names, vec!["O", "O2", "O3"]);
        assert_eq!(matrix.nrows(), 3);
        assert_eq!(matrix.ncols(), 2);
        assert_eq!(matrix[(0, 0)], -1.0);
        assert_eq!(matrix[(1, 0)], 2.0);
        assert_eq!(matrix[(2, 0)], -1.0);
        assert_eq!(matrix[(0, 1)], 1.0);
        assert_eq!(matrix[(1, 1)], 0.0);
    }

    #[test]
    fn test_repeated_reactants_accumulate() {
        let process = Process {
            reactants: vec![Species::new("O"), Species::new("O")],
            products: vec![(Species::new("O2"), 1.0)],
            rate_parameters: RateParameters::Arrhenius(ArrheniusRateParameters {
                A: 1.0,
                B: 0.0,
                C: 0.0,
                D: 300.0,
                E: 0.0,
            }),
        };
        let chemistry = gas_chemistry(&["O", "O2"], vec![process]);
        let (matrix, _) = stoichiometric_matrix(&chemistry);
        assert_eq!(matrix[(0, 0)], -2.0);
        assert_eq!(matrix[(1, 0)], 1.0);
    }

    #[test]
    fn test_species_outside_gas_phase_get_no_row() {
        let process = Process {
            reactants: vec![Species::new("HNO3")],
            products: vec![(Species::new("HNO3_aq"), 1.0)],
            rate_parameters: RateParameters::UserDefined(UserDefinedRateParameters {
                label: "USER.uptake".to_string(),
                scaling_factor: 1.0,
            }),
        };
        let chemistry = gas_chemistry(&["HNO3"], vec![process]);
        let (matrix, names) = stoichiometric_matrix(&chemistry);
        assert_eq!(names.len(), 1);
        assert_eq!(matrix[(0, 0)], -1.0);
    }
}
