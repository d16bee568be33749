use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::rate_params::RateParameters;
use crate::Mechanisms::species::Species;

/// One solver process. Reactants are fully resolved species records,
/// repeated once per unit of consumed stoichiometry, so the solver can read
/// the reaction order straight off the vector length. Products keep their
/// fractional yields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    pub reactants: Vec<Species>,
    pub products: Vec<(Species, f64)>,
    pub rate_parameters: RateParameters,
}

impl Process {
    /// Human-readable equation, e.g. `O + O2 -> O3` or `NO2 -> 0.5 NO`.
    pub fn equation(&self) -> String {
        let left: Vec<&str> = self.reactants.iter().map(|s| s.name.as_str()).collect();
        let right: Vec<String> = self
            .products
            .iter()
            .map(|(species, coefficient)| {
                if *coefficient == 1.0 {
                    species.name.clone()
                } else {
                    format!("{} {}", coefficient, species.name)
                }
            })
            .collect();
        format!("{} -> {}", left.join(" + "), right.join(" + "))
    }
}

/// A phase with every species reference resolved to the full record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPhase {
    pub name: String,
    pub species: Vec<Species>,
}

/// The flat solver view of a mechanism. The gas phase is pulled out of the
/// phase map because every gas-phase rate model reads from it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chemistry {
    pub gas_phase: ResolvedPhase,
    pub phases: HashMap<String, ResolvedPhase>,
    pub processes: Vec<Process>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChemistryIR::rate_params::{RateParameters, UserDefinedRateParameters};

    fn sp(name: &str) -> Species {
        Species::new(name)
    }

    #[test]
    fn test_equation_repeats_reactants_and_prints_yields() {
        let process = Process {
            reactants: vec![sp("O"), sp("O"), sp("M")],
            products: vec![(sp("O2"), 1.0), (sp("O3P"), 0.3)],
            rate_parameters: RateParameters::UserDefined(UserDefinedRateParameters {
                label: "USER.recombination".to_string(),
                scaling_factor: 1.0,
            }),
        };
        assert_eq!(process.equation(), "O + O + M -> O2 + 0.3 O3P");
    }

    #[test]
    fn test_equation_handles_empty_sides() {
        let source = Process {
            reactants: vec![],
            products: vec![(sp("NO"), 1.0)],
            rate_parameters: RateParameters::UserDefined(UserDefinedRateParameters {
                label: "EMIS.traffic".to_string(),
                scaling_factor: 1.0,
            }),
        };
        assert_eq!(source.equation(), " -> NO");
        let sink = Process {
            reactants: vec![sp("O3")],
            products: vec![],
            rate_parameters: RateParameters::UserDefined(UserDefinedRateParameters {
                label: "LOSS.deposition".to_string(),
                scaling_factor: 1.0,
            }),
        };
        assert_eq!(sink.equation(), "O3 -> ");
    }
}
