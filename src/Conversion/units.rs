use crate::Mechanisms::components::ReactionComponent;

/// Avogadro constant, molecules mol⁻¹ (2019 SI exact value).
pub const AVOGADRO: f64 = 6.02214076e23;

/// Number density of a 1 mol m⁻³ gas in molecules cm⁻³. One factor of this
/// constant is gained per concentration power when a rate parameter moves
/// from the number-density basis to the molar basis.
pub const MOLES_M3_TO_MOLECULES_CM3: f64 = 1.0e-6 * AVOGADRO;

/// Exponent offset for ordinary rate parameters: a reaction of total order
/// n has a rate constant of concentration dimension 1 − n, so conversion
/// raises the basis factor to n − 1.
pub const GENERIC_RATE_EXPONENT_OFFSET: i32 = -1;

/// Exponent offset for a falloff low-pressure limit k0, which is
/// bimolecular in the third body on top of the listed reactants and
/// therefore carries one more concentration power.
pub const LOW_PRESSURE_RATE_EXPONENT_OFFSET: i32 = 0;

/// Total reactant order: the sum of the stoichiometric coefficients as
/// written, fractions included.
pub fn reactant_order(reactants: &[ReactionComponent]) -> f64 {
    reactants.iter().map(|c| c.coefficient).sum()
}

/// Rescales one rate parameter from the molecules cm⁻³ basis to the
/// mol m⁻³ basis.
///
/// The multiplier is `MOLES_M3_TO_MOLECULES_CM3` raised to the total
/// reactant order plus `exponent_offset`. Pass
/// [`GENERIC_RATE_EXPONENT_OFFSET`] for every parameter except a falloff
/// k0, which takes [`LOW_PRESSURE_RATE_EXPONENT_OFFSET`].
pub fn to_molar_basis(
    reactants: &[ReactionComponent],
    value: f64,
    exponent_offset: i32,
) -> f64 {
    let exponent = reactant_order(reactants) + f64::from(exponent_offset);
    value * MOLES_M3_TO_MOLECULES_CM3.powf(exponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reactants(coefficients: &[f64]) -> Vec<ReactionComponent> {
        coefficients
            .iter()
            .enumerate()
            .map(|(i, &c)| ReactionComponent::with_coefficient(&format!("S{i}"), c))
            .collect()
    }

    #[test]
    fn test_first_order_parameter_is_unchanged() {
        let value = to_molar_basis(&reactants(&[1.0]), 0.0047, GENERIC_RATE_EXPONENT_OFFSET);
        assert_relative_eq!(value, 0.0047, max_relative = 1e-15);
    }

    #[test]
    fn test_second_order_parameter_gains_one_basis_factor() {
        let value = to_molar_basis(&reactants(&[1.0, 1.0]), 1.0e-11, GENERIC_RATE_EXPONENT_OFFSET);
        assert_relative_eq!(value, 6.02214076e6, max_relative = 1e-12);
    }

    #[test]
    fn test_low_pressure_offset_adds_a_factor() {
        let generic = to_molar_basis(&reactants(&[1.0, 1.0]), 1.0e-30, GENERIC_RATE_EXPONENT_OFFSET);
        let low_pressure =
            to_molar_basis(&reactants(&[1.0, 1.0]), 1.0e-30, LOW_PRESSURE_RATE_EXPONENT_OFFSET);
        assert_relative_eq!(
            low_pressure,
            generic * MOLES_M3_TO_MOLECULES_CM3,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            low_pressure,
            1.0e-30 * MOLES_M3_TO_MOLECULES_CM3.powi(2),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_fractional_coefficients_count_toward_the_order() {
        assert_relative_eq!(reactant_order(&reactants(&[1.5, 1.0])), 2.5);
        let value = to_molar_basis(&reactants(&[1.5, 1.0]), 2.0, GENERIC_RATE_EXPONENT_OFFSET);
        assert_relative_eq!(
            value,
            2.0 * MOLES_M3_TO_MOLECULES_CM3.powf(1.5),
            max_relative = 1e-12
        );
    }
}
