use crate::ChemistryIR::stoichiometry::stoichiometric_matrix;
use crate::Conversion::assembler::assemble;
use crate::Conversion::migrator::migrate;
use crate::Mechanisms::components::ReactionComponent;
use crate::Mechanisms::legacy_schema::{self, LegacyMechanism};
use crate::Mechanisms::species::Species;
use crate::Utils::pretty_print::{print_chemistry_summary, print_mechanism_summary};

/// A small NOx and ozone mechanism in the legacy schema, the starting
/// point of every demo task.
fn demo_legacy_mechanism() -> LegacyMechanism {
    let mut mechanism = LegacyMechanism::new("NOx demo");
    mechanism.species = vec![
        Species::new("O"),
        Species::new("O1D"),
        Species::new("O2"),
        Species::new("O3"),
        Species::new("M"),
        Species::new("NO"),
        Species::new("NO2"),
        Species::new("OH"),
        Species::new("HNO3"),
    ];
    // NO + O3 -> NO2 + O2
    mechanism.reactions.arrhenius.push(legacy_schema::Arrhenius {
        name: Some("NO + O3".to_string()),
        A: 3.0e-12,
        C: 1500.0,
        reactants: vec![ReactionComponent::new("NO"), ReactionComponent::new("O3")],
        products: vec![ReactionComponent::new("NO2"), ReactionComponent::new("O2")],
        ..Default::default()
    });
    // O + O2 + M -> O3 + M
    mechanism.reactions.arrhenius.push(legacy_schema::Arrhenius {
        name: Some("ozone formation".to_string()),
        A: 6.0e-34,
        B: -2.4,
        reactants: vec![
            ReactionComponent::new("O"),
            ReactionComponent::new("O2"),
            ReactionComponent::new("M"),
        ],
        products: vec![ReactionComponent::new("O3"), ReactionComponent::new("M")],
        ..Default::default()
    });
    // NO2 + OH -> HNO3, pressure dependent
    mechanism.reactions.troe.push(legacy_schema::Troe {
        name: Some("HNO3 formation".to_string()),
        k0_A: 1.8e-30,
        k0_B: -3.0,
        kinf_A: 2.8e-11,
        reactants: vec![ReactionComponent::new("NO2"), ReactionComponent::new("OH")],
        products: vec![ReactionComponent::new("HNO3")],
        ..Default::default()
    });
    mechanism.reactions.photolysis.push(legacy_schema::Photolysis {
        name: Some("jNO2".to_string()),
        reactants: vec![ReactionComponent::new("NO2")],
        products: vec![ReactionComponent::new("NO"), ReactionComponent::new("O")],
        ..Default::default()
    });
    mechanism.reactions.photolysis.push(legacy_schema::Photolysis {
        name: Some("jO3".to_string()),
        reactants: vec![ReactionComponent::new("O3")],
        products: vec![ReactionComponent::new("O1D"), ReactionComponent::new("O2")],
        ..Default::default()
    });
    mechanism.reactions.emission.push(legacy_schema::Emission {
        name: Some("traffic NO".to_string()),
        products: vec![ReactionComponent::new("NO")],
        ..Default::default()
    });
    mechanism
        .reactions
        .first_order_loss
        .push(legacy_schema::FirstOrderLoss {
            name: Some("HNO3 wet deposition".to_string()),
            reactants: vec![ReactionComponent::new("HNO3")],
            ..Default::default()
        });
    mechanism
}

pub fn conversion_examples(task: usize) {
    match task {
        0 => {
            // migrate a legacy mechanism and inspect the result
            let legacy = demo_legacy_mechanism();
            let migrated = migrate(&legacy).expect("demo mechanism migrates");
            print_mechanism_summary(&migrated);
        }
        1 => {
            // full pipeline: migrate, then assemble solver chemistry
            let legacy = demo_legacy_mechanism();
            let migrated = migrate(&legacy).expect("demo mechanism migrates");
            let chemistry = assemble(&migrated).expect("demo mechanism assembles");
            print_chemistry_summary(&chemistry);
        }
        2 => {
            // net stoichiometry of the gas phase
            let legacy = demo_legacy_mechanism();
            let migrated = migrate(&legacy).expect("demo mechanism migrates");
            let chemistry = assemble(&migrated).expect("demo mechanism assembles");
            let (matrix, names) = stoichiometric_matrix(&chemistry);
            println!("rows: {}", names.join(", "));
            println!("{}", matrix);
        }
        _ => {
            println!("there is no example with number {}", task);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_mechanism_survives_the_full_pipeline() {
        let legacy = demo_legacy_mechanism();
        let migrated = migrate(&legacy).unwrap();
        let chemistry = assemble(&migrated).unwrap();
        assert_eq!(chemistry.gas_phase.species.len(), 9);
        assert_eq!(chemistry.processes.len(), legacy.reactions.len());
    }

    #[test]
    fn test_every_demo_task_runs() {
        for task in 0..3 {
            conversion_examples(task);
        }
        conversion_examples(99);
    }
}
