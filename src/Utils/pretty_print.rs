use prettytable::{Cell, Row, Table};

use crate::ChemistryIR::chemistry::Chemistry;
use crate::ChemistryIR::rate_params::RateLaw;
use crate::Mechanisms::current_schema::Mechanism;
use crate::Mechanisms::species::Species;

fn optional(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v}"),
        None => "-".to_string(),
    }
}

fn species_row(species: &Species) -> Row {
    Row::new(vec![
        Cell::new(&species.name),
        Cell::new(&optional(species.molecular_weight)),
        Cell::new(&optional(species.diffusion_coefficient)),
        Cell::new(&optional(species.absolute_tolerance)),
        Cell::new(species.tracer_type.as_deref().unwrap_or("-")),
    ])
}

/// Prints a mechanism as three tables: species, phases and reaction counts
/// per kind.
pub fn print_mechanism_summary(mechanism: &Mechanism) {
    println!(
        "mechanism '{}', schema version {}",
        mechanism.name, mechanism.version
    );

    let mut species_table = Table::new();
    species_table.add_row(Row::new(vec![
        Cell::new("species"),
        Cell::new("MW, kg/mol"),
        Cell::new("D, m2/s"),
        Cell::new("abs tolerance"),
        Cell::new("tracer"),
    ]));
    for species in &mechanism.species {
        species_table.add_row(species_row(species));
    }
    species_table.printstd();

    let mut phase_table = Table::new();
    phase_table.add_row(Row::new(vec![
        Cell::new("phase"),
        Cell::new("species"),
    ]));
    for phase in &mechanism.phases {
        let members: Vec<&str> = phase.species.iter().map(|s| s.name.as_str()).collect();
        phase_table.add_row(Row::new(vec![
            Cell::new(&phase.name),
            Cell::new(&members.join(", ")),
        ]));
    }
    phase_table.printstd();

    let counts = [
        ("ARRHENIUS", mechanism.reactions.arrhenius.len()),
        ("BRANCHED", mechanism.reactions.branched.len()),
        ("SURFACE", mechanism.reactions.surface.len()),
        ("TROE", mechanism.reactions.troe.len()),
        (
            "TERNARY_CHEMICAL_ACTIVATION",
            mechanism.reactions.ternary_chemical_activation.len(),
        ),
        ("TUNNELING", mechanism.reactions.tunneling.len()),
        (
            "CONDENSED_PHASE_ARRHENIUS",
            mechanism.reactions.condensed_phase_arrhenius.len(),
        ),
        ("PHOTOLYSIS", mechanism.reactions.photolysis.len()),
        ("EMISSION", mechanism.reactions.emission.len()),
        ("FIRST_ORDER_LOSS", mechanism.reactions.first_order_loss.len()),
        ("USER_DEFINED", mechanism.reactions.user_defined.len()),
    ];
    let mut count_table = Table::new();
    count_table.add_row(Row::new(vec![
        Cell::new("reaction kind"),
        Cell::new("count"),
    ]));
    for (kind, count) in counts {
        if count > 0 {
            count_table.add_row(Row::new(vec![
                Cell::new(kind),
                Cell::new(&count.to_string()),
            ]));
        }
    }
    count_table.printstd();
}

/// Prints assembled chemistry as a process table, one row per solver
/// process with its equation, rate model and parameter summary.
pub fn print_chemistry_summary(chemistry: &Chemistry) {
    println!(
        "gas phase '{}' with {} species, {} further phases, {} processes",
        chemistry.gas_phase.name,
        chemistry.gas_phase.species.len(),
        chemistry.phases.len(),
        chemistry.processes.len()
    );

    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("#"),
        Cell::new("equation"),
        Cell::new("rate model"),
        Cell::new("label"),
        Cell::new("parameters"),
    ]));
    for (index, process) in chemistry.processes.iter().enumerate() {
        table.add_row(Row::new(vec![
            Cell::new(&index.to_string()),
            Cell::new(&process.equation()),
            Cell::new(process.rate_parameters.kind()),
            Cell::new(&process.rate_parameters.label()),
            Cell::new(&process.rate_parameters.summary()),
        ]));
    }
    table.printstd();
}
