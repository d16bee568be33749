#[allow(non_snake_case)]
pub mod ChemistryIR;
#[allow(non_snake_case)]
pub mod Conversion;
#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Mechanisms;
#[allow(non_snake_case)]
pub mod Utils;

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use Examples::conversion_examples::conversion_examples;

pub fn main() {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();
    let task: usize = 1;
    conversion_examples(task);
}
