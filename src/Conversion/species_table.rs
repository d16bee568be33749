use std::collections::HashMap;

use super::ConversionError;
use crate::Mechanisms::species::Species;

/// Index over a mechanism species list. Built once per conversion, then
/// every species reference in reactions and phases resolves through it.
/// Lookups never insert; a miss is always a hard error at the call site.
#[derive(Debug, Clone)]
pub struct SpeciesTable {
    species: Vec<Species>,
    index: HashMap<String, usize>,
}

impl SpeciesTable {
    /// Indexes the declarations, rejecting the first duplicated name.
    pub fn build(species: &[Species]) -> Result<Self, ConversionError> {
        let mut index = HashMap::with_capacity(species.len());
        for (position, declaration) in species.iter().enumerate() {
            if index
                .insert(declaration.name.clone(), position)
                .is_some()
            {
                return Err(ConversionError::DuplicateSpecies(declaration.name.clone()));
            }
        }
        Ok(Self {
            species: species.to_vec(),
            index,
        })
    }

    pub fn get(&self, name: &str) -> Option<&Species> {
        self.index.get(name).map(|&position| &self.species[position])
    }

    /// Lookup that turns a miss into [`ConversionError::UnknownSpecies`],
    /// with `context` naming the referencing site.
    pub fn require(&self, name: &str, context: &str) -> Result<&Species, ConversionError> {
        self.get(name).ok_or_else(|| ConversionError::UnknownSpecies {
            species: name.to_string(),
            context: context.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Declarations in their original order.
    pub fn iter(&self) -> std::slice::Iter<'_, Species> {
        self.species.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_and_lookup() {
        let table =
            SpeciesTable::build(&[Species::new("O3"), Species::new("NO")]).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.contains("O3"));
        assert_eq!(table.get("NO").unwrap().name, "NO");
        assert!(table.get("NO2").is_none());
    }

    #[test]
    fn test_duplicate_declaration_is_rejected() {
        let err = SpeciesTable::build(&[
            Species::new("O3"),
            Species::new("NO"),
            Species::new("O3"),
        ])
        .unwrap_err();
        assert_eq!(err, ConversionError::DuplicateSpecies("O3".to_string()));
    }

    #[test]
    fn test_require_names_the_context() {
        let table = SpeciesTable::build(&[Species::new("O3")]).unwrap();
        let err = table
            .require("N2O5", "reactants of ARRHENIUS reaction 4")
            .unwrap_err();
        match err {
            ConversionError::UnknownSpecies { species, context } => {
                assert_eq!(species, "N2O5");
                assert!(context.contains("ARRHENIUS reaction 4"));
            }
            other => panic!("wrong error: {other:?}"),
        }
    }

    #[test]
    fn test_iteration_keeps_declaration_order() {
        let table = SpeciesTable::build(&[
            Species::new("NO"),
            Species::new("NO2"),
            Species::new("O3"),
        ])
        .unwrap();
        let names: Vec<&str> = table.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["NO", "NO2", "O3"]);
    }
}
