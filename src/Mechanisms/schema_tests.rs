#[cfg(test)]
mod tests {
    use crate::Mechanisms::components::ReactionComponent;
    use crate::Mechanisms::current_schema::{
        Arrhenius, Branched, CondensedPhaseArrhenius, Emission, FirstOrderLoss, Mechanism,
        Photolysis, Reactions, SchemaVersion, Surface, TernaryChemicalActivation, Troe, Tunneling,
        UserDefined,
    };
    use crate::Mechanisms::legacy_schema::{self, LegacyMechanism};
    use crate::Mechanisms::phases::Phase;
    use crate::Mechanisms::species::Species;
    use serde_json::json;

    #[test]
    fn test_version_display_and_constants() {
        assert_eq!(SchemaVersion::CURRENT.to_string(), "1.0.0");
        assert_eq!(SchemaVersion::LEGACY.major, 0);
        assert_eq!(SchemaVersion::new(2, 3, 1).to_string(), "2.3.1");
        assert_eq!(Mechanism::new("m").version, SchemaVersion::CURRENT);
        assert_eq!(LegacyMechanism::new("m").version, SchemaVersion::LEGACY);
    }

    #[test]
    fn test_arrhenius_parameter_defaults() {
        let reaction: Arrhenius = serde_json::from_value(json!({ "A": 2.5e-12 })).unwrap();
        assert_eq!(reaction.A, 2.5e-12);
        assert_eq!(reaction.B, 0.0);
        assert_eq!(reaction.C, 0.0);
        assert_eq!(reaction.D, 300.0);
        assert_eq!(reaction.E, 0.0);
        assert!(reaction.name.is_none());
    }

    #[test]
    fn test_troe_broadening_defaults() {
        let reaction: Troe =
            serde_json::from_value(json!({ "k0_A": 1.0e-30, "kinf_A": 1.0e-10 })).unwrap();
        assert_eq!(reaction.Fc, 0.6);
        assert_eq!(reaction.N, 1.0);
        assert_eq!(reaction.k0_B, 0.0);
        let ternary: TernaryChemicalActivation = serde_json::from_value(json!({})).unwrap();
        assert_eq!(ternary.Fc, 0.6);
        assert_eq!(ternary.N, 1.0);
    }

    #[test]
    fn test_scaling_factor_and_probability_defaults() {
        let photolysis: Photolysis = serde_json::from_value(json!({ "name": "jNO2" })).unwrap();
        assert_eq!(photolysis.scaling_factor, 1.0);
        let emission: Emission = serde_json::from_value(json!({})).unwrap();
        assert_eq!(emission.scaling_factor, 1.0);
        let loss: FirstOrderLoss = serde_json::from_value(json!({})).unwrap();
        assert_eq!(loss.scaling_factor, 1.0);
        let user: UserDefined = serde_json::from_value(json!({})).unwrap();
        assert_eq!(user.scaling_factor, 1.0);
        let surface: Surface = serde_json::from_value(json!({})).unwrap();
        assert_eq!(surface.reaction_probability, 1.0);
        let tunneling: Tunneling = serde_json::from_value(json!({})).unwrap();
        assert_eq!(tunneling.A, 1.0);
    }

    #[test]
    fn test_variants_follow_kind_declaration_order() {
        let reactions = Reactions {
            arrhenius: vec![Arrhenius::default()],
            branched: vec![Branched::default()],
            surface: vec![Surface::default()],
            troe: vec![Troe::default()],
            ternary_chemical_activation: vec![TernaryChemicalActivation::default()],
            tunneling: vec![Tunneling::default()],
            condensed_phase_arrhenius: vec![CondensedPhaseArrhenius::default()],
            photolysis: vec![Photolysis::default()],
            emission: vec![Emission::default()],
            first_order_loss: vec![FirstOrderLoss::default()],
            user_defined: vec![UserDefined::default()],
        };
        assert_eq!(reactions.len(), 11);
        let kinds: Vec<&str> = reactions.variants().iter().map(|(_, v)| v.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                "ARRHENIUS",
                "BRANCHED",
                "SURFACE",
                "TROE",
                "TERNARY_CHEMICAL_ACTIVATION",
                "TUNNELING",
                "CONDENSED_PHASE_ARRHENIUS",
                "PHOTOLYSIS",
                "EMISSION",
                "FIRST_ORDER_LOSS",
                "USER_DEFINED",
            ]
        );
    }

    #[test]
    fn test_variants_carry_kind_local_indices() {
        let reactions = Reactions {
            troe: vec![Troe::default(), Troe::default()],
            photolysis: vec![Photolysis::default()],
            ..Default::default()
        };
        let indexed: Vec<(usize, &str)> = reactions
            .variants()
            .iter()
            .map(|(i, v)| (*i, v.kind()))
            .collect();
        assert_eq!(
            indexed,
            vec![(0, "TROE"), (1, "TROE"), (0, "PHOTOLYSIS")]
        );
    }

    #[test]
    fn test_mechanism_round_trip_preserves_everything() {
        let mut mechanism = Mechanism::new("full chemistry");
        let mut no2 = Species::new("NO2");
        no2.molecular_weight = Some(0.046005);
        no2.unknown_properties
            .insert("__origin".to_string(), "traffic".to_string());
        mechanism.species = vec![Species::new("NO"), no2, Species::new("O3")];
        mechanism.phases = vec![Phase::with_species("gas", &["NO", "NO2", "O3"])];
        mechanism.reactions.photolysis.push(Photolysis {
            name: Some("jNO2".to_string()),
            scaling_factor: 0.5,
            reactants: vec![ReactionComponent::new("NO2")],
            products: vec![ReactionComponent::new("NO")],
            gas_phase: "gas".to_string(),
            ..Default::default()
        });
        let json = serde_json::to_string_pretty(&mechanism).unwrap();
        let back: Mechanism = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mechanism);
        assert_eq!(back.species[1].unknown_properties["__origin"], "traffic");
    }

    #[test]
    fn test_legacy_mechanism_has_no_phases_field() {
        let legacy = LegacyMechanism {
            name: "old".to_string(),
            species: vec![Species::new("A")],
            reactions: legacy_schema::LegacyReactions {
                arrhenius: vec![legacy_schema::Arrhenius {
                    A: 1.0e-12,
                    reactants: vec![ReactionComponent::new("A")],
                    ..Default::default()
                }],
                ..Default::default()
            },
            ..Default::default()
        };
        let json = serde_json::to_string(&legacy).unwrap();
        assert!(!json.contains("phases"));
        assert!(!json.contains("gas_phase"));
        let back: LegacyMechanism = serde_json::from_str(&json).unwrap();
        assert_eq!(back, legacy);
        assert_eq!(back.reactions.len(), 1);
    }

    #[test]
    fn test_legacy_defaults_match_current_defaults() {
        let current = Troe::default();
        let legacy = legacy_schema::Troe::default();
        assert_eq!(current.Fc, legacy.Fc);
        assert_eq!(current.N, legacy.N);
        assert_eq!(
            legacy_schema::Arrhenius::default().D,
            Arrhenius::default().D
        );
    }
}
