#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use ricochet_core::constants::*;
    use ricochet_core::defs::{DefDatabase, RoofDef, StuffProps, StuffStats, TerrainDef, ThingDef};
    use ricochet_core::enums::{FailureMode, ScatterKind, StuffCategory, TerrainTag};

    use crate::categories::{get_profile, stuff_hardness};
    use crate::classify::{classify_roof, MaterialModel, MaterialSubject};

    fn stuff(name: &str, category: StuffCategory, sharp: f64, blunt: f64) -> ThingDef {
        ThingDef {
            name: name.into(),
            stuff_props: Some(StuffProps {
                category,
                stats: StuffStats {
                    armor_sharp: sharp,
                    armor_blunt: blunt,
                    ..Default::default()
                },
            }),
            made_from: None,
            cost_list: vec![],
        }
    }

    fn terrain(name: &str, tags: &[TerrainTag]) -> TerrainDef {
        TerrainDef {
            name: name.into(),
            tags: tags.to_vec(),
            scatter: None,
            fertility: 0.0,
            dries_to: None,
            burned_def: None,
            cost_list: vec![],
        }
    }

    fn make_defs() -> DefDatabase {
        let mut db = DefDatabase::new();
        db.add_thing(stuff("Steel", StuffCategory::Metallic, 0.9, 0.45));
        db.add_thing(stuff("WoodLog", StuffCategory::Woody, 0.2, 0.3));
        db.add_thing(ThingDef {
            name: "Wall".into(),
            stuff_props: None,
            made_from: Some("Steel".into()),
            cost_list: vec![],
        });
        db.add_thing(ThingDef {
            name: "Sandbags".into(),
            stuff_props: None,
            made_from: None,
            cost_list: vec!["Nothing".into(), "WoodLog".into(), "Steel".into()],
        });

        db.add_terrain(terrain("WaterShallow", &[TerrainTag::Water]));
        db.add_terrain(TerrainDef {
            fertility: 0.5,
            ..terrain("Soil", &[TerrainTag::Diggable])
        });
        db.add_terrain(TerrainDef {
            dries_to: Some("Soil".into()),
            ..terrain("Mud", &[TerrainTag::Diggable])
        });
        db.add_terrain(TerrainDef {
            scatter: Some(ScatterKind::Icy),
            ..terrain("Ice", &[TerrainTag::LooseSoil])
        });
        db.add_terrain(TerrainDef {
            fertility: 1.4,
            ..terrain("SoilRich", &[TerrainTag::Diggable])
        });
        db.add_terrain(terrain("Sand", &[TerrainTag::SandResidue]));
        db.add_terrain(terrain("Concrete", &[TerrainTag::Concrete]));
        db.add_terrain(TerrainDef {
            scatter: Some(ScatterKind::Rocky),
            ..terrain("RoughStone", &[])
        });
        db.add_terrain(TerrainDef {
            cost_list: vec!["WoodLog".into()],
            ..terrain("WoodFloor", &[])
        });
        db.add_terrain(TerrainDef {
            dries_to: Some("WoodFloor".into()),
            ..terrain("WetPlanks", &[])
        });
        db.add_terrain(TerrainDef {
            burned_def: Some("BurnedFloor".into()),
            cost_list: vec!["WoodLog".into()],
            ..terrain("CarpetFloor", &[])
        });
        db.add_terrain(terrain("BurnedFloor", &[]));
        db.add_terrain(terrain("Bedrock", &[]));
        db
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_category_failure_modes() {
        use StuffCategory::*;
        assert_eq!(get_profile(Metallic).failure_mode, FailureMode::Malleable);
        assert_eq!(get_profile(Leathery).failure_mode, FailureMode::Malleable);
        assert_eq!(get_profile(Woody).failure_mode, FailureMode::Frangible);
        assert_eq!(get_profile(Stony).failure_mode, FailureMode::Frangible);
        assert_eq!(get_profile(Fabric).failure_mode, FailureMode::Frangible);
    }

    #[test]
    fn test_category_densities_are_distinct() {
        use StuffCategory::*;
        let densities: Vec<f64> = [Metallic, Woody, Stony, Fabric, Leathery]
            .iter()
            .map(|c| get_profile(*c).density)
            .collect();
        for i in 0..densities.len() {
            for j in (i + 1)..densities.len() {
                assert_ne!(densities[i], densities[j]);
            }
        }
    }

    #[test]
    fn test_metallic_hardness_scales_armor() {
        let stats = StuffStats {
            armor_sharp: 0.9,
            armor_blunt: 0.45,
            ..Default::default()
        };
        let h = stuff_hardness(StuffCategory::Metallic, &stats);
        assert!((h - STEEL_HARDNESS).abs() < 1e-9);
    }

    #[test]
    fn test_hardness_never_negative() {
        let stats = StuffStats {
            armor_sharp: -1.0,
            armor_blunt: -1.0,
            ..Default::default()
        };
        assert_eq!(stuff_hardness(StuffCategory::Stony, &stats), 0.0);
    }

    #[test]
    fn test_stuffed_wall_recurses_into_material() {
        let db = make_defs();
        let model = MaterialModel::new(&db);
        let wall = db.thing("Wall").unwrap();
        let props = model.classify(MaterialSubject::Thing(wall), &mut rng());
        assert_eq!(props.failure_mode, FailureMode::Malleable);
        assert_eq!(props.density, METALLIC_DENSITY);
        assert!((props.hardness - 81.0).abs() < 1e-9);
    }

    #[test]
    fn test_thing_cost_list_uses_first_raw_material() {
        let db = make_defs();
        let model = MaterialModel::new(&db);
        let bags = db.thing("Sandbags").unwrap();
        let props = model.classify(MaterialSubject::Thing(bags), &mut rng());
        // "Nothing" is unknown and skipped, WoodLog comes before Steel
        assert_eq!(props.failure_mode, FailureMode::Frangible);
        assert_eq!(props.density, WOODY_DENSITY);
    }

    #[test]
    fn test_roofs() {
        let thick = RoofDef {
            name: "RockThick".into(),
            is_thick: true,
            is_natural: true,
        };
        let natural_thin = RoofDef {
            name: "RockThin".into(),
            is_thick: false,
            is_natural: true,
        };
        let constructed = RoofDef {
            name: "Constructed".into(),
            is_thick: false,
            is_natural: false,
        };

        let p = classify_roof(&thick);
        assert_eq!(p.failure_mode, FailureMode::Frangible, "Thick roofs chip, not deflect");
        assert_eq!(p.density, GRANITE_DENSITY);
        assert_eq!(p.hardness, GRANITE_HARDNESS);

        assert_eq!(classify_roof(&natural_thin).failure_mode, FailureMode::Frangible);

        let p = classify_roof(&constructed);
        assert_eq!(p.failure_mode, FailureMode::Malleable);
        assert_eq!(p.density, STEEL_DENSITY);
    }

    #[test]
    fn test_water_is_liquid() {
        let db = make_defs();
        let model = MaterialModel::new(&db);
        let p = model.classify(
            MaterialSubject::Terrain(db.terrain("WaterShallow").unwrap()),
            &mut rng(),
        );
        assert_eq!(p.failure_mode, FailureMode::Liquid);
        assert_eq!(p.hardness, 0.0);
        assert_eq!(p.density, 1.0);
    }

    #[test]
    fn test_generic_loose_soil() {
        let db = make_defs();
        let model = MaterialModel::new(&db);
        let p = model.classify(MaterialSubject::Terrain(db.terrain("Soil").unwrap()), &mut rng());
        assert_eq!(p.failure_mode, FailureMode::Frangible);
        assert_eq!(p.density, 1.4);
        assert_eq!(p.hardness, 0.2);
    }

    #[test]
    fn test_loose_ground_sub_cases() {
        let db = make_defs();
        let model = MaterialModel::new(&db);
        let cases = [
            ("Mud", WET_SOIL_DENSITY, WET_SOIL_HARDNESS),
            ("Ice", ICY_GROUND_DENSITY, ICY_GROUND_HARDNESS),
            ("SoilRich", CLAY_DENSITY, CLAY_HARDNESS),
            ("Sand", SAND_DENSITY, SAND_HARDNESS),
        ];
        for (name, density, hardness) in cases {
            let p = model.classify(MaterialSubject::Terrain(db.terrain(name).unwrap()), &mut rng());
            assert_eq!(p.failure_mode, FailureMode::Frangible, "{name}");
            assert_eq!(p.density, density, "{name}");
            assert_eq!(p.hardness, hardness, "{name}");
        }
    }

    #[test]
    fn test_concrete_is_mostly_frangible() {
        let db = make_defs();
        let model = MaterialModel::new(&db);
        let concrete = db.terrain("Concrete").unwrap();
        let mut r = ChaCha8Rng::seed_from_u64(2024);

        let trials = 2000;
        let mut frangible = 0;
        for _ in 0..trials {
            let p = model.classify(MaterialSubject::Terrain(concrete), &mut r);
            assert_eq!(p.density, CONCRETE_DENSITY);
            assert_eq!(p.hardness, CONCRETE_HARDNESS);
            match p.failure_mode {
                FailureMode::Frangible => frangible += 1,
                FailureMode::Malleable => {}
                other => panic!("Concrete resolved to {other:?}"),
            }
        }
        let fraction = frangible as f64 / trials as f64;
        assert!(
            (0.75..=0.85).contains(&fraction),
            "Frangible fraction {fraction} should be near 0.8"
        );
    }

    #[test]
    fn test_rocky_scatter_uses_concrete_rule() {
        let db = make_defs();
        let model = MaterialModel::new(&db);
        let p = model.classify(
            MaterialSubject::Terrain(db.terrain("RoughStone").unwrap()),
            &mut rng(),
        );
        assert_eq!(p.density, CONCRETE_DENSITY);
        assert!(matches!(
            p.failure_mode,
            FailureMode::Frangible | FailureMode::Malleable
        ));
    }

    #[test]
    fn test_concrete_is_reproducible_with_same_seed() {
        let db = make_defs();
        let model = MaterialModel::new(&db);
        let concrete = db.terrain("Concrete").unwrap();
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..50 {
            assert_eq!(
                model.classify(MaterialSubject::Terrain(concrete), &mut a),
                model.classify(MaterialSubject::Terrain(concrete), &mut b)
            );
        }
    }

    #[test]
    fn test_floor_uses_cost_list_material() {
        let db = make_defs();
        let model = MaterialModel::new(&db);
        let p = model.classify(
            MaterialSubject::Terrain(db.terrain("WoodFloor").unwrap()),
            &mut rng(),
        );
        assert_eq!(p.failure_mode, FailureMode::Frangible);
        assert_eq!(p.density, WOODY_DENSITY);
    }

    #[test]
    fn test_dries_to_and_burned_from() {
        let db = make_defs();
        let model = MaterialModel::new(&db);

        let wet = model.classify(
            MaterialSubject::Terrain(db.terrain("WetPlanks").unwrap()),
            &mut rng(),
        );
        assert_eq!(wet.density, WOODY_DENSITY, "Wet planks behave like the dry floor");

        let burned = model.classify(
            MaterialSubject::Terrain(db.terrain("BurnedFloor").unwrap()),
            &mut rng(),
        );
        assert_eq!(burned.density, WOODY_DENSITY, "Burned floor behaves like the carpet floor");
    }

    #[test]
    fn test_unmatched_terrain_is_unyielding() {
        let db = make_defs();
        let model = MaterialModel::new(&db);
        let p = model.classify(
            MaterialSubject::Terrain(db.terrain("Bedrock").unwrap()),
            &mut rng(),
        );
        assert_eq!(p.failure_mode, FailureMode::Unyielding);
    }

    #[test]
    fn test_unknown_reference_is_unyielding() {
        let mut db = make_defs();
        db.add_thing(ThingDef {
            name: "GhostWall".into(),
            stuff_props: None,
            made_from: Some("Unobtainium".into()),
            cost_list: vec![],
        });
        let model = MaterialModel::new(&db);
        let p = model.classify(
            MaterialSubject::Thing(db.thing("GhostWall").unwrap()),
            &mut rng(),
        );
        assert_eq!(p.failure_mode, FailureMode::Unyielding);
    }

    #[test]
    fn test_classification_is_pure() {
        let db = make_defs();
        let model = MaterialModel::new(&db);
        for name in ["Soil", "Mud", "WaterShallow", "WoodFloor", "BurnedFloor", "Bedrock"] {
            let def = db.terrain(name).unwrap();
            let a = model.classify(MaterialSubject::Terrain(def), &mut ChaCha8Rng::seed_from_u64(1));
            let b = model.classify(MaterialSubject::Terrain(def), &mut ChaCha8Rng::seed_from_u64(2));
            assert_eq!(a.density.to_bits(), b.density.to_bits(), "{name}");
            assert_eq!(a.hardness.to_bits(), b.hardness.to_bits(), "{name}");
            assert_eq!(a.failure_mode, b.failure_mode, "{name}");
        }
    }

    /// Chain T0 → T1 → … → T{len-1} via dries_to, ending in loose soil.
    fn make_chain(len: usize) -> DefDatabase {
        let mut db = DefDatabase::new();
        for i in 0..len - 1 {
            db.add_terrain(TerrainDef {
                dries_to: Some(format!("T{}", i + 1)),
                ..terrain(&format!("T{i}"), &[])
            });
        }
        db.add_terrain(terrain(&format!("T{}", len - 1), &[TerrainTag::Diggable]));
        db
    }

    #[test]
    fn test_short_chain_resolves() {
        let db = make_chain(4);
        let model = MaterialModel::new(&db);
        let p = model.classify(MaterialSubject::Terrain(db.terrain("T0").unwrap()), &mut rng());
        assert_eq!(p.failure_mode, FailureMode::Frangible);
        assert_eq!(p.density, LOOSE_SOIL_DENSITY);
    }

    #[test]
    fn test_long_chain_is_capped() {
        let db = make_chain(12);
        let model = MaterialModel::new(&db);
        let p = model.classify(MaterialSubject::Terrain(db.terrain("T0").unwrap()), &mut rng());
        assert_eq!(p.failure_mode, FailureMode::Unyielding);
    }

    #[test]
    fn test_chain_at_depth_cap_resolves() {
        // Six defs, five hops: the last def sits exactly at the cap.
        let db = make_chain(MAX_CLASSIFY_DEPTH + 1);
        let model = MaterialModel::new(&db);
        let p = model.classify(MaterialSubject::Terrain(db.terrain("T0").unwrap()), &mut rng());
        assert_eq!(p.failure_mode, FailureMode::Frangible);
        assert_eq!(p.density, LOOSE_SOIL_DENSITY);
    }

    #[test]
    fn test_chain_one_past_depth_cap_falls_back() {
        let db = make_chain(MAX_CLASSIFY_DEPTH + 2);
        let model = MaterialModel::new(&db);
        let p = model.classify(MaterialSubject::Terrain(db.terrain("T0").unwrap()), &mut rng());
        assert_eq!(p.failure_mode, FailureMode::Unyielding);
        assert_eq!(p.density, GRANITE_DENSITY);
        assert_eq!(p.hardness, GRANITE_HARDNESS);
    }

    #[test]
    fn test_cycle_terminates() {
        let mut db = DefDatabase::new();
        db.add_terrain(TerrainDef {
            dries_to: Some("B".into()),
            ..terrain("A", &[])
        });
        db.add_terrain(TerrainDef {
            dries_to: Some("A".into()),
            ..terrain("B", &[])
        });
        // Self-burning terrain
        db.add_terrain(TerrainDef {
            burned_def: Some("Ash".into()),
            ..terrain("Ash", &[])
        });
        db.add_thing(ThingDef {
            name: "Loop".into(),
            stuff_props: None,
            made_from: Some("Loop".into()),
            cost_list: vec![],
        });

        let model = MaterialModel::new(&db);
        let a = model.classify(MaterialSubject::Terrain(db.terrain("A").unwrap()), &mut rng());
        assert_eq!(a.failure_mode, FailureMode::Unyielding);
        let ash = model.classify(MaterialSubject::Terrain(db.terrain("Ash").unwrap()), &mut rng());
        assert_eq!(ash.failure_mode, FailureMode::Unyielding);
        let lp = model.classify(MaterialSubject::Thing(db.thing("Loop").unwrap()), &mut rng());
        assert_eq!(lp.failure_mode, FailureMode::Unyielding);
    }

    #[test]
    fn test_custom_depth_cap() {
        let db = make_chain(4);
        let model = MaterialModel::new(&db).with_max_depth(1);
        let p = model.classify(MaterialSubject::Terrain(db.terrain("T0").unwrap()), &mut rng());
        assert_eq!(p.failure_mode, FailureMode::Unyielding);
    }
}
