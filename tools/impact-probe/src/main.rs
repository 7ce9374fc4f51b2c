//! impact-probe: run ricochet scenarios from JSON and inspect material lookups.
//!
//! Usage:
//!   impact-probe run --scenario range.json --seed 7
//!   impact-probe classify --scenario range.json --terrain Concrete
//!   impact-probe sample --output range.json

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ricochet_core::constants::STEEL_DENSITY;
use ricochet_core::defs::{DefDatabase, RoofDef, StuffProps, StuffStats, TerrainDef, ThingDef};
use ricochet_core::enums::{StuffCategory, TerrainTag};
use ricochet_core::environment::RoofCell;
use ricochet_core::events::{ImpactEvent, ImpactedEntity, ThingRef};
use ricochet_core::types::{direction_from_heading, Bounds, Position, ProjectileState};
use ricochet_geometry::{ImpactMap, MapHeader};
use ricochet_material::{MaterialModel, MaterialSubject};
use ricochet_sim::{RicochetConfig, RicochetEngine};

const DEFAULT_LOG_FILTER: &str = "info";

// ============================================================================
// CLI Argument Parsing
// ============================================================================

#[derive(Parser)]
#[command(author, version, about = "Ricochet scenario probe", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve every impact in a scenario, one JSON response per line
    Run {
        #[arg(long)]
        scenario: PathBuf,
        /// Seed for the randomized material and angle branches
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Engine config; overrides the scenario's own
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the material properties of one terrain def
    Classify {
        #[arg(long)]
        scenario: PathBuf,
        #[arg(long)]
        terrain: String,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Write a small synthetic scenario
    Sample {
        #[arg(long)]
        output: PathBuf,
    },
}

/// Scenario file layout.
#[derive(Serialize, Deserialize)]
struct Scenario {
    defs: DefDatabase,
    map: ImpactMap,
    #[serde(default)]
    impacts: Vec<ImpactEvent>,
    #[serde(default)]
    config: Option<RicochetConfig>,
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match Args::parse().command {
        Command::Run {
            scenario,
            seed,
            config,
        } => cmd_run(&scenario, seed, config.as_deref()),
        Command::Classify {
            scenario,
            terrain,
            seed,
        } => cmd_classify(&scenario, &terrain, seed),
        Command::Sample { output } => cmd_sample(&output),
    }
}

fn load_scenario(path: &Path) -> Result<Scenario> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid scenario {}", path.display()))
}

fn load_config(path: &Path) -> Result<RicochetConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    RicochetConfig::from_json_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

// --- Run command ---

fn cmd_run(scenario_path: &Path, seed: u64, config_path: Option<&Path>) -> Result<()> {
    let scenario = load_scenario(scenario_path)?;
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => scenario.config.clone().unwrap_or_default(),
    };

    let engine = RicochetEngine::new(config);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut ricochets = 0usize;
    for event in &scenario.impacts {
        let response = engine.handle_impact(event, Some(&scenario.map), &scenario.defs, &mut rng);
        if response.outcome.is_ricochet() {
            ricochets += 1;
        }
        serde_json::to_writer(&mut out, &response).context("failed to encode response")?;
        writeln!(out)?;
    }
    out.flush()?;

    info!(
        impacts = scenario.impacts.len(),
        ricochets,
        seed,
        "scenario resolved"
    );
    Ok(())
}

// --- Classify command ---

fn cmd_classify(scenario_path: &Path, terrain: &str, seed: u64) -> Result<()> {
    let scenario = load_scenario(scenario_path)?;
    let Some(def) = scenario.defs.terrain(terrain) else {
        bail!("terrain def {terrain:?} not found in {}", scenario_path.display());
    };

    let max_depth = scenario.config.unwrap_or_default().max_classify_depth;
    let model = MaterialModel::new(&scenario.defs).with_max_depth(max_depth);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let material = model.classify(MaterialSubject::Terrain(def), &mut rng);

    println!("{}", serde_json::to_string(&material)?);
    Ok(())
}

// --- Sample command ---

fn cmd_sample(output: &Path) -> Result<()> {
    let scenario = sample_scenario();
    let json = serde_json::to_string_pretty(&scenario)?;
    fs::write(output, json).with_context(|| format!("failed to write {}", output.display()))?;
    info!(
        path = %output.display(),
        impacts = scenario.impacts.len(),
        "sample scenario written"
    );
    Ok(())
}

fn terrain(name: &str, tags: Vec<TerrainTag>) -> TerrainDef {
    TerrainDef {
        name: name.into(),
        tags,
        scatter: None,
        fertility: 0.5,
        dries_to: None,
        burned_def: None,
        cost_list: vec![],
    }
}

/// 16×16 range of 1 m cells: soil with a pond, a concrete pad, a rock
/// overhang and one steel wall, hit at a spread of angles.
fn sample_scenario() -> Scenario {
    let mut defs = DefDatabase::new();
    defs.add_thing(ThingDef {
        name: "Steel".into(),
        stuff_props: Some(StuffProps {
            category: StuffCategory::Metallic,
            stats: StuffStats {
                armor_sharp: 0.9,
                armor_blunt: 0.45,
                ..Default::default()
            },
        }),
        made_from: None,
        cost_list: vec![],
    });
    defs.add_thing(ThingDef {
        name: "Wall".into(),
        stuff_props: None,
        made_from: Some("Steel".into()),
        cost_list: vec![],
    });
    defs.add_terrain(terrain("Soil", vec![TerrainTag::Diggable]));
    defs.add_terrain(terrain("WaterShallow", vec![TerrainTag::Water]));
    defs.add_terrain(terrain("Concrete", vec![TerrainTag::Concrete]));
    defs.add_roof(RoofDef {
        name: "RoofRockThick".into(),
        is_thick: true,
        is_natural: true,
    });

    let header = MapHeader {
        origin_x: 0.0,
        origin_y: 0.0,
        cell_size: 1.0,
        width: 16,
        height: 16,
    };
    let mut map = ImpactMap::uniform(header, "Soil");
    for row in 2..5 {
        for col in 2..5 {
            map.set_terrain(row, col, "WaterShallow");
        }
    }
    map.set_terrain(8, 8, "Concrete");
    map.set_roof(
        12,
        12,
        Some(RoofCell {
            roof: "RoofRockThick".into(),
            height: 3.0,
        }),
    );
    map.place_thing(1, Bounds::cell(6.0, 10.0, 1.0, 2.5));

    let round = ProjectileState {
        speed: 400.0,
        density: STEEL_DENSITY,
        hardness: 2.0,
        diameter_mm: 7.62,
        mass_g: 10.0,
    };
    let mut impacts = Vec::new();
    let mut push = |impacted: ImpactedEntity, position: Position, heading: f64, vertical_deg: f64| {
        let projectile = impacts.len() as u64 + 1;
        impacts.push(ImpactEvent {
            projectile,
            impacted,
            position,
            direction: direction_from_heading(heading, vertical_deg.to_radians()),
            state: round,
        });
    };
    for deg in [2.0, 5.0, 10.0, 20.0, 40.0] {
        push(ImpactedEntity::None, Position::new(10.5, 1.5, 0.0), 90.0, -deg);
        push(ImpactedEntity::None, Position::new(3.5, 3.5, 0.0), 0.0, -deg);
        push(ImpactedEntity::None, Position::new(8.5, 8.5, 0.0), 45.0, -deg);
    }
    push(ImpactedEntity::None, Position::new(12.5, 12.5, 2.9), 0.0, 10.0);
    push(
        ImpactedEntity::SolidObject(ThingRef {
            id: 1,
            def: "Wall".into(),
        }),
        Position::new(7.0, 10.5, 1.0),
        355.0,
        0.0,
    );

    Scenario {
        defs,
        map,
        impacts,
        config: Some(RicochetConfig::default()),
    }
}
