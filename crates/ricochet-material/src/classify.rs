//! Material classification.
//!
//! Derives {density, hardness, failure mode} for whatever was hit from the
//! static defs. Pure apart from the concrete coin flip, which draws from the
//! caller's random source. Definition references are followed by name and the
//! number of hops is capped, so cyclic configuration data still terminates.

use rand::Rng;
use tracing::{debug, warn};

use ricochet_core::constants::*;
use ricochet_core::defs::{DefDatabase, RoofDef, TerrainDef, ThingDef};
use ricochet_core::enums::{FailureMode, ScatterKind, TerrainTag};
use ricochet_core::outcome::MaterialProperties;

use crate::categories::stuff_properties;

/// An entity whose material is being classified.
#[derive(Debug, Clone, Copy)]
pub enum MaterialSubject<'a> {
    Thing(&'a ThingDef),
    Terrain(&'a TerrainDef),
    Roof(&'a RoofDef),
}

/// Conservative default when nothing else matches: hard and unyielding.
pub fn unyielding_fallback() -> MaterialProperties {
    MaterialProperties::new(GRANITE_DENSITY, GRANITE_HARDNESS, FailureMode::Unyielding)
}

/// Material classifier bound to a def database.
pub struct MaterialModel<'a> {
    defs: &'a DefDatabase,
    max_depth: usize,
}

impl<'a> MaterialModel<'a> {
    pub fn new(defs: &'a DefDatabase) -> Self {
        Self {
            defs,
            max_depth: MAX_CLASSIFY_DEPTH,
        }
    }

    /// Override the maximum number of definition hops.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Classify one subject.
    pub fn classify<R: Rng + ?Sized>(
        &self,
        subject: MaterialSubject<'_>,
        rng: &mut R,
    ) -> MaterialProperties {
        self.classify_at(subject, rng, 0)
    }

    fn classify_at<R: Rng + ?Sized>(
        &self,
        subject: MaterialSubject<'_>,
        rng: &mut R,
        depth: usize,
    ) -> MaterialProperties {
        if depth > self.max_depth {
            warn!(depth, ?subject, "material reference chain too deep, assuming unyielding");
            return unyielding_fallback();
        }

        match subject {
            MaterialSubject::Thing(def) => self.classify_thing(def, rng, depth),
            MaterialSubject::Terrain(def) => self.classify_terrain(def, rng, depth),
            MaterialSubject::Roof(def) => classify_roof(def),
        }
    }

    fn classify_thing<R: Rng + ?Sized>(
        &self,
        def: &ThingDef,
        rng: &mut R,
        depth: usize,
    ) -> MaterialProperties {
        if let Some(stuff) = &def.made_from {
            return self.follow_thing(stuff, rng, depth);
        }

        if let Some(props) = &def.stuff_props {
            return stuff_properties(props);
        }

        if let Some(material) = self.first_raw_material(&def.cost_list) {
            return self.classify_at(MaterialSubject::Thing(material), rng, depth + 1);
        }

        debug!(thing = %def.name, "no material information, assuming unyielding");
        unyielding_fallback()
    }

    /// Ordered terrain rule chain; first match wins.
    fn classify_terrain<R: Rng + ?Sized>(
        &self,
        def: &TerrainDef,
        rng: &mut R,
        depth: usize,
    ) -> MaterialProperties {
        // 1. Water
        if def.has_tag(TerrainTag::Water)
            || def.has_tag(TerrainTag::SplashCapable)
            || def.has_tag(TerrainTag::FluidTraversable)
        {
            return MaterialProperties::new(WATER_DENSITY, 0.0, FailureMode::Liquid);
        }

        // 2. Loose ground
        if is_loose_ground(def) {
            return loose_ground_properties(def);
        }

        // 3. Concrete and rocky ground
        if def.has_tag(TerrainTag::Concrete) || def.scatter == Some(ScatterKind::Rocky) {
            let mode = if rng.gen_bool(CONCRETE_FRANGIBLE_CHANCE) {
                FailureMode::Frangible
            } else {
                FailureMode::Malleable
            };
            return MaterialProperties::new(CONCRETE_DENSITY, CONCRETE_HARDNESS, mode);
        }

        // 4. Built floors take the material they were laid with
        if let Some(material) = self.first_raw_material(&def.cost_list) {
            return self.classify_at(MaterialSubject::Thing(material), rng, depth + 1);
        }

        // 5. Wet terrain behaves like what it dries to
        if let Some(dry) = &def.dries_to {
            return self.follow_terrain(dry, rng, depth);
        }

        // 6. Burned terrain behaves like what it was before burning
        if let Some(unburned) = self.defs.terrain_burning_into(&def.name) {
            return self.classify_at(MaterialSubject::Terrain(unburned), rng, depth + 1);
        }

        debug!(terrain = %def.name, "no terrain rule matched, assuming unyielding");
        unyielding_fallback()
    }

    fn follow_thing<R: Rng + ?Sized>(
        &self,
        name: &str,
        rng: &mut R,
        depth: usize,
    ) -> MaterialProperties {
        match self.defs.thing(name) {
            Some(def) => self.classify_at(MaterialSubject::Thing(def), rng, depth + 1),
            None => {
                warn!(thing = name, "unknown thing def referenced, assuming unyielding");
                unyielding_fallback()
            }
        }
    }

    fn follow_terrain<R: Rng + ?Sized>(
        &self,
        name: &str,
        rng: &mut R,
        depth: usize,
    ) -> MaterialProperties {
        match self.defs.terrain(name) {
            Some(def) => self.classify_at(MaterialSubject::Terrain(def), rng, depth + 1),
            None => {
                warn!(terrain = name, "unknown terrain def referenced, assuming unyielding");
                unyielding_fallback()
            }
        }
    }

    fn first_raw_material(&self, cost_list: &[String]) -> Option<&'a ThingDef> {
        let defs = self.defs;
        cost_list
            .iter()
            .filter_map(|name| defs.thing(name))
            .find(|def| def.is_raw_material())
    }
}

/// Thick or natural roofs chip like rock; thin artificial roofing deforms.
pub fn classify_roof(def: &RoofDef) -> MaterialProperties {
    if def.is_thick || def.is_natural {
        MaterialProperties::new(GRANITE_DENSITY, GRANITE_HARDNESS, FailureMode::Frangible)
    } else {
        MaterialProperties::new(STEEL_DENSITY, STEEL_HARDNESS, FailureMode::Malleable)
    }
}

fn is_loose_ground(def: &TerrainDef) -> bool {
    def.has_tag(TerrainTag::Diggable)
        || def.has_tag(TerrainTag::LooseSoil)
        || def.has_tag(TerrainTag::DirtResidue)
        || def.has_tag(TerrainTag::SandResidue)
}

fn loose_ground_properties(def: &TerrainDef) -> MaterialProperties {
    let (density, hardness) = if def.dries_to.is_some() {
        (WET_SOIL_DENSITY, WET_SOIL_HARDNESS)
    } else if def.scatter == Some(ScatterKind::Icy) {
        (ICY_GROUND_DENSITY, ICY_GROUND_HARDNESS)
    } else if def.fertility >= CLAY_FERTILITY_THRESHOLD {
        (CLAY_DENSITY, CLAY_HARDNESS)
    } else if def.has_tag(TerrainTag::SandResidue) {
        (SAND_DENSITY, SAND_HARDNESS)
    } else {
        (LOOSE_SOIL_DENSITY, LOOSE_SOIL_HARDNESS)
    };
    MaterialProperties::new(density, hardness, FailureMode::Frangible)
}
