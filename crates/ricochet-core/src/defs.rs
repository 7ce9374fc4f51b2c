//! Static entity definitions consulted by material classification.
//!
//! Definitions are authored by the host (usually loaded from JSON) and never
//! mutated by the impact pipeline. References between definitions are by
//! name, so configuration data can form cycles; consumers must cap the number
//! of hops they follow.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{ScatterKind, StuffCategory, TerrainTag};

fn one() -> f64 {
    1.0
}

/// Combat stat values of a raw material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StuffStats {
    #[serde(default)]
    pub armor_sharp: f64,
    #[serde(default)]
    pub armor_blunt: f64,
    #[serde(default)]
    pub armor_heat: f64,
    #[serde(default = "one")]
    pub sharp_damage_multiplier: f64,
    #[serde(default = "one")]
    pub blunt_damage_multiplier: f64,
}

impl Default for StuffStats {
    fn default() -> Self {
        Self {
            armor_sharp: 0.0,
            armor_blunt: 0.0,
            armor_heat: 0.0,
            sharp_damage_multiplier: 1.0,
            blunt_damage_multiplier: 1.0,
        }
    }
}

/// Present on thing definitions that are themselves raw materials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StuffProps {
    pub category: StuffCategory,
    #[serde(default)]
    pub stats: StuffStats,
}

/// Definition of a solid object or raw material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThingDef {
    pub name: String,
    /// Set when this def is a raw material (steel, granite blocks, cloth...).
    #[serde(default)]
    pub stuff_props: Option<StuffProps>,
    /// Material a stuffable object is built from (a wall made of steel).
    #[serde(default)]
    pub made_from: Option<String>,
    /// Thing defs consumed to build this object.
    #[serde(default)]
    pub cost_list: Vec<String>,
}

impl ThingDef {
    pub fn is_raw_material(&self) -> bool {
        self.stuff_props.is_some()
    }
}

/// Definition of a floor terrain type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainDef {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<TerrainTag>,
    #[serde(default)]
    pub scatter: Option<ScatterKind>,
    #[serde(default)]
    pub fertility: f64,
    /// Terrain this one turns into when it dries (mud → soil).
    #[serde(default)]
    pub dries_to: Option<String>,
    /// Terrain this one turns into when burned.
    #[serde(default)]
    pub burned_def: Option<String>,
    /// Thing defs consumed to lay this floor.
    #[serde(default)]
    pub cost_list: Vec<String>,
}

impl TerrainDef {
    pub fn has_tag(&self, tag: TerrainTag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Definition of a roof type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoofDef {
    pub name: String,
    #[serde(default)]
    pub is_thick: bool,
    #[serde(default)]
    pub is_natural: bool,
}

/// Flat list form used on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefList {
    #[serde(default)]
    pub things: Vec<ThingDef>,
    #[serde(default)]
    pub terrains: Vec<TerrainDef>,
    #[serde(default)]
    pub roofs: Vec<RoofDef>,
}

/// Read-only definition tables keyed by def name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "DefList", into = "DefList")]
pub struct DefDatabase {
    things: BTreeMap<String, ThingDef>,
    terrains: BTreeMap<String, TerrainDef>,
    roofs: BTreeMap<String, RoofDef>,
}

impl From<DefList> for DefDatabase {
    fn from(list: DefList) -> Self {
        let mut db = DefDatabase::default();
        for def in list.things {
            db.add_thing(def);
        }
        for def in list.terrains {
            db.add_terrain(def);
        }
        for def in list.roofs {
            db.add_roof(def);
        }
        db
    }
}

impl From<DefDatabase> for DefList {
    fn from(db: DefDatabase) -> Self {
        Self {
            things: db.things.into_values().collect(),
            terrains: db.terrains.into_values().collect(),
            roofs: db.roofs.into_values().collect(),
        }
    }
}

impl DefDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Insert or replace a thing def.
    pub fn add_thing(&mut self, def: ThingDef) {
        self.things.insert(def.name.clone(), def);
    }

    pub fn add_terrain(&mut self, def: TerrainDef) {
        self.terrains.insert(def.name.clone(), def);
    }

    pub fn add_roof(&mut self, def: RoofDef) {
        self.roofs.insert(def.name.clone(), def);
    }

    pub fn thing(&self, name: &str) -> Option<&ThingDef> {
        self.things.get(name)
    }

    pub fn terrain(&self, name: &str) -> Option<&TerrainDef> {
        self.terrains.get(name)
    }

    pub fn roof(&self, name: &str) -> Option<&RoofDef> {
        self.roofs.get(name)
    }

    /// The first terrain (by name) that burns into `name`, i.e. the
    /// unburned form of a burned terrain.
    pub fn terrain_burning_into(&self, name: &str) -> Option<&TerrainDef> {
        self.terrains
            .values()
            .find(|t| t.burned_def.as_deref() == Some(name))
    }
}
