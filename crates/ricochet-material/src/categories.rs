//! Stuff-category table.
//!
//! Consolidates per-category constants and the hardness formula that turns a
//! raw material's combat stats into a hardness proxy.

use ricochet_core::constants::*;
use ricochet_core::defs::{StuffProps, StuffStats};
use ricochet_core::enums::{FailureMode, StuffCategory};
use ricochet_core::outcome::MaterialProperties;

/// Fixed properties of a stuff category.
pub struct CategoryProfile {
    /// g/cm³.
    pub density: f64,
    pub failure_mode: FailureMode,
}

/// Get the fixed profile for a given category.
pub fn get_profile(category: StuffCategory) -> CategoryProfile {
    match category {
        StuffCategory::Metallic => CategoryProfile {
            density: METALLIC_DENSITY,
            failure_mode: FailureMode::Malleable,
        },
        StuffCategory::Woody => CategoryProfile {
            density: WOODY_DENSITY,
            failure_mode: FailureMode::Frangible,
        },
        StuffCategory::Stony => CategoryProfile {
            density: STONY_DENSITY,
            failure_mode: FailureMode::Frangible,
        },
        StuffCategory::Fabric => CategoryProfile {
            density: FABRIC_DENSITY,
            failure_mode: FailureMode::Frangible,
        },
        StuffCategory::Leathery => CategoryProfile {
            density: LEATHERY_DENSITY,
            failure_mode: FailureMode::Malleable,
        },
    }
}

/// Hardness proxy for a category. Each family weighs the stats differently.
pub fn stuff_hardness(category: StuffCategory, stats: &StuffStats) -> f64 {
    let hardness = match category {
        StuffCategory::Metallic => {
            METALLIC_HARDNESS_PER_ARMOR * (stats.armor_sharp + stats.armor_blunt)
        }
        StuffCategory::Woody => {
            WOODY_HARDNESS_PER_ARMOR
                * (stats.armor_sharp + stats.armor_blunt)
                * stats.blunt_damage_multiplier
        }
        StuffCategory::Stony => {
            STONY_HARDNESS_PER_ARMOR * (stats.armor_sharp + 0.5 * stats.armor_blunt)
        }
        StuffCategory::Fabric => FABRIC_HARDNESS_PER_ARMOR * (stats.armor_sharp + stats.armor_heat),
        StuffCategory::Leathery => {
            LEATHERY_HARDNESS_PER_ARMOR
                * (stats.armor_sharp + stats.armor_blunt + stats.armor_heat)
                * stats.sharp_damage_multiplier
        }
    };
    hardness.max(0.0)
}

/// Material properties of a raw material.
pub fn stuff_properties(props: &StuffProps) -> MaterialProperties {
    let profile = get_profile(props.category);
    MaterialProperties::new(
        profile.density,
        stuff_hardness(props.category, &props.stats),
        profile.failure_mode,
    )
}
