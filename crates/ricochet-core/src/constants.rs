//! Material tables and ricochet tuning parameters.

// --- Stuff categories ---

/// Density of metallic stuff (g/cm³).
pub const METALLIC_DENSITY: f64 = 7.8;

/// Hardness per point of summed sharp + blunt armor for metals.
pub const METALLIC_HARDNESS_PER_ARMOR: f64 = 60.0;

pub const WOODY_DENSITY: f64 = 0.8;
pub const WOODY_HARDNESS_PER_ARMOR: f64 = 15.0;

pub const STONY_DENSITY: f64 = 4.0;
pub const STONY_HARDNESS_PER_ARMOR: f64 = 45.0;

pub const FABRIC_DENSITY: f64 = 0.3;
pub const FABRIC_HARDNESS_PER_ARMOR: f64 = 4.0;

pub const LEATHERY_DENSITY: f64 = 1.0;
pub const LEATHERY_HARDNESS_PER_ARMOR: f64 = 10.0;

// --- Roofs ---

/// Granite-like constants for thick or natural roofs.
pub const GRANITE_DENSITY: f64 = 2.7;
pub const GRANITE_HARDNESS: f64 = 6.5;

/// Steel-like constants for thin artificial roofs: 60 × (0.9 + 0.45).
pub const STEEL_DENSITY: f64 = 7.8;
pub const STEEL_HARDNESS: f64 = 81.0;

// --- Terrain ---

pub const WATER_DENSITY: f64 = 1.0;

pub const WET_SOIL_DENSITY: f64 = 1.9;
pub const WET_SOIL_HARDNESS: f64 = 0.1;

pub const ICY_GROUND_DENSITY: f64 = 0.93;
pub const ICY_GROUND_HARDNESS: f64 = 8.7;

/// Fertility at or above which loose ground counts as clay-rich.
pub const CLAY_FERTILITY_THRESHOLD: f64 = 1.2;
pub const CLAY_DENSITY: f64 = 1.7;
pub const CLAY_HARDNESS: f64 = 0.01;

pub const SAND_DENSITY: f64 = 1.6;
pub const SAND_HARDNESS: f64 = 0.05;

pub const LOOSE_SOIL_DENSITY: f64 = 1.4;
pub const LOOSE_SOIL_HARDNESS: f64 = 0.2;

pub const CONCRETE_DENSITY: f64 = 2.4;
pub const CONCRETE_HARDNESS: f64 = 10.0;

/// Chance that concrete or rocky ground breaks up rather than deforms.
pub const CONCRETE_FRANGIBLE_CHANCE: f64 = 0.8;

/// Maximum definition hops followed while classifying one entity.
pub const MAX_CLASSIFY_DEPTH: usize = 5;

// --- Geometry ---

/// Height tolerance (m) for treating an impact as ground level.
pub const GROUND_EPSILON: f64 = 0.05;

/// Tolerance (m) below an object's top bound still counted as a top hit.
pub const TOP_EPSILON: f64 = 0.01;

/// Rotation applied to the center-to-impact vector before face quantization.
pub const FACE_QUANTIZE_OFFSET_DEG: f64 = 45.0;

// --- Malleable ricochet ---

/// Linear coefficient of the malleable critical-angle quadratic.
pub const MALLEABLE_SHAPE_FACTOR: f64 = 0.5;

/// Empirical ballistic-limit coefficient.
pub const V50_COEFFICIENT: f64 = 11.9;

/// GPa → psi.
pub const GPA_TO_PSI: f64 = 145_037.7;

/// Projectile length over radius used by the ballistic-limit relation.
pub const PROJECTILE_LENGTH_FACTOR: f64 = 3.0;

/// Exit angle off malleable surfaces (degrees).
pub const MALLEABLE_EXIT_ANGLE_DEG: f64 = 80.0;

// --- Unyielding ricochet ---

/// Exit angle off unyielding surfaces (degrees).
pub const UNYIELDING_EXIT_ANGLE_DEG: f64 = 2.0;

// --- Frangible / liquid ricochet ---

/// Lift coefficient of the frangible critical-angle relation.
pub const FRANGIBLE_LIFT_FACTOR: f64 = 0.5;

/// Hardness (GPa) at which the hardness energy fraction reaches one half.
pub const FRANGIBLE_HARDNESS_REFERENCE: f64 = 1.0;

/// Scale of the gravity × diameter sink term.
pub const FRANGIBLE_SINK_FACTOR: f64 = 0.05;

/// Standard gravity (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Blended law: β = α (BLEND_BASE − BLEND_SLOPE · α/θc).
pub const BLEND_BASE: f64 = 2.5;
pub const BLEND_SLOPE: f64 = 1.5;

/// Legacy law: incidence ratio above which the exit angle is randomized.
pub const LEGACY_NEAR_CRITICAL_RATIO: f64 = 0.75;
