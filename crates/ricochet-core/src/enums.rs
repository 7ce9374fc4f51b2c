//! Enumeration types used throughout the impact pipeline.

use serde::{Deserialize, Serialize};

/// Deformation behavior of an impacted material. Selects the ricochet law.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureMode {
    /// Very hard, non-deformable: bare rock slabs, unclassifiable material.
    #[default]
    Unyielding,
    /// Ductile deformation: metals, thin artificial roofing, leather.
    Malleable,
    /// Brittle or granular breakup: wood, stone, fabric, soil.
    Frangible,
    /// Water-like, no solid resistance.
    Liquid,
}

/// Material family used to derive density and hardness from stat values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StuffCategory {
    Metallic,
    Woody,
    Stony,
    Fabric,
    Leathery,
}

/// Static tags carried by terrain definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainTag {
    Water,
    SplashCapable,
    FluidTraversable,
    Diggable,
    LooseSoil,
    /// Leaves dirt-like residue when walked on.
    DirtResidue,
    /// Leaves sand residue when walked on.
    SandResidue,
    Concrete,
}

/// Scatter pattern drawn over a terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScatterKind {
    Icy,
    Rocky,
    Other,
}

/// Coarse class of the surface that was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactClass {
    Terrain,
    Roof,
    SolidObjectFace,
}

/// Result of a single impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BounceKind {
    Penetrate,
    Ricochet,
    Fragment,
}

/// Exit-angle law for frangible and liquid surfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleModel {
    /// Deterministic blend: the exit angle diverges from incidence as the
    /// incident angle approaches the critical angle.
    #[default]
    Blended,
    /// Specular below the near-critical zone, randomized inside it.
    Legacy,
}

/// Severity of a pipeline diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    Warning,
    Error,
}
