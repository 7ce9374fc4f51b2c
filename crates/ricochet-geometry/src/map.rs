//! ImpactMap: a cell grid implementing `ImpactEnvironment`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use ricochet_core::environment::{ImpactEnvironment, RoofCell};
use ricochet_core::types::{Bounds, Position, ThingId};

/// Grid header metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapHeader {
    /// West edge (m).
    pub origin_x: f64,
    /// South edge (m).
    pub origin_y: f64,
    /// Edge length of one square cell (m).
    pub cell_size: f64,
    /// Number of columns (west to east).
    pub width: u32,
    /// Number of rows (south to north).
    pub height: u32,
}

impl MapHeader {
    /// East edge (m).
    pub fn east_x(&self) -> f64 {
        self.origin_x + self.width as f64 * self.cell_size
    }

    /// North edge (m).
    pub fn north_y(&self) -> f64 {
        self.origin_y + self.height as f64 * self.cell_size
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Map cells with per-cell terrain, optional roof and optional ground height,
/// plus the bounds of placed solid objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactMap {
    pub header: MapHeader,
    /// Terrain def names, row-major (south-to-north, west-to-east).
    pub terrain: Vec<String>,
    /// Roof per cell, same layout. Empty means no roofs anywhere.
    #[serde(default)]
    pub roofs: Vec<Option<RoofCell>>,
    /// Ground height per cell (m), same layout. Empty means flat at 0.
    #[serde(default)]
    pub ground: Vec<f64>,
    #[serde(default)]
    pub things: BTreeMap<ThingId, Bounds>,
}

impl ImpactMap {
    /// A roofless, flat map covered by one terrain.
    pub fn uniform(header: MapHeader, terrain: &str) -> Self {
        let cells = header.cell_count();
        Self {
            header,
            terrain: vec![terrain.to_string(); cells],
            roofs: Vec::new(),
            ground: Vec::new(),
            things: BTreeMap::new(),
        }
    }

    /// Convert a map position to (row, col).
    /// Returns None if outside the grid.
    pub fn cell_of(&self, pos: &Position) -> Option<(usize, usize)> {
        let h = &self.header;
        if !pos.is_finite() || h.cell_size <= 0.0 {
            return None;
        }

        let col = (pos.x - h.origin_x) / h.cell_size;
        let row = (pos.y - h.origin_y) / h.cell_size;

        if col < 0.0 || row < 0.0 || col >= h.width as f64 || row >= h.height as f64 {
            return None;
        }

        Some((row.floor() as usize, col.floor() as usize))
    }

    fn index_of(&self, pos: &Position) -> Option<usize> {
        let (row, col) = self.cell_of(pos)?;
        Some(row * self.header.width as usize + col)
    }

    pub fn set_terrain(&mut self, row: usize, col: usize, terrain: &str) {
        let idx = row * self.header.width as usize + col;
        if let Some(cell) = self.terrain.get_mut(idx) {
            *cell = terrain.to_string();
        }
    }

    pub fn set_roof(&mut self, row: usize, col: usize, roof: Option<RoofCell>) {
        let cells = self.header.cell_count();
        if self.roofs.len() != cells {
            self.roofs.resize(cells, None);
        }
        let idx = row * self.header.width as usize + col;
        if let Some(cell) = self.roofs.get_mut(idx) {
            *cell = roof;
        }
    }

    pub fn place_thing(&mut self, id: ThingId, bounds: Bounds) {
        self.things.insert(id, bounds);
    }
}

impl ImpactEnvironment for ImpactMap {
    fn contains(&self, pos: &Position) -> bool {
        self.cell_of(pos).is_some()
    }

    fn ground_height(&self, pos: &Position) -> f64 {
        self.index_of(pos)
            .and_then(|idx| self.ground.get(idx).copied())
            .unwrap_or(0.0)
    }

    fn terrain_at(&self, pos: &Position) -> Option<&str> {
        let idx = self.index_of(pos)?;
        self.terrain.get(idx).map(String::as_str)
    }

    fn roof_at(&self, pos: &Position) -> Option<&RoofCell> {
        let idx = self.index_of(pos)?;
        self.roofs.get(idx)?.as_ref()
    }

    fn bounds_of(&self, thing: ThingId) -> Option<Bounds> {
        self.things.get(&thing).copied()
    }
}
