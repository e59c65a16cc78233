use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Footprint;

/// Seeds or seedlings per square, split by direction.
/// A 1×1 carrot square holds 4×4 = 16 plants; a tomato holds 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct YieldDensity {
    pub plants_per_row: usize,
    pub plants_per_col: usize,
}

impl YieldDensity {
    pub fn new(plants_per_row: usize, plants_per_col: usize) -> Self {
        Self {
            plants_per_row,
            plants_per_col,
        }
    }

    pub fn plants_per_square(&self) -> usize {
        self.plants_per_row * self.plants_per_col
    }
}

impl Default for YieldDensity {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Static planting attributes for one plant variety.
/// Loaded once into the catalog and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantAttributes {
    pub name: String,
    pub footprint: Footprint,
    /// Plants whose adjacency is encouraged. Stored one-directional per plant.
    pub companions: Vec<String>,
    /// Plants whose adjacency is discouraged. Stored one-directional per plant.
    pub enemies: Vec<String>,
    /// Trellised plants are placed as full-row strips in the north row of boxes.
    pub trellised: bool,
    pub yield_density: YieldDensity,
}

impl PlantAttributes {
    /// True when the footprint takes more than one square in both directions.
    /// Trellised plants are excluded: the trellis phase owns them outright.
    pub fn is_large(&self) -> bool {
        self.footprint.rows > 1 && self.footprint.cols > 1 && !self.trellised
    }
}
