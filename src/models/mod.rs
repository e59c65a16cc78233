use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod boxes;
pub mod garden;
pub mod plant;
pub mod request;

/// Convenience alias for a two-dimensional grid.
pub type Matrix<T> = Vec<Vec<T>>;

/// A zero-based (row, col) position within one box's cell grid.
/// Row 0 is the north edge, column 0 the west edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The rectangular area a plant occupies once placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Footprint {
    pub rows: usize,
    pub cols: usize,
}

impl Footprint {
    pub const SINGLE: Footprint = Footprint { rows: 1, cols: 1 };

    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of squares the footprint covers.
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }
}
