use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::data::catalog::PlantCatalog;
use crate::models::boxes::GardenBox;

/// The whole garden: a `north × west` arrangement of identically sized boxes.
///
/// Boxes are laid out:
///
/// ```text
///             NORTH
///     (0,0)            (0,n)
///            A  B  C
/// WEST                       EAST
///            D  E  F
///     (m,0)            (m,n)
///
///             SOUTH
/// ```
///
/// Trellises sit along the north edge, so only the boxes of row 0 accept
/// trellised plants. Boxes are stored flat in row-major order; `box_index`
/// maps a (row, col) box position to its slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Garden {
    pub north: usize,
    pub west: usize,
    pub box_rows: usize,
    pub box_cols: usize,
    boxes: Vec<GardenBox>,
}

impl Garden {
    pub fn new(north: usize, west: usize, box_rows: usize, box_cols: usize) -> Self {
        let boxes = (0..north * west)
            .map(|_| GardenBox::new(box_rows, box_cols))
            .collect();
        Self {
            north,
            west,
            box_rows,
            box_cols,
            boxes,
        }
    }

    pub fn box_index(&self, row: usize, col: usize) -> usize {
        row * self.west + col
    }

    pub fn box_at(&self, row: usize, col: usize) -> &GardenBox {
        &self.boxes[self.box_index(row, col)]
    }

    pub fn box_mut(&mut self, index: usize) -> &mut GardenBox {
        &mut self.boxes[index]
    }

    /// Final occupancy of every box, in row-major box order.
    pub fn boxes_row_major(&self) -> &[GardenBox] {
        &self.boxes
    }

    /// Flat indices of every box, row-major.
    pub fn all_indices(&self) -> Vec<usize> {
        (0..self.boxes.len()).collect()
    }

    /// Flat indices of the north-most row of boxes, the only row eligible for
    /// trellised plants.
    pub fn north_row_indices(&self) -> Vec<usize> {
        (0..self.west).collect()
    }

    pub fn total_squares(&self) -> usize {
        self.boxes.len() * self.box_rows * self.box_cols
    }

    pub fn empty_squares(&self) -> usize {
        self.boxes.iter().map(|b| b.empty_count()).sum()
    }

    /// Number of occupied squares per plant name across the whole garden.
    pub fn placed_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for gb in &self.boxes {
            for square in gb.squares.iter().flat_map(|row| row.iter()) {
                if let Some(name) = square {
                    *counts.entry(name.clone()).or_insert(0) += 1;
                }
            }
        }
        counts
    }

    /// Seeds or seedlings to buy per plant: occupied squares × the plant's
    /// per-square yield density.
    pub fn seed_summary(&self, catalog: &PlantCatalog) -> HashMap<String, usize> {
        self.placed_counts()
            .into_iter()
            .map(|(name, squares)| {
                let seeds = squares * catalog.seeds_per_square(&name);
                (name, seeds)
            })
            .collect()
    }
}
