use serde::{Deserialize, Serialize};

use crate::models::{Coordinate, Footprint, Matrix};

/// One fixed-size box of the garden: a `rows × cols` grid of squares, each
/// holding at most one plant name.
///
/// The box owns occupancy and geometry only. Which region gets written is the
/// planner's decision; `place_footprint` trusts its caller to have validated
/// the region with `region_is_empty` first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GardenBox {
    pub rows: usize,
    pub cols: usize,
    pub squares: Matrix<Option<String>>,
}

/// Expands an origin + footprint into the list of covered coordinates,
/// row-major.
pub fn footprint_coords(origin: Coordinate, size: Footprint) -> Vec<Coordinate> {
    let mut coords = Vec::with_capacity(size.area());
    for i in 0..size.rows {
        for j in 0..size.cols {
            coords.push(Coordinate::new(origin.row + i, origin.col + j));
        }
    }
    coords
}

impl GardenBox {
    pub fn new(rows: usize, cols: usize) -> Self {
        let squares = (0..rows).map(|_| vec![None; cols]).collect();
        Self { rows, cols, squares }
    }

    /// Occupant of a single square.
    pub fn occupant(&self, coord: Coordinate) -> Option<&str> {
        self.squares[coord.row][coord.col].as_deref()
    }

    /// Writes `name` into every square of the footprint anchored at `origin`.
    ///
    /// Contract: the region is fully inside the box and fully empty. No
    /// overlap check happens here; callers pre-validate via `region_is_empty`.
    pub fn place_footprint(&mut self, name: &str, origin: Coordinate, size: Footprint) {
        for coord in footprint_coords(origin, size) {
            self.squares[coord.row][coord.col] = Some(name.to_string());
        }
    }

    /// True when the footprint anchored at `origin` lies fully inside the box
    /// and covers only empty squares.
    pub fn region_is_empty(&self, origin: Coordinate, size: Footprint) -> bool {
        if origin.row + size.rows > self.rows || origin.col + size.cols > self.cols {
            return false;
        }
        footprint_coords(origin, size)
            .iter()
            .all(|c| self.squares[c.row][c.col].is_none())
    }

    /// Every origin, in row-major order, where the footprint would fit on
    /// empty squares.
    pub fn fitting_origins(&self, size: Footprint) -> Vec<Coordinate> {
        let mut origins = Vec::new();
        for i in 0..self.rows {
            for j in 0..self.cols {
                let origin = Coordinate::new(i, j);
                if self.region_is_empty(origin, size) {
                    origins.push(origin);
                }
            }
        }
        origins
    }

    /// In-bounds squares 8-connected to `coord`, diagonals included.
    fn coord_neighbors(&self, coord: Coordinate) -> Vec<Coordinate> {
        let mut neighbors = Vec::new();
        for dr in -1i32..=1 {
            for dc in -1i32..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let nr = coord.row as i32 + dr;
                let nc = coord.col as i32 + dc;
                if nr >= 0 && nr < self.rows as i32 && nc >= 0 && nc < self.cols as i32 {
                    neighbors.push(Coordinate::new(nr as usize, nc as usize));
                }
            }
        }
        neighbors
    }

    /// The in-bounds ring of squares touching the footprint (8-connected),
    /// excluding the footprint itself. Coordinates are reported once.
    pub fn footprint_neighbors(&self, origin: Coordinate, size: Footprint) -> Vec<Coordinate> {
        let own = footprint_coords(origin, size);
        let mut neighbors = Vec::new();
        for coord in &own {
            for n in self.coord_neighbors(*coord) {
                if !own.contains(&n) && !neighbors.contains(&n) {
                    neighbors.push(n);
                }
            }
        }
        neighbors
    }

    /// The outer border of the box, corners included once. With `empty_only`
    /// the list is restricted to unoccupied squares.
    pub fn edge_cells(&self, empty_only: bool) -> Vec<Coordinate> {
        let mut edges = Vec::new();
        for i in 0..self.rows {
            for j in 0..self.cols {
                let on_edge = i == 0 || i == self.rows - 1 || j == 0 || j == self.cols - 1;
                if on_edge && (!empty_only || self.squares[i][j].is_none()) {
                    edges.push(Coordinate::new(i, j));
                }
            }
        }
        edges
    }

    /// Count of empty squares, any position.
    pub fn empty_count(&self) -> usize {
        self.squares
            .iter()
            .flat_map(|row| row.iter())
            .filter(|s| s.is_none())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn test_footprint_coords_row_major() {
        let coords = footprint_coords(coord(0, 0), Footprint::new(2, 2));
        assert_eq!(
            coords,
            vec![coord(0, 0), coord(0, 1), coord(1, 0), coord(1, 1)]
        );
    }

    #[test]
    fn test_place_footprint_one_by_two() {
        let mut gb = GardenBox::new(4, 4);
        gb.place_footprint("carrot", coord(0, 0), Footprint::new(1, 2));
        assert_eq!(gb.occupant(coord(0, 0)), Some("carrot"));
        assert_eq!(gb.occupant(coord(0, 1)), Some("carrot"));
        let occupied = 16 - gb.empty_count();
        assert_eq!(occupied, 2, "only the two footprint squares are written");
    }

    #[test]
    fn test_region_is_empty_detects_occupancy() {
        let mut gb = GardenBox::new(4, 4);
        assert!(gb.region_is_empty(coord(1, 1), Footprint::new(2, 2)));
        gb.place_footprint("tomato", coord(2, 2), Footprint::SINGLE);
        assert!(!gb.region_is_empty(coord(1, 1), Footprint::new(2, 2)));
        assert!(gb.region_is_empty(coord(0, 0), Footprint::new(2, 2)));
    }

    #[test]
    fn test_region_is_empty_rejects_out_of_bounds() {
        let gb = GardenBox::new(4, 4);
        assert!(!gb.region_is_empty(coord(3, 3), Footprint::new(2, 2)));
        assert!(!gb.region_is_empty(coord(0, 0), Footprint::new(5, 1)));
        assert!(!gb.region_is_empty(coord(0, 0), Footprint::new(1, 5)));
    }

    #[test]
    fn test_fitting_origins_count_on_empty_box() {
        let gb = GardenBox::new(4, 4);
        // (4-2+1) × (4-3+1) = 6 origins for a 2×3 footprint
        let origins = gb.fitting_origins(Footprint::new(2, 3));
        assert_eq!(origins.len(), 6);
        for o in &origins {
            assert!(o.row + 2 <= 4 && o.col + 3 <= 4, "origin {o:?} out of bounds");
        }
    }

    #[test]
    fn test_fitting_origins_matches_region_is_empty() {
        let mut gb = GardenBox::new(4, 4);
        gb.place_footprint("tomato", coord(1, 1), Footprint::new(2, 2));
        let size = Footprint::new(1, 2);
        let origins = gb.fitting_origins(size);
        for i in 0..4 {
            for j in 0..4 {
                let o = coord(i, j);
                assert_eq!(
                    origins.contains(&o),
                    gb.region_is_empty(o, size),
                    "fitting_origins and region_is_empty disagree at {o:?}"
                );
            }
        }
    }

    #[test]
    fn test_queries_do_not_mutate() {
        let mut gb = GardenBox::new(4, 4);
        gb.place_footprint("carrot", coord(0, 0), Footprint::SINGLE);
        let before = gb.clone();
        gb.fitting_origins(Footprint::new(2, 2));
        gb.footprint_neighbors(coord(1, 1), Footprint::SINGLE);
        gb.edge_cells(true);
        gb.region_is_empty(coord(0, 0), Footprint::SINGLE);
        assert_eq!(gb, before, "queries must be pure");
    }

    #[test]
    fn test_interior_single_square_has_eight_neighbors() {
        let gb = GardenBox::new(4, 4);
        let neighbors = gb.footprint_neighbors(coord(1, 1), Footprint::SINGLE);
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&coord(1, 1)));
    }

    #[test]
    fn test_corner_single_square_has_three_neighbors() {
        let gb = GardenBox::new(4, 4);
        let neighbors = gb.footprint_neighbors(coord(0, 0), Footprint::SINGLE);
        assert_eq!(neighbors.len(), 3);
    }

    #[test]
    fn test_footprint_neighbors_excludes_own_squares() {
        let gb = GardenBox::new(4, 4);
        let size = Footprint::new(2, 2);
        let origin = coord(1, 1);
        let own = footprint_coords(origin, size);
        let neighbors = gb.footprint_neighbors(origin, size);
        // The ring around a 2×2 block in a 4×4 box is 12 squares.
        assert_eq!(neighbors.len(), 12);
        for n in &neighbors {
            assert!(!own.contains(n), "{n:?} is inside the footprint");
            assert!(n.row < 4 && n.col < 4, "{n:?} is out of bounds");
        }
    }

    #[test]
    fn test_edge_cells_counts_corners_once() {
        let gb = GardenBox::new(4, 4);
        let edges = gb.edge_cells(false);
        // 4×4 border: 16 - 4 interior = 12 squares
        assert_eq!(edges.len(), 12);
        let corners = [coord(0, 0), coord(0, 3), coord(3, 0), coord(3, 3)];
        for c in corners {
            assert_eq!(edges.iter().filter(|e| **e == c).count(), 1);
        }
    }

    #[test]
    fn test_edge_cells_empty_only_filters_occupied() {
        let mut gb = GardenBox::new(4, 4);
        gb.place_footprint("marigold", coord(0, 0), Footprint::SINGLE);
        let edges = gb.edge_cells(true);
        assert_eq!(edges.len(), 11);
        assert!(!edges.contains(&coord(0, 0)));
    }

    #[test]
    fn test_one_by_one_box_edge_is_the_single_cell() {
        let gb = GardenBox::new(1, 1);
        assert_eq!(gb.edge_cells(false), vec![coord(0, 0)]);
    }
}
