use std::collections::{HashMap, HashSet};

use crate::models::boxes::GardenBox;
use crate::models::{Coordinate, Footprint};

pub const COMPANION_SCORE: i32 = 1;
pub const ENEMY_SCORE: i32 = -1;

/// Fitness of placing `plant` at `origin`: the sum over all footprint
/// neighbors of +1 per companion occupant and −1 per enemy occupant. Empty
/// and neutral neighbors score 0. A plant always counts as its own enemy so
/// that same-plant clusters (a pest-infestation risk) are discouraged.
pub fn rank_origin(
    garden_box: &GardenBox,
    plant: &str,
    enemies: &HashSet<&str>,
    companions: &HashSet<&str>,
    origin: Coordinate,
    size: Footprint,
) -> i32 {
    let mut rank = 0;
    for neighbor in garden_box.footprint_neighbors(origin, size) {
        match garden_box.occupant(neighbor) {
            Some(occupant) if occupant == plant || enemies.contains(occupant) => {
                rank += ENEMY_SCORE;
            }
            Some(occupant) if companions.contains(occupant) => {
                rank += COMPANION_SCORE;
            }
            _ => {}
        }
    }
    rank
}

/// Bins `candidates` by rank and returns the maximum-rank group. Tie-breaking
/// among equally ranked origins is the caller's job (uniform random choice).
pub fn best_origins(
    garden_box: &GardenBox,
    plant: &str,
    enemies: &HashSet<&str>,
    companions: &HashSet<&str>,
    size: Footprint,
    candidates: &[Coordinate],
) -> Vec<Coordinate> {
    let mut rankings: HashMap<i32, Vec<Coordinate>> = HashMap::new();
    for &origin in candidates {
        let rank = rank_origin(garden_box, plant, enemies, companions, origin, size);
        rankings.entry(rank).or_default().push(origin);
    }
    rankings
        .into_iter()
        .max_by_key(|(rank, _)| *rank)
        .map(|(_, origins)| origins)
        .unwrap_or_default()
}
