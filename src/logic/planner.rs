use std::collections::{HashMap, HashSet};
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::catalog::PlantCatalog;
use crate::logic::ranking::best_origins;
use crate::models::garden::Garden;
use crate::models::{Coordinate, Footprint};

/// Beneficial filler placed on one empty edge square per box.
pub const EDGE_FILLER: &str = "marigold";
/// Beneficial filler placed on one remaining empty square per box.
pub const GAP_FILLER: &str = "nasturtium";

/// Remaining squares requested per plant. Entries are removed the moment
/// their count reaches zero.
pub type Ledger = HashMap<String, usize>;

/// The one fatal outcome of a generation run: a phase exhausted every box
/// without finding a valid placement for outstanding demand. The run is
/// discarded; callers may retry with fresh randomness or smaller requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// More trellis strips are needed than the north row of boxes can hold.
    TooManyTrellised,
    /// No box admits the plant's footprint anywhere.
    Infeasible { plant: String },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::TooManyTrellised => write!(f, "too many trellised plants for boxes"),
            LayoutError::Infeasible { plant } => {
                write!(f, "couldn't fit {plant} into any box")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Generates the garden layout for a request map of plant name → squares.
///
/// Four ordered phases run against the shared ledger: trellised plants,
/// large (multi-square) plants, single-square plants, then beneficial
/// fillers. Any infeasibility aborts the whole run; already-placed plants are
/// not rolled back. All randomness comes from the injected `rng`, so a seeded
/// generator reproduces layouts exactly.
pub fn generate<R: Rng>(
    garden: &mut Garden,
    catalog: &PlantCatalog,
    requests: HashMap<String, usize>,
    rng: &mut R,
) -> Result<(), LayoutError> {
    let mut ledger: Ledger = requests.into_iter().filter(|(_, n)| *n > 0).collect();
    place_trellised(garden, catalog, &mut ledger, rng)?;
    place_large_plants(garden, catalog, &mut ledger, rng)?;
    place_single_plants(garden, catalog, &mut ledger, rng)?;
    place_beneficials(garden, rng);
    Ok(())
}

/// Consumes placed squares from the ledger, dropping the entry at zero.
/// Demand going negative is a programming error, not a domain state.
fn record_placed(ledger: &mut Ledger, plant: &str, squares: usize) {
    if let Some(count) = ledger.get_mut(plant) {
        debug_assert!(*count >= squares, "ledger underflow for {plant}");
        *count = count.saturating_sub(squares);
        if *count == 0 {
            ledger.remove(plant);
        }
    }
}

/// Plant names with outstanding demand, sorted so that a seeded RNG shuffles
/// from a reproducible base order.
fn outstanding(ledger: &Ledger) -> Vec<String> {
    let mut names: Vec<String> = ledger.keys().cloned().collect();
    names.sort();
    names
}

/// Phase 1: trellised plants fill full single-row strips along the north
/// edge, one strip per north-row box. A box is retired after its strip even
/// if the plant's demand is not yet satisfied.
fn place_trellised<R: Rng>(
    garden: &mut Garden,
    catalog: &PlantCatalog,
    ledger: &mut Ledger,
    rng: &mut R,
) -> Result<(), LayoutError> {
    let mut trellised = catalog.trellised(&outstanding(ledger));
    if trellised.is_empty() {
        return Ok(());
    }
    trellised.shuffle(rng);

    let mut boxes = garden.north_row_indices();
    boxes.shuffle(rng);

    let strip_len = garden.box_cols;
    let demand: usize = trellised.iter().map(|p| ledger[p.as_str()]).sum();
    // Fail before any cell is mutated; there is no partial-trellis recovery.
    if demand.div_ceil(strip_len) > boxes.len() {
        return Err(LayoutError::TooManyTrellised);
    }

    for plant in &trellised {
        while ledger.contains_key(plant.as_str()) {
            let Some(&index) = boxes.first() else {
                return Err(LayoutError::TooManyTrellised);
            };
            garden.box_mut(index).place_footprint(
                plant,
                Coordinate::new(0, 0),
                Footprint::new(1, strip_len),
            );
            record_placed(ledger, plant, strip_len);
            boxes.remove(0);
            log::debug!("trellis strip of {plant} placed in box {index}");
        }
    }
    Ok(())
}

/// Phase 2: plants taking more than one square in both directions, placed
/// unit by unit wherever their footprint fits best.
fn place_large_plants<R: Rng>(
    garden: &mut Garden,
    catalog: &PlantCatalog,
    ledger: &mut Ledger,
    rng: &mut R,
) -> Result<(), LayoutError> {
    let mut large = catalog.large_plants(&outstanding(ledger));
    large.shuffle(rng);

    for plant in &large {
        let size = catalog.footprint(plant);
        let enemies: HashSet<&str> = catalog.enemies(plant).iter().map(String::as_str).collect();
        let companions: HashSet<&str> =
            catalog.companions(plant).iter().map(String::as_str).collect();

        while ledger.contains_key(plant.as_str()) {
            let mut boxes = garden.all_indices();
            boxes.shuffle(rng);

            let mut placed = false;
            for index in boxes {
                let chosen = {
                    let gb = &garden.boxes_row_major()[index];
                    let fits = gb.fitting_origins(size);
                    let best = best_origins(gb, plant, &enemies, &companions, size, &fits);
                    best.choose(rng).copied()
                };
                if let Some(origin) = chosen {
                    garden.box_mut(index).place_footprint(plant, origin, size);
                    record_placed(ledger, plant, size.area());
                    log::debug!("placed {plant} ({}x{}) in box {index}", size.rows, size.cols);
                    placed = true;
                    break;
                }
            }
            if !placed {
                return Err(LayoutError::Infeasible {
                    plant: plant.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Phase 3: everything left is a single-square plant. One placement per
/// outer pass, re-shuffling the remaining names after every success.
fn place_single_plants<R: Rng>(
    garden: &mut Garden,
    catalog: &PlantCatalog,
    ledger: &mut Ledger,
    rng: &mut R,
) -> Result<(), LayoutError> {
    while !ledger.is_empty() {
        let mut names = outstanding(ledger);
        names.shuffle(rng);
        // One placement per pass, re-shuffling afterwards. A 1×1 square only
        // fails when every box is full, so trying further names would not
        // rescue the pass.
        let plant = &names[0];

        let enemies: HashSet<&str> = catalog.enemies(plant).iter().map(String::as_str).collect();
        let companions: HashSet<&str> =
            catalog.companions(plant).iter().map(String::as_str).collect();

        let mut boxes = garden.all_indices();
        boxes.shuffle(rng);

        let mut placed = false;
        for index in boxes {
            let chosen = {
                let gb = &garden.boxes_row_major()[index];
                let fits = gb.fitting_origins(Footprint::SINGLE);
                best_origins(gb, plant, &enemies, &companions, Footprint::SINGLE, &fits)
                    .choose(rng)
                    .copied()
            };
            if let Some(origin) = chosen {
                garden
                    .box_mut(index)
                    .place_footprint(plant, origin, Footprint::SINGLE);
                record_placed(ledger, plant, 1);
                log::debug!(
                    "placed {plant}, {} squares left, {} plants remaining",
                    ledger.get(plant.as_str()).copied().unwrap_or(0),
                    ledger.len()
                );
                placed = true;
                break;
            }
        }
        if !placed {
            return Err(LayoutError::Infeasible {
                plant: plant.clone(),
            });
        }
    }
    Ok(())
}

/// Phase 4: beneficial fillers. Marigolds deter pests from the box edges,
/// nasturtiums take whatever squares are left. Never fails, never touches
/// the ledger.
fn place_beneficials<R: Rng>(garden: &mut Garden, rng: &mut R) {
    for index in garden.all_indices() {
        let edge = garden.boxes_row_major()[index]
            .edge_cells(true)
            .choose(rng)
            .copied();
        if let Some(coord) = edge {
            garden
                .box_mut(index)
                .place_footprint(EDGE_FILLER, coord, Footprint::SINGLE);
        }
    }

    for index in garden.all_indices() {
        let gap = garden.boxes_row_major()[index]
            .fitting_origins(Footprint::SINGLE)
            .choose(rng)
            .copied();
        if let Some(coord) = gap {
            garden
                .box_mut(index)
                .place_footprint(GAP_FILLER, coord, Footprint::SINGLE);
        }
    }
}
