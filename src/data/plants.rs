use crate::data::catalog::PlantCatalog;
use crate::models::plant::{PlantAttributes, YieldDensity};
use crate::models::Footprint;

fn plant(
    name: &str,
    footprint: (usize, usize),
    companions: &[&str],
    enemies: &[&str],
    trellised: bool,
    density: (usize, usize),
) -> PlantAttributes {
    PlantAttributes {
        name: name.into(),
        footprint: Footprint::new(footprint.0, footprint.1),
        companions: companions.iter().map(|s| s.to_string()).collect(),
        enemies: enemies.iter().map(|s| s.to_string()).collect(),
        trellised,
        yield_density: YieldDensity::new(density.0, density.1),
    }
}

/// The built-in plant database: classic square-foot-garden varieties with
/// their companion-planting pairs, footprints and per-square densities.
pub fn builtin_plants() -> Vec<PlantAttributes> {
    vec![
        plant(
            "carrot",
            (1, 1),
            &["tomato", "onion", "leek", "lettuce", "pea"],
            &["dill"],
            false,
            (4, 4),
        ),
        plant(
            "tomato",
            (1, 1),
            &["basil", "carrot", "onion", "marigold"],
            &["fennel", "corn", "cabbage"],
            false,
            (1, 1),
        ),
        plant(
            "basil",
            (1, 1),
            &["tomato", "pepper"],
            &[],
            false,
            (2, 2),
        ),
        plant(
            "lettuce",
            (1, 1),
            &["carrot", "radish", "cucumber"],
            &[],
            false,
            (2, 2),
        ),
        plant(
            "radish",
            (1, 1),
            &["lettuce", "cucumber", "pea"],
            &["cabbage"],
            false,
            (4, 4),
        ),
        plant(
            "onion",
            (1, 1),
            &["carrot", "lettuce", "tomato"],
            &["pea", "bean"],
            false,
            (3, 3),
        ),
        plant(
            "leek",
            (1, 1),
            &["carrot", "celery"],
            &["bean"],
            false,
            (3, 3),
        ),
        plant(
            "cabbage",
            (1, 1),
            &["onion", "celery"],
            &["tomato", "radish"],
            false,
            (1, 1),
        ),
        plant(
            "corn",
            (1, 1),
            &["bean", "cucumber"],
            &["tomato"],
            false,
            (2, 2),
        ),
        plant(
            "pepper",
            (1, 1),
            &["basil", "onion"],
            &["fennel", "bean"],
            false,
            (1, 1),
        ),
        plant(
            "fennel",
            (1, 1),
            &[],
            &["tomato", "pepper", "bean"],
            false,
            (2, 2),
        ),
        plant(
            "celery",
            (1, 1),
            &["leek", "cabbage"],
            &["corn"],
            false,
            (2, 2),
        ),
        // Climbers: placed as full north-row strips against a trellis.
        plant(
            "pea",
            (1, 1),
            &["carrot", "radish", "cucumber"],
            &["onion"],
            true,
            (4, 2),
        ),
        plant(
            "bean",
            (1, 1),
            &["corn", "radish"],
            &["onion", "fennel"],
            true,
            (4, 2),
        ),
        plant(
            "cucumber",
            (1, 1),
            &["pea", "radish", "lettuce", "corn"],
            &["basil"],
            true,
            (2, 1),
        ),
        // Sprawlers: multi-square footprints.
        plant(
            "zucchini",
            (2, 2),
            &["nasturtium", "corn"],
            &["pumpkin"],
            false,
            (1, 1),
        ),
        plant(
            "pumpkin",
            (2, 2),
            &["corn", "nasturtium"],
            &["zucchini"],
            false,
            (1, 1),
        ),
        // Beneficial fillers placed by the final phase.
        plant(
            "marigold",
            (1, 1),
            &["tomato", "pepper", "cabbage"],
            &[],
            false,
            (1, 1),
        ),
        plant(
            "nasturtium",
            (1, 1),
            &["zucchini", "pumpkin", "cucumber", "cabbage"],
            &[],
            false,
            (1, 1),
        ),
    ]
}

pub fn builtin_catalog() -> PlantCatalog {
    PlantCatalog::from_plants(builtin_plants())
}
