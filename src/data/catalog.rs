use std::collections::HashMap;

use crate::models::plant::PlantAttributes;
use crate::models::Footprint;

/// Read-only collection of plant attributes, keyed by name.
///
/// Accessors follow the defaulting rules of the attribute model: unknown
/// names behave like a plain 1×1 plant with no companions or enemies, so the
/// placement engine never has to unwrap a lookup. Boundary validation is
/// expected to reject names that are not in the catalog.
#[derive(Debug, Clone, Default)]
pub struct PlantCatalog {
    plants: HashMap<String, PlantAttributes>,
}

impl PlantCatalog {
    pub fn from_plants(plants: Vec<PlantAttributes>) -> Self {
        let plants = plants.into_iter().map(|p| (p.name.clone(), p)).collect();
        Self { plants }
    }

    pub fn get(&self, name: &str) -> Option<&PlantAttributes> {
        self.plants.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.plants.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// All plants, sorted by name for stable listings.
    pub fn all(&self) -> Vec<&PlantAttributes> {
        let mut all: Vec<&PlantAttributes> = self.plants.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    pub fn footprint(&self, name: &str) -> Footprint {
        self.get(name).map(|p| p.footprint).unwrap_or(Footprint::SINGLE)
    }

    pub fn companions(&self, name: &str) -> &[String] {
        self.get(name).map(|p| p.companions.as_slice()).unwrap_or(&[])
    }

    pub fn enemies(&self, name: &str) -> &[String] {
        self.get(name).map(|p| p.enemies.as_slice()).unwrap_or(&[])
    }

    pub fn seeds_per_square(&self, name: &str) -> usize {
        self.get(name)
            .map(|p| p.yield_density.plants_per_square())
            .unwrap_or(1)
    }

    /// Names from `names` that require a trellis, sorted.
    pub fn trellised(&self, names: &[String]) -> Vec<String> {
        let mut matched: Vec<String> = names
            .iter()
            .filter(|n| self.get(n).map(|p| p.trellised).unwrap_or(false))
            .cloned()
            .collect();
        matched.sort();
        matched
    }

    /// Names from `names` with a multi-square footprint in both directions,
    /// sorted. Trellised plants never qualify: the trellis phase owns them.
    pub fn large_plants(&self, names: &[String]) -> Vec<String> {
        let mut matched: Vec<String> = names
            .iter()
            .filter(|n| self.get(n).map(|p| p.is_large()).unwrap_or(false))
            .cloned()
            .collect();
        matched.sort();
        matched
    }
}
