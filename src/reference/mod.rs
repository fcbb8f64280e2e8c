/// Reference tables the engine reads but never owns
///
/// Region centroids, the city gazetteer, region populations and the country
/// boundary are handed to the engine through `ReferenceData`. The Ghana
/// tables in `ghana` are the stock defaults; tests build synthetic ones.

pub mod ghana;

use crate::constants::{DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG};
use crate::coordinate::Coordinate;
use crate::error::Result;
use crate::polygon::BoundaryPolygon;
use serde::Serialize;
use std::collections::BTreeMap;

/// Lookup key for every name-indexed table
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Named reference points, keyed case-insensitively
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlaceTable {
    places: BTreeMap<String, Coordinate>,
}

impl PlaceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64, f64)>,
    {
        let mut table = Self::new();
        for (name, lat, lng) in entries {
            table.insert(name, Coordinate::new(lat, lng));
        }
        table
    }

    pub fn insert(&mut self, name: &str, coordinate: Coordinate) {
        self.places.insert(normalize_name(name), coordinate);
    }

    pub fn get(&self, name: &str) -> Option<Coordinate> {
        self.places.get(&normalize_name(name)).copied()
    }

    /// First entry whose key contains `name` or is contained by it
    pub fn get_fuzzy(&self, name: &str) -> Option<Coordinate> {
        let key = normalize_name(name);
        if key.is_empty() {
            return None;
        }
        self.places
            .iter()
            .find(|(place, _)| place.contains(&key) || key.contains(place.as_str()))
            .map(|(_, coordinate)| *coordinate)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Coordinate)> {
        self.places.iter().map(|(name, c)| (name.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

/// Region name → headcount, keyed by normalized name.
/// Spellings that differ only in case or padding are the same region; the
/// latest insert wins and its display name is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegionPopulation {
    regions: BTreeMap<String, RegionEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionEntry {
    pub name: String,
    pub population: u64,
}

impl RegionPopulation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        let mut table = Self::new();
        for (name, population) in entries {
            table.insert(name, population);
        }
        table
    }

    pub fn insert(&mut self, name: &str, population: u64) {
        self.regions.insert(
            normalize_name(name),
            RegionEntry {
                name: name.trim().to_string(),
                population,
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.regions.get(&normalize_name(name)).map(|entry| entry.population)
    }

    /// Population for a free-text region, allowing either name to contain the other
    pub fn get_fuzzy(&self, name: &str) -> Option<u64> {
        let key = normalize_name(name);
        if key.is_empty() {
            return None;
        }
        self.get(&key).or_else(|| {
            self.regions
                .iter()
                .find(|(region, _)| region.contains(&key) || key.contains(region.as_str()))
                .map(|(_, entry)| entry.population)
        })
    }

    pub fn total(&self) -> u64 {
        self.regions.values().map(|entry| entry.population).sum()
    }

    /// Display name and population, in normalized-key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.regions
            .values()
            .map(|entry| (entry.name.as_str(), entry.population))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// City-then-region geocoder over the reference tables
#[derive(Debug, Clone, Copy)]
pub struct Gazetteer<'a> {
    cities: &'a PlaceTable,
    regions: &'a PlaceTable,
}

impl<'a> Gazetteer<'a> {
    pub fn new(cities: &'a PlaceTable, regions: &'a PlaceTable) -> Self {
        Self { cities, regions }
    }

    /// Exact city, then exact region, then a region that overlaps the given name
    pub fn geocode(&self, city: Option<&str>, region: Option<&str>) -> Option<Coordinate> {
        if let Some(hit) = city.and_then(|c| self.cities.get(c)) {
            return Some(hit);
        }
        let region = region?;
        self.regions
            .get(region)
            .or_else(|| self.regions.get_fuzzy(region))
    }
}

/// Everything static the engine needs for one run
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub region_centroids: PlaceTable,
    pub cities: PlaceTable,
    pub region_population: RegionPopulation,
    pub boundary: BoundaryPolygon,
    pub default_center: Coordinate,
}

impl ReferenceData {
    pub fn new(boundary: BoundaryPolygon) -> Self {
        Self {
            region_centroids: PlaceTable::new(),
            cities: PlaceTable::new(),
            region_population: RegionPopulation::new(),
            boundary,
            default_center: Coordinate::new(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG),
        }
    }

    /// Stock Ghana tables
    pub fn ghana() -> Result<Self> {
        Ok(Self {
            region_centroids: ghana::REGION_CENTROIDS.clone(),
            cities: ghana::CITIES.clone(),
            region_population: ghana::REGION_POPULATION.clone(),
            boundary: BoundaryPolygon::new(ghana::BOUNDARY.iter().copied())?,
            default_center: Coordinate::new(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG),
        })
    }

    pub fn with_region_centroids(mut self, table: PlaceTable) -> Self {
        self.region_centroids = table;
        self
    }

    pub fn with_cities(mut self, table: PlaceTable) -> Self {
        self.cities = table;
        self
    }

    pub fn with_population(mut self, population: RegionPopulation) -> Self {
        self.region_population = population;
        self
    }

    pub fn with_default_center(mut self, center: Coordinate) -> Self {
        self.default_center = center;
        self
    }

    pub fn gazetteer(&self) -> Gazetteer<'_> {
        Gazetteer::new(&self.cities, &self.region_centroids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_lookup_ignores_case_and_padding() {
        let table = PlaceTable::from_entries([("Ashanti", 6.7, -1.6)]);
        assert_eq!(table.get("  ASHANTI "), Some(Coordinate::new(6.7, -1.6)));
        assert_eq!(table.get("volta"), None);
    }

    #[test]
    fn gazetteer_prefers_city_then_region() {
        let cities = PlaceTable::from_entries([("kumasi", 6.6885, -1.6244)]);
        let regions = PlaceTable::from_entries([("ashanti", 6.7, -1.6), ("upper east", 10.8, -0.8)]);
        let gazetteer = Gazetteer::new(&cities, &regions);

        assert_eq!(
            gazetteer.geocode(Some("Kumasi"), Some("Ashanti")),
            Some(Coordinate::new(6.6885, -1.6244))
        );
        assert_eq!(
            gazetteer.geocode(Some("Nowhere"), Some("Ashanti")),
            Some(Coordinate::new(6.7, -1.6))
        );
        assert_eq!(
            gazetteer.geocode(None, Some("Upper East Region")),
            Some(Coordinate::new(10.8, -0.8))
        );
        assert_eq!(gazetteer.geocode(None, None), None);
        assert_eq!(gazetteer.geocode(None, Some("")), None);
    }

    #[test]
    fn population_fuzzy_match() {
        let population = RegionPopulation::from_entries([("Greater Accra", 5_455_692), ("Volta", 1_659_040)]);
        assert_eq!(population.get("greater accra"), Some(5_455_692));
        assert_eq!(population.get_fuzzy("Accra"), Some(5_455_692));
        assert_eq!(population.get_fuzzy("Volta Region"), Some(1_659_040));
        assert_eq!(population.get_fuzzy("Oti"), None);
        assert_eq!(population.total(), 5_455_692 + 1_659_040);
    }

    #[test]
    fn population_spellings_share_one_entry() {
        let population = RegionPopulation::from_entries([("Ashanti", 100), ("  ashanti ", 120), ("ASHANTI", 150)]);
        assert_eq!(population.len(), 1);
        assert_eq!(population.total(), 150);
        assert_eq!(population.get("Ashanti"), Some(150));
        assert_eq!(population.iter().collect::<Vec<_>>(), vec![("ASHANTI", 150)]);
    }

    #[test]
    fn ghana_tables_load() {
        let reference = ReferenceData::ghana().unwrap();
        assert_eq!(reference.region_centroids.get("ashanti"), Some(Coordinate::new(6.7, -1.6)));
        assert_eq!(reference.region_population.len(), 16);
        assert!(reference.boundary.contains(reference.default_center));
    }
}
