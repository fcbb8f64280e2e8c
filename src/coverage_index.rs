/// Composite coverage index (0–10)
///
/// Five terms, each clamped to [0, 1] before weighting:
///
/// | term | ratio | weight |
/// |---|---|---|
/// | doctors | doctors per 1000 / guideline | 0.25 |
/// | beds | beds per 1000 / guideline | 0.20 |
/// | hospitals | hospitals per 100k / 1 | 0.20 |
/// | geography | occupied grid cells / grid cells | 0.20 |
/// | equity | regions with a facility / regions with population | 0.15 |
///
/// Any zero denominator zeroes its term instead of producing NaN.

use crate::constants::{
    BEDS_WEIGHT, DEFAULT_BEDS_PER_1000, DEFAULT_DOCTORS_PER_1000, DOCTOR_WEIGHT, EQUITY_WEIGHT,
    GEOGRAPHIC_WEIGHT, HOSPITALS_PER_100K_TARGET, HOSPITAL_DENSITY_WEIGHT, MAX_COVERAGE_INDEX,
};
use crate::facility::Facility;
use crate::reference::{RegionPopulation, normalize_name};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuidelineRatios {
    pub doctors_per_1000: f64,
    pub beds_per_1000: f64,
}

impl Default for GuidelineRatios {
    fn default() -> Self {
        Self {
            doctors_per_1000: DEFAULT_DOCTORS_PER_1000,
            beds_per_1000: DEFAULT_BEDS_PER_1000,
        }
    }
}

/// Grid cell counts for the geographic term
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GridOccupancy {
    pub occupied_cells: usize,
    pub total_cells: usize,
}

impl GridOccupancy {
    pub fn new(occupied_cells: usize, total_cells: usize) -> Self {
        Self {
            occupied_cells,
            total_cells,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoverageStats {
    pub facility_count: usize,
    pub hospital_count: usize,
    pub total_doctors: u64,
    pub total_beds: u64,
    pub total_population: u64,
    pub doctors_per_1000: f64,
    pub beds_per_1000: f64,
    pub hospitals_per_100k: f64,
    pub regions_with_population: usize,
    pub regions_with_facilities: usize,
    pub occupancy: GridOccupancy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct IndexTerms {
    pub doctors: f64,
    pub beds: f64,
    pub hospital_density: f64,
    pub geographic: f64,
    pub equity: f64,
}

impl IndexTerms {
    pub fn weighted_sum(&self) -> f64 {
        self.doctors * DOCTOR_WEIGHT
            + self.beds * BEDS_WEIGHT
            + self.hospital_density * HOSPITAL_DENSITY_WEIGHT
            + self.geographic * GEOGRAPHIC_WEIGHT
            + self.equity * EQUITY_WEIGHT
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageIndex {
    pub index: f64,
    pub terms: IndexTerms,
    pub stats: CoverageStats,
}

/// `numerator / denominator`, or 0 when the denominator is not positive
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 && denominator.is_finite() {
        numerator / denominator
    } else {
        0.0
    }
}

fn unit_term(value: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 }
}

pub fn compute_coverage_index(
    facilities: &[Facility],
    population: &RegionPopulation,
    guidelines: &GuidelineRatios,
    occupancy: GridOccupancy,
) -> CoverageIndex {
    let total_population = population.total();
    let total_doctors: u64 = facilities.iter().filter_map(|f| f.doctors).map(u64::from).sum();
    let total_beds: u64 = facilities.iter().filter_map(|f| f.beds).map(u64::from).sum();
    let hospital_count = facilities.iter().filter(|f| f.is_hospital()).count();

    let pop = total_population as f64;
    let doctors_per_1000 = ratio(total_doctors as f64, pop) * 1000.0;
    let beds_per_1000 = ratio(total_beds as f64, pop) * 1000.0;
    let hospitals_per_100k = ratio(hospital_count as f64, pop) * 100_000.0;

    let facility_regions: BTreeSet<String> = facilities
        .iter()
        .map(|f| normalize_name(&f.region))
        .filter(|r| !r.is_empty())
        .collect();
    let regions_with_population = population.len();
    let regions_with_facilities = population
        .iter()
        .filter(|(region, _)| facility_regions.contains(&normalize_name(region)))
        .count();

    let unmatched: Vec<&String> = facility_regions
        .iter()
        .filter(|r| population.get(r).is_none())
        .collect();
    if !unmatched.is_empty() {
        warn!("regions without population data: {:?}", unmatched);
    }

    let terms = IndexTerms {
        doctors: unit_term(ratio(doctors_per_1000, guidelines.doctors_per_1000)),
        beds: unit_term(ratio(beds_per_1000, guidelines.beds_per_1000)),
        hospital_density: unit_term(ratio(hospitals_per_100k, HOSPITALS_PER_100K_TARGET)),
        geographic: unit_term(ratio(occupancy.occupied_cells as f64, occupancy.total_cells as f64)),
        equity: unit_term(ratio(regions_with_facilities as f64, regions_with_population as f64)),
    };

    let index = ((terms.weighted_sum() * 100.0).round() / 10.0).clamp(0.0, MAX_COVERAGE_INDEX);

    CoverageIndex {
        index,
        terms,
        stats: CoverageStats {
            facility_count: facilities.len(),
            hospital_count,
            total_doctors,
            total_beds,
            total_population,
            doctors_per_1000,
            beds_per_1000,
            hospitals_per_100k,
            regions_with_population,
            regions_with_facilities,
            occupancy,
        },
    }
}
