/// Per-region and per-specialty breakdowns of the facility set

use crate::facility::Facility;
use crate::reference::RegionPopulation;
use serde::Serialize;
use std::collections::BTreeMap;

const UNKNOWN_REGION: &str = "Unknown";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegionStats {
    pub region: String,
    pub facilities: usize,
    pub hospitals: usize,
    pub clinics: usize,
    pub ngos: usize,
    pub doctors_reported: u64,
    pub beds_reported: u64,
    pub specialties: BTreeMap<String, usize>,
    pub population: Option<u64>,
}

fn region_label(facility: &Facility) -> String {
    let region = facility.region.trim();
    if region.is_empty() {
        UNKNOWN_REGION.to_string()
    } else {
        region.to_string()
    }
}

/// One entry per region label as it appears in the data, sorted by label
pub fn compute_region_stats(facilities: &[Facility], population: &RegionPopulation) -> Vec<RegionStats> {
    let mut by_region: BTreeMap<String, RegionStats> = BTreeMap::new();

    for facility in facilities {
        let label = region_label(facility);
        let stats = by_region.entry(label.clone()).or_insert_with(|| RegionStats {
            region: label,
            ..RegionStats::default()
        });
        stats.facilities += 1;
        if facility.is_hospital() {
            stats.hospitals += 1;
        } else if facility.is_clinic() {
            stats.clinics += 1;
        }
        if facility.is_ngo() {
            stats.ngos += 1;
        }
        stats.doctors_reported += facility.doctors.map(u64::from).unwrap_or(0);
        stats.beds_reported += facility.beds.map(u64::from).unwrap_or(0);
        for specialty in facility.specialty_list() {
            *stats.specialties.entry(specialty).or_insert(0) += 1;
        }
    }

    by_region
        .into_values()
        .map(|mut stats| {
            if stats.region != UNKNOWN_REGION {
                stats.population = population.get_fuzzy(&stats.region);
            }
            stats
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecialtyCount {
    pub specialty: String,
    pub total: usize,
    pub regions: BTreeMap<String, usize>,
}

/// Specialties by frequency, most common first, ties alphabetical
pub fn specialty_distribution(facilities: &[Facility]) -> Vec<SpecialtyCount> {
    let mut counts: BTreeMap<String, SpecialtyCount> = BTreeMap::new();
    for facility in facilities {
        let label = region_label(facility);
        for specialty in facility.specialty_list() {
            let entry = counts.entry(specialty.clone()).or_insert_with(|| SpecialtyCount {
                specialty,
                total: 0,
                regions: BTreeMap::new(),
            });
            entry.total += 1;
            *entry.regions.entry(label.clone()).or_insert(0) += 1;
        }
    }

    let mut sorted: Vec<SpecialtyCount> = counts.into_values().collect();
    sorted.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.specialty.cmp(&b.specialty)));
    sorted
}
