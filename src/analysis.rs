/// End-to-end coverage analysis
///
/// resolve → score → grid → aggregate pass → normalize pass → composite index.
/// A run is a pure function of the facilities, the reference tables and the
/// config: no I/O, no shared state, identical inputs give identical output.

use crate::aggregate::{AggregatePass, ScoredFacility, aggregate_cells};
use crate::config::AnalysisConfig;
use crate::coordinate::{Coordinate, CoordinateResolver, CoordinateSource};
use crate::coverage_index::{CoverageIndex, GridOccupancy, GuidelineRatios, compute_coverage_index};
use crate::error::Result;
use crate::facility::Facility;
use crate::hex_grid::{HexCell, build_hex_grid, hex_ring};
use crate::intensity::normalize_pass;
use crate::proximity::{ColdSpot, DesertCity, find_cold_spots, find_medical_deserts};
use crate::reference::{ReferenceData, RegionPopulation};
use crate::region_stats::{RegionStats, SpecialtyCount, compute_region_stats, specialty_distribution};
use crate::scoring::coverage_score;
use log::{debug, info};
use serde::Serialize;

/// A facility as the map draws it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityPoint {
    pub id: String,
    pub name: Option<String>,
    pub coordinate: Coordinate,
    pub source: CoordinateSource,
    pub confidence: Option<f64>,
    pub score: f64,
    /// Hospital not run by an NGO; the only kind that clears a desert city
    pub is_hospital: bool,
    #[serde(skip)]
    pub search_text: String,
}

impl FacilityPoint {
    pub fn is_inferred(&self) -> bool {
        self.source.is_inferred()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatCell {
    pub id: String,
    pub center: Coordinate,
    pub ring: Vec<Coordinate>,
    pub intensity: f64,
    pub score: f64,
    pub facility_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub cell_size: f64,
    pub max_score: f64,
    pub facility_points: Vec<FacilityPoint>,
    pub heat_cells: Vec<HeatCell>,
    pub desert_cells: Vec<HeatCell>,
    pub coverage_index: CoverageIndex,
    pub region_population: RegionPopulation,
    pub guidelines: GuidelineRatios,
    pub region_stats: Vec<RegionStats>,
    pub specialty_distribution: Vec<SpecialtyCount>,
    pub cold_spots: Vec<ColdSpot>,
    pub medical_deserts: Vec<DesertCity>,
}

impl AnalysisResult {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn inferred_count(&self) -> usize {
        self.facility_points.iter().filter(|p| p.is_inferred()).count()
    }
}

pub struct AnalysisProps<'a> {
    pub reference: &'a ReferenceData,
    pub config: AnalysisConfig,
}

pub struct CoverageAnalysis<'a> {
    reference: &'a ReferenceData,
    config: AnalysisConfig,
}

impl<'a> CoverageAnalysis<'a> {
    pub fn new(props: AnalysisProps<'a>) -> Self {
        Self {
            reference: props.reference,
            config: props.config,
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn locate_facilities(&self, facilities: &[Facility]) -> Vec<FacilityPoint> {
        let resolver = CoordinateResolver::new(self.reference).with_city_anchors(self.config.anchor_to_city);
        facilities
            .iter()
            .map(|facility| {
                let resolved = resolver.resolve_facility(facility);
                FacilityPoint {
                    id: facility.id.clone(),
                    name: facility.name.clone(),
                    coordinate: resolved.coordinate,
                    source: resolved.source,
                    confidence: facility.confidence(),
                    score: coverage_score(facility),
                    is_hospital: facility.is_hospital() && !facility.is_ngo(),
                    search_text: facility.search_text(),
                }
            })
            .collect()
    }

    pub fn build_grid(&self) -> Result<Vec<HexCell>> {
        let params = self.config.grid_params(self.reference.boundary.bounding_box());
        build_hex_grid(&params, &self.reference.boundary)
    }

    pub fn aggregate(&self, cells: &[HexCell], points: &[FacilityPoint]) -> AggregatePass {
        let scored: Vec<ScoredFacility> = points
            .iter()
            .map(|p| ScoredFacility::new(p.coordinate, p.score, p.search_text.clone()))
            .collect();
        aggregate_cells(cells, &scored, &self.config.specialty_filter(), self.config.cell_size_deg)
    }

    pub fn run(&self, facilities: &[Facility]) -> Result<AnalysisResult> {
        let cells = self.build_grid()?;
        let points = self.locate_facilities(facilities);
        debug!(
            "located {} facilities ({} inferred)",
            points.len(),
            points.iter().filter(|p| p.is_inferred()).count()
        );

        let pass = self.aggregate(&cells, &points);
        let intensities = normalize_pass(&cells, &pass);

        let cell_size = self.config.cell_size_deg;
        let heat_cells: Vec<HeatCell> = cells
            .iter()
            .zip(&pass.aggregates)
            .zip(intensities)
            .map(|((cell, aggregate), intensity)| HeatCell {
                id: cell.id.clone(),
                center: cell.center,
                ring: hex_ring(cell.center, cell_size),
                intensity,
                score: aggregate.score,
                facility_count: aggregate.facility_count,
            })
            .collect();

        let desert_cells: Vec<HeatCell> = heat_cells
            .iter()
            .filter(|c| c.intensity >= self.config.desert_intensity_threshold)
            .cloned()
            .collect();

        let occupancy = GridOccupancy::new(pass.occupied_cells(), cells.len());
        let coverage_index = compute_coverage_index(
            facilities,
            &self.reference.region_population,
            &self.config.guidelines,
            occupancy,
        );

        let cold_spots = find_cold_spots(
            &self.reference.cities,
            &points,
            &self.config.specialty_filter(),
            self.config.cold_spot_radius_km,
        );

        let medical_deserts = find_medical_deserts(
            &self.reference.cities,
            &points,
            &self.reference.region_population,
            self.config.medical_desert_radius_km,
        );

        info!(
            "coverage analysis: {} facilities, {} cells, {} desert cells, index {:.1}",
            facilities.len(),
            heat_cells.len(),
            desert_cells.len(),
            coverage_index.index
        );

        Ok(AnalysisResult {
            cell_size,
            max_score: pass.max_score,
            facility_points: points,
            heat_cells,
            desert_cells,
            coverage_index,
            region_population: self.reference.region_population.clone(),
            guidelines: self.config.guidelines,
            region_stats: compute_region_stats(facilities, &self.reference.region_population),
            specialty_distribution: specialty_distribution(facilities),
            cold_spots,
            medical_deserts,
        })
    }
}

/// One-shot convenience over `CoverageAnalysis`
pub fn analyze(facilities: &[Facility], reference: &ReferenceData, config: AnalysisConfig) -> Result<AnalysisResult> {
    CoverageAnalysis::new(AnalysisProps { reference, config }).run(facilities)
}
