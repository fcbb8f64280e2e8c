/// Analysis configuration
///
/// Plain serde struct, every field optional in JSON. Loaded from a file or an
/// embedded string; validation happens when the pipeline runs.

use crate::aggregate::SpecialtyFilter;
use crate::constants::{
    DEFAULT_CELL_SIZE_DEG, DEFAULT_COLD_SPOT_RADIUS_KM, DEFAULT_DESERT_INTENSITY, DEFAULT_MEDICAL_DESERT_RADIUS_KM,
};
use crate::coverage_index::GuidelineRatios;
use crate::error::Result;
use crate::hex_grid::{BoundingBox, HexGridParams};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub cell_size_deg: f64,
    /// Grid extent; `None` uses the boundary's own bounding box
    pub bounding_box: Option<BoundingBox>,
    pub specialty_filters: Vec<String>,
    pub desert_intensity_threshold: f64,
    pub guidelines: GuidelineRatios,
    pub anchor_to_city: bool,
    pub cold_spot_radius_km: f64,
    /// A gazetteer city with no hospital this close is a medical desert
    pub medical_desert_radius_km: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            cell_size_deg: DEFAULT_CELL_SIZE_DEG,
            bounding_box: Some(BoundingBox::ghana()),
            specialty_filters: Vec::new(),
            desert_intensity_threshold: DEFAULT_DESERT_INTENSITY,
            guidelines: GuidelineRatios::default(),
            anchor_to_city: false,
            cold_spot_radius_km: DEFAULT_COLD_SPOT_RADIUS_KM,
            medical_desert_radius_km: DEFAULT_MEDICAL_DESERT_RADIUS_KM,
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn with_cell_size(mut self, cell_size_deg: f64) -> Self {
        self.cell_size_deg = cell_size_deg;
        self
    }

    pub fn with_bounding_box(mut self, bounding_box: Option<BoundingBox>) -> Self {
        self.bounding_box = bounding_box;
        self
    }

    pub fn with_filters<I, S>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specialty_filters = filters.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_desert_threshold(mut self, threshold: f64) -> Self {
        self.desert_intensity_threshold = threshold;
        self
    }

    pub fn with_guidelines(mut self, guidelines: GuidelineRatios) -> Self {
        self.guidelines = guidelines;
        self
    }

    pub fn specialty_filter(&self) -> SpecialtyFilter {
        SpecialtyFilter::new(&self.specialty_filters)
    }

    pub fn grid_params(&self, fallback: BoundingBox) -> HexGridParams {
        HexGridParams::with_bounds(self.bounding_box.unwrap_or(fallback), self.cell_size_deg)
    }
}
