/// First pass: per-cell facility aggregation
///
/// Each cell sums the coverage scores of facilities within `2.2 * cell_size`
/// (planar degrees, squared-distance compare) and counts them. Cells are
/// independent, so the pass fans out with rayon; `collect` keeps input order.
/// The run-wide maximum is folded afterwards in enumeration order.

use crate::constants::SEARCH_RADIUS_FACTOR;
use crate::coordinate::Coordinate;
use crate::hex_grid::HexCell;
use glam::DVec2;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Keyword allow-list; empty lets everything through
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialtyFilter {
    tokens: Vec<String>,
}

impl SpecialtyFilter {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// `search_text` must already be lowercased
    pub fn accepts(&self, search_text: &str) -> bool {
        self.is_empty() || self.tokens.iter().any(|t| search_text.contains(t.as_str()))
    }
}

/// A facility reduced to what aggregation needs
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredFacility {
    pub coordinate: Coordinate,
    pub score: f64,
    pub search_text: String,
}

impl ScoredFacility {
    pub fn new(coordinate: Coordinate, score: f64, search_text: impl Into<String>) -> Self {
        Self {
            coordinate,
            score,
            search_text: search_text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellAggregate {
    pub score: f64,
    pub facility_count: usize,
}

/// Output of the aggregate pass, aligned index-for-index with the cells
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatePass {
    pub aggregates: Vec<CellAggregate>,
    pub max_score: f64,
}

impl AggregatePass {
    pub fn occupied_cells(&self) -> usize {
        self.aggregates.iter().filter(|a| a.facility_count > 0).count()
    }
}

pub fn search_radius_sq(cell_size: f64) -> f64 {
    let radius = SEARCH_RADIUS_FACTOR * cell_size;
    radius * radius
}

/// Sum and count the facilities near one center
pub fn aggregate_at(center: Coordinate, facilities: &[(DVec2, f64)], radius_sq: f64) -> CellAggregate {
    let origin = center.to_vec2();
    let mut score = 0.0;
    let mut facility_count = 0;
    for (point, weight) in facilities {
        if point.distance_squared(origin) <= radius_sq {
            score += weight;
            facility_count += 1;
        }
    }
    CellAggregate {
        score,
        facility_count,
    }
}

pub fn aggregate_cells(
    cells: &[HexCell],
    facilities: &[ScoredFacility],
    filter: &SpecialtyFilter,
    cell_size: f64,
) -> AggregatePass {
    let included: Vec<(DVec2, f64)> = facilities
        .iter()
        .filter(|f| filter.accepts(&f.search_text))
        .map(|f| (f.coordinate.to_vec2(), f.score))
        .collect();

    let radius_sq = search_radius_sq(cell_size);
    let aggregates: Vec<CellAggregate> = cells
        .par_iter()
        .map(|cell| aggregate_at(cell.center, &included, radius_sq))
        .collect();

    let max_score = aggregates.iter().fold(0.0_f64, |max, a| max.max(a.score));

    debug!(
        "aggregate pass: {} of {} facilities pass filter {:?}, {} cells, max score {:.3}",
        included.len(),
        facilities.len(),
        filter.tokens(),
        cells.len(),
        max_score
    );

    AggregatePass {
        aggregates,
        max_score,
    }
}
