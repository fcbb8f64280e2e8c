pub mod constants;
pub mod error;
pub mod facility;
pub mod coordinate;
pub mod reference;
pub mod polygon;
pub mod hex_grid;
pub mod scoring;
pub mod aggregate;
pub mod intensity;
pub mod coverage_index;
pub mod proximity;
pub mod region_stats;
pub mod config;
pub mod analysis;
pub mod report;

pub use analysis::{AnalysisProps, AnalysisResult, CoverageAnalysis, FacilityPoint, HeatCell, analyze};
pub use config::AnalysisConfig;
pub use coordinate::Coordinate;
pub use error::{EngineError, Result};
pub use facility::Facility;
pub use polygon::BoundaryPolygon;
pub use reference::ReferenceData;
