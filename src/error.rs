use thiserror::Error as ThisError;

///
/// EngineError
///
/// Fatal precondition violations. Data-quality problems (missing coordinates,
/// unknown regions, zero populations) never surface here; they degrade instead.
///

#[derive(Debug, ThisError)]
pub enum EngineError {
    #[error("boundary polygon needs at least 3 distinct vertices, got {vertices}")]
    DegeneratePolygon { vertices: usize },

    #[error("boundary polygon vertex {index} is not finite")]
    NonFiniteVertex { index: usize },

    #[error("cell size must be a positive finite number of degrees, got {0}")]
    InvalidCellSize(f64),

    #[error("bounding box is empty or not finite: south {south}, north {north}, west {west}, east {east}")]
    InvalidBoundingBox {
        south: f64,
        north: f64,
        west: f64,
        east: f64,
    },

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
