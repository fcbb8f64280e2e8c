// Coordinate inference
pub const LAT_JITTER_DEG: f64 = 0.6;
pub const LNG_JITTER_DEG: f64 = 0.8;
pub const JITTER_SLICE_BITS: u32 = 10;
pub const JITTER_SLICE_MASK: u32 = (1 << JITTER_SLICE_BITS) - 1; // 1023
pub const COORDINATE_DECIMALS: i32 = 4;
pub const HASH_MULTIPLIER: i32 = 31;

// Geographic centre of Ghana, used when a facility's region is unknown
pub const DEFAULT_CENTER_LAT: f64 = 7.9465;
pub const DEFAULT_CENTER_LNG: f64 = -1.0232;

// Hex grid
pub const DEFAULT_CELL_SIZE_DEG: f64 = 0.25;
pub const HEX_ROW_STEP_FACTOR: f64 = 1.5;
pub const HEX_VERTEX_ANGLES_DEG: [f64; 6] = [30.0, 90.0, 150.0, 210.0, 270.0, 330.0];

pub const GHANA_SOUTH: f64 = 4.5;
pub const GHANA_NORTH: f64 = 11.5;
pub const GHANA_WEST: f64 = -3.5;
pub const GHANA_EAST: f64 = 1.5;

// Aggregation search radius, in cell sizes (planar degrees, not geodesic)
pub const SEARCH_RADIUS_FACTOR: f64 = 2.2;

// Coverage scoring weights
pub const OXYGEN_WEIGHT: f64 = 2.5;
pub const ICU_WEIGHT: f64 = 2.0;
pub const SURGERY_WEIGHT: f64 = 1.5;
pub const OBSTETRICS_WEIGHT: f64 = 1.0;
pub const PEDIATRICS_WEIGHT: f64 = 1.0;
pub const FLAG_PENALTY: f64 = 0.5;

// Intensity de-banding coefficients. Output-compatible values, keep verbatim.
pub const JITTER_SCORE_COEFF: f64 = 7.9;
pub const JITTER_COUNT_COEFF: f64 = 1.7;
pub const JITTER_DIVISOR: f64 = 30.0;
pub const SPATIAL_LAT_COEFF: f64 = 3.4;
pub const SPATIAL_LNG_COEFF: f64 = 2.7;
pub const SPATIAL_DIVISOR: f64 = 12.0;

pub const DEFAULT_DESERT_INTENSITY: f64 = 0.7;

// Composite index
pub const DEFAULT_DOCTORS_PER_1000: f64 = 1.0;
pub const DEFAULT_BEDS_PER_1000: f64 = 3.0;
pub const HOSPITALS_PER_100K_TARGET: f64 = 1.0;

pub const DOCTOR_WEIGHT: f64 = 0.25;
pub const BEDS_WEIGHT: f64 = 0.20;
pub const HOSPITAL_DENSITY_WEIGHT: f64 = 0.20;
pub const GEOGRAPHIC_WEIGHT: f64 = 0.20;
pub const EQUITY_WEIGHT: f64 = 0.15;

pub const MAX_COVERAGE_INDEX: f64 = 10.0;

// Proximity
pub const DEFAULT_COLD_SPOT_RADIUS_KM: f64 = 50.0;
pub const DEFAULT_MEDICAL_DESERT_RADIUS_KM: f64 = 50.0;
