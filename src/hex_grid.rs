/// Hexagonal analysis grid clipped to a boundary
///
/// Pointy-top hexes in planar degree space. Rows run south to north every
/// `1.5 * size`, columns west to east every `sqrt(3) * size`, odd rows shifted
/// east by half a column. Enumeration order is row-major and fixed.

use crate::constants::{
    DEFAULT_CELL_SIZE_DEG, GHANA_EAST, GHANA_NORTH, GHANA_SOUTH, GHANA_WEST, HEX_ROW_STEP_FACTOR,
    HEX_VERTEX_ANGLES_DEG,
};
use crate::coordinate::Coordinate;
use crate::error::{EngineError, Result};
use crate::polygon::BoundaryPolygon;
use glam::DVec2;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::ghana()
    }
}

impl BoundingBox {
    pub fn new(south: f64, north: f64, west: f64, east: f64) -> Self {
        Self {
            south,
            north,
            west,
            east,
        }
    }

    pub fn ghana() -> Self {
        Self::new(GHANA_SOUTH, GHANA_NORTH, GHANA_WEST, GHANA_EAST)
    }

    pub fn validate(&self) -> Result<()> {
        let finite = [self.south, self.north, self.west, self.east]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.south > self.north || self.west > self.east {
            return Err(EngineError::InvalidBoundingBox {
                south: self.south,
                north: self.north,
                west: self.west,
                east: self.east,
            });
        }
        Ok(())
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        point.lat >= self.south && point.lat <= self.north && point.lng >= self.west && point.lng <= self.east
    }
}

/// Parameters for grid construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexGridParams {
    pub bounding_box: BoundingBox,
    pub cell_size: f64,
}

impl Default for HexGridParams {
    fn default() -> Self {
        Self {
            bounding_box: BoundingBox::ghana(),
            cell_size: DEFAULT_CELL_SIZE_DEG,
        }
    }
}

impl HexGridParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cell_size(cell_size: f64) -> Self {
        Self {
            cell_size,
            ..Self::default()
        }
    }

    pub fn with_bounds(bounding_box: BoundingBox, cell_size: f64) -> Self {
        Self {
            bounding_box,
            cell_size,
        }
    }

    pub fn row_step(&self) -> f64 {
        HEX_ROW_STEP_FACTOR * self.cell_size
    }

    pub fn column_step(&self) -> f64 {
        3f64.sqrt() * self.cell_size
    }

    pub fn validate(&self) -> Result<()> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(EngineError::InvalidCellSize(self.cell_size));
        }
        self.bounding_box.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HexCell {
    pub id: String,
    pub row: usize,
    pub column: usize,
    pub center: Coordinate,
}

impl HexCell {
    pub fn new(row: usize, column: usize, center: Coordinate) -> Self {
        Self {
            id: format!("hex-{}-{}", row, column),
            row,
            column,
            center,
        }
    }

    pub fn ring(&self, cell_size: f64) -> Vec<Coordinate> {
        hex_ring(self.center, cell_size)
    }
}

/// Six vertices at 30° + k·60° around the center, plus the first again to close
pub fn hex_ring(center: Coordinate, cell_size: f64) -> Vec<Coordinate> {
    let origin = center.to_vec2();
    let mut ring: Vec<Coordinate> = HEX_VERTEX_ANGLES_DEG
        .iter()
        .map(|deg| {
            let offset = DVec2::from_angle(deg.to_radians()) * cell_size;
            Coordinate::from_vec2(origin + offset)
        })
        .collect();
    ring.push(ring[0]);
    ring
}

/// All cell centers inside `boundary`, row-major from the south-west corner
pub fn build_hex_grid(params: &HexGridParams, boundary: &BoundaryPolygon) -> Result<Vec<HexCell>> {
    params.validate()?;

    let bbox = params.bounding_box;
    let row_step = params.row_step();
    let column_step = params.column_step();

    let mut cells = Vec::new();
    let mut candidates = 0usize;
    let mut row = 0usize;
    loop {
        let lat = bbox.south + row as f64 * row_step;
        if lat > bbox.north {
            break;
        }
        let offset = if row % 2 == 1 { column_step / 2.0 } else { 0.0 };

        let mut column = 0usize;
        loop {
            let lng = bbox.west + offset + column as f64 * column_step;
            if lng > bbox.east {
                break;
            }
            candidates += 1;
            let center = Coordinate::new(lat, lng);
            if boundary.contains(center) {
                cells.push(HexCell::new(row, column, center));
            }
            column += 1;
        }
        row += 1;
    }

    debug!(
        "hex grid: {} of {} candidate centers inside boundary (cell size {})",
        cells.len(),
        candidates,
        params.cell_size
    );
    Ok(cells)
}
