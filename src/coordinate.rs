/// Coordinate resolution
///
/// Every facility gets a usable point. Reported coordinates pass through
/// untouched; everything else is anchored on a reference point and nudged by
/// a jitter derived from a stable string hash, so the same facility always
/// lands in the same place.
///
/// Hash contract v1: 32-bit signed multiply-accumulate over the UTF-16 code
/// units of `"<id>-<region>"`, `h = h * 31 + unit` with two's-complement
/// wraparound, then the absolute value as `u32`. Latitude jitter comes from
/// bits 0..10, longitude jitter from bits 10..20.

use crate::constants::{
    COORDINATE_DECIMALS, HASH_MULTIPLIER, JITTER_SLICE_BITS, JITTER_SLICE_MASK, LAT_JITTER_DEG,
    LNG_JITTER_DEG,
};
use crate::facility::Facility;
use crate::reference::ReferenceData;
use glam::DVec2;
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Planar view used by the grid: x = longitude, y = latitude
    pub fn to_vec2(self) -> DVec2 {
        DVec2::new(self.lng, self.lat)
    }

    pub fn from_vec2(v: DVec2) -> Self {
        Self { lat: v.y, lng: v.x }
    }

    pub fn rounded(self, decimals: i32) -> Self {
        Self {
            lat: round_to(self.lat, decimals),
            lng: round_to(self.lng, decimals),
        }
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Versioned string hash, see the module docs
pub fn stable_hash(key: &str) -> u32 {
    key.encode_utf16()
        .fold(0i32, |h, unit| {
            h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(unit as i32)
        })
        .unsigned_abs()
}

/// (lat, lng) offsets in degrees, each within half the jitter magnitude
pub fn jitter_offsets(hash: u32) -> (f64, f64) {
    let low = hash & JITTER_SLICE_MASK;
    let high = (hash >> JITTER_SLICE_BITS) & JITTER_SLICE_MASK;
    let mask = JITTER_SLICE_MASK as f64;
    (
        (low as f64 / mask - 0.5) * LAT_JITTER_DEG,
        (high as f64 / mask - 0.5) * LNG_JITTER_DEG,
    )
}

pub fn jitter_key(id: &str, region: Option<&str>) -> String {
    format!("{}-{}", id, region.map(str::trim).unwrap_or(""))
}

/// Where a resolved coordinate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSource {
    Reported,
    City,
    RegionCentroid,
    DefaultCenter,
}

impl CoordinateSource {
    pub fn is_inferred(&self) -> bool {
        *self != CoordinateSource::Reported
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedCoordinate {
    pub coordinate: Coordinate,
    pub source: CoordinateSource,
}

/// Inputs for one resolution
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateQuery<'a> {
    pub id: &'a str,
    pub region: Option<&'a str>,
    pub city: Option<&'a str>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl<'a> CoordinateQuery<'a> {
    pub fn new(id: &'a str, region: Option<&'a str>) -> Self {
        Self {
            id,
            region,
            ..Self::default()
        }
    }

    pub fn with_reported(mut self, lat: Option<f64>, lng: Option<f64>) -> Self {
        self.lat = lat;
        self.lng = lng;
        self
    }

    pub fn with_city(mut self, city: Option<&'a str>) -> Self {
        self.city = city;
        self
    }
}

impl<'a> From<&'a Facility> for CoordinateQuery<'a> {
    fn from(facility: &'a Facility) -> Self {
        Self {
            id: &facility.id,
            region: Some(facility.region.as_str()),
            city: facility.city.as_deref(),
            lat: facility.latitude,
            lng: facility.longitude,
        }
    }
}

pub struct CoordinateResolver<'a> {
    reference: &'a ReferenceData,
    anchor_to_city: bool,
}

impl<'a> CoordinateResolver<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self {
            reference,
            anchor_to_city: false,
        }
    }

    /// Prefer a gazetteer city over the region centroid as the jitter anchor
    pub fn with_city_anchors(mut self, anchor_to_city: bool) -> Self {
        self.anchor_to_city = anchor_to_city;
        self
    }

    pub fn resolve(&self, query: CoordinateQuery<'_>) -> ResolvedCoordinate {
        if let (Some(lat), Some(lng)) = (query.lat, query.lng) {
            if lat.is_finite() && lng.is_finite() {
                return ResolvedCoordinate {
                    coordinate: Coordinate::new(lat, lng),
                    source: CoordinateSource::Reported,
                };
            }
        }

        let (anchor, source) = self.anchor(query);
        let (d_lat, d_lng) = jitter_offsets(stable_hash(&jitter_key(query.id, query.region)));
        let coordinate = Coordinate::new(anchor.lat + d_lat, anchor.lng + d_lng).rounded(COORDINATE_DECIMALS);

        ResolvedCoordinate { coordinate, source }
    }

    pub fn resolve_facility(&self, facility: &Facility) -> ResolvedCoordinate {
        self.resolve(CoordinateQuery::from(facility))
    }

    fn anchor(&self, query: CoordinateQuery<'_>) -> (Coordinate, CoordinateSource) {
        if self.anchor_to_city {
            if let Some(city) = query.city.and_then(|c| self.reference.cities.get(c)) {
                return (city, CoordinateSource::City);
            }
        }
        match query.region.and_then(|r| self.reference.region_centroids.get(r)) {
            Some(centroid) => (centroid, CoordinateSource::RegionCentroid),
            None => {
                warn!(
                    "facility {} has unknown region {:?}, anchoring on default center",
                    query.id, query.region
                );
                (self.reference.default_center, CoordinateSource::DefaultCenter)
            }
        }
    }
}
