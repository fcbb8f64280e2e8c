/// Country boundary and point-in-polygon
///
/// Even-odd ray casting: a ray from the point towards +longitude toggles
/// inside/outside at every edge it crosses. The half-open test on latitude
/// (`(a.lat > p.lat) != (b.lat > p.lat)`) counts a shared vertex once.

use crate::coordinate::Coordinate;
use crate::error::{EngineError, Result};
use crate::hex_grid::BoundingBox;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryPolygon {
    vertices: Vec<Coordinate>,
}

impl BoundaryPolygon {
    /// Accepts open or closed rings. Fails with fewer than 3 distinct vertices.
    pub fn new<I>(vertices: I) -> Result<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut vertices: Vec<Coordinate> = vertices.into_iter().collect();

        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(EngineError::NonFiniteVertex { index });
        }

        let mut distinct: Vec<Coordinate> = Vec::with_capacity(vertices.len());
        for v in &vertices {
            if !distinct.contains(v) {
                distinct.push(*v);
            }
        }
        if distinct.len() < 3 {
            return Err(EngineError::DegeneratePolygon {
                vertices: distinct.len(),
            });
        }

        if vertices.first() != vertices.last() {
            vertices.push(vertices[0]);
        }
        Ok(Self { vertices })
    }

    /// Closed ring, first vertex repeated at the end
    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        point_in_polygon(point, &self.vertices)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox {
            south: f64::INFINITY,
            north: f64::NEG_INFINITY,
            west: f64::INFINITY,
            east: f64::NEG_INFINITY,
        };
        for v in &self.vertices {
            bbox.south = bbox.south.min(v.lat);
            bbox.north = bbox.north.max(v.lat);
            bbox.west = bbox.west.min(v.lng);
            bbox.east = bbox.east.max(v.lng);
        }
        bbox
    }
}

/// Ray-casting test over a raw ring; works for open and closed rings alike
pub fn point_in_polygon(point: Coordinate, ring: &[Coordinate]) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[j];
        if (a.lat > point.lat) != (b.lat > point.lat) {
            let cross_lng = (b.lng - a.lng) * (point.lat - a.lat) / (b.lat - a.lat) + a.lng;
            if point.lng < cross_lng {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng)
    }

    fn square() -> BoundaryPolygon {
        BoundaryPolygon::new([c(0.0, 0.0), c(0.0, 4.0), c(4.0, 4.0), c(4.0, 0.0), c(0.0, 0.0)]).unwrap()
    }

    #[test]
    fn centroid_of_convex_polygon_is_inside() {
        assert!(square().contains(c(2.0, 2.0)));
        let triangle = BoundaryPolygon::new([c(0.0, 0.0), c(3.0, 0.0), c(0.0, 3.0)]).unwrap();
        assert!(triangle.contains(c(1.0, 1.0)));
    }

    #[test]
    fn far_points_are_outside() {
        let polygon = square();
        for p in [c(90.0, 180.0), c(-45.0, 2.0), c(2.0, -170.0), c(2.0, 4.0001)] {
            assert!(!polygon.contains(p), "{:?} should be outside", p);
        }
    }

    #[test]
    fn open_and_closed_rings_agree() {
        let open = BoundaryPolygon::new([c(0.0, 0.0), c(0.0, 4.0), c(4.0, 4.0), c(4.0, 0.0)]).unwrap();
        let closed = square();
        assert_eq!(open.vertices(), closed.vertices());
        for p in [c(1.0, 1.0), c(3.9, 0.1), c(5.0, 5.0)] {
            assert_eq!(open.contains(p), closed.contains(p));
        }
    }

    #[test]
    fn concave_notch_is_excluded() {
        // U shape: the notch between the arms is outside
        let u = BoundaryPolygon::new([
            c(0.0, 0.0),
            c(0.0, 3.0),
            c(3.0, 3.0),
            c(3.0, 2.0),
            c(1.0, 2.0),
            c(1.0, 1.0),
            c(3.0, 1.0),
            c(3.0, 0.0),
        ])
        .unwrap();
        assert!(u.contains(c(0.5, 1.5)));
        assert!(u.contains(c(2.0, 0.5)));
        assert!(u.contains(c(2.0, 2.5)));
        assert!(!u.contains(c(2.0, 1.5)));
    }

    #[test]
    fn ray_through_vertex_counts_once() {
        // Diamond: the ray from (0, -5) passes exactly through the vertex at (0, 2)
        let diamond = BoundaryPolygon::new([c(2.0, 0.0), c(0.0, 2.0), c(-2.0, 0.0), c(0.0, -2.0)]).unwrap();
        assert!(diamond.contains(c(0.0, 0.0)));
        assert!(!diamond.contains(c(0.0, -5.0)));
        assert!(!diamond.contains(c(0.0, 5.0)));
    }

    #[test]
    fn degenerate_polygons_are_rejected() {
        assert!(matches!(
            BoundaryPolygon::new([c(0.0, 0.0), c(1.0, 1.0)]),
            Err(EngineError::DegeneratePolygon { vertices: 2 })
        ));
        assert!(matches!(
            BoundaryPolygon::new([c(0.0, 0.0), c(1.0, 1.0), c(0.0, 0.0)]),
            Err(EngineError::DegeneratePolygon { vertices: 2 })
        ));
        assert!(matches!(
            BoundaryPolygon::new(Vec::<Coordinate>::new()),
            Err(EngineError::DegeneratePolygon { vertices: 0 })
        ));
        assert!(matches!(
            BoundaryPolygon::new([c(0.0, 0.0), c(f64::NAN, 1.0), c(1.0, 0.0)]),
            Err(EngineError::NonFiniteVertex { index: 1 })
        ));
    }

    #[test]
    fn bounding_box_spans_vertices() {
        let bbox = square().bounding_box();
        assert_eq!((bbox.south, bbox.north, bbox.west, bbox.east), (0.0, 4.0, 0.0, 4.0));
    }
}
