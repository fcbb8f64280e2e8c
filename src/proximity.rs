/// Geodesic proximity queries
///
/// Great-circle distances come from h3o's haversine (`LatLng::distance_km`).
/// Unlike the grid aggregation these are real kilometres.

use crate::aggregate::SpecialtyFilter;
use crate::analysis::FacilityPoint;
use crate::coordinate::{Coordinate, round_to};
use crate::reference::{PlaceTable, RegionPopulation};
use h3o::LatLng;
use serde::Serialize;
use std::cmp::Ordering;

pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    match (LatLng::new(a.lat, a.lng), LatLng::new(b.lat, b.lng)) {
        (Ok(a), Ok(b)) => a.distance_km(b),
        _ => f64::INFINITY,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyFacility {
    pub id: String,
    pub coordinate: Coordinate,
    pub distance_km: f64,
}

/// Facilities within `radius_km` of `center`, nearest first
pub fn facilities_within_radius(points: &[FacilityPoint], center: Coordinate, radius_km: f64) -> Vec<NearbyFacility> {
    let mut found: Vec<NearbyFacility> = points
        .iter()
        .filter_map(|p| {
            let d = distance_km(center, p.coordinate);
            (d <= radius_km).then(|| NearbyFacility {
                id: p.id.clone(),
                coordinate: p.coordinate,
                distance_km: round_to(d, 2),
            })
        })
        .collect();
    found.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    found
}

pub fn nearest_facility(points: &[FacilityPoint], center: Coordinate) -> Option<NearbyFacility> {
    points
        .iter()
        .map(|p| (p, distance_km(center, p.coordinate)))
        .filter(|(_, d)| d.is_finite())
        .min_by(|(a, da), (b, db)| da.partial_cmp(db).unwrap_or(Ordering::Equal).then_with(|| a.id.cmp(&b.id)))
        .map(|(p, d)| NearbyFacility {
            id: p.id.clone(),
            coordinate: p.coordinate,
            distance_km: round_to(d, 2),
        })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColdSpot {
    pub city: String,
    pub coordinate: Coordinate,
    /// `None` when no facility passes the filter at all
    pub nearest_facility_km: Option<f64>,
}

fn title_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Raw great-circle distance to the closest point, unrounded
fn nearest_distance(points: &[FacilityPoint], center: Coordinate) -> Option<f64> {
    points
        .iter()
        .map(|p| distance_km(center, p.coordinate))
        .filter(|d| d.is_finite())
        .min_by(f64::total_cmp)
}

/// Cities whose nearest candidate is missing or strictly beyond `radius_km`
fn uncovered_cities<'a>(
    cities: &'a PlaceTable,
    candidates: &[FacilityPoint],
    radius_km: f64,
) -> Vec<(&'a str, Coordinate, Option<f64>)> {
    cities
        .iter()
        .filter_map(|(name, coordinate)| {
            let nearest = nearest_distance(candidates, coordinate);
            match nearest {
                Some(d) if d <= radius_km => None,
                _ => Some((name, coordinate, nearest)),
            }
        })
        .collect()
}

/// Farthest first, cities with no candidate at all before everything else
fn farthest_first(a: (Option<f64>, &str), b: (Option<f64>, &str)) -> Ordering {
    let rank = |d: Option<f64>| d.unwrap_or(f64::INFINITY);
    rank(b.0).total_cmp(&rank(a.0)).then_with(|| a.1.cmp(b.1))
}

/// Gazetteer cities farther than `radius_km` from every facility that passes `filter`
pub fn find_cold_spots(
    cities: &PlaceTable,
    points: &[FacilityPoint],
    filter: &SpecialtyFilter,
    radius_km: f64,
) -> Vec<ColdSpot> {
    let candidates: Vec<FacilityPoint> = points
        .iter()
        .filter(|p| filter.accepts(&p.search_text))
        .cloned()
        .collect();

    let mut spots: Vec<ColdSpot> = uncovered_cities(cities, &candidates, radius_km)
        .into_iter()
        .map(|(name, coordinate, nearest)| ColdSpot {
            city: title_case(name),
            coordinate,
            nearest_facility_km: nearest.map(|d| round_to(d, 2)),
        })
        .collect();
    spots.sort_by(|a, b| {
        farthest_first(
            (a.nearest_facility_km, a.city.as_str()),
            (b.nearest_facility_km, b.city.as_str()),
        )
    });
    spots
}

/// A gazetteer city with no hospital in reach
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesertCity {
    pub city: String,
    pub coordinate: Coordinate,
    /// `None` when there is no hospital anywhere
    pub nearest_hospital_km: Option<f64>,
    /// Population of the region whose name overlaps the city name
    pub population: Option<u64>,
}

/// Gazetteer cities with no hospital within `radius_km`
///
/// Only points marked as hospitals count; NGO-run sites are excluded when
/// the points are located.
pub fn find_medical_deserts(
    cities: &PlaceTable,
    points: &[FacilityPoint],
    population: &RegionPopulation,
    radius_km: f64,
) -> Vec<DesertCity> {
    let hospitals: Vec<FacilityPoint> = points.iter().filter(|p| p.is_hospital).cloned().collect();

    let mut deserts: Vec<DesertCity> = uncovered_cities(cities, &hospitals, radius_km)
        .into_iter()
        .map(|(name, coordinate, nearest)| DesertCity {
            city: title_case(name),
            coordinate,
            nearest_hospital_km: nearest.map(|d| round_to(d, 1)),
            population: population.get_fuzzy(name),
        })
        .collect();
    deserts.sort_by(|a, b| {
        farthest_first(
            (a.nearest_hospital_km, a.city.as_str()),
            (b.nearest_hospital_km, b.city.as_str()),
        )
    });
    deserts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::CoordinateSource;
    use approx::assert_abs_diff_eq;

    fn point(id: &str, lat: f64, lng: f64, text: &str) -> FacilityPoint {
        FacilityPoint {
            id: id.to_string(),
            name: None,
            coordinate: Coordinate::new(lat, lng),
            source: CoordinateSource::Reported,
            confidence: None,
            score: 0.0,
            search_text: text.to_string(),
            is_hospital: false,
        }
    }

    fn hospital(id: &str, lat: f64, lng: f64) -> FacilityPoint {
        FacilityPoint {
            is_hospital: true,
            ..point(id, lat, lng, "")
        }
    }

    const ACCRA: (f64, f64) = (5.6037, -0.1870);
    const KUMASI: (f64, f64) = (6.6885, -1.6244);
    const TAMALE: (f64, f64) = (9.4007, -0.8393);

    #[test]
    fn accra_to_kumasi_is_about_two_hundred_km() {
        let d = distance_km(Coordinate::new(ACCRA.0, ACCRA.1), Coordinate::new(KUMASI.0, KUMASI.1));
        assert_abs_diff_eq!(d, 200.0, epsilon = 5.0);
        assert_abs_diff_eq!(distance_km(Coordinate::new(1.0, 1.0), Coordinate::new(1.0, 1.0)), 0.0, epsilon = 1e-9);
        assert_eq!(
            distance_km(Coordinate::new(f64::NAN, 1.0), Coordinate::new(1.0, 1.0)),
            f64::INFINITY
        );
    }

    #[test]
    fn radius_search_sorts_by_distance() {
        let points = [
            point("kumasi", KUMASI.0, KUMASI.1, ""),
            point("tamale", TAMALE.0, TAMALE.1, ""),
            point("accra", ACCRA.0, ACCRA.1, ""),
        ];
        let found = facilities_within_radius(&points, Coordinate::new(5.65, -0.2), 250.0);
        let ids: Vec<&str> = found.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["accra", "kumasi"]);
        assert!(found[0].distance_km < found[1].distance_km);
    }

    #[test]
    fn nearest_of_none_is_none() {
        assert_eq!(nearest_facility(&[], Coordinate::new(0.0, 0.0)), None);
    }

    #[test]
    fn cold_spots_respect_filter_and_radius() {
        let cities = PlaceTable::from_entries([
            ("accra", ACCRA.0, ACCRA.1),
            ("kumasi", KUMASI.0, KUMASI.1),
            ("tamale", TAMALE.0, TAMALE.1),
            ("cape coast", 5.1036, -1.2466),
        ]);
        let points = [
            point("a", ACCRA.0, ACCRA.1, "cardiology"),
            point("k", KUMASI.0, KUMASI.1, "obstetrics"),
        ];

        let all = find_cold_spots(&cities, &points, &SpecialtyFilter::default(), 50.0);
        let names: Vec<&str> = all.iter().map(|s| s.city.as_str()).collect();
        // Tamale is farthest, Cape Coast next
        assert_eq!(names, vec!["Tamale", "Cape Coast"]);

        let cardio = find_cold_spots(&cities, &points, &SpecialtyFilter::new(["cardio"]), 50.0);
        assert_eq!(cardio.len(), 3);
        assert_eq!(cardio[0].city, "Tamale");

        let nothing = find_cold_spots(&cities, &points, &SpecialtyFilter::new(["neurosurgery"]), 50.0);
        assert_eq!(nothing.len(), 4);
        assert!(nothing.iter().all(|s| s.nearest_facility_km.is_none()));
        assert_eq!(nothing[0].city, "Accra");
    }

    #[test]
    fn cold_spot_radius_uses_unrounded_distance() {
        let city = Coordinate::new(ACCRA.0, ACCRA.1);
        let cities = PlaceTable::from_entries([("accra", ACCRA.0, ACCRA.1)]);
        let filter = SpecialtyFilter::default();

        let mut rounded_down = 0;
        for k in 0..20 {
            let facility = point("f", ACCRA.0, ACCRA.1 + 0.45 + k as f64 * 1e-5, "");
            let exact = distance_km(city, facility.coordinate);
            let shown = round_to(exact, 2);
            if shown < exact {
                rounded_down += 1;
            }

            // Just inside the displayed value but still short of the real distance
            let radius = shown.min(exact - 1e-9);
            let spots = find_cold_spots(&cities, std::slice::from_ref(&facility), &filter, radius);
            assert_eq!(spots.len(), 1, "{} km against radius {}", exact, radius);
            assert_eq!(spots[0].nearest_facility_km, Some(shown));

            assert!(find_cold_spots(&cities, &[facility], &filter, exact).is_empty());
        }
        assert!(rounded_down > 0);
    }

    #[test]
    fn medical_deserts_count_only_hospitals() {
        let cities = PlaceTable::from_entries([
            ("accra", ACCRA.0, ACCRA.1),
            ("kumasi", KUMASI.0, KUMASI.1),
            ("tamale", TAMALE.0, TAMALE.1),
        ]);
        let population = RegionPopulation::from_entries([("Greater Accra", 5_455_692), ("Northern", 2_310_939)]);
        let points = [
            hospital("korle-bu", ACCRA.0, ACCRA.1),
            point("kumasi-clinic", KUMASI.0, KUMASI.1, "general"),
        ];

        let deserts = find_medical_deserts(&cities, &points, &population, 50.0);
        let names: Vec<&str> = deserts.iter().map(|d| d.city.as_str()).collect();
        assert_eq!(names, vec!["Tamale", "Kumasi"]);
        assert!(deserts.iter().all(|d| d.nearest_hospital_km.is_some_and(|km| km > 50.0)));
        assert_eq!(deserts[1].population, None);

        let no_hospitals = find_medical_deserts(&cities, &points[1..], &population, 50.0);
        assert_eq!(no_hospitals.len(), 3);
        assert!(no_hospitals.iter().all(|d| d.nearest_hospital_km.is_none()));
        assert_eq!(no_hospitals[0].city, "Accra");
        assert_eq!(no_hospitals[0].population, Some(5_455_692));
    }
}
