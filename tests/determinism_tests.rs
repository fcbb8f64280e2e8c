// Integration tests: repeated runs over the stock Ghana tables must agree bit for bit

use medical_desert::analysis::analyze;
use medical_desert::config::AnalysisConfig;
use medical_desert::coordinate::{CoordinateQuery, CoordinateResolver};
use medical_desert::facility::Facility;
use medical_desert::reference::ReferenceData;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const REGIONS: [&str; 6] = ["Ashanti", "Greater Accra", "Northern", "Volta", "Upper West", "Atlantis"];
const SPECIALTIES: [&str; 5] = ["pediatrics", "obstetrics", "cardiology", "ophthalmology", ""];

fn synthetic_facilities(count: usize, seed: u64) -> Vec<Facility> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let region = REGIONS[rng.random_range(0..REGIONS.len())];
            let mut facility = Facility::new(format!("fac-{:04}", i), region)
                .with_specialties(SPECIALTIES[rng.random_range(0..SPECIALTIES.len())])
                .with_staffing(Some(rng.random_range(0..5)), Some(rng.random_range(0..40)));
            if rng.random_bool(0.3) {
                facility = facility.with_equipment("oxygen concentrator");
            }
            if rng.random_bool(0.2) {
                facility = facility.with_capabilities("ICU, general surgery").with_type("hospital");
            }
            if rng.random_bool(0.1) {
                facility = facility.with_flag("incomplete");
            }
            if rng.random_bool(0.15) {
                facility = facility.with_location(rng.random_range(5.0..10.5), rng.random_range(-2.8..0.5));
            }
            facility
        })
        .collect()
}

#[test]
fn repeated_runs_are_bit_identical() {
    println!("🔁 Running the same analysis twice over 300 synthetic facilities");
    let reference = ReferenceData::ghana().unwrap();
    let facilities = synthetic_facilities(300, 42);
    let config = AnalysisConfig::new().with_cell_size(0.3);

    let first = analyze(&facilities, &reference, config.clone()).unwrap();
    let second = analyze(&facilities, &reference, config).unwrap();

    println!(
        "   {} cells, {} deserts, index {:.1}",
        first.heat_cells.len(),
        first.desert_cells.len(),
        first.coverage_index.index
    );

    assert_eq!(first.heat_cells.len(), second.heat_cells.len());
    for (a, b) in first.heat_cells.iter().zip(&second.heat_cells) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.intensity.to_bits(), b.intensity.to_bits());
        assert_eq!(a.score.to_bits(), b.score.to_bits());
    }
    assert_eq!(
        first.coverage_index.index.to_bits(),
        second.coverage_index.index.to_bits()
    );
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn input_order_does_not_change_cells() {
    let reference = ReferenceData::ghana().unwrap();
    let facilities = synthetic_facilities(120, 7);
    let mut reversed = facilities.clone();
    reversed.reverse();

    let config = AnalysisConfig::new().with_cell_size(0.4);
    let forward = analyze(&facilities, &reference, config.clone()).unwrap();
    let backward = analyze(&reversed, &reference, config).unwrap();

    for (a, b) in forward.heat_cells.iter().zip(&backward.heat_cells) {
        assert_eq!(a.facility_count, b.facility_count);
        approx::assert_abs_diff_eq!(a.score, b.score, epsilon = 1e-9);
    }
    assert_eq!(forward.coverage_index.index, backward.coverage_index.index);
}

#[test]
fn inferred_coordinates_are_stable_across_resolvers() {
    let reference = ReferenceData::ghana().unwrap();
    let a = CoordinateResolver::new(&reference);
    let b = CoordinateResolver::new(&reference);
    for i in 0..200 {
        let id = format!("facility-{}", i);
        let query = CoordinateQuery::new(&id, Some("Northern"));
        assert_eq!(a.resolve(query), b.resolve(query));
    }
}

#[test]
fn every_cell_and_inferred_facility_lies_in_ghana() {
    let reference = ReferenceData::ghana().unwrap();
    let facilities = synthetic_facilities(200, 99);
    let result = analyze(&facilities, &reference, AnalysisConfig::new()).unwrap();

    assert!(result.heat_cells.iter().all(|c| reference.boundary.contains(c.center)));
    for point in result.facility_points.iter().filter(|p| p.is_inferred()) {
        assert!(point.coordinate.lat > 4.0 && point.coordinate.lat < 11.5, "{:?}", point);
        assert!(point.coordinate.lng > -3.6 && point.coordinate.lng < 1.6, "{:?}", point);
    }
}
