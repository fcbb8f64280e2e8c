/// Cold-spot and radius search demo over the Ghana gazetteer

use colored::Colorize;
use medical_desert::aggregate::SpecialtyFilter;
use medical_desert::analysis::{AnalysisProps, CoverageAnalysis};
use medical_desert::config::AnalysisConfig;
use medical_desert::facility::Facility;
use medical_desert::proximity::{facilities_within_radius, find_cold_spots, find_medical_deserts};
use medical_desert::reference::ReferenceData;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let reference = ReferenceData::ghana()?;
    let facilities = vec![
        Facility::new("f1", "Greater Accra").with_city("Accra").with_specialties("cardiology"),
        Facility::new("f2", "Ashanti")
            .with_city("Kumasi")
            .with_type("hospital")
            .with_specialties("cardiology, pediatrics"),
        Facility::new("f3", "Northern").with_city("Tamale").with_specialties("pediatrics"),
        Facility::new("f4", "Western").with_city("Takoradi").with_specialties("ophthalmology"),
    ];

    let config = AnalysisConfig {
        anchor_to_city: true,
        ..AnalysisConfig::default()
    };
    let analysis = CoverageAnalysis::new(AnalysisProps {
        reference: &reference,
        config,
    });
    let points = analysis.locate_facilities(&facilities);

    let accra = reference.gazetteer().geocode(Some("Accra"), None).ok_or("accra missing from gazetteer")?;
    println!("{}", "Facilities within 250 km of Accra".bold());
    for nearby in facilities_within_radius(&points, accra, 250.0) {
        println!("  {:<6} {:>8.2} km", nearby.id, nearby.distance_km);
    }

    let filter = SpecialtyFilter::new(["cardiology"]);
    let spots = find_cold_spots(&reference.cities, &points, &filter, 100.0);
    println!("\n{} ({} cities)", "Cardiology cold spots beyond 100 km".bold(), spots.len());
    for spot in spots.iter().take(15) {
        let km = spot.nearest_facility_km.map(|d| format!("{:.1} km", d)).unwrap_or_else(|| "none".into());
        println!("  {:<18} {}", spot.city, km.as_str().yellow());
    }

    let deserts = find_medical_deserts(&reference.cities, &points, &reference.region_population, 50.0);
    println!("\n{} ({} cities)", "No hospital within 50 km".bold(), deserts.len());
    for city in deserts.iter().take(15) {
        let km = city.nearest_hospital_km.map(|d| format!("{:.1} km", d)).unwrap_or_else(|| "none".into());
        let population = city.population.map(|p| p.to_string()).unwrap_or_else(|| "-".into());
        println!("  {:<18} {:>10}  {}", city.city, km.as_str().magenta(), population);
    }
    Ok(())
}
