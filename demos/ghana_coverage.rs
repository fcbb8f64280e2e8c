/// Ghana coverage demo
///
/// Builds a small synthetic facility list, runs the full analysis over the
/// stock Ghana tables and prints the summary. Pass a JSON config path as the
/// first argument to override the defaults.

use colored::Colorize;
use medical_desert::analysis::analyze;
use medical_desert::config::AnalysisConfig;
use medical_desert::facility::Facility;
use medical_desert::reference::ReferenceData;
use medical_desert::report::render_summary;

fn sample_facilities() -> Vec<Facility> {
    vec![
        Facility::new("kath", "Ashanti")
            .with_city("Kumasi")
            .with_location(6.6971, -1.6296)
            .with_type("hospital")
            .with_equipment("Oxygen plant, CT scanner")
            .with_capabilities("ICU, neurosurgery, general surgery")
            .with_specialties("Obstetrics, Pediatrics, Cardiology")
            .with_staffing(Some(420), Some(1200)),
        Facility::new("korle-bu", "Greater Accra")
            .with_city("Accra")
            .with_location(5.5364, -0.2262)
            .with_type("hospital")
            .with_equipment("oxygen concentrators")
            .with_capabilities("ICU, surgery")
            .with_specialties("Obstetrics, Pediatrics, Oncology")
            .with_staffing(Some(900), Some(2000)),
        Facility::new("tamale-th", "Northern")
            .with_city("Tamale")
            .with_type("hospital")
            .with_services("General surgery")
            .with_specialties("Pediatrics")
            .with_staffing(Some(85), Some(400)),
        Facility::new("ho-clinic", "Volta")
            .with_city("Ho")
            .with_type("clinic")
            .with_specialties("obstetrics")
            .with_staffing(Some(4), Some(20)),
        Facility::new("wa-chps", "Upper West")
            .with_type("clinic")
            .with_flag("unverified location")
            .with_staffing(Some(1), None),
        Facility::new("bole-health", "Savannah")
            .with_type("health center")
            .with_capabilities("oxygen therapy")
            .with_confidence(0.4),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = match std::env::args().nth(1) {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::new(),
    };
    let reference = ReferenceData::ghana()?;
    let facilities = sample_facilities();

    let banner = format!("Analysing {} facilities at {}° cells", facilities.len(), config.cell_size_deg);
    println!("{}", banner.as_str().dimmed());
    let result = analyze(&facilities, &reference, config)?;
    println!("{}", render_summary(&result, 8));

    Ok(())
}
