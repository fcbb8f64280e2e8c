/// Terminal summary of an analysis run

use crate::analysis::AnalysisResult;
use colored::{ColoredString, Colorize};
use std::fmt;

/// Index colored by band: red below 4, yellow below 7, green otherwise
pub fn index_badge(index: f64) -> ColoredString {
    let text = format!("{:.1}/10", index);
    if index < 4.0 {
        text.as_str().red().bold()
    } else if index < 7.0 {
        text.as_str().yellow().bold()
    } else {
        text.as_str().green().bold()
    }
}

pub fn intensity_bar(intensity: f64, width: usize) -> String {
    let filled = (intensity.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Human-readable view of an `AnalysisResult`
pub struct Summary<'a> {
    pub result: &'a AnalysisResult,
    /// How many of the most severe desert cells to list
    pub top_deserts: usize,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;
        let stats = &result.coverage_index.stats;
        let terms = &result.coverage_index.terms;

        writeln!(f, "{}", "Healthcare coverage analysis".bold().underline())?;
        writeln!(f, "  coverage index    {}", index_badge(result.coverage_index.index))?;
        writeln!(
            f,
            "  facilities        {} ({} with inferred location)",
            stats.facility_count,
            result.inferred_count()
        )?;
        writeln!(
            f,
            "  doctors / beds    {} / {} ({:.3} and {:.3} per 1000)",
            stats.total_doctors, stats.total_beds, stats.doctors_per_1000, stats.beds_per_1000
        )?;
        writeln!(f, "  hospitals         {} ({:.2} per 100k)", stats.hospital_count, stats.hospitals_per_100k)?;
        writeln!(
            f,
            "  grid              {} cells, {} occupied, {} desert",
            stats.occupancy.total_cells,
            stats.occupancy.occupied_cells,
            result.desert_cells.len()
        )?;
        writeln!(
            f,
            "  regions           {} of {} with facilities",
            stats.regions_with_facilities, stats.regions_with_population
        )?;
        writeln!(
            f,
            "  terms             doctors {:.2}  beds {:.2}  hospitals {:.2}  geography {:.2}  equity {:.2}",
            terms.doctors, terms.beds, terms.hospital_density, terms.geographic, terms.equity
        )?;

        if !result.desert_cells.is_empty() && self.top_deserts > 0 {
            writeln!(f, "\n{}", "Most severe desert cells".bold())?;
            let mut deserts: Vec<_> = result.desert_cells.iter().collect();
            deserts.sort_by(|a, b| b.intensity.total_cmp(&a.intensity).then_with(|| a.id.cmp(&b.id)));
            for cell in deserts.into_iter().take(self.top_deserts) {
                writeln!(
                    f,
                    "  {:<12} {:>8.4}, {:>8.4}  {} {:.2}",
                    cell.id,
                    cell.center.lat,
                    cell.center.lng,
                    intensity_bar(cell.intensity, 20).as_str().red(),
                    cell.intensity
                )?;
            }
        }

        if !result.medical_deserts.is_empty() {
            writeln!(f, "\n{}", "Cities without a hospital nearby".bold())?;
            for city in &result.medical_deserts {
                let distance = match city.nearest_hospital_km {
                    Some(km) => format!("{:.1} km", km),
                    None => "no hospital".to_string(),
                };
                let population = city.population.map(|p| format!("region pop. {}", p)).unwrap_or_default();
                writeln!(f, "  {:<20} {:<12} {}", city.city, distance.as_str().magenta(), population)?;
            }
        }

        if !result.cold_spots.is_empty() {
            writeln!(f, "\n{}", "Cold spots".bold())?;
            for spot in &result.cold_spots {
                let distance = match spot.nearest_facility_km {
                    Some(km) => format!("{:.1} km", km),
                    None => "no facility".to_string(),
                };
                writeln!(f, "  {:<20} {}", spot.city, distance.as_str().cyan())?;
            }
        }

        Ok(())
    }
}

pub fn render_summary(result: &AnalysisResult, top_deserts: usize) -> String {
    Summary { result, top_deserts }.to_string()
}
