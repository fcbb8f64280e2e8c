/// Facility records as delivered by the ingestion layer
///
/// Text fields are free-form and often missing. The engine only reads them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Facility {
    pub id: String,
    pub region: String,
    pub name: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub specialties: Option<String>,
    pub capabilities: Option<String>,
    pub equipment: Option<String>,
    pub services: Option<String>,
    pub facility_type: Option<String>,
    pub organization_type: Option<String>,
    pub doctors: Option<u32>,
    pub beds: Option<u32>,
    pub confidence: Option<f64>,
    pub flags: Vec<String>,
}

impl Facility {
    pub fn new(id: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            region: region.into(),
            ..Self::default()
        }
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_specialties(mut self, text: impl Into<String>) -> Self {
        self.specialties = Some(text.into());
        self
    }

    pub fn with_capabilities(mut self, text: impl Into<String>) -> Self {
        self.capabilities = Some(text.into());
        self
    }

    pub fn with_equipment(mut self, text: impl Into<String>) -> Self {
        self.equipment = Some(text.into());
        self
    }

    pub fn with_services(mut self, text: impl Into<String>) -> Self {
        self.services = Some(text.into());
        self
    }

    pub fn with_type(mut self, facility_type: impl Into<String>) -> Self {
        self.facility_type = Some(facility_type.into());
        self
    }

    pub fn with_organization_type(mut self, organization_type: impl Into<String>) -> Self {
        self.organization_type = Some(organization_type.into());
        self
    }

    pub fn with_staffing(mut self, doctors: Option<u32>, beds: Option<u32>) -> Self {
        self.doctors = doctors;
        self.beds = beds;
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flags.push(flag.into());
        self
    }

    pub fn is_hospital(&self) -> bool {
        self.facility_type
            .as_deref()
            .is_some_and(|t| t.trim().eq_ignore_ascii_case("hospital"))
    }

    pub fn is_clinic(&self) -> bool {
        self.facility_type
            .as_deref()
            .is_some_and(|t| t.trim().eq_ignore_ascii_case("clinic"))
    }

    pub fn is_ngo(&self) -> bool {
        self.organization_type
            .as_deref()
            .is_some_and(|t| t.trim().eq_ignore_ascii_case("ngo"))
    }

    pub fn has_flags(&self) -> bool {
        !self.flags.is_empty()
    }

    /// Lowercased specialties, capabilities and services joined for keyword search
    pub fn search_text(&self) -> String {
        [&self.specialties, &self.capabilities, &self.services]
            .into_iter()
            .flatten()
            .map(|s| s.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Specialty list split on commas, semicolons and pipes
    pub fn specialty_list(&self) -> Vec<String> {
        self.specialties
            .as_deref()
            .unwrap_or("")
            .split([',', ';', '|'])
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn confidence(&self) -> Option<f64> {
        self.confidence
            .filter(|c| c.is_finite())
            .map(|c| c.clamp(0.0, 1.0))
    }
}
