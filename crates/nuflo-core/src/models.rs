//! Core data models for the well-sensor deployment.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A simulated water-well sensor with its latest readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Well {
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "pH")]
    pub ph: f64,
    /// Lead concentration in ppb
    pub lead: f64,
    /// Coliform count in CFU/100ml
    pub coliform: u32,
    /// Water temperature in degrees Celsius
    pub temperature: f64,
    /// Total dissolved solids in ppm
    pub tds: f64,
    #[serde(default)]
    pub alert: bool,
    /// Written as the issue label, or `""` when the well is not alerted
    #[serde(default, with = "issue_serde")]
    pub issue: Option<WellIssue>,
}

impl Well {
    /// Create a well with the given readings and no alert.
    pub fn new(
        lat: f64,
        lon: f64,
        ph: f64,
        lead: f64,
        coliform: u32,
        temperature: f64,
        tds: f64,
    ) -> Self {
        Self {
            lat,
            lon,
            ph,
            lead,
            coliform,
            temperature,
            tds,
            alert: false,
            issue: None,
        }
    }

    /// Human-readable issue label, empty when the well is not alerted.
    pub fn issue_label(&self) -> &'static str {
        self.issue.map(WellIssue::label).unwrap_or("")
    }
}

/// A LoRa gateway wells report through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gateway {
    pub lat: f64,
    pub lon: f64,
}

impl Gateway {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// The reading that caused a well to be flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WellIssue {
    #[serde(rename = "pH out of range")]
    PhOutOfRange,
    #[serde(rename = "Lead levels too high")]
    LeadTooHigh,
    #[serde(rename = "High coliform levels")]
    HighColiform,
    #[serde(rename = "High temperature levels")]
    HighTemperature,
    #[serde(rename = "High TDS levels")]
    HighTds,
    #[serde(rename = "Unknown issue")]
    Unknown,
}

impl WellIssue {
    pub fn label(self) -> &'static str {
        match self {
            WellIssue::PhOutOfRange => "pH out of range",
            WellIssue::LeadTooHigh => "Lead levels too high",
            WellIssue::HighColiform => "High coliform levels",
            WellIssue::HighTemperature => "High temperature levels",
            WellIssue::HighTds => "High TDS levels",
            WellIssue::Unknown => "Unknown issue",
        }
    }
}

impl WellIssue {
    const ALL: [WellIssue; 6] = [
        WellIssue::PhOutOfRange,
        WellIssue::LeadTooHigh,
        WellIssue::HighColiform,
        WellIssue::HighTemperature,
        WellIssue::HighTds,
        WellIssue::Unknown,
    ];

    /// Look up an issue by its label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|issue| issue.label() == label)
    }
}

impl fmt::Display for WellIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

mod issue_serde {
    use super::*;

    pub fn serialize<S: Serializer>(
        issue: &Option<WellIssue>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(issue.map(WellIssue::label).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<WellIssue>, D::Error> {
        match Option::<String>::deserialize(deserializer)?.as_deref() {
            None | Some("") => Ok(None),
            Some(label) => WellIssue::from_label(label)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("unknown well issue: {label}"))),
        }
    }
}

/// Logical connection from a well to its nearest gateway.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub well_index: usize,
    pub gateway_index: usize,
    pub distance_km: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_well_has_no_alert() {
        let well = Well::new(-10.0, -75.0, 7.0, 0.01, 10, 22.0, 200.0);
        assert!(!well.alert);
        assert_eq!(well.issue, None);
        assert_eq!(well.issue_label(), "");
    }

    #[test]
    fn issue_serializes_as_label() {
        let json = serde_json::to_string(&WellIssue::LeadTooHigh).unwrap();
        assert_eq!(json, "\"Lead levels too high\"");
        assert_eq!(WellIssue::Unknown.to_string(), "Unknown issue");
        assert_eq!(WellIssue::from_label("High TDS levels"), Some(WellIssue::HighTds));
        assert_eq!(WellIssue::from_label("bogus"), None);
    }

    #[test]
    fn well_record_uses_empty_issue() {
        let well = Well::new(-10.0, -75.0, 7.0, 0.01, 10, 22.0, 200.0);
        let value = serde_json::to_value(&well).unwrap();
        assert_eq!(value["issue"], "");
        assert_eq!(value["pH"], 7.0);
        assert!(value.get("ph").is_none());

        let back: Well = serde_json::from_value(value).unwrap();
        assert_eq!(back, well);
    }

    #[test]
    fn alerted_well_record_round_trips() {
        let well = Well {
            alert: true,
            issue: Some(WellIssue::HighColiform),
            ..Well::new(-10.0, -75.0, 7.0, 0.01, 80, 22.0, 200.0)
        };
        let value = serde_json::to_value(&well).unwrap();
        assert_eq!(value["issue"], "High coliform levels");
        assert_eq!(serde_json::from_value::<Well>(value).unwrap(), well);

        let json = r#"{"lat":0,"lon":0,"pH":7,"lead":0,"coliform":0,"temperature":20,"tds":50}"#;
        let missing: Well = serde_json::from_str(json).unwrap();
        assert_eq!(missing.issue, None);
        assert!(!missing.alert);
    }
}
