//! Hazard report records as served by the reports API, plus the draft
//! payload the submission form posts back.

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Enumerated hazard categories. Anything else the backend sends is kept as
/// free text on the report and rendered with the default icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HazardType {
    Tsunami,
    Storm,
    Waves,
    Flooding,
}

impl HazardType {
    pub const ALL: [HazardType; 4] = [
        HazardType::Tsunami,
        HazardType::Storm,
        HazardType::Waves,
        HazardType::Flooding,
    ];

    /// Case-insensitive parse of the free-text hazard type.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "tsunami" => Some(Self::Tsunami),
            "storm" => Some(Self::Storm),
            "waves" => Some(Self::Waves),
            "flooding" => Some(Self::Flooding),
            _ => None,
        }
    }

    /// Lowercase key used by filters and the icon registry
    pub fn key(&self) -> &'static str {
        match self {
            Self::Tsunami => "tsunami",
            Self::Storm => "storm",
            Self::Waves => "waves",
            Self::Flooding => "flooding",
        }
    }

    /// Human label used by the analytics chart and the form select
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tsunami => "Tsunami",
            Self::Storm => "Storm Surge",
            Self::Waves => "High Waves",
            Self::Flooding => "Flooding",
        }
    }
}

impl fmt::Display for HazardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Review status of a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportStatus {
    #[default]
    Pending,
    Verified,
    Other(String),
}

impl ReportStatus {
    /// CSS modifier for the status badge
    pub fn badge_class(&self) -> String {
        match self {
            Self::Pending => "pending".to_string(),
            Self::Verified => "verified".to_string(),
            Self::Other(label) => label.to_lowercase(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Verified => "Verified",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for ReportStatus {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "pending" => Self::Pending,
            "verified" => Self::Verified,
            _ => Self::Other(value),
        }
    }
}

impl From<ReportStatus> for String {
    fn from(value: ReportStatus) -> Self {
        match value {
            ReportStatus::Pending => "pending".to_string(),
            ReportStatus::Verified => "verified".to_string(),
            ReportStatus::Other(label) => label,
        }
    }
}

/// Missing and `null` fields both decode to the default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Report record (mirrors the backend JSON shape).
///
/// Only `id` is required. Every other field tolerates being absent or
/// `null`, so one sparse record cannot fail the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hazard_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub severity: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub datetime: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact_phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ReportStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media: Vec<String>,
}

impl Report {
    pub fn hazard(&self) -> Option<HazardType> {
        HazardType::parse(&self.hazard_type)
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        parse_location(&self.location)
    }

    pub fn display_datetime(&self) -> String {
        display_datetime(&self.datetime)
    }
}

/// Parses a `"lat, lon"` location string.
///
/// Returns `None` for place names, missing halves, extra components and
/// anything that is not a finite number.
pub fn parse_location(location: &str) -> Option<(f64, f64)> {
    let mut parts = location.split(',');
    let lat = parts.next()?.trim().parse::<f64>().ok()?;
    let lon = parts.next()?.trim().parse::<f64>().ok()?;
    if parts.next().is_some() || !lat.is_finite() || !lon.is_finite() {
        return None;
    }
    Some((lat, lon))
}

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Formats a report timestamp for the table.
///
/// RFC 3339 values are converted to local time; `datetime-local` values are
/// already local. Anything else is returned unchanged.
pub fn display_datetime(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string();
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Fields collected by the submission form. Serialized as the `report` part
/// of the multipart upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    pub hazard_type: String,
    pub severity: String,
    pub location: String,
    pub datetime: String,
    pub description: String,
    pub contact_name: String,
    pub contact_phone: String,
}

impl ReportDraft {
    pub fn to_json(&self) -> crate::error::Result<String> {
        serde_json::to_string(self).map_err(|e| crate::error::DashboardError::Encode(e.to_string()))
    }
}

/// A draft together with the files attached in the form.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSubmission<M> {
    pub report: ReportDraft,
    pub media: Vec<M>,
}

impl<M> ReportSubmission<M> {
    pub fn new(report: ReportDraft, media: Vec<M>) -> Self {
        Self { report, media }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location() {
        assert_eq!(parse_location("13.08, 80.27"), Some((13.08, 80.27)));
        assert_eq!(parse_location(" -8.5 ,115.2 "), Some((-8.5, 115.2)));
        assert_eq!(parse_location("not-a-coordinate"), None);
        assert_eq!(parse_location("Marina Beach, Chennai"), None);
        assert_eq!(parse_location("13.08"), None);
        assert_eq!(parse_location("13.08, "), None);
        assert_eq!(parse_location("1, 2, 3"), None);
        assert_eq!(parse_location("NaN, 80.27"), None);
        assert_eq!(parse_location("inf, 80.27"), None);
        assert_eq!(parse_location(""), None);
    }

    #[test]
    fn test_hazard_type_parse_is_case_insensitive() {
        assert_eq!(HazardType::parse("Tsunami"), Some(HazardType::Tsunami));
        assert_eq!(HazardType::parse("STORM"), Some(HazardType::Storm));
        assert_eq!(HazardType::parse(" waves "), Some(HazardType::Waves));
        assert_eq!(HazardType::parse("rip current"), None);
    }

    #[test]
    fn test_report_deserializes_backend_shape() {
        let json = r#"{
            "id": 7,
            "hazardType": "Flooding",
            "severity": "high",
            "location": "19.07, 72.87",
            "datetime": "2025-09-10T14:30",
            "description": "Street flooding",
            "contactName": "Asha",
            "contactPhone": "+91 98400 00000",
            "status": "Verified"
        }"#;
        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.id, 7);
        assert_eq!(report.hazard(), Some(HazardType::Flooding));
        assert_eq!(report.status, ReportStatus::Verified);
        assert_eq!(report.status.badge_class(), "verified");
        assert!(report.media.is_empty());
        assert_eq!(report.coordinates(), Some((19.07, 72.87)));
    }

    #[test]
    fn test_sparse_records_decode_with_defaults() {
        let json = r#"[
            {"id": 1, "hazardType": "Tsunami", "location": "13.08, 80.27", "status": "verified"},
            {"id": 2, "location": "19.07, 72.87", "description": "no type"},
            {"id": 3, "hazardType": "rip current", "location": "11.0, 79.8"},
            {"id": 4, "hazardType": "storm", "contactName": null, "contactPhone": null,
             "status": null, "media": null, "severity": null}
        ]"#;
        let reports: Vec<Report> = serde_json::from_str(json).unwrap();
        assert_eq!(reports.len(), 4);

        assert_eq!(reports[0].status, ReportStatus::Verified);

        assert_eq!(reports[1].hazard_type, "");
        assert_eq!(reports[1].hazard(), None);
        assert_eq!(reports[1].description, "no type");

        assert_eq!(reports[2].hazard_type, "rip current");
        assert_eq!(reports[2].hazard(), None);

        assert_eq!(reports[3].hazard(), Some(HazardType::Storm));
        assert_eq!(reports[3].contact_name, "");
        assert_eq!(reports[3].contact_phone, "");
        assert_eq!(reports[3].severity, "");
        assert_eq!(reports[3].status, ReportStatus::Pending);
        assert!(reports[3].media.is_empty());
    }

    #[test]
    fn test_id_is_still_required() {
        let result = serde_json::from_str::<Vec<Report>>(r#"[{"hazardType": "storm"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_status_is_kept() {
        let status = ReportStatus::from("Escalated".to_string());
        assert_eq!(status.label(), "Escalated");
        assert_eq!(status.badge_class(), "escalated");
        assert_eq!(String::from(status), "Escalated");
    }

    #[test]
    fn test_display_datetime() {
        assert_eq!(display_datetime("2025-09-10T14:30"), "2025-09-10 14:30");
        assert_eq!(display_datetime("2025-09-10T14:30:05"), "2025-09-10 14:30");
        assert_eq!(display_datetime("yesterday"), "yesterday");

        let expected = DateTime::parse_from_rfc3339("2025-09-10T14:30:00Z")
            .unwrap()
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string();
        assert_eq!(display_datetime("2025-09-10T14:30:00Z"), expected);
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = ReportDraft {
            hazard_type: "tsunami".to_string(),
            contact_name: "Ravi".to_string(),
            ..Default::default()
        };
        let json: serde_json::Value = serde_json::from_str(&draft.to_json().unwrap()).unwrap();
        assert_eq!(json["hazardType"], "tsunami");
        assert_eq!(json["contactName"], "Ravi");
        assert!(json.get("contactPhone").is_some());
    }
}
