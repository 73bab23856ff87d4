//! Hazard marker computation and the map controller.
//!
//! `MapView` owns the marker layer, the active filter and the icon lookup.
//! The concrete layer is provided by the mapping library binding; tests use
//! an in-memory layer.

use crate::report::{HazardType, Report};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, instrument, trace};

/// Initial map centre (lat, lon)
pub const DEFAULT_CENTER: (f64, f64) = (20.5937, 78.9629);
pub const DEFAULT_ZOOM: f64 = 5.0;
/// Zoom used after a successful geolocation lookup
pub const LOCATE_ZOOM: f64 = 10.0;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

const ICON_SIZE: u32 = 32;

/// Active hazard-type selection for the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum HazardFilter {
    #[default]
    All,
    /// Lowercase hazard type
    Only(String),
}

impl HazardFilter {
    /// Builds a filter from a filter-button value. `"all"` (any case) or an
    /// empty value selects everything.
    pub fn from_value(value: &str) -> Self {
        let value = value.trim().to_lowercase();
        if value.is_empty() || value == "all" {
            Self::All
        } else {
            Self::Only(value)
        }
    }

    pub fn matches(&self, hazard_type: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => hazard_type.trim().to_lowercase() == *wanted,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(wanted) => wanted,
        }
    }
}

impl From<HazardType> for HazardFilter {
    fn from(hazard: HazardType) -> Self {
        Self::Only(hazard.key().to_string())
    }
}

impl fmt::Display for HazardFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Marker icon as understood by the mapping library.
#[derive(Debug, Clone, PartialEq)]
pub struct HazardIcon {
    pub url: String,
    pub size: (u32, u32),
}

impl HazardIcon {
    fn square(url: &str) -> Self {
        Self {
            url: url.to_string(),
            size: (ICON_SIZE, ICON_SIZE),
        }
    }
}

/// Hazard type to icon lookup with a fallback icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconRegistry {
    icons: HashMap<HazardType, HazardIcon>,
    fallback: HazardIcon,
}

impl Default for IconRegistry {
    fn default() -> Self {
        let waves = HazardIcon::square("https://img.icons8.com/color/48/water.png");
        let icons = HashMap::from([
            (HazardType::Tsunami, HazardIcon::square("https://img.icons8.com/color/48/tsunami.png")),
            (HazardType::Storm, HazardIcon::square("https://img.icons8.com/color/48/storm.png")),
            (HazardType::Waves, waves.clone()),
            (HazardType::Flooding, HazardIcon::square("https://img.icons8.com/color/48/flood.png")),
        ]);
        Self {
            icons,
            fallback: waves,
        }
    }
}

impl IconRegistry {
    pub fn register(&mut self, hazard: HazardType, icon: HazardIcon) {
        if hazard == HazardType::Waves {
            self.fallback = icon.clone();
        }
        self.icons.insert(hazard, icon);
    }

    /// Icon for a free-text hazard type, falling back to the waves icon.
    pub fn icon_for(&self, hazard_type: &str) -> &HazardIcon {
        HazardType::parse(hazard_type)
            .and_then(|hazard| self.icons.get(&hazard))
            .unwrap_or(&self.fallback)
    }
}

/// One marker to be placed on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct HazardMarker {
    pub report_id: i64,
    pub lat: f64,
    pub lon: f64,
    pub icon: HazardIcon,
    pub popup_html: String,
}

/// Map layer capability: the mapping library behind the controller.
pub trait MarkerLayer {
    /// Removes every marker currently on the layer
    fn clear(&mut self);

    fn add_marker(&mut self, marker: &HazardMarker);

    /// Recentres the map
    fn set_view(&mut self, lat: f64, lon: f64, zoom: f64);
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn popup_html(report: &Report) -> String {
    format!(
        "<b>{}</b><br>{}",
        html_escape(&report.hazard_type),
        html_escape(&report.description)
    )
}

/// Computes the markers for `reports` under `filter`.
///
/// Reports whose location does not parse into two finite coordinates are
/// skipped.
pub fn plan_markers(reports: &[Report], filter: &HazardFilter, icons: &IconRegistry) -> Vec<HazardMarker> {
    reports
        .iter()
        .filter(|report| filter.matches(&report.hazard_type))
        .filter_map(|report| {
            let Some((lat, lon)) = report.coordinates() else {
                trace!(report_id = report.id, location = %report.location, "Skipping report without coordinates");
                return None;
            };
            Some(HazardMarker {
                report_id: report.id,
                lat,
                lon,
                icon: icons.icon_for(&report.hazard_type).clone(),
                popup_html: popup_html(report),
            })
        })
        .collect()
}

/// Map controller. Owns the marker layer and the filter state.
pub struct MapView<L: MarkerLayer> {
    layer: L,
    filter: HazardFilter,
    icons: IconRegistry,
}

impl<L: MarkerLayer> MapView<L> {
    pub fn new(layer: L) -> Self {
        Self::with_icons(layer, IconRegistry::default())
    }

    pub fn with_icons(layer: L, icons: IconRegistry) -> Self {
        Self {
            layer,
            filter: HazardFilter::All,
            icons,
        }
    }

    pub fn filter(&self) -> &HazardFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: HazardFilter) {
        debug!(filter = %filter, "Map filter changed");
        self.filter = filter;
    }

    /// Replaces every marker on the layer with the markers for `reports`
    /// under the current filter. Returns the number of markers placed.
    #[instrument(skip(self, reports), fields(filter = %self.filter, reports = reports.len()))]
    pub fn render(&mut self, reports: &[Report]) -> usize {
        let markers = plan_markers(reports, &self.filter, &self.icons);
        self.layer.clear();
        for marker in &markers {
            self.layer.add_marker(marker);
        }
        debug!(markers = markers.len(), "Rendered hazard markers");
        markers.len()
    }

    pub fn recenter(&mut self, lat: f64, lon: f64, zoom: f64) {
        self.layer.set_view(lat, lon, zoom);
    }

    pub fn layer(&self) -> &L {
        &self.layer
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::report::ReportStatus;

    /// In-memory marker layer
    #[derive(Default)]
    pub(crate) struct RecordingLayer {
        pub markers: Vec<HazardMarker>,
        pub clears: usize,
        pub view: Option<(f64, f64, f64)>,
    }

    impl MarkerLayer for RecordingLayer {
        fn clear(&mut self) {
            self.clears += 1;
            self.markers.clear();
        }

        fn add_marker(&mut self, marker: &HazardMarker) {
            self.markers.push(marker.clone());
        }

        fn set_view(&mut self, lat: f64, lon: f64, zoom: f64) {
            self.view = Some((lat, lon, zoom));
        }
    }

    pub(crate) fn report(id: i64, hazard_type: &str, location: &str, description: &str) -> Report {
        Report {
            id,
            hazard_type: hazard_type.to_string(),
            severity: "medium".to_string(),
            location: location.to_string(),
            datetime: "2025-09-10T14:30".to_string(),
            description: description.to_string(),
            contact_name: String::new(),
            contact_phone: String::new(),
            status: ReportStatus::Pending,
            media: Vec::new(),
        }
    }

    fn mixed_reports() -> Vec<Report> {
        vec![
            report(1, "Tsunami", "13.08, 80.27", "wave sighted"),
            report(2, "storm", "19.07, 72.87", "surge"),
            report(3, "STORM", "9.93, 76.26", "gale"),
            report(4, "flooding", "Mumbai", "streets under water"),
            report(5, "waves", "8.52, 76.93", "high swell"),
            report(6, "rip current", "11.0, 79.8", "unknown type"),
        ]
    }

    #[test]
    fn test_decoded_records_without_known_type_use_waves_icon() {
        let json = r#"[
            {"id": 1, "hazardType": "Tsunami", "location": "13.08, 80.27", "description": "ok"},
            {"id": 2, "location": "19.07, 72.87", "description": "no type"},
            {"id": 3, "hazardType": null, "location": "9.93, 76.26", "contactPhone": null},
            {"id": 4, "hazardType": "rip current", "location": "11.0, 79.8"}
        ]"#;
        let reports: Vec<Report> = serde_json::from_str(json).unwrap();

        let mut view = MapView::new(RecordingLayer::default());
        assert_eq!(view.render(&reports), 4);

        let icons = IconRegistry::default();
        let waves = icons.icon_for("waves");
        let markers = &view.layer().markers;
        assert_eq!(&markers[0].icon, icons.icon_for("tsunami"));
        assert_ne!(&markers[0].icon, waves);
        for marker in &markers[1..] {
            assert_eq!(&marker.icon, waves);
        }
    }

    #[test]
    fn test_single_tsunami_report() {
        let mut view = MapView::new(RecordingLayer::default());
        let count = view.render(&[report(1, "Tsunami", "13.08, 80.27", "test")]);

        assert_eq!(count, 1);
        let marker = &view.layer().markers[0];
        assert_eq!((marker.lat, marker.lon), (13.08, 80.27));
        assert!(marker.popup_html.contains("Tsunami"));
        assert!(marker.popup_html.contains("test"));
        assert_eq!(marker.icon.url, "https://img.icons8.com/color/48/tsunami.png");
    }

    #[test]
    fn test_unparsable_location_renders_nothing() {
        let mut view = MapView::new(RecordingLayer::default());
        let count = view.render(&[report(1, "storm", "not-a-coordinate", "")]);

        assert_eq!(count, 0);
        assert!(view.layer().markers.is_empty());
    }

    #[test]
    fn test_all_filter_yields_parseable_subset() {
        let mut view = MapView::new(RecordingLayer::default());
        let count = view.render(&mixed_reports());

        let ids: Vec<i64> = view.layer().markers.iter().map(|m| m.report_id).collect();
        assert_eq!(count, 5);
        assert_eq!(ids, vec![1, 2, 3, 5, 6]);
    }

    #[test]
    fn test_type_filter_is_case_insensitive_subset() {
        let mut view = MapView::new(RecordingLayer::default());
        view.set_filter(HazardFilter::from_value("Storm"));
        view.render(&mixed_reports());

        let ids: Vec<i64> = view.layer().markers.iter().map(|m| m.report_id).collect();
        assert_eq!(ids, vec![2, 3]);

        view.set_filter(HazardType::Flooding.into());
        assert_eq!(view.render(&mixed_reports()), 0);
    }

    #[test]
    fn test_rerender_is_never_additive() {
        let mut view = MapView::new(RecordingLayer::default());
        let reports = mixed_reports();

        view.render(&reports);
        view.render(&reports);
        assert_eq!(view.layer().markers.len(), 5);

        view.set_filter(HazardFilter::from_value("tsunami"));
        view.render(&reports);
        assert_eq!(view.layer().markers.len(), 1);
        assert_eq!(view.layer().clears, 3);

        view.render(&[]);
        assert!(view.layer().markers.is_empty());
    }

    #[test]
    fn test_unknown_type_uses_waves_icon() {
        let icons = IconRegistry::default();
        assert_eq!(icons.icon_for("rip current").url, "https://img.icons8.com/color/48/water.png");
        assert_eq!(icons.icon_for("FLOODING").url, "https://img.icons8.com/color/48/flood.png");
        assert_eq!(icons.icon_for("").size, (32, 32));
    }

    #[test]
    fn test_popup_is_escaped() {
        let popup = popup_html(&report(1, "storm", "1, 2", "<script>alert(1)</script>"));
        assert_eq!(popup, "<b>storm</b><br>&lt;script&gt;alert(1)&lt;/script&gt;");
    }

    #[test]
    fn test_filter_from_value() {
        assert_eq!(HazardFilter::from_value("ALL"), HazardFilter::All);
        assert_eq!(HazardFilter::from_value(""), HazardFilter::All);
        assert_eq!(HazardFilter::from_value(" Waves"), HazardFilter::Only("waves".to_string()));
        assert_eq!(HazardFilter::from_value("Waves").value(), "waves");
    }

    #[test]
    fn test_recenter_forwards_to_layer() {
        let mut view = MapView::new(RecordingLayer::default());
        view.recenter(13.0, 80.0, LOCATE_ZOOM);
        assert_eq!(view.layer().view, Some((13.0, 80.0, 10.0)));
    }
}
