//! Browser-independent core of the CoastWatch hazard dashboard.
//! Report types, the map and submission controllers, data sources and the
//! page-state toggles live here so the wasm frontend stays a thin view layer.

pub mod analytics;
pub mod config;
pub mod error;
pub mod map;
pub mod preview;
pub mod report;
pub mod sample;
pub mod session;
pub mod source;
pub mod submission;
pub mod ui;

pub use analytics::{ChartSeries, HazardCounts};
pub use config::DashboardConfig;
pub use error::{DashboardError, Result};
pub use map::{HazardFilter, HazardIcon, HazardMarker, IconRegistry, MapView, MarkerLayer};
pub use preview::{MediaKind, MediaPreview, PreviewLimit, PreviewSet};
pub use report::{HazardType, Report, ReportDraft, ReportStatus, ReportSubmission};
pub use session::SessionIdentity;
pub use source::{DataSourceKind, ReportGateway, SampleGateway};
pub use submission::{ReportFormSurface, SubmissionController, SubmissionPhase};
pub use ui::{ModalId, ModalState, Tab, Theme};
