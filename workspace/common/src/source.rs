//! Report data sources.
//!
//! The dashboard talks to one `ReportGateway`. The backend-backed gateway
//! lives in the frontend crate (it needs the browser's fetch); the sample
//! gateway below serves built-in data and keeps submissions in memory.

use async_trait::async_trait;
use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use tracing::{debug, info};

use crate::error::Result;
use crate::report::{Report, ReportStatus, ReportSubmission};
use crate::sample::sample_reports;

/// Which gateway the dashboard is wired to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DataSourceKind {
    #[default]
    Backend,
    Sample,
}

impl FromStr for DataSourceKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "backend" | "api" => Ok(Self::Backend),
            "sample" | "static" => Ok(Self::Sample),
            other => Err(format!("Unknown data source: {}", other)),
        }
    }
}

impl fmt::Display for DataSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend => f.write_str("backend"),
            Self::Sample => f.write_str("sample"),
        }
    }
}

/// Read and submit hazard reports.
///
/// Futures are not `Send`: every implementation runs on the UI thread.
#[async_trait(?Send)]
pub trait ReportGateway {
    /// Platform file handle attached to submissions
    type Media;

    async fn fetch_reports(&self) -> Result<Vec<Report>>;

    async fn submit_report(&self, submission: &ReportSubmission<Self::Media>) -> Result<()>;
}

/// Gateway over the built-in sample reports.
pub struct SampleGateway<M> {
    reports: RefCell<Vec<Report>>,
    _media: PhantomData<M>,
}

impl<M> Default for SampleGateway<M> {
    fn default() -> Self {
        Self::new(sample_reports())
    }
}

impl<M> SampleGateway<M> {
    pub fn new(reports: Vec<Report>) -> Self {
        Self {
            reports: RefCell::new(reports),
            _media: PhantomData,
        }
    }
}

#[async_trait(?Send)]
impl<M: 'static> ReportGateway for SampleGateway<M> {
    type Media = M;

    async fn fetch_reports(&self) -> Result<Vec<Report>> {
        let reports = self.reports.borrow().clone();
        debug!(count = reports.len(), "Serving sample reports");
        Ok(reports)
    }

    async fn submit_report(&self, submission: &ReportSubmission<M>) -> Result<()> {
        let mut reports = self.reports.borrow_mut();
        let id = reports.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let draft = &submission.report;
        reports.push(Report {
            id,
            hazard_type: draft.hazard_type.clone(),
            severity: draft.severity.clone(),
            location: draft.location.clone(),
            datetime: draft.datetime.clone(),
            description: draft.description.clone(),
            contact_name: draft.contact_name.clone(),
            contact_phone: draft.contact_phone.clone(),
            status: ReportStatus::Pending,
            media: Vec::new(),
        });
        info!(id, media = submission.media.len(), "Stored sample report");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportDraft;

    #[test]
    fn test_data_source_kind_parse() {
        assert_eq!("backend".parse::<DataSourceKind>(), Ok(DataSourceKind::Backend));
        assert_eq!("Static".parse::<DataSourceKind>(), Ok(DataSourceKind::Sample));
        assert!("ftp".parse::<DataSourceKind>().is_err());
        assert_eq!(DataSourceKind::Sample.to_string(), "sample");
    }

    #[tokio::test]
    async fn test_sample_gateway_accepts_submissions() {
        let gateway: SampleGateway<()> = SampleGateway::default();
        let before = gateway.fetch_reports().await.unwrap();

        let draft = ReportDraft {
            hazard_type: "storm".to_string(),
            location: "13.0, 80.0".to_string(),
            ..Default::default()
        };
        gateway
            .submit_report(&ReportSubmission::new(draft, vec![(), ()]))
            .await
            .unwrap();

        let after = gateway.fetch_reports().await.unwrap();
        assert_eq!(after.len(), before.len() + 1);
        let stored = after.last().unwrap();
        assert_eq!(stored.id, before.iter().map(|r| r.id).max().unwrap() + 1);
        assert_eq!(stored.status, ReportStatus::Pending);
        assert_eq!(stored.hazard_type, "storm");
    }

    #[tokio::test]
    async fn test_empty_sample_gateway_starts_at_one() {
        let gateway: SampleGateway<()> = SampleGateway::new(Vec::new());
        gateway
            .submit_report(&ReportSubmission::new(ReportDraft::default(), Vec::new()))
            .await
            .unwrap();
        assert_eq!(gateway.fetch_reports().await.unwrap()[0].id, 1);
    }
}
