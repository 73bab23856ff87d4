//! Report submission flow and its progress indicator.
//!
//! Phases move `Idle -> Submitting -> Succeeded | Failed -> Idle`; the last
//! step is triggered by a timer after `indicator_duration_ms`.

use std::rc::Rc;
use tracing::{info, instrument, warn};

use crate::report::{ReportDraft, ReportSubmission};
use crate::source::ReportGateway;

pub const DEFAULT_INDICATOR_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Idle | Self::Submitting => "fas fa-spinner fa-spin spinner-icon",
            Self::Succeeded => "fas fa-check spinner-icon success",
            Self::Failed => "fas fa-times spinner-icon failure",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Submitting => "Submitting report...",
            Self::Succeeded => "Report submitted successfully",
            Self::Failed => "Submission failed. Please try again.",
        }
    }

    /// Extra class on the indicator text
    pub fn text_class(&self) -> Option<&'static str> {
        match self {
            Self::Succeeded => Some("success"),
            Self::Failed => Some("failure"),
            _ => None,
        }
    }

    pub fn indicator_visible(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Submit stays disabled until the indicator resets
    pub fn submit_enabled(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// The submission form as seen by the controller.
pub trait ReportFormSurface {
    type Media;

    fn read_draft(&self) -> ReportDraft;

    /// Files currently attached to the form
    fn media(&self) -> Vec<Self::Media>;

    /// Clears every field
    fn reset(&self);

    fn clear_previews(&self);

    /// Shows the indicator for `phase` and enables/disables submit accordingly
    fn show_phase(&self, phase: SubmissionPhase);

    /// Asks the dashboard to re-fetch the report list
    fn refresh_reports(&self);
}

/// Drives one submission from form to gateway and back.
pub struct SubmissionController<G: ?Sized> {
    gateway: Rc<G>,
    indicator_duration_ms: u32,
}

impl<G: ?Sized> Clone for SubmissionController<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            indicator_duration_ms: self.indicator_duration_ms,
        }
    }
}

impl<G: ReportGateway + ?Sized> SubmissionController<G> {
    pub fn new(gateway: Rc<G>) -> Self {
        Self::with_duration(gateway, DEFAULT_INDICATOR_DURATION_MS)
    }

    pub fn with_duration(gateway: Rc<G>, indicator_duration_ms: u32) -> Self {
        Self {
            gateway,
            indicator_duration_ms,
        }
    }

    /// How long the success/failure indicator stays before `settle`
    pub fn indicator_duration_ms(&self) -> u32 {
        self.indicator_duration_ms
    }

    /// Sends the form contents. On success the form and previews are cleared
    /// and one refresh is requested; on failure the form is left untouched.
    #[instrument(skip_all)]
    pub async fn submit<F>(&self, form: &F) -> SubmissionPhase
    where
        F: ReportFormSurface<Media = G::Media>,
    {
        let submission = ReportSubmission::new(form.read_draft(), form.media());
        form.show_phase(SubmissionPhase::Submitting);

        let phase = match self.gateway.submit_report(&submission).await {
            Ok(()) => {
                info!(
                    hazard_type = %submission.report.hazard_type,
                    media = submission.media.len(),
                    "Report submitted"
                );
                form.reset();
                form.clear_previews();
                form.refresh_reports();
                SubmissionPhase::Succeeded
            }
            Err(err) => {
                warn!(%err, "Report submission failed");
                SubmissionPhase::Failed
            }
        };
        form.show_phase(phase);
        phase
    }

    /// Returns the indicator to idle and re-enables submission.
    pub fn settle<F: ReportFormSurface>(&self, form: &F) {
        form.show_phase(SubmissionPhase::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DashboardError, Result};
    use crate::report::Report;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    struct StubGateway {
        outcome: Result<()>,
        submitted: RefCell<Vec<ReportSubmission<String>>>,
    }

    impl StubGateway {
        fn answering(outcome: Result<()>) -> Rc<Self> {
            Rc::new(Self {
                outcome,
                submitted: RefCell::new(Vec::new()),
            })
        }
    }

    #[async_trait(?Send)]
    impl ReportGateway for StubGateway {
        type Media = String;

        async fn fetch_reports(&self) -> Result<Vec<Report>> {
            Ok(Vec::new())
        }

        async fn submit_report(&self, submission: &ReportSubmission<String>) -> Result<()> {
            self.submitted.borrow_mut().push(submission.clone());
            self.outcome.clone()
        }
    }

    struct StubForm {
        draft: RefCell<ReportDraft>,
        media: RefCell<Vec<String>>,
        previews: RefCell<Vec<String>>,
        phases: RefCell<Vec<SubmissionPhase>>,
        refreshes: Cell<usize>,
    }

    impl StubForm {
        fn filled() -> Self {
            Self {
                draft: RefCell::new(ReportDraft {
                    hazard_type: "tsunami".to_string(),
                    severity: "high".to_string(),
                    location: "13.08, 80.27".to_string(),
                    datetime: "2025-09-10T14:30".to_string(),
                    description: "receding sea".to_string(),
                    contact_name: "Meena".to_string(),
                    contact_phone: "12345".to_string(),
                }),
                media: RefCell::new(vec!["photo.jpg".to_string(), "clip.mp4".to_string()]),
                previews: RefCell::new(vec!["photo.jpg".to_string()]),
                phases: RefCell::new(Vec::new()),
                refreshes: Cell::new(0),
            }
        }
    }

    impl ReportFormSurface for StubForm {
        type Media = String;

        fn read_draft(&self) -> ReportDraft {
            self.draft.borrow().clone()
        }

        fn media(&self) -> Vec<String> {
            self.media.borrow().clone()
        }

        fn reset(&self) {
            *self.draft.borrow_mut() = ReportDraft::default();
            self.media.borrow_mut().clear();
        }

        fn clear_previews(&self) {
            self.previews.borrow_mut().clear();
        }

        fn show_phase(&self, phase: SubmissionPhase) {
            self.phases.borrow_mut().push(phase);
        }

        fn refresh_reports(&self) {
            self.refreshes.set(self.refreshes.get() + 1);
        }
    }

    #[tokio::test]
    async fn test_successful_submission_clears_form_and_refreshes_once() {
        let gateway = StubGateway::answering(Ok(()));
        let controller = SubmissionController::new(gateway.clone());
        let form = StubForm::filled();

        let phase = controller.submit(&form).await;

        assert_eq!(phase, SubmissionPhase::Succeeded);
        assert_eq!(*form.draft.borrow(), ReportDraft::default());
        assert!(form.previews.borrow().is_empty());
        assert_eq!(form.refreshes.get(), 1);
        assert_eq!(
            *form.phases.borrow(),
            vec![SubmissionPhase::Submitting, SubmissionPhase::Succeeded]
        );

        let submitted = gateway.submitted.borrow();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].report.hazard_type, "tsunami");
        assert_eq!(submitted[0].media, vec!["photo.jpg", "clip.mp4"]);
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_form_and_skips_refresh() {
        for error in [DashboardError::Status(500), DashboardError::Network("offline".to_string())] {
            let controller = SubmissionController::new(StubGateway::answering(Err(error)));
            let form = StubForm::filled();
            let before = form.read_draft();

            let phase = controller.submit(&form).await;

            assert_eq!(phase, SubmissionPhase::Failed);
            assert_eq!(form.read_draft(), before);
            assert_eq!(form.previews.borrow().len(), 1);
            assert_eq!(form.refreshes.get(), 0);
            assert_eq!(form.phases.borrow().last(), Some(&SubmissionPhase::Failed));
        }
    }

    #[tokio::test]
    async fn test_settle_returns_to_idle() {
        let controller = SubmissionController::with_duration(StubGateway::answering(Ok(())), 10);
        let form = StubForm::filled();
        controller.submit(&form).await;
        controller.settle(&form);

        assert_eq!(controller.indicator_duration_ms(), 10);
        assert_eq!(form.phases.borrow().last(), Some(&SubmissionPhase::Idle));
    }

    #[test]
    fn test_indicator_per_phase() {
        assert!(!SubmissionPhase::Idle.indicator_visible());
        assert!(SubmissionPhase::Idle.submit_enabled());

        assert!(SubmissionPhase::Submitting.indicator_visible());
        assert!(!SubmissionPhase::Submitting.submit_enabled());
        assert_eq!(SubmissionPhase::Submitting.message(), "Submitting report...");

        assert!(!SubmissionPhase::Succeeded.submit_enabled());
        assert_eq!(SubmissionPhase::Succeeded.text_class(), Some("success"));
        assert_eq!(SubmissionPhase::Failed.icon_class(), "fas fa-times spinner-icon failure");
        assert_eq!(SubmissionPhase::Failed.message(), "Submission failed. Please try again.");
    }
}
