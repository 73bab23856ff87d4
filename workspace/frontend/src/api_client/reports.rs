use async_trait::async_trait;
use common::{DashboardError, Report, ReportGateway, ReportSubmission};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, File, FormData};

use crate::api_client;

fn js_error(context: &str, value: JsValue) -> DashboardError {
    DashboardError::Encode(format!("{}: {:?}", context, value))
}

/// Builds the multipart body: a JSON `report` part followed by one `media`
/// part per attached file.
fn build_form_data(submission: &ReportSubmission<File>) -> Result<FormData, DashboardError> {
    let json = submission.report.to_json()?;

    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let parts = js_sys::Array::of1(&JsValue::from_str(&json));
    let report_blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| js_error("report blob", e))?;

    let form = FormData::new().map_err(|e| js_error("form data", e))?;
    form.append_with_blob("report", &report_blob)
        .map_err(|e| js_error("report part", e))?;
    for file in &submission.media {
        form.append_with_blob_and_filename("media", file, &file.name())
            .map_err(|e| js_error("media part", e))?;
    }
    Ok(form)
}

/// Get all reports
pub async fn get_reports() -> Result<Vec<Report>, DashboardError> {
    log::trace!("Fetching all reports");
    let result = api_client::get::<Vec<Report>>("/reports").await;
    match &result {
        Ok(reports) => log::info!("Fetched {} reports", reports.len()),
        Err(e) => log::error!("Error fetching reports: {}", e),
    }
    result
}

/// Submit a new report with its media
pub async fn submit_report(submission: &ReportSubmission<File>) -> Result<(), DashboardError> {
    log::debug!(
        "Submitting {} report with {} media file(s)",
        submission.report.hazard_type,
        submission.media.len()
    );
    let form = build_form_data(submission)?;
    let result = api_client::post_form("/reports", form).await;
    match &result {
        Ok(()) => log::info!("Successfully submitted report"),
        Err(e) => log::error!("Failed to submit report: {}", e),
    }
    result
}

/// Gateway over the backend reports API
pub struct HttpGateway;

#[async_trait(?Send)]
impl ReportGateway for HttpGateway {
    type Media = File;

    async fn fetch_reports(&self) -> common::Result<Vec<Report>> {
        get_reports().await
    }

    async fn submit_report(&self, submission: &ReportSubmission<File>) -> common::Result<()> {
        submit_report(submission).await
    }
}
