pub mod reports;

use common::{DashboardConfig, DashboardError, DataSourceKind, ReportGateway, SampleGateway};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use std::rc::Rc;
use web_sys::{File, FormData};

use crate::settings;
use reports::HttpGateway;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, DashboardError>
where
    T: DeserializeOwned,
{
    let url = api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let err = DashboardError::Network(e.to_string());
        log::error!("GET {} - {}", endpoint, err);
        err
    })?;

    if !response.ok() {
        let err = DashboardError::Status(response.status());
        log::error!("GET {} - {}", endpoint, err);
        return Err(err);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data = response.json::<T>().await.map_err(|e| {
        let err = DashboardError::Decode(e.to_string());
        log::error!("GET {} - {}", endpoint, err);
        err
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}

/// Multipart POST. Any 2xx counts as success; the body is ignored.
pub async fn post_form(endpoint: &str, form: FormData) -> Result<(), DashboardError> {
    let url = api_url(endpoint);
    log::debug!("POST (multipart) request to: {}", url);

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| {
            let err = DashboardError::Encode(e.to_string());
            log::error!("POST {} - {}", endpoint, err);
            err
        })?
        .send()
        .await
        .map_err(|e| {
            let err = DashboardError::Network(e.to_string());
            log::error!("POST {} - {}", endpoint, err);
            err
        })?;

    if !response.ok() {
        let err = DashboardError::Status(response.status());
        log::warn!("POST {} - Non-OK response: {}", endpoint, err);
        return Err(err);
    }

    log::info!("POST {} - Success", endpoint);
    Ok(())
}

/// Gateway handle shared by the components. Compared by identity.
#[derive(Clone)]
pub struct Gateway(pub Rc<dyn ReportGateway<Media = File>>);

impl PartialEq for Gateway {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Picks the report gateway named by the configuration
pub fn gateway_for(config: &DashboardConfig) -> Gateway {
    log::info!("Using {} data source", config.data_source);
    match config.data_source {
        DataSourceKind::Backend => Gateway(Rc::new(HttpGateway)),
        DataSourceKind::Sample => Gateway(Rc::new(SampleGateway::<File>::default())),
    }
}
