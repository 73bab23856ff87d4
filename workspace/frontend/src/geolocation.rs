use common::DashboardError;
use js_sys::{Promise, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

fn number_at(value: &JsValue, path: &[&str]) -> Option<f64> {
    let mut current = value.clone();
    for key in path {
        current = Reflect::get(&current, &JsValue::from_str(key)).ok()?;
    }
    current.as_f64()
}

/// Maps the presence check on `navigator.geolocation` to an error.
fn ensure_available(available: bool) -> Result<(), DashboardError> {
    if available {
        Ok(())
    } else {
        Err(DashboardError::Unsupported("Geolocation"))
    }
}

/// Asks the browser for the current position once. No retry, no fallback.
pub async fn current_position() -> Result<(f64, f64), DashboardError> {
    let navigator = web_sys::window()
        .map(|w| w.navigator())
        .ok_or(DashboardError::Unsupported("Geolocation"))?;
    // the getter casts a missing property to `Geolocation` instead of failing
    ensure_available(Reflect::has(&navigator, &JsValue::from_str("geolocation")).unwrap_or(false))?;
    let geolocation = navigator
        .geolocation()
        .map_err(|_| DashboardError::Unsupported("Geolocation"))?;

    let mut request_error = None;
    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
            request_error = Some(e);
        }
    });
    if let Some(e) = request_error {
        return Err(DashboardError::Geolocation(format!("{:?}", e)));
    }

    let position = JsFuture::from(promise).await.map_err(|e| {
        let message = Reflect::get(&e, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
            .unwrap_or_else(|| format!("{:?}", e));
        DashboardError::Geolocation(message)
    })?;

    let lat = number_at(&position, &["coords", "latitude"]);
    let lon = number_at(&position, &["coords", "longitude"]);
    match (lat, lon) {
        (Some(lat), Some(lon)) => {
            log::debug!("Current position: {}, {}", lat, lon);
            Ok((lat, lon))
        }
        _ => Err(DashboardError::Geolocation("position without coordinates".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_capability_is_unsupported() {
        assert_eq!(ensure_available(false), Err(DashboardError::Unsupported("Geolocation")));
        assert_eq!(ensure_available(true), Ok(()));
    }
}
