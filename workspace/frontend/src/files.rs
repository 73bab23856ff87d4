use common::{DashboardError, MediaKind, MediaPreview};
use js_sys::Promise;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList, FileReader};

/// Files of a picker selection, in selection order
pub fn file_list(list: Option<FileList>) -> Vec<File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Decodes one file into a data URL preview.
pub async fn read_preview(file: &File) -> Result<MediaPreview, DashboardError> {
    let reader = FileReader::new().map_err(|e| DashboardError::Decode(format!("{:?}", e)))?;
    let promise = Promise::new(&mut |resolve, reject| {
        reader.set_onload(Some(&resolve));
        reader.set_onerror(Some(&reject));
    });
    reader
        .read_as_data_url(file)
        .map_err(|e| DashboardError::Decode(format!("{:?}", e)))?;
    JsFuture::from(promise)
        .await
        .map_err(|_| DashboardError::Decode(format!("Failed to read {}", file.name())))?;

    let data_url = reader
        .result()
        .ok()
        .and_then(|value| value.as_string())
        .ok_or_else(|| DashboardError::Decode(format!("No data for {}", file.name())))?;

    Ok(MediaPreview {
        name: file.name(),
        kind: MediaKind::from_mime(&file.type_()),
        data_url,
    })
}
