//! Leaflet bindings and the marker layer backed by them.

use common::map::{TILE_ATTRIBUTION, TILE_URL};
use common::{HazardMarker, MarkerLayer};
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::interop::to_js;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn new_map(container: &HtmlElement) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    fn invalidate_size(this: &LeafletMap);

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_tiles_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    pub type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    fn layer_group() -> LayerGroup;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_group_to(this: &LayerGroup, map: &LeafletMap) -> LayerGroup;

    #[wasm_bindgen(method, js_name = clearLayers)]
    fn clear_layers(this: &LayerGroup);

    #[wasm_bindgen(method, js_name = addLayer)]
    fn add_layer(this: &LayerGroup, marker: &Marker);

    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn new_marker(lat_lng: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, html: &str) -> Marker;

    pub type Icon;

    #[wasm_bindgen(js_namespace = L, js_name = icon)]
    fn new_icon(options: &JsValue) -> Icon;
}

fn lat_lng(lat: f64, lon: f64) -> JsValue {
    js_sys::Array::of2(&JsValue::from_f64(lat), &JsValue::from_f64(lon)).into()
}

/// One Leaflet map with an OpenStreetMap tile layer and a marker group.
pub struct LeafletLayer {
    map: LeafletMap,
    markers: LayerGroup,
}

impl LeafletLayer {
    pub fn mount(container: &HtmlElement, center: (f64, f64), zoom: f64) -> Self {
        log::debug!("Mounting Leaflet map at {:?} zoom {}", center, zoom);
        let map = new_map(container);
        map.set_view(&lat_lng(center.0, center.1), zoom);

        let tile_options = to_js(&serde_json::json!({ "attribution": TILE_ATTRIBUTION }));
        tile_layer(TILE_URL, &tile_options).add_tiles_to(&map);

        let markers = layer_group();
        markers.add_group_to(&map);

        Self { map, markers }
    }

    /// Re-measures the container after it was hidden
    pub fn refresh_size(&self) {
        self.map.invalidate_size();
    }
}

impl MarkerLayer for LeafletLayer {
    fn clear(&mut self) {
        self.markers.clear_layers();
    }

    fn add_marker(&mut self, marker: &HazardMarker) {
        let icon_options = to_js(&serde_json::json!({
            "iconUrl": marker.icon.url,
            "iconSize": [marker.icon.size.0, marker.icon.size.1],
        }));

        let options = Object::new();
        if let Err(e) = Reflect::set(&options, &JsValue::from_str("icon"), &new_icon(&icon_options)) {
            log::warn!("Marker {} falls back to the default icon: {:?}", marker.report_id, e);
        }

        let leaflet_marker = new_marker(&lat_lng(marker.lat, marker.lon), &options);
        leaflet_marker.bind_popup(&marker.popup_html);
        self.markers.add_layer(&leaflet_marker);
    }

    fn set_view(&mut self, lat: f64, lon: f64, zoom: f64) {
        self.map.set_view(&lat_lng(lat, lon), zoom);
    }
}
