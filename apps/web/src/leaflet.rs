//! Bindings to the global `L` object from Leaflet, plus the marker surface
//! built on them.

use cozy_map_core::{LatLon, MapSurface, MapView, Popup, TileLayer};
use js_sys::Array;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(element_id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &Array, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &LeafletMap, layer: &Layer) -> LeafletMap;

    #[derive(Debug, Clone)]
    pub type Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &LeafletMap) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn create_tile_layer(url_template: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(extends = Layer)]
    #[derive(Debug, Clone)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn create_marker(position: &Array) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, content: &str) -> Marker;
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions {
    max_zoom: f64,
    attribution: &'static str,
}

impl From<&TileLayer> for TileOptions {
    fn from(layer: &TileLayer) -> Self {
        Self {
            max_zoom: layer.max_zoom,
            attribution: layer.attribution,
        }
    }
}

fn lat_lng(position: LatLon) -> Array {
    Array::of2(&JsValue::from_f64(position.lat), &JsValue::from_f64(position.lon))
}

/// A Leaflet map mounted on a page element.
#[derive(Debug)]
pub struct LeafletSurface {
    map: LeafletMap,
}

impl LeafletSurface {
    pub fn mount(element_id: &str, view: &MapView, layer: &TileLayer) -> Result<Self, JsValue> {
        let map = create_map(element_id)?;
        map.set_view(&lat_lng(view.center), view.zoom);

        let options = serde_wasm_bindgen::to_value(&TileOptions::from(layer))?;
        create_tile_layer(layer.url_template, &options).add_to(&map);

        Ok(Self { map })
    }
}

impl MapSurface for LeafletSurface {
    type Marker = Marker;

    fn add_marker(&mut self, position: LatLon, popup: Popup) -> Marker {
        let marker = create_marker(&lat_lng(position));
        marker.add_to(&self.map);
        marker.bind_popup(&popup.to_html());
        marker
    }

    fn remove_marker(&mut self, marker: Marker) {
        self.map.remove_layer(&marker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_options_use_leaflet_names() -> Result<(), serde_json::Error> {
        let options = serde_json::to_value(TileOptions::from(&TileLayer::OPEN_STREET_MAP))?;
        assert_eq!(options["maxZoom"], 19.0);
        assert!(options["attribution"]
            .as_str()
            .is_some_and(|text| text.contains("OpenStreetMap")));
        Ok(())
    }
}
