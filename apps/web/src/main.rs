mod dom;
mod fetch;
mod leaflet;

use std::cell::RefCell;
use std::rc::Rc;

use cozy_map_core::{CoordinatePolicy, MapView, SpotEndpoint, SpotMap, TileLayer};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use leaflet::LeafletSurface;

pub type SharedMap = Rc<RefCell<SpotMap<LeafletSurface>>>;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(error) = start() {
        web_sys::console::error_2(&"Failed to start the map:".into(), &error);
    }
}

fn start() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let surface = LeafletSurface::mount(
        dom::MAP_ELEMENT_ID,
        &MapView::default(),
        &TileLayer::OPEN_STREET_MAP,
    )?;

    let toggle = dom::find_toggle(&document);
    let map: SharedMap = Rc::new(RefCell::new(SpotMap::new(
        surface,
        CoordinatePolicy::default(),
        toggle.is_some(),
    )));

    let initial = map.borrow().initial_load();
    spawn_local(load_spots(map.clone(), initial));

    if let Some(toggle) = toggle {
        dom::watch_toggle(&toggle, dom::find_label(&document), map)?;
    }

    Ok(())
}

/// Fetches one endpoint and applies the outcome. Failures only reach the
/// console; the map keeps whatever it showed before.
pub async fn load_spots(map: SharedMap, endpoint: SpotEndpoint) {
    let result = fetch::fetch_spots(endpoint).await;

    if let Err(error) = map.borrow_mut().finish_load(endpoint, result) {
        web_sys::console::error_1(
            &format!("Error fetching {}: {error}", endpoint.label()).into(),
        );
    }
}
