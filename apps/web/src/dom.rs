use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlInputElement};

use crate::{load_spots, SharedMap};

pub const MAP_ELEMENT_ID: &str = "map";
pub const TOGGLE_ELEMENT_ID: &str = "mySpotsToggle";
pub const LABEL_ELEMENT_ID: &str = "toggleLabel";

/// The "only my spots" checkbox. The template only renders it for
/// signed-in viewers, so its absence means anonymous.
pub fn find_toggle(document: &Document) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(TOGGLE_ELEMENT_ID)?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

pub fn find_label(document: &Document) -> Option<Element> {
    document.get_element_by_id(LABEL_ELEMENT_ID)
}

pub fn watch_toggle(
    toggle: &HtmlInputElement,
    label: Option<Element>,
    map: SharedMap,
) -> Result<(), JsValue> {
    let input = toggle.clone();
    let on_change = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let change = map.borrow_mut().toggle_changed(input.checked());
        let Some(change) = change else {
            return;
        };

        if let Some(label) = &label {
            label.set_text_content(Some(change.label));
        }
        if let Some(endpoint) = change.fetch {
            spawn_local(load_spots(map.clone(), endpoint));
        }
    });

    toggle.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    // The listener lives as long as the page.
    on_change.forget();
    Ok(())
}
