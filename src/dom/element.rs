// ============================================================================
// ELEMENT HELPERS - Acceso básico al DOM
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};
use crate::error::{StoreError, StoreResult};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> StoreResult<Element> {
    let doc = document().ok_or_else(|| StoreError::Dom("No document".to_string()))?;
    Ok(doc.create_element(tag)?)
}

/// Todos los elementos que cumplen el selector
pub fn query_all(selector: &str) -> StoreResult<Vec<Element>> {
    let doc = document().ok_or_else(|| StoreError::Dom("No document".to_string()))?;
    let nodes = doc.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Ancestro más cercano (o el propio elemento) que tiene el atributo
pub fn closest_with_attribute(element: &Element, attribute: &str) -> Option<Element> {
    element.closest(&format!("[{}]", attribute)).ok().flatten()
}

pub fn set_display(element: &Element, visible: bool, display: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html
            .style()
            .set_property("display", if visible { display } else { "none" });
    }
}

/// Ruta actual (`location.pathname`)
pub fn current_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
