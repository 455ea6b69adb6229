// ============================================================================
// EVENT HANDLING - Listeners globales
// ============================================================================
// Los listeners de document/window se registran UNA VEZ al arrancar la app;
// closure.forget() los mantiene vivos durante toda la sesión
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, MouseEvent};
use crate::error::StoreResult;

pub fn on_event<F>(target: &EventTarget, event_type: &str, handler: F) -> StoreResult<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Click delegado: un solo listener para todos los botones/links renderizados
pub fn on_click<F>(target: &EventTarget, handler: F) -> StoreResult<()>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Input delegado (el overlay de búsqueda se crea y destruye dinámicamente)
pub fn on_input<F>(target: &EventTarget, handler: F) -> StoreResult<()>
where
    F: FnMut(Event) + 'static,
{
    on_event(target, "input", handler)
}

/// Atrás/adelante del navegador
pub fn on_popstate<F>(target: &EventTarget, handler: F) -> StoreResult<()>
where
    F: FnMut(Event) + 'static,
{
    on_event(target, "popstate", handler)
}
