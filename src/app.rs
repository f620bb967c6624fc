// ============================================================================
// APP - Aplicación principal: raíz del DOM + estado global
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::state::AppState;
use crate::utils::constants::ROOT_ELEMENT_ID;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(ROOT_ELEMENT_ID)
            .ok_or_else(|| JsValue::from_str(&format!("No #{} element found", ROOT_ELEMENT_ID)))?;

        let state = AppState::new();

        // Re-render en el siguiente tick: agrupa varias notificaciones seguidas
        state.subscribe_to_changes(move || {
            Timeout::new(0, crate::rerender_app).forget();
        });

        Ok(Self { state, root })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Re-render completo desde el estado
    pub fn render(&self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)?;
        Ok(())
    }
}
