// ============================================================================
// APP VIEW - Layout principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::AppState;
use crate::views::{render_header, render_notice, render_submit_form, render_wallet_details};

/// Renderizar la app completa a partir del estado
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("app-container")
        .build();

    append_child(&container, &render_header(state)?)?;

    let main = ElementBuilder::new("main")?
        .class("app-main")
        .build();

    if *state.show_wallet_details.borrow() && state.wallet.is_connected() {
        append_child(&main, &render_wallet_details(state)?)?;
    }

    if let Some(notice) = render_notice(state)? {
        append_child(&main, &notice)?;
    }

    append_child(&main, &render_submit_form(state)?)?;
    append_child(&container, &main)?;

    Ok(container)
}
