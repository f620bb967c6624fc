// ============================================================================
// HEADER - Marca + botón de wallet
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::AppState;
use crate::utils::format::short_address;
use crate::viewmodels::WalletViewModel;

pub fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?
        .class("app-header")
        .build();

    let brand = ElementBuilder::new("div")?
        .class("brand")
        .child(ElementBuilder::new("span")?.class("brand-icon").text("🔬").build())?
        .child(ElementBuilder::new("h1")?.text("DeSci Reputation").build())?
        .build();
    append_child(&header, &brand)?;

    append_child(&header, &render_wallet_button(state)?)?;

    if let Some(error) = state.wallet.get_error() {
        let (title, message) = error.notice();
        let notice = ElementBuilder::new("div")?
            .class("wallet-notice notice-error")
            .attr("role", "alert")?
            .child(ElementBuilder::new("strong")?.text(title).build())?
            .child(ElementBuilder::new("p")?.text(&message).build())?
            .build();
        append_child(&header, &notice)?;
    }

    Ok(header)
}

fn render_wallet_button(state: &AppState) -> Result<Element, JsValue> {
    let connecting = state.wallet.get_connecting();

    if let Some(account) = state.wallet.account() {
        let button = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-wallet connected")
            .attr("title", &account)?
            .text(&short_address(&account))
            .build();

        let state_clone = state.clone();
        on_click(&button, move |_| {
            state_clone.toggle_wallet_details();
            if *state_clone.show_wallet_details.borrow() {
                let vm = WalletViewModel::new(&state_clone);
                spawn_local(async move { vm.refresh_balance().await });
            }
        })?;
        return Ok(button);
    }

    let label = if connecting { "Connecting..." } else { "Connect Wallet" };
    let button = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-wallet")
        .flag("disabled", connecting)?
        .text(label)
        .build();

    let state_clone = state.clone();
    on_click(&button, move |_| {
        log::info!("🖱️ [WALLET] Click en Connect Wallet");
        let vm = WalletViewModel::new(&state_clone);
        let notice_timer = state_clone.wallet.notice_timer.clone();
        spawn_local(async move {
            notice_timer.cancel();
            if vm.connect().await.is_err() {
                // El aviso de error se cierra solo
                notice_timer.replace(Timeout::new(CONFIG.notice_dismiss_ms, move || {
                    vm.dismiss_error()
                }));
            }
        });
    })?;

    Ok(button)
}
