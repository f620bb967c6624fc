// ============================================================================
// WALLET DETAILS - Tarjeta con cuenta, red y enlace al explorador
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::AppState;
use crate::utils::format::{format_ether, network_name};
use crate::viewmodels::WalletViewModel;

pub fn render_wallet_details(state: &AppState) -> Result<Element, JsValue> {
    let session = state.wallet.get_session();
    let address = session.address.clone().unwrap_or_default();

    let card = ElementBuilder::new("section")?
        .class("wallet-details")
        .child(ElementBuilder::new("h2")?.text("Wallet Details").build())?
        .build();

    append_child(&card, &detail_row("Address", &address)?)?;

    let balance = match session.balance_wei {
        Some(wei) => format_ether(wei),
        None => "Loading...".to_string(),
    };
    append_child(&card, &detail_row("Balance", &balance)?)?;

    let network = match session.chain_id {
        Some(id) => format!("{} ({})", network_name(id), id),
        None => "Unknown Network".to_string(),
    };
    append_child(&card, &detail_row("Network", &network)?)?;

    let explorer = ElementBuilder::new("a")?
        .class("explorer-link")
        .attr("href", &CONFIG.explorer_address_url(&address))?
        .attr("target", "_blank")?
        .attr("rel", "noopener noreferrer")?
        .text("View on Explorer")
        .build();
    append_child(&card, &explorer)?;

    let disconnect = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-disconnect")
        .text("Disconnect")
        .build();
    {
        let state_clone = state.clone();
        on_click(&disconnect, move |_| {
            WalletViewModel::new(&state_clone).disconnect();
            state_clone.toggle_wallet_details();
        })?;
    }
    append_child(&card, &disconnect)?;

    Ok(card)
}

fn detail_row(label: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("detail-row")
        .child(ElementBuilder::new("span")?.class("detail-label").text(label).build())?
        .child(ElementBuilder::new("span")?.class("detail-value").text(value).build())?
        .build())
}
