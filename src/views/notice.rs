// ============================================================================
// NOTICE - Aviso de resultado del envío (éxito / error) y progreso
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{append_child, ElementBuilder};
use crate::models::SubmissionState;
use crate::state::AppState;

/// Aviso según el estado del envío (None en Idle)
pub fn render_notice(state: &AppState) -> Result<Option<Element>, JsValue> {
    let notice = match state.submission.get_status() {
        SubmissionState::Success(receipt) => {
            let notice = ElementBuilder::new("div")?
                .class("notice notice-success")
                .attr("role", "status")?
                .child(ElementBuilder::new("strong")?.text("SBT Minted Successfully!").build())?
                .child(
                    ElementBuilder::new("p")?
                        .class("tx-hash")
                        .text(&format!("Transaction Hash: {}", receipt.tx_hash))
                        .build(),
                )?
                .build();
            let link = ElementBuilder::new("a")?
                .attr("href", &CONFIG.explorer_tx_url(&receipt.tx_hash))?
                .attr("target", "_blank")?
                .attr("rel", "noopener noreferrer")?
                .text("View transaction")
                .build();
            append_child(&notice, &link)?;
            notice
        }
        SubmissionState::Failed(error) => {
            let (title, message) = error.notice();
            ElementBuilder::new("div")?
                .class("notice notice-error")
                .attr("role", "alert")?
                .child(ElementBuilder::new("strong")?.text(title).build())?
                .child(ElementBuilder::new("p")?.text(&message).build())?
                .build()
        }
        _ => return Ok(None),
    };
    Ok(Some(notice))
}

/// Texto de progreso mientras el envío está en curso
pub fn render_status_banner(status: &SubmissionState) -> Result<Option<Element>, JsValue> {
    let text = match status {
        SubmissionState::Validating => "Validating fields...",
        SubmissionState::LookupPending => "Verifying DOI with the metadata catalog...",
        SubmissionState::Minting => "Confirm the transaction in your wallet...",
        _ => return Ok(None),
    };
    Ok(Some(
        ElementBuilder::new("p")?
            .class("status-banner")
            .text(text)
            .build(),
    ))
}
