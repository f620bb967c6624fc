// ============================================================================
// DESCI REPUTATION - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModels: flujos de wallet y envío
// - Services: provider de wallet, contrato, catálogo de metadatos
// - State: Rc<RefCell> + notificador de cambios
// - Models: estructuras de dominio
// ============================================================================

mod config;
mod errors;
mod models;
mod services;
mod viewmodels;
mod state;
mod dom;
mod views;
mod utils;
mod app;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::App;
use crate::config::CONFIG;
use crate::viewmodels::WalletViewModel;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() { log::Level::Info } else { log::Level::Warn };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 [APP] DeSci Reputation - Rust Puro + MVVM");

    let app = App::new()?;
    app.render()?;

    let wallet_vm = WalletViewModel::new(app.state());
    let balance_vm = Rc::new(WalletViewModel::new(app.state()));

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Listeners globales del provider: una sola vez
    let on_switch: Rc<dyn Fn()> = Rc::new(move || {
        let vm = balance_vm.clone();
        spawn_local(async move { vm.refresh_balance().await });
    });
    if let Err(e) = wallet_vm.start_listening(on_switch) {
        log::warn!("⚠️ [APP] No se pudo escuchar eventos del provider: {}", e);
    }

    spawn_local(async move {
        wallet_vm.restore().await;
    });

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|app_cell| match app_cell.borrow().as_ref() {
        Some(app) => {
            if let Err(e) = app.render() {
                log::error!("❌ [APP] Error re-renderizando: {:?}", e);
            }
        }
        None => log::warn!("⚠️ [APP] App no está inicializada"),
    });
}
