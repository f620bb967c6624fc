// ============================================================================
// WALLET VIEWMODEL - Conectar / desconectar / escuchar cambios de cuenta
// ============================================================================

use std::rc::Rc;

use crate::errors::AppError;
use crate::services::{WalletCapability, WalletGateway};
use crate::state::{AppState, WalletState};

/// ViewModel de wallet - SOLO lógica de negocio
pub struct WalletViewModel {
    gateway: WalletGateway,
    capability: WalletCapability,
    wallet: WalletState,
}

impl WalletViewModel {
    pub fn new(state: &AppState) -> Self {
        Self {
            gateway: WalletGateway::new(state.capability.clone(), state.wallet.clone()),
            capability: state.capability.clone(),
            wallet: state.wallet.clone(),
        }
    }

    /// Conectar; el error queda en el estado para el aviso del header
    pub async fn connect(&self) -> Result<String, AppError> {
        self.wallet.set_error(None);
        let result = self.gateway.connect().await;
        if let Err(e) = &result {
            self.wallet.set_error(Some(e.clone()));
        }
        result
    }

    pub fn dismiss_error(&self) {
        if self.wallet.get_error().is_some() {
            self.wallet.set_error(None);
        }
    }

    pub fn disconnect(&self) {
        self.gateway.disconnect();
    }

    /// Al arrancar: sesión previa sin prompt
    pub async fn restore(&self) -> Option<String> {
        self.gateway.restore().await
    }

    pub async fn refresh_balance(&self) {
        self.gateway.refresh_balance().await;
    }

    /// Registrar listeners de `accountsChanged` y `chainChanged` (una sola vez, en init).
    /// `on_switch` corre tras cada cambio ya aplicado al estado
    pub fn start_listening(&self, on_switch: Rc<dyn Fn()>) -> Result<(), String> {
        let Some(provider) = self.capability.provider() else {
            return Ok(());
        };

        let gateway = self.gateway.clone();
        let after = on_switch.clone();
        provider.on_accounts_changed(Box::new(move |accounts| {
            gateway.handle_accounts_changed(accounts);
            after();
        }))?;

        let gateway = self.gateway.clone();
        provider.on_chain_changed(Box::new(move |chain_id| {
            gateway.handle_chain_changed(chain_id);
            on_switch();
        }))?;

        log::info!("👂 [WALLET] Escuchando accountsChanged / chainChanged");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::wallet_gateway::tests::{FakeWallet, ACCOUNT};
    use std::cell::Cell;

    #[tokio::test]
    async fn listener_follows_account_changes() {
        let wallet = Rc::new(FakeWallet::with_account(ACCOUNT));
        let state = AppState::with_capability(WalletCapability::Available(wallet.clone()));
        let vm = WalletViewModel::new(&state);

        vm.connect().await.unwrap();
        let switches = Rc::new(Cell::new(0));
        let counter = switches.clone();
        vm.start_listening(Rc::new(move || counter.set(counter.get() + 1)))
            .unwrap();

        let listener = wallet.listener.borrow();
        let notify = listener.as_ref().expect("listener registered");
        notify(vec!["0x4444444444444444444444444444444444444444".to_string()]);
        assert_eq!(
            state.wallet.account().as_deref(),
            Some("0x4444444444444444444444444444444444444444")
        );

        notify(Vec::new());
        assert!(!state.wallet.is_connected());
        assert_eq!(switches.get(), 2);
    }

    #[tokio::test]
    async fn listener_follows_network_changes() {
        let wallet = Rc::new(FakeWallet::with_account(ACCOUNT));
        let state = AppState::with_capability(WalletCapability::Available(wallet.clone()));
        let vm = WalletViewModel::new(&state);

        vm.connect().await.unwrap();
        let switches = Rc::new(Cell::new(0));
        let counter = switches.clone();
        vm.start_listening(Rc::new(move || counter.set(counter.get() + 1)))
            .unwrap();

        let listener = wallet.chain_listener.borrow();
        let notify = listener.as_ref().expect("chain listener registered");
        notify(1);
        assert_eq!(state.wallet.get_session().chain_id, Some(1));
        assert_eq!(switches.get(), 1);
    }

    #[tokio::test]
    async fn failed_connect_is_kept_for_the_notice() {
        let state = AppState::with_capability(WalletCapability::Unavailable);
        let vm = WalletViewModel::new(&state);

        assert_eq!(vm.connect().await, Err(AppError::ProviderUnavailable));
        assert_eq!(state.wallet.get_error(), Some(AppError::ProviderUnavailable));

        vm.dismiss_error();
        assert_eq!(state.wallet.get_error(), None);
    }

    #[test]
    fn listening_without_provider_is_a_no_op() {
        let state = AppState::with_capability(WalletCapability::Unavailable);
        assert!(WalletViewModel::new(&state).start_listening(Rc::new(|| {})).is_ok());
    }

    #[tokio::test]
    async fn disconnect_clears_session() {
        let wallet = Rc::new(FakeWallet::with_account(ACCOUNT));
        let state = AppState::with_capability(WalletCapability::Available(wallet));
        let vm = WalletViewModel::new(&state);

        vm.connect().await.unwrap();
        vm.disconnect();
        assert_eq!(state.wallet.get_session(), Default::default());
    }
}
