// ============================================================================
// WALLET GATEWAY - Conexión de cuenta y sesión de wallet
// ============================================================================
// Sin reintentos: si el usuario rechaza, debe volver a pulsar "Connect"
// ============================================================================

use crate::errors::AppError;
use crate::services::WalletCapability;
use crate::state::WalletState;

#[derive(Clone)]
pub struct WalletGateway {
    capability: WalletCapability,
    state: WalletState,
}

impl WalletGateway {
    pub fn new(capability: WalletCapability, state: WalletState) -> Self {
        Self { capability, state }
    }

    pub fn is_available(&self) -> bool {
        self.capability.is_available()
    }

    /// Pedir autorización de cuentas y marcar la sesión conectada
    pub async fn connect(&self) -> Result<String, AppError> {
        let Some(provider) = self.capability.provider() else {
            log::warn!("⚠️ [WALLET] No hay provider: instalar extensión de wallet");
            self.state.disconnect();
            return Err(AppError::ProviderUnavailable);
        };

        self.state.set_connecting(true);
        let result = provider.request_accounts().await;
        self.state.set_connecting(false);

        let account = match result {
            Ok(accounts) => accounts.into_iter().next(),
            Err(e) => {
                log::error!("❌ [WALLET] Error conectando wallet: {}", e);
                self.state.disconnect();
                return Err(AppError::ConnectionRejected(e));
            }
        };

        let Some(account) = account else {
            log::error!("❌ [WALLET] No accounts found.");
            self.state.disconnect();
            return Err(AppError::ConnectionRejected("No accounts found.".to_string()));
        };

        log::info!("✅ [WALLET] Conectada: {}", account);
        self.state.set_connected(account.clone());
        self.refresh_network().await;
        Ok(account)
    }

    /// Reconectar sin prompt si la página ya estaba autorizada (`eth_accounts`)
    pub async fn restore(&self) -> Option<String> {
        let provider = self.capability.provider()?;
        match provider.current_accounts().await {
            Ok(accounts) => {
                let account = accounts.into_iter().next()?;
                log::info!("💾 [WALLET] Sesión restaurada: {}", account);
                self.state.set_connected(account.clone());
                self.refresh_network().await;
                Some(account)
            }
            Err(e) => {
                log::warn!("⚠️ [WALLET] eth_accounts falló: {}", e);
                None
            }
        }
    }

    /// Evento `accountsChanged` del provider
    pub fn handle_accounts_changed(&self, accounts: Vec<String>) {
        match accounts.into_iter().next() {
            Some(account) => {
                log::info!("🔄 [WALLET] Cuenta cambiada: {}", account);
                self.state.set_connected(account);
            }
            None => {
                log::info!("👋 [WALLET] Sin cuentas, desconectando");
                self.state.disconnect();
            }
        }
    }

    /// Evento `chainChanged` del provider
    pub fn handle_chain_changed(&self, chain_id: u64) {
        log::info!("🔄 [WALLET] Red cambiada: {}", chain_id);
        self.state.set_chain_id(Some(chain_id));
    }

    pub fn disconnect(&self) {
        log::info!("👋 [WALLET] Desconectada");
        self.state.disconnect();
    }

    /// Saldo de la cuenta conectada; sin sesión no hace nada
    pub async fn refresh_balance(&self) {
        let (Some(provider), Some(account)) = (self.capability.provider(), self.state.account())
        else {
            return;
        };
        match provider.balance(&account).await {
            // La cuenta pudo cambiar mientras esperábamos
            Ok(wei) if self.state.account().as_deref() == Some(account.as_str()) => {
                self.state.set_balance(Some(wei));
            }
            Ok(_) => {}
            Err(e) => log::warn!("⚠️ [WALLET] eth_getBalance falló: {}", e),
        }
    }

    async fn refresh_network(&self) {
        let Some(provider) = self.capability.provider() else {
            return;
        };
        match provider.chain_id().await {
            Ok(chain_id) => self.state.set_chain_id(Some(chain_id)),
            Err(e) => log::warn!("⚠️ [WALLET] eth_chainId falló: {}", e),
        }
        self.refresh_balance().await;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::TransactionRequest;
    use crate::services::wallet_provider::AccountProvider;
    use crate::state::ChangeNotifier;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Wallet falsa: cuentas fijas, rechazo opcional, cuenta llamadas
    #[derive(Default)]
    pub struct FakeWallet {
        pub accounts: Vec<String>,
        pub authorized: bool,
        pub reject_with: Option<String>,
        pub fail_send_with: Option<String>,
        pub request_calls: Cell<usize>,
        pub sent: RefCell<Vec<TransactionRequest>>,
        pub balance_wei: u128,
        pub listener: RefCell<Option<Box<dyn Fn(Vec<String>)>>>,
        pub chain_listener: RefCell<Option<Box<dyn Fn(u64)>>>,
    }

    impl FakeWallet {
        pub fn with_account(account: &str) -> Self {
            Self {
                accounts: vec![account.to_string()],
                ..Self::default()
            }
        }
    }

    #[async_trait(?Send)]
    impl AccountProvider for FakeWallet {
        async fn request_accounts(&self) -> Result<Vec<String>, String> {
            self.request_calls.set(self.request_calls.get() + 1);
            match &self.reject_with {
                Some(reason) => Err(reason.clone()),
                None => Ok(self.accounts.clone()),
            }
        }

        async fn current_accounts(&self) -> Result<Vec<String>, String> {
            Ok(if self.authorized { self.accounts.clone() } else { Vec::new() })
        }

        async fn chain_id(&self) -> Result<u64, String> {
            Ok(11155111)
        }

        async fn balance(&self, _address: &str) -> Result<u128, String> {
            Ok(self.balance_wei)
        }

        async fn send_transaction(&self, tx: &TransactionRequest) -> Result<String, String> {
            if let Some(reason) = &self.fail_send_with {
                return Err(reason.clone());
            }
            self.sent.borrow_mut().push(tx.clone());
            Ok(format!("0x{:064x}", self.sent.borrow().len()))
        }

        fn on_accounts_changed(&self, callback: Box<dyn Fn(Vec<String>)>) -> Result<(), String> {
            *self.listener.borrow_mut() = Some(callback);
            Ok(())
        }

        fn on_chain_changed(&self, callback: Box<dyn Fn(u64)>) -> Result<(), String> {
            *self.chain_listener.borrow_mut() = Some(callback);
            Ok(())
        }
    }

    pub const ACCOUNT: &str = "0x1111111111111111111111111111111111111111";

    fn gateway(wallet: FakeWallet) -> (WalletGateway, WalletState) {
        let state = WalletState::new(ChangeNotifier::new());
        let gateway = WalletGateway::new(WalletCapability::Available(Rc::new(wallet)), state.clone());
        (gateway, state)
    }

    #[tokio::test]
    async fn connect_takes_first_account() {
        let mut wallet = FakeWallet::with_account(ACCOUNT);
        wallet.accounts.push("0x2222222222222222222222222222222222222222".into());
        let (gateway, state) = gateway(wallet);

        assert_eq!(gateway.connect().await, Ok(ACCOUNT.to_string()));
        let session = state.get_session();
        assert!(session.connected);
        assert_eq!(session.address.as_deref(), Some(ACCOUNT));
        assert_eq!(session.chain_id, Some(11155111));
        assert!(!state.get_connecting());
    }

    #[tokio::test]
    async fn no_provider_leaves_session_unconnected() {
        let state = WalletState::new(ChangeNotifier::new());
        let gateway = WalletGateway::new(WalletCapability::Unavailable, state.clone());

        assert_eq!(gateway.connect().await, Err(AppError::ProviderUnavailable));
        assert!(!state.is_connected());
        assert_eq!(state.account(), None);
    }

    #[tokio::test]
    async fn rejection_is_connection_rejected() {
        let mut wallet = FakeWallet::with_account(ACCOUNT);
        wallet.reject_with = Some("User rejected the request.".into());
        let (gateway, state) = gateway(wallet);

        assert_eq!(
            gateway.connect().await,
            Err(AppError::ConnectionRejected("User rejected the request.".into()))
        );
        assert!(!state.is_connected());
    }

    #[tokio::test]
    async fn empty_account_list_is_rejected() {
        let (gateway, state) = gateway(FakeWallet::default());
        assert!(matches!(gateway.connect().await, Err(AppError::ConnectionRejected(_))));
        assert!(!state.is_connected());
    }

    #[tokio::test]
    async fn restore_only_when_already_authorized() {
        let (gateway, state) = gateway(FakeWallet::with_account(ACCOUNT));
        assert_eq!(gateway.restore().await, None);
        assert!(!state.is_connected());

        let mut wallet = FakeWallet::with_account(ACCOUNT);
        wallet.authorized = true;
        let (gateway, state) = self::gateway(wallet);
        assert_eq!(gateway.restore().await.as_deref(), Some(ACCOUNT));
        assert!(state.is_connected());
    }

    #[tokio::test]
    async fn accounts_changed_switches_or_disconnects() {
        let (gateway, state) = gateway(FakeWallet::with_account(ACCOUNT));
        gateway.connect().await.unwrap();

        gateway.handle_accounts_changed(vec!["0x3333333333333333333333333333333333333333".into()]);
        assert_eq!(state.account().as_deref(), Some("0x3333333333333333333333333333333333333333"));
        assert_eq!(state.get_session().chain_id, Some(11155111));

        gateway.handle_accounts_changed(Vec::new());
        assert!(!state.is_connected());
        assert_eq!(state.get_session().address, None);
    }

    #[tokio::test]
    async fn connect_reads_balance_of_the_account() {
        let mut wallet = FakeWallet::with_account(ACCOUNT);
        wallet.balance_wei = 1_500_000_000_000_000_000;
        let (gateway, state) = gateway(wallet);

        gateway.connect().await.unwrap();
        assert_eq!(state.get_session().balance_wei, Some(1_500_000_000_000_000_000));

        // Otra cuenta: el saldo anterior no se muestra
        gateway.handle_accounts_changed(vec!["0x3333333333333333333333333333333333333333".into()]);
        assert_eq!(state.get_session().balance_wei, None);
    }

    #[tokio::test]
    async fn chain_changed_updates_network_and_drops_balance() {
        let mut wallet = FakeWallet::with_account(ACCOUNT);
        wallet.balance_wei = 7;
        let (gateway, state) = gateway(wallet);
        gateway.connect().await.unwrap();

        gateway.handle_chain_changed(11155111);
        assert_eq!(state.get_session().balance_wei, Some(7));

        gateway.handle_chain_changed(137);
        let session = state.get_session();
        assert_eq!(session.chain_id, Some(137));
        assert_eq!(session.balance_wei, None);

        gateway.refresh_balance().await;
        assert_eq!(state.get_session().balance_wei, Some(7));
    }

    #[tokio::test]
    async fn balance_refresh_without_session_is_a_no_op() {
        let (gateway, state) = gateway(FakeWallet::with_account(ACCOUNT));
        gateway.refresh_balance().await;
        assert_eq!(state.get_session().balance_wei, None);
    }
}
