// ============================================================================
// WALLET STATE - Estado de la wallet conectada
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::AppError;
use crate::models::WalletSession;
use crate::state::{ChangeNotifier, NoticeTimer};

/// Estado de wallet
#[derive(Clone)]
pub struct WalletState {
    pub session: Rc<RefCell<WalletSession>>,
    pub connecting: Rc<RefCell<bool>>,
    pub last_error: Rc<RefCell<Option<AppError>>>,
    /// Auto-cierre del aviso de error
    pub notice_timer: NoticeTimer,
    notifier: ChangeNotifier,
}

impl WalletState {
    pub fn new(notifier: ChangeNotifier) -> Self {
        Self {
            session: Rc::new(RefCell::new(WalletSession::default())),
            connecting: Rc::new(RefCell::new(false)),
            last_error: Rc::new(RefCell::new(None)),
            notice_timer: NoticeTimer::new(),
            notifier,
        }
    }

    /// Obtener sesión
    pub fn get_session(&self) -> WalletSession {
        self.session.borrow().clone()
    }

    /// Cuenta conectada (None si no hay sesión)
    pub fn account(&self) -> Option<String> {
        self.session.borrow().account().map(str::to_string)
    }

    pub fn is_connected(&self) -> bool {
        self.session.borrow().connected
    }

    /// Marcar conectada con la cuenta dada; el saldo solo se conserva si es la misma cuenta
    pub fn set_connected(&self, address: String) {
        {
            let mut session = self.session.borrow_mut();
            let same_account = session.account() == Some(address.as_str());
            let chain_id = session.chain_id;
            let balance_wei = session.balance_wei.filter(|_| same_account);
            *session = WalletSession::connected(address);
            session.chain_id = chain_id;
            session.balance_wei = balance_wei;
        }
        self.notifier.notify();
    }

    /// Otra red => el saldo anterior ya no vale
    pub fn set_chain_id(&self, chain_id: Option<u64>) {
        {
            let mut session = self.session.borrow_mut();
            if session.chain_id != chain_id {
                session.balance_wei = None;
            }
            session.chain_id = chain_id;
        }
        self.notifier.notify();
    }

    pub fn set_balance(&self, balance_wei: Option<u128>) {
        self.session.borrow_mut().balance_wei = balance_wei;
        self.notifier.notify();
    }

    /// Desconectar - limpiar todo
    pub fn disconnect(&self) {
        self.session.borrow_mut().clear();
        self.notifier.notify();
    }

    pub fn set_connecting(&self, connecting: bool) {
        *self.connecting.borrow_mut() = connecting;
        self.notifier.notify();
    }

    pub fn get_connecting(&self) -> bool {
        *self.connecting.borrow()
    }

    /// Último error de conexión (aviso en el header)
    pub fn set_error(&self, error: Option<AppError>) {
        *self.last_error.borrow_mut() = error;
        self.notifier.notify();
    }

    pub fn get_error(&self) -> Option<AppError> {
        self.last_error.borrow().clone()
    }
}
