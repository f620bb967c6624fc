// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::services::{InjectedProvider, SubmittedDoiSet, WalletCapability};
use crate::state::{ChangeNotifier, SubmissionFormState, WalletState};

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub wallet: WalletState,
    pub submission: SubmissionFormState,
    pub submitted_dois: SubmittedDoiSet,
    pub capability: WalletCapability,

    // UI State
    pub show_wallet_details: Rc<RefCell<bool>>,

    notifier: ChangeNotifier,
}

impl AppState {
    /// Estado con el provider inyectado del navegador
    pub fn new() -> Self {
        Self::with_capability(InjectedProvider::detect())
    }

    pub fn with_capability(capability: WalletCapability) -> Self {
        let notifier = ChangeNotifier::new();
        Self {
            wallet: WalletState::new(notifier.clone()),
            submission: SubmissionFormState::new(notifier.clone()),
            submitted_dois: SubmittedDoiSet::new(),
            capability,
            show_wallet_details: Rc::new(RefCell::new(false)),
            notifier,
        }
    }

    pub fn toggle_wallet_details(&self) {
        let show = !*self.show_wallet_details.borrow();
        *self.show_wallet_details.borrow_mut() = show;
        self.notifier.notify();
    }

    /// Suscribirse a cambios de estado crítico
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.notifier.subscribe(callback);
    }
}
