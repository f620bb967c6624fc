// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Lista compartida de subscribers; los clones notifican a los mismos
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify(&self) {
        // Copia para que un callback pueda suscribir otro sin doble borrow
        let subscribers: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_share_subscribers() {
        let notifier = ChangeNotifier::new();
        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        notifier.subscribe(move || hits_clone.set(hits_clone.get() + 1));

        notifier.clone().notify();
        notifier.notify();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn callback_can_subscribe_during_notify() {
        let notifier = ChangeNotifier::new();
        let inner = notifier.clone();
        notifier.subscribe(move || inner.subscribe(|| {}));
        notifier.notify();
        assert_eq!(notifier.subscribers.borrow().len(), 2);
    }
}
