// ============================================================================
// NOTICE TIMER - Un solo auto-cierre pendiente por aviso
// ============================================================================
// Guardar un timer nuevo suelta el anterior; soltar un `Timeout` lo cancela
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

pub struct NoticeTimer<H = Timeout> {
    pending: Rc<RefCell<Option<H>>>,
}

impl<H> NoticeTimer<H> {
    pub fn new() -> Self {
        Self {
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Reemplazar el auto-cierre pendiente
    pub fn replace(&self, timer: H) {
        let previous = self.pending.borrow_mut().replace(timer);
        drop(previous);
    }

    pub fn cancel(&self) {
        let previous = self.pending.borrow_mut().take();
        drop(previous);
    }
}

// Manual: `Timeout` no es Clone, solo se comparte el Rc
impl<H> Clone for NoticeTimer<H> {
    fn clone(&self) -> Self {
        Self {
            pending: self.pending.clone(),
        }
    }
}

impl<H> Default for NoticeTimer<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Handle que cuenta cuántas veces se cancela (drop)
    struct Handle(Rc<Cell<usize>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn newer_notice_cancels_older_timer() {
        let cancelled = Rc::new(Cell::new(0));
        let timer = NoticeTimer::new();

        timer.replace(Handle(cancelled.clone()));
        assert_eq!(cancelled.get(), 0);

        timer.replace(Handle(cancelled.clone()));
        assert_eq!(cancelled.get(), 1);

        timer.cancel();
        assert_eq!(cancelled.get(), 2);

        timer.cancel();
        assert_eq!(cancelled.get(), 2);
    }

    #[test]
    fn clones_share_the_pending_timer() {
        let cancelled = Rc::new(Cell::new(0));
        let timer = NoticeTimer::new();
        let other = timer.clone();

        timer.replace(Handle(cancelled.clone()));
        other.cancel();
        assert_eq!(cancelled.get(), 1);
    }
}
