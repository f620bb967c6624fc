// ============================================================================
// SUBMISSION STATE - Borrador, errores de campo y estado del envío
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{FieldError, FormField, SubmissionDraft, SubmissionState};
use crate::state::{ChangeNotifier, NoticeTimer};

/// Estado del formulario de contribución
#[derive(Clone)]
pub struct SubmissionFormState {
    pub draft: Rc<RefCell<SubmissionDraft>>,
    pub field_errors: Rc<RefCell<Vec<FieldError>>>,
    pub status: Rc<RefCell<SubmissionState>>,
    /// Auto-cierre del aviso de resultado
    pub notice_timer: NoticeTimer,
    notifier: ChangeNotifier,
}

impl SubmissionFormState {
    pub fn new(notifier: ChangeNotifier) -> Self {
        Self {
            draft: Rc::new(RefCell::new(SubmissionDraft::default())),
            field_errors: Rc::new(RefCell::new(Vec::new())),
            status: Rc::new(RefCell::new(SubmissionState::Idle)),
            notice_timer: NoticeTimer::new(),
            notifier,
        }
    }

    pub fn get_draft(&self) -> SubmissionDraft {
        self.draft.borrow().clone()
    }

    /// Escritura de un input; no re-renderiza para no perder el foco
    pub fn set_field(&self, field: FormField, value: String) {
        self.draft.borrow_mut().set_field(field, value);
    }

    pub fn reset_draft(&self) {
        *self.draft.borrow_mut() = SubmissionDraft::default();
        self.field_errors.borrow_mut().clear();
    }

    pub fn set_field_errors(&self, errors: Vec<FieldError>) {
        *self.field_errors.borrow_mut() = errors;
        self.notifier.notify();
    }

    pub fn field_error(&self, field: FormField) -> Option<String> {
        self.field_errors
            .borrow()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.clone())
    }

    pub fn get_status(&self) -> SubmissionState {
        self.status.borrow().clone()
    }

    /// Cambiar estado del envío y notificar
    pub fn set_status(&self, status: SubmissionState) {
        log::info!("🔀 [SUBMIT] Estado: {}", status.label());
        *self.status.borrow_mut() = status;
        self.notifier.notify();
    }

    pub fn is_busy(&self) -> bool {
        self.status.borrow().is_busy()
    }
}
