// ============================================================================
// SUBMISSION VIEWMODEL - Flujo de envío de contribuciones
// ============================================================================
// Idle -> Validating -> LookupPending -> Minting -> Success | Failed
// El estado vive en SubmissionFormState; aquí solo las transiciones
// ============================================================================

use std::rc::Rc;

use crate::errors::AppError;
use crate::models::{FieldError, MintReceipt, SubmissionState};
use crate::services::{
    CatalogClient, ContractInvoker, MetadataCatalog, SubmittedDoiSet, WalletGateway,
};
use crate::state::{AppState, SubmissionFormState, WalletState};

/// Resultado de un intento de envío
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Campos inválidos: el estado queda en Idle
    Rejected(Vec<FieldError>),
    Minted(MintReceipt),
    Failed(AppError),
}

/// ViewModel de envío - SOLO lógica de negocio
pub struct SubmissionViewModel {
    wallet: WalletGateway,
    wallet_state: WalletState,
    invoker: ContractInvoker,
    catalog: Rc<dyn MetadataCatalog>,
    registry: SubmittedDoiSet,
    form: SubmissionFormState,
}

impl SubmissionViewModel {
    /// Cableado real: provider inyectado, catálogo HTTP, contrato de CONFIG
    pub fn new(state: &AppState) -> Self {
        Self::with_parts(
            state,
            ContractInvoker::new(state.capability.clone()),
            Rc::new(CatalogClient::new()),
        )
    }

    pub fn with_parts(
        state: &AppState,
        invoker: ContractInvoker,
        catalog: Rc<dyn MetadataCatalog>,
    ) -> Self {
        Self {
            wallet: WalletGateway::new(state.capability.clone(), state.wallet.clone()),
            wallet_state: state.wallet.clone(),
            invoker,
            catalog,
            registry: state.submitted_dois.clone(),
            form: state.submission.clone(),
        }
    }

    /// Enviar el borrador actual
    pub async fn submit(&self) -> SubmitOutcome {
        if self.form.is_busy() {
            log::warn!("⚠️ [SUBMIT] Envío en curso, ignorando segundo submit");
            return SubmitOutcome::Failed(AppError::SubmissionInProgress);
        }
        // El aviso del intento anterior ya no debe cerrar el nuevo
        self.form.notice_timer.cancel();

        self.form.set_status(SubmissionState::Validating);
        let draft = self.form.get_draft();

        let submission = match draft.validate() {
            Ok(valid) => valid,
            Err(errors) => {
                log::info!("📝 [SUBMIT] {} campos inválidos", errors.len());
                self.form.set_field_errors(errors.clone());
                self.form.set_status(SubmissionState::Idle);
                return SubmitOutcome::Rejected(errors);
            }
        };
        self.form.set_field_errors(Vec::new());

        if !self.wallet.is_available() {
            return self.fail(AppError::ProviderUnavailable);
        }

        if self.registry.contains(&submission.doi) {
            return self.fail(AppError::DuplicateSubmission(submission.doi.clone()));
        }

        // Verificación externa del DOI
        self.form.set_status(SubmissionState::LookupPending);
        let work = match self.catalog.lookup(&submission.doi).await {
            Ok(work) => work,
            Err(e) => return self.fail(e),
        };

        if !titles_match(&work.title, &submission.title) {
            return self.fail(AppError::TitleMismatch {
                expected: submission.title.clone(),
                found: work.title,
            });
        }

        self.form.set_status(SubmissionState::Minting);

        let account = match self.wallet_state.account() {
            Some(account) => account,
            None => match self.wallet.connect().await {
                Ok(account) => account,
                Err(e) => return self.fail(e),
            },
        };

        match self.invoker.mint(&account, &submission).await {
            Ok(tx_hash) => {
                self.registry.record(&submission.doi);
                let receipt = MintReceipt {
                    tx_hash,
                    doi: submission.doi.clone(),
                    title: submission.title.clone(),
                    minted_at: chrono::Utc::now(),
                };
                log::info!("🎉 [SUBMIT] SBT minteado: {}", receipt.tx_hash);
                self.form.reset_draft();
                self.form.set_status(SubmissionState::Success(receipt.clone()));
                SubmitOutcome::Minted(receipt)
            }
            Err(e) => self.fail(e),
        }
    }

    /// Cerrar el aviso: Success/Failed vuelven a Idle (el borrador se conserva)
    pub fn acknowledge(&self) {
        if !self.form.is_busy() && self.form.get_status() != SubmissionState::Idle {
            self.form.set_status(SubmissionState::Idle);
        }
    }

    fn fail(&self, error: AppError) -> SubmitOutcome {
        log::error!("❌ [SUBMIT] {}", error);
        self.form.set_status(SubmissionState::Failed(error.clone()));
        SubmitOutcome::Failed(error)
    }
}

/// Comparación de títulos sin mayúsculas ni espacios de borde
fn titles_match(catalog_title: &str, submitted_title: &str) -> bool {
    catalog_title.trim().to_lowercase() == submitted_title.trim().to_lowercase()
}
