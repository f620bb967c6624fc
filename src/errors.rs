// ============================================================================
// ERRORES - Fallos visibles para el usuario (wallet, catálogo, mint)
// ============================================================================
// Ninguno se reintenta: todos devuelven el control al formulario
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("no injected wallet provider")]
    ProviderUnavailable,

    #[error("wallet connection rejected: {0}")]
    ConnectionRejected(String),

    #[error("identifier not recognized: {0}")]
    InvalidIdentifier(String),

    #[error("title mismatch: submitted '{expected}', catalog has '{found}'")]
    TitleMismatch { expected: String, found: String },

    #[error("DOI already submitted in this session: {0}")]
    DuplicateSubmission(String),

    #[error("mint failed: {0}")]
    MintFailed(String),

    #[error("a submission is already in progress")]
    SubmissionInProgress,
}

impl AppError {
    /// Título y descripción del aviso que ve el usuario
    pub fn notice(&self) -> (&'static str, String) {
        match self {
            AppError::ProviderUnavailable => (
                "MetaMask Required",
                "Please install a wallet extension such as MetaMask to continue.".to_string(),
            ),
            AppError::ConnectionRejected(_) => (
                "Wallet Not Connected",
                "The wallet connection was rejected. Connect again to continue.".to_string(),
            ),
            AppError::InvalidIdentifier(doi) => (
                "Invalid DOI",
                format!("The DOI '{}' was not recognized by the metadata catalog.", doi),
            ),
            AppError::TitleMismatch { found, .. } => (
                "Title Mismatch",
                format!("The title does not match the registered work: '{}'.", found),
            ),
            AppError::DuplicateSubmission(doi) => (
                "Already Submitted",
                format!("The DOI '{}' was already submitted in this session.", doi),
            ),
            AppError::MintFailed(_) => (
                "Submission Failed",
                "Transaction could not be processed. Try again.".to_string(),
            ),
            AppError::SubmissionInProgress => (
                "Please Wait",
                "A submission is already being processed.".to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_failure_notice_is_generic() {
        let (title, description) = AppError::MintFailed("insufficient funds for gas".into()).notice();
        assert_eq!(title, "Submission Failed");
        assert!(!description.contains("gas"));
    }

    #[test]
    fn display_keeps_cause() {
        let err = AppError::ConnectionRejected("User rejected the request.".into());
        assert_eq!(err.to_string(), "wallet connection rejected: User rejected the request.");
    }
}
