use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::utils::constants::{DOI_PREFIXES, MIN_ABSTRACT_LEN, MIN_DOI_LEN, MIN_TITLE_LEN};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Doi,
    Repository,
    Abstract,
}

impl FormField {
    /// Atributo `name` / id del input
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Doi => "doi",
            FormField::Repository => "repository",
            FormField::Abstract => "abstract",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

/// Borrador del formulario (todo lo que escribe el usuario)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionDraft {
    pub title: String,
    pub doi: String,
    pub repository: String,
    pub abstract_text: String,
}

/// Borrador que ya pasó las restricciones de longitud
#[derive(Clone, Debug, PartialEq)]
pub struct ValidSubmission {
    pub title: String,
    pub doi: String,
    pub repository: Option<String>,
    pub abstract_text: String,
}

impl SubmissionDraft {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Doi => &self.doi,
            FormField::Repository => &self.repository,
            FormField::Abstract => &self.abstract_text,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Title => self.title = value,
            FormField::Doi => self.doi = value,
            FormField::Repository => self.repository = value,
            FormField::Abstract => self.abstract_text = value,
        }
    }

    /// Validar longitudes mínimas; devuelve todos los errores de campo a la vez
    pub fn validate(&self) -> Result<ValidSubmission, Vec<FieldError>> {
        let mut errors = Vec::new();

        let checks = [
            (FormField::Title, MIN_TITLE_LEN, "Title must be at least 5 characters."),
            (FormField::Doi, MIN_DOI_LEN, "DOI or link must be at least 5 characters."),
            (FormField::Abstract, MIN_ABSTRACT_LEN, "Abstract must be at least 20 characters."),
        ];
        let doi = normalize_doi(&self.doi);
        for (field, min, message) in checks {
            // El DOI se mide sin prefijo de resolver
            let len = match field {
                FormField::Doi => doi.chars().count(),
                _ => self.field(field).trim().chars().count(),
            };
            if len < min {
                errors.push(FieldError {
                    field,
                    message: message.to_string(),
                });
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let repository = self.repository.trim();
        Ok(ValidSubmission {
            title: self.title.trim().to_string(),
            doi,
            repository: (!repository.is_empty()).then(|| repository.to_string()),
            abstract_text: self.abstract_text.trim().to_string(),
        })
    }
}

/// Forma canónica de un DOI: sin prefijo de resolver y en minúsculas
pub fn normalize_doi(raw: &str) -> String {
    let trimmed = raw.trim();
    let lower = trimmed.to_lowercase();
    for prefix in DOI_PREFIXES {
        if lower.starts_with(prefix) {
            return lower[prefix.len()..].trim().to_string();
        }
    }
    lower
}

/// Resultado de un mint exitoso
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MintReceipt {
    pub tx_hash: String,
    pub doi: String,
    pub title: String,
    pub minted_at: DateTime<Utc>,
}

/// Estados del flujo de envío
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionState {
    Idle,
    Validating,
    LookupPending,
    Minting,
    Success(MintReceipt),
    Failed(AppError),
}

impl SubmissionState {
    /// Hay un envío en vuelo (el botón queda deshabilitado)
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            SubmissionState::Validating | SubmissionState::LookupPending | SubmissionState::Minting
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Validating => "validating",
            SubmissionState::LookupPending => "lookup",
            SubmissionState::Minting => "minting",
            SubmissionState::Success(_) => "success",
            SubmissionState::Failed(_) => "failed",
        }
    }
}

impl Default for SubmissionState {
    fn default() -> Self {
        SubmissionState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, doi: &str, abstract_text: &str) -> SubmissionDraft {
        SubmissionDraft {
            title: title.to_string(),
            doi: doi.to_string(),
            repository: String::new(),
            abstract_text: abstract_text.to_string(),
        }
    }

    #[test]
    fn short_fields_report_each_error() {
        let errors = draft("Qua", "10.1", "too short").validate().unwrap_err();
        let fields: Vec<FormField> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![FormField::Title, FormField::Doi, FormField::Abstract]);
        assert_eq!(errors[0].message, "Title must be at least 5 characters.");
    }

    #[test]
    fn whitespace_does_not_count() {
        let errors = draft("   ab   ", "10.1234/x", "an abstract long enough to pass")
            .validate()
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, FormField::Title);
    }

    #[test]
    fn valid_draft_is_normalized() {
        let mut d = draft(
            " Quantum Drug Discovery ",
            "https://doi.org/10.1234/QCADD.2023.001",
            "Quantum algorithms for molecular docking.",
        );
        d.repository = "  ".to_string();
        let valid = d.validate().unwrap();
        assert_eq!(valid.title, "Quantum Drug Discovery");
        assert_eq!(valid.doi, "10.1234/qcadd.2023.001");
        assert_eq!(valid.repository, None);
    }

    #[test]
    fn bare_resolver_prefix_is_not_a_doi() {
        let long_abstract = "an abstract long enough to pass";
        for raw in ["https://doi.org/", "doi:", "doi:10.1"] {
            let errors = draft("Quantum Drug Discovery", raw, long_abstract)
                .validate()
                .unwrap_err();
            assert_eq!(errors.len(), 1, "{}", raw);
            assert_eq!(errors[0].field, FormField::Doi);
            assert_eq!(errors[0].message, "DOI or link must be at least 5 characters.");
        }
    }

    #[test]
    fn doi_prefixes_are_stripped() {
        assert_eq!(normalize_doi("doi:10.1000/182"), "10.1000/182");
        assert_eq!(normalize_doi("http://dx.doi.org/10.1000/182"), "10.1000/182");
        assert_eq!(normalize_doi(" 10.1000/ABC "), "10.1000/abc");
    }

    #[test]
    fn busy_states() {
        assert!(SubmissionState::Minting.is_busy());
        assert!(SubmissionState::LookupPending.is_busy());
        assert!(!SubmissionState::Idle.is_busy());
        assert!(!SubmissionState::Failed(AppError::ProviderUnavailable).is_busy());
    }
}
