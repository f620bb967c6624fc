pub mod wallet;
pub mod submission;
pub mod catalog;

pub use wallet::{TransactionRequest, WalletSession};
pub use submission::{
    normalize_doi, FieldError, FormField, MintReceipt, SubmissionDraft, SubmissionState,
    ValidSubmission,
};
pub use catalog::{CatalogEnvelope, CatalogWork};
