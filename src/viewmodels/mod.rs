pub mod submission_viewmodel;
pub mod wallet_viewmodel;

pub use submission_viewmodel::{SubmissionViewModel, SubmitOutcome};
pub use wallet_viewmodel::WalletViewModel;
