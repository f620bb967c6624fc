pub mod app;
pub mod header;
pub mod wallet_details;
pub mod submit_form;
pub mod notice;

pub use app::render_app;
pub use header::render_header;
pub use wallet_details::render_wallet_details;
pub use submit_form::render_submit_form;
pub use notice::{render_notice, render_status_banner};
