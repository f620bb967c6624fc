// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod notice_timer;
pub mod wallet_state;
pub mod submission_state;
pub mod app_state;

pub use reactivity::*;
pub use notice_timer::*;
pub use wallet_state::*;
pub use submission_state::*;
pub use app_state::*;
