pub mod commands;
pub mod error;
pub mod metrics;
pub mod password;
pub mod queries;
pub mod session;
pub mod state;

pub use error::AppError;
pub use metrics::Metrics;
pub use session::{SessionClaims, SessionService};
pub use state::AppState;
