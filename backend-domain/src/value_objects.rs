// Domain value objects
pub mod anomaly_kind;
pub mod severity;
pub mod user_role;
pub mod view_mode;

pub use anomaly_kind::*;
pub use severity::*;
pub use user_role::*;
pub use view_mode::*;
