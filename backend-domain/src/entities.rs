// Domain entities
// Read-only analytics shapes plus the local user record

pub mod anomaly;
pub mod entity;
pub mod heatmap;
pub mod prediction;
pub mod runtime;
pub mod timeline;
pub mod user;
pub mod zone;

pub use anomaly::*;
pub use entity::*;
pub use heatmap::*;
pub use prediction::*;
pub use runtime::*;
pub use timeline::*;
pub use user::*;
pub use zone::*;
