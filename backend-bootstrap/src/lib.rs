pub mod context;
pub mod lifecycle;

pub use lifecycle::{run_import, run_standalone};
