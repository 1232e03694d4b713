pub mod config;
pub mod gateway;
pub mod import;
pub mod repositories;

pub use config::*;
pub use gateway::*;
pub use import::*;
pub use repositories::*;
