// Repository and Service Port Traits (Interfaces)
// Define what the domain needs from infrastructure

pub mod gateway;
pub mod repositories;

pub use gateway::*;
pub use repositories::*;
