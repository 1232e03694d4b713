// Analytics backend HTTP client

pub mod analytics_client;

pub use analytics_client::*;
