// CSV ingestion for the user import command

pub mod csv_source;

pub use csv_source::*;
