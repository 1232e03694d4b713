// Domain services
// Pure data-shaping over analytics payloads; no I/O

pub mod aggregator;
pub mod timeline_merge;

pub use aggregator::*;
pub use timeline_merge::*;
