//! CLI command implementations
//!
//! One module per command group: device detection and classification,
//! firmware validation and install, manifest cache maintenance, and the
//! informational listings.

pub mod detect;
pub mod firmware;
pub mod list;
pub mod manifest;
