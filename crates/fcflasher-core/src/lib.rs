//! fcflasher-core - firmware lifecycle management for flight controllers
//!
//! This crate identifies attached controller boards, resolves the
//! firmware image format a board expects, validates candidate images
//! against the board's identity, and dispatches the matching install
//! strategy (serial flashing vs. filesystem placement).
//!
//! # Example
//!
//! ```ignore
//! use fcflasher_core::firmware::{validate_firmware, FirmwareInstaller};
//! use fcflasher_core::typedefs::{FlightController, Platform};
//!
//! let board = FlightController::with_path("Pixhawk1", "3DR", Platform::Pixhawk1, "/dev/ttyACM0");
//! validate_firmware(firmware_path, &board)?;
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod error;
pub mod firmware;
pub mod identity;
pub mod manifest;
pub mod typedefs;

pub use error::{FirmwareError, Result};
pub use typedefs::{FirmwareFormat, FlightController, Platform, PlatformType, Vehicle};
