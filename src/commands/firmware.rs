//! Firmware validation and install commands

use crate::uploader::ToolUploader;
use fcflasher_core::firmware::{validate_firmware, FirmwareInstaller};
use fcflasher_core::{FlightController, Platform};
use std::path::Path;

/// Board descriptor for a CLI-specified target
fn board_for(platform: Platform, port: Option<&Path>) -> FlightController {
    match port {
        Some(port) => FlightController::with_path(platform.name(), "unknown", platform, port),
        None => FlightController::new(platform.name(), "unknown", platform),
    }
}

/// Validate a firmware file against a platform and report the outcome
pub fn run_validate(firmware: &Path, platform: Platform) -> Result<(), Box<dyn std::error::Error>> {
    let board = board_for(platform, None);
    validate_firmware(firmware, &board)?;
    println!("{} is valid for {}", firmware.display(), platform);
    Ok(())
}

/// Validate and install a firmware file
pub fn run_install(
    firmware: &Path,
    platform: Platform,
    port: Option<&Path>,
    dest: Option<&Path>,
    uploader_tool: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let board = board_for(platform, port);
    let mut uploader = ToolUploader::new(uploader_tool);

    FirmwareInstaller::new().install_firmware(firmware, &board, dest, &mut uploader)?;
    println!("Firmware installed on {}", platform);
    Ok(())
}
