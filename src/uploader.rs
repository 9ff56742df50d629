//! Serial upload through an external flashing tool
//!
//! The byte-level transfer to a board bootloader is handled by a
//! dedicated tool; this process only decides whether and where the
//! transfer may happen, then hands over the validated artifact.

use fcflasher_core::error::FirmwareError;
use fcflasher_core::firmware::FirmwareUploader;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Uploader that delegates the transfer to an external program
///
/// The tool is invoked as `<tool> --port <device> <firmware>` and must
/// exit zero on a completed flash.
pub struct ToolUploader {
    tool: PathBuf,
}

impl ToolUploader {
    pub fn new(tool: impl Into<PathBuf>) -> Self {
        Self { tool: tool.into() }
    }
}

impl FirmwareUploader for ToolUploader {
    fn upload(&mut self, firmware_path: &Path, port: &Path) -> fcflasher_core::Result<()> {
        log::info!(
            "flashing {} to {} via {}",
            firmware_path.display(),
            port.display(),
            self.tool.display()
        );
        let status = Command::new(&self.tool)
            .arg("--port")
            .arg(port)
            .arg(firmware_path)
            .status()
            .map_err(|err| {
                FirmwareError::InstallFail(format!(
                    "could not run uploader {}: {}",
                    self.tool.display(),
                    err
                ))
            })?;

        if !status.success() {
            return Err(FirmwareError::InstallFail(format!(
                "uploader exited with {}",
                status
            )));
        }
        Ok(())
    }
}
