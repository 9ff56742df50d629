//! Firmware installation
//!
//! Orchestrates permission preparation, validation, and the
//! connection-specific install strategy. Validation is a hard gate:
//! any failure aborts the attempt and is never retried here.
//!
//! The byte transfer to a serial target and the artifact download are
//! external collaborators, reached through the traits below.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FirmwareError, Result};
use crate::firmware::validate::validate_firmware;
use crate::typedefs::{FirmwareFormat, FlightController, PlatformType, Vehicle};

/// Byte-transfer collaborator flashing an artifact to a serial target
pub trait FirmwareUploader {
    /// Flash the validated artifact to the board behind `port`
    fn upload(&mut self, firmware_path: &Path, port: &Path) -> Result<()>;
}

/// Download collaborator resolving a firmware artifact to a local path
pub trait FirmwareDownloader {
    /// Fetch the right artifact for a vehicle/board pair, returning where
    /// it landed on the local filesystem
    fn download(&mut self, vehicle: Vehicle, board: &FlightController) -> std::io::Result<PathBuf>;
}

/// Abstracts the install procedures for the supported boards
#[derive(Debug, Default)]
pub struct FirmwareInstaller;

impl FirmwareInstaller {
    /// New installer
    pub fn new() -> Self {
        Self
    }

    /// Add execute permission for owner, group, and others
    ///
    /// Native binary firmware must be runnable by the target service
    /// regardless of which account performs the install.
    pub fn add_run_permission(firmware_path: &Path) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let metadata = fs::metadata(firmware_path).map_err(|err| {
            FirmwareError::InstallFail(format!("could not stat firmware file: {}", err))
        })?;
        let mut permissions = metadata.permissions();
        permissions.set_mode(permissions.mode() | 0o111);
        fs::set_permissions(firmware_path, permissions).map_err(|err| {
            FirmwareError::InstallFail(format!("could not set execute permission: {}", err))
        })
    }

    /// Install the given firmware on the given board
    ///
    /// Serial boards are flashed through the uploader collaborator and
    /// require a device path on the board descriptor. Native binary
    /// firmware for a non-serial board is copied to `firmware_dest_path`
    /// instead; a copy rather than a move, since source and destination
    /// may sit on different filesystems (e.g. a container bind mount).
    pub fn install_firmware(
        &self,
        new_firmware_path: &Path,
        board: &FlightController,
        firmware_dest_path: Option<&Path>,
        uploader: &mut dyn FirmwareUploader,
    ) -> Result<()> {
        if !new_firmware_path.is_file() {
            return Err(FirmwareError::InvalidFirmwareFile(
                "given path is not a valid file".into(),
            ));
        }

        log::debug!(
            "installing firmware for board {} from {}",
            board,
            new_firmware_path.display()
        );
        let firmware_format = board.platform.firmware_format();
        if firmware_format == FirmwareFormat::Elf {
            Self::add_run_permission(new_firmware_path)?;
        }

        validate_firmware(new_firmware_path, board)?;

        if board.platform_type() == PlatformType::Serial {
            let port = board.path.as_deref().ok_or(FirmwareError::MissingBoardPath)?;
            return uploader.upload(new_firmware_path, port);
        }
        if firmware_format == FirmwareFormat::Elf {
            let dest = firmware_dest_path.ok_or_else(|| {
                FirmwareError::InstallFail("firmware file destination not provided".into())
            })?;
            fs::copy(new_firmware_path, dest).map_err(|err| {
                FirmwareError::InstallFail(format!("could not place firmware file: {}", err))
            })?;
            log::info!("firmware installed to {}", dest.display());
            return Ok(());
        }

        Err(FirmwareError::UnsupportedPlatform(
            "firmware install is not implemented for this platform".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::firmware::decoder::{make_descriptor, BoardSubType, BoardType};
    use crate::firmware::elf::{make_elf_header, ElfArch};
    use crate::typedefs::Platform;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    /// Records upload calls instead of talking to hardware
    #[derive(Debug, Default)]
    struct RecordingUploader {
        uploads: Vec<(PathBuf, PathBuf)>,
    }

    impl FirmwareUploader for RecordingUploader {
        fn upload(&mut self, firmware_path: &Path, port: &Path) -> Result<()> {
            self.uploads.push((firmware_path.to_path_buf(), port.to_path_buf()));
            Ok(())
        }
    }

    /// Serves a pre-staged artifact path
    struct StubDownloader(PathBuf);

    impl FirmwareDownloader for StubDownloader {
        fn download(&mut self, _vehicle: Vehicle, _board: &FlightController) -> std::io::Result<PathBuf> {
            Ok(self.0.clone())
        }
    }

    fn host_elf_arch() -> ElfArch {
        match std::env::consts::ARCH {
            "x86" => ElfArch::X86,
            "x86_64" => ElfArch::X86_64,
            "arm" => ElfArch::Arm,
            "aarch64" => ElfArch::AArch64,
            other => panic!("tests cannot run on unrecognized host arch {}", other),
        }
    }

    fn write_sitl_firmware(dir: &TempDir) -> PathBuf {
        let mut image = make_elf_header(host_elf_arch());
        image.extend_from_slice(&[0u8; 0x80]);
        image.extend_from_slice(&make_descriptor(BoardType::Sitl as u8, 0));
        let path = dir.path().join("ardusub");
        fs::write(&path, image).unwrap();
        path
    }

    fn write_apj_firmware(board_id: u32) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"board_id": {}}}"#, board_id).unwrap();
        file
    }

    #[test]
    fn test_missing_file_is_invalid() {
        let installer = FirmwareInstaller::new();
        let board = FlightController::new("SITL", "ArduPilot Team", Platform::Sitl);
        let mut uploader = RecordingUploader::default();
        let err = installer
            .install_firmware(Path::new("/nonexistent/firmware"), &board, None, &mut uploader)
            .unwrap_err();
        assert!(matches!(err, FirmwareError::InvalidFirmwareFile(_)));
    }

    #[test]
    fn test_serial_board_requires_path() {
        let installer = FirmwareInstaller::new();
        let firmware = write_apj_firmware(9);
        let board = FlightController::new("Pixhawk1", "3DR", Platform::Pixhawk1);
        let mut uploader = RecordingUploader::default();
        let err = installer
            .install_firmware(firmware.path(), &board, None, &mut uploader)
            .unwrap_err();
        assert!(matches!(err, FirmwareError::MissingBoardPath));
        assert!(uploader.uploads.is_empty());
    }

    #[test]
    fn test_serial_install_delegates_to_uploader() {
        let installer = FirmwareInstaller::new();
        let firmware = write_apj_firmware(9);
        let board = FlightController::with_path(
            "Pixhawk1",
            "3DR",
            Platform::Pixhawk1,
            "/dev/ttyACM0",
        );
        let mut uploader = RecordingUploader::default();
        installer
            .install_firmware(firmware.path(), &board, None, &mut uploader)
            .unwrap();
        assert_eq!(
            uploader.uploads,
            vec![(firmware.path().to_path_buf(), PathBuf::from("/dev/ttyACM0"))]
        );
    }

    #[test]
    fn test_validation_failure_aborts_install() {
        let installer = FirmwareInstaller::new();
        let firmware = write_apj_firmware(50); // wrong id for Pixhawk1
        let board = FlightController::with_path(
            "Pixhawk1",
            "3DR",
            Platform::Pixhawk1,
            "/dev/ttyACM0",
        );
        let mut uploader = RecordingUploader::default();
        let err = installer
            .install_firmware(firmware.path(), &board, None, &mut uploader)
            .unwrap_err();
        assert!(matches!(err, FirmwareError::InvalidFirmwareFile(_)));
        assert!(uploader.uploads.is_empty());
    }

    #[test]
    fn test_elf_install_requires_destination() {
        let dir = TempDir::new().unwrap();
        let firmware = write_sitl_firmware(&dir);
        let installer = FirmwareInstaller::new();
        let board = FlightController::new("SITL", "ArduPilot Team", Platform::Sitl);
        let mut uploader = RecordingUploader::default();
        let err = installer
            .install_firmware(&firmware, &board, None, &mut uploader)
            .unwrap_err();
        assert!(matches!(err, FirmwareError::InstallFail(_)));
    }

    #[test]
    fn test_elf_install_copies_and_marks_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let firmware = write_sitl_firmware(&dir);
        let dest = dir.path().join("installed");
        let installer = FirmwareInstaller::new();
        let board = FlightController::new("SITL", "ArduPilot Team", Platform::Sitl);
        let mut uploader = RecordingUploader::default();

        installer
            .install_firmware(&firmware, &board, Some(&dest), &mut uploader)
            .unwrap();

        // Source still in place, destination a copy, execute bits granted
        assert!(firmware.is_file());
        assert_eq!(fs::read(&firmware).unwrap(), fs::read(&dest).unwrap());
        let mode = fs::metadata(&firmware).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
        assert!(uploader.uploads.is_empty());
    }

    #[test]
    fn test_downloader_seam_resolves_artifact() {
        let dir = TempDir::new().unwrap();
        let staged = write_sitl_firmware(&dir);
        let mut downloader = StubDownloader(staged.clone());
        let board = FlightController::new("SITL", "ArduPilot Team", Platform::Sitl);

        let resolved = downloader.download(Vehicle::Sub, &board).unwrap();
        assert_eq!(resolved, staged);
        assert!(resolved.is_file());
    }
}
