//! Firmware validation dispatch
//!
//! The target platform declares the firmware container format, which
//! selects the validation path: descriptor comparison for APJ, or
//! architecture plus embedded-identity checks for native ELF builds.
//! Format is never sniffed from file content.

use std::fs;
use std::path::Path;

use crate::error::{FirmwareError, Result};
use crate::firmware::{apj, decoder, elf};
use crate::identity::table::decoder_target;
use crate::typedefs::{FirmwareFormat, FlightController, Platform};

/// Validate a native binary firmware image against the target platform
///
/// Checks the declared instruction set against the host first, then
/// cross-checks the embedded version descriptor against the identity
/// table. Either the decoded board type or sub type may satisfy the
/// cross-check.
fn validate_elf(firmware_path: &Path, platform: Platform) -> Result<()> {
    let data = fs::read(firmware_path).map_err(|err| {
        FirmwareError::InvalidFirmwareFile(format!("could not read firmware image: {}", err))
    })?;

    let firm_arch = elf::machine_arch(&data)?;
    if !elf::compatible_with_host(firm_arch) {
        return Err(FirmwareError::InvalidFirmwareFile(format!(
            "firmware architecture ({}) does not match system architecture ({})",
            firm_arch,
            std::env::consts::ARCH
        )));
    }

    let version = decoder::decode(&data).map_err(|err| {
        FirmwareError::InvalidFirmwareFile(format!(
            "given firmware is not a supported version: {}",
            err
        ))
    })?;
    let target = decoder_target(platform);
    log::debug!(
        "decoded board type {}, sub type {}; expecting {}",
        version.board_type,
        version.board_subtype,
        target
    );
    if !target.matches(&version) {
        return Err(FirmwareError::InvalidFirmwareFile(format!(
            "firmware identity (board type {}, sub type {}) does not match the expected {} for {}",
            version.board_type, version.board_subtype, target, platform
        )));
    }
    Ok(())
}

/// Check that the given firmware is valid for the given board
///
/// Validation failures abort any install attempt and are never
/// downgraded; the error carries the expected and found identity.
pub fn validate_firmware(firmware_path: &Path, board: &FlightController) -> Result<()> {
    let format = board.platform.firmware_format();
    log::debug!("validating {} firmware for board {}", format, board);
    match format {
        FirmwareFormat::Apj => apj::validate_apj(firmware_path, board.platform),
        FirmwareFormat::Elf => validate_elf(firmware_path, board.platform),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::firmware::decoder::{make_descriptor, BoardSubType, BoardType};
    use crate::firmware::elf::{make_elf_header, ElfArch};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn host_elf_arch() -> ElfArch {
        match std::env::consts::ARCH {
            "x86" => ElfArch::X86,
            "x86_64" => ElfArch::X86_64,
            "arm" => ElfArch::Arm,
            "aarch64" => ElfArch::AArch64,
            other => panic!("tests cannot run on unrecognized host arch {}", other),
        }
    }

    fn write_elf_firmware(arch: ElfArch, board_type: u8, board_subtype: u16) -> NamedTempFile {
        let mut image = make_elf_header(arch);
        image.extend_from_slice(&[0u8; 0x100]);
        image.extend_from_slice(&make_descriptor(board_type, board_subtype));
        image.extend_from_slice(&[0u8; 0x40]);

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&image).unwrap();
        file
    }

    #[test]
    fn test_sitl_firmware_for_host_arch_passes() {
        let file = write_elf_firmware(host_elf_arch(), BoardType::Sitl as u8, 0);
        let board = FlightController::new("SITL", "ArduPilot Team", Platform::Sitl);
        validate_firmware(file.path(), &board).unwrap();
    }

    #[test]
    fn test_navigator_firmware_matches_on_sub_type() {
        let file = write_elf_firmware(
            host_elf_arch(),
            BoardType::Linux as u8,
            BoardSubType::LinuxNavigator as u16,
        );
        let board = FlightController::new("Navigator", "Blue Robotics", Platform::Navigator);
        validate_firmware(file.path(), &board).unwrap();
    }

    #[test]
    fn test_foreign_architecture_is_rejected() {
        // No host runs firmware for an unknown machine code
        let file = write_elf_firmware(ElfArch::Other(0xBEEF), BoardType::Sitl as u8, 0);
        let board = FlightController::new("SITL", "ArduPilot Team", Platform::Sitl);
        let err = validate_firmware(file.path(), &board).unwrap_err();
        assert!(matches!(err, FirmwareError::InvalidFirmwareFile(_)));
    }

    #[test]
    fn test_wrong_board_identity_is_rejected() {
        // SITL firmware presented as a Navigator build
        let file = write_elf_firmware(host_elf_arch(), BoardType::Sitl as u8, 0);
        let board = FlightController::new("Navigator", "Blue Robotics", Platform::Navigator);
        let err = validate_firmware(file.path(), &board).unwrap_err();
        match err {
            FirmwareError::InvalidFirmwareFile(msg) => {
                assert!(msg.contains("does not match"), "unexpected message: {}", msg);
            }
            other => panic!("expected InvalidFirmwareFile, got {:?}", other),
        }
    }

    #[test]
    fn test_image_without_descriptor_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        let mut image = make_elf_header(host_elf_arch());
        image.extend_from_slice(&[0u8; 0x100]);
        file.write_all(&image).unwrap();

        let board = FlightController::new("SITL", "ArduPilot Team", Platform::Sitl);
        assert!(matches!(
            validate_firmware(file.path(), &board),
            Err(FirmwareError::InvalidFirmwareFile(_))
        ));
    }

    #[test]
    fn test_apj_end_to_end_for_pixhawk1() {
        let mut good = NamedTempFile::new().unwrap();
        good.write_all(br#"{"board_id": 9}"#).unwrap();
        let mut bad = NamedTempFile::new().unwrap();
        bad.write_all(br#"{"board_id": 50}"#).unwrap();

        let board = FlightController::new("Pixhawk1", "3DR", Platform::Pixhawk1);
        validate_firmware(good.path(), &board).unwrap();

        let err = validate_firmware(bad.path(), &board).unwrap_err();
        match err {
            FirmwareError::InvalidFirmwareFile(msg) => {
                assert!(msg.contains('9') && msg.contains("50"), "message: {}", msg);
            }
            other => panic!("expected InvalidFirmwareFile, got {:?}", other),
        }
    }
}
