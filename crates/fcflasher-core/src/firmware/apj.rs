//! Structured descriptor (APJ) firmware validation
//!
//! APJ firmware is a textual descriptor carrying the target board id
//! alongside the image payload. Validation compares that declared id
//! against the identity table entry for the target platform.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{FirmwareError, Result};
use crate::identity::table::board_id_of;
use crate::typedefs::Platform;

/// Declared board id of a descriptor, if it carries a usable one
///
/// The field is numeric in current descriptors but historically appeared
/// as a string; both spellings are accepted.
fn declared_board_id(descriptor: &Value) -> Option<u32> {
    let field = descriptor.get("board_id")?;
    match field {
        Value::Number(n) => n.as_u64().and_then(|id| u32::try_from(id).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Validate an APJ firmware file against the target platform
///
/// Parse failures are always reported as an invalid firmware file; the
/// caller never sees a raw decode error. A platform without a board id
/// assignment is a distinct, unsupported condition.
pub fn validate_apj(firmware_path: &Path, platform: Platform) -> Result<()> {
    log::debug!("validating APJ firmware for platform {}", platform);

    let expected_board_id = board_id_of(platform).ok_or_else(|| {
        FirmwareError::UnsupportedPlatform(format!(
            "firmware validation is not implemented for {} yet",
            platform
        ))
    })?;

    let data = fs::read_to_string(firmware_path).map_err(|err| {
        FirmwareError::InvalidFirmwareFile(format!(
            "could not load firmware file for validation: {}",
            err
        ))
    })?;
    let descriptor: Value = serde_json::from_str(&data).map_err(|err| {
        FirmwareError::InvalidFirmwareFile(format!(
            "could not load firmware file for validation: {}",
            err
        ))
    })?;

    let found_board_id = declared_board_id(&descriptor).ok_or_else(|| {
        FirmwareError::InvalidFirmwareFile(
            "could not find a board_id entry in the firmware file".into(),
        )
    })?;

    log::debug!(
        "descriptor board_id: {}, expected: {}",
        found_board_id,
        expected_board_id
    );
    if found_board_id != expected_board_id {
        return Err(FirmwareError::InvalidFirmwareFile(format!(
            "expected board_id {}, found {}",
            expected_board_id, found_board_id
        )));
    }
    Ok(())
}
