//! Embedded firmware-version descriptor decoding
//!
//! Autopilot builds embed a version descriptor in the binary image. The
//! descriptor can sit anywhere in the file, so it is located by scanning
//! for its magic header and then decoded field by field. The board type
//! and sub type recovered here are cross-checked against the identity
//! table during native-binary validation.

use std::fs;
use std::path::Path;

use thiserror::Error;

/// Magic header of the embedded version descriptor ("apfwver" + 0xfb),
/// stored little-endian in the image
const FWVERSION_MAGIC: u64 = 0x61706677766572fb;

/// Size of the fixed part of the descriptor
const FWVERSION_SIZE: usize = 20;

/// Errors raised while locating or decoding the version descriptor
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No descriptor magic found in the image
    #[error("no firmware version descriptor found in image")]
    DescriptorNotFound,
    /// Descriptor found but truncated
    #[error("firmware version descriptor is truncated")]
    Truncated,
    /// I/O error reading the image
    #[error("could not read firmware image: {0}")]
    Io(#[from] std::io::Error),
}

/// Board type codes carried by the version descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BoardType {
    /// Software-in-the-loop simulator build
    Sitl = 3,
    /// Linux board computer build
    Linux = 7,
    /// ChibiOS microcontroller build
    ChibiOs = 10,
    /// No board type recorded
    Empty = 99,
}

/// Board sub type codes for Linux builds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
#[allow(missing_docs)]
pub enum BoardSubType {
    LinuxNone = 1000,
    LinuxNavigator = 1027,
}

/// Expected decoder identity for a platform: either a board type or a
/// board sub type may satisfy the cross-check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderTarget {
    /// Match on the decoded board type
    Board(BoardType),
    /// Match on the decoded board sub type
    SubBoard(BoardSubType),
}

impl DecoderTarget {
    /// Check whether a decoded version descriptor satisfies this target
    pub fn matches(&self, version: &FwVersion) -> bool {
        match self {
            DecoderTarget::Board(board) => *board as u8 == version.board_type,
            DecoderTarget::SubBoard(sub) => *sub as u16 == version.board_subtype,
        }
    }
}

impl std::fmt::Display for DecoderTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecoderTarget::Board(board) => write!(f, "board type {:?}", board),
            DecoderTarget::SubBoard(sub) => write!(f, "board sub type {:?}", sub),
        }
    }
}

/// Decoded firmware version descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FwVersion {
    /// Descriptor layout revision
    pub header_version: u16,
    /// Vehicle type code of the build
    pub vehicle_type: u8,
    /// Board type code
    pub board_type: u8,
    /// Board sub type code
    pub board_subtype: u16,
    /// Firmware semantic version, major part
    pub major: u8,
    /// Firmware semantic version, minor part
    pub minor: u8,
    /// Firmware semantic version, patch part
    pub patch: u8,
}

/// Search for the descriptor magic in the image
fn find_descriptor(data: &[u8]) -> Option<usize> {
    let magic = FWVERSION_MAGIC.to_le_bytes();
    if data.len() < magic.len() {
        return None;
    }
    (0..=data.len() - magic.len()).find(|&offset| data[offset..offset + 8] == magic)
}

/// Decode the version descriptor from a raw image
pub fn decode(data: &[u8]) -> Result<FwVersion, DecodeError> {
    let offset = find_descriptor(data).ok_or(DecodeError::DescriptorNotFound)?;
    let desc = &data[offset..];
    if desc.len() < FWVERSION_SIZE {
        return Err(DecodeError::Truncated);
    }

    Ok(FwVersion {
        header_version: u16::from_le_bytes([desc[8], desc[9]]),
        // desc[10] is the pointer size, desc[11] reserved
        vehicle_type: desc[12],
        board_type: desc[13],
        board_subtype: u16::from_le_bytes([desc[14], desc[15]]),
        major: desc[16],
        minor: desc[17],
        patch: desc[18],
    })
}

/// Decode the version descriptor from a firmware file
pub fn decode_file(path: &Path) -> Result<FwVersion, DecodeError> {
    let data = fs::read(path)?;
    decode(&data)
}

/// Build a descriptor blob for test images
#[cfg(test)]
pub(crate) fn make_descriptor(board_type: u8, board_subtype: u16) -> [u8; FWVERSION_SIZE] {
    let mut desc = [0u8; FWVERSION_SIZE];
    desc[0..8].copy_from_slice(&FWVERSION_MAGIC.to_le_bytes());
    desc[8..10].copy_from_slice(&2u16.to_le_bytes()); // header_version
    desc[10] = 4; // pointer size
    desc[12] = 2; // vehicle type
    desc[13] = board_type;
    desc[14..16].copy_from_slice(&board_subtype.to_le_bytes());
    desc[16] = 4; // major
    desc[17] = 1; // minor
    desc[18] = 0; // patch
    desc
}
