//! Error types for firmware validation and installation

use thiserror::Error;

/// Errors raised while validating or installing firmware
///
/// Validation and identity failures are terminal for an install attempt
/// and are never downgraded. `UnsupportedPlatform` signals a missing
/// implementation rather than a bad artifact and is not retryable.
#[derive(Debug, Error)]
pub enum FirmwareError {
    /// No validation or install path is implemented for this platform
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// The artifact is malformed or does not match the target board
    #[error("invalid firmware file: {0}")]
    InvalidFirmwareFile(String),

    /// An install precondition was not satisfied by the caller
    #[error("firmware install failed: {0}")]
    InstallFail(String),

    /// A serial board descriptor is missing its device path
    #[error("board path not available")]
    MissingBoardPath,
}

/// Result type for firmware operations
pub type Result<T> = std::result::Result<T, FirmwareError>;
