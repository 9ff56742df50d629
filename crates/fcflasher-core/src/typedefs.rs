//! Board and platform type definitions
//!
//! `Platform` is the logical identity used throughout this crate for a
//! flight controller board or a simulated target. Every platform resolves
//! to exactly one connection kind and one expected firmware format.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported board models and simulated targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Platform {
    Pixhawk1,
    Pixhawk4,
    Pixhawk6X,
    Pixhawk6C,
    CubeOrange,
    /// Serial board recognized only by a generic vendor rule or a
    /// manifest-derived board name
    GenericSerial,
    Navigator,
    Navigator64,
    Argonot,
    /// Software-in-the-loop simulator
    Sitl,
}

/// Connection kind of a platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformType {
    /// Board attached over a USB serial link
    Serial,
    /// Board computer running the firmware locally (e.g. inside a container)
    Linux,
    /// Simulated target, no hardware attached
    Sitl,
}

/// Firmware container format expected by a platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FirmwareFormat {
    /// Textual descriptor with an embedded board id field
    Apj,
    /// Native executable image
    Elf,
}

impl Platform {
    /// All known platforms, in display order
    pub const ALL: &'static [Platform] = &[
        Platform::Pixhawk1,
        Platform::Pixhawk4,
        Platform::Pixhawk6X,
        Platform::Pixhawk6C,
        Platform::CubeOrange,
        Platform::GenericSerial,
        Platform::Navigator,
        Platform::Navigator64,
        Platform::Argonot,
        Platform::Sitl,
    ];

    /// Connection kind of this platform
    pub const fn platform_type(self) -> PlatformType {
        match self {
            Platform::Pixhawk1
            | Platform::Pixhawk4
            | Platform::Pixhawk6X
            | Platform::Pixhawk6C
            | Platform::CubeOrange
            | Platform::GenericSerial => PlatformType::Serial,
            Platform::Navigator | Platform::Navigator64 | Platform::Argonot => PlatformType::Linux,
            Platform::Sitl => PlatformType::Sitl,
        }
    }

    /// Firmware format this platform installs
    pub const fn firmware_format(self) -> FirmwareFormat {
        match self.platform_type() {
            PlatformType::Serial => FirmwareFormat::Apj,
            PlatformType::Linux | PlatformType::Sitl => FirmwareFormat::Elf,
        }
    }

    /// Canonical name, as used in manifests and on the CLI
    pub const fn name(self) -> &'static str {
        match self {
            Platform::Pixhawk1 => "Pixhawk1",
            Platform::Pixhawk4 => "Pixhawk4",
            Platform::Pixhawk6X => "Pixhawk6X",
            Platform::Pixhawk6C => "Pixhawk6C",
            Platform::CubeOrange => "CubeOrange",
            Platform::GenericSerial => "GenericSerial",
            Platform::Navigator => "navigator",
            Platform::Navigator64 => "navigator64",
            Platform::Argonot => "argonot",
            Platform::Sitl => "SITL",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown platform: {}", s))
    }
}

impl fmt::Display for PlatformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformType::Serial => f.write_str("serial"),
            PlatformType::Linux => f.write_str("linux"),
            PlatformType::Sitl => f.write_str("sitl"),
        }
    }
}

impl fmt::Display for FirmwareFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FirmwareFormat::Apj => f.write_str("APJ"),
            FirmwareFormat::Elf => f.write_str("ELF"),
        }
    }
}

/// Vehicle type a firmware build targets
///
/// Only used to parameterize the download collaborator; the install path
/// itself is vehicle-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Vehicle {
    Sub,
    Rover,
    Plane,
    Copter,
}

/// A resolved flight controller board
///
/// Immutable once constructed. `path` is only populated for serial
/// devices and names the device node used for flashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightController {
    /// Display name
    pub name: String,
    /// USB manufacturer string, or a static vendor name
    pub manufacturer: String,
    /// Logical platform identity
    pub platform: Platform,
    /// Serial device node, when attached over USB
    pub path: Option<PathBuf>,
}

impl FlightController {
    /// Describe a board that is not bound to a device node
    pub fn new(name: impl Into<String>, manufacturer: impl Into<String>, platform: Platform) -> Self {
        Self {
            name: name.into(),
            manufacturer: manufacturer.into(),
            platform,
            path: None,
        }
    }

    /// Describe a serial board detected at a device node
    pub fn with_path(
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        platform: Platform,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            manufacturer: manufacturer.into(),
            platform,
            path: Some(path.into()),
        }
    }

    /// Connection kind of this board
    pub fn platform_type(&self) -> PlatformType {
        self.platform.platform_type()
    }
}

impl fmt::Display for FlightController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.platform)
    }
}
