//! Informational listings

use fcflasher_core::identity::board_id_of;
use fcflasher_core::Platform;

/// Print the supported platforms with their connection kind, firmware
/// format, and expected board id
pub fn list_boards() {
    println!(
        "{:<16} {:<8} {:<8} {}",
        "PLATFORM", "TYPE", "FORMAT", "BOARD ID"
    );
    for platform in Platform::ALL {
        let board_id = match board_id_of(*platform) {
            Some(id) => id.to_string(),
            None => "-".to_string(),
        };
        println!(
            "{:<16} {:<8} {:<8} {}",
            platform.name(),
            platform.platform_type().to_string(),
            platform.firmware_format().to_string(),
            board_id
        );
    }
}
