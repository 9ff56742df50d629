//! CLI argument parsing

use clap::{Parser, Subcommand};
use fcflasher_core::Platform;
use std::path::PathBuf;

/// Parse a platform name, case-insensitively
fn parse_platform(s: &str) -> Result<Platform, String> {
    s.parse()
}

#[derive(Parser)]
#[command(name = "fcflasher")]
#[command(author, version, about = "Flight controller firmware manager", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the board identifier cache file
    /// Defaults to /var/lib/fcflasher/boards.json
    #[arg(long, global = true)]
    pub cache: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List attached USB serial devices and classify each one
    Detect,

    /// Classify a device from its USB descriptor strings
    Classify {
        /// USB product string
        #[arg(short, long, default_value = "")]
        product: String,

        /// USB manufacturer string
        #[arg(short, long, default_value = "")]
        manufacturer: String,
    },

    /// Validate a firmware file against a target board
    Validate {
        /// Firmware file path
        #[arg(short, long)]
        firmware: PathBuf,

        /// Target platform (e.g. Pixhawk1, navigator, SITL)
        #[arg(short, long, value_parser = parse_platform)]
        board: Platform,
    },

    /// Validate a firmware file and install it
    Install {
        /// Firmware file path
        #[arg(short, long)]
        firmware: PathBuf,

        /// Target platform (e.g. Pixhawk1, navigator, SITL)
        #[arg(short, long, value_parser = parse_platform)]
        board: Platform,

        /// Serial device node of the board (required for serial boards)
        #[arg(long)]
        port: Option<PathBuf>,

        /// Destination path (required for filesystem installs)
        #[arg(long)]
        dest: Option<PathBuf>,

        /// External flashing tool used for serial installs
        #[arg(long, default_value = "ardupilot_fw_uploader")]
        uploader: PathBuf,
    },

    /// Refresh the board manifest cache and print a summary
    Manifest {
        /// Re-derive the cache even if it is still fresh
        #[arg(long)]
        force: bool,
    },

    /// List supported platforms
    ListBoards,
}
