//! Board identity: the static identity table and the identifier registry

pub mod registry;
pub mod table;

pub use registry::{BoardIdentifier, IdentifierRegistry, SerialAttr};
pub use table::{board_id_of, board_id_of_name, decoder_target};
