// Application layer: wires the controller to user input, rendering and storage.

pub mod commands;
pub mod session;
pub mod snapshot;

pub use commands::{parse_input, Input};
pub use session::Session;
pub use snapshot::{write_snapshot, SnapshotReport};
