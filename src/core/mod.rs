pub mod controller;
pub mod detail;
pub mod loader;
pub mod pipeline;
pub mod state;
pub mod version;
pub mod view;

pub use controller::{Command, Controller, Dispatch, NavTarget};
pub use pipeline::{ClassFilter, SortKey};
pub use state::AppState;
pub use view::{Section, View};
