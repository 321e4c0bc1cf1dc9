// Adapters layer: concrete implementations of the domain ports.

pub mod ddragon;

pub use ddragon::DDragonClient;
