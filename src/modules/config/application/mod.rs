pub mod config_store;
pub mod key_path;
pub mod ports;

pub use config_store::ConfigStore;
pub use key_path::{KeyPath, KeyPathError};
