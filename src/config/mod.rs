pub mod persistence;
pub mod settings;

pub use persistence::{default_config_path, load_config};
pub use settings::{BridgeConfig, WaitPolicy};
