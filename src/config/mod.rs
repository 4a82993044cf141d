/// Display configuration loading from config.toml
pub mod display;

pub use display::{
    Config, DisplayConfig, config_path, load_config, load_config_or_default, load_default_config,
};
