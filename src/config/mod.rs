#[cfg(feature = "cli")]
pub mod cli;
pub mod requirements;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::{OutputConfig, ScreenerConfig};
