//! Collaborators around the core: configuration loading and rendering.

pub mod loader;
pub mod render;

pub use loader::{load_config, parse_config, LoadedConfig};
pub use render::{CellColor, DisplayConfig, TerminalRenderer, TextLog};
