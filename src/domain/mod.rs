mod config;
mod grid;
mod patterns;
pub mod rules;

pub use config::{ConfigError, FieldConfig};
pub use grid::GridField;
pub use patterns::{Pattern, PatternError, presets};
