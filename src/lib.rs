// Domain layer - Field state, wrap-around lookups and the life rule
pub mod domain;

// Application layer - Generation buffers and the driver loop
pub mod application;

// Infrastructure layer - Text output
pub mod rendering;

// Re-exports for convenience
pub use domain::{ConfigError, FieldConfig, GridField, Pattern, PatternError, presets};
pub use application::{Driver, DriverConfig, Generation};
pub use rendering::ConsolePrinter;
