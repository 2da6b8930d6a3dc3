use thiserror::Error;

/// Errors raised when a field configuration cannot describe a valid grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("field dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension { width: usize, height: usize },
    #[error("field of {width}x{height} cells is too large to address")]
    DimensionOverflow { width: usize, height: usize },
    #[error("alive and dead cells must use different symbols (both are {0:?})")]
    IndistinctSymbols(char),
}

/// Dimensions and text symbols of a field.
/// Replaces process-wide constants: every `GridField` carries its own copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    pub width: usize,
    pub height: usize,
    pub alive_symbol: char,
    pub dead_symbol: char,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 25,
            height: 25,
            alive_symbol: '#',
            dead_symbol: ' ',
        }
    }
}

impl FieldConfig {
    /// Create a validated configuration with the default symbols
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        let config = Self {
            width,
            height,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the render symbols (builder pattern)
    pub fn with_symbols(mut self, alive_symbol: char, dead_symbol: char) -> Self {
        self.alive_symbol = alive_symbol;
        self.dead_symbol = dead_symbol;
        self
    }

    /// Number of cells a field with this configuration holds,
    /// `None` when the product does not fit in `usize`
    pub const fn cell_count(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension { width, height });
        }
        // Coordinates are wrapped with isize arithmetic.
        let addressable = isize::try_from(width).is_ok()
            && isize::try_from(height).is_ok()
            && self.cell_count().is_some();
        if !addressable {
            return Err(ConfigError::DimensionOverflow { width, height });
        }
        if self.alive_symbol == self.dead_symbol {
            return Err(ConfigError::IndistinctSymbols(self.alive_symbol));
        }
        Ok(())
    }
}
