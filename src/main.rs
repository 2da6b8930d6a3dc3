use std::io;

use anyhow::{Context, Result};
use tracing::Level;
use toroidal_life::{ConsolePrinter, Driver, DriverConfig, FieldConfig, Generation, GridField, presets};

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the generations
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .init();

    let mut field = GridField::new(FieldConfig::default()).context("invalid field configuration")?;
    presets::glider().place_from_center(&mut field);

    let mut driver = Driver::new(
        Generation::new(field),
        ConsolePrinter::new(io::stdout()),
        DriverConfig::default(),
    );
    driver.run().context("failed to print generation")
}
