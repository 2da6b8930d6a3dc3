use std::{io::{self, Write}, thread, time::Duration};

use tracing::{debug, info};

use super::Generation;
use crate::rendering::ConsolePrinter;

/// Pacing of the driver loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    pub tick_interval: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(100),
        }
    }
}

impl DriverConfig {
    /// Set the pause between generations (builder pattern)
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Interval in whole milliseconds, saturating at `u64::MAX`
    pub fn tick_millis(&self) -> u64 {
        u64::try_from(self.tick_interval.as_millis()).unwrap_or(u64::MAX)
    }
}

/// Driver repeatedly prints the current generation, advances, and waits.
pub struct Driver<W: Write> {
    generation: Generation,
    printer: ConsolePrinter<W>,
    config: DriverConfig,
}

impl<W: Write> Driver<W> {
    pub fn new(generation: Generation, printer: ConsolePrinter<W>, config: DriverConfig) -> Self {
        Self { generation, printer, config }
    }

    pub fn generation(&self) -> &Generation {
        &self.generation
    }

    /// Run until the process is interrupted; returns only if output fails.
    pub fn run(&mut self) -> io::Result<()> {
        self.log_start();
        loop {
            self.tick()?;
        }
    }

    /// Run a fixed number of ticks
    pub fn run_for(&mut self, ticks: u64) -> io::Result<()> {
        self.log_start();
        for _ in 0..ticks {
            self.tick()?;
        }
        Ok(())
    }

    /// Render, advance, then sleep for the configured interval
    pub fn tick(&mut self) -> io::Result<()> {
        let current = self.generation.current();
        debug!(
            generation = self.generation.generation(),
            population = current.population(),
            "printing generation"
        );
        self.printer.print(current)?;

        self.generation.advance();
        if !self.config.tick_interval.is_zero() {
            thread::sleep(self.config.tick_interval);
        }
        Ok(())
    }

    fn log_start(&self) {
        let (width, height) = self.generation.current().dimensions();
        info!(
            width,
            height,
            tick_ms = self.config.tick_millis(),
            "starting simulation"
        );
    }

    /// Consume the driver, returning the simulation and the output sink
    pub fn into_parts(self) -> (Generation, W) {
        (self.generation, self.printer.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldConfig, GridField, presets};

    fn driver_with_glider() -> Driver<Vec<u8>> {
        let config = FieldConfig::new(6, 6).unwrap().with_symbols('#', '.');
        let mut seed = GridField::new(config).unwrap();
        presets::glider().place_on(&mut seed, 0, 0);

        Driver::new(
            Generation::new(seed),
            ConsolePrinter::new(Vec::new()),
            DriverConfig::default().with_tick_interval(Duration::ZERO),
        )
    }

    #[test]
    fn test_default_interval() {
        assert_eq!(DriverConfig::default().tick_interval, Duration::from_millis(100));
        assert_eq!(DriverConfig::default().tick_millis(), 100);
    }

    #[test]
    fn test_tick_millis_saturates() {
        let config = DriverConfig::default().with_tick_interval(Duration::MAX);
        assert_eq!(config.tick_millis(), u64::MAX);
    }

    #[test]
    fn test_run_for_prints_each_generation_before_advancing() {
        let mut driver = driver_with_glider();
        driver.run_for(3).unwrap();

        let (generation, out) = driver.into_parts();
        let text = String::from_utf8(out).unwrap();
        let frames: Vec<_> = text.split_terminator("------\n").collect();

        assert_eq!(generation.generation(), 3);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], ".#....\n..#...\n###...\n......\n......\n......\n");
    }

    #[test]
    fn test_zero_ticks_prints_nothing() {
        let mut driver = driver_with_glider();
        driver.run_for(0).unwrap();
        assert_eq!(driver.generation().generation(), 0);
        assert!(driver.into_parts().1.is_empty());
    }
}
