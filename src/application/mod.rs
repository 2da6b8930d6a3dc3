mod driver;
mod generation;

pub use driver::{Driver, DriverConfig};
pub use generation::Generation;
