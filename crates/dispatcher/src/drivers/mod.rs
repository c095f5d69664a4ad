//! Driver implementations
//!
//! Contains LogDriver, NoopDriver, and MockDriver. The real platform driver
//! lives with the host application; these cover development and testing.

mod log;
mod mock;
mod noop;

pub use self::log::LogDriver;
pub use self::mock::{MockCall, MockConfig, MockDriver};
pub use self::noop::NoopDriver;
