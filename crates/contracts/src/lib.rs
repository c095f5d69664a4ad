//! # Contracts
//!
//! Frozen interface contracts (ICD), defining the feedback vocabulary and
//! the driver trait. All business crates can only depend on this crate,
//! reverse dependencies are prohibited.
//!
//! ## Feedback Model
//! - Three primitives: impact (with intensity), notification (with outcome
//!   class), selection (no argument)
//! - Named patterns resolve to exactly one primitive call
//! - Driver failures carry no payload beyond "did not succeed"

pub mod defaults;
mod driver;
mod error;
mod feedback;

pub use defaults::*;
pub use driver::HapticDriver;
pub use error::*;
pub use feedback::*;
