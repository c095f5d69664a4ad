//! NoopDriver - platform without a vibration motor

use contracts::{HapticDriver, HapticError, ImpactStyle, NotificationType};

/// Driver for platforms without haptic hardware
///
/// Every call reports `Unsupported`, which the dispatcher suppresses, so
/// feedback calls become free no-ops. Useful as the wired driver on
/// targets where the capability probe came back negative.
#[derive(Debug, Default)]
pub struct NoopDriver;

impl NoopDriver {
    /// Create a new NoopDriver
    pub fn new() -> Self {
        Self
    }
}

impl HapticDriver for NoopDriver {
    fn name(&self) -> &str {
        "noop"
    }

    async fn trigger_impact(&self, _style: ImpactStyle) -> Result<(), HapticError> {
        Err(HapticError::Unsupported)
    }

    async fn trigger_notification(&self, _kind: NotificationType) -> Result<(), HapticError> {
        Err(HapticError::Unsupported)
    }

    async fn trigger_selection(&self) -> Result<(), HapticError> {
        Err(HapticError::Unsupported)
    }
}
