//! HapticDriver trait - the platform primitive boundary
//!
//! Defines the abstract interface for platform haptic drivers.

use crate::{HapticError, ImpactStyle, NotificationType};

/// Platform haptic driver trait
///
/// All driver implementations must implement this trait. The dispatcher is
/// the only caller and discards every error, so implementations should not
/// retry internally.
#[trait_variant::make(HapticDriver: Send)]
pub trait LocalHapticDriver {
    /// Driver name (used for logging/metrics)
    fn name(&self) -> &str;

    /// Trigger a single impact pulse with the given intensity
    ///
    /// # Errors
    /// Returns an error when the platform cannot vibrate (unsupported
    /// hardware, denied permission, transient driver failure)
    async fn trigger_impact(&self, style: ImpactStyle) -> Result<(), HapticError>;

    /// Trigger a notification vibration pattern for the given outcome class
    async fn trigger_notification(&self, kind: NotificationType) -> Result<(), HapticError>;

    /// Trigger a minimal selection cue (pickers, sliders)
    async fn trigger_selection(&self) -> Result<(), HapticError>;
}
