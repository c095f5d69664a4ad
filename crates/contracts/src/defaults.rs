//! Default impact styles for common interactions
//!
//! These values are part of the contract and must not drift.

use crate::ImpactStyle;

/// Impact used when the caller gives no explicit style.
pub const DEFAULT_IMPACT: ImpactStyle = ImpactStyle::Light;

/// Impact for button presses.
pub const BUTTON_IMPACT: ImpactStyle = ImpactStyle::Light;

/// Impact for destructive actions (delete, remove).
pub const DELETE_IMPACT: ImpactStyle = ImpactStyle::Medium;

/// Impact for error emphasis.
pub const ERROR_IMPACT: ImpactStyle = ImpactStyle::Heavy;

/// Default impact style for common patterns.
pub fn default_impact() -> ImpactStyle {
    ImpactStyle::Light
}
