//! HapticService - stateless feedback façade

use std::sync::Arc;

use tracing::{debug, instrument};

use contracts::defaults::{BUTTON_IMPACT, DEFAULT_IMPACT, DELETE_IMPACT};
use contracts::{HapticDriver, HapticError, HapticPattern, ImpactStyle, NotificationType};

use crate::metrics::{
    record_feedback_suppressed, record_feedback_triggered, Primitive, TriggerMetrics,
    TriggerSnapshot,
};

/// Stateless haptic feedback service
///
/// The only component with externally observable side effects. Every
/// operation issues at most one driver call and completes normally whether
/// the driver succeeds or fails; haptic feedback is a UX enhancement, never
/// a correctness-relevant side effect.
///
/// No timeout is enforced around the driver call. If the platform hangs,
/// the awaiting caller hangs with it; callers that do not care about
/// completion can drop the future.
pub struct HapticService<D: HapticDriver> {
    driver: D,
    metrics: Arc<TriggerMetrics>,
}

impl<D: HapticDriver> HapticService<D> {
    /// Create a service over the given platform driver
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            metrics: Arc::new(TriggerMetrics::new()),
        }
    }

    /// Access the underlying driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get current trigger metrics
    pub fn metrics(&self) -> &Arc<TriggerMetrics> {
        &self.metrics
    }

    /// Get a metrics snapshot
    pub fn metrics_snapshot(&self) -> TriggerSnapshot {
        self.metrics.snapshot()
    }

    /// Trigger impact feedback with the given intensity
    #[instrument(name = "haptic_impact", skip(self), fields(driver = %self.driver.name(), style = %style))]
    pub async fn impact(&self, style: ImpactStyle) {
        let result = self.driver.trigger_impact(style).await;
        self.settle(Primitive::Impact, result);
    }

    /// Trigger impact feedback with the default intensity (Light)
    pub async fn impact_default(&self) {
        self.impact(DEFAULT_IMPACT).await;
    }

    /// Trigger notification feedback for the given outcome class
    #[instrument(name = "haptic_notification", skip(self), fields(driver = %self.driver.name(), kind = %kind))]
    pub async fn notification(&self, kind: NotificationType) {
        let result = self.driver.trigger_notification(kind).await;
        self.settle(Primitive::Notification, result);
    }

    /// Trigger selection feedback (pickers, sliders)
    #[instrument(name = "haptic_selection", skip(self), fields(driver = %self.driver.name()))]
    pub async fn selection(&self) {
        let result = self.driver.trigger_selection().await;
        self.settle(Primitive::Selection, result);
    }

    /// Resolve a named pattern to exactly one primitive call
    ///
    /// `Selection` resolves to the selection primitive; `Success`,
    /// `Warning` and `Error` resolve to a notification of the same name.
    pub async fn pattern(&self, pattern: HapticPattern) {
        match pattern.as_notification() {
            Some(kind) => self.notification(kind).await,
            None => self.selection().await,
        }
    }

    // ===== Convenience operations for common interactions =====

    /// Button press: light impact
    pub async fn button_press(&self) {
        self.impact(BUTTON_IMPACT).await;
    }

    /// Operation succeeded
    pub async fn success(&self) {
        self.pattern(HapticPattern::Success).await;
    }

    /// Operation failed
    pub async fn error(&self) {
        self.pattern(HapticPattern::Error).await;
    }

    /// Operation needs attention
    pub async fn warning(&self) {
        self.pattern(HapticPattern::Warning).await;
    }

    /// Destructive action: medium impact
    pub async fn delete(&self) {
        self.impact(DELETE_IMPACT).await;
    }

    /// Pull-to-refresh: light impact
    pub async fn refresh(&self) {
        self.impact(ImpactStyle::Light).await;
    }

    /// Discrete value change: selection cue
    pub async fn selection_change(&self) {
        self.pattern(HapticPattern::Selection).await;
    }

    /// Long press recognized: medium impact
    pub async fn long_press(&self) {
        self.impact(ImpactStyle::Medium).await;
    }

    /// Record the outcome of a driver call, suppressing any failure
    fn settle(&self, primitive: Primitive, result: Result<(), HapticError>) {
        self.metrics.inc_triggered(primitive);
        record_feedback_triggered(primitive, self.driver.name());

        if let Err(e) = result {
            self.metrics.inc_suppressed();
            record_feedback_suppressed(primitive, self.driver.name());
            debug!(
                driver = %self.driver.name(),
                primitive = primitive.as_str(),
                error = %e,
                "Haptic feedback suppressed"
            );
        }
    }
}
