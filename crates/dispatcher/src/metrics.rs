//! Trigger metrics for observability

use std::sync::atomic::{AtomicU64, Ordering};

use metrics::counter;

/// The three platform primitives, used as metric/log labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Impact,
    Notification,
    Selection,
}

impl Primitive {
    /// Stable label string
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Impact => "impact",
            Self::Notification => "notification",
            Self::Selection => "selection",
        }
    }
}

/// Metrics for a single haptic service
#[derive(Debug, Default)]
pub struct TriggerMetrics {
    /// Total impact primitive calls issued
    impact_count: AtomicU64,
    /// Total notification primitive calls issued
    notification_count: AtomicU64,
    /// Total selection primitive calls issued
    selection_count: AtomicU64,
    /// Total driver failures suppressed
    suppressed_count: AtomicU64,
}

impl TriggerMetrics {
    /// Create new metrics instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total impact calls
    pub fn impact_count(&self) -> u64 {
        self.impact_count.load(Ordering::Relaxed)
    }

    /// Get total notification calls
    pub fn notification_count(&self) -> u64 {
        self.notification_count.load(Ordering::Relaxed)
    }

    /// Get total selection calls
    pub fn selection_count(&self) -> u64 {
        self.selection_count.load(Ordering::Relaxed)
    }

    /// Get suppressed failure count
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed_count.load(Ordering::Relaxed)
    }

    /// Increment the issued-call counter for a primitive
    pub fn inc_triggered(&self, primitive: Primitive) {
        let counter = match primitive {
            Primitive::Impact => &self.impact_count,
            Primitive::Notification => &self.notification_count,
            Primitive::Selection => &self.selection_count,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the suppressed-failure counter
    pub fn inc_suppressed(&self) {
        self.suppressed_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of all metrics
    pub fn snapshot(&self) -> TriggerSnapshot {
        TriggerSnapshot {
            impact_count: self.impact_count(),
            notification_count: self.notification_count(),
            selection_count: self.selection_count(),
            suppressed_count: self.suppressed_count(),
        }
    }
}

/// Snapshot of trigger metrics (for reporting)
#[derive(Debug, Clone, Copy)]
pub struct TriggerSnapshot {
    pub impact_count: u64,
    pub notification_count: u64,
    pub selection_count: u64,
    pub suppressed_count: u64,
}

/// Record an issued primitive call on the `metrics` facade
///
/// No-op unless the host application installed a recorder.
pub fn record_feedback_triggered(primitive: Primitive, driver: &str) {
    counter!(
        "haptic_triggered_total",
        "primitive" => primitive.as_str(),
        "driver" => driver.to_string()
    )
    .increment(1);
}

/// Record a suppressed driver failure on the `metrics` facade
pub fn record_feedback_suppressed(primitive: Primitive, driver: &str) {
    counter!(
        "haptic_suppressed_total",
        "primitive" => primitive.as_str(),
        "driver" => driver.to_string()
    )
    .increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_counts() {
        let metrics = TriggerMetrics::new();
        metrics.inc_triggered(Primitive::Impact);
        metrics.inc_triggered(Primitive::Impact);
        metrics.inc_triggered(Primitive::Selection);
        metrics.inc_suppressed();

        let snap = metrics.snapshot();
        assert_eq!(snap.impact_count, 2);
        assert_eq!(snap.notification_count, 0);
        assert_eq!(snap.selection_count, 1);
        assert_eq!(snap.suppressed_count, 1);
    }

    #[test]
    fn test_primitive_labels() {
        assert_eq!(Primitive::Impact.as_str(), "impact");
        assert_eq!(Primitive::Notification.as_str(), "notification");
        assert_eq!(Primitive::Selection.as_str(), "selection");
    }
}
