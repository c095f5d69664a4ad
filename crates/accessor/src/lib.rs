//! # Accessor
//!
//! 消费端访问句柄。
//!
//! 负责：
//! - 将 `HapticService` 的全部操作包装为可廉价克隆的句柄
//! - 克隆共享同一个底层服务，跨 UI 重渲染保持稳定身份
//!
//! Every method is a pure forward; the handle holds no state of its own.
//!
//! ## Usage
//!
//! ```
//! use accessor::create_haptics;
//! use dispatcher::LogDriver;
//!
//! # async fn demo() {
//! let haptics = create_haptics(LogDriver::default());
//!
//! haptics.button_press().await;
//! haptics.success().await;
//! # }
//! ```

use std::sync::Arc;

use contracts::{HapticDriver, HapticPattern, ImpactStyle, NotificationType};
use dispatcher::{HapticService, TriggerSnapshot};

/// Cheaply clonable handle over a shared haptic service
///
/// Clones observe the same service and the same metrics; handing a clone to
/// each view keeps one dispatcher behind all of them. Re-invocation is
/// always safe and order-independent across members and across clones.
pub struct Haptics<D: HapticDriver> {
    service: Arc<HapticService<D>>,
}

// Derived Clone would demand D: Clone; the handle only copies the Arc.
impl<D: HapticDriver> Clone for Haptics<D> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<D: HapticDriver> Haptics<D> {
    /// Wrap an already-shared service
    pub fn new(service: Arc<HapticService<D>>) -> Self {
        Self { service }
    }

    /// Access the shared service directly
    pub fn service(&self) -> &HapticService<D> {
        &self.service
    }

    /// Get a metrics snapshot from the shared service
    pub fn metrics_snapshot(&self) -> TriggerSnapshot {
        self.service.metrics_snapshot()
    }

    // ===== Generic operations =====

    /// Trigger impact feedback with the given intensity
    pub async fn impact(&self, style: ImpactStyle) {
        self.service.impact(style).await;
    }

    /// Trigger impact feedback with the default intensity (Light)
    pub async fn impact_default(&self) {
        self.service.impact_default().await;
    }

    /// Trigger notification feedback for the given outcome class
    pub async fn notification(&self, kind: NotificationType) {
        self.service.notification(kind).await;
    }

    /// Trigger selection feedback
    pub async fn selection(&self) {
        self.service.selection().await;
    }

    /// Trigger a named haptic pattern
    pub async fn pattern(&self, pattern: HapticPattern) {
        self.service.pattern(pattern).await;
    }

    // ===== Common interaction patterns =====

    /// Button press: light impact
    pub async fn button_press(&self) {
        self.service.button_press().await;
    }

    /// Operation succeeded
    pub async fn success(&self) {
        self.service.success().await;
    }

    /// Operation failed
    pub async fn error(&self) {
        self.service.error().await;
    }

    /// Operation needs attention
    pub async fn warning(&self) {
        self.service.warning().await;
    }

    /// Destructive action: medium impact
    pub async fn delete(&self) {
        self.service.delete().await;
    }

    /// Pull-to-refresh: light impact
    pub async fn refresh(&self) {
        self.service.refresh().await;
    }

    /// Discrete value change: selection cue
    pub async fn selection_change(&self) {
        self.service.selection_change().await;
    }

    /// Long press recognized: medium impact
    pub async fn long_press(&self) {
        self.service.long_press().await;
    }
}

/// Convenience function to create a haptics handle from a driver
pub fn create_haptics<D: HapticDriver>(driver: D) -> Haptics<D> {
    Haptics::new(Arc::new(HapticService::new(driver)))
}
