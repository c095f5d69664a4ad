//! Mock haptic driver
//!
//! Test implementation with invocation counters, a recorded call log, and
//! failure-scenario injection. Public so downstream consumers can test
//! their own feedback wiring.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use contracts::{HapticDriver, HapticError, ImpactStyle, NotificationType};
use tracing::instrument;

/// Mock driver configuration (injectable failure scenarios)
#[derive(Debug, Default, Clone)]
pub struct MockConfig {
    /// Impact styles that should fail
    pub fail_impact_styles: Vec<ImpactStyle>,
    /// Fail every impact call
    pub fail_impact: bool,
    /// Fail every notification call
    pub fail_notification: bool,
    /// Fail every selection call
    pub fail_selection: bool,
}

/// A single recorded primitive invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockCall {
    Impact(ImpactStyle),
    Notification(NotificationType),
    Selection,
}

/// Mock haptic driver
///
/// Counters count attempts, so a failing call still increments; that is
/// what lets tests assert "no retry".
pub struct MockDriver {
    /// Configuration (injectable failure scenarios)
    config: MockConfig,
    /// Attempted impact calls
    impact_count: AtomicU64,
    /// Attempted notification calls
    notification_count: AtomicU64,
    /// Attempted selection calls
    selection_count: AtomicU64,
    /// Every invocation in order
    calls: Mutex<Vec<MockCall>>,
}

impl MockDriver {
    /// Create a default mock driver (everything succeeds)
    pub fn new() -> Self {
        Self::with_config(MockConfig::default())
    }

    /// Create a mock driver with failure configuration
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            config,
            impact_count: AtomicU64::new(0),
            notification_count: AtomicU64::new(0),
            selection_count: AtomicU64::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock driver where every primitive fails
    pub fn failing() -> Self {
        Self::with_config(MockConfig {
            fail_impact: true,
            fail_notification: true,
            fail_selection: true,
            ..MockConfig::default()
        })
    }

    /// Attempted impact calls
    pub fn impact_count(&self) -> u64 {
        self.impact_count.load(Ordering::Relaxed)
    }

    /// Attempted notification calls
    pub fn notification_count(&self) -> u64 {
        self.notification_count.load(Ordering::Relaxed)
    }

    /// Attempted selection calls
    pub fn selection_count(&self) -> u64 {
        self.selection_count.load(Ordering::Relaxed)
    }

    /// All recorded invocations, in call order
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }

    fn record(&self, call: MockCall) {
        self.calls.lock().expect("mock call log poisoned").push(call);
    }

    fn should_fail_impact(&self, style: ImpactStyle) -> bool {
        self.config.fail_impact || self.config.fail_impact_styles.contains(&style)
    }
}

impl Default for MockDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl HapticDriver for MockDriver {
    fn name(&self) -> &str {
        "mock"
    }

    #[instrument(name = "mock_driver_impact", skip(self))]
    async fn trigger_impact(&self, style: ImpactStyle) -> Result<(), HapticError> {
        self.impact_count.fetch_add(1, Ordering::Relaxed);
        self.record(MockCall::Impact(style));

        if self.should_fail_impact(style) {
            return Err(HapticError::driver("mock", format!("impact {style} failed")));
        }
        Ok(())
    }

    #[instrument(name = "mock_driver_notification", skip(self))]
    async fn trigger_notification(&self, kind: NotificationType) -> Result<(), HapticError> {
        self.notification_count.fetch_add(1, Ordering::Relaxed);
        self.record(MockCall::Notification(kind));

        if self.config.fail_notification {
            return Err(HapticError::driver(
                "mock",
                format!("notification {kind} failed"),
            ));
        }
        Ok(())
    }

    #[instrument(name = "mock_driver_selection", skip(self))]
    async fn trigger_selection(&self) -> Result<(), HapticError> {
        self.selection_count.fetch_add(1, Ordering::Relaxed);
        self.record(MockCall::Selection);

        if self.config.fail_selection {
            return Err(HapticError::driver("mock", "selection failed"));
        }
        Ok(())
    }
}
