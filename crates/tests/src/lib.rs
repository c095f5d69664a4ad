//! # Integration Tests
//!
//! 集成测试与端到端测试。
//!
//! 负责：
//! - 合约快照测试
//! - 模拟端到端测试（无需真实振动马达）

#[cfg(test)]
mod contract_tests {
    use contracts::defaults::{BUTTON_IMPACT, DEFAULT_IMPACT, DELETE_IMPACT, ERROR_IMPACT};
    use contracts::{HapticPattern, ImpactStyle, NotificationType};

    /// The defaults table is part of the frozen contract.
    #[test]
    fn test_defaults_table_frozen() {
        assert_eq!(DEFAULT_IMPACT, ImpactStyle::Light);
        assert_eq!(BUTTON_IMPACT, ImpactStyle::Light);
        assert_eq!(DELETE_IMPACT, ImpactStyle::Medium);
        assert_eq!(ERROR_IMPACT, ImpactStyle::Heavy);
    }

    /// Wire spellings must not drift across releases.
    #[test]
    fn test_wire_spellings_frozen() {
        assert_eq!(
            serde_json::to_string(&ImpactStyle::Heavy).unwrap(),
            "\"heavy\""
        );
        assert_eq!(
            serde_json::to_string(&NotificationType::Warning).unwrap(),
            "\"warning\""
        );
        assert_eq!(
            serde_json::to_string(&HapticPattern::Selection).unwrap(),
            "\"selection\""
        );
        assert_eq!(HapticPattern::Selection.to_string(), "selection");
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::sync::Arc;

    use accessor::{create_haptics, Haptics};
    use contracts::{HapticPattern, ImpactStyle, NotificationType};
    use dispatcher::{HapticService, MockCall, MockConfig, MockDriver, NoopDriver};

    /// End-to-end: accessor -> service -> driver
    ///
    /// `success()` must produce exactly one notification(Success) and touch
    /// no other primitive.
    #[tokio::test]
    async fn test_e2e_success_is_one_notification() {
        let haptics = create_haptics(MockDriver::new());

        haptics.success().await;

        let driver = haptics.service().driver();
        assert_eq!(driver.notification_count(), 1);
        assert_eq!(driver.impact_count(), 0);
        assert_eq!(driver.selection_count(), 0);
        assert_eq!(
            driver.calls(),
            vec![MockCall::Notification(NotificationType::Success)]
        );
    }

    /// `selection_change()` must produce exactly one selection cue.
    #[tokio::test]
    async fn test_e2e_selection_change_is_one_selection() {
        let haptics = create_haptics(MockDriver::new());

        haptics.selection_change().await;

        let driver = haptics.service().driver();
        assert_eq!(driver.selection_count(), 1);
        assert_eq!(driver.impact_count(), 0);
        assert_eq!(driver.notification_count(), 0);
    }

    /// `pattern(Warning)` resolves to notification(Warning) exactly once.
    #[tokio::test]
    async fn test_e2e_pattern_warning() {
        let haptics = create_haptics(MockDriver::new());

        haptics.pattern(HapticPattern::Warning).await;

        assert_eq!(
            haptics.service().driver().calls(),
            vec![MockCall::Notification(NotificationType::Warning)]
        );
    }

    /// A driver failure on impact(Heavy) must not escape the accessor and
    /// must not be retried.
    #[tokio::test]
    async fn test_e2e_heavy_impact_failure_contained() {
        let driver = MockDriver::with_config(MockConfig {
            fail_impact_styles: vec![ImpactStyle::Heavy],
            ..MockConfig::default()
        });
        let haptics = create_haptics(driver);

        haptics.impact(ImpactStyle::Heavy).await;

        assert_eq!(haptics.service().driver().impact_count(), 1);
        assert_eq!(haptics.metrics_snapshot().suppressed_count, 1);
    }

    /// Clones handed to concurrent tasks share one service; overlapping
    /// calls neither block nor interfere.
    #[tokio::test]
    async fn test_e2e_concurrent_clones() {
        let service = Arc::new(HapticService::new(MockDriver::new()));
        let haptics = Haptics::new(Arc::clone(&service));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let h = haptics.clone();
            handles.push(tokio::spawn(async move {
                h.button_press().await;
                h.selection_change().await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let snap = service.metrics_snapshot();
        assert_eq!(snap.impact_count, 8);
        assert_eq!(snap.selection_count, 8);
        assert_eq!(snap.suppressed_count, 0);
    }

    /// Full convenience table on a platform without a motor: every
    /// operation completes, every failure is suppressed.
    #[tokio::test]
    async fn test_e2e_unsupported_platform_is_free() {
        let haptics = create_haptics(NoopDriver::new());

        haptics.button_press().await;
        haptics.success().await;
        haptics.error().await;
        haptics.warning().await;
        haptics.delete().await;
        haptics.refresh().await;
        haptics.selection_change().await;
        haptics.long_press().await;

        let snap = haptics.metrics_snapshot();
        assert_eq!(
            snap.impact_count + snap.notification_count + snap.selection_count,
            8
        );
        assert_eq!(snap.suppressed_count, 8);
    }
}
