//! Demo: drive the full feedback surface through a LogDriver
//!
//! Run with `cargo run -p haptic_demo`. Set RUST_LOG=debug to also see
//! suppressed failures from the noop pass.

use accessor::create_haptics;
use anyhow::Result;
use contracts::{HapticPattern, ImpactStyle, NotificationType};
use dispatcher::{LogDriver, NoopDriver};
use observability::{init_with_config, LogFormat, ObservabilityConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_with_config(ObservabilityConfig {
        log_format: LogFormat::Pretty,
        default_log_level: "debug".to_string(),
    })?;

    // A desktop stand-in driver that logs instead of vibrating
    let haptics = create_haptics(LogDriver::default());

    info!("Generic primitives");
    haptics.impact(ImpactStyle::Heavy).await;
    haptics.impact_default().await;
    haptics.notification(NotificationType::Warning).await;
    haptics.selection().await;
    haptics.pattern(HapticPattern::Success).await;

    info!("Common interaction patterns");
    haptics.button_press().await;
    haptics.success().await;
    haptics.error().await;
    haptics.warning().await;
    haptics.delete().await;
    haptics.refresh().await;
    haptics.selection_change().await;
    haptics.long_press().await;

    let snap = haptics.metrics_snapshot();
    info!(
        impact = snap.impact_count,
        notification = snap.notification_count,
        selection = snap.selection_count,
        suppressed = snap.suppressed_count,
        "LogDriver pass complete"
    );

    // Same surface on a platform without a motor: calls are free no-ops
    let silent = create_haptics(NoopDriver::new());
    silent.button_press().await;
    silent.success().await;

    let snap = silent.metrics_snapshot();
    info!(
        suppressed = snap.suppressed_count,
        "NoopDriver pass complete, nothing escaped"
    );

    Ok(())
}
