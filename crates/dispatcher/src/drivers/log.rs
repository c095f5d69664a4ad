//! LogDriver - logs each primitive via tracing

use contracts::{HapticDriver, HapticError, ImpactStyle, NotificationType};
use tracing::{info, instrument};

/// Driver that logs primitive calls instead of vibrating
///
/// Desktop / development stand-in; every call succeeds.
pub struct LogDriver {
    name: String,
}

impl LogDriver {
    /// Create a new LogDriver with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for LogDriver {
    fn default() -> Self {
        Self::new("log")
    }
}

impl HapticDriver for LogDriver {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(name = "log_driver_impact", skip(self), fields(driver = %self.name))]
    async fn trigger_impact(&self, style: ImpactStyle) -> Result<(), HapticError> {
        info!(driver = %self.name, style = %style, "Impact feedback");
        Ok(())
    }

    #[instrument(name = "log_driver_notification", skip(self), fields(driver = %self.name))]
    async fn trigger_notification(&self, kind: NotificationType) -> Result<(), HapticError> {
        info!(driver = %self.name, kind = %kind, "Notification feedback");
        Ok(())
    }

    #[instrument(name = "log_driver_selection", skip(self), fields(driver = %self.name))]
    async fn trigger_selection(&self) -> Result<(), HapticError> {
        info!(driver = %self.name, "Selection feedback");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_driver_always_succeeds() {
        let driver = LogDriver::new("test_log");
        assert!(driver.trigger_impact(ImpactStyle::Heavy).await.is_ok());
        assert!(driver
            .trigger_notification(NotificationType::Warning)
            .await
            .is_ok());
        assert!(driver.trigger_selection().await.is_ok());
    }

    #[tokio::test]
    async fn test_log_driver_name() {
        let driver = LogDriver::new("my_logger");
        assert_eq!(driver.name(), "my_logger");
    }
}
