//! # Dispatcher
//!
//! 触觉反馈分发模块。
//!
//! 负责：
//! - 将命名交互模式解析为唯一的平台原语调用
//! - 静默吸收驱动失败，不影响调用方控制流
//! - 记录触发/吸收指标
//!
//! The service is stateless: no queue, no batching, no retry. Each call
//! suspends at the driver boundary and resumes when the platform answers.

pub mod drivers;
pub mod metrics;
pub mod service;

pub use contracts::{HapticDriver, HapticError, HapticPattern, ImpactStyle, NotificationType};
pub use drivers::{LogDriver, MockCall, MockConfig, MockDriver, NoopDriver};
pub use metrics::{Primitive, TriggerMetrics, TriggerSnapshot};
pub use service::HapticService;
