//! Feedback vocabulary - closed enumerations
//!
//! Pure value tags passed as arguments; nothing here has runtime lifecycle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::HapticError;

/// Impact feedback style
///
/// A short vibration pulse with selectable intensity. No ordering semantics
/// beyond the intensity implied by the name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactStyle {
    /// Subtle tap (default)
    #[default]
    Light,
    /// Firm tap
    Medium,
    /// Strong thud
    Heavy,
}

/// Notification feedback type
///
/// A vibration pattern signaling an outcome class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Success,
    Warning,
    Error,
}

/// Named haptic pattern for common interactions
///
/// Resolved by the dispatcher to exactly one primitive call:
/// `Selection` to the selection primitive, the rest to a notification of
/// the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HapticPattern {
    Success,
    Warning,
    Error,
    Selection,
}

impl fmt::Display for ImpactStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Light => "Light",
            Self::Medium => "Medium",
            Self::Heavy => "Heavy",
        };
        f.write_str(s)
    }
}

impl FromStr for ImpactStyle {
    type Err = HapticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            _ if s.eq_ignore_ascii_case("light") => Ok(Self::Light),
            _ if s.eq_ignore_ascii_case("medium") => Ok(Self::Medium),
            _ if s.eq_ignore_ascii_case("heavy") => Ok(Self::Heavy),
            _ => Err(HapticError::unknown_name("impact style", s)),
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        };
        f.write_str(s)
    }
}

impl FromStr for NotificationType {
    type Err = HapticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            _ if s.eq_ignore_ascii_case("success") => Ok(Self::Success),
            _ if s.eq_ignore_ascii_case("warning") => Ok(Self::Warning),
            _ if s.eq_ignore_ascii_case("error") => Ok(Self::Error),
            _ => Err(HapticError::unknown_name("notification type", s)),
        }
    }
}

impl fmt::Display for HapticPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
            // Historical lowercase spelling, kept for wire compatibility
            Self::Selection => "selection",
        };
        f.write_str(s)
    }
}

impl FromStr for HapticPattern {
    type Err = HapticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            _ if s.eq_ignore_ascii_case("success") => Ok(Self::Success),
            _ if s.eq_ignore_ascii_case("warning") => Ok(Self::Warning),
            _ if s.eq_ignore_ascii_case("error") => Ok(Self::Error),
            _ if s.eq_ignore_ascii_case("selection") => Ok(Self::Selection),
            _ => Err(HapticError::unknown_name("haptic pattern", s)),
        }
    }
}

impl HapticPattern {
    /// Notification type for outcome patterns, `None` for `Selection`.
    pub fn as_notification(self) -> Option<NotificationType> {
        match self {
            Self::Success => Some(NotificationType::Success),
            Self::Warning => Some(NotificationType::Warning),
            Self::Error => Some(NotificationType::Error),
            Self::Selection => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_impact_is_light() {
        assert_eq!(ImpactStyle::default(), ImpactStyle::Light);
    }

    #[test]
    fn test_impact_style_round_trip() {
        for style in [ImpactStyle::Light, ImpactStyle::Medium, ImpactStyle::Heavy] {
            let parsed: ImpactStyle = style.to_string().parse().unwrap();
            assert_eq!(parsed, style);
        }
    }

    #[test]
    fn test_pattern_historical_spelling() {
        assert_eq!(HapticPattern::Selection.to_string(), "selection");
        assert_eq!(
            "selection".parse::<HapticPattern>().unwrap(),
            HapticPattern::Selection
        );
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("firm".parse::<ImpactStyle>().is_err());
        assert!("info".parse::<NotificationType>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&ImpactStyle::Medium).unwrap();
        assert_eq!(json, "\"medium\"");

        let kind: NotificationType = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(kind, NotificationType::Warning);
    }

    #[test]
    fn test_pattern_as_notification() {
        assert_eq!(
            HapticPattern::Warning.as_notification(),
            Some(NotificationType::Warning)
        );
        assert_eq!(HapticPattern::Selection.as_notification(), None);
    }
}
