//! Display preferences
//!
//! The per-user settings that every formatting call site receives: which unit
//! system to render in and whether to show both systems at once.

use serde::{Deserialize, Serialize};

use crate::units::UnitSystem;

/// Per-user display preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPreferences {
    /// Active display system
    pub system: UnitSystem,
    /// Render the other system's value in parentheses
    pub show_both: bool,
}

impl Default for UnitPreferences {
    fn default() -> Self {
        Self {
            system: UnitSystem::Metric,
            show_both: false,
        }
    }
}

/// First-run default heuristic: pick a unit system from an IANA timezone name
///
/// All `America/*` zones default to imperial, everything else to metric. This
/// is product policy, not a contract; callers are free to ignore it and let
/// the user choose.
pub fn detect_unit_system_from_timezone(tz: &str) -> UnitSystem {
    let trimmed = tz.trim();
    if trimmed.starts_with("America/") {
        return UnitSystem::Imperial;
    }
    if trimmed.is_empty() {
        tracing::debug!("empty timezone, defaulting to metric");
    }
    UnitSystem::Metric
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences() {
        let prefs = UnitPreferences::default();
        assert_eq!(prefs.system, UnitSystem::Metric);
        assert!(!prefs.show_both);
    }

    #[test]
    fn test_preferences_serde_round_trip() {
        let prefs = UnitPreferences {
            system: UnitSystem::Imperial,
            show_both: true,
        };
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(json, r#"{"system":"imperial","show_both":true}"#);
        let back: UnitPreferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }

    #[test]
    fn test_detect_from_timezone() {
        assert_eq!(
            detect_unit_system_from_timezone("America/New_York"),
            UnitSystem::Imperial
        );
        assert_eq!(
            detect_unit_system_from_timezone("America/Sao_Paulo"),
            UnitSystem::Imperial
        );
        assert_eq!(
            detect_unit_system_from_timezone("Europe/Berlin"),
            UnitSystem::Metric
        );
        assert_eq!(
            detect_unit_system_from_timezone("Asia/Tokyo"),
            UnitSystem::Metric
        );
        assert_eq!(detect_unit_system_from_timezone(""), UnitSystem::Metric);
    }
}
