//! Vertical bar offset per creature type
//!
//! Sprites don't all sit the same way inside their bounding boxes, so each
//! type can nudge its bar. The result is in texture pixels; positive values
//! move the bar down.

use crate::config::HealthBarsConfig;

/// Resolves the vertical bar offset for a creature type
///
/// Unlisted types contribute 0. The configured `health_bar_offset` is
/// subtracted, so raising it lifts every bar.
pub fn resolve_offset(type_name: &str, config: &HealthBarsConfig) -> i32 {
    config.type_offset(type_name).unwrap_or(0) - config.health_bar_offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(offsets: &[(&str, i32)], base: i32) -> HealthBarsConfig {
        HealthBarsConfig {
            health_bar_offset: base,
            type_offsets: offsets
                .iter()
                .map(|(name, offset)| (name.to_string(), *offset))
                .collect::<HashMap<_, _>>(),
            ..Default::default()
        }
    }

    #[test]
    fn test_listed_type() {
        let config = config_with(&[("Bat", 9)], 0);
        assert_eq!(resolve_offset("Bat", &config), 9);
    }

    #[test]
    fn test_base_offset_is_negated() {
        let config = config_with(&[("Bat", 9)], 3);
        assert_eq!(resolve_offset("Bat", &config), 6);

        let config = config_with(&[], -2);
        assert_eq!(resolve_offset("Bat", &config), 2);
    }

    #[test]
    fn test_unlisted_type_same_as_zero() {
        let unlisted = config_with(&[("Bat", 9)], 5);
        let zero = config_with(&[("Bat", 9), ("Dragon", 0)], 5);
        assert_eq!(resolve_offset("Dragon", &unlisted), resolve_offset("Dragon", &zero));
        assert_eq!(resolve_offset("Dragon", &unlisted), -5);
    }
}
