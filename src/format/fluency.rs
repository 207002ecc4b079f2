//! Mapping of free-text language fluency to a skill-level rating.

/// Highest rating on the CV skill scale.
pub const MAX_LEVEL: u8 = 5;

/// Rating used when no rule matches.
pub const DEFAULT_LEVEL: u8 = 3;

/// Substring rules, checked in order. The first match wins, so the more
/// specific "full professional" must come before "professional".
const FLUENCY_RULES: &[(&str, u8)] = &[
    ("native", MAX_LEVEL),
    ("full professional", 4),
    ("professional", 3),
];

/// Map a fluency description to a rating between 1 and [`MAX_LEVEL`].
pub fn fluency_level(fluency: &str) -> u8 {
    let fluency = fluency.to_lowercase();
    FLUENCY_RULES
        .iter()
        .find(|(needle, _)| fluency.contains(needle))
        .map(|(_, level)| *level)
        .unwrap_or(DEFAULT_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native() {
        assert_eq!(fluency_level("Native speaker"), 5);
        assert_eq!(fluency_level("NATIVE"), 5);
    }

    #[test]
    fn test_full_professional_before_professional() {
        assert_eq!(fluency_level("Full Professional proficiency"), 4);
        assert_eq!(fluency_level("Professional working proficiency"), 3);
    }

    #[test]
    fn test_default_level() {
        assert_eq!(fluency_level("Elementary"), DEFAULT_LEVEL);
        assert_eq!(fluency_level(""), DEFAULT_LEVEL);
    }
}
