//! Substring classifier shared by the name resolver and the block scanner.

/// Returns `true` when `text` contains every one of `required` as a literal
/// substring. An empty requirement list matches anything.
///
/// Season tokens are matched as plain substrings, so `S1` also matches inside
/// `S13`.
pub fn matches<S: AsRef<str>>(text: &str, required: &[S]) -> bool {
    required.iter().all(|token| text.contains(token.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::matches;

    #[test]
    fn requires_every_token() {
        let header = "S13 高茲 Outdoor HeavyArmor 大決戰";
        assert!(matches(header, &["S13", "大決戰", "HeavyArmor"]));
        assert!(!matches(header, &["S13", "大決戰", "LightArmor"]));
        assert!(!matches(header, &["S13", "總力戰"]));
    }

    #[test]
    fn token_order_is_irrelevant() {
        assert!(matches("大決戰 Unarmed S4", &["S4", "Unarmed", "大決戰"]));
    }

    #[test]
    fn empty_requirements_match() {
        let none: [&str; 0] = [];
        assert!(matches("", &none));
        assert!(matches("anything", &none));
    }

    #[test]
    fn short_season_matches_inside_longer_numeral() {
        assert!(matches("S13 總力戰 Hieronymus", &["S1", "總力戰"]));
        assert!(!matches("S3 總力戰", &["S13", "總力戰"]));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!matches("s7 heavyarmor 大決戰", &["S7", "HeavyArmor", "大決戰"]));
    }
}
