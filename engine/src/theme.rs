//! Celebration themes and the shared facet-value color table
//!
//! One mapping for all games; individual games must not re-declare colors.

use serde::{Deserialize, Serialize};

/// Visual theme attached to a game's celebration events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CelebrationTheme {
    Military,
    Legislative,
    Political,
    Culinary,
    Geographic,
    Constitutional,
    Sporting,
    Scientific,
}

impl CelebrationTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            CelebrationTheme::Military => "military",
            CelebrationTheme::Legislative => "legislative",
            CelebrationTheme::Political => "political",
            CelebrationTheme::Culinary => "culinary",
            CelebrationTheme::Geographic => "geographic",
            CelebrationTheme::Constitutional => "constitutional",
            CelebrationTheme::Sporting => "sporting",
            CelebrationTheme::Scientific => "scientific",
        }
    }

    /// Accent color used by celebration effects.
    pub fn accent(&self) -> &'static str {
        match self {
            CelebrationTheme::Military => "#8b0000",
            CelebrationTheme::Legislative => "#1f4e79",
            CelebrationTheme::Political => "#006747",
            CelebrationTheme::Culinary => "#b85c00",
            CelebrationTheme::Geographic => "#2e6f40",
            CelebrationTheme::Constitutional => "#4b2e83",
            CelebrationTheme::Sporting => "#c8102e",
            CelebrationTheme::Scientific => "#00629b",
        }
    }
}

/// Display colors for categorical facet values, keyed by (facet key, value).
/// Falls back to a neutral grey for anything unlisted.
const FACET_COLORS: &[(&str, &str, &str)] = &[
    ("era", "Medieval", "#7c5cbf"),
    ("era", "Early Modern", "#b05c9e"),
    ("era", "Georgian", "#c97b2d"),
    ("era", "Victorian", "#2d7a4f"),
    ("era", "Twentieth Century", "#3a6ea5"),
    ("era", "Twenty-First Century", "#1d8a8a"),
    ("nation", "England", "#ce1124"),
    ("nation", "Scotland", "#005eb8"),
    ("nation", "Wales", "#d30731"),
    ("nation", "Northern Ireland", "#00884f"),
    ("nation", "United Kingdom", "#012169"),
    ("theatre", "Land", "#6b4f2a"),
    ("theatre", "Naval", "#1f4e79"),
    ("theatre", "Air", "#5b8bb2"),
    ("party", "Whig", "#ff7f00"),
    ("party", "Tory", "#164fa2"),
    ("party", "Conservative", "#164fa2"),
    ("party", "Liberal", "#ffd700"),
    ("party", "Labour", "#e4003b"),
    ("domain", "Constitutional", "#4b2e83"),
    ("domain", "Social", "#2d7a4f"),
    ("domain", "Electoral", "#b05c9e"),
    ("field", "Communications", "#3a6ea5"),
    ("field", "Medicine", "#00884f"),
    ("field", "Engineering", "#6b4f2a"),
    ("field", "Science", "#00629b"),
    ("century", "13th", "#7c5cbf"),
    ("century", "17th", "#b05c9e"),
    ("century", "18th", "#c97b2d"),
    ("century", "19th", "#2d7a4f"),
    ("century", "20th", "#3a6ea5"),
    ("kind", "Monument", "#6b4f2a"),
    ("kind", "Castle", "#7c5cbf"),
    ("kind", "Natural", "#2e6f40"),
];

const FALLBACK_COLOR: &str = "#6c757d";

/// Shared facet chip color lookup.
pub fn facet_color(key: &str, value: &str) -> &'static str {
    FACET_COLORS
        .iter()
        .find(|(k, v, _)| *k == key && *v == value)
        .map(|(_, _, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_facet_color() {
        assert_eq!(facet_color("nation", "Scotland"), "#005eb8");
    }

    #[test]
    fn test_unknown_facet_falls_back() {
        assert_eq!(facet_color("nation", "Atlantis"), FALLBACK_COLOR);
    }

    #[test]
    fn test_theme_strings_are_stable() {
        assert_eq!(CelebrationTheme::Military.as_str(), "military");
        assert_eq!(CelebrationTheme::Legislative.as_str(), "legislative");
    }
}
