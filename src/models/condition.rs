//! Weather-code classification into display categories
//!
//! Open-Meteo reports conditions as WMO weather codes. Both mappings here are
//! total over all integers: unknown codes fall back to a neutral category
//! instead of failing. The label table covers a narrower code list than the
//! emoji table.

use serde::Serialize;

/// Fallback emoji for codes outside the documented domain
pub const FALLBACK_EMOJI: &str = "🌥️";

/// Fallback label for codes outside the label table
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Display category derived solely from a weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherCategory {
    pub emoji: &'static str,
    pub label: &'static str,
}

impl WeatherCategory {
    /// The category reported for codes outside the documented domain,
    /// and for samples that carry no code at all.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            emoji: FALLBACK_EMOJI,
            label: UNKNOWN_LABEL,
        }
    }
}

/// Map a WMO weather code to its display emoji.
/// See: https://open-meteo.com/en/docs#weathervariables
#[must_use]
pub fn condition_emoji(code: i64) -> &'static str {
    match code {
        0 => "☀️",                      // Clear sky
        1..=3 => "🌤️",                 // Mainly clear, partly cloudy, overcast
        45 | 48 => "🌫️",               // Fog
        51 | 53 | 55 => "🌦️",          // Drizzle
        56 | 57 => "🌨️",               // Freezing drizzle
        61 | 63 | 65 => "🌧️",          // Rain
        66 | 67 => "🌨️",               // Freezing rain
        71 | 73 | 75 | 77 => "🌨️",     // Snow fall, snow grains
        80..=82 => "🌦️",               // Rain showers
        85 | 86 => "🌨️",               // Snow showers
        95 | 96 | 99 => "⛈️",          // Thunderstorm, with hail
        _ => FALLBACK_EMOJI,
    }
}

/// Map a WMO weather code to a short human-readable label.
#[must_use]
pub fn condition_label(code: i64) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        51 => "Light rain showers",
        53 => "Moderate rain showers",
        55 => "Heavy rain showers",
        61 => "Light rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        71 => "Light snow showers",
        73 => "Moderate snow showers",
        75 => "Heavy snow showers",
        80 => "Light rain showers",
        81 => "Moderate rain showers",
        82 => "Heavy rain showers",
        _ => UNKNOWN_LABEL,
    }
}

/// Classify a weather code into its display category.
#[must_use]
pub fn classify(code: i64) -> WeatherCategory {
    WeatherCategory {
        emoji: condition_emoji(code),
        label: condition_label(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "☀️")]
    #[case(1, "🌤️")]
    #[case(2, "🌤️")]
    #[case(3, "🌤️")]
    #[case(45, "🌫️")]
    #[case(48, "🌫️")]
    #[case(51, "🌦️")]
    #[case(53, "🌦️")]
    #[case(55, "🌦️")]
    #[case(56, "🌨️")]
    #[case(57, "🌨️")]
    #[case(61, "🌧️")]
    #[case(63, "🌧️")]
    #[case(65, "🌧️")]
    #[case(66, "🌨️")]
    #[case(67, "🌨️")]
    #[case(71, "🌨️")]
    #[case(73, "🌨️")]
    #[case(75, "🌨️")]
    #[case(77, "🌨️")]
    #[case(80, "🌦️")]
    #[case(81, "🌦️")]
    #[case(82, "🌦️")]
    #[case(85, "🌨️")]
    #[case(86, "🌨️")]
    #[case(95, "⛈️")]
    #[case(96, "⛈️")]
    #[case(99, "⛈️")]
    fn test_documented_codes(#[case] code: i64, #[case] emoji: &str) {
        assert_eq!(condition_emoji(code), emoji);
    }

    #[rstest]
    #[case(-1)]
    #[case(4)]
    #[case(50)]
    #[case(200)]
    #[case(i64::MAX)]
    #[case(i64::MIN)]
    fn test_unlisted_codes_fall_back(#[case] code: i64) {
        assert_eq!(condition_emoji(code), FALLBACK_EMOJI);
        assert_eq!(condition_label(code), UNKNOWN_LABEL);
        assert_eq!(classify(code), WeatherCategory::unknown());
    }

    #[test]
    fn test_light_rain() {
        let category = classify(61);
        assert_eq!(category.emoji, "🌧️");
        assert_eq!(category.label, "Light rain");
    }

    #[test]
    fn test_label_domain_is_narrower_than_emoji_domain() {
        // Codes the emoji table knows but the label table maps to Unknown
        for code in [48, 56, 57, 66, 67, 77, 85, 86, 95, 96, 99] {
            assert_ne!(condition_emoji(code), FALLBACK_EMOJI);
            assert_eq!(condition_label(code), UNKNOWN_LABEL);
        }
    }

    #[test]
    fn test_labels_for_listed_codes() {
        assert_eq!(condition_label(0), "Clear sky");
        assert_eq!(condition_label(2), "Partly cloudy");
        assert_eq!(condition_label(45), "Fog");
        assert_eq!(condition_label(82), "Heavy rain showers");
    }
}
