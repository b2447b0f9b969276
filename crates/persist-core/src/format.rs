//! Formatter specifications attached to workspace properties.
//!
//! A `FormatSpec` describes how a report column renders its values: either
//! a date pattern (chrono `strftime` syntax) or a decimal pattern. The
//! pattern itself is carried opaquely for persistence; only date patterns
//! are applied by this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A column formatter specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatSpec {
    /// Date/time rendering with a chrono `strftime` pattern.
    Date {
        /// The `strftime` pattern, e.g. `%Y-%m-%d`
        pattern: String,
    },

    /// Decimal rendering pattern, carried opaquely.
    Decimal {
        /// The decimal pattern, e.g. `#,##0.00`
        pattern: String,
    },
}

impl FormatSpec {
    /// Create a date format specification.
    pub fn date(pattern: impl Into<String>) -> Self {
        Self::Date {
            pattern: pattern.into(),
        }
    }

    /// Create a decimal format specification.
    pub fn decimal(pattern: impl Into<String>) -> Self {
        Self::Decimal {
            pattern: pattern.into(),
        }
    }

    /// The raw pattern string.
    pub fn pattern(&self) -> &str {
        match self {
            Self::Date { pattern } => pattern,
            Self::Decimal { pattern } => pattern,
        }
    }

    /// Render a timestamp with a date specification.
    ///
    /// Returns `None` for decimal specifications, which do not apply to
    /// timestamps.
    pub fn format_datetime(&self, when: &DateTime<Utc>) -> Option<String> {
        match self {
            Self::Date { pattern } => Some(when.format(pattern).to_string()),
            Self::Decimal { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_pattern_applies() {
        let spec = FormatSpec::date("%Y-%m-%d");
        let when = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        assert_eq!(spec.format_datetime(&when), Some("2024-06-15".to_string()));
    }

    #[test]
    fn test_decimal_pattern_is_opaque() {
        let spec = FormatSpec::decimal("#,##0.00");
        assert_eq!(spec.pattern(), "#,##0.00");
        let when = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        assert_eq!(spec.format_datetime(&when), None);
    }
}
