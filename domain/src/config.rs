//! Output style selection for rendered reports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How classified reports are rendered for humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatterStyle {
    /// `[SUCCESS] tool: message`, details on the following lines.
    #[default]
    Standard,
    /// Single line, `OK: tool - message`, details suppressed.
    Compact,
}

impl FormatterStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatterStyle::Standard => "standard",
            FormatterStyle::Compact => "compact",
        }
    }
}

impl fmt::Display for FormatterStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raised when a config value names an unknown style.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown formatter style: {0} (expected 'standard' or 'compact')")]
pub struct ParseFormatterStyleError(pub String);

impl FromStr for FormatterStyle {
    type Err = ParseFormatterStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(FormatterStyle::Standard),
            "compact" => Ok(FormatterStyle::Compact),
            other => Err(ParseFormatterStyleError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_known_styles() {
        assert_eq!("standard".parse::<FormatterStyle>(), Ok(FormatterStyle::Standard));
        assert_eq!("Compact".parse::<FormatterStyle>(), Ok(FormatterStyle::Compact));
    }

    #[test]
    fn test_parse_rejects_unknown_style() {
        let err = "fancy".parse::<FormatterStyle>().unwrap_err();
        assert_eq!(err.0, "fancy");
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(FormatterStyle::default(), FormatterStyle::Standard);
    }
}
