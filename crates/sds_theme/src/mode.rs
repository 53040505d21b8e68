//! Color mode catalog

use crate::error::ThemeError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Active color mode of the page.
///
/// The literal strings are what the root marker and the persisted store
/// carry; stylesheets scope their CSS variables on them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorMode {
    #[default]
    #[serde(rename = "sds-light")]
    SdsLight,
    #[serde(rename = "sds-dark")]
    SdsDark,
    #[serde(rename = "brand-b-light")]
    BrandBLight,
}

impl ColorMode {
    /// Mode used when nothing else resolves.
    pub const FALLBACK: ColorMode = ColorMode::SdsLight;

    /// Marker/storage literal.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SdsLight => "sds-light",
            Self::SdsDark => "sds-dark",
            Self::BrandBLight => "brand-b-light",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::SdsLight => "SDS Light",
            Self::SdsDark => "SDS Dark",
            Self::BrandBLight => "Brand B Light",
        }
    }

    /// Full mode list, in selector order.
    pub fn all() -> &'static [ColorMode] {
        const MODES: [ColorMode; 3] = [
            ColorMode::SdsLight,
            ColorMode::SdsDark,
            ColorMode::BrandBLight,
        ];
        &MODES
    }

    /// Parse a literal, `None` when it is not a known mode.
    pub fn parse(value: &str) -> Option<ColorMode> {
        Self::all().iter().copied().find(|m| m.as_str() == value)
    }
}

impl FromStr for ColorMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ThemeError::InvalidEnumValue {
            kind: "color mode",
            value: s.to_string(),
        })
    }
}

impl Display for ColorMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_round_trip_through_from_str() {
        for mode in ColorMode::all() {
            assert_eq!(mode.as_str().parse::<ColorMode>(), Ok(*mode));
        }
    }

    #[test]
    fn unknown_literal_is_invalid_enum_value() {
        let err = "sds-sepia".parse::<ColorMode>().unwrap_err();
        assert_eq!(
            err,
            ThemeError::InvalidEnumValue {
                kind: "color mode",
                value: "sds-sepia".to_string(),
            }
        );
        // Literals are case sensitive
        assert_eq!(ColorMode::parse("SDS-DARK"), None);
    }

    #[test]
    fn serde_uses_marker_literals() {
        let json = serde_json::to_string(&ColorMode::BrandBLight).unwrap();
        assert_eq!(json, "\"brand-b-light\"");
        let mode: ColorMode = serde_json::from_str("\"sds-dark\"").unwrap();
        assert_eq!(mode, ColorMode::SdsDark);
    }

    #[test]
    fn default_is_the_fallback() {
        assert_eq!(ColorMode::default(), ColorMode::FALLBACK);
        assert_eq!(ColorMode::FALLBACK.to_string(), "sds-light");
    }
}
