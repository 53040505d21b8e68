//! Design token references
//!
//! Tokens are never resolved here. Each token renders as a CSS `var()`
//! reference that the stylesheet scoped on the active color mode fills in,
//! so switching modes changes every resolved color without touching the
//! style records.

/// Semantic color tokens (`--sds-color-*`)
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Backgrounds
    BackgroundBrandDefault,
    BackgroundBrandHover,
    BackgroundDangerDefault,
    BackgroundDangerHover,
    BackgroundDangerTertiaryHover,
    BackgroundNeutralTertiary,
    BackgroundNeutralTertiaryHover,
    BackgroundDefaultSecondary,
    BackgroundDefaultSecondaryHover,
    BackgroundDefaultDefaultHover,
    BackgroundDisabledDefault,

    // Borders
    BorderBrandDefault,
    BorderDangerDefault,
    BorderDangerSecondary,
    BorderNeutralSecondary,
    BorderDefaultDefault,
    BorderDisabledDefault,

    // Text
    TextBrandOnBrand,
    TextDangerOnDanger,
    TextDangerDefault,
    TextDefaultDefault,
    TextNeutralDefault,
    TextDisabledOnDisabled,
    TextDisabledDefault,

    // Page chrome
    PageBackground,
    PageTextPrimary,
    PageTextSecondary,
}

impl ColorToken {
    /// Token name without the `--sds-color-` prefix
    pub fn name(self) -> &'static str {
        match self {
            Self::BackgroundBrandDefault => "background-brand-default",
            Self::BackgroundBrandHover => "background-brand-hover",
            Self::BackgroundDangerDefault => "background-danger-default",
            Self::BackgroundDangerHover => "background-danger-hover",
            Self::BackgroundDangerTertiaryHover => "background-danger-tertiary-hover",
            Self::BackgroundNeutralTertiary => "background-neutral-tertiary",
            Self::BackgroundNeutralTertiaryHover => "background-neutral-tertiary-hover",
            Self::BackgroundDefaultSecondary => "background-default-secondary",
            Self::BackgroundDefaultSecondaryHover => "background-default-secondary-hover",
            Self::BackgroundDefaultDefaultHover => "background-default-default-hover",
            Self::BackgroundDisabledDefault => "background-disabled-default",
            Self::BorderBrandDefault => "border-brand-default",
            Self::BorderDangerDefault => "border-danger-default",
            Self::BorderDangerSecondary => "border-danger-secondary",
            Self::BorderNeutralSecondary => "border-neutral-secondary",
            Self::BorderDefaultDefault => "border-default-default",
            Self::BorderDisabledDefault => "border-disabled-default",
            Self::TextBrandOnBrand => "text-brand-on-brand",
            Self::TextDangerOnDanger => "text-danger-on-danger",
            Self::TextDangerDefault => "text-danger-default",
            Self::TextDefaultDefault => "text-default-default",
            Self::TextNeutralDefault => "text-neutral-default",
            Self::TextDisabledOnDisabled => "text-disabled-on-disabled",
            Self::TextDisabledDefault => "text-disabled-default",
            Self::PageBackground => "page-background",
            Self::PageTextPrimary => "page-text-primary",
            Self::PageTextSecondary => "page-text-secondary",
        }
    }

    /// Custom property name, e.g. `--sds-color-background-brand-default`
    pub fn variable(self) -> String {
        format!("--sds-color-{}", self.name())
    }

    /// `var()` reference with no fallback
    pub fn var(self) -> String {
        format!("var({})", self.variable())
    }

    /// `var()` reference with a literal fallback
    pub fn var_or(self, fallback: &str) -> String {
        format!("var({}, {})", self.variable(), fallback)
    }
}

/// Size tokens (`--sds-size-*`), each with its pixel fallback
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SizeToken {
    Space200,
    Space300,
    Space400,
    Radius200,
    StrokeBorder,
}

impl SizeToken {
    pub fn name(self) -> &'static str {
        match self {
            Self::Space200 => "space-200",
            Self::Space300 => "space-300",
            Self::Space400 => "space-400",
            Self::Radius200 => "radius-200",
            Self::StrokeBorder => "stroke-border",
        }
    }

    pub fn fallback(self) -> &'static str {
        match self {
            Self::Space200 => "8px",
            Self::Space300 => "12px",
            Self::Space400 => "16px",
            Self::Radius200 => "8px",
            Self::StrokeBorder => "1px",
        }
    }

    /// `var()` reference including the fallback
    pub fn var(self) -> String {
        format!("var(--sds-size-{}, {})", self.name(), self.fallback())
    }
}

/// Typography tokens (`--sds-typography-*`)
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TypographyToken {
    BodyFontFamily,
    BodySizeMedium,
    BodyFontWeightRegular,
    /// 32px step, used for small icon buttons and icon button radii
    Scale06,
    /// 40px step, used for medium icon buttons
    Scale07,
}

impl TypographyToken {
    pub fn name(self) -> &'static str {
        match self {
            Self::BodyFontFamily => "body-font-family",
            Self::BodySizeMedium => "body-size-medium",
            Self::BodyFontWeightRegular => "body-font-weight-regular",
            Self::Scale06 => "scale-06",
            Self::Scale07 => "scale-07",
        }
    }

    pub fn fallback(self) -> Option<&'static str> {
        match self {
            Self::BodyFontFamily => None,
            Self::BodySizeMedium => Some("16px"),
            Self::BodyFontWeightRegular => Some("400"),
            Self::Scale06 => Some("32px"),
            Self::Scale07 => Some("40px"),
        }
    }

    pub fn var(self) -> String {
        match self.fallback() {
            Some(fallback) => format!("var(--sds-typography-{}, {})", self.name(), fallback),
            None => format!("var(--sds-typography-{})", self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_references() {
        assert_eq!(
            ColorToken::BackgroundBrandDefault.var(),
            "var(--sds-color-background-brand-default)"
        );
        assert_eq!(
            ColorToken::BorderDisabledDefault.var_or("#b3b3b3"),
            "var(--sds-color-border-disabled-default, #b3b3b3)"
        );
    }

    #[test]
    fn size_references_carry_fallbacks() {
        assert_eq!(SizeToken::Space300.var(), "var(--sds-size-space-300, 12px)");
        assert_eq!(SizeToken::StrokeBorder.var(), "var(--sds-size-stroke-border, 1px)");
    }

    #[test]
    fn typography_fallback_is_optional() {
        assert_eq!(
            TypographyToken::BodyFontFamily.var(),
            "var(--sds-typography-body-font-family)"
        );
        assert_eq!(TypographyToken::Scale07.var(), "var(--sds-typography-scale-07, 40px)");
    }
}
