//! Style resolution
//!
//! Fixed lookup tables from (variant, state, size) to a [`StyleRecord`], one
//! table per component kind, plus the alignment table for button groups.
//!
//! The resolver is state-agnostic: callers pass the *effective* state
//! (Disabled over Hover over the prop, see [`InteractionTracker`]). Size only
//! touches spacing and dimension properties; variant and state only touch
//! colors and the cursor.
//!
//! [`InteractionTracker`]: crate::interaction::InteractionTracker

use crate::props::{Alignment, ButtonVariant, DangerVariant, Size, VisualState};
use crate::style::StyleRecord;
use sds_theme::tokens::{ColorToken, SizeToken, TypographyToken};

/// Component kinds with a style table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Button,
    ButtonDanger,
    IconButton,
    ButtonGroup,
}

/// Typed resolver input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleRequest {
    Button {
        variant: ButtonVariant,
        state: VisualState,
        size: Size,
    },
    ButtonDanger {
        variant: DangerVariant,
        state: VisualState,
        size: Size,
    },
    IconButton {
        variant: ButtonVariant,
        state: VisualState,
        size: Size,
    },
    ButtonGroup {
        align: Alignment,
    },
}

impl StyleRequest {
    pub fn kind(&self) -> ComponentKind {
        match self {
            StyleRequest::Button { .. } => ComponentKind::Button,
            StyleRequest::ButtonDanger { .. } => ComponentKind::ButtonDanger,
            StyleRequest::IconButton { .. } => ComponentKind::IconButton,
            StyleRequest::ButtonGroup { .. } => ComponentKind::ButtonGroup,
        }
    }
}

/// Resolve a typed request
pub fn resolve(request: StyleRequest) -> StyleRecord {
    match request {
        StyleRequest::Button {
            variant,
            state,
            size,
        } => button_style(variant, state, size),
        StyleRequest::ButtonDanger {
            variant,
            state,
            size,
        } => button_danger_style(variant, state, size),
        StyleRequest::IconButton {
            variant,
            state,
            size,
        } => icon_button_style(variant, state, size),
        StyleRequest::ButtonGroup { align } => button_group_style(align),
    }
}

/// Resolve raw prop strings
///
/// Unrecognized values degrade instead of failing: an unknown variant yields
/// the kind's base style, an unknown state resolves as Default, an unknown
/// size as Medium. For [`ComponentKind::ButtonGroup`] the `variant` argument
/// carries the alignment (unknown means Justify) and the rest is ignored.
pub fn resolve_named(kind: ComponentKind, variant: &str, state: &str, size: &str) -> StyleRecord {
    let props = || {
        (
            VisualState::parse_or_default(state),
            Size::parse_or_default(size),
        )
    };

    match kind {
        ComponentKind::ButtonGroup => button_group_style(Alignment::parse_or_default(variant)),
        ComponentKind::Button => {
            let (state, size) = props();
            match ButtonVariant::parse(variant) {
                Some(variant) => button_style(variant, state, size),
                None => {
                    tracing::debug!("Button: unrecognized variant {:?}, base style", variant);
                    button_base(state, size)
                }
            }
        }
        ComponentKind::ButtonDanger => {
            let (state, size) = props();
            match DangerVariant::parse(variant) {
                Some(variant) => button_danger_style(variant, state, size),
                None => {
                    tracing::debug!("ButtonDanger: unrecognized variant {:?}, base style", variant);
                    button_base(state, size)
                }
            }
        }
        ComponentKind::IconButton => {
            let (state, size) = props();
            match ButtonVariant::parse(variant) {
                Some(variant) => icon_button_style(variant, state, size),
                None => {
                    tracing::debug!("IconButton: unrecognized variant {:?}, base style", variant);
                    icon_button_base(None, state, size)
                }
            }
        }
    }
}

// ============================================================================
// Shared pieces
// ============================================================================

enum Border {
    Color(ColorToken),
    Literal(String),
    None,
}

/// Color treatment for one (variant, state) cell
struct Palette {
    background: String,
    border: Border,
    text: Option<ColorToken>,
}

impl Palette {
    fn new(background: ColorToken, border: ColorToken, text: ColorToken) -> Self {
        Self {
            background: background.var(),
            border: Border::Color(border),
            text: Some(text),
        }
    }

    fn transparent(border: Border, text: Option<ColorToken>) -> Self {
        Self {
            background: "transparent".to_string(),
            border,
            text,
        }
    }

    fn without_text(mut self) -> Self {
        self.text = None;
        self
    }

    fn apply(self, base: StyleRecord) -> StyleRecord {
        let mut style = base.set("background-color", self.background);
        match self.border {
            Border::Color(token) => style.insert("border-color", token.var()),
            Border::Literal(value) => style.insert("border-color", value),
            Border::None => style.insert("border", "none"),
        }
        if let Some(text) = self.text {
            style.insert("color", text.var());
        }
        style
    }
}

fn disabled_palette(text: ColorToken) -> Palette {
    Palette::new(
        ColorToken::BackgroundDisabledDefault,
        ColorToken::BorderDisabledDefault,
        text,
    )
}

fn padding(size: Size) -> String {
    match size {
        Size::Small => SizeToken::Space200.var(),
        Size::Medium => SizeToken::Space300.var(),
    }
}

fn cursor(state: VisualState) -> &'static str {
    match state {
        VisualState::Disabled => "not-allowed",
        VisualState::Default | VisualState::Hover => "pointer",
    }
}

fn stroke() -> String {
    format!("{} solid", SizeToken::StrokeBorder.var())
}

// ============================================================================
// Button and ButtonDanger
// ============================================================================

/// Base record shared by Button and ButtonDanger, before colors
pub fn button_base(state: VisualState, size: Size) -> StyleRecord {
    StyleRecord::new()
        .set("display", "flex")
        .set("align-items", "center")
        .set("justify-content", "center")
        .set("gap", SizeToken::Space200.var())
        .set("padding", padding(size))
        .set("border-radius", SizeToken::Radius200.var())
        .set("border", stroke())
        .set("font-family", TypographyToken::BodyFontFamily.var())
        .set("font-size", TypographyToken::BodySizeMedium.var())
        .set("font-weight", TypographyToken::BodyFontWeightRegular.var())
        .set("line-height", 1)
        .set("letter-spacing", 0)
        .set("cursor", cursor(state))
        .set("transition", "all 0.2s ease-in-out")
        .set("white-space", "nowrap")
}

pub fn button_style(variant: ButtonVariant, state: VisualState, size: Size) -> StyleRecord {
    use ButtonVariant::*;
    use ColorToken as C;
    use VisualState::*;

    let palette = match (variant, state) {
        (Primary | Neutral, Disabled) => disabled_palette(C::TextDisabledOnDisabled),
        (Primary, Hover) => Palette::new(
            C::BackgroundBrandHover,
            C::BorderBrandDefault,
            C::TextBrandOnBrand,
        ),
        (Primary, Default) => Palette::new(
            C::BackgroundBrandDefault,
            C::BorderBrandDefault,
            C::TextBrandOnBrand,
        ),
        (Neutral, Hover) => Palette::new(
            C::BackgroundNeutralTertiaryHover,
            C::BorderNeutralSecondary,
            C::TextDefaultDefault,
        ),
        (Neutral, Default) => Palette::new(
            C::BackgroundNeutralTertiary,
            C::BorderNeutralSecondary,
            C::TextDefaultDefault,
        ),
        (Subtle, Disabled) => disabled_palette(C::TextDisabledDefault),
        (Subtle, Hover) => Palette::transparent(
            Border::Color(C::BorderDefaultDefault),
            Some(C::TextDefaultDefault),
        ),
        (Subtle, Default) => Palette::transparent(Border::None, Some(C::TextNeutralDefault)),
    };

    palette.apply(button_base(state, size))
}

pub fn button_danger_style(variant: DangerVariant, state: VisualState, size: Size) -> StyleRecord {
    use ColorToken as C;
    use DangerVariant::*;
    use VisualState::*;

    let palette = match (variant, state) {
        (Primary, Disabled) => disabled_palette(C::TextDisabledOnDisabled),
        (Primary, Hover) => Palette::new(
            C::BackgroundDangerHover,
            C::BorderDangerDefault,
            C::TextDangerOnDanger,
        ),
        (Primary, Default) => Palette::new(
            C::BackgroundDangerDefault,
            C::BorderDangerSecondary,
            C::TextDangerOnDanger,
        ),
        // Subtle danger spells out literal fallbacks for the disabled pair
        (Subtle, Disabled) => Palette {
            background: C::BackgroundDisabledDefault.var_or("#d9d9d9"),
            border: Border::Literal(C::BorderDisabledDefault.var_or("#b3b3b3")),
            text: Some(C::TextDisabledDefault),
        },
        (Subtle, Hover) => Palette::new(
            C::BackgroundDangerTertiaryHover,
            C::BorderDangerDefault,
            C::TextDangerDefault,
        ),
        (Subtle, Default) => Palette::transparent(Border::None, Some(C::TextDangerDefault)),
    };

    palette.apply(button_base(state, size))
}

// ============================================================================
// IconButton
// ============================================================================

/// Square footprint of an icon button
pub fn icon_button_footprint(size: Size) -> String {
    match size {
        Size::Small => TypographyToken::Scale06.var(),
        Size::Medium => TypographyToken::Scale07.var(),
    }
}

/// Base record for IconButton, before colors
///
/// Subtle at Medium sizes itself with a fixed `width`/`height` and no
/// minimums. Every other combination, including an unknown variant, uses
/// `auto` dimensions with the footprint as minimum.
pub fn icon_button_base(variant: Option<ButtonVariant>, state: VisualState, size: Size) -> StyleRecord {
    let footprint = icon_button_footprint(size);
    let fixed = variant == Some(ButtonVariant::Subtle) && size == Size::Medium;

    let style = StyleRecord::new()
        .set("display", "flex")
        .set("align-items", "center")
        .set("justify-content", "center")
        .set("padding", padding(size))
        .set("border-radius", TypographyToken::Scale06.var())
        .set("border", stroke())
        .set("font-family", TypographyToken::BodyFontFamily.var())
        .set("cursor", cursor(state))
        .set("transition", "all 0.2s ease-in-out");

    if fixed {
        style
            .set("width", footprint.clone())
            .set("height", footprint)
    } else {
        style
            .set("width", "auto")
            .set("height", "auto")
            .set("min-width", footprint.clone())
            .set("min-height", footprint)
    }
}

pub fn icon_button_style(variant: ButtonVariant, state: VisualState, size: Size) -> StyleRecord {
    use ButtonVariant::*;
    use ColorToken as C;
    use VisualState::*;

    let palette = match (variant, state) {
        (_, Disabled) => disabled_palette(C::TextDisabledDefault).without_text(),
        (Primary, Hover) => Palette::new(
            C::BackgroundBrandHover,
            C::BorderBrandDefault,
            C::TextBrandOnBrand,
        )
        .without_text(),
        (Primary, Default) => Palette::new(
            C::BackgroundBrandDefault,
            C::BorderBrandDefault,
            C::TextBrandOnBrand,
        )
        .without_text(),
        (Neutral, Hover) => Palette::new(
            C::BackgroundDefaultSecondaryHover,
            C::BorderDefaultDefault,
            C::TextDefaultDefault,
        )
        .without_text(),
        (Neutral, Default) => Palette::new(
            C::BackgroundDefaultSecondary,
            C::BorderDefaultDefault,
            C::TextDefaultDefault,
        )
        .without_text(),
        (Subtle, Hover) => Palette {
            background: C::BackgroundDefaultDefaultHover.var(),
            border: Border::None,
            text: None,
        },
        (Subtle, Default) => Palette::transparent(Border::None, None),
    };

    palette.apply(icon_button_base(Some(variant), state, size))
}

// ============================================================================
// ButtonGroup
// ============================================================================

/// Which end of a button group a slot sits at
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupSlot {
    Start,
    End,
}

pub fn button_group_style(align: Alignment) -> StyleRecord {
    let base = StyleRecord::new()
        .set("display", "flex")
        .set("align-items", "center")
        .set("gap", SizeToken::Space400.var())
        .set("width", "240px");

    match align {
        Alignment::Start => base.set("justify-content", "flex-start"),
        Alignment::End => base.set("justify-content", "flex-end"),
        Alignment::Center => base.set("justify-content", "center"),
        Alignment::Stack => base
            .set("flex-direction", "column")
            .set("align-items", "flex-start"),
        Alignment::Justify => base.set("justify-content", "stretch"),
    }
}

/// Wrapper style around one slot of a button group
///
/// A caller-supplied start button is left unstyled under Stack, while the
/// default start button and both end buttons stretch to full width.
pub fn group_slot_style(align: Alignment, slot: GroupSlot, custom: bool) -> StyleRecord {
    match align {
        Alignment::Justify => StyleRecord::new().set("flex", "1 1 0").set("min-width", 0),
        Alignment::Stack if slot == GroupSlot::Start && custom => StyleRecord::new(),
        Alignment::Stack => StyleRecord::new().set("width", "100%"),
        Alignment::Start | Alignment::End | Alignment::Center => StyleRecord::new(),
    }
}
