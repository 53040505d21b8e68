//! Color mode selector
//!
//! A caption followed by one small button per [`ColorMode`]. The button for
//! the active mode renders Primary, the rest Subtle. The active mode is read
//! from the service at build time, so a rebuild after a marker mutation
//! always reflects the current mode.

use crate::button::Button;
use crate::context::WidgetContext;
use crate::element::Element;
use crate::props::{ButtonVariant, Size};
use crate::style::StyleRecord;
use crate::widget::{Widget, WidgetId};
use sds_core::events::Event;
use sds_theme::{ColorMode, ColorToken};

const CAPTION: &str = "Color Mode:";

/// ColorModeSelector widget
pub struct ColorModeSelector {
    id: WidgetId,
    options: Vec<(ColorMode, Button)>,
}

impl ColorModeSelector {
    pub fn new(ctx: &mut WidgetContext) -> Self {
        let id = ctx.register();
        let options = ColorMode::all()
            .iter()
            .map(|&mode| {
                let preference = ctx.preference().clone();
                let button = Button::with_label(ctx, mode.display_name())
                    .size(Size::Small)
                    .on_click(move |_| preference.set(mode));
                (mode, button)
            })
            .collect();

        Self { id, options }
    }

    /// Widget id of the button for `mode`
    pub fn option_id(&self, mode: ColorMode) -> Option<WidgetId> {
        self.options
            .iter()
            .find(|(m, _)| *m == mode)
            .map(|(_, button)| button.id())
    }

    fn container_style() -> StyleRecord {
        StyleRecord::new()
            .set("display", "flex")
            .set("gap", "0.5rem")
            .set("align-items", "center")
            .set("padding", "1rem")
            .set("background-color", ColorToken::BackgroundDefaultSecondary.var())
            .set("border-radius", "var(--radius-md)")
            .set("margin-bottom", "2rem")
            .set("transition", "background-color 0.2s ease-in-out")
    }

    fn caption_style() -> StyleRecord {
        StyleRecord::new()
            .set("font-size", "var(--font-size-sm)")
            .set("font-weight", "var(--font-weight-medium)")
            .set("color", ColorToken::PageTextSecondary.var())
            .set("margin-right", "0.5rem")
            .set("transition", "color 0.2s ease-in-out")
    }
}

impl Widget for ColorModeSelector {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn build(&self, ctx: &WidgetContext) -> Element {
        let active = ctx.color_mode();

        let mut element = Element::new("div")
            .style(Self::container_style())
            .child(Element::new("span").style(Self::caption_style()).child(CAPTION));

        for (mode, button) in &self.options {
            let variant = if *mode == active {
                ButtonVariant::Primary
            } else {
                ButtonVariant::Subtle
            };
            element = element.child(button.build_as(variant));
        }
        element
    }

    fn handle_event(&mut self, ctx: &mut WidgetContext, event: &Event) {
        if event.target == self.id.target() {
            ctx.apply_lifecycle(self.id, event);
            return;
        }
        for (_, button) in &mut self.options {
            button.handle_event(ctx, event);
        }
    }
}
