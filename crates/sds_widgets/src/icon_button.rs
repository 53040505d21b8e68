//! Icon-only button

use crate::button::button_element;
use crate::context::WidgetContext;
use crate::element::{Element, Node};
use crate::interaction::InteractionTracker;
use crate::props::{ButtonVariant, EventHandlers, ExtraAttributes, Size, VisualState};
use crate::resolve::icon_button_style;
use crate::style::StyleRecord;
use crate::widget::{Widget, WidgetId};
use sds_core::events::Event;

/// Side length of the default icon placeholder
const ICON_PLACEHOLDER_SIZE: &str = "20px";

/// IconButton widget
pub struct IconButton {
    id: WidgetId,
    icon: Option<Node>,
    aria_label: Option<String>,
    variant: ButtonVariant,
    size: Size,
    disabled: bool,
    class_name: String,
    style: StyleRecord,
    attributes: ExtraAttributes,
    handlers: EventHandlers,
    tracker: InteractionTracker,
}

impl IconButton {
    pub fn new(ctx: &mut WidgetContext) -> Self {
        Self {
            id: ctx.register(),
            icon: None,
            aria_label: None,
            variant: ButtonVariant::default(),
            size: Size::default(),
            disabled: false,
            class_name: String::new(),
            style: StyleRecord::new(),
            attributes: ExtraAttributes::new(),
            handlers: EventHandlers::default(),
            tracker: InteractionTracker::default(),
        }
    }

    pub fn icon(mut self, icon: impl Into<Node>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Accessible name, since there is no visible label
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn state(mut self, state: VisualState) -> Self {
        self.tracker.set_props(state, self.disabled);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self.tracker.set_props(self.tracker.prop_state(), disabled);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn style(mut self, style: StyleRecord) -> Self {
        self.style = style;
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    pub fn on_pointer_enter<F: FnMut(&Event) + Send + 'static>(mut self, handler: F) -> Self {
        self.handlers.on_pointer_enter = Some(Box::new(handler));
        self
    }

    pub fn on_pointer_leave<F: FnMut(&Event) + Send + 'static>(mut self, handler: F) -> Self {
        self.handlers.on_pointer_leave = Some(Box::new(handler));
        self
    }

    pub fn on_click<F: FnMut(&Event) + Send + 'static>(mut self, handler: F) -> Self {
        self.handlers.on_click = Some(Box::new(handler));
        self
    }

    pub fn set_props(&mut self, state: VisualState, disabled: bool) {
        self.disabled = disabled;
        self.tracker.set_props(state, disabled);
    }

    pub fn effective_state(&self) -> VisualState {
        self.tracker.effective_state()
    }

    pub fn computed_style(&self) -> StyleRecord {
        icon_button_style(self.variant, self.effective_state(), self.size).merge(&self.style)
    }
}

fn icon_placeholder() -> Node {
    Element::new("span")
        .style(
            StyleRecord::new()
                .set("width", ICON_PLACEHOLDER_SIZE)
                .set("height", ICON_PLACEHOLDER_SIZE)
                .set("display", "flex")
                .set("align-items", "center")
                .set("justify-content", "center"),
        )
        .into()
}

impl Widget for IconButton {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn build(&self, _ctx: &WidgetContext) -> Element {
        let mut attributes = ExtraAttributes::new();
        if let Some(label) = &self.aria_label {
            attributes.set("aria-label", label.clone());
        }
        for (name, value) in self.attributes.iter() {
            attributes.set(name, value);
        }

        button_element(
            self.computed_style(),
            self.tracker.is_disabled(),
            &self.class_name,
            &attributes,
        )
        .child(self.icon.clone().unwrap_or_else(icon_placeholder))
    }

    fn handle_event(&mut self, ctx: &mut WidgetContext, event: &Event) {
        if event.target != self.id.target() || ctx.apply_lifecycle(self.id, event) {
            return;
        }
        if self.tracker.dispatch(&mut self.handlers, event) {
            ctx.mark_dirty(self.id);
        }
    }
}
