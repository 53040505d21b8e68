//! Button widget
//!
//! A labelled `<button>` with optional start/end icons. Visual state comes
//! from the [`InteractionTracker`]; colors, spacing and cursor come from the
//! resolver. Caller style overrides are merged last.

use crate::context::WidgetContext;
use crate::element::{Element, Node};
use crate::interaction::InteractionTracker;
use crate::props::{ButtonVariant, EventHandlers, ExtraAttributes, Size, VisualState};
use crate::resolve::button_style;
use crate::style::StyleRecord;
use crate::widget::{Widget, WidgetId};
use sds_core::events::Event;

/// Label, icons and icon flags shared by Button and ButtonDanger
#[derive(Clone, Debug)]
pub(crate) struct ButtonContent {
    pub label: String,
    pub text: Option<String>,
    pub icon_start: Option<Node>,
    pub icon_end: Option<Node>,
    pub has_icon_start: bool,
    pub has_icon_end: bool,
}

impl Default for ButtonContent {
    fn default() -> Self {
        Self {
            label: "Button".to_string(),
            text: None,
            icon_start: None,
            icon_end: None,
            has_icon_start: false,
            has_icon_end: false,
        }
    }
}

impl ButtonContent {
    /// Icons are hidden while disabled; a requested icon with no content
    /// gets a 16px placeholder.
    pub fn render(&self, disabled: bool) -> Vec<Node> {
        let mut children = Vec::with_capacity(3);

        if !disabled && (self.has_icon_start || self.icon_start.is_some()) {
            children.push(self.icon_start.clone().unwrap_or_else(icon_placeholder));
        }

        let text = self
            .text
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(self.label.as_str());
        children.push(Element::new("span").child(text).into());

        if !disabled && (self.has_icon_end || self.icon_end.is_some()) {
            children.push(self.icon_end.clone().unwrap_or_else(icon_placeholder));
        }

        children
    }
}

fn icon_placeholder() -> Node {
    Element::new("span")
        .style(StyleRecord::new().set("width", "16px").set("height", "16px"))
        .into()
}

/// Outer `<button>` shared by every button kind
///
/// Extra attributes go on last. An extra `style` merges over the computed
/// style; an extra `disabled` is ignored, since the attribute has to agree
/// with the effective state.
pub(crate) fn button_element(
    style: StyleRecord,
    disabled: bool,
    class_name: &str,
    attributes: &ExtraAttributes,
) -> Element {
    let mut element = Element::new("button")
        .attr("type", "button")
        .flag("disabled", disabled)
        .style(style);
    if !class_name.is_empty() {
        element = element.attr("class", class_name);
    }
    for (name, value) in attributes.iter() {
        if name.eq_ignore_ascii_case("disabled") {
            tracing::debug!(
                "button: ignoring extra disabled={:?}, use the disabled prop",
                value
            );
            continue;
        }
        element = element.attr(name, value);
    }
    element
}

/// Button widget
pub struct Button {
    id: WidgetId,
    content: ButtonContent,
    variant: ButtonVariant,
    size: Size,
    disabled: bool,
    full_width: bool,
    class_name: String,
    style: StyleRecord,
    attributes: ExtraAttributes,
    handlers: EventHandlers,
    tracker: InteractionTracker,
}

impl Button {
    /// Create a Primary, Medium button labelled "Button"
    pub fn new(ctx: &mut WidgetContext) -> Self {
        Self {
            id: ctx.register(),
            content: ButtonContent::default(),
            variant: ButtonVariant::default(),
            size: Size::default(),
            disabled: false,
            full_width: false,
            class_name: String::new(),
            style: StyleRecord::new(),
            attributes: ExtraAttributes::new(),
            handlers: EventHandlers::default(),
            tracker: InteractionTracker::default(),
        }
    }

    /// Create a button with a label
    pub fn with_label(ctx: &mut WidgetContext, label: impl Into<String>) -> Self {
        Self::new(ctx).label(label)
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.content.label = label.into();
        self
    }

    /// Text shown instead of the label when non-empty
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content.text = Some(text.into());
        self
    }

    pub fn icon_start(mut self, icon: impl Into<Node>) -> Self {
        self.content.icon_start = Some(icon.into());
        self
    }

    pub fn icon_end(mut self, icon: impl Into<Node>) -> Self {
        self.content.icon_end = Some(icon.into());
        self
    }

    pub fn has_icon_start(mut self, show: bool) -> Self {
        self.content.has_icon_start = show;
        self
    }

    pub fn has_icon_end(mut self, show: bool) -> Self {
        self.content.has_icon_end = show;
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

    /// Stretch to the container width
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Caller style, merged over the resolved style
    pub fn style(mut self, style: StyleRecord) -> Self {
        self.style = style;
        self
    }

    /// Extra element attribute, applied after the button's own
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

    /// Update the state and disabled props between renders
    pub fn set_props(&mut self, state: VisualState, disabled: bool) {
        self.disabled = disabled;
        self.tracker.set_props(state, disabled);
    }

    /// State passed to the resolver on the next build
    pub fn effective_state(&self) -> VisualState {
        self.tracker.effective_state()
    }

    /// Resolved style with full width and caller overrides applied
    pub fn computed_style(&self) -> StyleRecord {
        self.style_as(self.variant)
    }

    fn style_as(&self, variant: ButtonVariant) -> StyleRecord {
        let mut style = button_style(variant, self.effective_state(), self.size);
        if self.full_width {
            style.insert("width", "100%");
        }
        style.merge(&self.style)
    }

    /// Render with `variant` in place of the configured one
    pub(crate) fn build_as(&self, variant: ButtonVariant) -> Element {
        let disabled = self.tracker.is_disabled();
        button_element(
            self.style_as(variant),
            disabled,
            &self.class_name,
            &self.attributes,
        )
        .children(self.content.render(disabled))
    }
}

impl Widget for Button {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn build(&self, _ctx: &WidgetContext) -> Element {
        self.build_as(self.variant)
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
