//! Destructive-action button
//!
//! Same layout and interaction as [`Button`](crate::button::Button), with the
//! danger palette and no full-width option.

use crate::button::{button_element, ButtonContent};
use crate::context::WidgetContext;
use crate::element::{Element, Node};
use crate::interaction::InteractionTracker;
use crate::props::{DangerVariant, EventHandlers, ExtraAttributes, Size, VisualState};
use crate::resolve::button_danger_style;
use crate::style::StyleRecord;
use crate::widget::{Widget, WidgetId};
use sds_core::events::Event;

/// ButtonDanger widget
pub struct ButtonDanger {
    id: WidgetId,
    content: ButtonContent,
    variant: DangerVariant,
    size: Size,
    disabled: bool,
    class_name: String,
    style: StyleRecord,
    attributes: ExtraAttributes,
    handlers: EventHandlers,
    tracker: InteractionTracker,
}

impl ButtonDanger {
    pub fn new(ctx: &mut WidgetContext) -> Self {
        Self {
            id: ctx.register(),
            content: ButtonContent::default(),
            variant: DangerVariant::default(),
            size: Size::default(),
            disabled: false,
            class_name: String::new(),
            style: StyleRecord::new(),
            attributes: ExtraAttributes::new(),
            handlers: EventHandlers::default(),
            tracker: InteractionTracker::default(),
        }
    }

    pub fn with_label(ctx: &mut WidgetContext, label: impl Into<String>) -> Self {
        Self::new(ctx).label(label)
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.content.label = label.into();
        self
    }

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

    pub fn variant(mut self, variant: DangerVariant) -> Self {
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
        button_danger_style(self.variant, self.effective_state(), self.size).merge(&self.style)
    }
}

impl Widget for ButtonDanger {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn build(&self, _ctx: &WidgetContext) -> Element {
        let disabled = self.tracker.is_disabled();
        button_element(
            self.computed_style(),
            disabled,
            &self.class_name,
            &self.attributes,
        )
        .children(self.content.render(disabled))
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

#[cfg(test)]
mod tests {
    use super::*;
    use sds_core::events::event_types;
    use sds_theme::{ColorModePreference, MemoryStore, PreferenceConfig, RootMarker};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn context() -> WidgetContext {
        WidgetContext::new(Arc::new(ColorModePreference::new(
            PreferenceConfig::default(),
            Box::new(MemoryStore::new()),
            Arc::new(RootMarker::new()),
        )))
    }

    #[test]
    fn subtle_hover_uses_tertiary_danger_background() {
        let mut ctx = context();
        let mut button = ButtonDanger::with_label(&mut ctx, "Delete").variant(DangerVariant::Subtle);
        let target = button.id().target();
        button.handle_event(&mut ctx, &Event::new(event_types::POINTER_ENTER, target));

        let element = button.build(&ctx);
        assert_eq!(
            element.style.get_str("background-color"),
            Some("var(--sds-color-background-danger-tertiary-hover)")
        );
        assert_eq!(element.text_content(), "Delete");
    }

    #[test]
    fn disabled_swallows_clicks() {
        let mut ctx = context();
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();
        let mut button = ButtonDanger::new(&mut ctx)
            .state(VisualState::Disabled)
            .on_click(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        let target = button.id().target();

        button.handle_event(&mut ctx, &Event::new(event_types::CLICK, target));
        assert_eq!(clicks.load(Ordering::SeqCst), 0);

        button.set_props(VisualState::Default, false);
        button.handle_event(&mut ctx, &Event::new(event_types::CLICK, target));
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn disabled_render_matches_for_flag_and_prop() {
        let mut ctx = context();
        let by_flag = ButtonDanger::new(&mut ctx).disabled(true).build(&ctx);
        let by_prop = ButtonDanger::new(&mut ctx)
            .state(VisualState::Disabled)
            .build(&ctx);
        assert_eq!(by_flag.to_html(), by_prop.to_html());
    }
}
