//! Button group
//!
//! Lays out up to two buttons (start and end) in a fixed-width row or
//! column. Each slot is wrapped in a `<div>` whose style depends on the
//! alignment and on whether the slot holds the default button or caller
//! content. Without caller content the start slot is a Subtle button and the
//! end slot a Primary one.

use crate::button::Button;
use crate::context::WidgetContext;
use crate::element::{Element, Node};
use crate::props::{Alignment, ButtonVariant, Size};
use crate::resolve::{button_group_style, group_slot_style, GroupSlot};
use crate::style::StyleRecord;
use crate::widget::{Widget, WidgetId};
use sds_core::events::Event;

/// Contents of one group slot
pub enum SlotContent {
    /// The group's own button
    Default(Button),
    /// Caller widget, receives routed events
    Widget(Box<dyn Widget + Send>),
    /// Caller markup
    Node(Node),
}

impl SlotContent {
    fn is_custom(&self) -> bool {
        !matches!(self, SlotContent::Default(_))
    }

    fn build(&self, ctx: &WidgetContext) -> Node {
        match self {
            SlotContent::Default(button) => button.build(ctx).into(),
            SlotContent::Widget(widget) => widget.build(ctx).into(),
            SlotContent::Node(node) => node.clone(),
        }
    }

    /// Id of the widget in the slot, if any
    pub fn widget_id(&self) -> Option<WidgetId> {
        match self {
            SlotContent::Default(button) => Some(button.id()),
            SlotContent::Widget(widget) => Some(widget.id()),
            SlotContent::Node(_) => None,
        }
    }

    fn handle_event(&mut self, ctx: &mut WidgetContext, event: &Event) {
        match self {
            SlotContent::Default(button) => button.handle_event(ctx, event),
            SlotContent::Widget(widget) => widget.handle_event(ctx, event),
            SlotContent::Node(_) => {}
        }
    }
}

/// ButtonGroup widget
pub struct ButtonGroup {
    id: WidgetId,
    align: Alignment,
    show_start: bool,
    show_end: bool,
    start: SlotContent,
    end: SlotContent,
    class_name: String,
    style: StyleRecord,
}

impl ButtonGroup {
    pub fn new(ctx: &mut WidgetContext) -> Self {
        let start = Button::new(ctx)
            .variant(ButtonVariant::Subtle)
            .size(Size::Medium);
        let end = Button::new(ctx)
            .variant(ButtonVariant::Primary)
            .size(Size::Medium);

        Self {
            id: ctx.register(),
            align: Alignment::default(),
            show_start: true,
            show_end: true,
            start: SlotContent::Default(start),
            end: SlotContent::Default(end),
            class_name: String::new(),
            style: StyleRecord::new(),
        }
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Show or hide the start slot
    pub fn button_start(mut self, show: bool) -> Self {
        self.show_start = show;
        self
    }

    /// Show or hide the end slot
    pub fn button_end(mut self, show: bool) -> Self {
        self.show_end = show;
        self
    }

    /// Replace the default start button with a caller widget
    pub fn start_widget(mut self, widget: impl Widget + Send + 'static) -> Self {
        self.start = SlotContent::Widget(Box::new(widget));
        self
    }

    /// Replace the default end button with a caller widget
    pub fn end_widget(mut self, widget: impl Widget + Send + 'static) -> Self {
        self.end = SlotContent::Widget(Box::new(widget));
        self
    }

    /// Replace the default start button with caller markup
    pub fn start_node(mut self, node: impl Into<Node>) -> Self {
        self.start = SlotContent::Node(node.into());
        self
    }

    /// Replace the default end button with caller markup
    pub fn end_node(mut self, node: impl Into<Node>) -> Self {
        self.end = SlotContent::Node(node.into());
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

    pub fn start(&self) -> &SlotContent {
        &self.start
    }

    pub fn end(&self) -> &SlotContent {
        &self.end
    }

    pub fn computed_style(&self) -> StyleRecord {
        button_group_style(self.align).merge(&self.style)
    }

    fn wrap(&self, slot: GroupSlot, content: &SlotContent, ctx: &WidgetContext) -> Node {
        Element::new("div")
            .style(group_slot_style(self.align, slot, content.is_custom()))
            .child(content.build(ctx))
            .into()
    }
}

impl Widget for ButtonGroup {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn build(&self, ctx: &WidgetContext) -> Element {
        let mut element = Element::new("div");
        if !self.class_name.is_empty() {
            element = element.attr("class", self.class_name.clone());
        }
        element = element.style(self.computed_style());

        if self.show_start {
            element = element.child(self.wrap(GroupSlot::Start, &self.start, ctx));
        }
        if self.show_end {
            element = element.child(self.wrap(GroupSlot::End, &self.end, ctx));
        }
        element
    }

    fn handle_event(&mut self, ctx: &mut WidgetContext, event: &Event) {
        if event.target == self.id.target() {
            ctx.apply_lifecycle(self.id, event);
            return;
        }
        if self.show_start {
            self.start.handle_event(ctx, event);
        }
        if self.show_end {
            self.end.handle_event(ctx, event);
        }
    }
}
