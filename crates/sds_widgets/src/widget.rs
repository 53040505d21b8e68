//! Base widget trait and types

use crate::context::WidgetContext;
use crate::element::Element;
use sds_core::events::Event;
use slotmap::{new_key_type, Key};

new_key_type! {
    pub struct WidgetId;
}

impl WidgetId {
    /// Event target value for this widget
    pub fn target(self) -> u64 {
        self.data().as_ffi()
    }
}

/// Base trait for all widgets
pub trait Widget {
    /// Get the widget's unique ID
    fn id(&self) -> WidgetId;

    /// Render the widget's element tree
    fn build(&self, ctx: &WidgetContext) -> Element;

    /// Handle an event targeted at this widget or one of its children
    fn handle_event(&mut self, ctx: &mut WidgetContext, event: &Event);
}
