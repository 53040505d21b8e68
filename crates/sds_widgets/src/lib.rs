//! SDS Widget Library
//!
//! Button components with state-machine driven hover tracking and style
//! records resolved from design tokens.
//!
//! # Components
//!
//! - [`Button`], [`ButtonDanger`], [`IconButton`]
//! - [`ButtonGroup`] for start/end button pairs
//! - [`ColorModeSelector`] for switching the active color mode
//!
//! Styles are plain [`StyleRecord`]s built by the [`resolve`] module from
//! (variant, state, size). Components render an [`Element`] tree that hosts
//! can walk or serialize with [`Element::to_html`].
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use sds_theme::{ColorModePreference, PreferenceConfig, RootMarker};
//! use sds_widgets::prelude::*;
//!
//! let marker = Arc::new(RootMarker::new());
//! let preference = Arc::new(ColorModePreference::from_config(PreferenceConfig::default(), marker));
//! let mut ctx = WidgetContext::new(preference);
//!
//! let button = Button::with_label(&mut ctx, "Save").variant(ButtonVariant::Neutral);
//! let html = button.build(&ctx).to_html();
//! assert!(html.starts_with("<button type=\"button\""));
//! ```

pub mod button;
pub mod button_danger;
pub mod button_group;
pub mod color_mode_selector;
pub mod context;
pub mod element;
pub mod icon_button;
pub mod interaction;
pub mod props;
pub mod resolve;
pub mod style;
pub mod widget;

pub use button::Button;
pub use button_danger::ButtonDanger;
pub use button_group::{ButtonGroup, SlotContent};
pub use color_mode_selector::ColorModeSelector;
pub use context::WidgetContext;
pub use element::{Element, Node};
pub use icon_button::IconButton;
pub use interaction::InteractionTracker;
pub use props::{
    Alignment, ButtonVariant, DangerVariant, EventHandlers, ExtraAttributes, Handler, Size,
    VisualState,
};
pub use resolve::{resolve, resolve_named, ComponentKind, StyleRequest};
pub use style::{StyleRecord, StyleValue};
pub use widget::{Widget, WidgetId};

/// Common imports
pub mod prelude {
    pub use crate::button::Button;
    pub use crate::button_danger::ButtonDanger;
    pub use crate::button_group::ButtonGroup;
    pub use crate::color_mode_selector::ColorModeSelector;
    pub use crate::context::WidgetContext;
    pub use crate::element::{Element, Node};
    pub use crate::icon_button::IconButton;
    pub use crate::props::{Alignment, ButtonVariant, DangerVariant, Size, VisualState};
    pub use crate::style::StyleRecord;
    pub use crate::widget::{Widget, WidgetId};
}
