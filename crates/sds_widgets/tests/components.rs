//! End-to-end component behavior: resolution, interaction and mode changes

use pretty_assertions::assert_eq;
use sds_core::events::{event_types, Event};
use sds_theme::{ColorMode, ColorModePreference, MemoryStore, PreferenceConfig, RootMarker};
use sds_widgets::prelude::*;
use sds_widgets::resolve::{button_style, icon_button_style};
use sds_widgets::{resolve_named, ComponentKind};
use std::sync::Arc;

fn context() -> WidgetContext {
    let preference = ColorModePreference::new(
        PreferenceConfig::default(),
        Box::new(MemoryStore::new()),
        Arc::new(RootMarker::new()),
    );
    WidgetContext::new(Arc::new(preference))
}

fn enter(widget: &mut impl Widget, ctx: &mut WidgetContext) {
    let event = Event::new(event_types::POINTER_ENTER, widget.id().target());
    widget.handle_event(ctx, &event);
}

fn leave(widget: &mut impl Widget, ctx: &mut WidgetContext) {
    let event = Event::new(event_types::POINTER_LEAVE, widget.id().target());
    widget.handle_event(ctx, &event);
}

#[test]
fn primary_hover_changes_colors_keeps_spacing() {
    let hover = resolve_named(ComponentKind::Button, "Primary", "Hover", "Medium");
    let default = resolve_named(ComponentKind::Button, "Primary", "Default", "Medium");

    assert_ne!(hover.get("background-color"), default.get("background-color"));
    assert_eq!(hover.get("padding"), default.get("padding"));
    assert_eq!(hover.get("gap"), default.get("gap"));
}

#[test]
fn hovering_a_disabled_prop_button_stays_disabled() {
    let mut ctx = context();
    let mut button = Button::new(&mut ctx).state(VisualState::Disabled);

    enter(&mut button, &mut ctx);
    assert_eq!(button.effective_state(), VisualState::Disabled);
    assert!(!ctx.is_dirty(button.id()));

    let element = button.build(&ctx);
    assert_eq!(element.style.get_str("cursor"), Some("not-allowed"));
    assert!(element.has_attribute("disabled"));
}

#[test]
fn disabled_output_independent_of_source() {
    let mut ctx = context();
    for &variant in ButtonVariant::all() {
        for &size in Size::all() {
            let by_flag = Button::new(&mut ctx).variant(variant).size(size).disabled(true);
            let by_prop = Button::new(&mut ctx)
                .variant(variant)
                .size(size)
                .state(VisualState::Disabled);
            assert_eq!(by_flag.build(&ctx).to_html(), by_prop.build(&ctx).to_html());

            let by_flag = IconButton::new(&mut ctx).variant(variant).size(size).disabled(true);
            assert_eq!(
                by_flag.computed_style(),
                icon_button_style(variant, VisualState::Disabled, size)
            );
        }
    }
}

#[test]
fn hover_then_leave_restores_prop_state() {
    let mut ctx = context();
    let mut button = Button::new(&mut ctx).variant(ButtonVariant::Subtle);

    enter(&mut button, &mut ctx);
    assert_eq!(
        button.computed_style(),
        button_style(ButtonVariant::Subtle, VisualState::Hover, Size::Medium)
    );

    leave(&mut button, &mut ctx);
    assert_eq!(
        button.computed_style(),
        button_style(ButtonVariant::Subtle, VisualState::Default, Size::Medium)
    );
}

#[test]
fn group_routes_events_to_its_buttons() {
    let mut ctx = context();
    let mut group = ButtonGroup::new(&mut ctx).align(Alignment::Center);
    let end = group.end().widget_id().unwrap();

    group.handle_event(&mut ctx, &Event::new(event_types::POINTER_ENTER, end.target()));
    assert!(ctx.is_dirty(end));

    let element = group.build(&ctx);
    let buttons = element.find_all("button");
    assert_eq!(buttons[0].style.get_str("background-color"), Some("transparent"));
    assert_eq!(
        buttons[1].style.get_str("background-color"),
        Some("var(--sds-color-background-brand-hover)")
    );

    // The group's own id is not a button
    enter(&mut group, &mut ctx);
    assert_eq!(group.build(&ctx), element);
}

#[test]
fn selector_click_updates_marker_and_dirties_mounted_widgets() {
    let mut ctx = context();
    let mut selector = ColorModeSelector::new(&mut ctx);
    let button = Button::with_label(&mut ctx, "Themed");
    ctx.mount(selector.id());
    ctx.mount(button.id());

    let target = selector.option_id(ColorMode::BrandBLight).unwrap().target();
    selector.handle_event(&mut ctx, &Event::new(event_types::CLICK, target));

    assert_eq!(
        ctx.marker().get_attribute("data-color-mode").as_deref(),
        Some("brand-b-light")
    );
    ctx.flush_mutations();

    assert!(ctx.is_dirty(selector.id()));
    assert!(ctx.is_dirty(button.id()));
    assert_eq!(ctx.observed_mode(button.id()).as_deref(), Some("brand-b-light"));
}

#[test]
fn unmounted_widget_is_not_rebuilt_on_mode_change() {
    let mut ctx = context();
    let mut button = Button::new(&mut ctx);
    let mut other = IconButton::new(&mut ctx);
    for widget in [&mut button as &mut dyn Widget, &mut other] {
        let event = Event::new(event_types::MOUNT, widget.id().target());
        widget.handle_event(&mut ctx, &event);
    }
    let unmount = Event::new(event_types::UNMOUNT, button.id().target());
    button.handle_event(&mut ctx, &unmount);
    assert!(!ctx.is_mounted(button.id()));

    ctx.preference().set(ColorMode::SdsDark);
    ctx.flush_mutations();

    assert_eq!(ctx.take_dirty(), vec![other.id()]);
}

#[test]
fn two_quick_sets_leave_final_mode() {
    let mut ctx = context();
    let button = Button::new(&mut ctx);
    ctx.mount(button.id());

    ctx.preference().set(ColorMode::SdsDark);
    ctx.preference().set(ColorMode::BrandBLight);
    ctx.flush_mutations();

    assert_eq!(ctx.observed_mode(button.id()).as_deref(), Some("brand-b-light"));
    assert_eq!(ctx.color_mode(), ColorMode::BrandBLight);
}

#[test]
fn page_html_is_well_formed() {
    let mut ctx = context();
    let group = ButtonGroup::new(&mut ctx)
        .align(Alignment::Stack)
        .start_widget(ButtonDanger::with_label(&mut ctx, "Delete <all>"));
    let html = group.build(&ctx).to_html();

    assert!(html.contains("Delete &lt;all&gt;"));
    assert_eq!(html.matches("<button").count(), html.matches("</button>").count());
    assert!(html.starts_with("<div style=\"display: flex; align-items: flex-start;"));
}
