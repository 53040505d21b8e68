//! Component gallery
//!
//! Renders the showcase page to stdout as HTML. Pass a config file (or a
//! directory holding `sds.toml`) as the first argument to persist the color
//! mode on disk; `--mode <literal>` switches the mode before rendering.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p sds_widgets --example gallery -- ./demo --mode sds-dark
//! ```

use anyhow::{Context, Result};
use sds_core::events::{event_types, Event};
use sds_theme::{bootstrap_marker, ColorMode, ColorModePreference, ColorToken, PreferenceConfig, RootMarker};
use sds_widgets::prelude::*;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let mut config = PreferenceConfig::default();
    let mut requested = None;
    while let Some(arg) = args.next() {
        if arg == "--mode" {
            let value = args.next().context("--mode needs a value")?;
            requested = Some(value.parse::<ColorMode>()?);
        } else {
            config = PreferenceConfig::load_from_path(Path::new(&arg))
                .with_context(|| format!("loading config from {}", arg))?;
        }
    }

    // Pre-render step: copy the persisted mode onto the root marker
    let marker = Arc::new(RootMarker::new());
    let store = config.open_store();
    let initial = bootstrap_marker(store.as_ref(), &marker, &config);
    tracing::info!("gallery: starting in {}", initial);

    let preference = Arc::new(ColorModePreference::new(config, store, marker.clone()));
    preference.mount();

    let mut ctx = WidgetContext::new(preference);
    let mut selector = ColorModeSelector::new(&mut ctx);
    ctx.mount(selector.id());

    if let Some(mode) = requested {
        // Drive the selector the way a pointer would
        if let Some(option) = selector.option_id(mode) {
            selector.handle_event(&mut ctx, &Event::new(event_types::CLICK, option.target()));
        }
        let delivered = ctx.flush_mutations();
        tracing::debug!("gallery: {} marker records delivered", delivered);
    }

    let page = build_page(&mut ctx, &selector);
    let mode = marker
        .get_attribute(&ctx.preference().config().marker_attribute)
        .unwrap_or_else(|| ColorMode::FALLBACK.as_str().to_string());

    println!("<!DOCTYPE html>");
    println!("<html lang=\"en\" data-color-mode=\"{}\">", mode);
    println!("<body>{}</body>", page.to_html());
    println!("</html>");
    Ok(())
}

fn heading(tag: &'static str, text: &str) -> Element {
    Element::new(tag)
        .style(
            StyleRecord::new()
                .set("color", ColorToken::PageTextPrimary.var())
                .set("transition", "color 0.2s ease-in-out"),
        )
        .child(text)
}

fn caption(text: &str) -> Element {
    Element::new("p")
        .style(
            StyleRecord::new()
                .set("margin-bottom", "0.5rem")
                .set("font-size", "var(--font-size-sm)")
                .set("color", ColorToken::PageTextSecondary.var()),
        )
        .child(text)
}

fn row(children: Vec<Element>) -> Element {
    Element::new("div")
        .style(
            StyleRecord::new()
                .set("display", "flex")
                .set("gap", "1rem")
                .set("flex-wrap", "wrap")
                .set("align-items", "center"),
        )
        .children(children.into_iter().map(Node::from))
}

fn build_page(ctx: &mut WidgetContext, selector: &ColorModeSelector) -> Element {
    let mut page = Element::new("main")
        .style(
            StyleRecord::new()
                .set("padding", "2rem")
                .set("background-color", ColorToken::PageBackground.var())
                .set("transition", "background-color 0.2s ease-in-out"),
        )
        .child(selector.build(ctx))
        .child(heading("h1", "Design System - Button Components"));

    // Button
    page = page.child(heading("h2", "Button"));
    let variants = ButtonVariant::all()
        .iter()
        .map(|&v| Button::with_label(ctx, v.as_str()).variant(v).build(ctx))
        .collect();
    page = page.child(caption("Variants (Medium)")).child(row(variants));

    for &variant in ButtonVariant::all() {
        let states = VisualState::all()
            .iter()
            .map(|&s| {
                Button::with_label(ctx, s.as_str())
                    .variant(variant)
                    .state(s)
                    .build(ctx)
            })
            .collect();
        page = page
            .child(caption(&format!("{} variant", variant.as_str())))
            .child(row(states));
    }

    let sizes = Size::all()
        .iter()
        .map(|&s| Button::with_label(ctx, s.as_str()).size(s).build(ctx))
        .collect();
    page = page.child(caption("Sizes")).child(row(sizes));

    let icons = vec![
        Button::with_label(ctx, "Start icon").has_icon_start(true).build(ctx),
        Button::with_label(ctx, "End icon").has_icon_end(true).build(ctx),
        Button::with_label(ctx, "Both icons")
            .has_icon_start(true)
            .has_icon_end(true)
            .build(ctx),
    ];
    page = page.child(caption("With icons")).child(row(icons));

    // ButtonDanger
    page = page.child(heading("h2", "ButtonDanger"));
    for &variant in DangerVariant::all() {
        let states = VisualState::all()
            .iter()
            .map(|&s| {
                ButtonDanger::with_label(ctx, s.as_str())
                    .variant(variant)
                    .state(s)
                    .build(ctx)
            })
            .collect();
        page = page
            .child(caption(&format!("{} variant", variant.as_str())))
            .child(row(states));
    }

    // IconButton
    page = page.child(heading("h2", "IconButton"));
    for &variant in ButtonVariant::all() {
        let buttons = Size::all()
            .iter()
            .flat_map(|&size| VisualState::all().iter().map(move |&state| (size, state)))
            .map(|(size, state)| {
                IconButton::new(ctx)
                    .variant(variant)
                    .size(size)
                    .state(state)
                    .aria_label(format!("{} {}", size.as_str(), state.as_str()))
                    .build(ctx)
            })
            .collect();
        page = page
            .child(caption(&format!("{} variant", variant.as_str())))
            .child(row(buttons));
    }

    // ButtonGroup
    page = page.child(heading("h2", "ButtonGroup"));
    for &align in Alignment::all() {
        let group = ButtonGroup::new(ctx).align(align).build(ctx);
        page = page.child(caption(align.as_str())).child(group);
    }
    let custom = ButtonGroup::new(ctx)
        .align(Alignment::Stack)
        .start_widget(ButtonDanger::with_label(ctx, "Delete"))
        .end_widget(Button::with_label(ctx, "Keep").variant(ButtonVariant::Neutral))
        .build(ctx);
    page.child(caption("Custom buttons")).child(custom)
}
