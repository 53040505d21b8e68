//! SDS Theme
//!
//! Color-mode preference and design token references for SDS components.
//!
//! # Overview
//!
//! - **Color modes**: [`ColorMode`] (`sds-light`, `sds-dark`, `brand-b-light`)
//! - **Root marker**: [`RootMarker`], the shared attribute holder that
//!   stylesheets scope on and components observe
//! - **Preference service**: [`ColorModePreference`], persisted through a
//!   [`PreferenceStore`] and mirrored onto the marker
//! - **Tokens**: CSS `var()` references consumed as opaque strings
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use sds_theme::{ColorMode, ColorModePreference, PreferenceConfig, RootMarker};
//!
//! let marker = Arc::new(RootMarker::new());
//! let preference = ColorModePreference::from_config(PreferenceConfig::default(), marker.clone());
//!
//! preference.set(ColorMode::SdsDark);
//! assert_eq!(marker.get_attribute("data-color-mode").as_deref(), Some("sds-dark"));
//! ```

pub mod config;
pub mod error;
pub mod marker;
pub mod mode;
pub mod preference;
pub mod storage;
pub mod tokens;

pub use config::{PreferenceConfig, DEFAULT_MARKER_ATTRIBUTE, DEFAULT_STORAGE_KEY};
pub use error::{Result, ThemeError};
pub use marker::{MarkerObserver, MutationRecord, ObserverId, RootMarker};
pub use mode::ColorMode;
pub use preference::{bootstrap_marker, ColorModePreference};
pub use storage::{FileStore, MemoryStore, PreferenceStore, UnavailableStore};
pub use tokens::{ColorToken, SizeToken, TypographyToken};
