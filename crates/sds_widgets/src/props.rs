//! Component props
//!
//! Enumerations for variant, state, size and alignment, plus the two
//! pass-through bags: extra element attributes and caller event handlers.
//!
//! Every enumeration parses leniently from its prop string. Unrecognized
//! strings are not errors; callers get `None` and fall back to a default.

use indexmap::IndexMap;
use sds_core::events::Event;

macro_rules! prop_enum {
    (
        $(#[$meta:meta])*
        $name:ident (default $default:ident) {
            $($variant:ident => $literal:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $name {
            /// Prop literal
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $literal),+
                }
            }

            /// All members in declaration order
            pub fn all() -> &'static [$name] {
                &[$(Self::$variant),+]
            }

            /// Parse a prop literal, `None` when unrecognized
            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($literal => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Parse a prop literal, logging and defaulting when unrecognized
            pub fn parse_or_default(value: &str) -> Self {
                Self::parse(value).unwrap_or_else(|| {
                    tracing::debug!(
                        "unrecognized {} {:?}, using {:?}",
                        stringify!($name),
                        value,
                        Self::default()
                    );
                    Self::default()
                })
            }
        }
    };
}

prop_enum! {
    /// Visual category of Button and IconButton
    ButtonVariant (default Primary) { Primary => "Primary", Neutral => "Neutral", Subtle => "Subtle" }
}

prop_enum! {
    /// Visual category of ButtonDanger
    DangerVariant (default Primary) { Primary => "Primary", Subtle => "Subtle" }
}

prop_enum! {
    /// Color treatment state, shared by every button kind
    VisualState (default Default) { Default => "Default", Hover => "Hover", Disabled => "Disabled" }
}

prop_enum! {
    /// Button size
    Size (default Medium) { Medium => "Medium", Small => "Small" }
}

prop_enum! {
    /// ButtonGroup layout
    Alignment (default Justify) {
        Justify => "Justify",
        Start => "Start",
        End => "End",
        Center => "Center",
        Stack => "Stack",
    }
}

/// Unvalidated element attributes forwarded verbatim
///
/// Applied after a component's own attributes, so a caller entry with the
/// same name wins. `disabled` is the exception: buttons derive it from
/// their state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtraAttributes {
    entries: IndexMap<String, String>,
}

impl ExtraAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an attribute
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Caller event handler
pub type Handler = Box<dyn FnMut(&Event) + Send>;

/// Caller-supplied event handlers
#[derive(Default)]
pub struct EventHandlers {
    pub on_pointer_enter: Option<Handler>,
    pub on_pointer_leave: Option<Handler>,
    pub on_click: Option<Handler>,
}

impl EventHandlers {
    pub(crate) fn pointer_enter(&mut self, event: &Event) {
        if let Some(handler) = self.on_pointer_enter.as_mut() {
            handler(event);
        }
    }

    pub(crate) fn pointer_leave(&mut self, event: &Event) {
        if let Some(handler) = self.on_pointer_leave.as_mut() {
            handler(event);
        }
    }

    pub(crate) fn click(&mut self, event: &Event) {
        if let Some(handler) = self.on_click.as_mut() {
            handler(event);
        }
    }
}
