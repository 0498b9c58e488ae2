//! Built-in theme catalog
//!
//! Six gradient themes compiled into every display build. The catalog is
//! process-wide constant state: nothing is added, removed, or renamed at
//! runtime, and the ordering is stable so gallery UIs render identically
//! on every platform.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A named gradient with start and end colors as `#RRGGBB` strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub start_color: String,
    pub end_color: String,
}

static BUILTIN: LazyLock<Vec<Theme>> = LazyLock::new(|| {
    vec![
        Theme::new("Purple Dream", "#667eea", "#764ba2"),
        Theme::new("Ocean Blue", "#2E3192", "#1BFFFF"),
        Theme::new("Sunset Orange", "#FF6B6B", "#FFD93D"),
        Theme::new("Forest Green", "#134E5E", "#71B280"),
        Theme::new("Rose Pink", "#F857A6", "#FF5858"),
        Theme::new("Midnight Dark", "#0F2027", "#2C5364"),
    ]
});

impl Theme {
    fn new(name: &str, start_color: &str, end_color: &str) -> Self {
        Self {
            name: name.to_string(),
            start_color: start_color.to_string(),
            end_color: end_color.to_string(),
        }
    }

    /// All built-in themes, in catalog order
    pub fn all() -> &'static [Theme] {
        BUILTIN.as_slice()
    }

    /// Exact, case-sensitive lookup by theme name
    pub fn find_by_name(name: &str) -> Option<&'static Theme> {
        BUILTIN.iter().find(|theme| theme.name == name)
    }
}
