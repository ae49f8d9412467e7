//! # Views
//!
//! The three orthogonal viewing directions of a shadow cube.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three projection directions, each owning its own grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum View {
    Top,
    Front,
    Side,
}

impl View {
    /// All views in the order meshes are exported.
    pub const EXPORT_ORDER: [View; 3] = [View::Front, View::Side, View::Top];

    /// Display name, also used as the stem of exported mesh files.
    pub fn name(self) -> &'static str {
        match self {
            View::Top => "Top",
            View::Front => "Front",
            View::Side => "Side",
        }
    }

    /// File name for this view with the given extension.
    ///
    /// ```rust
    /// use shadow_grid::View;
    ///
    /// assert_eq!(View::Front.file_name("stl"), "Front.stl");
    /// ```
    pub fn file_name(self, extension: &str) -> String {
        format!("{}.{}", self.name(), extension)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_order() {
        assert_eq!(View::EXPORT_ORDER, [View::Front, View::Side, View::Top]);
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&View::Side).unwrap();
        assert_eq!(json, "\"Side\"");
        let view: View = serde_json::from_str("\"Top\"").unwrap();
        assert_eq!(view, View::Top);
    }

    #[test]
    fn test_display_matches_name() {
        for view in View::EXPORT_ORDER {
            assert_eq!(view.to_string(), view.name());
        }
    }
}
