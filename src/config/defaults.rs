//! Column-wide default settings

use serde::{Deserialize, Serialize};

/// Settings a `GridColumnBuilder` starts from
///
/// `Default` gives the built-in values: width 150, not movable,
/// read-only, empty placeholder. Missing fields in a layout file fall
/// back to the same values.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ColumnDefaults {
    /// Column width
    pub width: f64,
    /// Whether the user may drag the column to another position
    pub movable: bool,
    /// Whether cells of the column reject edits
    pub read_only: bool,
    /// Text shown in cells that hold no value
    pub place_holder: String,
}

impl Default for ColumnDefaults {
    fn default() -> Self {
        Self {
            width: 150.0,
            movable: false,
            read_only: true,
            place_holder: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_defaults() {
        let defaults = ColumnDefaults::default();
        assert_eq!(defaults.width, 150.0);
        assert!(!defaults.movable);
        assert!(defaults.read_only);
        assert_eq!(defaults.place_holder, "");
    }

    #[test]
    fn test_partial_json_keeps_remaining_defaults() {
        let defaults: ColumnDefaults =
            serde_json::from_str(r#"{ "width": 90, "place_holder": "Insert value" }"#).unwrap();

        assert_eq!(defaults.width, 90.0);
        assert_eq!(defaults.place_holder, "Insert value");
        assert!(!defaults.movable);
        assert!(defaults.read_only);
    }
}
