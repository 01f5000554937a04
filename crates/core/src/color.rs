//! Fixed color table for blank items.
//!
//! Colors are stored on a product as hex strings only. The table below is the
//! single source of truth for both directions of the lookup (name -> hex when
//! the operator confirms a selection, hex -> name when building a SKU).

use serde::Serialize;

/// Hex value used for any color name missing from [`COLOR_TABLE`].
pub const DEFAULT_HEX: &str = "#FFFFFF";

/// Selectable colors, in display order.
pub const COLOR_TABLE: &[(&str, &str)] = &[
    ("Black", "#000000"),
    ("White", "#FFFFFF"),
    ("Navy", "#000080"),
    ("Grey", "#808080"),
    ("Red", "#FF0000"),
    ("Blue", "#0000FF"),
    ("Green", "#008000"),
    ("Yellow", "#FFFF00"),
    ("Purple", "#800080"),
];

/// A named color as offered to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSwatch {
    pub name: &'static str,
    pub hex: &'static str,
}

/// All selectable colors as swatches.
pub fn swatches() -> Vec<ColorSwatch> {
    COLOR_TABLE
        .iter()
        .map(|&(name, hex)| ColorSwatch { name, hex })
        .collect()
}

/// Resolve a color name to its hex value, defaulting to white.
pub fn hex_for_name(name: &str) -> &'static str {
    COLOR_TABLE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, hex)| *hex)
        .unwrap_or(DEFAULT_HEX)
}

/// Reverse lookup: the first color name whose hex equals `hex`.
pub fn name_for_hex(hex: &str) -> Option<&'static str> {
    COLOR_TABLE
        .iter()
        .find(|(_, h)| *h == hex)
        .map(|(name, _)| *name)
}

/// Resolve a confirmed color selection into the stored hex list.
pub fn resolve_selection<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names
        .iter()
        .map(|n| hex_for_name(n.as_ref()).to_string())
        .collect()
}
