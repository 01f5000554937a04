//! Size catalogue and per-size SKU entries.

use serde::{Deserialize, Serialize};

use crate::sku::generate_random_sku;

/// Length of the random part of a size SKU.
pub const SIZE_SKU_LEN: usize = 6;

/// The fixed set of sizes a blank item can be offered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeName {
    Small,
    Medium,
    Large,
    #[serde(rename = "XL")]
    Xl,
    #[serde(rename = "XXL")]
    Xxl,
    #[serde(rename = "XXXL")]
    Xxxl,
}

impl SizeName {
    /// All sizes in display order.
    pub const ALL: [SizeName; 6] = [
        SizeName::Small,
        SizeName::Medium,
        SizeName::Large,
        SizeName::Xl,
        SizeName::Xxl,
        SizeName::Xxxl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SizeName::Small => "Small",
            SizeName::Medium => "Medium",
            SizeName::Large => "Large",
            SizeName::Xl => "XL",
            SizeName::Xxl => "XXL",
            SizeName::Xxxl => "XXXL",
        }
    }

    /// Prefix used for this size's SKU, e.g. `"s-"` for `Small`.
    pub fn sku_prefix(self) -> String {
        let initial = self
            .as_str()
            .chars()
            .next()
            .map(|c| c.to_ascii_lowercase())
            .unwrap_or_default();
        format!("{initial}-")
    }
}

/// A confirmed size with its own randomly generated SKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeEntry {
    pub name: SizeName,
    pub sku: String,
}

impl SizeEntry {
    pub fn new(name: SizeName) -> Self {
        Self {
            name,
            sku: generate_random_sku(&name.sku_prefix(), SIZE_SKU_LEN),
        }
    }
}

/// Build fresh entries for a confirmed size selection, in selection order.
pub fn build_entries(selected: &[SizeName]) -> Vec<SizeEntry> {
    selected.iter().copied().map(SizeEntry::new).collect()
}
