//! Draft state for a blank item and the transitions that keep it consistent.
//!
//! Every transition consumes the draft and returns the next one. The SKU is
//! recomputed whenever the item name, sizes, colors or mockup selection
//! change, and `mockup_id` only ever comes from looking the selection up in
//! the catalog.

use serde::{Deserialize, Serialize};

use crate::color;
use crate::mockup::MockupCatalog;
use crate::size::{self, SizeEntry, SizeName};
use crate::sku::generate_product_sku;

/// Working record for a blank item being entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftProduct {
    /// Display text of the selected mockup option; empty when none.
    pub selected_mockup: String,
    pub item_name: String,
    pub sku: String,
    pub sizes: Vec<SizeEntry>,
    /// Hex values, one per confirmed color.
    pub colors: Vec<String>,
    pub mockup_id: String,
    /// Free-text size, stored when no sizes were confirmed.
    pub size_name: Option<String>,
    /// Free-text color, stored when no colors were confirmed.
    pub color_name: Option<String>,
}

impl DraftProduct {
    /// The mockup selection changed to `selection`.
    pub fn select_mockup(mut self, selection: &str, catalog: &MockupCatalog) -> Self {
        if selection.is_empty() {
            self.mockup_id.clear();
            self.item_name.clear();
        } else {
            self.mockup_id = catalog.id_for(selection).to_string();
            self.item_name = item_name_from_selection(selection).to_string();
        }
        self.selected_mockup = selection.to_string();
        self.refresh_sku()
    }

    /// The operator edited the item name directly.
    ///
    /// The mockup selection is left alone, so name and selection may diverge.
    pub fn edit_item_name(mut self, item_name: &str) -> Self {
        self.item_name = item_name.to_string();
        self.refresh_sku()
    }

    /// A size selection was confirmed; replaces all previous sizes.
    pub fn confirm_sizes(mut self, selected: &[SizeName]) -> Self {
        self.sizes = size::build_entries(selected);
        self.refresh_sku()
    }

    /// A color selection was confirmed; replaces all previous colors.
    pub fn confirm_colors<S: AsRef<str>>(mut self, selected: &[S]) -> Self {
        self.colors = color::resolve_selection(selected);
        self.refresh_sku()
    }

    /// Set the free-text size and color used when the lists are empty.
    pub fn set_legacy_fields(mut self, size_name: Option<String>, color_name: Option<String>) -> Self {
        self.size_name = size_name;
        self.color_name = color_name;
        self
    }

    /// Discard everything; used after a successful save.
    pub fn reset(self) -> Self {
        Self::default()
    }

    fn refresh_sku(mut self) -> Self {
        self.sku = generate_product_sku(&self.item_name, &self.colors, &self.sizes);
        self
    }
}

/// The first smart object name of a display text (text before the first comma).
pub fn item_name_from_selection(selection: &str) -> &str {
    selection.split(',').next().unwrap_or(selection)
}
