//! SKU generation for blank items and their size variants.
//!
//! Product SKUs have the shape `{NAME}-{COLORS}-{SIZE_COUNT}-{RANDOM}` where
//! the color and size segments are omitted when empty:
//!
//! ```
//! use prodgen_core::sku::generate_product_sku;
//!
//! assert_eq!(generate_product_sku("", &[], &[]), "");
//! assert!(generate_product_sku("Red Shirt", &[], &[]).starts_with("RED-"));
//! ```
//!
//! Uniqueness is probabilistic only; no collision check is made.

use rand::Rng;

use crate::color;
use crate::size::SizeEntry;

/// Characters used for every random SKU segment.
pub const SKU_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of characters kept from the item name.
pub const NAME_PART_LEN: usize = 3;

/// Length of the random suffix on product SKUs.
pub const PRODUCT_SUFFIX_LEN: usize = 4;

/// Draw `length` characters uniformly from [`SKU_CHARSET`].
pub fn random_segment<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| SKU_CHARSET[rng.random_range(0..SKU_CHARSET.len())] as char)
        .collect()
}

/// Generate a random SKU: `prefix` followed by `length` random characters.
pub fn generate_random_sku(prefix: &str, length: usize) -> String {
    let mut sku = String::with_capacity(prefix.len() + length);
    sku.push_str(prefix);
    sku.push_str(&random_segment(&mut rand::rng(), length));
    sku
}

/// Generate a product SKU from the item name, color hexes and sizes.
pub fn generate_product_sku(item_name: &str, colors: &[String], sizes: &[SizeEntry]) -> String {
    generate_product_sku_with(&mut rand::rng(), item_name, colors, sizes)
}

/// [`generate_product_sku`] with an explicit random source.
pub fn generate_product_sku_with<R: Rng + ?Sized>(
    rng: &mut R,
    item_name: &str,
    colors: &[String],
    sizes: &[SizeEntry],
) -> String {
    if item_name.is_empty() {
        return String::new();
    }

    let name_part: String = item_name
        .replace(' ', "")
        .to_uppercase()
        .chars()
        .take(NAME_PART_LEN)
        .collect();

    let mut sku = name_part;
    sku.push('-');

    let color_part: String = colors
        .iter()
        .filter_map(|hex| color::name_for_hex(hex))
        .filter_map(|name| name.chars().next())
        .collect();
    if !color_part.is_empty() {
        sku.push_str(&color_part);
        sku.push('-');
    }

    if !sizes.is_empty() {
        sku.push_str(&format!("{}-", sizes.len()));
    }

    sku.push_str(&random_segment(rng, PRODUCT_SUFFIX_LEN));
    sku
}
