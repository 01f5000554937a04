//! Domain logic for blank product templates.
//!
//! Pure, framework-free building blocks: the color and size tables, SKU
//! generation, the mockup catalog, draft transitions and submission
//! assembly. The traits for the two external collaborators (mockup source
//! and product store) live here so the core has no I/O dependencies.

pub mod color;
pub mod draft;
pub mod error;
pub mod mockup;
pub mod size;
pub mod sku;
pub mod submission;
pub mod types;
