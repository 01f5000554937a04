//! HTTP client for the Dynamic Mockups catalog.
//!
//! Only the catalog listing is used: each mockup's identifier and its smart
//! objects. Rendering and image upload stay with the provider.

pub mod api;

pub use api::{MockupsApi, MockupsApiError};
