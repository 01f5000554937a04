pub mod blank_items;
pub mod mockups;
pub mod products;
