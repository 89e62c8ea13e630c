//! Application layer: the view controller orchestrating repository calls
//! and global UI state.

pub mod catalog_controller;

pub use catalog_controller::{CatalogController, CatalogState};
