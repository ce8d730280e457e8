//! Stateless render widgets
//!
//! Widgets receive everything they need through a `ViewContext` and render
//! into a buffer; they hold no state between frames.

pub mod catalog_row;
pub mod collection_grid;

pub use catalog_row::CatalogRow;
pub use collection_grid::CollectionGrid;
