//! Search module.
//!
//! Contains the catalog query, the title filter it applies, and count labels.

mod filter;
mod label;
mod query;

pub use filter::TitleFilter;
pub use label::CountLabel;
pub use query::{CatalogQuery, CatalogStatus, CatalogViewState, LoadTicket};
