//! Volunteer Hub catalog: record model, data-file loading, pagination math,
//! and per-request view state.
//!
//! This crate is pure data plumbing shared by the renderer and the server:
//! - Opportunity records and their ids
//! - Loading a JSON data file into an immutable catalog
//! - Pagination over the record sequence (9 per page, 3x3 grid)
//! - View state derived from URL query parameters
//!
//! Nothing here touches the network, and the catalog never changes after
//! load.

pub mod catalog;
pub mod error;
pub mod model;
pub mod pagination;
pub mod view;

pub use catalog::{load, Catalog, LoadReport, SkippedRecord};
pub use error::{CatalogError, Result};
pub use model::{Opportunity, OpportunityId};
pub use pagination::{clamp_page, paginate, total_pages, Page, PAGE_SIZE};
pub use view::ViewState;
