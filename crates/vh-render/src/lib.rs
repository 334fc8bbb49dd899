//! HTML view renderer for the Volunteer Hub catalog.
//!
//! Renders three self-contained pages from catalog data:
//!
//! - the paginated 3x3 card grid (list view)
//! - the single-record detail view
//! - the not-found view for unknown ids
//!
//! All record-sourced text is HTML-escaped on its way into markup; author
//! content is never interpreted. Pages carry their own inline stylesheet, so
//! no external assets are fetched.
//!
//! # Example
//!
//! ```
//! use vh_catalog::{paginate, Catalog, PAGE_SIZE};
//! use vh_render::{PageGenerator, RenderConfig};
//!
//! let catalog = Catalog::empty();
//! let generator = PageGenerator::new(RenderConfig::default());
//! let page = paginate(catalog.records(), 1, PAGE_SIZE);
//! let html = generator.render_list(&page, None);
//! assert!(html.contains("<!DOCTYPE html>"));
//! ```

pub mod config;
pub mod generator;
pub mod text;

pub use config::{RenderConfig, Theme};
pub use generator::PageGenerator;
pub use text::{escape_html, excerpt, EXCERPT_LEN, EXCERPT_MARKER};
