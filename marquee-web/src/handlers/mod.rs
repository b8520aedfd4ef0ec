//! HTTP request handlers organized by functionality

pub mod api;
pub mod htmx;
pub mod pages;

pub use api::health;
pub use htmx::{SearchParams, TabParams, search, switch_tab};
pub use pages::index_page;
