//! Server-rendered HTML fragments for the search page
//!
//! Every string that came from a provider or from the user goes through
//! `html_escape` before it is placed in markup.

pub mod layout;
pub mod results;
pub mod search;

pub use layout::{hero, render_page};
pub use results::result_region;
pub use search::{controls, provider_tabs, search_bar};
