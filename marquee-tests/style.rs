//! Style Enforcement Tests
//!
//! Scans the workspace crates for patterns clippy does not reject on its own.
//!
//! - `production_code` - No panicking shortcuts or dead code allowances outside tests

#[path = "style/production_code.rs"]
mod production_code;
