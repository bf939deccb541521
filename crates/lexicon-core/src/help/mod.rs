//! # Lexicon Core Help
//!
//! Splits titled groups of lines into fixed-size pages and renders them in
//! the library's help layout.
pub mod error;
pub mod page;
pub mod view;

pub use error::HelpError;
pub use page::{paginate, total_pages, HelpGroup, HelpPage};
pub use view::HelpView;

// Test module declaration
#[cfg(test)]
mod tests;
