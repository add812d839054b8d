//! Card title text handling.
//!
//! Decklists are typed by hand, so titles arrive with typos, stray
//! uniqueness markers, both faces of two-sided cards, and a dozen spellings
//! of the "(V)" suffix. This module turns them into comparable forms.

pub mod corrections;
pub mod normalize;

pub use corrections::{Rewrite, RENAMED_CARDS};
pub use normalize::{collapse_whitespace, comparable_string, comparison_key, converge, display_title};
