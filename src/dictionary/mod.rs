//! Dictionary file access
//!
//! Two independent passes over the same file: the selector draws the answer,
//! the store holds the words used for membership checks during play.

pub mod selector;
pub mod store;

pub use selector::pick_answer;
pub use store::Dictionary;
