//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and store
//! logic to improve reuse and testability.

pub mod comment_tree;
pub mod confirm;
pub mod dark_mode;
pub mod storage;
