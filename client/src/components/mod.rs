//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and shared widgets while reading and writing
//! the stores held in `app::AppContext`.

pub mod avatar_upload;
pub mod nav_bar;
pub mod post_card;
pub mod route_guard;
