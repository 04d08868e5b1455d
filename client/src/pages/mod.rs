//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped loading and form state and delegates
//! everything else to the stores in `app::AppContext`. Input checks live in
//! plain functions next to the page so they can be tested without a DOM.

pub mod admin;
pub mod home;
pub mod login;
pub mod my_posts;
pub mod post_detail;
pub mod post_editor;
pub mod register;
