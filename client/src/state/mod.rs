//! Shared client state stores provided through Leptos context.

pub mod session;
pub mod theme;
