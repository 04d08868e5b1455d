//! Networking modules for the blog REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds requests and unwraps responses, `transport` is the seam that
//! actually moves bytes (gloo-net in the browser), `types` defines the wire
//! schema, and `admin_comments` tolerates the loosely shaped admin payload.

pub mod admin_comments;
pub mod api;
pub mod transport;
pub mod types;
