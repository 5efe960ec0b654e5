//! Shared helpers.

pub mod mime;
pub mod slug;
