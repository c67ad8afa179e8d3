//! HTTP route handlers, one module per area

pub mod admin;
pub mod games;
pub mod narration;
pub mod sessions;
pub mod statistics;
