//! Application layer - Use cases and orchestration

pub mod post_service;

pub use post_service::{LoadStatus, PostService};
