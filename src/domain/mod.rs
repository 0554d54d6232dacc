//! Domain layer - Posts and the in-memory store

pub mod post;
pub mod store;

pub use post::Post;
pub use store::PostStore;
