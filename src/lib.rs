//! postbook - Terminal post manager
//!
//! A small command-line utility that keeps short text posts keyed by title
//! and mirrors them to a JSON document on disk.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PostError;
