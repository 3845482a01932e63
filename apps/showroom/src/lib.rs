//! # Showroom Library
//!
//! This library exposes the Showroom modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;

// Re-export showroom_core for convenience
pub use showroom_core;
