//! Agent capabilities — tool catalog and per-session enable/disable state.

pub mod capabilities;
pub mod config;
pub mod error;
