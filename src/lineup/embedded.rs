//! Embedded match catalog
//!
//! Match data compiled into the binary.

/// Bundled matches as JSON (3 finals)
pub const MATCHES_JSON: &str = include_str!("../../data/matches.json");
