//! Matches command
//!
//! Summarises the catalog for listing.

use crate::lineup::{Formation, MatchCatalog};

/// One catalog row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub match_id: u32,
    pub date: String,
    pub title: String,
    pub formation: Formation,
    pub players: usize,
}

/// Summaries for every match, in catalog order
#[must_use]
pub fn list_matches(catalog: &MatchCatalog) -> Vec<MatchSummary> {
    catalog
        .all()
        .iter()
        .map(|m| MatchSummary {
            match_id: m.match_id,
            date: m.date.clone(),
            title: m.title(),
            formation: m.formation,
            players: m.lineup.len(),
        })
        .collect()
}
