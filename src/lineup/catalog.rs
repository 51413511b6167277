//! Match reference data and the catalog that holds it

use super::formation::{Formation, PositionId};
use crate::core::is_name_char;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// A player as shown once a position is revealed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub nationality: String,
    pub kit_number: u8,
    pub age: u8,
}

/// A player together with the slot they filled in the match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionPlayer {
    #[serde(flatten)]
    pub player: Player,
    pub position_id: PositionId,
}

impl SolutionPlayer {
    /// The hidden name for this slot
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.player.name
    }

    /// Length of the hidden name in characters
    #[must_use]
    pub fn name_len(&self) -> usize {
        self.player.name.chars().count()
    }
}

/// One playable match: the fixture and its starting eleven
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSolution {
    pub match_id: u32,
    pub date: String,
    pub formation: Formation,
    pub team: String,
    pub opponent: String,
    pub lineup: Vec<SolutionPlayer>,
}

impl MatchSolution {
    /// The player who filled `position`, if the lineup has that slot
    #[must_use]
    pub fn player_at(&self, position: PositionId) -> Option<&SolutionPlayer> {
        self.lineup.iter().find(|p| p.position_id == position)
    }

    /// Slots present in the lineup, in lineup order
    pub fn position_ids(&self) -> impl Iterator<Item = PositionId> + '_ {
        self.lineup.iter().map(|p| p.position_id)
    }

    /// "Team vs Opponent"
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} vs {}", self.team, self.opponent)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for player in &self.lineup {
            let position = player.position_id;
            if !self.formation.contains(position) {
                return Err(CatalogError::UnexpectedPosition {
                    match_id: self.match_id,
                    position,
                    formation: self.formation,
                });
            }
            if !seen.insert(position) {
                return Err(CatalogError::DuplicatePosition {
                    match_id: self.match_id,
                    position,
                });
            }
            if player.player.name.trim().is_empty() {
                return Err(CatalogError::EmptyName {
                    match_id: self.match_id,
                    position,
                });
            }
            if let Some(ch) = player.name().chars().find(|&c| !is_name_char(c)) {
                return Err(CatalogError::UntypeableName {
                    match_id: self.match_id,
                    position,
                    ch,
                });
            }
        }

        if let Some(position) = self.formation.position_ids().find(|id| !seen.contains(id)) {
            return Err(CatalogError::MissingPosition {
                match_id: self.match_id,
                position,
            });
        }

        Ok(())
    }
}

/// Error type for catalog loading and validation
#[derive(Debug)]
pub enum CatalogError {
    Io { path: PathBuf, source: io::Error },
    Parse(serde_json::Error),
    Empty,
    DuplicateMatch(u32),
    DuplicatePosition { match_id: u32, position: PositionId },
    MissingPosition { match_id: u32, position: PositionId },
    UnexpectedPosition {
        match_id: u32,
        position: PositionId,
        formation: Formation,
    },
    EmptyName { match_id: u32, position: PositionId },
    UntypeableName {
        match_id: u32,
        position: PositionId,
        ch: char,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read {}: {source}", path.display())
            }
            Self::Parse(e) => write!(f, "Invalid match data: {e}"),
            Self::Empty => write!(f, "Match catalog contains no matches"),
            Self::DuplicateMatch(id) => write!(f, "Match {id} appears more than once"),
            Self::DuplicatePosition { match_id, position } => {
                write!(f, "Match {match_id} fills {position} twice")
            }
            Self::MissingPosition { match_id, position } => {
                write!(f, "Match {match_id} has no player at {position}")
            }
            Self::UnexpectedPosition {
                match_id,
                position,
                formation,
            } => write!(
                f,
                "Match {match_id} places a player at {position}, which {formation} does not have"
            ),
            Self::EmptyName { match_id, position } => {
                write!(f, "Match {match_id} has an empty name at {position}")
            }
            Self::UntypeableName {
                match_id,
                position,
                ch,
            } => write!(
                f,
                "Match {match_id} has a name at {position} containing '{ch}', which cannot be typed as a guess"
            ),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Read-only collection of playable matches
///
/// Always holds at least one match; ids are unique and every lineup fills
/// its formation exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCatalog {
    matches: Vec<MatchSolution>,
}

impl MatchCatalog {
    /// Build a catalog, validating every match
    ///
    /// # Errors
    /// Returns `CatalogError` if the list is empty, a match id repeats, a
    /// lineup does not fill its formation exactly once per slot, or a name
    /// holds a character a guess may not contain.
    pub fn new(matches: Vec<MatchSolution>) -> Result<Self, CatalogError> {
        if matches.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut ids = HashSet::new();
        for m in &matches {
            if !ids.insert(m.match_id) {
                return Err(CatalogError::DuplicateMatch(m.match_id));
            }
            m.validate()?;
        }

        Ok(Self { matches })
    }

    /// Parse a JSON array of matches
    ///
    /// # Errors
    /// Returns `CatalogError::Parse` for malformed JSON, or any validation error
    /// from [`MatchCatalog::new`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let matches: Vec<MatchSolution> = serde_json::from_str(json)?;
        Self::new(matches)
    }

    #[must_use]
    pub fn find(&self, match_id: u32) -> Option<&MatchSolution> {
        self.matches.iter().find(|m| m.match_id == match_id)
    }

    #[must_use]
    pub fn all(&self) -> &[MatchSolution] {
        &self.matches
    }

    /// The default match
    #[must_use]
    pub fn first(&self) -> &MatchSolution {
        &self.matches[0]
    }

    /// The match after `match_id` in catalog order, wrapping around
    #[must_use]
    pub fn next_after(&self, match_id: u32) -> &MatchSolution {
        let index = self
            .matches
            .iter()
            .position(|m| m.match_id == match_id)
            .map_or(0, |i| (i + 1) % self.matches.len());
        &self.matches[index]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Every distinct player name in the catalog, sorted
    #[must_use]
    pub fn name_pool(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .matches
            .iter()
            .flat_map(|m| m.lineup.iter().map(|p| p.name().to_ascii_uppercase()))
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: u32, name: &str, position_id: PositionId) -> SolutionPlayer {
        SolutionPlayer {
            player: Player {
                id,
                name: name.to_string(),
                nationality: "Italy".to_string(),
                kit_number: id as u8,
                age: 27,
            },
            position_id,
        }
    }

    fn full_match(match_id: u32) -> MatchSolution {
        let lineup = Formation::FourFourTwo
            .position_ids()
            .enumerate()
            .map(|(i, id)| {
                let name = format!("PLAYER {}", char::from(b'A' + i as u8));
                player(i as u32 + 1, &name, id)
            })
            .collect();
        MatchSolution {
            match_id,
            date: "1999-05-26".to_string(),
            formation: Formation::FourFourTwo,
            team: "Home".to_string(),
            opponent: "Away".to_string(),
            lineup,
        }
    }

    #[test]
    fn valid_catalog_lookups() {
        let catalog = MatchCatalog::new(vec![full_match(1), full_match(7)]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.first().match_id, 1);
        assert_eq!(catalog.find(7).map(|m| m.match_id), Some(7));
        assert!(catalog.find(3).is_none());
        assert_eq!(catalog.next_after(1).match_id, 7);
        assert_eq!(catalog.next_after(7).match_id, 1);
        assert_eq!(catalog.next_after(99).match_id, 1);
    }

    #[test]
    fn empty_catalog_rejected() {
        assert!(matches!(MatchCatalog::new(Vec::new()), Err(CatalogError::Empty)));
    }

    #[test]
    fn duplicate_match_ids_rejected() {
        let result = MatchCatalog::new(vec![full_match(4), full_match(4)]);
        assert!(matches!(result, Err(CatalogError::DuplicateMatch(4))));
    }

    #[test]
    fn duplicate_position_rejected() {
        let mut m = full_match(1);
        m.lineup[1].position_id = m.lineup[0].position_id;
        assert!(matches!(
            MatchCatalog::new(vec![m]),
            Err(CatalogError::DuplicatePosition { match_id: 1, .. })
        ));
    }

    #[test]
    fn missing_position_rejected() {
        let mut m = full_match(1);
        let removed = m.lineup.pop().unwrap().position_id;
        match MatchCatalog::new(vec![m]) {
            Err(CatalogError::MissingPosition { position, .. }) => assert_eq!(position, removed),
            other => panic!("expected MissingPosition, got {other:?}"),
        }
    }

    #[test]
    fn position_outside_formation_rejected() {
        let mut m = full_match(1);
        m.lineup[0].position_id = PositionId::Cdm;
        assert!(matches!(
            MatchCatalog::new(vec![m]),
            Err(CatalogError::UnexpectedPosition {
                position: PositionId::Cdm,
                ..
            })
        ));
    }

    #[test]
    fn blank_name_rejected() {
        let mut m = full_match(1);
        m.lineup[3].player.name = "  ".to_string();
        assert!(matches!(
            MatchCatalog::new(vec![m]),
            Err(CatalogError::EmptyName { .. })
        ));
    }

    #[test]
    fn names_must_be_typeable() {
        let mut accented = full_match(1);
        if let Some(gk) = accented.lineup.iter_mut().find(|p| p.position_id == PositionId::Gk) {
            gk.player.name = "MÜLLER".to_string();
        }
        match MatchCatalog::new(vec![accented]) {
            Err(CatalogError::UntypeableName { match_id, position, ch }) => {
                assert_eq!(match_id, 1);
                assert_eq!(position, PositionId::Gk);
                assert_eq!(ch, 'Ü');
            }
            other => panic!("expected UntypeableName, got {other:?}"),
        }

        let mut numbered = full_match(2);
        numbered.lineup[5].player.name = "KANE9".to_string();
        assert!(matches!(
            MatchCatalog::new(vec![numbered]),
            Err(CatalogError::UntypeableName { match_id: 2, ch: '9', .. })
        ));

        let mut punctuated = full_match(3);
        punctuated.lineup[2].player.name = "O'SHEA-SMITH JR.".to_string();
        assert!(MatchCatalog::new(vec![punctuated]).is_ok());
    }

    #[test]
    fn match_helpers() {
        let m = full_match(2);
        assert_eq!(m.title(), "Home vs Away");
        assert_eq!(m.position_ids().count(), 11);
        let gk = m.player_at(PositionId::Gk).unwrap();
        assert_eq!(gk.position_id, PositionId::Gk);
        assert!(m.player_at(PositionId::St).is_none());
    }

    #[test]
    fn json_uses_camel_case_and_flattened_player() {
        let json = r#"{"id": 8, "name": "Modric", "nationality": "Croatia",
                       "kitNumber": 10, "age": 36, "positionId": "RCM"}"#;
        let p: SolutionPlayer = serde_json::from_str(json).unwrap();
        assert_eq!(p.name(), "Modric");
        assert_eq!(p.name_len(), 6);
        assert_eq!(p.player.kit_number, 10);
        assert_eq!(p.position_id, PositionId::Rcm);
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(
            MatchCatalog::from_json("[{\"matchId\": 1}]"),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            MatchCatalog::from_json("[]"),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn name_pool_is_sorted_and_unique() {
        let catalog = MatchCatalog::new(vec![full_match(1), full_match(2)]).unwrap();
        let pool = catalog.name_pool();
        assert_eq!(pool.len(), 11);
        assert!(pool.windows(2).all(|w| w[0] < w[1]));
    }
}
