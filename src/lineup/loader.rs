//! Match catalog loading utilities
//!
//! Provides functions to load a catalog from a file or use the embedded one.

use super::catalog::{CatalogError, MatchCatalog};
use super::embedded::MATCHES_JSON;
use std::fs;
use std::path::Path;

/// Name that selects the bundled catalog instead of a file path
pub const EMBEDDED_SOURCE: &str = "embedded";

/// Load the catalog compiled into the binary
///
/// # Errors
///
/// Returns a `CatalogError` only if the bundled data is malformed.
///
/// # Examples
/// ```
/// use lineup_wordle::lineup::loader::embedded_catalog;
///
/// let catalog = embedded_catalog().unwrap();
/// assert!(catalog.find(1).is_some());
/// ```
pub fn embedded_catalog() -> Result<MatchCatalog, CatalogError> {
    let catalog = MatchCatalog::from_json(MATCHES_JSON)?;
    log::debug!("loaded {} embedded matches", catalog.len());
    Ok(catalog)
}

/// Load a catalog from a JSON file
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be read, or a parse or
/// validation error for its contents.
///
/// # Examples
/// ```no_run
/// use lineup_wordle::lineup::loader::load_from_file;
///
/// let catalog = load_from_file("data/matches.json").unwrap();
/// println!("Loaded {} matches", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<MatchCatalog, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = MatchCatalog::from_json(&content)?;
    log::info!("loaded {} matches from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Resolve a `--catalog` argument: "embedded" or a path to a JSON file
///
/// # Errors
///
/// Propagates errors from [`embedded_catalog`] or [`load_from_file`].
pub fn load_catalog(source: &str) -> Result<MatchCatalog, CatalogError> {
    if source == EMBEDDED_SOURCE {
        embedded_catalog()
    } else {
        load_from_file(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lineup::{Formation, PositionId};

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = embedded_catalog().unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.first().match_id, 1);
    }

    #[test]
    fn embedded_matches_have_expected_formations() {
        let catalog = embedded_catalog().unwrap();
        assert_eq!(catalog.find(1).unwrap().formation, Formation::FourThreeThree);
        assert_eq!(catalog.find(2).unwrap().formation, Formation::FourThreeOneTwo);
        assert_eq!(catalog.find(3).unwrap().formation, Formation::FourFourTwo);
    }

    #[test]
    fn embedded_names_are_guessable() {
        let catalog = embedded_catalog().unwrap();
        for m in catalog.all() {
            for p in &m.lineup {
                assert!(
                    p.name().chars().all(crate::core::is_name_char),
                    "{} has characters a player cannot type",
                    p.name()
                );
            }
        }
    }

    #[test]
    fn modric_plays_right_center_mid() {
        let catalog = embedded_catalog().unwrap();
        let real = catalog.find(1).unwrap();
        assert_eq!(real.player_at(PositionId::Rcm).unwrap().name(), "MODRIC");
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_from_file("definitely/not/here.json");
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn load_catalog_embedded_keyword() {
        assert_eq!(load_catalog(EMBEDDED_SOURCE).unwrap().len(), 3);
    }
}
