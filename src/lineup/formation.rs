//! Formations and the position slots they define
//!
//! Slots are laid out on a 6×5 pitch grid. Rows run from `A` (attack) to `F`
//! (goal), columns from `1` (left) to `5` (right).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of grid rows on the pitch (A-F)
pub const PITCH_ROWS: u8 = 6;
/// Number of grid columns on the pitch (1-5)
pub const PITCH_COLS: u8 = 5;

/// A named role in a formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionId {
    Gk,
    Rwb,
    Rb,
    Rcb,
    Cb,
    Lcb,
    Lb,
    Lwb,
    Rdm,
    Cdm,
    Ldm,
    Rm,
    Rcm,
    Cm,
    Lcm,
    Lm,
    Ram,
    Cam,
    Lam,
    Rw,
    Rs,
    St,
    Ls,
    Lw,
}

impl PositionId {
    pub const ALL: [Self; 24] = [
        Self::Gk,
        Self::Rwb,
        Self::Rb,
        Self::Rcb,
        Self::Cb,
        Self::Lcb,
        Self::Lb,
        Self::Lwb,
        Self::Rdm,
        Self::Cdm,
        Self::Ldm,
        Self::Rm,
        Self::Rcm,
        Self::Cm,
        Self::Lcm,
        Self::Lm,
        Self::Ram,
        Self::Cam,
        Self::Lam,
        Self::Rw,
        Self::Rs,
        Self::St,
        Self::Ls,
        Self::Lw,
    ];

    /// Short code, e.g. "RCB"
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Gk => "GK",
            Self::Rwb => "RWB",
            Self::Rb => "RB",
            Self::Rcb => "RCB",
            Self::Cb => "CB",
            Self::Lcb => "LCB",
            Self::Lb => "LB",
            Self::Lwb => "LWB",
            Self::Rdm => "RDM",
            Self::Cdm => "CDM",
            Self::Ldm => "LDM",
            Self::Rm => "RM",
            Self::Rcm => "RCM",
            Self::Cm => "CM",
            Self::Lcm => "LCM",
            Self::Lm => "LM",
            Self::Ram => "RAM",
            Self::Cam => "CAM",
            Self::Lam => "LAM",
            Self::Rw => "RW",
            Self::Rs => "RS",
            Self::St => "ST",
            Self::Ls => "LS",
            Self::Lw => "LW",
        }
    }

    /// Human readable role, e.g. "Right Center Back"
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Gk => "Goalkeeper",
            Self::Rwb => "Right Wing Back",
            Self::Rb => "Right Back",
            Self::Rcb => "Right Center Back",
            Self::Cb => "Center Back",
            Self::Lcb => "Left Center Back",
            Self::Lb => "Left Back",
            Self::Lwb => "Left Wing Back",
            Self::Rdm => "Right Defensive Mid",
            Self::Cdm => "Defensive Midfielder",
            Self::Ldm => "Left Defensive Mid",
            Self::Rm => "Right Midfielder",
            Self::Rcm => "Right Center Mid",
            Self::Cm => "Center Midfielder",
            Self::Lcm => "Left Center Mid",
            Self::Lm => "Left Midfielder",
            Self::Ram => "Right Attacking Mid",
            Self::Cam => "Attacking Midfielder",
            Self::Lam => "Left Attacking Mid",
            Self::Rw => "Right Winger",
            Self::Rs => "Right Striker",
            Self::St => "Striker",
            Self::Ls => "Left Striker",
            Self::Lw => "Left Winger",
        }
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PositionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown position: {s}"))
    }
}

/// Where a position sits on the pitch grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionSlot {
    pub id: PositionId,
    pub row: u8,
    pub col: u8,
}

impl PositionSlot {
    const fn at(id: PositionId, row: u8, col: u8) -> Self {
        Self { id, row, col }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.id.display_name()
    }

    /// Grid cell label such as "F3"
    #[must_use]
    pub fn grid_area(&self) -> String {
        format!("{}{}", char::from(b'A' + self.row), self.col + 1)
    }
}

use PositionId::{Cam, Cm, Gk, Lb, Lcb, Lcm, Lm, Ls, Lw, Rb, Rcb, Rcm, Rm, Rs, Rw, St};

const BACK_FOUR: [PositionSlot; 5] = [
    PositionSlot::at(Lb, 4, 0),
    PositionSlot::at(Lcb, 4, 1),
    PositionSlot::at(Rcb, 4, 3),
    PositionSlot::at(Rb, 4, 4),
    PositionSlot::at(Gk, 5, 2),
];

const FOUR_THREE_THREE: [PositionSlot; 11] = [
    PositionSlot::at(Lw, 0, 0),
    PositionSlot::at(St, 0, 2),
    PositionSlot::at(Rw, 0, 4),
    PositionSlot::at(Lcm, 2, 1),
    PositionSlot::at(Cm, 2, 2),
    PositionSlot::at(Rcm, 2, 3),
    BACK_FOUR[0],
    BACK_FOUR[1],
    BACK_FOUR[2],
    BACK_FOUR[3],
    BACK_FOUR[4],
];

const FOUR_THREE_ONE_TWO: [PositionSlot; 11] = [
    PositionSlot::at(Ls, 0, 1),
    PositionSlot::at(Rs, 0, 3),
    PositionSlot::at(Cam, 1, 2),
    PositionSlot::at(Lcm, 2, 1),
    PositionSlot::at(Cm, 2, 2),
    PositionSlot::at(Rcm, 2, 3),
    BACK_FOUR[0],
    BACK_FOUR[1],
    BACK_FOUR[2],
    BACK_FOUR[3],
    BACK_FOUR[4],
];

const FOUR_FOUR_TWO: [PositionSlot; 11] = [
    PositionSlot::at(Ls, 0, 1),
    PositionSlot::at(Rs, 0, 3),
    PositionSlot::at(Lm, 2, 0),
    PositionSlot::at(Lcm, 2, 1),
    PositionSlot::at(Rcm, 2, 3),
    PositionSlot::at(Rm, 2, 4),
    BACK_FOUR[0],
    BACK_FOUR[1],
    BACK_FOUR[2],
    BACK_FOUR[3],
    BACK_FOUR[4],
];

/// A named arrangement of slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formation {
    #[serde(rename = "4-3-3")]
    FourThreeThree,
    #[serde(rename = "4-3-1-2")]
    FourThreeOneTwo,
    #[serde(rename = "4-4-2")]
    FourFourTwo,
}

impl Formation {
    pub const ALL: [Self; 3] = [
        Self::FourThreeThree,
        Self::FourThreeOneTwo,
        Self::FourFourTwo,
    ];

    /// Formation tag, e.g. "4-3-3"
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::FourThreeThree => "4-3-3",
            Self::FourThreeOneTwo => "4-3-1-2",
            Self::FourFourTwo => "4-4-2",
        }
    }

    /// Slots in display order, attack first
    #[must_use]
    pub const fn slots(self) -> &'static [PositionSlot] {
        match self {
            Self::FourThreeThree => &FOUR_THREE_THREE,
            Self::FourThreeOneTwo => &FOUR_THREE_ONE_TWO,
            Self::FourFourTwo => &FOUR_FOUR_TWO,
        }
    }

    #[must_use]
    pub fn slot(self, id: PositionId) -> Option<&'static PositionSlot> {
        self.slots().iter().find(|slot| slot.id == id)
    }

    /// Valid position ids for this formation
    pub fn position_ids(self) -> impl Iterator<Item = PositionId> {
        self.slots().iter().map(|slot| slot.id)
    }

    #[must_use]
    pub fn contains(self, id: PositionId) -> bool {
        self.slot(id).is_some()
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Formation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|formation| formation.tag() == s.trim())
            .ok_or_else(|| format!("Unknown formation: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn position_code_round_trip() {
        for id in PositionId::ALL {
            assert_eq!(id.code().parse::<PositionId>(), Ok(id));
        }
        assert_eq!("rcb".parse::<PositionId>(), Ok(PositionId::Rcb));
        assert!("XX".parse::<PositionId>().is_err());
    }

    #[test]
    fn position_serde_uses_codes() {
        let json = serde_json::to_string(&PositionId::Rwb).unwrap();
        assert_eq!(json, "\"RWB\"");
        let parsed: PositionId = serde_json::from_str("\"CAM\"").unwrap();
        assert_eq!(parsed, PositionId::Cam);
    }

    #[test]
    fn every_formation_has_eleven_unique_slots() {
        for formation in Formation::ALL {
            let ids: HashSet<_> = formation.position_ids().collect();
            assert_eq!(ids.len(), 11, "{formation} should have 11 slots");
            assert!(formation.contains(PositionId::Gk));
        }
    }

    #[test]
    fn slots_fit_on_the_pitch_without_overlap() {
        for formation in Formation::ALL {
            let mut cells = HashSet::new();
            for slot in formation.slots() {
                assert!(slot.row < PITCH_ROWS && slot.col < PITCH_COLS);
                assert!(cells.insert((slot.row, slot.col)), "{formation} overlaps");
            }
        }
    }

    #[test]
    fn grid_area_labels() {
        let gk = Formation::FourThreeThree.slot(PositionId::Gk).unwrap();
        assert_eq!(gk.grid_area(), "F3");
        assert_eq!(gk.name(), "Goalkeeper");
        let lw = Formation::FourThreeThree.slot(PositionId::Lw).unwrap();
        assert_eq!(lw.grid_area(), "A1");
    }

    #[test]
    fn formation_tags() {
        for formation in Formation::ALL {
            assert_eq!(formation.tag().parse::<Formation>(), Ok(formation));
            let json = serde_json::to_string(&formation).unwrap();
            assert_eq!(json, format!("\"{}\"", formation.tag()));
        }
        assert!("3-5-2".parse::<Formation>().is_err());
        assert!(!Formation::FourFourTwo.contains(PositionId::St));
    }
}
