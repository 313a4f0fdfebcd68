use std::fmt;
use std::str::FromStr;

use super::Cell;
use crate::error::LifeError;

/// Birth/survival table applied to every cell on each tick
pub trait Rule: Send + Sync {
    /// Rulestring in B/S notation
    fn name(&self) -> String;

    /// Next state of a cell given its live neighbor count
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell;
}

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> String {
        "B3/S23".to_owned()
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        current.evolve(neighbors)
    }
}

/// Any outer-totalistic Moore rule, e.g. `B36/S23` (HighLife)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LifeLikeRule {
    birth: [bool; 9],
    survive: [bool; 9],
}

impl LifeLikeRule {
    pub fn conway() -> Self {
        let mut birth = [false; 9];
        let mut survive = [false; 9];
        birth[3] = true;
        survive[2] = true;
        survive[3] = true;
        Self { birth, survive }
    }
}

impl Rule for LifeLikeRule {
    fn name(&self) -> String {
        self.to_string()
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        let n = usize::from(neighbors.min(8));
        let table = if current.is_alive() { &self.survive } else { &self.birth };
        Cell::from(table[n])
    }
}

impl FromStr for LifeLikeRule {
    type Err = LifeError;

    /// Parses `B<digits>/S<digits>`, case-insensitive, in either order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LifeError::InvalidRule(s.to_owned());
        let (left, right) = s.trim().split_once('/').ok_or_else(invalid)?;

        let mut birth = None;
        let mut survive = None;
        for part in [left, right] {
            let mut chars = part.chars();
            let slot = match chars.next().map(|c| c.to_ascii_uppercase()) {
                Some('B') => &mut birth,
                Some('S') => &mut survive,
                _ => return Err(invalid()),
            };
            if slot.is_some() {
                return Err(invalid());
            }
            let mut table = [false; 9];
            for c in chars {
                let n = c.to_digit(10).filter(|&n| n <= 8).ok_or_else(invalid)?;
                table[n as usize] = true;
            }
            *slot = Some(table);
        }

        Ok(Self {
            birth: birth.ok_or_else(invalid)?,
            survive: survive.ok_or_else(invalid)?,
        })
    }
}

impl fmt::Display for LifeLikeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |table: &[bool; 9]| -> String {
            (0..9)
                .filter(|&n| table[n])
                .map(|n| char::from(b'0' + n as u8))
                .collect()
        };
        write!(f, "B{}/S{}", digits(&self.birth), digits(&self.survive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conway_rules() {
        let rule = ConwayRule;

        // Underpopulation
        assert_eq!(rule.evolve(Cell::Alive, 0), Cell::Dead);
        assert_eq!(rule.evolve(Cell::Alive, 1), Cell::Dead);

        // Survival
        assert_eq!(rule.evolve(Cell::Alive, 2), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Alive, 3), Cell::Alive);

        // Overpopulation
        assert_eq!(rule.evolve(Cell::Alive, 4), Cell::Dead);

        // Reproduction
        assert_eq!(rule.evolve(Cell::Dead, 3), Cell::Alive);
    }

    #[test]
    fn test_parsed_conway_matches_builtin() {
        let parsed: LifeLikeRule = "B3/S23".parse().unwrap();
        assert_eq!(parsed, LifeLikeRule::conway());
        for n in 0..=8 {
            for cell in [Cell::Dead, Cell::Alive] {
                assert_eq!(parsed.evolve(cell, n), ConwayRule.evolve(cell, n));
            }
        }
    }

    #[test]
    fn test_highlife_reproduction() {
        let rule: LifeLikeRule = "b36/s23".parse().unwrap();
        assert_eq!(rule.evolve(Cell::Dead, 6), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Dead, 3), Cell::Alive);
        assert_eq!(rule.evolve(Cell::Alive, 6), Cell::Dead);
        assert_eq!(rule.name(), "B36/S23");
    }

    #[test]
    fn test_survival_first_and_empty_sets() {
        let seeds: LifeLikeRule = "S/B2".parse().unwrap();
        assert_eq!(seeds.to_string(), "B2/S");
        assert_eq!(seeds.evolve(Cell::Alive, 2), Cell::Dead);
        assert_eq!(seeds.evolve(Cell::Dead, 2), Cell::Alive);
    }

    #[test]
    fn test_rejects_malformed_rulestrings() {
        for bad in ["", "B3S23", "B9/S23", "B3/B23", "X3/S23", "B3/S2x"] {
            assert!(
                matches!(bad.parse::<LifeLikeRule>(), Err(LifeError::InvalidRule(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
